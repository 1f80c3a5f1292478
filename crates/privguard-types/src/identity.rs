use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Canonical identity of one audited configuration fact.
///
/// Rendering rules are intentionally simple and deterministic:
/// - registry values render as `key\name`
/// - registry keys and filesystem paths render verbatim
/// - abstract host facts (domain-join state, service state) use a bare label
#[derive(
    Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(transparent)]
pub struct FactId(String);

impl FactId {
    /// Identity of a single registry value.
    pub fn registry(key: &str, name: &str) -> Self {
        Self(format!(r"{key}\{name}"))
    }

    /// Identity of a whole registry key.
    pub fn key(key: &str) -> Self {
        Self(key.to_string())
    }

    /// Identity of a filesystem path.
    pub fn path(path: &str) -> Self {
        Self(path.to_string())
    }

    /// Identity of an abstract host fact (e.g. `DomainJoined`).
    pub fn label(label: &str) -> Self {
        Self(label.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for FactId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}
