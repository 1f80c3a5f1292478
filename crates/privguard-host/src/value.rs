use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A typed registry value as returned by one configuration read.
///
/// Absence is represented by the accessor returning `None`, never by a zero
/// or empty `RegValue`; the two must stay distinguishable through to default
/// substitution.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "type", content = "data", rename_all = "snake_case")]
pub enum RegValue {
    Dword(u32),
    Sz(String),
    ExpandSz(String),
    MultiSz(Vec<String>),
}

impl RegValue {
    pub fn as_dword(&self) -> Option<u32> {
        match self {
            RegValue::Dword(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            RegValue::Sz(s) | RegValue::ExpandSz(s) => Some(s),
            _ => None,
        }
    }

    /// Deterministic string rendering used in observations.
    pub fn render(&self) -> String {
        match self {
            RegValue::Dword(v) => v.to_string(),
            RegValue::Sz(s) | RegValue::ExpandSz(s) => s.clone(),
            RegValue::MultiSz(items) => items.join(", "),
        }
    }
}

impl From<u32> for RegValue {
    fn from(v: u32) -> Self {
        RegValue::Dword(v)
    }
}

impl From<&str> for RegValue {
    fn from(s: &str) -> Self {
        RegValue::Sz(s.to_string())
    }
}
