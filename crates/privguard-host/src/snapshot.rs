use crate::probe::{
    FolderContents, FolderInfo, Host, HostError, ServiceEntry, StartMode, WritableEntry,
};
use crate::RegValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

fn default_os_major() -> u32 {
    10
}

/// A folder as captured in a snapshot.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FolderSnapshot {
    #[serde(default)]
    pub attributes: Vec<String>,
    pub contents: FolderContents,
}

/// In-memory, JSON-serializable capture of the host facts privguard audits.
///
/// Keys are stored and looked up verbatim: the collector that produced the
/// snapshot is responsible for querying the canonical key spellings.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize, JsonSchema)]
pub struct HostSnapshot {
    /// key -> value name -> value.
    #[serde(default)]
    pub values: BTreeMap<String, BTreeMap<String, RegValue>>,

    #[serde(default)]
    pub domain_joined: bool,

    #[serde(default = "default_os_major")]
    pub os_major: u32,

    #[serde(default)]
    pub services: Vec<ServiceEntry>,

    /// directory -> grants writable by the current principal.
    #[serde(default)]
    pub writable: BTreeMap<String, Vec<WritableEntry>>,

    #[serde(default)]
    pub folders: BTreeMap<String, FolderSnapshot>,

    /// Keys whose reads fail hard, for exercising accessor-failure handling.
    #[serde(default)]
    pub unreachable_keys: Vec<String>,
}

impl HostSnapshot {
    pub fn from_json(input: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(input)
    }

    pub fn to_json(&self) -> String {
        serde_json::to_string_pretty(self).expect("snapshot serialization is infallible")
    }

    fn check_reachable(&self, key: &str) -> Result<(), HostError> {
        if self.unreachable_keys.iter().any(|k| k == key) {
            return Err(HostError::StoreUnreachable {
                key: key.to_string(),
                reason: "marked unreachable in snapshot".to_string(),
            });
        }
        Ok(())
    }
}

impl Host for HostSnapshot {
    fn read_value(&self, key: &str, name: &str) -> Result<Option<RegValue>, HostError> {
        self.check_reachable(key)?;
        Ok(self
            .values
            .get(key)
            .and_then(|names| names.get(name))
            .cloned())
    }

    fn enumerate_values(&self, key: &str) -> Result<Vec<(String, RegValue)>, HostError> {
        self.check_reachable(key)?;
        Ok(self
            .values
            .get(key)
            .map(|names| {
                names
                    .iter()
                    .map(|(n, v)| (n.clone(), v.clone()))
                    .collect()
            })
            .unwrap_or_default())
    }

    fn is_domain_joined(&self) -> bool {
        self.domain_joined
    }

    fn os_major_version(&self) -> u32 {
        self.os_major
    }

    fn services(&self, name: &str) -> Vec<ServiceEntry> {
        self.services
            .iter()
            .filter(|s| s.name.eq_ignore_ascii_case(name))
            .cloned()
            .collect()
    }

    fn writable_paths(&self, dir: &str) -> Vec<WritableEntry> {
        self.writable.get(dir).cloned().unwrap_or_default()
    }

    fn folder_info(&self, path: &str) -> Option<FolderInfo> {
        self.folders.get(path).map(|f| FolderInfo {
            path: path.to_string(),
            attributes: f.attributes.clone(),
        })
    }

    fn list_folder(&self, path: &str) -> FolderContents {
        match self.folders.get(path) {
            Some(f) => f.contents.clone(),
            None => FolderContents::Listed(Vec::new()),
        }
    }
}

/// Fluent builder for snapshots, used by tests and fixtures.
#[derive(Clone, Debug, Default)]
pub struct SnapshotBuilder {
    snapshot: HostSnapshot,
}

impl SnapshotBuilder {
    pub fn new() -> Self {
        Self {
            snapshot: HostSnapshot {
                os_major: default_os_major(),
                ..HostSnapshot::default()
            },
        }
    }

    pub fn value(mut self, key: &str, name: &str, value: impl Into<RegValue>) -> Self {
        self.snapshot
            .values
            .entry(key.to_string())
            .or_default()
            .insert(name.to_string(), value.into());
        self
    }

    pub fn domain_joined(mut self, joined: bool) -> Self {
        self.snapshot.domain_joined = joined;
        self
    }

    pub fn os_major(mut self, major: u32) -> Self {
        self.snapshot.os_major = major;
        self
    }

    pub fn service(mut self, name: &str, display_name: &str, start_mode: StartMode) -> Self {
        self.snapshot.services.push(ServiceEntry {
            name: name.to_string(),
            display_name: display_name.to_string(),
            start_mode,
        });
        self
    }

    pub fn writable_dir(mut self, dir: &str, identity_reference: &str, permissions: &[&str]) -> Self {
        self.snapshot
            .writable
            .entry(dir.to_string())
            .or_default()
            .push(WritableEntry {
                path: dir.to_string(),
                identity_reference: identity_reference.to_string(),
                permissions: permissions.iter().map(|p| p.to_string()).collect(),
            });
        self
    }

    pub fn folder(mut self, path: &str, attributes: &[&str], contents: FolderContents) -> Self {
        self.snapshot.folders.insert(
            path.to_string(),
            FolderSnapshot {
                attributes: attributes.iter().map(|a| a.to_string()).collect(),
                contents,
            },
        );
        self
    }

    pub fn unreachable_key(mut self, key: &str) -> Self {
        self.snapshot.unreachable_keys.push(key.to_string());
        self
    }

    pub fn build(self) -> HostSnapshot {
        self.snapshot
    }
}
