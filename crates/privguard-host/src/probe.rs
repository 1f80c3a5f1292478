use crate::RegValue;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Accessor failure: the underlying store is unreachable.
///
/// This is fatal for the audit run; no check can produce a meaningful verdict
/// without configuration access. Recoverable conditions (absent values,
/// denied folder listings) are expressed in-band, never as `HostError`.
#[derive(Debug, Error)]
pub enum HostError {
    #[error("configuration store unreachable at {key}: {reason}")]
    StoreUnreachable { key: String, reason: String },
}

/// Service start mode as recorded in the service control manager.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum StartMode {
    Boot,
    System,
    Automatic,
    Manual,
    Disabled,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ServiceEntry {
    pub name: String,
    pub display_name: String,
    pub start_mode: StartMode,
}

/// One grant that lets the current principal write inside a directory.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct WritableEntry {
    pub path: String,
    /// The principal the grant applies to, e.g. `BUILTIN\Users`.
    pub identity_reference: String,
    /// Access rights carried by the grant, e.g. `WriteData`, `AppendData`.
    pub permissions: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FolderInfo {
    pub path: String,
    pub attributes: Vec<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct FolderEntry {
    pub name: String,
    pub is_dir: bool,
}

/// Result of enumerating a folder. Denied listings are a soft failure: the
/// caller excludes the folder from results instead of surfacing an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "status", content = "entries", rename_all = "lowercase")]
pub enum FolderContents {
    Listed(Vec<FolderEntry>),
    Denied,
}

/// Read-only view of the audited host.
///
/// All methods are safe for concurrent use; checks fan out across workers and
/// share one accessor.
pub trait Host: Sync {
    /// Point lookup of a named value at a named key. `Ok(None)` means the
    /// value does not exist, which is distinct from any zero/empty value.
    fn read_value(&self, key: &str, name: &str) -> Result<Option<RegValue>, HostError>;

    /// Enumerate every value under a key, in stable (name-sorted) order.
    fn enumerate_values(&self, key: &str) -> Result<Vec<(String, RegValue)>, HostError>;

    fn is_domain_joined(&self) -> bool;

    fn os_major_version(&self) -> u32;

    /// Services whose name matches `name` (case-insensitive, exact match).
    fn services(&self, name: &str) -> Vec<ServiceEntry>;

    /// Grants that let the current principal write inside `dir`. Empty when
    /// the directory is not writable or does not exist.
    fn writable_paths(&self, dir: &str) -> Vec<WritableEntry>;

    /// Existence and attributes of a folder, without touching its contents.
    fn folder_info(&self, path: &str) -> Option<FolderInfo>;

    /// Enumerate a folder's direct children.
    fn list_folder(&self, path: &str) -> FolderContents;
}
