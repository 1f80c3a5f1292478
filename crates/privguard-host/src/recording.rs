use crate::probe::{FolderContents, FolderInfo, Host, HostError, ServiceEntry, WritableEntry};
use crate::RegValue;
use std::collections::BTreeMap;
use std::sync::Mutex;

/// Wrapper that counts `read_value` calls per `(key, name)`.
///
/// Several checks document that a value must *not* be read on certain
/// branches (the AlwaysInstallElevated user-scope read, for example); tests
/// assert that through this wrapper.
pub struct RecordingHost<'a, H: Host> {
    inner: &'a H,
    reads: Mutex<BTreeMap<(String, String), u32>>,
}

impl<'a, H: Host> RecordingHost<'a, H> {
    pub fn new(inner: &'a H) -> Self {
        Self {
            inner,
            reads: Mutex::new(BTreeMap::new()),
        }
    }

    /// Number of `read_value` calls observed for `(key, name)`.
    pub fn read_count(&self, key: &str, name: &str) -> u32 {
        self.reads
            .lock()
            .expect("read counter lock")
            .get(&(key.to_string(), name.to_string()))
            .copied()
            .unwrap_or(0)
    }
}

impl<H: Host> Host for RecordingHost<'_, H> {
    fn read_value(&self, key: &str, name: &str) -> Result<Option<RegValue>, HostError> {
        *self
            .reads
            .lock()
            .expect("read counter lock")
            .entry((key.to_string(), name.to_string()))
            .or_insert(0) += 1;
        self.inner.read_value(key, name)
    }

    fn enumerate_values(&self, key: &str) -> Result<Vec<(String, RegValue)>, HostError> {
        self.inner.enumerate_values(key)
    }

    fn is_domain_joined(&self) -> bool {
        self.inner.is_domain_joined()
    }

    fn os_major_version(&self) -> u32 {
        self.inner.os_major_version()
    }

    fn services(&self, name: &str) -> Vec<ServiceEntry> {
        self.inner.services(name)
    }

    fn writable_paths(&self, dir: &str) -> Vec<WritableEntry> {
        self.inner.writable_paths(dir)
    }

    fn folder_info(&self, path: &str) -> Option<FolderInfo> {
        self.inner.folder_info(path)
    }

    fn list_folder(&self, path: &str) -> FolderContents {
        self.inner.list_folder(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SnapshotBuilder;

    #[test]
    fn counts_reads_per_value() {
        let snap = SnapshotBuilder::new().value("K", "A", 1u32).build();
        let recording = RecordingHost::new(&snap);

        let _ = recording.read_value("K", "A");
        let _ = recording.read_value("K", "A");
        let _ = recording.read_value("K", "B");

        assert_eq!(recording.read_count("K", "A"), 2);
        assert_eq!(recording.read_count("K", "B"), 1);
        assert_eq!(recording.read_count("K", "C"), 0);
    }
}
