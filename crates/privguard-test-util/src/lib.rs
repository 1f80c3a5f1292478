//! Shared test utilities for the privguard workspace.
//!
//! Snapshot fixtures live here (not behind `#[cfg(test)]`) so that both unit
//! tests and the CLI integration tests can build the same hosts.

use privguard_host::{FolderContents, FolderEntry, HostSnapshot, SnapshotBuilder, StartMode};
use privguard_types::ids;
use serde_json::Value;

/// A workstation with every audited setting at its safe, explicit value.
///
/// Not the same as an empty snapshot: the co-installer default is vulnerable,
/// so a clean host has to disable co-installers explicitly.
pub fn clean_workstation() -> HostSnapshot {
    SnapshotBuilder::new()
        .domain_joined(true)
        .os_major(10)
        .service(ids::SERVICE_SPOOLER, "Print Spooler", StartMode::Disabled)
        .value(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED, 0u32)
        .value(ids::KEY_DEVICE_INSTALLER, ids::VAL_DISABLE_COINSTALLERS, 1u32)
        .build()
}

/// A workstation exhibiting several classic escalation paths at once.
pub fn exposed_workstation() -> HostSnapshot {
    SnapshotBuilder::new()
        .domain_joined(true)
        .os_major(10)
        .service(ids::SERVICE_SPOOLER, "Print Spooler", StartMode::Automatic)
        .value(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .value(ids::KEY_INSTALLER_USER, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_WU_SERVER, "http://wsus.corp.local:8530")
        .value(ids::KEY_WINDOWS_UPDATE_AU, ids::VAL_USE_WU_SERVER, 1u32)
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_SYSVOL,
            "RequireMutualAuthentication=0",
        )
        .value(
            ids::KEY_SESSION_ENVIRONMENT,
            ids::VAL_PATH,
            r"C:\Windows\system32;C:\tools",
        )
        .writable_dir(r"C:\tools", r"BUILTIN\Users", &["WriteData", "AppendData"])
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_RESTRICT_DRIVER_INSTALL, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_NO_WARNING_NO_ELEVATION, 1u32)
        .folder(
            ids::SCCM_CACHE_FOLDER,
            &["Directory"],
            FolderContents::Listed(vec![
                FolderEntry {
                    name: "deploy.ps1".to_string(),
                    is_dir: false,
                },
                FolderEntry {
                    name: "payload.bin".to_string(),
                    is_dir: false,
                },
            ]),
        )
        .build()
}

/// Normalize non-deterministic JSON fields for golden-file comparison.
///
/// `tool.version` is replaced only when the *root* object looks like a report
/// envelope (has `schema`, `tool`, `verdict`, and `findings`), so nested
/// payloads that happen to share the shape are left alone. Timestamp keys are
/// normalized at any depth; their placeholder cannot collide with real data.
pub fn normalize_nondeterministic(mut value: Value) -> Value {
    if let Some(obj) = value.as_object_mut() {
        let is_envelope = obj.contains_key("schema")
            && obj.contains_key("tool")
            && obj.contains_key("verdict")
            && obj.contains_key("findings");
        if is_envelope
            && let Some(tool) = obj.get_mut("tool")
            && let Some(tool_obj) = tool.as_object_mut()
            && tool_obj.contains_key("version")
        {
            tool_obj.insert(
                "version".to_string(),
                Value::String("__VERSION__".to_string()),
            );
        }
    }
    normalize_timestamps_recursive(&mut value);
    value
}

fn normalize_timestamps_recursive(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for key in ["started_at", "finished_at"] {
                if map.contains_key(key) {
                    map.insert(key.to_string(), Value::String("__TIMESTAMP__".to_string()));
                }
            }
            for val in map.values_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        Value::Array(arr) => {
            for val in arr.iter_mut() {
                normalize_timestamps_recursive(val);
            }
        }
        _ => {}
    }
}
