use super::{
    always_install_elevated, driver_coinstallers, hardened_unc_paths, point_and_print, sccm_cache,
    writable_path_dirs, wsus_over_http,
};
use crate::policy::CheckPolicy;
use crate::test_support::full_config;
use privguard_host::{
    FolderContents, FolderEntry, RecordingHost, SnapshotBuilder, StartMode,
};
use privguard_types::{ids, Severity};

fn policy() -> CheckPolicy {
    CheckPolicy::enabled(Severity::High)
}

// --- installer.always_install_elevated ---

#[test]
fn aie_machine_zero_short_circuits_and_never_reads_user_scope() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED, 0u32)
        .value(ids::KEY_INSTALLER_USER, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .build();
    let recording = RecordingHost::new(&snap);

    let finding = always_install_elevated::run(&recording, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.severity, Severity::None);
    assert_eq!(finding.observations.len(), 1);
    assert_eq!(
        recording.read_count(ids::KEY_INSTALLER_USER, ids::VAL_ALWAYS_INSTALL_ELEVATED),
        0
    );
    assert_eq!(
        recording.read_count(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED),
        1
    );
}

#[test]
fn aie_absent_machine_value_reports_the_default() {
    let snap = SnapshotBuilder::new().build();
    let finding = always_install_elevated::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 1);
    assert!(finding.observations[0].defaulted);
    assert_eq!(finding.observations[0].value, "0");
}

#[test]
fn aie_machine_set_but_user_zero_is_not_vulnerable() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .value(ids::KEY_INSTALLER_USER, ids::VAL_ALWAYS_INSTALL_ELEVATED, 0u32)
        .build();
    let finding = always_install_elevated::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 2);
}

#[test]
fn aie_both_scopes_set_reports_the_base_severity() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .value(ids::KEY_INSTALLER_USER, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .build();
    let finding = always_install_elevated::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.severity, Severity::High);
    assert_eq!(finding.observations.len(), 2);
}

// --- updates.wsus_over_http ---

#[test]
fn wsus_http_server_in_use_with_access_value_absent_is_vulnerable() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_WU_SERVER, "http://a:8530")
        .value(ids::KEY_WINDOWS_UPDATE_AU, ids::VAL_USE_WU_SERVER, 1u32)
        .build();
    let finding = wsus_over_http::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 4);
    assert!(finding.observations[0].description.contains("cleartext HTTP"));
    // DisableWindowsUpdateAccess was absent; its default still gets reported.
    assert!(finding.observations[3].defaulted);
}

#[test]
fn wsus_https_server_downgrades_but_still_reports_four_values() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_WU_SERVER, "https://a:8531")
        .value(ids::KEY_WINDOWS_UPDATE_AU, ids::VAL_USE_WU_SERVER, 1u32)
        .build();
    let finding = wsus_over_http::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 4);
    assert!(finding.observations[0].description.contains("TLS"));
}

#[test]
fn wsus_absent_server_is_not_vulnerable() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_WINDOWS_UPDATE_AU, ids::VAL_USE_WU_SERVER, 1u32)
        .build();
    let finding = wsus_over_http::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 4);
    assert!(finding.observations[0].defaulted);
}

#[test]
fn wsus_unused_server_and_disabled_access_each_downgrade() {
    let unused = SnapshotBuilder::new()
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_WU_SERVER, "http://a:8530")
        .build();
    assert!(!wsus_over_http::run(&unused, &policy()).unwrap().vulnerable);

    let disabled = SnapshotBuilder::new()
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_WU_SERVER, "http://a:8530")
        .value(ids::KEY_WINDOWS_UPDATE_AU, ids::VAL_USE_WU_SERVER, 1u32)
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_DISABLE_WU_ACCESS, 1u32)
        .build();
    assert!(!wsus_over_http::run(&disabled, &policy()).unwrap().vulnerable);
}

// --- network.hardened_unc_paths ---

#[test]
fn unc_not_domain_joined_is_informational() {
    let snap = SnapshotBuilder::new().domain_joined(false).build();
    let finding = hardened_unc_paths::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 1);
    assert!(finding.observations[0].description.contains("not domain-joined"));
}

#[test]
fn unc_v10_with_no_entries_has_zero_observations() {
    let snap = SnapshotBuilder::new().domain_joined(true).os_major(10).build();
    let finding = hardened_unc_paths::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert!(finding.observations.is_empty());
}

#[test]
fn unc_v10_weakened_sysvol_entry_is_vulnerable() {
    let snap = SnapshotBuilder::new()
        .domain_joined(true)
        .os_major(10)
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_SYSVOL,
            "RequireMutualAuthentication=0,RequireIntegrity=1",
        )
        .build();
    let finding = hardened_unc_paths::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 1);
    assert!(
        finding.observations[0]
            .description
            .contains("RequireMutualAuthentication")
    );
}

#[test]
fn unc_v10_hardened_entries_are_not_reported() {
    let snap = SnapshotBuilder::new()
        .domain_joined(true)
        .os_major(10)
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_SYSVOL,
            "RequireMutualAuthentication=1, RequireIntegrity=1",
        )
        .value(
            ids::KEY_HARDENED_PATHS,
            r"\\example.com\share",
            "RequirePrivacy=1",
        )
        .build();
    let finding = hardened_unc_paths::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert!(finding.observations.is_empty());
}

#[test]
fn unc_pre10_missing_sysvol_is_vulnerable_but_netlogon_passes() {
    let snap = SnapshotBuilder::new()
        .domain_joined(true)
        .os_major(6)
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_NETLOGON,
            "RequireMutualAuthentication=1,RequireIntegrity=1",
        )
        .build();
    let finding = hardened_unc_paths::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 2);

    let sysvol = &finding.observations[0];
    assert!(sysvol.identity.as_str().ends_with("SYSVOL"));
    assert_eq!(sysvol.compliant, Some(false));
    assert!(sysvol.description.contains("No hardened path policy"));

    let netlogon = &finding.observations[1];
    assert!(netlogon.identity.as_str().ends_with("NETLOGON"));
    assert_eq!(netlogon.compliant, Some(true));
}

#[test]
fn unc_pre10_requires_integrity_or_privacy_alongside_mutual_auth() {
    let snap = SnapshotBuilder::new()
        .domain_joined(true)
        .os_major(6)
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_SYSVOL,
            "RequireMutualAuthentication=1",
        )
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_NETLOGON,
            "RequireMutualAuthentication=1;RequirePrivacy=1",
        )
        .build();
    let finding = hardened_unc_paths::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations[0].compliant, Some(false));
    assert_eq!(finding.observations[1].compliant, Some(true));
}

// --- environment.writable_path_dirs ---

#[test]
fn path_hijack_lists_every_writable_directory() {
    let snap = SnapshotBuilder::new()
        .value(
            ids::KEY_SESSION_ENVIRONMENT,
            ids::VAL_PATH,
            r"C:\Windows\system32; C:\tools ;;C:\oracle\bin",
        )
        .writable_dir(r"C:\tools", r"BUILTIN\Users", &["WriteData", "AppendData"])
        .writable_dir(r"C:\oracle\bin", "Everyone", &["FullControl"])
        .build();
    let finding = writable_path_dirs::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 2);
    assert_eq!(finding.observations[0].identity.as_str(), r"C:\tools");
    assert_eq!(finding.observations[0].value, "WriteData, AppendData");
    assert!(finding.observations[1].description.contains("Everyone"));
}

#[test]
fn path_hijack_with_no_writable_directories_is_clean() {
    let snap = SnapshotBuilder::new()
        .value(
            ids::KEY_SESSION_ENVIRONMENT,
            ids::VAL_PATH,
            r"C:\Windows\system32;C:\Windows",
        )
        .build();
    let finding = writable_path_dirs::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert!(finding.observations.is_empty());
}

// --- printers.point_and_print ---

fn spooler() -> SnapshotBuilder {
    SnapshotBuilder::new().service(ids::SERVICE_SPOOLER, "Print Spooler", StartMode::Automatic)
}

#[test]
fn pnp_absent_spooler_is_informational() {
    let snap = SnapshotBuilder::new().build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 1);
    assert_eq!(finding.observations[0].value, "absent");
}

#[test]
fn pnp_disabled_spooler_is_informational() {
    let snap = SnapshotBuilder::new()
        .service(ids::SERVICE_SPOOLER, "Print Spooler", StartMode::Disabled)
        .build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations[0].value, "disabled");
}

#[test]
fn pnp_allow_listed_servers_keep_the_host_safe_despite_empty_server_list() {
    let snap = spooler()
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_RESTRICT_DRIVER_INSTALL, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_NO_WARNING_NO_ELEVATION, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_UPDATE_PROMPT_SETTINGS, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_TRUSTED_SERVERS, 1u32)
        .value(
            ids::KEY_PACKAGE_POINT_AND_PRINT,
            ids::VAL_PACKAGE_SERVER_LIST,
            1u32,
        )
        .build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 6);

    // ServerList is empty, so its local flag is non-compliant even though the
    // aggregate verdict is safe.
    let server_list = finding
        .observations
        .iter()
        .find(|o| o.identity.as_str().ends_with(ids::VAL_SERVER_LIST))
        .unwrap();
    assert_eq!(server_list.compliant, Some(false));
}

#[test]
fn pnp_untrusted_servers_flip_the_verdict() {
    let snap = spooler()
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_RESTRICT_DRIVER_INSTALL, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_NO_WARNING_NO_ELEVATION, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_UPDATE_PROMPT_SETTINGS, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_TRUSTED_SERVERS, 0u32)
        .value(
            ids::KEY_PACKAGE_POINT_AND_PRINT,
            ids::VAL_PACKAGE_SERVER_LIST,
            1u32,
        )
        .build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.severity, Severity::High);
}

#[test]
fn pnp_admin_gate_overrides_loose_settings() {
    let snap = spooler()
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_RESTRICT_DRIVER_INSTALL, 1u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_NO_WARNING_NO_ELEVATION, 1u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_UPDATE_PROMPT_SETTINGS, 2u32)
        .build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    // Tree step 1 wins, but the loose items still flag themselves locally.
    assert!(!finding.vulnerable);
    assert_eq!(finding.observations[0].compliant, Some(true));
    assert_eq!(finding.observations[1].compliant, Some(false));
    assert_eq!(finding.observations[2].compliant, Some(false));
}

#[test]
fn pnp_silent_install_path_is_vulnerable() {
    let snap = spooler()
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_RESTRICT_DRIVER_INSTALL, 0u32)
        .value(ids::KEY_POINT_AND_PRINT, ids::VAL_NO_WARNING_NO_ELEVATION, 1u32)
        .build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
}

#[test]
fn pnp_platform_defaults_are_safe() {
    // All six values absent: the restrictive admin-gate default applies.
    let snap = spooler().build();
    let finding = point_and_print::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations.len(), 6);
    assert!(finding.observations.iter().all(|o| o.defaulted));
}

// --- devices.driver_coinstallers ---

#[test]
fn coinstallers_enabled_by_default_is_vulnerable() {
    let snap = SnapshotBuilder::new().build();
    let finding = driver_coinstallers::run(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 1);
    assert!(finding.observations[0].defaulted);
}

#[test]
fn coinstallers_disabled_is_clean() {
    let snap = SnapshotBuilder::new()
        .value(ids::KEY_DEVICE_INSTALLER, ids::VAL_DISABLE_COINSTALLERS, 1u32)
        .build();
    let finding = driver_coinstallers::run(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.severity, Severity::None);
}

// --- sccm.cache_folder / sccm.cache_folder_contents ---

fn cache_with(entries: Vec<FolderEntry>) -> SnapshotBuilder {
    SnapshotBuilder::new().folder(
        ids::SCCM_CACHE_FOLDER,
        &["Directory"],
        FolderContents::Listed(entries),
    )
}

#[test]
fn cache_info_reports_existence_only() {
    let snap = cache_with(vec![FolderEntry {
        name: "install.ps1".to_string(),
        is_dir: false,
    }])
    .build();
    let finding = sccm_cache::run_info(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 1);
    assert_eq!(finding.observations[0].identity.as_str(), ids::SCCM_CACHE_FOLDER);
}

#[test]
fn cache_info_absent_folder_is_clean() {
    let snap = SnapshotBuilder::new().build();
    let finding = sccm_cache::run_info(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert_eq!(finding.observations[0].value, "(absent)");
}

#[test]
fn cache_contents_reports_only_interesting_files() {
    let snap = cache_with(vec![
        FolderEntry { name: "Setup.EXE".to_string(), is_dir: false },
        FolderEntry { name: "deploy.PS1".to_string(), is_dir: false },
        FolderEntry { name: "unattend.xml".to_string(), is_dir: false },
        FolderEntry { name: "nested.ini".to_string(), is_dir: true },
    ])
    .build();
    let finding = sccm_cache::run_contents(&snap, &policy()).unwrap();

    assert!(finding.vulnerable);
    assert_eq!(finding.observations.len(), 2);
    assert!(finding.observations[0].identity.as_str().ends_with("deploy.PS1"));
    assert!(finding.observations[1].identity.as_str().ends_with("unattend.xml"));
}

#[test]
fn cache_contents_denied_enumeration_is_a_soft_failure() {
    let snap = SnapshotBuilder::new()
        .folder(ids::SCCM_CACHE_FOLDER, &["Directory"], FolderContents::Denied)
        .build();
    let finding = sccm_cache::run_contents(&snap, &policy()).unwrap();

    assert!(!finding.vulnerable);
    assert!(finding.observations.is_empty());
}

// --- idempotence across the whole catalog ---

#[test]
fn repeated_audits_of_one_snapshot_are_byte_identical() {
    let snap = spooler()
        .domain_joined(true)
        .os_major(10)
        .value(ids::KEY_INSTALLER_MACHINE, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .value(ids::KEY_INSTALLER_USER, ids::VAL_ALWAYS_INSTALL_ELEVATED, 1u32)
        .value(ids::KEY_WINDOWS_UPDATE, ids::VAL_WU_SERVER, "http://wsus:8530")
        .value(ids::KEY_WINDOWS_UPDATE_AU, ids::VAL_USE_WU_SERVER, 1u32)
        .value(
            ids::KEY_HARDENED_PATHS,
            ids::ENTRY_SYSVOL,
            "RequireMutualAuthentication=0",
        )
        .build();
    let cfg = full_config(Severity::Medium);

    let first = crate::evaluate(&snap, &cfg).unwrap();
    let second = crate::evaluate(&snap, &cfg).unwrap();

    let a = serde_json::to_vec(&first.findings).unwrap();
    let b = serde_json::to_vec(&second.findings).unwrap();
    assert_eq!(a, b);
}
