//! Stable identifiers for checks, plus the registry locations each check audits.
//!
//! `check_id` is a dotted namespace. Key and value names are part of the
//! behavioral contract: the accessor must query them bit-exact, so they live
//! here next to the check IDs rather than inline in the check bodies.

// Checks
pub const CHECK_ALWAYS_INSTALL_ELEVATED: &str = "installer.always_install_elevated";
pub const CHECK_WSUS_OVER_HTTP: &str = "updates.wsus_over_http";
pub const CHECK_HARDENED_UNC_PATHS: &str = "network.hardened_unc_paths";
pub const CHECK_WRITABLE_PATH_DIRS: &str = "environment.writable_path_dirs";
pub const CHECK_POINT_AND_PRINT: &str = "printers.point_and_print";
pub const CHECK_DRIVER_COINSTALLERS: &str = "devices.driver_coinstallers";
pub const CHECK_SCCM_CACHE_FOLDER: &str = "sccm.cache_folder";
pub const CHECK_SCCM_CACHE_CONTENTS: &str = "sccm.cache_folder_contents";

// installer.always_install_elevated
pub const KEY_INSTALLER_MACHINE: &str = r"HKLM\SOFTWARE\Policies\Microsoft\Windows\Installer";
pub const KEY_INSTALLER_USER: &str = r"HKCU\SOFTWARE\Policies\Microsoft\Windows\Installer";
pub const VAL_ALWAYS_INSTALL_ELEVATED: &str = "AlwaysInstallElevated";

// updates.wsus_over_http
pub const KEY_WINDOWS_UPDATE: &str = r"HKLM\SOFTWARE\Policies\Microsoft\Windows\WindowsUpdate";
pub const KEY_WINDOWS_UPDATE_AU: &str = r"HKLM\SOFTWARE\Policies\Microsoft\Windows\WindowsUpdate\AU";
pub const VAL_WU_SERVER: &str = "WUServer";
pub const VAL_USE_WU_SERVER: &str = "UseWUServer";
pub const VAL_SET_PROXY_BEHAVIOR: &str = "SetProxyBehaviorForUpdateDetection";
pub const VAL_DISABLE_WU_ACCESS: &str = "DisableWindowsUpdateAccess";

// network.hardened_unc_paths
pub const KEY_HARDENED_PATHS: &str =
    r"HKLM\SOFTWARE\Policies\Microsoft\Windows\NetworkProvider\HardenedPaths";
pub const ENTRY_SYSVOL: &str = r"\\*\SYSVOL";
pub const ENTRY_NETLOGON: &str = r"\\*\NETLOGON";

// environment.writable_path_dirs
pub const KEY_SESSION_ENVIRONMENT: &str =
    r"HKLM\SYSTEM\CurrentControlSet\Control\Session Manager\Environment";
pub const VAL_PATH: &str = "Path";

// printers.point_and_print
pub const KEY_POINT_AND_PRINT: &str =
    r"HKLM\SOFTWARE\Policies\Microsoft\Windows NT\Printers\PointAndPrint";
pub const KEY_PACKAGE_POINT_AND_PRINT: &str =
    r"HKLM\SOFTWARE\Policies\Microsoft\Windows NT\Printers\PackagePointAndPrint";
pub const VAL_RESTRICT_DRIVER_INSTALL: &str = "RestrictDriverInstallationToAdministrators";
pub const VAL_NO_WARNING_NO_ELEVATION: &str = "NoWarningNoElevationOnInstall";
pub const VAL_UPDATE_PROMPT_SETTINGS: &str = "UpdatePromptSettings";
pub const VAL_TRUSTED_SERVERS: &str = "TrustedServers";
pub const VAL_SERVER_LIST: &str = "ServerList";
pub const VAL_PACKAGE_SERVER_LIST: &str = "PackagePointAndPrintServerList";
pub const SERVICE_SPOOLER: &str = "Spooler";

// devices.driver_coinstallers
pub const KEY_DEVICE_INSTALLER: &str =
    r"HKLM\SOFTWARE\Microsoft\Windows\CurrentVersion\Device Installer";
pub const VAL_DISABLE_COINSTALLERS: &str = "DisableCoInstallers";

// sccm.cache_folder / sccm.cache_folder_contents
pub const SCCM_CACHE_FOLDER: &str = r"C:\Windows\ccmcache";
