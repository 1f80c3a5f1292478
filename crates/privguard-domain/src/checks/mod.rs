use crate::policy::CheckPolicy;
use privguard_host::{Host, HostError};
use privguard_types::{ids, Finding};

mod always_install_elevated;
mod driver_coinstallers;
mod hardened_unc_paths;
mod point_and_print;
mod sccm_cache;
mod util;
mod writable_path_dirs;
mod wsus_over_http;

#[cfg(test)]
mod tests;

pub type CheckFn = fn(&dyn Host, &CheckPolicy) -> Result<Finding, HostError>;

static CATALOG: [(&str, CheckFn); 8] = [
    (
        ids::CHECK_ALWAYS_INSTALL_ELEVATED,
        always_install_elevated::run as CheckFn,
    ),
    (ids::CHECK_WSUS_OVER_HTTP, wsus_over_http::run as CheckFn),
    (
        ids::CHECK_HARDENED_UNC_PATHS,
        hardened_unc_paths::run as CheckFn,
    ),
    (
        ids::CHECK_WRITABLE_PATH_DIRS,
        writable_path_dirs::run as CheckFn,
    ),
    (ids::CHECK_POINT_AND_PRINT, point_and_print::run as CheckFn),
    (
        ids::CHECK_DRIVER_COINSTALLERS,
        driver_coinstallers::run as CheckFn,
    ),
    (ids::CHECK_SCCM_CACHE_FOLDER, sccm_cache::run_info as CheckFn),
    (
        ids::CHECK_SCCM_CACHE_CONTENTS,
        sccm_cache::run_contents as CheckFn,
    ),
];

/// The stable catalog of check procedures, keyed by check ID. Checks are
/// mutually independent; only the order *within* a check is significant.
pub fn catalog() -> &'static [(&'static str, CheckFn)] {
    &CATALOG
}
