use super::util;
use crate::policy::CheckPolicy;
use globset::{GlobBuilder, GlobSet, GlobSetBuilder};
use privguard_host::{FolderContents, Host, HostError};
use privguard_types::{ids, FactId, Finding, Observation};
use std::sync::LazyLock;

/// File name patterns worth reporting from the cache: deployment scripts and
/// configuration artifacts that commonly embed credentials.
const INTERESTING_PATTERNS: &[&str] =
    &["*.ini", "*.xml", "*.ps1", "*.vbs", "*.txt", "*.pfx", "*.cer"];

static INTERESTING: LazyLock<GlobSet> = LazyLock::new(|| {
    let mut builder = GlobSetBuilder::new();
    for pattern in INTERESTING_PATTERNS {
        let glob = GlobBuilder::new(pattern)
            .case_insensitive(true)
            .build()
            .expect("static patterns are valid");
        builder.add(glob);
    }
    builder.build().expect("static patterns are valid")
});

/// Informational mode: existence and attributes only, no accessibility probe.
/// The cache is world-readable by design, so mere existence is the exposure.
pub fn run_info(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let observations = match host.folder_info(ids::SCCM_CACHE_FOLDER) {
        None => vec![absent_observation()],
        Some(info) => vec![util::info_observation(
            FactId::path(&info.path),
            &info.attributes.join(", "),
            "The SCCM client cache folder exists and is readable by all local users.",
        )],
    };

    let vulnerable = host.folder_info(ids::SCCM_CACHE_FOLDER).is_some();
    Ok(util::finding(
        ids::CHECK_SCCM_CACHE_FOLDER,
        vulnerable,
        policy,
        observations,
    ))
}

/// Full mode: additionally enumerate the cache and report files matching the
/// interesting patterns. A denied enumeration is a soft failure: the folder
/// is excluded from results, never surfaced as an error.
pub fn run_contents(host: &dyn Host, policy: &CheckPolicy) -> Result<Finding, HostError> {
    let Some(info) = host.folder_info(ids::SCCM_CACHE_FOLDER) else {
        return Ok(util::finding(
            ids::CHECK_SCCM_CACHE_CONTENTS,
            false,
            policy,
            vec![absent_observation()],
        ));
    };

    let observations: Vec<Observation> = match host.list_folder(ids::SCCM_CACHE_FOLDER) {
        FolderContents::Denied => Vec::new(),
        FolderContents::Listed(entries) => entries
            .iter()
            .filter(|e| !e.is_dir && INTERESTING.is_match(&e.name))
            .map(|e| {
                util::info_observation(
                    FactId::path(&format!(r"{}\{}", info.path, e.name)),
                    &e.name,
                    "Deployment artifact that may embed credentials or configuration.",
                )
            })
            .collect(),
    };

    let vulnerable = !observations.is_empty();
    Ok(util::finding(
        ids::CHECK_SCCM_CACHE_CONTENTS,
        vulnerable,
        policy,
        observations,
    ))
}

fn absent_observation() -> Observation {
    util::info_observation(
        FactId::path(ids::SCCM_CACHE_FOLDER),
        "(absent)",
        "The SCCM client cache folder does not exist.",
    )
}
