use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a finding.
///
/// Identity fields:
/// - check_id
/// - verdict
/// - observation identities, in evaluation order
pub fn fingerprint_for_check(check_id: &str, vulnerable: bool, identities: &[&str]) -> String {
    let verdict = if vulnerable { "vulnerable" } else { "ok" };
    let mut parts = vec![check_id, verdict];
    parts.extend_from_slice(identities);
    let canonical = parts.join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
