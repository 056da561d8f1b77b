use std::collections::BTreeMap;

use sha2::{Digest, Sha256};

/// Sign upload parameters: `k=v` pairs sorted by key and joined with `&`,
/// the API secret appended, SHA-256, lowercase hex.
///
/// Callers pass only the signed parameters; `file`, `api_key`,
/// `resource_type` and `signature` itself are never part of the payload.
pub fn sign_params(params: &BTreeMap<&str, String>, api_secret: &str) -> String {
    let payload = params
        .iter()
        .filter(|(_, value)| !value.is_empty())
        .map(|(key, value)| format!("{}={}", key, value))
        .collect::<Vec<_>>()
        .join("&");

    let mut hasher = Sha256::new();
    hasher.update(payload.as_bytes());
    hasher.update(api_secret.as_bytes());
    hex::encode(hasher.finalize())
}
