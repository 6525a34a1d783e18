//! Hashing - SHA-256 over canonical JSON
//!
//! Job hashes identify a render request independent of key order, and
//! double as the seed for decorative randomness.

use serde::Serialize;
use serde_json::{to_string, Value};
use sha2::{Digest, Sha256};

use crate::model::{Crew, TemplateConfig};

/// Compute SHA-256 hash of bytes, return hex string
pub fn sha256_hex(data: &[u8]) -> String {
    hex::encode(Sha256::digest(data))
}

/// Convert to canonical JSON (sorted keys, no whitespace)
pub fn canonical_json<T: Serialize>(value: &T) -> Result<String, serde_json::Error> {
    let v: Value = serde_json::to_value(value)?;
    to_string(&sort_value(&v))
}

fn sort_value(v: &Value) -> Value {
    match v {
        Value::Object(map) => {
            let mut entries: Vec<_> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));
            Value::Object(
                entries
                    .into_iter()
                    .map(|(k, v)| (k.clone(), sort_value(v)))
                    .collect(),
            )
        }
        Value::Array(arr) => Value::Array(arr.iter().map(sort_value).collect()),
        _ => v.clone(),
    }
}

/// job_hash = sha256(template_id + canonical crew + canonical config + engine_version)
pub fn compute_job_hash(
    template_id: &str,
    crew: &Crew,
    config: &TemplateConfig,
    engine_version: &str,
) -> Result<String, serde_json::Error> {
    let combined = format!(
        "{}:{}:{}:{}",
        template_id,
        canonical_json(crew)?,
        canonical_json(config)?,
        engine_version
    );
    Ok(sha256_hex(combined.as_bytes()))
}

/// First eight bytes of a hex digest as a little-endian seed.
pub fn seed_from_hash(hash: &str) -> u64 {
    let mut bytes = [0u8; 8];
    for (slot, pair) in bytes.iter_mut().zip(hash.as_bytes().chunks(2)) {
        *slot = std::str::from_utf8(pair)
            .ok()
            .and_then(|s| u8::from_str_radix(s, 16).ok())
            .unwrap_or(0);
    }
    u64::from_le_bytes(bytes)
}

mod hex {
    pub fn encode(bytes: impl AsRef<[u8]>) -> String {
        bytes.as_ref().iter().map(|b| format!("{:02x}", b)).collect()
    }
}
