//! Migration checksums

use sha2::{Digest, Sha256};

/// Hex-encoded SHA-256 of the migration SQL
pub fn compute_checksum(sql: &str) -> String {
    hex::encode(Sha256::digest(sql.as_bytes()))
}

/// True when `sql` still hashes to the checksum recorded at apply time
pub fn matches(sql: &str, recorded: &str) -> bool {
    compute_checksum(sql) == recorded
}
