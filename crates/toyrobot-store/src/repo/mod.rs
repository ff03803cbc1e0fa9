//! Repositories mapping entities to key-value records
//!
//! Each repository owns one key. Records are the serde form of the entity's
//! attributes, so a stored value can be read back by anything that speaks
//! JSON.

pub mod robot_repository;
pub mod table_repository;

pub use robot_repository::RobotRepository;
pub use table_repository::TableRepository;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::errors::{codec_error, Result};
use crate::kv::Record;

/// Serialize `attributes` into a record
fn to_record<T: Serialize>(op: &str, key: &str, attributes: &T) -> Result<Record> {
    match serde_json::to_value(attributes) {
        Ok(serde_json::Value::Object(record)) => Ok(record),
        Ok(other) => Err(codec_error(
            op,
            key,
            format!("attributes did not serialize to an object: {}", other),
        )),
        Err(e) => Err(codec_error(op, key, e.to_string())),
    }
}

/// Deserialize a record back into attributes
fn from_record<T: DeserializeOwned>(op: &str, key: &str, record: Record) -> Result<T> {
    serde_json::from_value(serde_json::Value::Object(record))
        .map_err(|e| codec_error(op, key, e.to_string()))
}
