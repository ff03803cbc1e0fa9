//! Validation rules shared by the entities and the command layer

pub mod validation;

pub use validation::{validate_all, validated, Violations};
