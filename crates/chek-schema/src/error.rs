//! Errors from checking documents against the CHEK schemas.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SchemaError {
    /// No schema is registered under this name.
    #[error("no CHEK schema named '{0}'")]
    Unknown(String),

    /// The document breaks the schema; one message per violation.
    #[error("document does not match the '{schema}' schema: {}", errors.join("; "))]
    Mismatch { schema: String, errors: Vec<String> },

    /// The registered schema itself could not be compiled.
    #[error("the '{schema}' schema does not compile: {reason}")]
    Compile { schema: String, reason: String },
}
