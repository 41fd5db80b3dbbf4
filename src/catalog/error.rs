use std::path::PathBuf;

use rust_decimal::Decimal;
use thiserror::Error;

/// Why a single record was refused.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum InvalidProduct {
    #[error("field `{0}` must not be empty")]
    EmptyField(&'static str),
    #[error("price must not be negative (got {0})")]
    NegativePrice(Decimal),
    #[error("createdAt `{0}` is not a valid date")]
    CreatedAt(String),
}

/// The catalog could not be built. Always fatal at startup.
#[derive(Debug, Error)]
pub enum LoadError {
    #[error("cannot read catalog file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed catalog data: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("invalid product #{index} (id `{id}`): {reason}")]
    Invalid {
        index: usize,
        id: String,
        #[source]
        reason: InvalidProduct,
    },
    #[error("duplicate product id `{0}`")]
    DuplicateId(String),
}
