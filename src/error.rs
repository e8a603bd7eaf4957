//! Error taxonomy for taskprep.
//!
//! Two fatal classes: the input could not be parsed at all (`ParseError`),
//! or it parsed but is not shaped like a task definition (`SchemaError`).
//! Both abort before anything is written.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Schema(#[from] SchemaError),

    #[error("failed to write {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// The input file could not be read or is not valid JSON.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("{} is not valid JSON: {source}", path.display())]
    Json {
        path: PathBuf,
        source: serde_json::Error,
    },
}

/// The document parsed but does not have the expected structure.
#[derive(Error, Debug)]
pub enum SchemaError {
    #[error("document does not match the task definition shape: {0}")]
    Descriptor(serde_json::Error),

    #[error("task definition has no container definitions")]
    NoContainerDefinitions,
}

pub type Result<T> = std::result::Result<T, Error>;
