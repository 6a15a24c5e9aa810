//! Error types for case handling.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum CaseError {
    #[error("Failed to read control dictionary: {path}")]
    MissingInput {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to write control dictionary: {path}")]
    WriteFailed {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Invalid OpenFOAM case directory {path}: missing {}", .missing.join(", "))]
    InvalidCase { path: PathBuf, missing: Vec<String> },

    #[error("Failed to read building information file: {path}")]
    BuildingInfoRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Malformed building information in {path}: {reason}")]
    MalformedBuildingInfo { path: PathBuf, reason: String },

    #[error("Invalid force configuration in {path}: {reason}")]
    Config { path: PathBuf, reason: String },

    #[error("Control dictionary error: {0}")]
    Dict(#[from] ff_dict::DictError),

    #[error(transparent)]
    Core(#[from] ff_core::FfError),
}

pub type CaseResult<T> = Result<T, CaseError>;
