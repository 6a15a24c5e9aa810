use std::path::PathBuf;
use thiserror::Error;

pub type FfResult<T> = Result<T, FfError>;

#[derive(Error, Debug)]
pub enum FfError {
    #[error("Unknown unit: {name}")]
    UnknownUnit { name: String },

    #[error("Unit {name} is a {actual} unit, expected {expected}")]
    WrongDimension {
        name: String,
        expected: crate::units::Dimension,
        actual: crate::units::Dimension,
    },

    #[error("Invalid argument: {what}")]
    InvalidArg { what: &'static str },

    #[error("Failed to append to log file: {path}")]
    LogWrite {
        path: PathBuf,
        source: std::io::Error,
    },
}
