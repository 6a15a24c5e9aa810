use thiserror::Error;

pub type DictResult<T> = Result<T, DictError>;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DictError {
    #[error("Block '{name}' starting at line {line} has no matching brace")]
    UnterminatedBlock { name: String, line: usize },

    #[error("Block '{name}' is opened and closed on line {line}; cannot insert between its braces")]
    InlineBlock { name: String, line: usize },

    #[error("Block '{name}' has entries on the line of its opening brace (line {line}); cannot insert after the brace")]
    ContentAfterBrace { name: String, line: usize },

    #[error("Brace balance changed by the edit (depth {before} before, {after} after)")]
    BraceImbalance { before: i64, after: i64 },

    #[error("Index out of bounds: {what} (index={index}, len={len})")]
    IndexOob {
        what: &'static str,
        index: usize,
        len: usize,
    },

    #[error("Unknown insert strategy: {0}")]
    UnknownStrategy(String),
}
