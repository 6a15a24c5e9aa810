//! Scanner-driven insertion of the force stanza.

use std::fmt;
use std::str::FromStr;

use crate::error::{DictError, DictResult};
use crate::force::ForceFunction;
use crate::legacy::insert_legacy;
use crate::lines::ControlDict;
use crate::locate::{FUNCTIONS_KEYWORD, synthesize_functions_block};
use crate::scan::find_block;

/// How the insertion point is found and the stanza is written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InsertStrategy {
    /// Line-prefix anchor plus cursor arithmetic, byte-compatible with the
    /// historical tool.
    Legacy,
    /// Top-level stanza lookup with the brace scanner and a rendered stanza tree.
    #[default]
    Structural,
}

impl fmt::Display for InsertStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Legacy => write!(f, "legacy"),
            Self::Structural => write!(f, "structural"),
        }
    }
}

impl FromStr for InsertStrategy {
    type Err = DictError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "structural" => Ok(Self::Structural),
            _ => Err(DictError::UnknownStrategy(s.to_string())),
        }
    }
}

/// Outcome of a single insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Insertion {
    /// Line index where the force stanza starts.
    pub index: usize,
    /// Lines added in total, including a synthesized `functions` block.
    pub inserted_lines: usize,
    pub synthesized_functions: bool,
}

pub fn insert_force_function(
    dict: &mut ControlDict,
    force: &ForceFunction,
    strategy: InsertStrategy,
) -> DictResult<Insertion> {
    match strategy {
        InsertStrategy::Legacy => insert_legacy(dict, force),
        InsertStrategy::Structural => insert_structural(dict, force),
    }
}

/// Insert the rendered stanza right after the opening brace of the top-level
/// `functions` block, creating the block at the end when there is none.
pub fn insert_structural(dict: &mut ControlDict, force: &ForceFunction) -> DictResult<Insertion> {
    let before = dict.len();
    let span = find_block(dict.lines(), FUNCTIONS_KEYWORD)?;

    let (index, synthesized) = match span {
        Some(span) if span.open_line == span.close_line => {
            return Err(DictError::InlineBlock {
                name: FUNCTIONS_KEYWORD.to_string(),
                line: span.open_line + 1,
            });
        }
        Some(span) if span.content_after_open => {
            return Err(DictError::ContentAfterBrace {
                name: FUNCTIONS_KEYWORD.to_string(),
                line: span.open_line + 1,
            });
        }
        Some(span) => (span.open_line + 1, false),
        None => (synthesize_functions_block(dict, before)?, true),
    };

    dict.insert_all(index, force.render_block())?;
    tracing::debug!(index, synthesized, "inserted {} stanza", force.name);

    Ok(Insertion {
        index,
        inserted_lines: dict.len() - before,
        synthesized_functions: synthesized,
    })
}
