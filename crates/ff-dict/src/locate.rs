//! Line-prefix location of the `functions` block and block synthesis.

use crate::error::DictResult;
use crate::lines::ControlDict;

pub const FUNCTIONS_KEYWORD: &str = "functions";

/// Lines appended when a dictionary has no `functions` block.
pub const SYNTHESIZED_FUNCTIONS: [&str; 4] = ["\n", "functions\n", "{\n", "}\n"];

/// Where new function objects go.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FunctionsLocation {
    pub found: bool,
    pub index: usize,
}

/// Find the first line starting with `functions`.
///
/// The keyword is expected to be followed by its opening brace on the next
/// line, so the insertion index is two lines past the keyword. Without a
/// match the index is the end of the dictionary.
pub fn find_functions_block(lines: &[String]) -> FunctionsLocation {
    match lines
        .iter()
        .position(|line| line.starts_with(FUNCTIONS_KEYWORD))
    {
        Some(i) => FunctionsLocation {
            found: true,
            index: i + 2,
        },
        None => FunctionsLocation {
            found: false,
            index: lines.len(),
        },
    }
}

/// Indices of every line starting with `functions`.
pub fn functions_anchors(lines: &[String]) -> Vec<usize> {
    lines
        .iter()
        .enumerate()
        .filter(|(_, line)| line.starts_with(FUNCTIONS_KEYWORD))
        .map(|(i, _)| i)
        .collect()
}

/// Insert an empty `functions` block at `index`.
///
/// Returns the index of the block's closing brace, so that lines inserted
/// there land between the braces.
pub fn synthesize_functions_block(dict: &mut ControlDict, index: usize) -> DictResult<usize> {
    let after = dict.insert_all(index, SYNTHESIZED_FUNCTIONS)?;
    tracing::debug!(index, "synthesized empty functions block");
    Ok(after - 1)
}
