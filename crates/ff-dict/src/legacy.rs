//! Cursor-arithmetic force dictionary writer.
//!
//! Reproduces the historical output line for line: an empty stanza shell is
//! inserted first, then the cursor steps back over the closing brace and its
//! trailing blank line so the keys land inside the shell. The same is done
//! for the nested `binData` stanza.

use crate::error::{DictError, DictResult};
use crate::force::{BIN_DATA_NAME, ForceFunction};
use crate::lines::ControlDict;
use crate::locate::{find_functions_block, synthesize_functions_block};
use crate::structural::Insertion;

/// Lines between a stanza's closing brace and the cursor after its shell.
const SHELL_TAIL: usize = 2;

/// Insert `force` at `index`; returns the cursor after the last bin key.
pub fn write_force_dictionary(
    dict: &mut ControlDict,
    index: usize,
    force: &ForceFunction,
) -> DictResult<usize> {
    if index > dict.len() {
        return Err(DictError::IndexOob {
            what: "force dictionary insertion index",
            index,
            len: dict.len(),
        });
    }

    let shell = [
        "\t\n".to_string(),
        format!("\t{}\n", force.name),
        "\t{\n".to_string(),
        "\t}\n".to_string(),
        "\n".to_string(),
    ];
    let mut cursor = dict.insert_all(index, shell)? - SHELL_TAIL;

    for (key, value) in force.entries() {
        dict.insert(cursor, format!("\t\t{key}\t{value};\n"))?;
        cursor += 1;
    }

    let bin_shell = [
        "\n".to_string(),
        format!("\t\t{BIN_DATA_NAME}\n"),
        "\t\t{\n".to_string(),
        "\t\t}\n".to_string(),
        "\n".to_string(),
    ];
    cursor = dict.insert_all(cursor, bin_shell)? - SHELL_TAIL;

    for (key, value) in force.bin.entries() {
        dict.insert(cursor, format!("\t\t\t{key}\t{value};\n"))?;
        cursor += 1;
    }

    Ok(cursor)
}

/// Locate by line prefix, synthesize if needed, then write with cursor arithmetic.
pub fn insert_legacy(dict: &mut ControlDict, force: &ForceFunction) -> DictResult<Insertion> {
    let before = dict.len();
    let location = find_functions_block(dict.lines());
    let index = if location.found {
        location.index
    } else {
        synthesize_functions_block(dict, location.index)?
    };
    write_force_dictionary(dict, index, force)?;

    Ok(Insertion {
        index,
        inserted_lines: dict.len() - before,
        synthesized_functions: !location.found,
    })
}
