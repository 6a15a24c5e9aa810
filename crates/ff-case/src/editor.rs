//! Read-modify-write of a case's control dictionary.

use std::fs;
use std::path::{Path, PathBuf};

use ff_core::RunLog;
use ff_dict::scan::find_block;
use ff_dict::{
    ControlDict, DictError, FUNCTIONS_KEYWORD, ForceFunction, InsertStrategy, Insertion,
    brace_balance, count_stanzas, functions_anchors, insert_force_function,
};

use crate::case_dir::CaseDirectory;
use crate::error::{CaseError, CaseResult};

/// Result of one edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditSummary {
    pub control_dict: PathBuf,
    pub strategy: InsertStrategy,
    pub insertion: Insertion,
    /// Stanzas with the function object's name that were already present.
    pub existing_stanzas: usize,
    /// Lines starting with `functions`; more than one is ambiguous.
    pub functions_anchors: usize,
}

/// Adds a force function object to the control dictionary of one case.
#[derive(Debug, Clone)]
pub struct DictionaryEditor {
    case_dir: PathBuf,
    strategy: InsertStrategy,
    check_case: bool,
}

impl DictionaryEditor {
    pub fn new(case_dir: impl Into<PathBuf>) -> Self {
        Self {
            case_dir: case_dir.into(),
            strategy: InsertStrategy::default(),
            check_case: true,
        }
    }

    pub fn with_strategy(mut self, strategy: InsertStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Whether the case layout is validated before reading (on by default).
    pub fn with_case_check(mut self, enabled: bool) -> Self {
        self.check_case = enabled;
        self
    }

    pub fn control_dict_path(&self) -> PathBuf {
        CaseDirectory::unchecked(&self.case_dir).control_dict_path()
    }

    /// Line of the `functions` keyword the current strategy will insert under.
    fn target_line(&self, dict: &ControlDict) -> CaseResult<Option<usize>> {
        Ok(match self.strategy {
            InsertStrategy::Legacy => functions_anchors(dict.lines()).first().copied(),
            InsertStrategy::Structural => {
                find_block(dict.lines(), FUNCTIONS_KEYWORD)?.map(|span| span.keyword_line)
            }
        })
    }

    /// Edit `dict` in memory.
    pub fn edit(
        &self,
        dict: &mut ControlDict,
        force: &ForceFunction,
        log: &mut RunLog,
    ) -> CaseResult<EditSummary> {
        let anchors = functions_anchors(dict.lines());
        if anchors.len() > 1 {
            let lines: Vec<String> = anchors.iter().map(|i| (i + 1).to_string()).collect();
            let chosen = match self.target_line(dict)? {
                Some(line) => format!("using line {}", line + 1),
                None => "none is a top-level block".to_string(),
            };
            log.show_warning(&format!(
                "{} lines start with 'functions' (lines {}); {}",
                anchors.len(),
                lines.join(", "),
                chosen
            ))?;
        }

        let existing = count_stanzas(dict.lines(), &force.name);
        if existing > 0 {
            log.show_warning(&format!(
                "control dictionary already contains {} '{}' stanza(s); appending another",
                existing, force.name
            ))?;
        }

        let before = brace_balance(dict.lines());
        if !before.is_balanced() {
            log.show_warning(&format!(
                "control dictionary braces are unbalanced before editing ({} open, {} close)",
                before.opens, before.closes
            ))?;
        }

        let insertion = insert_force_function(dict, force, self.strategy)?;

        let after = brace_balance(dict.lines());
        if after.depth() != before.depth() {
            return Err(DictError::BraceImbalance {
                before: before.depth(),
                after: after.depth(),
            }
            .into());
        }

        if insertion.synthesized_functions {
            log.log_msg("No functions block found; created one at the end of the file")?;
        }
        log.log_msg(&format!(
            "Inserted '{}' with {} bins at line {}",
            force.name,
            force.floors(),
            insertion.index + 1
        ))?;

        Ok(EditSummary {
            control_dict: self.control_dict_path(),
            strategy: self.strategy,
            insertion,
            existing_stanzas: existing,
            functions_anchors: anchors.len(),
        })
    }

    /// Validate, read and edit, without writing. Returns the edited dictionary.
    pub fn preview(
        &self,
        force: &ForceFunction,
        log: &mut RunLog,
    ) -> CaseResult<(ControlDict, EditSummary)> {
        let case = if self.check_case {
            CaseDirectory::open(&self.case_dir)?
        } else {
            CaseDirectory::unchecked(&self.case_dir)
        };

        let path = case.control_dict_path();
        log.log_msg(&format!("Reading {}", path.display()))?;
        let mut dict = read_control_dict(&path)?;
        let summary = self.edit(&mut dict, force, log)?;
        Ok((dict, summary))
    }

    /// Validate, read, edit and rewrite the control dictionary.
    pub fn apply(&self, force: &ForceFunction, log: &mut RunLog) -> CaseResult<EditSummary> {
        let (dict, summary) = self.preview(force, log)?;
        write_atomic(&summary.control_dict, &dict.to_text())?;
        log.log_msg(&format!("Wrote {}", summary.control_dict.display()))?;
        Ok(summary)
    }
}

pub fn read_control_dict(path: &Path) -> CaseResult<ControlDict> {
    let text = fs::read_to_string(path).map_err(|e| CaseError::MissingInput {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(ControlDict::parse(&text))
}

fn temp_path(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    path.with_file_name(format!(".{}.foamforce.tmp", name))
}

/// Write `text` next to `path`, then rename over it.
pub fn write_atomic(path: &Path, text: &str) -> CaseResult<()> {
    let tmp = temp_path(path);
    let result = fs::write(&tmp, text).and_then(|_| fs::rename(&tmp, path));
    if let Err(source) = result {
        let _ = fs::remove_file(&tmp);
        return Err(CaseError::WriteFailed {
            path: path.to_path_buf(),
            source,
        });
    }
    Ok(())
}
