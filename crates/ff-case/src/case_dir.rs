//! OpenFOAM case directory checks.

use std::path::{Path, PathBuf};

use crate::error::{CaseError, CaseResult};

pub const REQUIRED_DIRS: [&str; 3] = ["0", "constant", "system"];
pub const CONTROL_DICT_PATH: &str = "system/controlDict";

/// What a case directory has and lacks.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseReport {
    pub root: PathBuf,
    pub is_dir: bool,
    /// Required entries that are absent, relative to `root`.
    pub missing: Vec<String>,
}

impl CaseReport {
    pub fn is_valid(&self) -> bool {
        self.is_dir && self.missing.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaseDirectory {
    root: PathBuf,
}

impl CaseDirectory {
    /// Probe `path` without touching anything.
    pub fn inspect(path: &Path) -> CaseReport {
        if !path.is_dir() {
            return CaseReport {
                root: path.to_path_buf(),
                is_dir: false,
                missing: vec![".".to_string()],
            };
        }

        let mut missing: Vec<String> = REQUIRED_DIRS
            .iter()
            .filter(|d| !path.join(d).is_dir())
            .map(|d| d.to_string())
            .collect();
        if !path.join(CONTROL_DICT_PATH).is_file() {
            missing.push(CONTROL_DICT_PATH.to_string());
        }

        CaseReport {
            root: path.to_path_buf(),
            is_dir: true,
            missing,
        }
    }

    /// Open a case directory, failing if any required entry is missing.
    pub fn open(path: &Path) -> CaseResult<Self> {
        let report = Self::inspect(path);
        if !report.is_valid() {
            return Err(CaseError::InvalidCase {
                path: report.root,
                missing: report.missing,
            });
        }
        Ok(Self::unchecked(path))
    }

    /// Use `path` as a case root without checking its layout.
    pub fn unchecked(path: &Path) -> Self {
        Self {
            root: path.to_path_buf(),
        }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn control_dict_path(&self) -> PathBuf {
        self.root.join(CONTROL_DICT_PATH)
    }
}

/// True if `path` holds `0`, `constant`, `system` and `system/controlDict`.
pub fn validate_case_directory(path: &Path) -> bool {
    CaseDirectory::inspect(path).is_valid()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn scratch(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(name);
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn complete_case_is_valid() {
        let dir = scratch("ff_case_dir_complete");
        for d in REQUIRED_DIRS {
            fs::create_dir_all(dir.join(d)).unwrap();
        }
        fs::write(dir.join(CONTROL_DICT_PATH), "").unwrap();

        assert!(validate_case_directory(&dir));
        let case = CaseDirectory::open(&dir).unwrap();
        assert_eq!(case.control_dict_path(), dir.join("system").join("controlDict"));
    }

    #[test]
    fn reports_each_missing_entry() {
        let dir = scratch("ff_case_dir_partial");
        fs::create_dir_all(dir.join("system")).unwrap();

        let report = CaseDirectory::inspect(&dir);
        assert!(report.is_dir);
        assert_eq!(report.missing, ["0", "constant", "system/controlDict"]);
        assert!(!validate_case_directory(&dir));
        assert!(matches!(
            CaseDirectory::open(&dir),
            Err(CaseError::InvalidCase { .. })
        ));
    }

    #[test]
    fn file_named_like_a_directory_does_not_count() {
        let dir = scratch("ff_case_dir_file_zero");
        fs::write(dir.join("0"), "").unwrap();
        fs::create_dir_all(dir.join("constant")).unwrap();
        fs::create_dir_all(dir.join("system")).unwrap();
        fs::write(dir.join(CONTROL_DICT_PATH), "").unwrap();

        assert_eq!(CaseDirectory::inspect(&dir).missing, ["0"]);
    }

    #[test]
    fn nonexistent_path_is_not_a_case() {
        let dir = std::env::temp_dir().join("ff_case_dir_does_not_exist");
        let _ = fs::remove_dir_all(&dir);
        let report = CaseDirectory::inspect(&dir);
        assert!(!report.is_dir);
        assert!(!report.is_valid());
    }
}
