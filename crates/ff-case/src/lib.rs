//! ff-case: OpenFOAM case handling for foamforce.

pub mod building;
pub mod case_dir;
pub mod config;
pub mod editor;
pub mod error;

pub use building::{BuildingInfo, GeneralInformation, Stories, resolve_floor_count};
pub use case_dir::{
    CONTROL_DICT_PATH, CaseDirectory, CaseReport, REQUIRED_DIRS, validate_case_directory,
};
pub use config::ForceConfig;
pub use editor::{DictionaryEditor, EditSummary};
pub use error::{CaseError, CaseResult};
