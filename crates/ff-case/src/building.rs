//! Building information (BIM) documents.

use std::num::NonZeroU32;
use std::path::Path;

use serde::Deserialize;

use crate::error::{CaseError, CaseResult};

/// The subset of a building information document that foamforce reads.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "PascalCase")]
pub struct BuildingInfo {
    pub general_information: GeneralInformation,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct GeneralInformation {
    pub stories: Stories,
}

/// Number of stories as it appears in the document.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum Stories {
    Integer(i64),
    Float(f64),
    Text(String),
}

impl Stories {
    pub fn to_floor_count(&self) -> Result<NonZeroU32, String> {
        let value = match self {
            Self::Integer(n) => *n,
            Self::Float(x) if x.fract() == 0.0 && x.is_finite() => *x as i64,
            Self::Float(x) => return Err(format!("stories must be a whole number, got {}", x)),
            Self::Text(s) => s
                .trim()
                .parse::<i64>()
                .map_err(|_| format!("stories must be an integer, got \"{}\"", s))?,
        };
        u32::try_from(value)
            .ok()
            .and_then(NonZeroU32::new)
            .ok_or_else(|| format!("stories must be a positive integer, got {}", value))
    }
}

impl BuildingInfo {
    pub fn from_json_str(content: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(content)
    }

    pub fn floor_count(&self) -> Result<NonZeroU32, String> {
        self.general_information.stories.to_floor_count()
    }
}

/// Read `GeneralInformation.stories` from the document at `path`.
pub fn resolve_floor_count(path: &Path) -> CaseResult<NonZeroU32> {
    let content = std::fs::read_to_string(path).map_err(|e| CaseError::BuildingInfoRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    let malformed = |reason: String| CaseError::MalformedBuildingInfo {
        path: path.to_path_buf(),
        reason,
    };
    let info = BuildingInfo::from_json_str(&content).map_err(|e| malformed(e.to_string()))?;
    let floors = info.floor_count().map_err(malformed)?;

    tracing::debug!(path = %path.display(), floors = floors.get(), "resolved floor count");
    Ok(floors)
}
