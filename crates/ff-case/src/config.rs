//! Force function object settings.
//!
//! Every field has a default, so a YAML file only needs the values it
//! changes. Lengths in `cofr` are given in `length_unit` and converted to
//! metres when the function object is built.

use std::num::NonZeroU32;
use std::path::Path;

use ff_core::units;
use ff_dict::ForceFunction;
use ff_dict::force::DEFAULT_FUNCTION_NAME;
use serde::{Deserialize, Serialize};

use crate::error::{CaseError, CaseResult};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct ForceConfig {
    pub function_name: String,
    pub libs: String,
    pub write_control: String,
    pub write_interval: u32,
    pub rho: String,
    pub log: bool,
    pub rho_inf: f64,
    pub cofr: [f64; 3],
    pub length_unit: String,
    pub bin_direction: [f64; 3],
    pub cumulative: bool,
}

impl Default for ForceConfig {
    fn default() -> Self {
        Self {
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
            libs: "libforces.so".to_string(),
            write_control: "timeStep".to_string(),
            write_interval: 1,
            rho: "rhoInf".to_string(),
            log: true,
            rho_inf: 1.0,
            cofr: [0.0, 0.0, 0.0],
            length_unit: "m".to_string(),
            bin_direction: [0.0, 0.0, 1.0],
            cumulative: false,
        }
    }
}

impl ForceConfig {
    pub fn load_yaml(path: &Path) -> CaseResult<Self> {
        let invalid = |reason: String| CaseError::Config {
            path: path.to_path_buf(),
            reason,
        };
        let content = std::fs::read_to_string(path).map_err(|e| invalid(e.to_string()))?;
        let config: ForceConfig =
            serde_yaml::from_str(&content).map_err(|e| invalid(e.to_string()))?;
        config.validate().map_err(invalid)?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), String> {
        let name = self.function_name.as_str();
        if name.is_empty() || name.contains(|c: char| c.is_whitespace() || "{};\"".contains(c)) {
            return Err(format!("function_name '{}' is not a valid keyword", name));
        }
        if self.write_interval == 0 {
            return Err("write_interval must be at least 1".to_string());
        }
        if !(self.rho_inf.is_finite() && self.rho_inf > 0.0) {
            return Err(format!("rho_inf must be positive, got {}", self.rho_inf));
        }
        if self.cofr.iter().any(|c| !c.is_finite()) {
            return Err("cofr components must be finite".to_string());
        }
        if self.bin_direction.iter().all(|c| *c == 0.0)
            || self.bin_direction.iter().any(|c| !c.is_finite())
        {
            return Err("bin_direction must be a finite, non-zero vector".to_string());
        }
        units::require(&self.length_unit, units::Dimension::Length)
            .map_err(|e| e.to_string())?;
        Ok(())
    }

    /// Build the function object for `floors` bins over `patches`.
    pub fn build(&self, floors: NonZeroU32, patches: &str) -> CaseResult<ForceFunction> {
        let mut cofr = [0.0; 3];
        for (out, value) in cofr.iter_mut().zip(self.cofr) {
            *out = units::length_to_m(value, &self.length_unit)?;
        }

        let mut force = ForceFunction::new(floors, patches);
        force.name = self.function_name.clone();
        force.libs = self.libs.clone();
        force.write_control = self.write_control.clone();
        force.write_interval = self.write_interval;
        force.rho = self.rho.clone();
        force.log = self.log;
        force.rho_inf = self.rho_inf;
        force.cofr = cofr;
        force.bin.direction = self.bin_direction;
        force.bin.cumulative = self.cumulative;
        Ok(force)
    }
}
