//! The force function object inserted into the `functions` block.

use std::num::NonZeroU32;

use crate::stanza::Stanza;

pub const DEFAULT_FUNCTION_NAME: &str = "buildingsForces";
pub const DEFAULT_PATCHES: &str = "Building";
pub const BIN_DATA_NAME: &str = "binData";

/// Spatial binning of the force output, one bin per floor.
#[derive(Debug, Clone, PartialEq)]
pub struct BinData {
    pub n_bin: NonZeroU32,
    pub direction: [f64; 3],
    pub cumulative: bool,
}

impl BinData {
    pub fn new(n_bin: NonZeroU32) -> Self {
        Self {
            n_bin,
            direction: [0.0, 0.0, 1.0],
            cumulative: false,
        }
    }

    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("nBin", self.n_bin.to_string()),
            ("direction", vector(self.direction)),
            ("cumulative", yes_no(self.cumulative).to_string()),
        ]
    }

    pub fn to_stanza(&self) -> Stanza {
        self.entries()
            .into_iter()
            .fold(Stanza::new(BIN_DATA_NAME), |s, (k, v)| s.with_entry(k, v))
    }
}

/// A `forces` function object with per-floor bins.
#[derive(Debug, Clone, PartialEq)]
pub struct ForceFunction {
    pub name: String,
    pub libs: String,
    pub write_control: String,
    pub write_interval: u32,
    /// Patch name or list, written verbatim inside parentheses.
    pub patches: String,
    pub rho: String,
    pub log: bool,
    pub rho_inf: f64,
    /// Centre of rotation in metres.
    pub cofr: [f64; 3],
    pub bin: BinData,
}

impl ForceFunction {
    pub fn new(floors: NonZeroU32, patches: impl Into<String>) -> Self {
        Self {
            name: DEFAULT_FUNCTION_NAME.to_string(),
            libs: "libforces.so".to_string(),
            write_control: "timeStep".to_string(),
            write_interval: 1,
            patches: patches.into(),
            rho: "rhoInf".to_string(),
            log: true,
            rho_inf: 1.0,
            cofr: [0.0, 0.0, 0.0],
            bin: BinData::new(floors),
        }
    }

    pub fn floors(&self) -> NonZeroU32 {
        self.bin.n_bin
    }

    /// Key/value pairs of the function object, in output order.
    pub fn entries(&self) -> Vec<(&'static str, String)> {
        vec![
            ("type", "forces".to_string()),
            ("libs", format!("(\"{}\")", self.libs)),
            ("writeControl", self.write_control.clone()),
            ("writeInterval", self.write_interval.to_string()),
            ("patches", format!("({})", self.patches)),
            ("rho", self.rho.clone()),
            ("log", self.log.to_string()),
            ("rhoInf", self.rho_inf.to_string()),
            ("CofR", vector(self.cofr)),
        ]
    }

    pub fn to_stanza(&self) -> Stanza {
        self.entries()
            .into_iter()
            .fold(Stanza::new(&self.name), |s, (k, v)| s.with_entry(k, v))
            .with_blank()
            .with_stanza(self.bin.to_stanza())
            .with_blank()
    }

    /// Lines inserted right after the `functions` opening brace.
    ///
    /// A tab-only separator line, the stanza at depth one, and a trailing
    /// blank line.
    pub fn render_block(&self) -> Vec<String> {
        let mut block = vec!["\t\n".to_string()];
        block.extend(self.to_stanza().render_lines(1));
        block.push("\n".to_string());
        block
    }
}

fn vector(v: [f64; 3]) -> String {
    format!("({} {} {})", v[0], v[1], v[2])
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}
