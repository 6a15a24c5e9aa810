//! ff-core: shared foundation for foamforce.
//!
//! Contains:
//! - error (shared error type)
//! - units (unit names to SI scale factors, backed by uom)
//! - log (explicit, caller-owned run logger)

pub mod error;
pub mod log;
pub mod units;

pub use error::{FfError, FfResult};
pub use log::RunLog;
pub use units::{Dimension, UnitDef};
