//! ff-dict: control dictionary editing for foamforce.
//!
//! Contains:
//! - lines (the dictionary as an ordered sequence of terminated lines)
//! - locate (first-match `functions` anchor and block synthesis)
//! - force (the force function object and its bin data)
//! - stanza (named stanza tree with a fixed tab indentation rule)
//! - legacy (cursor-arithmetic force dictionary writer)
//! - scan (comment and string aware brace scanner)
//! - structural (scanner-driven insertion of a rendered stanza)
//! - balance (brace balance and stanza counting)

pub mod balance;
pub mod error;
pub mod force;
pub mod legacy;
pub mod lines;
pub mod locate;
pub mod scan;
pub mod stanza;
pub mod structural;

pub use balance::{BraceBalance, brace_balance, count_stanzas};
pub use error::{DictError, DictResult};
pub use force::{BinData, ForceFunction};
pub use legacy::{insert_legacy, write_force_dictionary};
pub use lines::ControlDict;
pub use locate::{
    FUNCTIONS_KEYWORD, FunctionsLocation, find_functions_block, functions_anchors,
    synthesize_functions_block,
};
pub use stanza::{Entry, Stanza};
pub use structural::{InsertStrategy, Insertion, insert_force_function, insert_structural};
