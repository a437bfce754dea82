//! Wire shapes of the ACBS API.
//!
//! Field names are fixed by ACBS and serialised in PascalCase. Code values are
//! wrapped in single-field objects (see [`common`]).

pub mod bundle;
pub mod common;
pub mod covenant;
pub mod deal;
pub mod facility;
pub mod fee;
pub mod guarantee;
pub mod investor;
pub mod loan;
pub mod party;
