//! Core data models: raw feed records and their normalized, display-ready forms.

mod asset;
mod battlelog;
mod raw;
mod records;
mod roster;

pub use asset::*;
pub use battlelog::*;
pub use raw::*;
pub use records::*;
pub use roster::*;
