//! Domain types for Achtung Core.
//!
//! Per-request values only; nothing here is persisted.

mod assessment;
mod report;

pub use assessment::*;
pub use report::*;
