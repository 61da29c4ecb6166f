//! Classification engine for Achtung Core.
//!
//! This module contains the privacy pipeline:
//! - Taxonomy: risk-indicating terms and their remediation tips
//! - Matcher: finds taxonomy terms in submitted text
//! - Risk Policy: turns matches into a tier, explanation and tip
//! - Response Assembler: display list and offer flags
//! - Privacy Analyzer: orchestrates the stages above
//!
//! Rewriting and the secure-sharing guide live here as collaborators of
//! the pipeline, not parts of it.

mod analyzer;
mod assembler;
pub mod guide;
mod matcher;
pub mod policy;
mod rewriter;
mod taxonomy;

pub use analyzer::*;
pub use assembler::*;
pub use matcher::*;
pub use policy::RiskPolicy;
pub use rewriter::*;
pub use taxonomy::*;
