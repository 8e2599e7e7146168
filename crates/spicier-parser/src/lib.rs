//! SPICE netlist parser for Spicier.
//!
//! Tokenizes and parses the netlist grammar (§6.1) into a
//! [`spicier_core::Netlist`] plus an optional analysis directive. Grammar
//! constructs this system doesn't implement — `.subckt`, `.dc`, `.ac`,
//! `.print`, `.ic`, PULSE sources — are rejected as unrecognized input
//! rather than silently accepted.

pub mod error;
pub mod lexer;
pub mod parser;
pub mod types;

pub use error::{Error, Result};
pub use parser::parse;
pub use types::{AnalysisCommand, ParseResult};
