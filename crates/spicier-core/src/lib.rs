//! Core circuit representation and MNA matrix structures for Spicier.
//!
//! This crate owns the netlist data model (§3), the grouping and
//! index-assignment passes (§4.1–4.2), and the assembled-system container
//! that the static and dynamic stampers write into. It has no opinion on
//! how a netlist is parsed or how the assembled system is solved.

pub mod error;
pub mod mna;
pub mod netlist;
pub mod node;
pub mod units;

pub use error::{Error, Result};
pub use mna::MnaSystem;
pub use netlist::{Element, ElementExtra, ElementKind, Netlist, PwlPoint, SinParams};
pub use node::{matrix_index, NodeId, NodeTable, GROUND};
