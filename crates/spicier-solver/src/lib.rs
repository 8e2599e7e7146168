//! Linear solver and analysis drivers for Spicier.
//!
//! `linear` implements the hand-rolled permutation-vector LU (§4.5); `op`
//! and `transient` are the operating-point and transient drivers (§4.6,
//! §4.7) built on top of it.

pub mod linear;
pub mod op;
pub mod transient;

pub use op::{solve_operating_point, OpResult};
pub use transient::{solve_transient, TransientParams, TransientResult};
