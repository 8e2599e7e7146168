//! Device models and MNA stamps for Spicier.
//!
//! Provides one `Stamp` implementation per supported element kind (§4.3):
//! passives (R, C, L), independent sources (V, I) with the waveform
//! evaluator, and controlled sources (VCVS, VCCS, CCCS, CCVS). Diode, BJT,
//! and MOSFET are not modeled here — `build::build_stampers` rejects them
//! before they ever need a `Stamp` impl.

pub mod build;
pub mod controlled;
pub mod passive;
pub mod sources;
pub mod stamp;
pub mod waveform;

pub use build::build_stampers;
pub use stamp::{DynamicContext, Stamp};
