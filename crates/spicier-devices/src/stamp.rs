//! The `Stamp` trait: the interface every device model presents to the
//! static and dynamic stampers (§4.3).

use nalgebra::DVector;
use spicier_core::MnaSystem;

/// Everything the dynamic stamper needs besides the element itself: the
/// current simulation time, the step size, and the previous solution (absent
/// at t = 0, in which case elements fall back to their initial condition).
pub struct DynamicContext<'a> {
    pub t: f64,
    pub h: f64,
    pub prev: Option<&'a DVector<f64>>,
}

impl<'a> DynamicContext<'a> {
    pub fn at_operating_point() -> DynamicContext<'static> {
        DynamicContext {
            t: 0.0,
            h: 0.0,
            prev: None,
        }
    }

    /// Reads a previously solved unknown by its matrix index, or 0.0 if
    /// there's no previous solution (operating point) or the index is ground.
    pub fn prev_value(&self, index: Option<usize>) -> f64 {
        match (self.prev, index) {
            (Some(x), Some(i)) => x[i],
            _ => 0.0,
        }
    }
}

/// A device's contribution to the assembled system. Most elements only need
/// one of the two methods; the defaults are no-ops.
pub trait Stamp {
    fn stamp_static(&self, _mna: &mut MnaSystem) {}
    fn stamp_dynamic(&self, _mna: &mut MnaSystem, _ctx: &DynamicContext) {}
}
