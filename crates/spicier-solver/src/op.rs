//! Operating-point driver (§4.6): group, assign indices, stamp once at
//! t = 0 with no previous solution, solve, unscramble.

use nalgebra::DVector;

use spicier_core::{MnaSystem, Netlist, Result};
use spicier_devices::{build_stampers, DynamicContext};

use crate::linear::solve_dense;

/// A solved operating point: the assembled system plus the solution vector,
/// kept together so callers can report both the raw matrices (§6.4) and the
/// labelled voltages/currents.
pub struct OpResult {
    pub matrix: nalgebra::DMatrix<f64>,
    pub rhs: DVector<f64>,
    pub solution: DVector<f64>,
}

pub fn solve_operating_point(netlist: &Netlist) -> Result<OpResult> {
    let stampers = build_stampers(netlist)?;
    let mut mna = MnaSystem::new(netlist.dimension());

    for s in &stampers {
        s.stamp_static(&mut mna);
    }
    let ctx = DynamicContext::at_operating_point();
    for s in &stampers {
        s.stamp_dynamic(&mut mna, &ctx);
    }

    let solution = solve_dense(mna.matrix(), mna.rhs())?;
    Ok(OpResult {
        matrix: mna.matrix().clone(),
        rhs: mna.rhs().clone(),
        solution,
    })
}
