//! Transient driver (§4.7): backward-Euler only, re-factoring the system at
//! every step. More accurate integration rules are out of scope (see
//! DESIGN.md) — the tradeoff is O(n^3) per step in exchange for a single,
//! easy-to-verify companion-model code path.

pub mod result;

pub use result::{TimePoint, TransientResult};

use spicier_core::{MnaSystem, Netlist, Result};
use spicier_devices::{build_stampers, DynamicContext};

use crate::linear::solve_dense;

#[derive(Debug, Clone, Copy)]
pub struct TransientParams {
    pub tstep: f64,
    pub tstop: f64,
}

pub fn solve_transient(netlist: &Netlist, params: &TransientParams) -> Result<TransientResult> {
    let stampers = build_stampers(netlist)?;
    let dimension = netlist.dimension();

    let mut static_mna = MnaSystem::new(dimension);
    for s in &stampers {
        s.stamp_static(&mut static_mna);
    }

    let mut result = TransientResult::new(dimension);

    let mut t = 0.0;
    let mut prev: Option<nalgebra::DVector<f64>> = None;
    while t <= params.tstop + params.tstep * 1e-9 {
        let mut dynamic = MnaSystem::new(dimension);
        let ctx = DynamicContext {
            t,
            h: params.tstep,
            prev: prev.as_ref(),
        };
        for s in &stampers {
            s.stamp_dynamic(&mut dynamic, &ctx);
        }

        let mut combined = static_mna.clone();
        combined.add_system(&dynamic);

        let x = solve_dense(combined.matrix(), combined.rhs())?;
        result.push(t, x.clone());
        prev = Some(x);

        t += params.tstep;
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use spicier_core::{Element, ElementExtra, ElementKind, Netlist};

    #[test]
    fn rc_transient_follows_backward_euler_recurrence() {
        let mut nl = Netlist::new();
        let a = nl.nodes.resolve("a");
        let gnd = nl.nodes.resolve("0");
        let b = nl.nodes.resolve("b");
        nl.push(Element::new(
            ElementKind::IndependentVoltage,
            "v1".into(),
            vec![a, gnd],
            1.0,
            ElementExtra::Constant,
            1,
        ));
        nl.push(Element::new(
            ElementKind::Resistor,
            "r1".into(),
            vec![a, b],
            1000.0,
            ElementExtra::None,
            2,
        ));
        nl.push(Element::new(
            ElementKind::Capacitor,
            "c1".into(),
            vec![b, gnd],
            1.0e-6,
            ElementExtra::InitialCondition(0.0),
            3,
        ));
        nl.finalize().unwrap();

        let params = TransientParams {
            tstep: 1.0e-3,
            tstop: 2.0e-3,
        };
        let res = solve_transient(&nl, &params).unwrap();
        assert_eq!(res.points.len(), 3);

        // b is node index 1 (0-based), since a is 0 and b is 1.
        let b_idx = b - 1;
        assert_eq!(res.points[0].solution[b_idx], 0.0);

        // R1*C1 == tstep, so the recurrence vC(t) = vC(t-h) + (h/C)*iC(t-h)
        // reaches the source voltage in a single step: at t=0 the capacitor
        // is held at its initial condition (0 V) while R1 draws
        // iC(0) = 1e-3 A, giving vC(h) = 0 + (1e-3/1e-6)*1e-3 = 1.0. From
        // then on iC is 0 and vC holds at 1.0.
        let tol = 1e-9;
        let v1 = res.points[1].solution[b_idx];
        let v2 = res.points[2].solution[b_idx];
        assert!((v1 - 1.0).abs() < tol);
        assert!((v2 - 1.0).abs() < tol);
    }
}
