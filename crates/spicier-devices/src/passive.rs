//! Resistor, capacitor, and inductor stamps (§4.3.1, §4.3.2).

use spicier_core::MnaSystem;

use crate::stamp::{DynamicContext, Stamp};

/// A resistor is Group 1 unless some CCCS/CCVS names it as a controller, in
/// which case `current_index` is `Some` and it stamps as Group 2 instead.
pub struct Resistor {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub current_index: Option<usize>,
    pub value: f64,
}

impl Stamp for Resistor {
    fn stamp_static(&self, mna: &mut MnaSystem) {
        match self.current_index {
            None => {
                let g = 1.0 / self.value;
                mna.add(self.n_pos, self.n_pos, g);
                mna.add(self.n_neg, self.n_neg, g);
                mna.add(self.n_pos, self.n_neg, -g);
                mna.add(self.n_neg, self.n_pos, -g);
            }
            Some(k) => {
                let k = Some(k);
                mna.add(self.n_pos, k, 1.0);
                mna.add(k, self.n_pos, 1.0);
                mna.add(self.n_neg, k, -1.0);
                mna.add(k, self.n_neg, -1.0);
                mna.add(k, k, -self.value);
            }
        }
    }
}

/// Always Group 2: backward-Euler companion model stamped as a voltage
/// source whose value tracks `vC(t) = vC(t-h) + (h/C) * iC(t-h)`.
pub struct Capacitor {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub current_index: usize,
    pub capacitance: f64,
    pub initial_condition: f64,
}

impl Stamp for Capacitor {
    fn stamp_dynamic(&self, mna: &mut MnaSystem, ctx: &DynamicContext) {
        let k = Some(self.current_index);
        mna.add(self.n_pos, k, 1.0);
        mna.add(k, self.n_pos, 1.0);
        mna.add(self.n_neg, k, -1.0);
        mna.add(k, self.n_neg, -1.0);

        let v_target = match ctx.prev {
            None => self.initial_condition,
            Some(_) => {
                let v_prev = ctx.prev_value(self.n_pos) - ctx.prev_value(self.n_neg);
                let i_prev = ctx.prev_value(Some(self.current_index));
                v_prev + (ctx.h / self.capacitance) * i_prev
            }
        };
        mna.add_rhs(k, v_target);
    }
}

/// Always Group 2: backward-Euler companion model stamped as a current
/// source whose value tracks `iL(t) = iL(t-h) + (h/L) * vL(t-h)`.
pub struct Inductor {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub current_index: usize,
    pub inductance: f64,
    pub initial_condition: f64,
}

impl Stamp for Inductor {
    fn stamp_dynamic(&self, mna: &mut MnaSystem, ctx: &DynamicContext) {
        let k = Some(self.current_index);
        mna.add(self.n_pos, k, 1.0);
        mna.add(self.n_neg, k, -1.0);
        mna.add(k, k, 1.0);

        let i_target = match ctx.prev {
            None => self.initial_condition,
            Some(_) => {
                let v_prev = ctx.prev_value(self.n_pos) - ctx.prev_value(self.n_neg);
                let i_prev = ctx.prev_value(Some(self.current_index));
                i_prev + (ctx.h / self.inductance) * v_prev
            }
        };
        mna.add_rhs(k, i_target);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resistor_g1_stencil() {
        let mut mna = MnaSystem::new(2);
        let r = Resistor {
            n_pos: Some(0),
            n_neg: Some(1),
            current_index: None,
            value: 1000.0,
        };
        r.stamp_static(&mut mna);
        let g = 1.0 / 1000.0;
        assert_eq!(mna.matrix()[(0, 0)], g);
        assert_eq!(mna.matrix()[(1, 1)], g);
        assert_eq!(mna.matrix()[(0, 1)], -g);
        assert_eq!(mna.matrix()[(1, 0)], -g);
    }

    #[test]
    fn resistor_g2_stencil_when_used_as_controller() {
        let mut mna = MnaSystem::new(3);
        let r = Resistor {
            n_pos: Some(0),
            n_neg: Some(1),
            current_index: Some(2),
            value: 50.0,
        };
        r.stamp_static(&mut mna);
        assert_eq!(mna.matrix()[(0, 2)], 1.0);
        assert_eq!(mna.matrix()[(2, 0)], 1.0);
        assert_eq!(mna.matrix()[(1, 2)], -1.0);
        assert_eq!(mna.matrix()[(2, 1)], -1.0);
        assert_eq!(mna.matrix()[(2, 2)], -50.0);
    }

    #[test]
    fn capacitor_uses_initial_condition_at_t_zero() {
        let mut mna = MnaSystem::new(1);
        let c = Capacitor {
            n_pos: Some(0),
            n_neg: None,
            current_index: 0,
            capacitance: 1e-6,
            initial_condition: 2.5,
        };
        let ctx = DynamicContext {
            t: 0.0,
            h: 0.0,
            prev: None,
        };
        c.stamp_dynamic(&mut mna, &ctx);
        assert_eq!(mna.rhs()[0], 2.5);
        assert_eq!(mna.matrix()[(0, 0)], 1.0);
    }
}
