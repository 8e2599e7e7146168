//! Independent source stamps (§4.3.2): evaluated dynamically every step
//! (and once, at t = 0, for the operating point).

use spicier_core::{ElementExtra, MnaSystem};

use crate::stamp::{DynamicContext, Stamp};
use crate::waveform;

/// Always Group 2.
pub struct IndependentVoltage {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub current_index: usize,
    pub value: f64,
    pub extra: ElementExtra,
}

impl Stamp for IndependentVoltage {
    fn stamp_dynamic(&self, mna: &mut MnaSystem, ctx: &DynamicContext) {
        let k = Some(self.current_index);
        mna.add(self.n_pos, k, 1.0);
        mna.add(k, self.n_pos, 1.0);
        mna.add(self.n_neg, k, -1.0);
        mna.add(k, self.n_neg, -1.0);
        let v = waveform::evaluate(self.value, &self.extra, ctx.t);
        mna.add_rhs(k, v);
    }
}

/// Group 1 unless it is itself named as a controller.
pub struct IndependentCurrent {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub current_index: Option<usize>,
    pub value: f64,
    pub extra: ElementExtra,
}

impl Stamp for IndependentCurrent {
    fn stamp_dynamic(&self, mna: &mut MnaSystem, ctx: &DynamicContext) {
        let i = waveform::evaluate(self.value, &self.extra, ctx.t);
        match self.current_index {
            None => {
                mna.add_rhs(self.n_pos, -i);
                mna.add_rhs(self.n_neg, i);
            }
            Some(k) => {
                let k = Some(k);
                mna.add(self.n_pos, k, 1.0);
                mna.add(k, k, 1.0);
                mna.add(self.n_neg, k, -1.0);
                mna.add_rhs(k, i);
            }
        }
    }
}
