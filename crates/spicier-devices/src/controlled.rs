//! Controlled-source stamps (§4.3.1): VCVS, VCCS, CCCS, CCVS.

use spicier_core::MnaSystem;

use crate::stamp::Stamp;

/// Voltage-controlled voltage source. Always Group 2.
pub struct Vcvs {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub c_pos: Option<usize>,
    pub c_neg: Option<usize>,
    pub current_index: usize,
    pub gain: f64,
}

impl Stamp for Vcvs {
    fn stamp_static(&self, mna: &mut MnaSystem) {
        let k = Some(self.current_index);
        mna.add(self.n_pos, k, 1.0);
        mna.add(k, self.n_pos, 1.0);
        mna.add(self.n_neg, k, -1.0);
        mna.add(k, self.n_neg, -1.0);
        mna.add(k, self.c_pos, -self.gain);
        mna.add(k, self.c_neg, self.gain);
    }
}

/// Voltage-controlled current source. Group 1 unless it is itself named as
/// a controller, in which case `current_index` is `Some`.
pub struct Vccs {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub c_pos: Option<usize>,
    pub c_neg: Option<usize>,
    pub current_index: Option<usize>,
    pub gain: f64,
}

impl Stamp for Vccs {
    fn stamp_static(&self, mna: &mut MnaSystem) {
        match self.current_index {
            None => {
                mna.add(self.n_pos, self.c_pos, self.gain);
                mna.add(self.n_neg, self.c_neg, self.gain);
                mna.add(self.n_pos, self.c_neg, -self.gain);
                mna.add(self.n_neg, self.c_pos, -self.gain);
            }
            Some(k) => {
                let k = Some(k);
                mna.add(self.n_pos, k, 1.0);
                mna.add(k, k, 1.0);
                mna.add(self.n_neg, k, -1.0);
                mna.add(k, self.c_pos, -self.gain);
                mna.add(k, self.c_neg, self.gain);
            }
        }
    }
}

/// Current-controlled current source. Group 1 unless it is itself named as
/// a controller, in which case `current_index` is `Some`. `controller_index`
/// is always `Some` — the branch it reads from is always Group 2.
pub struct Cccs {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub controller_index: usize,
    pub current_index: Option<usize>,
    pub gain: f64,
}

impl Stamp for Cccs {
    fn stamp_static(&self, mna: &mut MnaSystem) {
        let kctl = Some(self.controller_index);
        match self.current_index {
            None => {
                mna.add(self.n_pos, kctl, self.gain);
                mna.add(self.n_neg, kctl, -self.gain);
            }
            Some(k) => {
                let k = Some(k);
                mna.add(self.n_pos, k, 1.0);
                mna.add(k, k, 1.0);
                mna.add(self.n_neg, k, -1.0);
                mna.add(k, kctl, -self.gain);
            }
        }
    }
}

/// Current-controlled voltage source. Always Group 2.
pub struct Ccvs {
    pub n_pos: Option<usize>,
    pub n_neg: Option<usize>,
    pub controller_index: usize,
    pub current_index: usize,
    pub gain: f64,
}

impl Stamp for Ccvs {
    fn stamp_static(&self, mna: &mut MnaSystem) {
        let k = Some(self.current_index);
        let kctl = Some(self.controller_index);
        mna.add(self.n_pos, k, 1.0);
        mna.add(k, self.n_pos, 1.0);
        mna.add(self.n_neg, k, -1.0);
        mna.add(k, self.n_neg, -1.0);
        mna.add(k, kctl, -self.gain);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vcvs_stencil() {
        let mut mna = MnaSystem::new(3);
        let e = Vcvs {
            n_pos: Some(0),
            n_neg: None,
            c_pos: Some(1),
            c_neg: None,
            current_index: 2,
            gain: 5.0,
        };
        e.stamp_static(&mut mna);
        assert_eq!(mna.matrix()[(0, 2)], 1.0);
        assert_eq!(mna.matrix()[(2, 0)], 1.0);
        assert_eq!(mna.matrix()[(2, 1)], -5.0);
    }

    #[test]
    fn vccs_group1_stencil() {
        let mut mna = MnaSystem::new(2);
        let g = Vccs {
            n_pos: Some(0),
            n_neg: None,
            c_pos: Some(1),
            c_neg: None,
            current_index: None,
            gain: 2.0,
        };
        g.stamp_static(&mut mna);
        assert_eq!(mna.matrix()[(0, 1)], 2.0);
    }

    #[test]
    fn cccs_group1_stencil() {
        let mut mna = MnaSystem::new(2);
        let f = Cccs {
            n_pos: Some(0),
            n_neg: None,
            controller_index: 1,
            current_index: None,
            gain: 2.0,
        };
        f.stamp_static(&mut mna);
        assert_eq!(mna.matrix()[(0, 1)], 2.0);
    }

    #[test]
    fn ccvs_stencil() {
        let mut mna = MnaSystem::new(3);
        let h = Ccvs {
            n_pos: Some(0),
            n_neg: None,
            controller_index: 1,
            current_index: 2,
            gain: 3.0,
        };
        h.stamp_static(&mut mna);
        assert_eq!(mna.matrix()[(0, 2)], 1.0);
        assert_eq!(mna.matrix()[(2, 0)], 1.0);
        assert_eq!(mna.matrix()[(2, 1)], -3.0);
    }
}
