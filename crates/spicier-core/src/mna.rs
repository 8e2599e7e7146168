//! The assembled linear system: dense matrix `H` and right-hand side `b`.

use nalgebra::{DMatrix, DVector};

/// Holds the H matrix and b vector being accumulated by the static and
/// dynamic stampers. Ground's row/column is elided: `dimension` is
/// `node_count + group_two_count`, not `node_count + 1 + group_two_count`.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    matrix: DMatrix<f64>,
    rhs: DVector<f64>,
}

impl MnaSystem {
    pub fn new(dimension: usize) -> Self {
        Self {
            matrix: DMatrix::zeros(dimension, dimension),
            rhs: DVector::zeros(dimension),
        }
    }

    pub fn dimension(&self) -> usize {
        self.rhs.len()
    }

    pub fn matrix(&self) -> &DMatrix<f64> {
        &self.matrix
    }

    pub fn rhs(&self) -> &DVector<f64> {
        &self.rhs
    }

    /// Adds `value` to H[row][col]. A `None` row or column (ground) is a no-op.
    pub fn add(&mut self, row: Option<usize>, col: Option<usize>, value: f64) {
        if let (Some(r), Some(c)) = (row, col) {
            self.matrix[(r, c)] += value;
        }
    }

    /// Adds `value` to b[row]. A `None` row (ground) is a no-op.
    pub fn add_rhs(&mut self, row: Option<usize>, value: f64) {
        if let Some(r) = row {
            self.rhs[r] += value;
        }
    }

    /// Adds another system's contributions in place (used to combine the
    /// static and dynamic stamps before each solve).
    pub fn add_system(&mut self, other: &MnaSystem) {
        self.matrix += &other.matrix;
        self.rhs += &other.rhs;
    }
}
