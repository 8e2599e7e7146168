//! Output container for a transient run: one solution vector per time step.

use nalgebra::DVector;

/// The solved unknowns at a single point in time.
#[derive(Debug, Clone)]
pub struct TimePoint {
    pub time: f64,
    pub solution: DVector<f64>,
}

/// A full transient waveform: one [`TimePoint`] per step, in increasing
/// time order, including t = 0.
#[derive(Debug, Clone)]
pub struct TransientResult {
    pub points: Vec<TimePoint>,
    pub dimension: usize,
}

impl TransientResult {
    pub fn new(dimension: usize) -> Self {
        Self {
            points: Vec::new(),
            dimension,
        }
    }

    pub fn push(&mut self, time: f64, solution: DVector<f64>) {
        self.points.push(TimePoint { time, solution });
    }

    /// Extracts the waveform of a single unknown (by its matrix index)
    /// across all time steps, as `(time, value)` pairs.
    pub fn waveform(&self, index: usize) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (p.time, p.solution[index]))
            .collect()
    }
}
