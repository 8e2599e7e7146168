//! Source-waveform evaluator (§4.4): turns an independent source's
//! descriptor into a scalar value at a given time.

use spicier_core::ElementExtra;

/// Evaluates an independent source's value at time `t`.
///
/// `value` is the element's plain scalar (used for the constant form);
/// `extra` selects sinusoidal or piecewise-linear behavior instead.
pub fn evaluate(value: f64, extra: &ElementExtra, t: f64) -> f64 {
    match extra {
        ElementExtra::Sinusoidal(p) => {
            p.v0 + p.va * (2.0 * std::f64::consts::PI * p.freq * t + p.td).sin()
        }
        ElementExtra::Pwl(points) => evaluate_pwl(points, t),
        _ => value,
    }
}

fn evaluate_pwl(points: &[spicier_core::PwlPoint], t: f64) -> f64 {
    debug_assert!(!points.is_empty(), "PWL source with no breakpoints");
    if t <= points[0].t {
        return points[0].x;
    }
    for w in points.windows(2) {
        let (a, b) = (w[0], w[1]);
        if t <= b.t {
            if b.t == a.t {
                return b.x;
            }
            let frac = (t - a.t) / (b.t - a.t);
            return a.x + frac * (b.x - a.x);
        }
    }
    points[points.len() - 1].x
}

#[cfg(test)]
mod tests {
    use super::*;
    use spicier_core::{PwlPoint, SinParams};

    #[test]
    fn sinusoidal_matches_closed_form() {
        let p = SinParams {
            v0: 1.0,
            va: 2.0,
            freq: 1.0,
            td: 0.0,
        };
        let extra = ElementExtra::Sinusoidal(p);
        let t = 0.25; // quarter period: sin(2*pi*1*0.25) == sin(pi/2) == 1
        let v = evaluate(0.0, &extra, t);
        assert!((v - 3.0).abs() < 1e-9);
    }

    #[test]
    fn pwl_interpolates_linearly_between_breakpoints() {
        let points = vec![
            PwlPoint { t: 0.0, x: 0.0 },
            PwlPoint { t: 1.0, x: 1.0 },
            PwlPoint { t: 2.0, x: 0.0 },
        ];
        let extra = ElementExtra::Pwl(points);
        assert_eq!(evaluate(0.0, &extra, 0.5), 0.5);
        assert_eq!(evaluate(0.0, &extra, 1.5), 0.5);
        assert_eq!(evaluate(0.0, &extra, 2.5), 0.0);
        // Before the first breakpoint: clamp, don't read out of bounds.
        assert_eq!(evaluate(0.0, &extra, -1.0), 0.0);
    }

    #[test]
    fn constant_falls_back_to_value() {
        assert_eq!(evaluate(5.0, &ElementExtra::Constant, 100.0), 5.0);
    }
}
