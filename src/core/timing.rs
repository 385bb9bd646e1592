//! Auswertung einer Timing-Kurve: linearer Zeitfortschritt → Animationsfortschritt.

use super::curve::{CurveSpec, CURVE_END, CURVE_START};
use glam::DVec2;

/// Maximale Newton-Raphson-Iterationen pro Auswertung.
const NEWTON_MAX_ITERATIONS: usize = 8;
/// Zieltoleranz in X.
const SOLVE_EPSILON: f64 = 1e-6;
/// Iterationen der Bisektions-Rückfallebene.
const BISECTION_ITERATIONS: usize = 32;

/// B(t) = (1-t)³·P0 + 3(1-t)²t·P1 + 3(1-t)t²·P2 + t³·P3
pub fn cubic_bezier(p0: DVec2, p1: DVec2, p2: DVec2, p3: DVec2, t: f64) -> DVec2 {
    let inv = 1.0 - t;
    inv * inv * inv * p0 + 3.0 * inv * inv * t * p1 + 3.0 * inv * t * t * p2 + t * t * t * p3
}

impl CurveSpec {
    /// Punkt der Kurve beim Kurvenparameter `s` (nicht Zeit!).
    pub fn evaluate(&self, s: f64) -> DVec2 {
        cubic_bezier(CURVE_START, self.p1, self.p2, CURVE_END, s)
    }

    /// dx/ds der Kurve.
    fn x_derivative(&self, s: f64) -> f64 {
        let inv = 1.0 - s;
        3.0 * inv * inv * self.p1.x
            + 6.0 * inv * s * (self.p2.x - self.p1.x)
            + 3.0 * s * s * (1.0 - self.p2.x)
    }

    /// Kurvenparameter `s` mit x(s) = `x`.
    ///
    /// Newton-Raphson ab `s = x`; konvergiert das nicht, Bisektion auf [0, 1]
    /// (x(s) ist monoton, da beide X-Werte in [0, 1] liegen).
    fn solve_s_for_x(&self, x: f64) -> f64 {
        let mut s = x;
        for _ in 0..NEWTON_MAX_ITERATIONS {
            let error = self.evaluate(s).x - x;
            if error.abs() < SOLVE_EPSILON {
                return s;
            }
            let slope = self.x_derivative(s);
            if slope.abs() < SOLVE_EPSILON {
                break;
            }
            s = (s - error / slope).clamp(0.0, 1.0);
        }

        let (mut lo, mut hi) = (0.0f64, 1.0f64);
        s = x;
        for _ in 0..BISECTION_ITERATIONS {
            let current = self.evaluate(s).x;
            if (current - x).abs() < SOLVE_EPSILON {
                break;
            }
            if current < x {
                lo = s;
            } else {
                hi = s;
            }
            s = (lo + hi) / 2.0;
        }
        s
    }

    /// Animationsfortschritt für linearen Zeitfortschritt `t` in [0, 1].
    ///
    /// Das Ergebnis ist nicht geklemmt: Back-/Elastic-Kurven schießen über 1 hinaus
    /// oder fallen unter 0.
    pub fn ease(&self, t: f64) -> f64 {
        if t <= 0.0 {
            return 0.0;
        }
        if t >= 1.0 {
            return 1.0;
        }
        let s = self.solve_s_for_x(t);
        self.evaluate(s).y
    }
}
