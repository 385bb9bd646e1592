//! Dynamischer Y-Ausschnitt des Curve-Space.
//!
//! Der Viewport ist reiner abgeleiteter Zustand: er wird vor jedem Lesen aus den
//! aktuellen Kontrollpunkten neu berechnet und nie über eine Mutation hinweg gecacht.

use super::curve::CurveSpec;

/// Minimale sichtbare Spanne in Curve-Space-Einheiten.
pub const VIEWPORT_MIN_SPAN: f64 = 2.0;
/// Faktor auf die Datenspanne (20 % Rand oben und unten).
pub const VIEWPORT_PADDING_FACTOR: f64 = 1.4;

/// Sichtbarer Y-Bereich `[y_min, y_min + y_range]`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Untere Grenze in Curve-Space
    pub y_min: f64,
    /// Höhe des Bereichs in Curve-Space (immer >= `VIEWPORT_MIN_SPAN`)
    pub y_range: f64,
}

impl Viewport {
    /// Berechnet den Viewport für die Nutzerkurve und optional die sichtbare Zielkurve.
    ///
    /// Berücksichtigt immer y=0 und y=1, dazu die Y-Werte aller beteiligten
    /// Kontrollpunkte. Zielwerte fließen nur ein, wenn `target` gesetzt ist.
    pub fn fit(user: &CurveSpec, target: Option<&CurveSpec>) -> Self {
        let target_ys = target.map(CurveSpec::y_values);
        let ys = [0.0, 1.0]
            .into_iter()
            .chain(user.y_values())
            .chain(target_ys.into_iter().flatten());

        let (min_y, max_y) = ys.fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        });

        let desired_range = VIEWPORT_MIN_SPAN.max((max_y - min_y) * VIEWPORT_PADDING_FACTOR);
        let center = (min_y + max_y) / 2.0;

        Self {
            y_min: center - desired_range / 2.0,
            y_range: desired_range,
        }
    }

    /// Obere Grenze in Curve-Space.
    pub fn y_max(&self) -> f64 {
        self.y_min + self.y_range
    }

    /// Liegt `y` im sichtbaren Bereich?
    pub fn contains_y(&self, y: f64) -> bool {
        y >= self.y_min && y <= self.y_max()
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::fit(&CurveSpec::LINEAR, None)
    }
}
