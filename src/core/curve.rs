//! Kontrollpunkte und Parameter-Tupel einer kubischen Bézier-Timing-Kurve.

use glam::DVec2;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Ein freier Kontrollpunkt im Curve-Space (x in [0, 1], y unbeschränkt).
pub type CurvePoint = DVec2;

/// Fester Startanker jeder Timing-Kurve.
pub const CURVE_START: CurvePoint = DVec2::ZERO;
/// Fester Endanker jeder Timing-Kurve.
pub const CURVE_END: CurvePoint = DVec2::ONE;

/// Welcher der beiden freien Kontrollpunkte gemeint ist
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlHandle {
    /// Erster Kontrollpunkt (gehört zum Startanker)
    P1,
    /// Zweiter Kontrollpunkt (gehört zum Endanker)
    P2,
}

impl ControlHandle {
    /// Beide Handles in Zeichenreihenfolge.
    pub const BOTH: [ControlHandle; 2] = [ControlHandle::P1, ControlHandle::P2];

    /// Anker, an dem die Hilfslinie dieses Handles beginnt.
    pub fn anchor(self) -> CurvePoint {
        match self {
            ControlHandle::P1 => CURVE_START,
            ControlHandle::P2 => CURVE_END,
        }
    }
}

/// Fehler beim Einlesen eines Kurven-Strings oder Easing-Namens.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum CurveParseError {
    #[error("Kurven-String ohne gültige cubic-bezier(...)-Klammerung: {0:?}")]
    MalformedWrapper(String),
    #[error("erwartet 4 Kurvenparameter, gefunden: {0}")]
    WrongArity(usize),
    #[error("ungültiger Kurvenparameter: {0:?}")]
    InvalidNumber(String),
    #[error("Kurvenparameter ist nicht endlich: {0}")]
    NonFinite(f64),
    #[error("unbekannte Easing-Funktion: {0:?}")]
    UnknownEasing(String),
}

/// Vollständige Timing-Kurve `(p1.x, p1.y, p2.x, p2.y)`.
///
/// Die Endpunkte (0,0) und (1,1) sind implizit und werden nicht gespeichert.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveSpec {
    /// Erster freier Kontrollpunkt
    pub p1: CurvePoint,
    /// Zweiter freier Kontrollpunkt
    pub p2: CurvePoint,
}

impl CurveSpec {
    /// Lineare Kurve (Kontrollpunkte auf der Diagonalen).
    pub const LINEAR: CurveSpec = CurveSpec::new(0.0, 0.0, 1.0, 1.0);

    /// Erstellt eine Kurve aus den vier Parametern in CSS-Reihenfolge.
    pub const fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self {
            p1: DVec2::new(x1, y1),
            p2: DVec2::new(x2, y2),
        }
    }

    /// Erstellt eine Kurve aus einem Parameter-Array `[x1, y1, x2, y2]`.
    pub fn from_array(values: [f64; 4]) -> Self {
        Self::new(values[0], values[1], values[2], values[3])
    }

    /// Liefert die Parameter als Array `[x1, y1, x2, y2]`.
    pub fn to_array(self) -> [f64; 4] {
        [self.p1.x, self.p1.y, self.p2.x, self.p2.y]
    }

    /// Kontrollpunkt eines Handles.
    pub fn point(&self, handle: ControlHandle) -> CurvePoint {
        match handle {
            ControlHandle::P1 => self.p1,
            ControlHandle::P2 => self.p2,
        }
    }

    /// Überschreibt den Kontrollpunkt eines Handles. X wird auf [0, 1] geklemmt.
    pub fn set_point(&mut self, handle: ControlHandle, point: CurvePoint) {
        let point = DVec2::new(point.x.clamp(0.0, 1.0), point.y);
        match handle {
            ControlHandle::P1 => self.p1 = point,
            ControlHandle::P2 => self.p2 = point,
        }
    }

    /// Einzelner Parameter nach Index (0..4), `None` außerhalb.
    pub fn parameter(&self, index: usize) -> Option<f64> {
        self.to_array().get(index).copied()
    }

    /// Setzt einen einzelnen Parameter. X-Parameter (Index 0 und 2) werden geklemmt.
    ///
    /// Gibt `false` zurück, wenn der Index ungültig ist.
    pub fn set_parameter(&mut self, index: usize, value: f64) -> bool {
        let mut values = self.to_array();
        let Some(slot) = values.get_mut(index) else {
            return false;
        };
        *slot = if index % 2 == 0 {
            value.clamp(0.0, 1.0)
        } else {
            value
        };
        *self = Self::from_array(values);
        true
    }

    /// Kopie mit auf [0, 1] geklemmten X-Werten.
    pub fn with_clamped_x(self) -> Self {
        Self::new(
            self.p1.x.clamp(0.0, 1.0),
            self.p1.y,
            self.p2.x.clamp(0.0, 1.0),
            self.p2.y,
        )
    }

    /// Die beiden Y-Werte der Kontrollpunkte.
    pub fn y_values(&self) -> [f64; 2] {
        [self.p1.y, self.p2.y]
    }

    /// Formatiert die Kurve als `cubic-bezier(a, b, c, d)` mit `decimals` Nachkommastellen.
    pub fn to_css_string(&self, decimals: usize) -> String {
        let parts = self
            .to_array()
            .iter()
            .map(|&v| format!("{:.*}", decimals, normalize_zero(v)))
            .collect::<Vec<_>>();
        format!("cubic-bezier({})", parts.join(", "))
    }
}

impl Default for CurveSpec {
    fn default() -> Self {
        Self::LINEAR
    }
}

/// `-0.0` würde sonst als "-0.00" formatiert.
fn normalize_zero(value: f64) -> f64 {
    if value == 0.0 {
        0.0
    } else {
        value
    }
}

impl fmt::Display for CurveSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css_string(2))
    }
}

impl FromStr for CurveSpec {
    type Err = CurveParseError;

    /// Akzeptiert `cubic-bezier(a, b, c, d)` oder die nackte Liste `a, b, c, d`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = match trimmed.strip_prefix("cubic-bezier") {
            Some(rest) => rest
                .trim_start()
                .strip_prefix('(')
                .and_then(|r| r.strip_suffix(')'))
                .ok_or_else(|| CurveParseError::MalformedWrapper(s.to_string()))?,
            None => trimmed,
        };

        let values = inner
            .split(',')
            .map(|part| {
                let part = part.trim();
                let value = part
                    .parse::<f64>()
                    .map_err(|_| CurveParseError::InvalidNumber(part.to_string()))?;
                if value.is_finite() {
                    Ok(value)
                } else {
                    Err(CurveParseError::NonFinite(value))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let &[x1, y1, x2, y2] = values.as_slice() else {
            return Err(CurveParseError::WrongArity(values.len()));
        };
        Ok(Self::new(x1, y1, x2, y2).with_clamped_x())
    }
}
