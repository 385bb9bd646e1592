//! Katalog der 13 benannten Easing-Funktionen mit ihren kanonischen Kurven.

use super::curve::{CurveParseError, CurveSpec};
use std::fmt;
use std::str::FromStr;

/// Benannte Easing-Funktion
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EasingFunction {
    #[default]
    Linear,
    Ease,
    EaseIn,
    EaseOut,
    EaseInOut,
    EaseInBack,
    EaseOutBack,
    EaseInCubic,
    EaseOutCubic,
    EaseInOutCubic,
    EaseInQuint,
    EaseOutQuint,
    EaseInOutQuint,
}

impl EasingFunction {
    /// Alle Funktionen in Katalog-Reihenfolge (auch Reihenfolge der Auswahl-Buttons).
    pub const ALL: [EasingFunction; 13] = [
        EasingFunction::Linear,
        EasingFunction::Ease,
        EasingFunction::EaseIn,
        EasingFunction::EaseOut,
        EasingFunction::EaseInOut,
        EasingFunction::EaseInBack,
        EasingFunction::EaseOutBack,
        EasingFunction::EaseInCubic,
        EasingFunction::EaseOutCubic,
        EasingFunction::EaseInOutCubic,
        EasingFunction::EaseInQuint,
        EasingFunction::EaseOutQuint,
        EasingFunction::EaseInOutQuint,
    ];

    /// Kebab-Case-Name, wie er in Level-Daten und der UI erscheint.
    pub fn name(self) -> &'static str {
        match self {
            EasingFunction::Linear => "linear",
            EasingFunction::Ease => "ease",
            EasingFunction::EaseIn => "ease-in",
            EasingFunction::EaseOut => "ease-out",
            EasingFunction::EaseInOut => "ease-in-out",
            EasingFunction::EaseInBack => "ease-in-back",
            EasingFunction::EaseOutBack => "ease-out-back",
            EasingFunction::EaseInCubic => "ease-in-cubic",
            EasingFunction::EaseOutCubic => "ease-out-cubic",
            EasingFunction::EaseInOutCubic => "ease-in-out-cubic",
            EasingFunction::EaseInQuint => "ease-in-quint",
            EasingFunction::EaseOutQuint => "ease-out-quint",
            EasingFunction::EaseInOutQuint => "ease-in-out-quint",
        }
    }

    /// Kanonische Kurve der Funktion.
    pub fn curve(self) -> CurveSpec {
        match self {
            EasingFunction::Linear => CurveSpec::new(0.0, 0.0, 1.0, 1.0),
            EasingFunction::Ease => CurveSpec::new(0.25, 0.1, 0.25, 1.0),
            EasingFunction::EaseIn => CurveSpec::new(0.42, 0.0, 1.0, 1.0),
            EasingFunction::EaseOut => CurveSpec::new(0.0, 0.0, 0.58, 1.0),
            EasingFunction::EaseInOut => CurveSpec::new(0.42, 0.0, 0.58, 1.0),
            EasingFunction::EaseInBack => CurveSpec::new(0.36, 0.0, 0.66, -0.56),
            EasingFunction::EaseOutBack => CurveSpec::new(0.34, 1.56, 0.64, 1.0),
            EasingFunction::EaseInCubic => CurveSpec::new(0.55, 0.055, 0.675, 0.19),
            EasingFunction::EaseOutCubic => CurveSpec::new(0.215, 0.61, 0.355, 1.0),
            EasingFunction::EaseInOutCubic => CurveSpec::new(0.645, 0.045, 0.355, 1.0),
            EasingFunction::EaseInQuint => CurveSpec::new(0.755, 0.05, 0.855, 0.06),
            EasingFunction::EaseOutQuint => CurveSpec::new(0.23, 1.0, 0.32, 1.0),
            EasingFunction::EaseInOutQuint => CurveSpec::new(0.86, 0.0, 0.07, 1.0),
        }
    }

    /// Rückwärtssuche: benannte Funktion mit exakt dieser Kurve.
    pub fn from_curve(curve: &CurveSpec) -> Option<Self> {
        Self::ALL.into_iter().find(|e| e.curve() == *curve)
    }
}

impl fmt::Display for EasingFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EasingFunction {
    type Err = CurveParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let name = s.trim();
        Self::ALL
            .into_iter()
            .find(|e| e.name() == name)
            .ok_or_else(|| CurveParseError::UnknownEasing(name.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_thirteen_distinct_entries() {
        let names: HashSet<_> = EasingFunction::ALL.iter().map(|e| e.name()).collect();
        assert_eq!(names.len(), 13);
    }

    #[test]
    fn test_name_roundtrip() {
        for easing in EasingFunction::ALL {
            assert_eq!(easing.name().parse::<EasingFunction>(), Ok(easing));
        }
        assert_eq!(
            "ease-sideways".parse::<EasingFunction>(),
            Err(CurveParseError::UnknownEasing("ease-sideways".to_string()))
        );
    }

    #[test]
    fn test_canonical_curves() {
        assert_eq!(
            EasingFunction::EaseInOut.curve(),
            CurveSpec::new(0.42, 0.0, 0.58, 1.0)
        );
        assert_eq!(
            EasingFunction::EaseInBack.curve().p2.y,
            -0.56,
            "ease-in-back unterschreitet 0"
        );
        assert_eq!(EasingFunction::EaseOutBack.curve().p1.y, 1.56);
    }

    #[test]
    fn test_from_curve_lookup() {
        assert_eq!(
            EasingFunction::from_curve(&CurveSpec::new(0.25, 0.1, 0.25, 1.0)),
            Some(EasingFunction::Ease)
        );
        assert_eq!(
            EasingFunction::from_curve(&CurveSpec::new(0.3, 0.1, 0.25, 1.0)),
            None
        );
    }

    #[test]
    fn test_canonical_strings_parse_to_catalog_curves() {
        let curve: CurveSpec = "cubic-bezier(0.645, 0.045, 0.355, 1)".parse().unwrap();
        assert_eq!(curve, EasingFunction::EaseInOutCubic.curve());
    }
}
