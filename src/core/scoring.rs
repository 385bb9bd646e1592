//! Bewertung einer Nutzerkurve gegen die Zielkurve.
//!
//! Zwei getrennte Modi: numerisch (L1-Abstand der vier Parameter, Freestyle und
//! Kurven-Nachbau) und symbolisch (Multiple-Choice auf den Easing-Namen).

use super::curve::CurveSpec;
use super::easing::EasingFunction;
use std::fmt;

/// Angenommene "maximal sinnvolle" Summe der Parameter-Abweichungen.
///
/// Keine echte Obergrenze (Y ist unbeschränkt); ab diesem Abstand ist der Score 0.
/// Der Wert ist auf die Schwierigkeit der bestehenden Level abgestimmt.
pub const MAX_MEANINGFUL_DIFFERENCE: f64 = 4.0;

/// Bewertungsmodus einer Editor-Session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradingMode {
    /// Exakter Vergleich eines gewählten Easing-Namens (100 oder 0)
    Symbolic,
    /// Kontinuierlicher Vergleich der vier Kurvenparameter
    #[default]
    Numeric,
}

/// Ganzzahliger Score in [0, 100]
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Score(u8);

impl Score {
    /// Volle Punktzahl.
    pub const PERFECT: Score = Score(100);
    /// Keine Punkte.
    pub const ZERO: Score = Score(0);

    /// Erstellt einen Score; Werte über 100 werden auf 100 begrenzt.
    pub fn new(value: u8) -> Self {
        Self(value.min(100))
    }

    /// Zahlenwert in [0, 100].
    pub fn value(self) -> u8 {
        self.0
    }

    /// Volle Punktzahl erreicht?
    pub fn is_perfect(self) -> bool {
        self.0 == 100
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}%", self.0)
    }
}

/// Summe der absoluten Abweichungen über alle vier Parameter.
///
/// Läuft in f64 und in Parameter-Reihenfolge; an halben Punkten entscheidet
/// sonst der Rundungsfehler über die Bewertungsstufe.
pub fn total_difference(user: &CurveSpec, target: &CurveSpec) -> f64 {
    target
        .to_array()
        .iter()
        .zip(user.to_array())
        .fold(0.0, |sum, (t, u)| sum + (t - u).abs())
}

/// Numerischer Score: `round(max(0, (4 - totalDiff) / 4) * 100)`.
pub fn score_curves(user: &CurveSpec, target: &CurveSpec) -> Score {
    let total = total_difference(user, target);
    let accuracy = ((MAX_MEANINGFUL_DIFFERENCE - total) / MAX_MEANINGFUL_DIFFERENCE).max(0.0);
    Score::new((accuracy * 100.0).round() as u8)
}

/// Symbolischer Score: 100 bei exakter Übereinstimmung, sonst 0.
pub fn score_choice(choice: EasingFunction, target: EasingFunction) -> Score {
    if choice == target {
        Score::PERFECT
    } else {
        Score::ZERO
    }
}

/// Bewertungsstufe für die Ergebnisanzeige
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScoreRating {
    Incredible,
    Excellent,
    GreatJob,
    GoodEffort,
    KeepPracticing,
}

impl ScoreRating {
    /// Stufe zu einem Score (Schwellen 90/80/70/60).
    pub fn from_score(score: Score) -> Self {
        match score.value() {
            90..=u8::MAX => ScoreRating::Incredible,
            80..=89 => ScoreRating::Excellent,
            70..=79 => ScoreRating::GreatJob,
            60..=69 => ScoreRating::GoodEffort,
            _ => ScoreRating::KeepPracticing,
        }
    }

    /// Anzeigetext der Stufe.
    pub fn label(self) -> &'static str {
        match self {
            ScoreRating::Incredible => "🎉 Incredible!",
            ScoreRating::Excellent => "🔥 Excellent!",
            ScoreRating::GreatJob => "👏 Great job!",
            ScoreRating::GoodEffort => "👍 Good effort!",
            ScoreRating::KeepPracticing => "🤔 Keep practicing!",
        }
    }
}
