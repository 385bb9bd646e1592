//! Freestyle-Modus: zufällige "Mystery Curve" nachbauen, numerisch bewertet.

use super::session::{EditorConfig, EditorSession, TargetSource};
use crate::core::{CurveSpec, GradingMode, PreviewMotion, Score, ScoreRating};
use crate::shared::GameOptions;
use rand::Rng;

/// Vorgegebene Zielkurve im Freestyle-Modus
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FreestylePreset {
    pub name: &'static str,
    pub curve: CurveSpec,
}

/// Alle Freestyle-Zielkurven. "Bounce" und "Back" teilen sich die Parameter.
pub const PRESETS: [FreestylePreset; 6] = [
    FreestylePreset {
        name: "Bounce",
        curve: CurveSpec::new(0.68, -0.55, 0.265, 1.55),
    },
    FreestylePreset {
        name: "Elastic",
        curve: CurveSpec::new(0.175, 0.885, 0.32, 1.275),
    },
    FreestylePreset {
        name: "Back",
        curve: CurveSpec::new(0.68, -0.55, 0.265, 1.55),
    },
    FreestylePreset {
        name: "Ease-In-Out",
        curve: CurveSpec::new(0.42, 0.0, 0.58, 1.0),
    },
    FreestylePreset {
        name: "Power",
        curve: CurveSpec::new(0.25, 0.46, 0.45, 0.94),
    },
    FreestylePreset {
        name: "Sine",
        curve: CurveSpec::new(0.39, 0.575, 0.565, 1.0),
    },
];

/// Wertebereich der Parameter-Schieberegler.
pub const SLIDER_RANGE: std::ops::RangeInclusive<f64> = -2.0..=2.0;

/// Eine Freestyle-Runde
#[derive(Debug)]
pub struct FreestyleRound {
    preset_index: usize,
    session: EditorSession,
    result: Option<Score>,
}

impl FreestyleRound {
    /// Neue Runde mit zufälligem Preset.
    pub fn new(rng: &mut impl Rng, options: &GameOptions) -> Self {
        Self::with_preset(rng.gen_range(0..PRESETS.len()), options)
    }

    /// Neue Runde mit festem Preset (Index wird auf den Katalog begrenzt).
    pub fn with_preset(preset_index: usize, options: &GameOptions) -> Self {
        let preset_index = preset_index.min(PRESETS.len() - 1);
        let session = EditorSession::new(
            EditorConfig {
                target: TargetSource::Literal(PRESETS[preset_index].curve),
                grading: GradingMode::Numeric,
                target_visible: false,
                duration: options.freestyle_duration_secs,
                motion: PreviewMotion::Slide,
            },
            options.start_curve(),
        );
        Self {
            preset_index,
            session,
            result: None,
        }
    }

    pub fn preset(&self) -> &FreestylePreset {
        &PRESETS[self.preset_index]
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    /// Ergebnis der letzten Prüfung (None bis "Check").
    pub fn result(&self) -> Option<Score> {
        self.result
    }

    pub fn rating(&self) -> Option<ScoreRating> {
        self.result.map(ScoreRating::from_score)
    }

    /// Bewertet die Nutzerkurve und deckt die Zielkurve auf.
    pub fn check(&mut self) -> Score {
        let score = self.session.score();
        self.session.reveal_target();
        self.result = Some(score);
        score
    }

    /// Setzt einen Parameter über den Schieberegler (Wert wird auf den Reglerbereich begrenzt).
    pub fn set_parameter(&mut self, index: usize, value: f64) -> bool {
        let value = value.clamp(*SLIDER_RANGE.start(), *SLIDER_RANGE.end());
        self.session.set_parameter(index, value)
    }

    /// Verwirft die Runde und startet eine neue.
    pub fn new_challenge(&mut self, rng: &mut impl Rng, options: &GameOptions) {
        self.session.teardown();
        *self = Self::new(rng, options);
    }
}
