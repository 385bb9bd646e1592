//! Hinweis- und Feedback-Texte für den geführten Modus.
//!
//! Die Texterzeugung ist austauschbar (`FeedbackProvider`). Mitgeliefert wird eine
//! deterministische Offline-Variante, die ihre Texte aus dem Katalog ableitet.

use super::levels::Level;
use crate::core::{CurveSpec, EasingFunction};

/// Quelle für Hinweise und Rückmeldungen
pub trait FeedbackProvider {
    /// Kurzer Hinweis zur gesuchten Bewegung, ohne die Lösung zu nennen.
    fn hint(&self, level: &Level, selected: EasingFunction) -> String;

    /// Rückmeldung nach dem Prüfen der Antwort.
    fn feedback(&self, level: &Level, selected: EasingFunction, correct: bool) -> String;
}

/// Grobe Charakteristik einer Timing-Kurve
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum MotionTrait {
    Constant,
    SlowStart,
    FastStart,
    SlowBothEnds,
    WindUp,
    Overshoot,
}

impl MotionTrait {
    fn of(curve: &CurveSpec) -> Self {
        if curve.p1.y < 0.0 || curve.p2.y < 0.0 {
            return MotionTrait::WindUp;
        }
        if curve.p1.y > 1.0 || curve.p2.y > 1.0 {
            return MotionTrait::Overshoot;
        }
        if *curve == CurveSpec::LINEAR {
            return MotionTrait::Constant;
        }

        // Steigung an den Enden relativ zur Diagonalen
        let slow_start = curve.p1.y < curve.p1.x;
        let slow_end = curve.p2.y > curve.p2.x;
        match (slow_start, slow_end) {
            (true, true) => MotionTrait::SlowBothEnds,
            (true, false) => MotionTrait::SlowStart,
            (false, true) => MotionTrait::FastStart,
            (false, false) => MotionTrait::Constant,
        }
    }

    fn describe(self) -> &'static str {
        match self {
            MotionTrait::Constant => "moves at an even pace the whole way",
            MotionTrait::SlowStart => "takes its time getting going and finishes in a hurry",
            MotionTrait::FastStart => "leaves quickly and drifts gently into place",
            MotionTrait::SlowBothEnds => "eases in and eases out, rushing through the middle",
            MotionTrait::WindUp => "pulls back before it moves forward",
            MotionTrait::Overshoot => "shoots past the end and settles back",
        }
    }

    fn hint(self) -> &'static str {
        match self {
            MotionTrait::Constant => {
                "Does the speed change at all, or is every moment the same?"
            }
            MotionTrait::SlowStart => "Pay close attention to how the animation begins.",
            MotionTrait::FastStart => "Does the object seem to slow down before it stops?",
            MotionTrait::SlowBothEnds => "Compare the first and last moments with the middle.",
            MotionTrait::WindUp => "Watch the very first instant. Which way does it move?",
            MotionTrait::Overshoot => "Look closely at the end. Does it stop exactly on the mark?",
        }
    }
}

/// Deterministischer Anbieter ohne Netzwerkzugriff.
#[derive(Debug, Clone, Copy, Default)]
pub struct OfflineFeedback;

impl FeedbackProvider for OfflineFeedback {
    fn hint(&self, level: &Level, selected: EasingFunction) -> String {
        let target = MotionTrait::of(&level.easing.curve());
        let chosen = MotionTrait::of(&selected.curve());

        if selected != level.easing && target == chosen {
            // Richtige Familie, falsche Stärke
            return format!(
                "{} You are in the right family. Now judge how strong the effect is.",
                target.hint()
            );
        }
        target.hint().to_string()
    }

    fn feedback(&self, level: &Level, selected: EasingFunction, correct: bool) -> String {
        let target_trait = MotionTrait::of(&level.easing.curve());
        if correct {
            format!(
                "Spot on! \"{}\" {}. Reach for it whenever a motion should feel like that.",
                level.easing,
                target_trait.describe()
            )
        } else {
            format!(
                "Not quite. Your choice \"{}\" {}, while the target {}. Watch the replay again and compare.",
                selected,
                MotionTrait::of(&selected.curve()).describe(),
                target_trait.describe()
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::levels::LEVELS;

    #[test]
    fn test_traits_of_catalog_curves() {
        assert_eq!(MotionTrait::of(&EasingFunction::Linear.curve()), MotionTrait::Constant);
        assert_eq!(MotionTrait::of(&EasingFunction::EaseIn.curve()), MotionTrait::SlowStart);
        assert_eq!(MotionTrait::of(&EasingFunction::EaseOut.curve()), MotionTrait::FastStart);
        assert_eq!(
            MotionTrait::of(&EasingFunction::EaseInOut.curve()),
            MotionTrait::SlowBothEnds
        );
        assert_eq!(MotionTrait::of(&EasingFunction::EaseInBack.curve()), MotionTrait::WindUp);
        assert_eq!(
            MotionTrait::of(&EasingFunction::EaseOutBack.curve()),
            MotionTrait::Overshoot
        );
    }

    #[test]
    fn test_hint_never_names_the_answer() {
        let provider = OfflineFeedback;
        for level in &LEVELS {
            let hint = provider.hint(level, EasingFunction::Linear);
            assert!(!hint.is_empty());
            assert!(
                !hint.contains(level.easing.name()),
                "Hinweis verrät die Lösung: {hint}"
            );
        }
    }

    #[test]
    fn test_feedback_mentions_both_choices_when_wrong() {
        let provider = OfflineFeedback;
        let level = LEVELS[1];
        let text = provider.feedback(&level, EasingFunction::EaseOut, false);
        assert!(text.contains("ease-out"));
        assert!(text.contains("Not quite"));

        let text = provider.feedback(&level, level.easing, true);
        assert!(text.contains(level.easing.name()));
    }
}
