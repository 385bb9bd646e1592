//! Takt der Live-Vorschau: ein Element bewegt sich mit einer Timing-Kurve hin und her.
//!
//! Die Vorschau kennt keine Pause. `replay` ist ein Identitätswechsel: die
//! Generation wird erhöht und die nächste Abtastung beginnt wieder bei Zeit null.

use super::curve::CurveSpec;

/// Kleinste zulässige Dauer einer Iteration in Sekunden.
pub const MIN_DURATION: f32 = 0.05;

/// Bewegungsart des Vorschau-Elements
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PreviewMotion {
    /// Hin und zurück, Richtung wechselt pro Iteration
    #[default]
    Alternate,
    /// Einweg-Fahrt, die nach jeder Iteration von vorn beginnt
    Slide,
}

/// Live-Vorschau einer Timing-Kurve
#[derive(Debug, Clone, PartialEq)]
pub struct LivePreview {
    timing: CurveSpec,
    duration: f32,
    motion: PreviewMotion,
    generation: u64,
    epoch: Option<f64>,
}

impl LivePreview {
    /// Erstellt eine Vorschau; Dauern ≤ 0 (oder NaN) werden auf `MIN_DURATION` angehoben.
    pub fn new(timing: CurveSpec, duration: f32, motion: PreviewMotion) -> Self {
        Self {
            timing,
            duration: sanitize_duration(duration),
            motion,
            generation: 0,
            epoch: None,
        }
    }

    /// Aktuelle Timing-Kurve.
    pub fn timing(&self) -> CurveSpec {
        self.timing
    }

    /// Dauer einer Iteration in Sekunden.
    pub fn duration(&self) -> f32 {
        self.duration
    }

    /// Bewegungsart.
    pub fn motion(&self) -> PreviewMotion {
        self.motion
    }

    /// Identität der laufenden Animation; ändert sich mit jedem Replay.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Timing-String für die Anzeige, z.B. `cubic-bezier(0.42, 0.00, 0.58, 1.00)`.
    pub fn timing_string(&self, decimals: usize) -> String {
        self.timing.to_css_string(decimals)
    }

    /// Startet die Animation neu; die nächste Abtastung liegt bei Zeit null.
    pub fn replay(&mut self) {
        self.generation = self.generation.wrapping_add(1);
        self.epoch = None;
    }

    /// Tauscht die Timing-Kurve und startet neu.
    pub fn retime(&mut self, timing: CurveSpec) {
        self.timing = timing;
        self.replay();
    }

    /// Tauscht die Timing-Kurve ohne Neustart (laufende Iteration läuft weiter).
    pub fn set_timing(&mut self, timing: CurveSpec) {
        self.timing = timing;
    }

    /// Setzt eine neue Dauer und startet neu.
    pub fn set_duration(&mut self, duration: f32) {
        self.duration = sanitize_duration(duration);
        self.replay();
    }

    /// Position auf der Bahn in [0, 1] (Overshoot möglich) zum Zeitpunkt `now` in Sekunden.
    ///
    /// Die erste Abtastung nach Erstellung oder Replay legt den Zeitnullpunkt fest.
    pub fn sample(&mut self, now: f64) -> f32 {
        let epoch = *self.epoch.get_or_insert(now);
        let elapsed = (now - epoch).max(0.0) / f64::from(self.duration);
        let iteration = elapsed.floor();
        let fraction = elapsed - iteration;

        let progress = match self.motion {
            PreviewMotion::Slide => self.timing.ease(fraction),
            PreviewMotion::Alternate => {
                // Rückwärts-Iteration: die Kurve läuft gespiegelt in der Zeit
                if iteration as u64 % 2 == 1 {
                    self.timing.ease(1.0 - fraction)
                } else {
                    self.timing.ease(fraction)
                }
            }
        };
        progress as f32
    }
}

fn sanitize_duration(duration: f32) -> f32 {
    if duration.is_finite() && duration > MIN_DURATION {
        duration
    } else {
        MIN_DURATION
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::EasingFunction;
    use approx::assert_relative_eq;

    fn linear(motion: PreviewMotion) -> LivePreview {
        LivePreview::new(CurveSpec::LINEAR, 2.0, motion)
    }

    #[test]
    fn test_first_sample_starts_at_zero() {
        let mut preview = linear(PreviewMotion::Alternate);
        assert_relative_eq!(preview.sample(100.0), 0.0);
        assert_relative_eq!(preview.sample(101.0), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_alternate_runs_back() {
        let mut preview = linear(PreviewMotion::Alternate);
        preview.sample(0.0);
        assert_relative_eq!(preview.sample(1.0), 0.5, epsilon = 1e-4);
        assert_relative_eq!(preview.sample(2.5), 0.75, epsilon = 1e-4);
        assert_relative_eq!(preview.sample(3.5), 0.25, epsilon = 1e-4);
        assert_relative_eq!(preview.sample(4.5), 0.25, epsilon = 1e-4);
    }

    #[test]
    fn test_slide_restarts_each_iteration() {
        let mut preview = linear(PreviewMotion::Slide);
        preview.sample(0.0);
        assert_relative_eq!(preview.sample(1.5), 0.75, epsilon = 1e-4);
        assert_relative_eq!(preview.sample(2.5), 0.25, epsilon = 1e-4);
    }

    #[test]
    fn test_replay_restarts_from_zero_and_changes_identity() {
        let mut preview = linear(PreviewMotion::Alternate);
        preview.sample(0.0);
        preview.sample(1.2);
        let before = preview.generation();

        preview.replay();
        assert_ne!(preview.generation(), before);
        assert_relative_eq!(preview.sample(50.0), 0.0);
        assert_relative_eq!(preview.sample(51.0), 0.5, epsilon = 1e-4);
    }

    #[test]
    fn test_retime_swaps_curve_and_replays() {
        let mut preview = linear(PreviewMotion::Slide);
        preview.sample(0.0);
        let ease_in = EasingFunction::EaseIn.curve();

        preview.retime(ease_in);
        assert_eq!(preview.timing(), ease_in);
        assert_eq!(preview.generation(), 1);
        preview.sample(10.0);
        assert!(preview.sample(10.5) < 0.25, "ease-in startet langsam");
    }

    #[test]
    fn test_set_timing_keeps_clock_running() {
        let mut preview = linear(PreviewMotion::Slide);
        preview.sample(0.0);
        preview.set_timing(EasingFunction::EaseOut.curve());
        assert_eq!(preview.generation(), 0);
        assert!(preview.sample(1.0) > 0.5, "Uhr läuft weiter, ease-out liegt vorn");
    }

    #[test]
    fn test_non_positive_duration_is_lifted() {
        for duration in [0.0, -3.0, f32::NAN] {
            let mut preview = LivePreview::new(CurveSpec::LINEAR, duration, PreviewMotion::Slide);
            assert_relative_eq!(preview.duration(), MIN_DURATION);
            preview.sample(0.0);
            assert!(preview.sample(7.3).is_finite());
        }
    }

    #[test]
    fn test_overshoot_is_not_clamped() {
        let mut preview = LivePreview::new(
            EasingFunction::EaseOutBack.curve(),
            1.0,
            PreviewMotion::Slide,
        );
        preview.sample(0.0);
        let peak = (1..20)
            .map(|i| preview.sample(i as f64 / 20.0))
            .fold(f32::NEG_INFINITY, f32::max);
        assert!(peak > 1.0);
    }
}
