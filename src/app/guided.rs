//! Geführter Modus: gemischte Level, Multiple-Choice, optional "Kurve nachbauen".

use super::feedback::FeedbackProvider;
use super::levels::{Level, LEVELS};
use super::session::{EditorConfig, EditorSession, TargetSource};
use crate::core::{EasingFunction, GradingMode, PreviewMotion, Score};
use crate::shared::GameOptions;
use rand::seq::SliceRandom;
use rand::Rng;

/// Angezeigter Hinweis mit Zeitpunkt der Anzeige (Sekunden, UI-Uhr)
#[derive(Debug, Clone, PartialEq)]
pub struct HintNote {
    pub text: String,
    pub shown_at: f64,
}

impl HintNote {
    /// Ist der Hinweis nach `display_secs` abgelaufen?
    pub fn is_expired(&self, now: f64, display_secs: f32) -> bool {
        now - self.shown_at >= f64::from(display_secs)
    }
}

/// Zustand eines Durchlaufs durch alle Level
#[derive(Debug)]
pub struct GuidedRun {
    order: Vec<Level>,
    index: usize,
    session: EditorSession,
    recreate: Option<EditorSession>,
    last_score: Option<Score>,
    feedback: Option<String>,
    show_feedback: bool,
    hint: Option<HintNote>,
    completed: bool,
}

fn shuffled_levels(rng: &mut impl Rng) -> Vec<Level> {
    let mut order = LEVELS.to_vec();
    order.shuffle(rng);
    order
}

/// Multiple-Choice-Session eines Levels; Auswahl startet bei `linear`.
fn choice_session(level: &Level) -> EditorSession {
    let mut session = EditorSession::new(
        EditorConfig {
            target: TargetSource::Named(level.easing),
            grading: GradingMode::Symbolic,
            target_visible: false,
            duration: level.duration,
            motion: PreviewMotion::Alternate,
        },
        EasingFunction::Linear.curve(),
    );
    session.select_easing(EasingFunction::Linear);
    session
}

impl GuidedRun {
    /// Neuer Durchlauf mit frisch gemischter Level-Reihenfolge.
    pub fn new(rng: &mut impl Rng) -> Self {
        let order = shuffled_levels(rng);
        let session = choice_session(&order[0]);
        Self {
            order,
            index: 0,
            session,
            recreate: None,
            last_score: None,
            feedback: None,
            show_feedback: false,
            hint: None,
            completed: false,
        }
    }

    /// Aktuelles Level.
    pub fn current_level(&self) -> &Level {
        &self.order[self.index]
    }

    /// Reihenfolge dieses Durchlaufs.
    pub fn order(&self) -> &[Level] {
        &self.order
    }

    /// 1-basierte Levelnummer für die Anzeige.
    pub fn level_number(&self) -> usize {
        self.index + 1
    }

    pub fn level_count(&self) -> usize {
        self.order.len()
    }

    pub fn session(&self) -> &EditorSession {
        &self.session
    }

    pub fn session_mut(&mut self) -> &mut EditorSession {
        &mut self.session
    }

    pub fn recreate(&self) -> Option<&EditorSession> {
        self.recreate.as_ref()
    }

    pub fn recreate_mut(&mut self) -> Option<&mut EditorSession> {
        self.recreate.as_mut()
    }

    /// Editor, der gerade Eingaben bekommt ("Kurve nachbauen" hat Vorrang).
    pub fn active_session_mut(&mut self) -> &mut EditorSession {
        match self.recreate.as_mut() {
            Some(recreate) => recreate,
            None => &mut self.session,
        }
    }

    /// Aktuell gewählte Easing-Funktion.
    pub fn selected_easing(&self) -> EasingFunction {
        self.session
            .selected_easing()
            .unwrap_or(EasingFunction::Linear)
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn feedback(&self) -> Option<&str> {
        self.feedback.as_deref()
    }

    pub fn is_feedback_open(&self) -> bool {
        self.show_feedback
    }

    pub fn hint(&self) -> Option<&HintNote> {
        self.hint.as_ref()
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn is_recreating(&self) -> bool {
        self.recreate.is_some()
    }

    /// Nachbauen ist nur nach einer richtigen Antwort möglich.
    pub fn can_recreate(&self) -> bool {
        self.last_score.is_some_and(Score::is_perfect)
    }

    /// Wählt eine Easing-Funktion für die Nutzer-Vorschau.
    pub fn select_easing(&mut self, easing: EasingFunction) {
        self.session.select_easing(easing);
    }

    /// Prüft die Antwort und öffnet das Feedback-Fenster.
    pub fn check_answer(&mut self, provider: &dyn FeedbackProvider) -> Score {
        let score = self.session.score();
        let level = *self.current_level();
        let text = provider.feedback(&level, self.selected_easing(), score.is_perfect());
        self.last_score = Some(score);
        self.feedback = Some(text);
        self.show_feedback = true;
        score
    }

    /// Fordert einen Hinweis an; er läuft nach der konfigurierten Zeit ab.
    pub fn request_hint(&mut self, provider: &dyn FeedbackProvider, now: f64) {
        let level = *self.current_level();
        let text = provider.hint(&level, self.selected_easing());
        self.hint = Some(HintNote {
            text,
            shown_at: now,
        });
    }

    /// Entfernt einen abgelaufenen Hinweis.
    pub fn expire_hint(&mut self) {
        self.hint = None;
    }

    /// Schließt das Feedback-Fenster ("Try again").
    pub fn dismiss_feedback(&mut self) {
        self.show_feedback = false;
    }

    /// Öffnet den Editor "Kurve nachbauen" für das aktuelle Level.
    ///
    /// Gibt `false` zurück, wenn die Antwort noch nicht richtig war.
    pub fn start_recreate(&mut self, options: &GameOptions) -> bool {
        if !self.can_recreate() {
            return false;
        }
        let level = *self.current_level();
        self.show_feedback = false;
        self.session.teardown();
        self.recreate = Some(EditorSession::new(
            EditorConfig {
                target: TargetSource::Named(level.easing),
                grading: GradingMode::Numeric,
                target_visible: true,
                duration: level.duration,
                motion: PreviewMotion::Alternate,
            },
            options.start_curve(),
        ));
        true
    }

    /// Nächstes Level; nach dem letzten ist der Durchlauf abgeschlossen.
    pub fn next_level(&mut self) {
        self.show_feedback = false;
        self.feedback = None;
        self.last_score = None;
        self.hint = None;
        self.teardown_recreate();

        if self.index + 1 >= self.order.len() {
            self.completed = true;
            self.session.teardown();
            return;
        }

        self.index += 1;
        self.session.teardown();
        self.session = choice_session(&self.order[self.index]);
    }

    /// Neuer Durchlauf mit neu gemischter Reihenfolge.
    pub fn play_again(&mut self, rng: &mut impl Rng) {
        self.teardown();
        *self = Self::new(rng);
    }

    /// Startet alle Vorschauen des aktiven Bildschirms neu.
    pub fn replay(&mut self) {
        self.active_session_mut().replay();
    }

    /// Gibt alle Pointer-Erfassungen frei (Moduswechsel, Levelwechsel).
    pub fn teardown(&mut self) {
        self.session.teardown();
        if let Some(recreate) = self.recreate.as_mut() {
            recreate.teardown();
        }
    }

    fn teardown_recreate(&mut self) {
        if let Some(mut recreate) = self.recreate.take() {
            recreate.teardown();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feedback::OfflineFeedback;
    use crate::core::ControlHandle;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn run() -> GuidedRun {
        GuidedRun::new(&mut StdRng::seed_from_u64(7))
    }

    #[test]
    fn test_order_is_permutation_of_catalog() {
        let run = run();
        assert_eq!(run.level_count(), LEVELS.len());
        for level in &LEVELS {
            let in_catalog = LEVELS.iter().filter(|l| *l == level).count();
            let in_run = run.order().iter().filter(|l| *l == level).count();
            assert_eq!(in_catalog, in_run);
        }
    }

    #[test]
    fn test_starts_with_linear_selection() {
        let run = run();
        assert_eq!(run.level_number(), 1);
        assert_eq!(run.selected_easing(), EasingFunction::Linear);
        assert!(!run.is_completed());
    }

    #[test]
    fn test_correct_answer_unlocks_recreate() {
        let mut run = run();
        let answer = run.current_level().easing;
        run.select_easing(answer);

        let score = run.check_answer(&OfflineFeedback);
        assert!(score.is_perfect());
        assert!(run.is_feedback_open());
        assert!(run.can_recreate());
        assert!(run.start_recreate(&GameOptions::default()));
        assert!(run.is_recreating());
        assert!(!run.is_feedback_open());

        let Some(recreate) = run.recreate() else {
            panic!("Editor fehlt");
        };
        assert_eq!(recreate.config().grading, GradingMode::Numeric);
        assert!(recreate.visible_target().is_some());
    }

    #[test]
    fn test_wrong_answer_keeps_recreate_locked() {
        let mut run = run();
        let wrong = EasingFunction::ALL
            .into_iter()
            .find(|e| *e != run.current_level().easing)
            .unwrap_or(EasingFunction::Ease);
        run.select_easing(wrong);

        assert_eq!(run.check_answer(&OfflineFeedback), Score::ZERO);
        assert!(!run.can_recreate());
        assert!(!run.start_recreate(&GameOptions::default()));
        run.dismiss_feedback();
        assert!(!run.is_feedback_open());
    }

    #[test]
    fn test_next_level_resets_selection_and_completes() {
        let mut run = run();
        for expected in 2..=LEVELS.len() {
            run.select_easing(EasingFunction::EaseIn);
            run.next_level();
            assert_eq!(run.level_number(), expected);
            assert_eq!(run.selected_easing(), EasingFunction::Linear);
        }
        run.next_level();
        assert!(run.is_completed());

        run.play_again(&mut StdRng::seed_from_u64(8));
        assert!(!run.is_completed());
        assert_eq!(run.level_number(), 1);
    }

    #[test]
    fn test_hint_expires_after_display_time() {
        let mut run = run();
        run.request_hint(&OfflineFeedback, 10.0);
        let Some(hint) = run.hint() else {
            panic!("Hinweis fehlt");
        };
        assert!(!hint.is_expired(12.0, 5.0));
        assert!(hint.is_expired(15.0, 5.0));
        run.expire_hint();
        assert!(run.hint().is_none());
    }

    #[test]
    fn test_next_level_tears_down_recreate_drag() {
        let mut run = run();
        let answer = run.current_level().easing;
        run.select_easing(answer);
        run.check_answer(&OfflineFeedback);
        run.start_recreate(&GameOptions::default());

        if let Some(editor) = run.recreate_mut() {
            assert!(editor.pointer_down(ControlHandle::P1));
        }
        run.next_level();
        assert!(!run.is_recreating());
        assert!(!run.session().is_dragging());
    }
}
