//! Der eine, parametrisierte Kurven-Editor.
//!
//! Geführter Modus ("Kurve nachbauen"), Multiple-Choice-Level und Freestyle nutzen
//! dieselbe Session. Unterschiede liegen ausschließlich in der `EditorConfig`:
//! Quelle der Zielkurve, Bewertungsmodus, Sichtbarkeit des Ziels, Vorschau-Takt.

use crate::core::{
    score_choice, score_curves, ControlHandle, CoordinateMapper, CurveSpec, DragController,
    DragState, EasingFunction, GradingMode, LivePreview, PreviewMotion, Score, Viewport,
};
use glam::Vec2;

/// Herkunft der Zielkurve
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum TargetSource {
    /// Benannte Easing-Funktion aus dem Katalog
    Named(EasingFunction),
    /// Wörtliche Kurvenparameter (Freestyle-Preset)
    Literal(CurveSpec),
}

impl TargetSource {
    /// Kanonische Kurve des Ziels.
    pub fn curve(&self) -> CurveSpec {
        match self {
            TargetSource::Named(easing) => easing.curve(),
            TargetSource::Literal(curve) => *curve,
        }
    }

    /// Easing-Name des Ziels (bei wörtlichen Kurven per Rückwärtssuche im Katalog).
    pub fn easing(&self) -> Option<EasingFunction> {
        match self {
            TargetSource::Named(easing) => Some(*easing),
            TargetSource::Literal(curve) => EasingFunction::from_curve(curve),
        }
    }
}

/// Konfiguration einer Editor-Session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EditorConfig {
    pub target: TargetSource,
    pub grading: GradingMode,
    /// Zielkurve auf der Zeichenfläche sichtbar (fließt dann in den Viewport ein)
    pub target_visible: bool,
    /// Dauer einer Vorschau-Iteration in Sekunden
    pub duration: f32,
    pub motion: PreviewMotion,
}

/// Editor-Session: besitzt Nutzerkurve, Drag-Zustand und beide Vorschauen.
///
/// Die Zielkurve ist read-only. Beim Drop wird eine laufende Pointer-Erfassung
/// freigegeben.
#[derive(Debug)]
pub struct EditorSession {
    config: EditorConfig,
    user: CurveSpec,
    drag: DragController,
    selected_easing: Option<EasingFunction>,
    user_preview: LivePreview,
    target_preview: LivePreview,
    last_score: Option<Score>,
}

impl EditorSession {
    /// Erstellt eine Session mit Startkurve `start` (X wird geklemmt).
    pub fn new(config: EditorConfig, start: CurveSpec) -> Self {
        let user = start.with_clamped_x();
        Self {
            user_preview: LivePreview::new(user, config.duration, config.motion),
            target_preview: LivePreview::new(
                config.target.curve(),
                config.duration,
                config.motion,
            ),
            config,
            user,
            drag: DragController::new(),
            selected_easing: None,
            last_score: None,
        }
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    /// Aktuelle Nutzerkurve.
    pub fn user(&self) -> CurveSpec {
        self.user
    }

    /// Zielkurve (unabhängig von der Sichtbarkeit).
    pub fn target(&self) -> CurveSpec {
        self.config.target.curve()
    }

    /// Zielkurve, falls sie angezeigt wird.
    pub fn visible_target(&self) -> Option<CurveSpec> {
        self.config.target_visible.then(|| self.target())
    }

    pub fn selected_easing(&self) -> Option<EasingFunction> {
        self.selected_easing
    }

    pub fn last_score(&self) -> Option<Score> {
        self.last_score
    }

    pub fn drag_state(&self) -> DragState {
        self.drag.state()
    }

    pub fn is_dragging(&self) -> bool {
        self.drag.is_capturing()
    }

    pub fn user_preview(&self) -> &LivePreview {
        &self.user_preview
    }

    pub fn user_preview_mut(&mut self) -> &mut LivePreview {
        &mut self.user_preview
    }

    pub fn target_preview(&self) -> &LivePreview {
        &self.target_preview
    }

    pub fn target_preview_mut(&mut self) -> &mut LivePreview {
        &mut self.target_preview
    }

    /// Viewport, frisch aus dem aktuellen Zustand berechnet.
    pub fn viewport(&self) -> Viewport {
        let target = self.visible_target();
        Viewport::fit(&self.user, target.as_ref())
    }

    /// Mapper für eine Zeichenfläche der Größe `surface`.
    pub fn mapper(&self, surface: Vec2) -> CoordinateMapper {
        CoordinateMapper::new(surface, self.viewport())
    }

    /// Handle unter `surface_pos` innerhalb von `pick_radius` Pixeln.
    ///
    /// Liegen beide Handles im Radius, gewinnt der nähere; bei Gleichstand P2,
    /// da er oben gezeichnet wird.
    pub fn handle_at(
        &self,
        surface_pos: Vec2,
        surface: Vec2,
        pick_radius: f32,
    ) -> Option<ControlHandle> {
        let mapper = self.mapper(surface);
        let mut best: Option<(ControlHandle, f32)> = None;
        for handle in ControlHandle::BOTH {
            let distance = mapper
                .to_surface(self.user.point(handle))
                .distance(surface_pos);
            if distance > pick_radius {
                continue;
            }
            if best.is_none_or(|(_, d)| distance <= d) {
                best = Some((handle, distance));
            }
        }
        best.map(|(handle, _)| handle)
    }

    /// Pointer-Down auf einem Handle. `false`, wenn bereits ein Drag läuft.
    pub fn pointer_down(&mut self, handle: ControlHandle) -> bool {
        self.drag.pointer_down(handle)
    }

    /// Pointer-Move (globale Erfassung, Position relativ zur Zeichenfläche).
    pub fn pointer_move(&mut self, surface_pos: Vec2, surface: Vec2) -> bool {
        let target = self.visible_target();
        let moved = self
            .drag
            .pointer_move(surface_pos, surface, &mut self.user, target.as_ref());
        if moved {
            self.user_preview.set_timing(self.user);
        }
        moved
    }

    /// Pointer-Up (egal wo). Startet die Nutzer-Vorschau mit der neuen Kurve neu.
    pub fn pointer_up(&mut self) -> bool {
        let ended = self.drag.pointer_up();
        if ended {
            self.user_preview.retime(self.user);
        }
        ended
    }

    /// Setzt einen einzelnen Kurvenparameter (X-Werte werden geklemmt).
    pub fn set_parameter(&mut self, index: usize, value: f64) -> bool {
        if !value.is_finite() || !self.user.set_parameter(index, value) {
            return false;
        }
        self.user_preview.set_timing(self.user);
        true
    }

    /// Wählt eine Easing-Funktion; die Nutzerkurve übernimmt deren Parameter.
    pub fn select_easing(&mut self, easing: EasingFunction) {
        self.selected_easing = Some(easing);
        self.user = easing.curve();
        self.user_preview.retime(self.user);
    }

    /// Blendet die Zielkurve ein; ab dann zählt sie im Viewport mit.
    pub fn reveal_target(&mut self) {
        self.config.target_visible = true;
    }

    /// Bewertet die aktuelle Eingabe gemäß Bewertungsmodus.
    pub fn score(&mut self) -> Score {
        let score = match self.config.grading {
            GradingMode::Numeric => score_curves(&self.user, &self.target()),
            GradingMode::Symbolic => match (self.selected_easing, self.config.target.easing()) {
                (Some(choice), Some(target)) => score_choice(choice, target),
                _ => Score::ZERO,
            },
        };
        self.last_score = Some(score);
        score
    }

    /// Startet beide Vorschauen neu.
    pub fn replay(&mut self) {
        self.user_preview.replay();
        self.target_preview.replay();
    }

    /// Setzt die Session auf eine neue Startkurve zurück.
    pub fn reset(&mut self, start: CurveSpec) {
        self.drag.release();
        self.user = start.with_clamped_x();
        self.selected_easing = None;
        self.last_score = None;
        self.user_preview.retime(self.user);
        self.target_preview.replay();
    }

    /// Teardown: eine laufende Pointer-Erfassung wird sofort freigegeben.
    pub fn teardown(&mut self) {
        self.drag.release();
    }
}
