//! Drag-Zustandsmaschine für die beiden Kontrollpunkt-Handles.
//!
//! `Idle → Dragging(H)` nur per Pointer-Down auf einen Handle, `Dragging(H) → Idle`
//! nur per Pointer-Up (egal wo) oder Teardown. Während eines Drags werden weitere
//! Pointer-Downs ignoriert.

use super::curve::{ControlHandle, CurveSpec};
use super::mapper::CoordinateMapper;
use glam::Vec2;

/// Beobachtbarer Drag-Zustand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DragState {
    #[default]
    Idle,
    DraggingP1,
    DraggingP2,
}

impl DragState {
    /// Gerade gezogener Handle, `None` im Leerlauf.
    pub fn handle(self) -> Option<ControlHandle> {
        match self {
            DragState::Idle => None,
            DragState::DraggingP1 => Some(ControlHandle::P1),
            DragState::DraggingP2 => Some(ControlHandle::P2),
        }
    }
}

impl From<ControlHandle> for DragState {
    fn from(handle: ControlHandle) -> Self {
        match handle {
            ControlHandle::P1 => DragState::DraggingP1,
            ControlHandle::P2 => DragState::DraggingP2,
        }
    }
}

/// Exklusive, globale Pointer-Erfassung für die Dauer eines Drags.
///
/// Existiert genau so lange, wie der Drag läuft. Freigabe passiert beim Drop,
/// also auf jedem Exit-Pfad (Pointer-Up, Teardown, Drop der Session).
#[derive(Debug)]
pub struct PointerCapture {
    handle: ControlHandle,
}

impl PointerCapture {
    fn acquire(handle: ControlHandle) -> Self {
        log::debug!("Pointer-Capture für {:?} übernommen", handle);
        Self { handle }
    }

    /// Handle, für den die Erfassung gilt.
    pub fn handle(&self) -> ControlHandle {
        self.handle
    }
}

impl Drop for PointerCapture {
    fn drop(&mut self) {
        log::debug!("Pointer-Capture für {:?} freigegeben", self.handle);
    }
}

/// Verwaltet die Pointer-Erfassung für höchstens einen Handle.
#[derive(Debug, Default)]
pub struct DragController {
    capture: Option<PointerCapture>,
}

impl DragController {
    /// Erstellt einen Controller im Zustand `Idle`.
    pub fn new() -> Self {
        Self { capture: None }
    }

    /// Aktueller Zustand (abgeleitet aus der gehaltenen Erfassung).
    pub fn state(&self) -> DragState {
        self.capture
            .as_ref()
            .map_or(DragState::Idle, |c| DragState::from(c.handle()))
    }

    /// Wird gerade ein Handle gezogen?
    pub fn is_capturing(&self) -> bool {
        self.capture.is_some()
    }

    /// Pointer-Down auf `handle`. Gibt `false` zurück, wenn bereits ein Drag läuft.
    pub fn pointer_down(&mut self, handle: ControlHandle) -> bool {
        if self.capture.is_some() {
            return false;
        }
        self.capture = Some(PointerCapture::acquire(handle));
        true
    }

    /// Pointer-Move: überschreibt den gezogenen Kontrollpunkt in `curve`.
    ///
    /// Der Mapper wird pro Aufruf aus dem *aktuellen* Zustand von `curve` und
    /// `target` gebaut, damit keine veraltete Skalierung verwendet wird.
    /// Gibt `false` zurück, wenn kein Drag läuft.
    pub fn pointer_move(
        &self,
        surface_pos: Vec2,
        surface_size: Vec2,
        curve: &mut CurveSpec,
        target: Option<&CurveSpec>,
    ) -> bool {
        let Some(capture) = self.capture.as_ref() else {
            return false;
        };
        let mapper = CoordinateMapper::for_curves(surface_size, curve, target);
        curve.set_point(capture.handle(), mapper.from_surface(surface_pos));
        true
    }

    /// Pointer-Up (egal wo). Gibt `true` zurück, wenn ein Drag beendet wurde.
    pub fn pointer_up(&mut self) -> bool {
        self.capture.take().is_some()
    }

    /// Teardown: gibt eine laufende Erfassung sofort frei.
    pub fn release(&mut self) {
        if self.capture.take().is_some() {
            log::debug!("Drag durch Teardown beendet");
        }
    }
}
