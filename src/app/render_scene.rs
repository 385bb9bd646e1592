//! Builder für Render-Szenen aus einer Editor-Session.

use crate::app::session::EditorSession;
use crate::render::{build_scene, CurveScene};
use crate::shared::GameOptions;

/// Baut eine CurveScene aus Nutzerkurve und (sichtbarer) Zielkurve.
pub fn build(session: &EditorSession, options: &GameOptions) -> CurveScene {
    let target = session.visible_target();
    build_scene(
        &session.user(),
        target.as_ref(),
        options.surface_size(),
        options.grid_divisions,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::freestyle::FreestyleRound;

    #[test]
    fn test_hidden_target_is_not_in_scene() {
        let options = GameOptions::default();
        let mut round = FreestyleRound::with_preset(0, &options);

        let scene = build(round.session(), &options);
        assert!(scene.target.is_none());

        round.check();
        let scene = build(round.session(), &options);
        assert!(scene.target.is_some());
    }

    #[test]
    fn test_scene_uses_option_surface_size() {
        let mut options = GameOptions::default();
        options.editor_width = 500.0;
        let round = FreestyleRound::with_preset(0, &options);

        let scene = build(round.session(), &options);

        assert_eq!(scene.surface_size.x, 500.0);
    }
}
