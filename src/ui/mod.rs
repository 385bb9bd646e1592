//! UI-Komponenten: Kopfzeile, Spielbildschirme, Editor, Dialoge, Status.

mod easing_selector;
mod editor_canvas;
pub mod feedback_window;
pub mod freestyle_view;
pub mod guided_view;
pub mod header;
mod keyboard;
/// UI-Layer mit egui
///
/// Dieses Modul implementiert alle UI-Komponenten (Panels, Editor, Dialoge).
/// Keyboard-Shortcuts, Pointer-Eingaben der Zeichenfläche und das
/// Vorschau-Widget sind in eigene Dateien extrahiert.
pub mod options_dialog;
mod preview;
pub mod status;

pub use feedback_window::show_feedback_window;
pub use freestyle_view::render_freestyle_view;
pub use guided_view::render_guided_view;
pub use header::render_header;
pub use options_dialog::show_options_dialog;
pub use status::render_status_bar;

use crate::app::{AppIntent, AppState};

/// Sammelt Tastatur-Intents des aktuellen Frames.
pub fn collect_keyboard_intents(ctx: &egui::Context, state: &AppState) -> Vec<AppIntent> {
    keyboard::collect_keyboard_intents(ctx, state)
}
