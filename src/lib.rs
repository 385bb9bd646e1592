//! Smooth Operator Library.
//! Spiel-Kern (Kurven, Editor, Bewertung, Vorschau) als Library exportiert
//! für Tests, Benchmarks und Wiederverwendung.

pub mod app;
pub mod core;
pub mod render;
pub mod shared;
pub mod ui;

pub use app::{
    AppCommand, AppController, AppIntent, AppState, EditorSession, FeedbackProvider,
    FreestyleRound, GameMode, GuidedRun, OfflineFeedback,
};
pub use core::{
    ControlHandle, CoordinateMapper, CurvePoint, CurveSpec, DragController, DragState,
    EasingFunction, LivePreview, Score, ScoreRating, Viewport,
};
pub use render::CurveScene;
pub use shared::GameOptions;
