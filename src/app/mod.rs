//! Application-Layer: Controller, State, Events, Spielmodi und Feature-Handler.

pub mod command_log;
pub mod controller;
pub mod events;
pub mod feedback;
pub mod freestyle;
pub mod guided;
pub mod handlers;
mod intent_mapping;
pub mod levels;
pub mod render_scene;
pub mod session;
/// Application State
///
/// Dieses Modul verwaltet den Zustand der Anwendung (Modus, Runden, Optionen).
pub mod state;

pub use command_log::CommandLog;
pub use controller::AppController;
pub use events::{AppCommand, AppIntent};
pub use feedback::{FeedbackProvider, OfflineFeedback};
pub use freestyle::FreestyleRound;
pub use guided::GuidedRun;
pub use levels::{Level, LEVELS};
pub use session::{EditorConfig, EditorSession, TargetSource};
pub use state::{AppState, GameMode};
