//! Application State: zentrale Datenhaltung.

use super::freestyle::FreestyleRound;
use super::guided::GuidedRun;
use super::session::EditorSession;
use super::CommandLog;
use crate::shared::GameOptions;
use rand::rngs::StdRng;
use rand::SeedableRng;

/// Aktiver Spielmodus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    /// Level erkennen, optional Kurve nachbauen
    #[default]
    Guided,
    /// Mystery Curve nachbauen
    Freestyle,
}

impl GameMode {
    /// Anzeigename im Header.
    pub fn label(self) -> &'static str {
        match self {
            GameMode::Guided => "Challenges",
            GameMode::Freestyle => "Freestyle",
        }
    }
}

/// Hauptzustand der Anwendung
pub struct AppState {
    /// Aktiver Spielmodus
    pub mode: GameMode,
    /// Durchlauf des geführten Modus
    pub guided: GuidedRun,
    /// Aktuelle Freestyle-Runde
    pub freestyle: FreestyleRound,
    /// Verlauf ausgeführter Commands
    pub command_log: CommandLog,
    /// Laufzeit-Optionen (Fläche, Farben, Linien, Zeiten)
    pub options: GameOptions,
    /// Ob der Options-Dialog angezeigt wird
    pub show_options_dialog: bool,
    /// Signalisiert dem Host (eframe), die Anwendung kontrolliert zu beenden
    pub should_exit: bool,
    /// Zufallsquelle für Level-Reihenfolge und Presets
    pub(crate) rng: StdRng,
}

impl AppState {
    /// Erstellt einen neuen App-State mit Standard-Optionen
    pub fn new() -> Self {
        Self::with_options(GameOptions::default())
    }

    /// Erstellt einen App-State mit geladenen Optionen
    pub fn with_options(options: GameOptions) -> Self {
        Self::build(options, StdRng::from_entropy())
    }

    /// Deterministischer App-State (Tests, Benchmarks)
    pub fn with_seed(seed: u64) -> Self {
        Self::build(GameOptions::default(), StdRng::seed_from_u64(seed))
    }

    fn build(options: GameOptions, mut rng: StdRng) -> Self {
        let guided = GuidedRun::new(&mut rng);
        let freestyle = FreestyleRound::new(&mut rng, &options);
        Self {
            mode: GameMode::default(),
            guided,
            freestyle,
            command_log: CommandLog::new(),
            options,
            show_options_dialog: false,
            should_exit: false,
            rng,
        }
    }

    /// Editor, der im aktuellen Modus Pointer- und Parameter-Eingaben bekommt.
    pub fn active_editor_mut(&mut self) -> &mut EditorSession {
        match self.mode {
            GameMode::Guided => self.guided.active_session_mut(),
            GameMode::Freestyle => self.freestyle.session_mut(),
        }
    }

    /// Editor mit Zeichenfläche im aktuellen Modus (None im Multiple-Choice-Bildschirm).
    pub fn canvas_editor(&self) -> Option<&EditorSession> {
        match self.mode {
            GameMode::Guided => self.guided.recreate(),
            GameMode::Freestyle => Some(self.freestyle.session()),
        }
    }

    /// Läuft gerade ein Handle-Drag im aktiven Editor?
    pub fn is_dragging(&self) -> bool {
        self.canvas_editor().is_some_and(EditorSession::is_dragging)
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
