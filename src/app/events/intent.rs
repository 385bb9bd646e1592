use crate::app::state::GameMode;
use crate::core::{ControlHandle, EasingFunction};
use crate::shared::GameOptions;

/// App-Intent und App-Command Events.
/// Intents sind Eingaben aus UI/System ohne direkte Mutationslogik.
#[derive(Debug, Clone)]
pub enum AppIntent {
    /// Spielmodus wechseln (Header)
    SwitchModeRequested { mode: GameMode },
    /// Anwendung beenden
    ExitRequested,

    // ── Geführter Modus ─────────────────────────────────────────
    /// Easing-Funktion in der Auswahl angeklickt
    EasingSelected { easing: EasingFunction },
    /// "Check Answer"
    CheckAnswerRequested,
    /// "Get a Hint" (Zeitstempel der UI-Uhr in Sekunden)
    HintRequested { now: f64 },
    /// Hinweis-Anzeigedauer abgelaufen
    HintExpired,
    /// Feedback-Fenster geschlossen ("Try Again" / Esc)
    FeedbackDismissed,
    /// Weiter zum nächsten Level
    NextLevelRequested,
    /// Neuer Durchlauf nach Abschluss
    PlayAgainRequested,
    /// "Recreate the Curve" aus dem Feedback-Fenster
    RecreateCurveRequested,
    /// Nachbau numerisch bewerten
    RecreateScoreRequested,
    /// "Done, Next Level!" im Nachbau-Editor
    RecreateFinished,

    // ── Editor (beide Modi) ─────────────────────────────────────
    /// Alle Vorschauen neu starten
    ReplayRequested,
    /// Pointer-Down auf einem Handle
    HandlePressed { handle: ControlHandle },
    /// Globale Pointer-Bewegung während eines Drags (relativ zur Zeichenfläche)
    PointerMoved { surface_pos: glam::Vec2 },
    /// Pointer losgelassen (egal wo)
    PointerReleased,
    /// Einzelner Kurvenparameter per Schieberegler geändert
    CurveParameterChanged { index: usize, value: f64 },

    // ── Freestyle ───────────────────────────────────────────────
    /// "Check My Guess!"
    CheckGuessRequested,
    /// "New Challenge"
    NewChallengeRequested,

    /// Enter: prüft im aktuellen Kontext (Antwort bzw. Schätzung)
    ConfirmRequested,

    // ── Optionen ────────────────────────────────────────────────
    /// Options-Dialog öffnen
    OpenOptionsDialogRequested,
    /// Options-Dialog schließen
    CloseOptionsDialogRequested,
    /// Optionen wurden geändert (sofortige Anwendung)
    OptionsChanged { options: GameOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptionsRequested,
}

impl AppIntent {
    /// Verschiebt der Intent Kurve oder Handles der Zeichenfläche?
    ///
    /// Die Szene eines Frames wird vor der Verarbeitung gebaut; solche Intents
    /// erfordern einen zweiten Durchlauf, sonst hängt das Handle einen Frame nach.
    pub fn changes_canvas(&self) -> bool {
        matches!(
            self,
            AppIntent::HandlePressed { .. }
                | AppIntent::PointerMoved { .. }
                | AppIntent::PointerReleased
                | AppIntent::CurveParameterChanged { .. }
                | AppIntent::EasingSelected { .. }
                | AppIntent::OptionsChanged { .. }
        )
    }
}
