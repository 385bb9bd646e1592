use crate::app::state::GameMode;
use crate::core::{ControlHandle, EasingFunction};
use crate::shared::GameOptions;

/// Commands sind mutierende Schritte, die zentral ausgeführt werden.
#[derive(Debug, Clone)]
pub enum AppCommand {
    /// Spielmodus setzen (gibt Drags des alten Modus frei)
    SetMode { mode: GameMode },
    /// Anwendung beenden
    RequestExit,

    /// Easing-Funktion der Multiple-Choice-Session setzen
    SelectEasing { easing: EasingFunction },
    /// Symbolische Antwort bewerten und Feedback erzeugen
    CheckAnswer,
    /// Hinweis erzeugen
    ShowHint { now: f64 },
    /// Hinweis entfernen
    ClearHint,
    /// Feedback-Fenster schließen
    DismissFeedback,
    /// Zum nächsten Level wechseln
    AdvanceLevel,
    /// Level neu mischen und von vorn beginnen
    RestartRun,
    /// Editor "Kurve nachbauen" öffnen
    StartRecreate,
    /// Nachbau numerisch gegen das Ziel bewerten
    ScoreRecreate,

    /// Vorschauen des aktiven Editors neu starten
    ReplayPreviews,
    /// Drag auf einem Handle beginnen
    BeginHandleDrag { handle: ControlHandle },
    /// Gezogenen Handle auf Surface-Position setzen
    UpdateHandleDrag {
        surface_pos: glam::Vec2,
        surface_size: glam::Vec2,
    },
    /// Drag beenden
    EndHandleDrag,
    /// Kurvenparameter setzen
    SetCurveParameter { index: usize, value: f64 },

    /// Freestyle-Schätzung bewerten und Ziel aufdecken
    CheckGuess,
    /// Neue Freestyle-Runde
    NewChallenge,

    /// Options-Dialog öffnen
    OpenOptionsDialog,
    /// Options-Dialog schließen
    CloseOptionsDialog,
    /// Optionen anwenden und speichern
    ApplyOptions { options: GameOptions },
    /// Optionen auf Standardwerte zurücksetzen
    ResetOptions,
}
