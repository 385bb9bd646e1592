//! Begrenztes Command-Log für Diagnose und Flow-Tests.

use super::AppCommand;

/// Speichert ausgeführte Commands in Reihenfolge.
#[derive(Default)]
pub struct CommandLog {
    entries: Vec<AppCommand>,
}

impl CommandLog {
    const MAX_ENTRIES: usize = 1000;
}

impl CommandLog {
    /// Erstellt ein leeres Command-Log.
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Fügt einen ausgeführten Command hinzu.
    /// Begrenzt auf MAX_ENTRIES, die ältere Hälfte wird dann verworfen.
    pub fn record(&mut self, command: &AppCommand) {
        // Pointer-Moves fluten das Log während eines Drags
        if matches!(command, AppCommand::UpdateHandleDrag { .. })
            && matches!(self.entries.last(), Some(AppCommand::UpdateHandleDrag { .. }))
        {
            if let Some(last) = self.entries.last_mut() {
                *last = command.clone();
            }
            return;
        }

        if self.entries.len() >= Self::MAX_ENTRIES {
            self.entries.drain(..Self::MAX_ENTRIES / 2);
        }
        self.entries.push(command.clone());
    }

    /// Gibt die Anzahl der geloggten Commands zurück.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Gibt `true` zurück, wenn keine Commands vorhanden sind.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Liefert eine read-only Sicht auf alle Einträge.
    pub fn entries(&self) -> &[AppCommand] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_consecutive_drag_updates_collapse() {
        let mut log = CommandLog::new();
        log.record(&AppCommand::BeginHandleDrag {
            handle: crate::core::ControlHandle::P1,
        });
        for i in 0..50 {
            log.record(&AppCommand::UpdateHandleDrag {
                surface_pos: Vec2::new(i as f32, 0.0),
                surface_size: Vec2::new(400.0, 300.0),
            });
        }
        log.record(&AppCommand::EndHandleDrag);

        assert_eq!(log.len(), 3);
        assert!(matches!(
            log.entries()[1],
            AppCommand::UpdateHandleDrag { surface_pos, .. } if surface_pos.x == 49.0
        ));
    }

    #[test]
    fn test_log_is_bounded() {
        let mut log = CommandLog::new();
        for _ in 0..(CommandLog::MAX_ENTRIES + 10) {
            log.record(&AppCommand::ReplayPreviews);
        }
        assert!(log.len() <= CommandLog::MAX_ENTRIES);
        assert!(!log.is_empty());
    }
}
