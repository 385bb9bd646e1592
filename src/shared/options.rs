//! Zentrale Konfiguration für Smooth Operator.
//!
//! `GameOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.
//! Viewport-Untergrenze, Padding und Scoring-Konstante sind bewusst nicht
//! konfigurierbar und liegen im Core.

use crate::core::preview::MIN_DURATION;
use crate::core::CurveSpec;
use glam::Vec2;
use serde::{Deserialize, Serialize};

// ── Editor-Fläche ───────────────────────────────────────────────────

/// Breite der Zeichenfläche in Pixeln.
pub const EDITOR_WIDTH: f32 = 400.0;
/// Höhe der Zeichenfläche in Pixeln.
pub const EDITOR_HEIGHT: f32 = 300.0;
/// Anzahl gleichmäßiger Rasterteilungen pro Achse.
pub const GRID_DIVISIONS: u32 = 10;

// ── Handles ─────────────────────────────────────────────────────────

/// Darstellungsradius der Kontrollpunkt-Handles in Pixeln.
pub const HANDLE_RADIUS_PX: f32 = 8.0;
/// Pick-Radius für Handles in Pixeln (etwas großzügiger als die Darstellung).
pub const HANDLE_PICK_RADIUS_PX: f32 = 14.0;

/// Startkurve des Editors `(x1, y1, x2, y2)`.
pub const EDITOR_START_CURVE: [f64; 4] = [0.25, 0.1, 0.25, 1.0];

// ── Vorschau ────────────────────────────────────────────────────────

/// Dauer einer Freestyle-Vorschau-Iteration in Sekunden.
pub const FREESTYLE_DURATION_SECS: f32 = 2.0;
/// Länge der Vorschau-Bahn in Pixeln (Element fährt von -Hälfte bis +Hälfte).
pub const PREVIEW_TRACK_WIDTH_PX: f32 = 200.0;
/// Anzeigedauer eines Hinweises in Sekunden.
pub const HINT_DISPLAY_SECS: f32 = 5.0;

// ── Linien ──────────────────────────────────────────────────────────

/// Linienstärke der Nutzerkurve.
pub const USER_STROKE_WIDTH: f32 = 4.0;
/// Linienstärke der Zielkurve.
pub const TARGET_STROKE_WIDTH: f32 = 3.0;
/// Linienstärke der Hilfslinien Anker → Handle.
pub const GUIDE_STROKE_WIDTH: f32 = 2.0;
/// Strichlänge der gestrichelten Zielkurve.
pub const TARGET_DASH_LENGTH: f32 = 4.0;
/// Lücke zwischen den Strichen der Zielkurve.
pub const TARGET_DASH_GAP: f32 = 4.0;

// ── Farben ──────────────────────────────────────────────────────────

/// Nutzerkurve (RGBA: Schwarz).
pub const USER_CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Zielkurve (RGBA: Schwarz, stark abgeschwächt).
pub const TARGET_CURVE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.2];
/// Hilfslinien (RGBA: Schwarz, abgeschwächt).
pub const GUIDE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.3];
/// Handle-Füllung (RGBA: Weiß).
pub const HANDLE_FILL_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Handle-Rand (RGBA: Schwarz).
pub const HANDLE_STROKE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 1.0];
/// Rasterlinien.
pub const GRID_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.05];
/// Hervorgehobene Achsen y=0 und y=1.
pub const AXIS_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.1];
/// Hintergrund der Zeichenfläche.
pub const SURFACE_COLOR: [f32; 4] = [0.0, 0.0, 0.0, 0.05];
/// Vorschau-Element der Nutzerkurve (RGBA: Grün).
pub const PREVIEW_USER_COLOR: [f32; 4] = [0.13, 0.77, 0.37, 1.0];
/// Vorschau-Element der Zielkurve (RGBA: Blau).
pub const PREVIEW_TARGET_COLOR: [f32; 4] = [0.23, 0.51, 0.96, 1.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Spiel-Optionen.
/// Wird als `smooth_operator.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameOptions {
    // ── Editor ──────────────────────────────────────────────────
    /// Breite der Zeichenfläche in Pixeln
    pub editor_width: f32,
    /// Höhe der Zeichenfläche in Pixeln
    pub editor_height: f32,
    /// Rasterteilungen pro Achse
    pub grid_divisions: u32,
    /// Startkurve für "Kurve nachbauen" und Freestyle
    pub editor_start_curve: [f64; 4],

    // ── Handles ─────────────────────────────────────────────────
    /// Darstellungsradius der Handles
    pub handle_radius_px: f32,
    /// Pick-Radius der Handles
    pub handle_pick_radius_px: f32,

    // ── Vorschau ────────────────────────────────────────────────
    /// Iterationsdauer der Freestyle-Vorschau in Sekunden
    pub freestyle_duration_secs: f32,
    /// Länge der Vorschau-Bahn in Pixeln
    pub preview_track_width_px: f32,
    /// Anzeigedauer eines Hinweises in Sekunden
    pub hint_display_secs: f32,

    // ── Linien ──────────────────────────────────────────────────
    /// Linienstärke der Nutzerkurve
    pub user_stroke_width: f32,
    /// Linienstärke der Zielkurve
    pub target_stroke_width: f32,
    /// Linienstärke der Hilfslinien
    pub guide_stroke_width: f32,
    /// Strichlänge der Zielkurve
    pub target_dash_length: f32,
    /// Strichlücke der Zielkurve
    pub target_dash_gap: f32,

    // ── Farben ──────────────────────────────────────────────────
    /// Farbe der Nutzerkurve
    pub user_curve_color: [f32; 4],
    /// Farbe der Zielkurve
    pub target_curve_color: [f32; 4],
    /// Farbe der Hilfslinien
    pub guide_color: [f32; 4],
    /// Füllfarbe der Handles
    pub handle_fill_color: [f32; 4],
    /// Randfarbe der Handles
    pub handle_stroke_color: [f32; 4],
    /// Farbe der Rasterlinien
    pub grid_color: [f32; 4],
    /// Farbe der Achsen y=0 / y=1
    pub axis_color: [f32; 4],
    /// Hintergrund der Zeichenfläche
    pub surface_color: [f32; 4],
    /// Vorschau-Element der Nutzerkurve
    pub preview_user_color: [f32; 4],
    /// Vorschau-Element der Zielkurve
    pub preview_target_color: [f32; 4],
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            editor_width: EDITOR_WIDTH,
            editor_height: EDITOR_HEIGHT,
            grid_divisions: GRID_DIVISIONS,
            editor_start_curve: EDITOR_START_CURVE,

            handle_radius_px: HANDLE_RADIUS_PX,
            handle_pick_radius_px: HANDLE_PICK_RADIUS_PX,

            freestyle_duration_secs: FREESTYLE_DURATION_SECS,
            preview_track_width_px: PREVIEW_TRACK_WIDTH_PX,
            hint_display_secs: HINT_DISPLAY_SECS,

            user_stroke_width: USER_STROKE_WIDTH,
            target_stroke_width: TARGET_STROKE_WIDTH,
            guide_stroke_width: GUIDE_STROKE_WIDTH,
            target_dash_length: TARGET_DASH_LENGTH,
            target_dash_gap: TARGET_DASH_GAP,

            user_curve_color: USER_CURVE_COLOR,
            target_curve_color: TARGET_CURVE_COLOR,
            guide_color: GUIDE_COLOR,
            handle_fill_color: HANDLE_FILL_COLOR,
            handle_stroke_color: HANDLE_STROKE_COLOR,
            grid_color: GRID_COLOR,
            axis_color: AXIS_COLOR,
            surface_color: SURFACE_COLOR,
            preview_user_color: PREVIEW_USER_COLOR,
            preview_target_color: PREVIEW_TARGET_COLOR,
        }
    }
}

impl GameOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<GameOptions>(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts.sanitized()
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("smooth_operator"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("smooth_operator.toml")
    }

    /// Kopie mit gültigen Wertebereichen (Flächenmaße, Radien, Dauern, Startkurve).
    pub fn sanitized(mut self) -> Self {
        fn at_least(value: f32, min: f32, fallback: f32) -> f32 {
            if value.is_finite() {
                value.max(min)
            } else {
                fallback
            }
        }

        self.editor_width = at_least(self.editor_width, 100.0, EDITOR_WIDTH);
        self.editor_height = at_least(self.editor_height, 100.0, EDITOR_HEIGHT);
        self.grid_divisions = self.grid_divisions.clamp(1, 50);

        self.handle_radius_px = at_least(self.handle_radius_px, 2.0, HANDLE_RADIUS_PX);
        self.handle_pick_radius_px = at_least(
            self.handle_pick_radius_px,
            self.handle_radius_px,
            HANDLE_PICK_RADIUS_PX,
        );

        self.freestyle_duration_secs =
            at_least(self.freestyle_duration_secs, MIN_DURATION, FREESTYLE_DURATION_SECS);
        self.preview_track_width_px =
            at_least(self.preview_track_width_px, 20.0, PREVIEW_TRACK_WIDTH_PX);
        self.hint_display_secs = at_least(self.hint_display_secs, 0.5, HINT_DISPLAY_SECS);

        self.user_stroke_width = at_least(self.user_stroke_width, 0.5, USER_STROKE_WIDTH);
        self.target_stroke_width = at_least(self.target_stroke_width, 0.5, TARGET_STROKE_WIDTH);
        self.guide_stroke_width = at_least(self.guide_stroke_width, 0.5, GUIDE_STROKE_WIDTH);
        self.target_dash_length = at_least(self.target_dash_length, 0.5, TARGET_DASH_LENGTH);
        self.target_dash_gap = at_least(self.target_dash_gap, 0.5, TARGET_DASH_GAP);

        if self.editor_start_curve.iter().any(|v| !v.is_finite()) {
            log::warn!("Startkurve enthält ungültige Werte, verwende Standard");
            self.editor_start_curve = EDITOR_START_CURVE;
        }
        self.editor_start_curve = CurveSpec::from_array(self.editor_start_curve)
            .with_clamped_x()
            .to_array();

        self
    }

    /// Größe der Zeichenfläche als Vektor.
    pub fn surface_size(&self) -> Vec2 {
        Vec2::new(self.editor_width, self.editor_height)
    }

    /// Startkurve als `CurveSpec`.
    pub fn start_curve(&self) -> CurveSpec {
        CurveSpec::from_array(self.editor_start_curve)
    }
}
