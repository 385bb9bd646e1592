//! Smooth Operator.
//!
//! Lernspiel für Cubic-Bézier-Easing: Kurven erkennen, nachbauen und
//! mit einer Live-Vorschau vergleichen.

use eframe::egui;
use smooth_operator::{ui, AppController, AppIntent, AppState, GameMode, GameOptions};

fn main() -> Result<(), eframe::Error> {
    AppRunner::run()
}

struct AppRunner;

impl AppRunner {
    fn run() -> Result<(), eframe::Error> {
        // Logger initialisieren
        env_logger::Builder::from_default_env()
            .filter_level(log::LevelFilter::Info)
            .init();

        log::info!("Smooth Operator v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([900.0, 760.0])
                .with_title("Smooth Operator"),
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Smooth Operator",
            options,
            Box::new(|cc| {
                cc.egui_ctx.set_visuals(egui::Visuals::light());
                Ok(Box::new(GameApp::new()))
            }),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct GameApp {
    state: AppState,
    controller: AppController,
}

impl GameApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = GameOptions::config_path();
        let game_options = GameOptions::load_from_file(&config_path);

        Self {
            state: AppState::with_options(game_options),
            controller: AppController::new(),
        }
    }
}

impl eframe::App for GameApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();
        let canvas_changed = events.iter().any(AppIntent::changes_canvas);

        self.process_events(events);

        // Szene wurde vor der Verarbeitung gebaut: Durchlauf mit neuem Zustand wiederholen
        if canvas_changed {
            ctx.request_discard("Kurve geändert");
        }

        if has_events || self.state.is_dragging() {
            ctx.request_repaint();
        }
    }
}

impl GameApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_header(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::show_feedback_window(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));
        events.extend(ui::collect_keyboard_intents(ctx, &self.state));

        let scene = self.controller.build_scene(&self.state);

        egui::CentralPanel::default().show(ctx, |panel| {
            egui::ScrollArea::vertical().show(panel, |panel| match self.state.mode {
                GameMode::Guided => {
                    events.extend(ui::render_guided_view(panel, &mut self.state, scene.as_ref()));
                }
                GameMode::Freestyle => {
                    events.extend(ui::render_freestyle_view(
                        panel,
                        &mut self.state,
                        scene.as_ref(),
                    ));
                }
            });
        });

        events
    }

    fn process_events(&mut self, events: Vec<AppIntent>) {
        for event in events {
            if let Err(e) = self.controller.handle_intent(&mut self.state, event) {
                log::error!("Event handling failed: {:#}", e);
            }
        }
    }
}
