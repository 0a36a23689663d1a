//! Transform Lab.
//!
//! Interaktives Lernwerkzeug für 2D-Transformationen: Form auf dem Gitter
//! zeichnen, verschieben, spiegeln, drehen oder strecken und das Bild
//! direkt daneben sehen.

use eframe::egui;
use transform_lab::{ui, AppController, AppIntent, AppOptions, AppState};
use transform_lab_engine::JsonFileStore;

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

        log::info!("Transform Lab v{} startet...", env!("CARGO_PKG_VERSION"));

        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([1280.0, 860.0])
                .with_title("Transform Lab"),
            renderer: eframe::Renderer::Glow,
            multisampling: 4,
            ..Default::default()
        };

        eframe::run_native(
            "Transform Lab",
            options,
            Box::new(|_cc| Ok(Box::new(TransformLabApp::new()))),
        )
    }
}

/// Haupt-Anwendungsstruktur
struct TransformLabApp {
    state: AppState,
    controller: AppController,
}

impl TransformLabApp {
    fn new() -> Self {
        // Optionen aus TOML laden (oder Standardwerte)
        let config_path = AppOptions::config_path();
        let options = AppOptions::load_from_file(&config_path);

        let store = JsonFileStore::in_dir(AppOptions::app_dir());
        log::info!("Projektspeicher: {}", store.path().display());

        Self {
            state: AppState::with_options(options),
            controller: AppController::with_store(Box::new(store)),
        }
    }
}

impl eframe::App for TransformLabApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if self.state.should_exit {
            ctx.send_viewport_cmd(egui::ViewportCommand::Close);
            return;
        }

        let events = self.collect_ui_events(ctx);
        let has_events = !events.is_empty();

        self.process_events(events);

        if has_events {
            ctx.request_repaint();
        }
    }
}

impl TransformLabApp {
    fn collect_ui_events(&mut self, ctx: &egui::Context) -> Vec<AppIntent> {
        let mut events = Vec::new();

        events.extend(ui::render_menu(ctx, &self.state));
        events.extend(ui::render_toolbar(ctx, &self.state));
        ui::render_status_bar(ctx, &self.state);
        events.extend(ui::render_controls_panel(ctx, &self.state));

        let export_dir = self
            .state
            .options
            .resolve_export_dir(&AppOptions::app_dir());
        events.extend(ui::handle_file_dialogs(&mut self.state.ui, &export_dir));
        events.extend(ui::show_projects_dialog(ctx, &self.state.ui));
        events.extend(ui::show_coordinate_table(ctx, &self.state));
        events.extend(ui::show_options_dialog(ctx, &self.state));

        let scene = self.controller.build_render_scene(&self.state);
        events.extend(ui::render_canvas(ctx, &self.state, &scene));

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
