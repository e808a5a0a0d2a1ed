mod block;
mod block_manager;
mod catalog;
mod constants;
mod controller;
mod dialogs;
mod geometry;
mod image_loader;
mod menu;
mod paths;
mod persistence;
mod render;

use catalog::Catalog;
use constants::{APP_TITLE, FRAME_DELAY, WINDOW_HEIGHT, WINDOW_WIDTH};
use controller::{EditorState, PointerEvent};
use dialogs::NativeDialogs;
use eframe::egui;
use image_loader::load_color_image;
use paths::AppPaths;

fn main() -> eframe::Result<()> {
    env_logger::init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(APP_TITLE)
            .with_inner_size([WINDOW_WIDTH as f32, WINDOW_HEIGHT as f32])
            .with_resizable(false),
        ..Default::default()
    };

    eframe::run_native(
        APP_TITLE,
        options,
        Box::new(|cc| Ok(Box::new(BlockStageApp::new(cc)))),
    )
}

struct BlockStageApp {
    state: EditorState,
    dialogs: NativeDialogs,
    logo: Option<egui::TextureHandle>,
}

impl BlockStageApp {
    fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let paths = AppPaths::resolve();

        let logo = match load_color_image(&paths.logo_file) {
            Ok(image) => Some(cc.egui_ctx.load_texture(
                "logo",
                image,
                egui::TextureOptions::LINEAR,
            )),
            Err(err) => {
                log::warn!("Logo unavailable: {err}");
                None
            }
        };

        let state = EditorState::new(Catalog::standard(), paths.project_file);
        log::info!("Project file path: {}", state.project_path().display());

        Self {
            state,
            dialogs: NativeDialogs,
            logo,
        }
    }

    /// Feeds this frame's pointer events to the editor in arrival order.
    fn process_input(&mut self, ctx: &egui::Context, origin: egui::Pos2) {
        let events = ctx.input(|i| i.events.clone());
        for event in &events {
            if let Some(pointer) = PointerEvent::from_egui(event, origin) {
                self.state.handle_pointer(pointer, &mut self.dialogs);
            }
        }
    }
}

impl eframe::App for BlockStageApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default()
            .frame(egui::Frame::none())
            .show(ctx, |ui| {
                let origin = ui.max_rect().min;
                self.process_input(ctx, origin);
                render::paint(ui.painter(), origin, &self.state, self.logo.as_ref());
            });

        if self.state.blocks().is_dragging() {
            ctx.set_cursor_icon(egui::CursorIcon::Grabbing);
        }

        ctx.request_repaint_after(FRAME_DELAY);
    }
}
