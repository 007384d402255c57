// src/gui/app.rs
use std::{error::Error, time::Instant};

use eframe::egui;

use crate::{
    catalog::{self, Catalog},
    config::options::PickerOptions,
    file,
    picker::Picker,
};

use super::components::{range_panel, result_panel};

/// Copy of the catalog shipped with the app, used when no file is found on disk.
pub const BUNDLED_CATALOG: &str = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/data/beckDB.js"));

pub fn run(native: eframe::NativeOptions, opts: PickerOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Beck-filmgeneratorn",
        native,
        Box::new(move |cc| {
            egui_extras::install_image_loaders(&cc.egui_ctx);
            Ok(Box::new(App::new(load_picker(&opts))))
        }),
    )?;
    Ok(())
}

/// Build the picker from the configured catalog file, falling back to the
/// bundled copy. A broken catalog yields an empty picker in the error state.
pub fn load_picker(opts: &PickerOptions) -> Picker {
    let path = &opts.catalog_path;
    let loaded = if path.exists() {
        logf!("Catalog: loading {}", path.display());
        file::load_catalog(path)
    } else {
        logf!("Catalog: {} not found, using bundled copy", path.display());
        catalog::parse_literal(BUNDLED_CATALOG)
    };

    match loaded {
        Ok(cat) => {
            logf!("Catalog: {} movies", cat.len());
            Picker::new(cat, opts.loading_delay)
        }
        Err(e) => {
            let mut picker = Picker::new(Catalog::new(Vec::new()), opts.loading_delay);
            picker.fail(&e);
            picker
        }
    }
}

/// Owns the picker for the whole lifetime of the window.
pub struct App {
    pub picker: Picker,
}

impl App {
    pub fn new(picker: Picker) -> Self {
        Self { picker }
    }

    /// Generate button / Enter key: finish a half-typed bound first.
    pub fn submit(&mut self) {
        self.picker.range.commit_pending();
        self.request_pick();
    }

    pub fn request_pick(&mut self) {
        // picker logs rejections; the notice is drawn by the result panel
        let _ = self.picker.generate(Instant::now(), &mut rand::rng());
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let now = Instant::now();
        self.picker.poll(now);
        if let Some(left) = self.picker.remaining(now) {
            ctx.request_repaint_after(left);
        }

        egui::CentralPanel::default().show(ctx, |ui| {
            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("Slumpa en Beck-film");
                    ui.label(format!("{} filmer i katalogen", self.picker.catalog().len()));
                });
                ui.separator();

                range_panel::draw(ui, self);

                ui.separator();

                result_panel::draw(ui, &self.picker);
            });
        });

        // after the panel, so a bound committed by this Enter is already in place
        if !self.picker.is_loading() && ctx.input(|i| i.key_pressed(egui::Key::Enter)) {
            self.submit();
        }
    }
}
