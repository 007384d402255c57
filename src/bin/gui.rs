// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use std::path::Path;

use beck_picker::{
    config::{consts::LOG_FILE, options::PickerOptions},
    gui, log,
};
use eframe::egui::ViewportBuilder;

fn main() {
    log::init_file(Path::new(LOG_FILE));
    let opts = PickerOptions::from_args(std::env::args());

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_title("Beck-filmgeneratorn")
            .with_inner_size([480.0, 760.0]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, opts) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
