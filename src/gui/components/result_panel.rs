// src/gui/components/result_panel.rs
//
// One draw function per picker state.

use eframe::egui::{self, Color32, RichText, widgets::Spinner};

use crate::picker::{MovieView, Picker, PickerState};

const ERROR_RED: Color32 = Color32::from_rgb(0xd9, 0x3f, 0x3f);

pub fn draw(ui: &mut egui::Ui, picker: &Picker) {
    // A rejected request keeps the current state; the notice goes on top.
    if let Some(msg) = picker.notice() {
        draw_error(ui, msg);
        ui.add_space(8.0);
    }

    match picker.state() {
        PickerState::Idle => draw_idle(ui),
        PickerState::Loading { .. } => draw_loading(ui),
        PickerState::Displayed(view) => draw_movie(ui, view),
        PickerState::Errored(msg) => draw_error(ui, msg),
    }
}

fn draw_idle(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.weak("Välj ett intervall och tryck på knappen.");
    });
}

fn draw_loading(ui: &mut egui::Ui) {
    ui.vertical_centered(|ui| {
        ui.add(Spinner::new().size(32.0));
        ui.label("Letar fram en film…");
    });
}

fn draw_error(ui: &mut egui::Ui, msg: &str) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            ui.colored_label(ERROR_RED, msg);
        });
    });
}

fn draw_movie(ui: &mut egui::Ui, view: &MovieView) {
    egui::Frame::group(ui.style()).show(ui, |ui| {
        ui.vertical_centered(|ui| {
            if let Some(poster) = &view.poster {
                ui.add(egui::Image::new(poster.url.as_str()).max_width(240.0))
                    .on_hover_text(&poster.alt);
            }

            ui.label(RichText::new(&view.heading).heading().strong());

            if let Some(items) = &view.rating_panel {
                ui.horizontal(|ui| {
                    for item in items {
                        ui.label(RichText::new(item.label).weak());
                        ui.label(RichText::new(&item.value).strong());
                        ui.label(item.icon);
                        ui.add_space(12.0);
                    }
                });
            }

            if let Some(desc) = &view.description {
                ui.add_space(4.0);
                ui.label(desc);
            }

            if let Some(link) = &view.watch_link {
                ui.add_space(6.0);
                ui.hyperlink_to(format!("▶ {}", link.text), &link.href);
            }
        });
    });
}
