// src/gui/components/range_panel.rs

use eframe::egui::{self, Button, Checkbox, DragValue};

use crate::{gui::app::App, picker::Bound};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let size = app.picker.range.size() as i64;
    let all = app.picker.range.all_movies;

    // Manual bounds are dimmed while "all movies" is ticked.
    ui.add_enabled_ui(!all, |ui| {
        ui.horizontal(|ui| {
            ui.label("Från:");
            bound_input(ui, app, Bound::Min, size);
            ui.label("Till:");
            bound_input(ui, app, Bound::Max, size);
        });
    });

    let before = app.picker.range.all_movies;
    ui.add(Checkbox::new(&mut app.picker.range.all_movies, "Alla filmer"));
    if app.picker.range.all_movies != before {
        logf!("UI: all_movies → {}", app.picker.range.all_movies);
    }

    ui.add_space(6.0);
    ui.vertical_centered(|ui| {
        // stays clickable on an invalid range; the picker answers with a notice
        let button = ui.add_enabled(
            !app.picker.is_loading(),
            Button::new("🎬 Slumpa film").min_size(egui::vec2(180.0, 32.0)),
        );
        if button.clicked() {
            app.submit();
        }
    });
}

/// Raw edits while typing; clamp when the edit is committed.
fn bound_input(ui: &mut egui::Ui, app: &mut App, bound: Bound, size: i64) {
    let range = &mut app.picker.range;
    let mut value = match bound {
        Bound::Min => range.min,
        Bound::Max => range.max,
    };
    let resp = ui.add(DragValue::new(&mut value).speed(0.1));
    if resp.changed() {
        range.set(bound, value);
    }
    if resp.lost_focus() || resp.drag_stopped() {
        range.commit(bound);
        logd!("UI: range committed → {}..={} (size {size})", range.min, range.max);
    }
}
