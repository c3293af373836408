// src/ui/helpers.rs
use egui::{Align2, Context, Ui};
use crate::QuizApp;
use crate::view_models::ChoiceSlot;

/// Aviso modal con un único botón "OK".
pub fn notice_window(app: &mut QuizApp, ctx: &Context) {
    let Some(notice) = app.notice.clone() else {
        return;
    };
    egui::Window::new(notice.title)
        .collapsible(false)
        .resizable(false)
        .anchor(Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.label(notice.body);
            ui.add_space(8.0);
            if ui.button("OK").clicked() {
                app.notice = None;
            }
        });
}

/// Lista de opciones tipo radio. Los huecos sin opción no se dibujan.
pub fn choice_list(ui: &mut Ui, slots: &[ChoiceSlot], selected: &mut Option<usize>, enabled: bool) {
    for slot in slots.iter().filter(|s| s.available) {
        ui.add_enabled_ui(enabled, |ui| {
            ui.radio_value(selected, Some(slot.index), slot.label.as_str());
        });
    }
}
