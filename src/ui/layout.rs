use egui::{Button, CentralPanel, Context, Frame, Ui, Visuals};
use crate::QuizApp;
use crate::model::AppState;

pub fn top_panel(app: &QuizApp, ctx: &Context) {
    egui::TopBottomPanel::top("menu_panel").show(ctx, |ui| {
        ui.horizontal_centered(|ui| {
            ui.strong("🧠 General Knowledge");
            ui.separator();
            match app.state {
                AppState::Quiz => ui.label(app.progress_label()),
                AppState::Summary => ui.label("Finished"),
            };
        });
    });
}

pub fn bottom_panel(ctx: &Context) {
    egui::TopBottomPanel::bottom("bottom_panel").show(ctx, |ui| {
        // ----------- BOTONES DE TEMA -----------
        ui.with_layout(
            egui::Layout::right_to_left(egui::Align::Center),
            |ui| {
                if ui.button("🌙 Dark").clicked() {
                    ctx.set_visuals(Visuals::dark());
                }
                if ui.button("☀ Light").clicked() {
                    ctx.set_visuals(Visuals::light());
                }
            }
        );
    });
}

/// Panel centrado tanto vertical como horizontalmente,
/// con un tamaño de contenido máximo y un bloque interior `inner`.
pub fn centered_panel(
    ctx: &Context,
    est_height: f32,
    max_width: f32,
    inner: impl FnOnce(&mut Ui),
) {
    CentralPanel::default().show(ctx, |ui| {
        // Espacio vertical para centrar
        let extra = ((ui.available_height() - est_height) / 2.0).max(0.0);
        ui.add_space(extra);
        Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                let w = ui.available_width().min(max_width);
                ui.set_width(w);
                inner(ui);
            });
        ui.add_space(extra);
    });
}

/// Dibuja tres botones del mismo tamaño en una fila, centrados en el ancho dado.
/// Devuelve qué botón se pulsó, de izquierda a derecha.
pub fn three_button_row(
    ui: &mut Ui,
    panel_width: f32,
    labels: [&str; 3],
) -> [bool; 3] {
    let btn_w = (panel_width - 16.0) / 3.0;
    let mut clicked = [false; 3];
    ui.horizontal(|ui| {
        // espacio para centrar la fila en su panel
        ui.add_space(((ui.available_width() - panel_width) / 2.0).max(0.0));
        for (label, hit) in labels.iter().zip(clicked.iter_mut()) {
            *hit = ui
                .add_sized([btn_w, 36.0], Button::new(*label))
                .clicked();
        }
    });
    clicked
}
