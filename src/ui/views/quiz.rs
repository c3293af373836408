use egui::{Align, Context, RichText, ScrollArea};
use crate::QuizApp;
use crate::ui::helpers::choice_list;
use crate::ui::layout::{centered_panel, three_button_row};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    let max_width = 600.0;
    let total_height = 120.0 + 4.0 * 28.0 + 48.0 + 24.0;

    centered_panel(ctx, total_height, max_width, |ui| {
        let panel_width = ui.available_width();
        let Some(heading) = app.question_heading() else {
            return;
        };

        // Enunciado con scroll fijo
        let prompt_max_height = 120.0;
        ui.allocate_ui_with_layout(
            egui::vec2(panel_width, prompt_max_height),
            egui::Layout::top_down(Align::Min),
            |ui| {
                ScrollArea::vertical()
                    .max_height(prompt_max_height)
                    .show(ui, |ui| {
                        ui.label(RichText::new(heading).size(17.0));
                    });
            },
        );

        ui.add_space(8.0);

        let slots = app.choice_slots();
        let resolved = app.session.is_current_resolved();
        choice_list(ui, &slots, &mut app.selected, !resolved);

        ui.add_space(12.0);

        let [enviar, mostrar, siguiente] =
            three_button_row(ui, panel_width, ["Submit", "Show Answer", "Next"]);
        if enviar {
            let result = app.enviar_respuesta();
            app.guard(result);
        }
        if mostrar {
            let result = app.mostrar_respuesta();
            app.guard(result);
        }
        if siguiente {
            let result = app.siguiente_pregunta();
            app.guard(result);
        }

        ui.add_space(8.0);
        if !app.message.is_empty() {
            ui.label(&app.message);
        }
    });
}
