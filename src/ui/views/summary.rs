use crate::QuizApp;
use crate::view_models::ResultRow;
use egui::{Button, CentralPanel, Context, Grid, ScrollArea};

pub fn ui_summary_view(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 640.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);
        let button_width = panel_width / 3.0;
        let button_height = 36.0;

        ui.vertical_centered(|ui| {
            egui::Frame::default()
                .fill(ui.visuals().window_fill())
                .inner_margin(egui::Margin::symmetric(16, 24))
                .show(ui, |ui| {
                    ui.set_width(panel_width);

                    ui.heading("Quiz Summary");
                    ui.add_space(10.0);

                    if let Some(summary) = app.summary {
                        ui.label(format!("Total questions: {}", summary.total));
                        ui.label(format!("Answered: {}", summary.answered));
                        ui.label(format!("Correct: {}", summary.correct));
                    }
                    ui.add_space(10.0);

                    ScrollArea::vertical()
                        .max_height(260.0)
                        .max_width(panel_width)
                        .show(ui, |ui| {
                            let rows: Vec<ResultRow> = app.result_rows();

                            if rows.is_empty() {
                                ui.label("No questions were played.");
                                return;
                            }

                            Grid::new("quiz_results_grid")
                                .striped(true)
                                .spacing([8.0, 4.0])
                                .show(ui, |ui| {
                                    ui.label("#");
                                    ui.label("Question");
                                    ui.label("Your answer");
                                    ui.label("Correct answer");
                                    ui.label("");
                                    ui.end_row();

                                    for r in &rows {
                                        ui.label(r.number.to_string());
                                        ui.label(&r.question);
                                        ui.label(&r.user_answer);
                                        ui.label(&r.correct_answer);
                                        ui.label(r.verdict());
                                        ui.end_row();
                                    }
                                });
                        });

                    ui.add_space(10.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }

                    ui.vertical_centered(|ui| {
                        if ui
                            .add_sized([button_width, button_height], Button::new("Close"))
                            .clicked()
                        {
                            app.cerrar();
                        }
                    });
                });
        });
    });
}
