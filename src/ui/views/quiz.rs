use crate::QuizApp;
use crate::ui::layout::wide_button;
use egui::{CentralPanel, Context, ScrollArea};

pub fn ui_quiz(app: &mut QuizApp, ctx: &Context) {
    CentralPanel::default().show(ctx, |ui| {
        let max_width = 650.0;
        let panel_width = (ui.available_width() * 0.97).min(max_width);

        egui::Frame::default()
            .fill(ui.visuals().window_fill())
            .inner_margin(egui::Margin::symmetric(16, 16))
            .show(ui, |ui| {
                ui.vertical_centered(|ui| {
                    ui.heading("My Questions");
                    ui.add_space(4.0);
                    ui.label(format!(
                        "Progress: {} / {}",
                        app.session.attempted(),
                        app.session.total_questions()
                    ));
                    ui.add_space(10.0);

                    // Capture the click inside the closure, apply it after,
                    // so the question list stays borrowed immutably while
                    // drawing.
                    let mut clicked: Option<(usize, usize)> = None;

                    let list_max_height = ui.available_height() - 120.0;
                    ScrollArea::vertical()
                        .max_height(list_max_height.max(200.0))
                        .auto_shrink([false; 2])
                        .show(ui, |ui| {
                            ui.set_width(panel_width);
                            for (qi, question) in app.session.questions().iter().enumerate() {
                                ui.add_space(8.0);
                                ui.heading(&question.prompt);
                                ui.add_space(4.0);
                                for (ai, answer) in question.answers.iter().enumerate() {
                                    let selected = app.selections[qi] == Some(ai);
                                    if ui.radio(selected, &answer.text).clicked() {
                                        clicked = Some((qi, ai));
                                    }
                                }
                            }
                        });

                    if let Some((qi, ai)) = clicked {
                        app.answer_clicked(qi, ai);
                    }

                    ui.add_space(8.0);
                    if !app.message.is_empty() {
                        ui.label(&app.message);
                    }
                    ui.add_space(8.0);

                    if wide_button(ui, panel_width / 2.0, "Done") {
                        app.submit_quiz();
                    }
                });
            });
    });
}
