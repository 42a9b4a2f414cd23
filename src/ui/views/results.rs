use crate::QuizApp;
use crate::ui::layout::{centered_panel, wide_button};
use egui::{Context, RichText};

pub fn ui_results(app: &mut QuizApp, ctx: &Context) {
    let Some(results) = app.results.clone() else {
        // Submission always stores a view before switching state; recover by
        // rebuilding the attempt if that ever fails to hold.
        app.restart_quiz();
        return;
    };

    centered_panel(ctx, 340.0, 500.0, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading("Quiz Complete!");
            ui.add_space(16.0);

            ui.label(RichText::new(results.verdict()).size(24.0));
            ui.add_space(10.0);
            ui.label(RichText::new(&results.snapshot.formatted).size(48.0).strong());
            ui.add_space(6.0);
            ui.label(RichText::new(format!("{}%", results.snapshot.percentage)).size(32.0));
            ui.add_space(10.0);
            ui.label(results.detail());
            ui.add_space(20.0);

            if wide_button(ui, 220.0, "Take Quiz Again") {
                app.restart_quiz();
            }
        });
    });
}
