use egui::{Button, CentralPanel, Context, Frame, Ui};

/// Panel centered vertically, with a maximum content width and an inner
/// content block `inner`.
pub fn centered_panel(ctx: &Context, est_height: f32, max_width: f32, inner: impl FnOnce(&mut Ui)) {
    CentralPanel::default().show(ctx, |ui| {
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

/// Single full-width action button. Returns whether it was clicked.
pub fn wide_button(ui: &mut Ui, panel_width: f32, label: &str) -> bool {
    let mut clicked = false;
    ui.horizontal(|ui| {
        ui.add_space((ui.available_width() - panel_width).max(0.0) / 2.0);
        clicked = ui
            .add_sized([panel_width, 36.0], Button::new(label))
            .clicked();
    });
    clicked
}
