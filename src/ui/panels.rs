use eframe::egui::{RichText, Ui};

use crate::data::partition::ScatterFigure;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Figure title with a short point count underneath.
pub fn title_bar(ui: &mut Ui, figure: &ScatterFigure) {
    ui.vertical_centered(|ui: &mut Ui| {
        ui.heading(RichText::new(&figure.title).strong());

        let plotted: usize = figure.panels.iter().map(|p| p.points.len()).sum();
        let mut summary = format!("{plotted} records plotted");
        if figure.excluded > 0 {
            summary.push_str(&format!(", {} with unknown gender code", figure.excluded));
        }
        ui.label(summary);
    });
}
