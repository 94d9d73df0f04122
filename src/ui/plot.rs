use eframe::egui::Ui;
use egui_plot::{Legend, Plot, PlotPoints, Points};

use crate::color::gender_color;
use crate::data::partition::{ScatterFigure, ScatterPanel};

// ---------------------------------------------------------------------------
// Side-by-side scatter panels (central panel)
// ---------------------------------------------------------------------------

pub const X_LABEL: &str = "Weight at T1";
pub const Y_LABEL: &str = "Weight at T2";

/// Render both panels of a figure next to each other.
pub fn scatter_panels(ui: &mut Ui, figure: &ScatterFigure) {
    ui.columns(2, |columns: &mut [Ui]| {
        for (column, panel) in columns.iter_mut().zip(&figure.panels) {
            scatter_panel(column, panel);
        }
    });
}

fn scatter_panel(ui: &mut Ui, panel: &ScatterPanel) {
    let name = panel.gender.to_string();
    ui.vertical_centered(|ui: &mut Ui| {
        ui.strong(format!("{name} ({})", panel.points.len()));
    });

    let points = Points::new(PlotPoints::new(panel.points.clone()))
        .name(&name)
        .color(gender_color(panel.gender))
        .radius(3.0);

    Plot::new(("scatter_panel", name.as_str()))
        .legend(Legend::default())
        .x_axis_label(X_LABEL)
        .y_axis_label(Y_LABEL)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            plot_ui.points(points);
        });
}
