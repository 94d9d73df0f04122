use eframe::egui;

use crate::data::partition::ScatterFigure;
use crate::ui::{panels, plot};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// One native window showing one group's figure.
pub struct FigureApp {
    pub figure: ScatterFigure,
}

impl FigureApp {
    pub fn new(figure: ScatterFigure) -> Self {
        Self { figure }
    }
}

impl eframe::App for FigureApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: overall title ----
        egui::TopBottomPanel::top("title_bar").show(ctx, |ui| {
            panels::title_bar(ui, &self.figure);
        });

        // ---- Central panel: male / female scatter ----
        egui::CentralPanel::default().show(ctx, |ui| {
            plot::scatter_panels(ui, &self.figure);
        });
    }
}

/// Open a window for `figure` and block until it is closed.
pub fn show_figure(figure: ScatterFigure, window_size: [f32; 2]) -> anyhow::Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(window_size)
            .with_min_inner_size([600.0, 300.0]),
        run_and_return: true,
        ..Default::default()
    };

    let title = figure.title.clone();
    eframe::run_native(
        &title,
        options,
        Box::new(move |_cc| Ok(Box::new(FigureApp::new(figure)))),
    )
    .map_err(|e| anyhow::anyhow!("plot window '{title}' failed: {e}"))
}
