use eframe::egui::{Color32, RichText, Ui};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::color::series_palette;
use crate::data::model::Series;
use crate::state::{AppState, PlotContent};

const WAVELENGTH_LABEL: &str = "Wavelength (nm)";
const INTENSITY_LABEL: &str = "Intensity (a.u.)";
const DISTANCE_LABEL: &str = "Distance (µm)";
const VOLTAGE_LABEL: &str = "Surface voltage (mV)";

// ---------------------------------------------------------------------------
// Measurement plot (central panel)
// ---------------------------------------------------------------------------

/// Render whatever was last loaded in the central panel.
pub fn measurement_plot(ui: &mut Ui, state: &AppState) {
    match &state.plot {
        Some(PlotContent::Pl(series)) => pl_plot(ui, series),
        Some(PlotContent::Afm(series)) => afm_plot(ui, series),
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Choose PL or AFM data and press “Plot data”");
            });
        }
    }
}

/// Spectra in legend order, one colour each.
fn pl_plot(ui: &mut Ui, series: &[Series]) {
    let palette = series_palette(series.len());

    Plot::new("pl_plot")
        .legend(Legend::default())
        .x_axis_label(RichText::new(WAVELENGTH_LABEL).strong().size(14.0))
        .y_axis_label(RichText::new(INTENSITY_LABEL).strong().size(14.0))
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for (sp, &color) in series.iter().zip(&palette) {
                let points: PlotPoints = sp.points().collect();
                let line = Line::new(points)
                    .name(&sp.label)
                    .color(color)
                    .width(1.5);
                plot_ui.line(line);
            }
        });
}

/// A single line scan; no legend.
fn afm_plot(ui: &mut Ui, series: &Series) {
    Plot::new("afm_plot")
        .x_axis_label(RichText::new(DISTANCE_LABEL).strong().size(16.0))
        .y_axis_label(RichText::new(VOLTAGE_LABEL).strong().size(16.0))
        .show_grid(true)
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            let points: PlotPoints = series.points().collect();
            plot_ui.line(Line::new(points).color(Color32::LIGHT_BLUE).width(1.5));
        });
}
