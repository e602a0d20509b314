use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};

use crate::state::{AppState, DataMode, PlotContent};

// ---------------------------------------------------------------------------
// Left side panel – mode and labeling controls
// ---------------------------------------------------------------------------

/// Render the left control panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Data");
    ui.separator();

    // Locked while a PL batch waits for its custom labels.
    ui.add_enabled_ui(state.pending.is_none(), |ui: &mut Ui| {
        ui.radio_value(&mut state.mode, DataMode::Pl, "PL data");

        let pl = state.mode == DataMode::Pl;
        ui.indent("pl_options", |ui: &mut Ui| {
            ui.add_enabled(
                pl,
                egui::Checkbox::new(&mut state.options.label_by_filename, "Legend by file name"),
            );
            ui.add_enabled(
                pl,
                egui::Checkbox::new(&mut state.options.use_custom_labels, "Custom legend name"),
            );
        });

        ui.radio_value(&mut state.mode, DataMode::Afm, "AFM data");
        ui.add_space(8.0);

        if ui.button("Plot data").clicked() {
            open_data_dialog(state);
        }
    });
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.add_enabled_ui(state.pending.is_none(), |ui: &mut Ui| {
            ui.menu_button("File", |ui: &mut Ui| {
                if ui.button("Open PL spectra…").clicked() {
                    state.mode = DataMode::Pl;
                    open_data_dialog(state);
                    ui.close_menu();
                }
                if ui.button("Open AFM scan…").clicked() {
                    state.mode = DataMode::Afm;
                    open_data_dialog(state);
                    ui.close_menu();
                }
            });
        });

        ui.separator();

        match &state.plot {
            Some(PlotContent::Pl(series)) => {
                ui.label(format!("{} spectra", series.len()));
            }
            Some(PlotContent::Afm(series)) => {
                ui.label(format!("{}: {} points", series.label, series.len()));
            }
            None => {}
        }

        if let Some(msg) = &state.status_message {
            ui.separator();
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// Custom legend window
// ---------------------------------------------------------------------------

/// Collect one legend label per file of the pending PL batch.
pub fn label_editor(ctx: &egui::Context, state: &mut AppState) {
    let Some(pending) = state.pending.as_mut() else {
        return;
    };

    let mut decision = None;
    egui::Window::new("Custom legend")
        .collapsible(false)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui: &mut Ui| {
            ui.label("Enter the legend name for each file. Blank keeps the derived label.");
            ui.separator();

            ScrollArea::vertical().max_height(400.0).show(ui, |ui: &mut Ui| {
                egui::Grid::new("custom_labels")
                    .num_columns(2)
                    .striped(true)
                    .show(ui, |ui: &mut Ui| {
                        for (file, entry) in pending.files.iter().zip(pending.entries.iter_mut()) {
                            let name = file
                                .path
                                .file_name()
                                .map(|n| n.to_string_lossy().into_owned())
                                .unwrap_or_default();
                            ui.label(name).on_hover_text(file.path.display().to_string());
                            ui.add(egui::TextEdit::singleline(entry).hint_text(&file.label));
                            ui.end_row();
                        }
                    });
            });

            ui.separator();
            ui.horizontal(|ui: &mut Ui| {
                if ui.button("Plot").clicked() {
                    decision = Some(true);
                }
                if ui.button("Use derived labels").clicked() {
                    decision = Some(false);
                }
            });
        });

    if let Some(accept) = decision {
        state.finish_custom_labels(accept);
    }
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

/// Ask for input files for the current mode. Cancelling does nothing.
pub fn open_data_dialog(state: &mut AppState) {
    let dialog = rfd::FileDialog::new().add_filter("Text files", &["txt"]);

    match state.mode {
        DataMode::Pl => {
            let files = dialog.set_title("Select PL spectra").pick_files();
            if let Some(paths) = files {
                log::debug!("{} PL files selected", paths.len());
                state.begin_pl_batch(paths);
            }
        }
        DataMode::Afm => {
            let file = dialog.set_title("Select AFM data file").pick_file();
            if let Some(path) = file {
                state.load_afm(&path);
            }
        }
    }
}
