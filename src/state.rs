use std::path::{Path, PathBuf};

use crate::data::error::FileFormatError;
use crate::data::labels::{apply_custom_labels, arrange_files, LabelOptions};
use crate::data::loader::{load_afm_file, load_pl_batch};
use crate::data::model::{FileReference, Series};
use crate::settings::Settings;

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// Which kind of measurement the "Plot data" button loads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DataMode {
    #[default]
    Pl,
    Afm,
}

/// What the central panel currently shows.
#[derive(Debug, Clone, PartialEq)]
pub enum PlotContent {
    Pl(Vec<Series>),
    Afm(Series),
}

/// A PL batch waiting for the user to type legend labels.
#[derive(Debug, Clone)]
pub struct PendingLabels {
    /// Ordered files carrying their derived labels.
    pub files: Vec<FileReference>,
    /// One text field per file, initially empty.
    pub entries: Vec<String>,
}

/// The full UI state, independent of rendering.
pub struct AppState {
    pub settings: Settings,

    pub mode: DataMode,

    /// The two PL toggles.
    pub options: LabelOptions,

    /// Set between file selection and label confirmation.
    pub pending: Option<PendingLabels>,

    /// Last successfully loaded plot (None until something is plotted).
    pub plot: Option<PlotContent>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            settings,
            mode: DataMode::default(),
            options: LabelOptions::default(),
            pending: None,
            plot: None,
            status_message: None,
        }
    }

    /// First phase of a PL plot: order the selection and derive labels.
    ///
    /// With custom labels enabled nothing is parsed yet; the batch waits in
    /// [`AppState::pending`] until [`AppState::finish_custom_labels`].
    pub fn begin_pl_batch(&mut self, paths: Vec<PathBuf>) {
        if paths.is_empty() || self.awaiting_labels() {
            return;
        }

        let files = match arrange_files(
            &paths,
            self.options,
            &self.settings.timestamp,
            self.settings.sort_order,
        ) {
            Ok(files) => files,
            Err(e) => return self.report(&e),
        };

        if self.options.use_custom_labels {
            let entries = vec![String::new(); files.len()];
            self.pending = Some(PendingLabels { files, entries });
        } else {
            self.plot_pl_batch(&files);
        }
    }

    /// Second phase: apply the typed labels (or not, when `accept` is false)
    /// and parse the batch.
    pub fn finish_custom_labels(&mut self, accept: bool) {
        let Some(PendingLabels { mut files, entries }) = self.pending.take() else {
            return;
        };
        if accept {
            apply_custom_labels(&mut files, &entries);
        }
        self.plot_pl_batch(&files);
    }

    /// Ignored while a PL batch waits for custom labels.
    pub fn load_afm(&mut self, path: &Path) {
        if self.awaiting_labels() {
            return;
        }
        match load_afm_file(path) {
            Ok(series) => {
                log::info!("Loaded AFM scan {} ({} points)", path.display(), series.len());
                self.plot = Some(PlotContent::Afm(series));
                self.status_message = None;
            }
            Err(e) => self.report(&e),
        }
    }

    /// New loads would otherwise discard or hide the pending batch.
    fn awaiting_labels(&self) -> bool {
        if self.pending.is_some() {
            log::debug!("custom legend prompt open, load request ignored");
        }
        self.pending.is_some()
    }

    fn plot_pl_batch(&mut self, files: &[FileReference]) {
        match load_pl_batch(files) {
            Ok(series) => {
                log::info!(
                    "Loaded {} PL spectra, {} points in total",
                    series.len(),
                    series.iter().map(Series::len).sum::<usize>()
                );
                self.plot = Some(PlotContent::Pl(series));
                self.status_message = None;
            }
            Err(e) => self.report(&e),
        }
    }

    fn report(&mut self, e: &FileFormatError) {
        log::error!("Failed to load data: {e}");
        self.status_message = Some(format!("Error: {e}"));
    }
}
