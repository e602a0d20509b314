use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::data::labels::{SortOrder, TimestampFormat};

/// Environment variable naming the settings file.
pub const CONFIG_ENV: &str = "SPECTRA_PLOTTER_CONFIG";
/// Looked up in the working directory when [`CONFIG_ENV`] is unset.
pub const DEFAULT_CONFIG_FILE: &str = "spectra-plotter.json";

// ---------------------------------------------------------------------------
// Settings
// ---------------------------------------------------------------------------

/// User configuration, read once at start-up.
///
/// ```json
/// {
///   "timestamp": { "separator": "__", "token": "last", "use_fraction": false },
///   "sort_order": "label"
/// }
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub timestamp: TimestampFormat,
    pub sort_order: SortOrder,
}

impl Settings {
    pub fn from_file(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading settings {}", path.display()))?;
        serde_json::from_str(&text).with_context(|| format!("parsing settings {}", path.display()))
    }

    /// Settings from [`CONFIG_ENV`] or [`DEFAULT_CONFIG_FILE`]; defaults when
    /// neither exists or the file is unusable.
    pub fn discover() -> Self {
        let Some(path) = config_path() else {
            log::debug!("no settings file, using defaults");
            return Self::default();
        };
        match Self::from_file(&path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{e:#}; using default settings");
                Self::default()
            }
        }
    }
}

fn config_path() -> Option<PathBuf> {
    if let Some(p) = std::env::var_os(CONFIG_ENV) {
        return Some(PathBuf::from(p));
    }
    let local = PathBuf::from(DEFAULT_CONFIG_FILE);
    local.exists().then_some(local)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::labels::TokenPosition;

    #[test]
    fn empty_object_gives_defaults() {
        let s: Settings = serde_json::from_str("{}").unwrap();
        assert_eq!(s, Settings::default());
        assert_eq!(s.sort_order, SortOrder::Numeric);
        assert_eq!(s.timestamp.token, TokenPosition::Last);
    }

    #[test]
    fn double_underscore_convention() {
        let s: Settings = serde_json::from_str(
            r#"{"timestamp": {"separator": "__", "token": "last", "use_fraction": false}, "sort_order": "label"}"#,
        )
        .unwrap();
        assert_eq!(s.timestamp.separator, "__");
        assert!(!s.timestamp.use_fraction);
        assert_eq!(s.sort_order, SortOrder::Label);
    }

    #[test]
    fn indexed_convention_and_partial_fields() {
        let s: Settings = serde_json::from_str(r#"{"timestamp": {"token": {"index": 2}}}"#).unwrap();
        assert_eq!(s.timestamp.token, TokenPosition::Index(2));
        assert_eq!(s.timestamp.separator, "_");
        assert!(s.timestamp.use_fraction);
    }

    #[test]
    fn survives_a_json_round_trip() {
        let s = Settings {
            timestamp: TimestampFormat {
                separator: "-run-".into(),
                token: TokenPosition::Index(1),
                use_fraction: false,
            },
            sort_order: SortOrder::Label,
        };
        let back: Settings = serde_json::from_str(&serde_json::to_string(&s).unwrap()).unwrap();
        assert_eq!(back, s);
    }

    #[test]
    fn from_file_reports_bad_json() {
        let path = std::env::temp_dir().join(format!("spectra-plotter-settings-{}.json", std::process::id()));
        std::fs::write(&path, "{ not json").unwrap();
        let err = Settings::from_file(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing settings"));
        std::fs::remove_file(path).ok();
    }
}
