use std::path::{Path, PathBuf};

use chrono::{NaiveTime, Timelike};
use serde::{Deserialize, Serialize};

use super::error::{FileFormatError, FormatResult};
use super::loader::file_stem;
use super::model::{FileReference, SortKey};

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// The two PL toggles shown in the side panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LabelOptions {
    pub label_by_filename: bool,
    pub use_custom_labels: bool,
}

/// Which part of a file name carries the `HH-MM-SS[-fraction]` token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TokenPosition {
    Last,
    Index(usize),
}

/// Filename convention for acquisition times, e.g. `sample_PL_14-03-22-125.txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TimestampFormat {
    /// The file stem is split on this string.
    pub separator: String,
    pub token: TokenPosition,
    /// Count a fourth `-fraction` component as sub-second precision.
    pub use_fraction: bool,
}

impl Default for TimestampFormat {
    fn default() -> Self {
        Self {
            separator: "_".to_string(),
            token: TokenPosition::Last,
            use_fraction: true,
        }
    }
}

/// How a PL batch is ordered in the legend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortOrder {
    /// Lexicographic on the label text, so `"10.00 s"` precedes `"4.00 s"`.
    Label,
    /// Time offsets by value; file-name labels still sort as text.
    #[default]
    Numeric,
}

// ---------------------------------------------------------------------------
// Timestamp extraction
// ---------------------------------------------------------------------------

/// Seconds since midnight encoded in `file_name`.
pub fn extract_timestamp(file_name: &str, format: &TimestampFormat) -> FormatResult<f64> {
    let invalid = || FileFormatError::InvalidTimestamp {
        file_name: file_name.to_string(),
    };

    let stem = Path::new(file_name)
        .file_stem()
        .and_then(|s| s.to_str())
        .ok_or_else(invalid)?;
    let separator = format.separator.as_str();
    let token = match format.token {
        TokenPosition::Last => stem.rsplit(separator).next(),
        TokenPosition::Index(n) => stem.split(separator).nth(n),
    }
    .ok_or_else(invalid)?;

    let parts: Vec<&str> = token.split('-').collect();
    let (h, m, s, fraction) = match parts.as_slice() {
        [h, m, s] => (*h, *m, *s, None),
        [h, m, s, f] => (*h, *m, *s, Some(*f)),
        _ => return Err(invalid()),
    };

    let number = |t: &str| t.parse::<u32>().ok();
    let time = match (number(h), number(m), number(s)) {
        (Some(h), Some(m), Some(s)) => NaiveTime::from_hms_opt(h, m, s),
        _ => None,
    }
    .ok_or_else(invalid)?;

    let mut seconds = f64::from(time.num_seconds_from_midnight());
    if let (true, Some(f)) = (format.use_fraction, fraction) {
        if f.is_empty() || !f.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        // "125" is 0.125 s, like strptime's %f.
        seconds += format!("0.{f}").parse::<f64>().map_err(|_| invalid())?;
    }
    Ok(seconds)
}

/// Legend text for an offset from the reference time.
pub fn format_offset(seconds: f64) -> String {
    format!("{seconds:.2} s")
}

// ---------------------------------------------------------------------------
// Batch arrangement
// ---------------------------------------------------------------------------

/// Derive labels for a PL selection and put it into legend order.
///
/// With timestamp labels the reference time is taken from the first file in
/// file-name order and held for the rest of the batch.
pub fn arrange_files(
    paths: &[PathBuf],
    options: LabelOptions,
    format: &TimestampFormat,
    order: SortOrder,
) -> FormatResult<Vec<FileReference>> {
    let mut selection: Vec<&PathBuf> = paths.iter().collect();
    selection.sort_by_key(|p| p.file_name().map(|n| n.to_os_string()));

    let mut reference_time: Option<f64> = None;
    let mut files = Vec::with_capacity(selection.len());

    for path in selection {
        let file = if options.label_by_filename {
            let label = file_stem(path);
            FileReference {
                path: path.clone(),
                sort_key: SortKey::Label(label.clone()),
                label,
            }
        } else {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let acquired = extract_timestamp(&name, format)?;
            let offset = acquired - *reference_time.get_or_insert(acquired);
            let label = format_offset(offset);
            let sort_key = match order {
                SortOrder::Label => SortKey::Label(label.clone()),
                SortOrder::Numeric => SortKey::Offset(offset),
            };
            FileReference {
                path: path.clone(),
                label,
                sort_key,
            }
        };
        log::debug!("{} -> '{}'", path.display(), file.label);
        files.push(file);
    }

    files.sort_by(|a, b| a.sort_key.cmp(&b.sort_key).then_with(|| a.path.cmp(&b.path)));
    Ok(files)
}

/// Replace derived labels with user input. Blank entries keep the derived
/// label; order is unchanged.
pub fn apply_custom_labels(files: &mut [FileReference], custom: &[String]) {
    for (file, text) in files.iter_mut().zip(custom) {
        if !text.trim().is_empty() {
            file.label = text.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(names: &[&str]) -> Vec<PathBuf> {
        names.iter().map(|n| PathBuf::from("/data/pl").join(n)).collect()
    }

    fn labels(files: &[FileReference]) -> Vec<&str> {
        files.iter().map(|f| f.label.as_str()).collect()
    }

    const BY_TIME: LabelOptions = LabelOptions {
        label_by_filename: false,
        use_custom_labels: false,
    };

    #[test]
    fn default_format_reads_last_token() {
        let fmt = TimestampFormat::default();
        assert_eq!(extract_timestamp("sample_PL_01-02-03.txt", &fmt).unwrap(), 3723.0);
        assert_eq!(extract_timestamp("a_00-00-01-5.txt", &fmt).unwrap(), 1.5);
        assert_eq!(extract_timestamp("a_00-00-01-125.txt", &fmt).unwrap(), 1.125);
    }

    #[test]
    fn double_underscore_convention_ignores_fraction() {
        let fmt = TimestampFormat {
            separator: "__".into(),
            token: TokenPosition::Last,
            use_fraction: false,
        };
        assert_eq!(extract_timestamp("GaN_run__10-00-00-999.txt", &fmt).unwrap(), 36000.0);
    }

    #[test]
    fn indexed_token_convention() {
        let fmt = TimestampFormat {
            separator: "_".into(),
            token: TokenPosition::Index(2),
            use_fraction: true,
        };
        assert_eq!(extract_timestamp("sample_PL_00-01-00-250_extra.txt", &fmt).unwrap(), 60.25);
    }

    #[test]
    fn bad_tokens_are_rejected() {
        let fmt = TimestampFormat::default();
        for name in ["plain.txt", "a_25-00-00.txt", "a_00-61-00.txt", "a_00-00.txt", "a_00-00-01-x.txt"] {
            assert!(
                matches!(extract_timestamp(name, &fmt), Err(FileFormatError::InvalidTimestamp { .. })),
                "{name} should be rejected"
            );
        }
    }

    #[test]
    fn offsets_relative_to_first_file() {
        let files = arrange_files(
            &paths(&["s_00-00-05.txt", "s_00-00-01.txt"]),
            BY_TIME,
            &TimestampFormat::default(),
            SortOrder::Numeric,
        )
        .unwrap();
        assert_eq!(labels(&files), vec!["0.00 s", "4.00 s"]);
        assert!(files[0].path.ends_with("s_00-00-01.txt"));
    }

    #[test]
    fn midnight_is_a_valid_reference() {
        let files = arrange_files(
            &paths(&["s_00-00-00.txt", "s_00-00-02.txt"]),
            BY_TIME,
            &TimestampFormat::default(),
            SortOrder::Numeric,
        )
        .unwrap();
        assert_eq!(labels(&files), vec!["0.00 s", "2.00 s"]);
    }

    #[test]
    fn legacy_order_sorts_label_text() {
        let names = ["s_00-00-00.txt", "s_00-00-04.txt", "s_00-00-10.txt"];
        let fmt = TimestampFormat::default();

        let legacy = arrange_files(&paths(&names), BY_TIME, &fmt, SortOrder::Label).unwrap();
        assert_eq!(labels(&legacy), vec!["0.00 s", "10.00 s", "4.00 s"]);

        let numeric = arrange_files(&paths(&names), BY_TIME, &fmt, SortOrder::Numeric).unwrap();
        assert_eq!(labels(&numeric), vec!["0.00 s", "4.00 s", "10.00 s"]);
    }

    #[test]
    fn filename_labels_use_stem() {
        let opts = LabelOptions {
            label_by_filename: true,
            use_custom_labels: false,
        };
        let files = arrange_files(
            &paths(&["b_sample.txt", "a_sample.dat", "notimestamp.txt"]),
            opts,
            &TimestampFormat::default(),
            SortOrder::Numeric,
        )
        .unwrap();
        assert_eq!(labels(&files), vec!["a_sample", "b_sample", "notimestamp"]);
    }

    #[test]
    fn timestamp_error_aborts_arrangement() {
        let err = arrange_files(
            &paths(&["s_00-00-01.txt", "notimestamp.txt"]),
            BY_TIME,
            &TimestampFormat::default(),
            SortOrder::Numeric,
        )
        .unwrap_err();
        assert!(matches!(err, FileFormatError::InvalidTimestamp { ref file_name } if file_name == "notimestamp.txt"));
    }

    #[test]
    fn empty_selection_gives_empty_batch() {
        let files = arrange_files(&[], BY_TIME, &TimestampFormat::default(), SortOrder::Numeric).unwrap();
        assert!(files.is_empty());
    }

    #[test]
    fn arrangement_is_idempotent() {
        let p = paths(&["s_00-00-03.txt", "s_00-00-01.txt"]);
        let fmt = TimestampFormat::default();
        assert_eq!(
            arrange_files(&p, BY_TIME, &fmt, SortOrder::Label).unwrap(),
            arrange_files(&p, BY_TIME, &fmt, SortOrder::Label).unwrap()
        );
    }

    #[test]
    fn blank_custom_labels_fall_back() {
        let mut files = arrange_files(
            &paths(&["s_00-00-01.txt", "s_00-00-02.txt", "s_00-00-03.txt"]),
            BY_TIME,
            &TimestampFormat::default(),
            SortOrder::Numeric,
        )
        .unwrap();
        apply_custom_labels(&mut files, &["before".into(), "   ".into(), String::new()]);
        assert_eq!(labels(&files), vec!["before", "1.00 s", "2.00 s"]);
    }
}
