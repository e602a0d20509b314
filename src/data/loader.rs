use std::path::Path;

use super::error::{FileFormatError, FormatResult};
use super::model::{FileReference, Series};

/// Line opening the data block of a PL export.
pub const BEGIN_MARKER: &str = ">>>>>Begin Spectral Data<<<<<";
/// Line closing the data block of a PL export.
pub const END_MARKER: &str = ">>>>>End Spectral Data<<<<<";

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse every file of an already ordered and labelled PL batch.
///
/// The first bad file aborts the batch; nothing is returned for the files
/// that did parse.
pub fn load_pl_batch(files: &[FileReference]) -> FormatResult<Vec<Series>> {
    files
        .iter()
        .map(|file| load_pl_file(&file.path, &file.label))
        .collect()
}

/// Load a single PL spectrum and give it `label`.
pub fn load_pl_file(path: &Path, label: &str) -> FormatResult<Series> {
    let text = read_latin1(path)?;
    let series = parse_pl(path, label, &text)?;
    log::debug!("{}: {} spectral points", path.display(), series.len());
    Ok(series)
}

/// Load an AFM line scan. The series is labelled with the file stem.
pub fn load_afm_file(path: &Path) -> FormatResult<Series> {
    let text = read_latin1(path)?;
    let series = parse_afm(path, &file_stem(path), &text)?;
    log::debug!("{}: {} scan points", path.display(), series.len());
    Ok(series)
}

/// File name without extension, falling back to the whole path.
pub fn file_stem(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

// ---------------------------------------------------------------------------
// Decoding
// ---------------------------------------------------------------------------

fn read_latin1(path: &Path) -> FormatResult<String> {
    let bytes = std::fs::read(path).map_err(|source| FileFormatError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(decode_latin1(&bytes))
}

/// ISO-8859-1: every byte is the code point of the same value.
pub fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().map(|&b| char::from(b)).collect()
}

/// Lines ended by `\r\n`, `\n` or a bare `\r`.
fn text_lines(text: &str) -> impl Iterator<Item = &str> {
    let mut rest = text;
    std::iter::from_fn(move || {
        if rest.is_empty() {
            return None;
        }
        let line = match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(end) => {
                let line = &rest[..end];
                let eol = if rest[end..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[end + eol..];
                line
            }
            None => std::mem::take(&mut rest),
        };
        Some(line)
    })
}

// ---------------------------------------------------------------------------
// PL parser
// ---------------------------------------------------------------------------

/// Parse the block between [`BEGIN_MARKER`] and [`END_MARKER`].
///
/// Header lines before the block are ignored. Each data row holds two
/// whitespace-separated numbers; the wavelength may use a decimal comma.
/// Without an end marker the block runs to the end of the file.
pub fn parse_pl(path: &Path, label: &str, text: &str) -> FormatResult<Series> {
    let mut lines = text_lines(text).enumerate();

    if !lines.by_ref().any(|(_, line)| line.trim() == BEGIN_MARKER) {
        return Err(FileFormatError::MissingSection {
            path: path.to_path_buf(),
            marker: BEGIN_MARKER,
        });
    }

    let mut series = Series::new(label);
    let mut closed = false;
    for (idx, line) in lines {
        if line.trim() == END_MARKER {
            closed = true;
            break;
        }
        let line_no = idx + 1;
        let (x, y) = two_fields(path, line_no, line)?;
        series.push(
            parse_field(path, line_no, &x.replace(',', "."))?,
            parse_field(path, line_no, y)?,
        );
    }

    if !closed {
        log::warn!("{}: '{END_MARKER}' missing, read to end of file", path.display());
    }
    Ok(series)
}

// ---------------------------------------------------------------------------
// AFM parser
// ---------------------------------------------------------------------------

/// Parse an AFM export: one header line, then distance / voltage rows.
///
/// Decimal commas are accepted in both columns, as is scientific notation
/// (`1,5e-3`, `2.0E+1`). Rows that are blank once normalized, or whose two
/// fields are placeholders rather than numbers, are skipped. A scan without
/// a single data row is an error.
pub fn parse_afm(path: &Path, label: &str, text: &str) -> FormatResult<Series> {
    let mut series = Series::new(label);

    for (idx, line) in text_lines(text).enumerate().skip(1) {
        let normalized = line.replace(',', ".");
        if normalized.trim().is_empty() {
            continue;
        }
        let line_no = idx + 1;
        let (x, y) = two_fields(path, line_no, &normalized)?;
        match (x.parse::<f64>(), y.parse::<f64>()) {
            (Ok(x), Ok(y)) => series.push(x, y),
            _ => log::debug!("{}:{line_no}: skipping non-numeric row '{}'", path.display(), line.trim()),
        }
    }

    if series.is_empty() {
        return Err(FileFormatError::NoData {
            path: path.to_path_buf(),
        });
    }
    Ok(series)
}

// -- Row helpers --

/// First two whitespace-separated fields of a row; extra fields are ignored.
fn two_fields<'a>(path: &Path, line: usize, row: &'a str) -> FormatResult<(&'a str, &'a str)> {
    let mut fields = row.split_whitespace();
    match (fields.next(), fields.next()) {
        (Some(x), Some(y)) => Ok((x, y)),
        (first, _) => Err(FileFormatError::MissingColumn {
            path: path.to_path_buf(),
            line,
            found: usize::from(first.is_some()),
        }),
    }
}

fn parse_field(path: &Path, line: usize, field: &str) -> FormatResult<f64> {
    field
        .parse::<f64>()
        .map_err(|_| FileFormatError::InvalidNumber {
            path: path.to_path_buf(),
            line,
            field: field.to_string(),
        })
}
