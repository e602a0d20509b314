use std::cmp::Ordering;
use std::path::PathBuf;

// ---------------------------------------------------------------------------
// Series – one plotted line
// ---------------------------------------------------------------------------

/// One measurement ready for plotting. Points keep file order.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Legend text.
    pub label: String,
    /// Wavelength (PL) or distance (AFM).
    pub x: Vec<f64>,
    /// Intensity (PL) or surface voltage (AFM) – same length as `x`.
    pub y: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            x: Vec::new(),
            y: Vec::new(),
        }
    }

    pub fn push(&mut self, x: f64, y: f64) {
        self.x.push(x);
        self.y.push(y);
    }

    /// Number of points.
    pub fn len(&self) -> usize {
        self.x.len()
    }

    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Points as `[x, y]` pairs, the shape `egui_plot` consumes.
    pub fn points(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| [x, y])
    }
}

// ---------------------------------------------------------------------------
// SortKey – what decides legend order within a PL batch
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub enum SortKey {
    /// Raw label text, compared lexicographically.
    Label(String),
    /// Seconds relative to the batch reference time.
    Offset(f64),
}

impl Eq for SortKey {}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        use SortKey::*;
        match (self, other) {
            (Label(a), Label(b)) => a.cmp(b),
            (Offset(a), Offset(b)) => a.total_cmp(b),
            // A batch never mixes kinds; keep the order total anyway.
            (Offset(_), Label(_)) => Ordering::Less,
            (Label(_), Offset(_)) => Ordering::Greater,
        }
    }
}

// ---------------------------------------------------------------------------
// FileReference – a selected PL file with its legend label
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq)]
pub struct FileReference {
    pub path: PathBuf,
    /// Derived (or user-supplied) legend label.
    pub label: String,
    pub sort_key: SortKey,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_points_follow_file_order() {
        let mut s = Series::new("a");
        s.push(3.0, 1.0);
        s.push(1.0, 2.0);
        let pts: Vec<[f64; 2]> = s.points().collect();
        assert_eq!(pts, vec![[3.0, 1.0], [1.0, 2.0]]);
        assert_eq!(s.len(), 2);
        assert!(!s.is_empty());
    }

    #[test]
    fn offsets_compare_by_value() {
        assert!(SortKey::Offset(4.0) < SortKey::Offset(10.0));
        assert!(SortKey::Label("10.00 s".into()) < SortKey::Label("4.00 s".into()));
    }
}
