//! Palette store: the ordered swatch list and its column count.

use crate::constants;

/// Number of entries in [`DEFAULT_COLORS`].
pub const DEFAULT_COLOR_COUNT: usize = 180;

/// Material Design palette, grouped by hue family from light to dark.
pub static DEFAULT_COLORS: [&str; DEFAULT_COLOR_COUNT] = [
    // Red
    "#ffebee", "#ffcdd2", "#ef9a9a", "#e57373", "#ef5350",
    "#f44336", "#e53935", "#d32f2f", "#c62828", "#b71c1c",
    // Pink
    "#fce4ec", "#f8bbd0", "#f48fb1", "#f06292", "#ec407a",
    "#e91e63", "#d81b60", "#c2185b", "#ad1457", "#880e4f",
    // Purple
    "#f3e5f5", "#e1bee7", "#ce93d8", "#ba68c8", "#ab47bc",
    "#9c27b0", "#8e24aa", "#7b1fa2", "#6a1b9a", "#4a148c",
    // Deep Purple
    "#ede7f6", "#d1c4e9", "#b39ddb", "#9575cd", "#7e57c2",
    "#673ab7", "#5e35b1", "#512da8", "#4527a0", "#311b92",
    // Indigo
    "#e8eaf6", "#c5cae9", "#9fa8da", "#7986cb", "#5c6bc0",
    "#3f51b5", "#3949ab", "#303f9f", "#283593", "#1a237e",
    // Blue
    "#e3f2fd", "#bbdefb", "#90caf9", "#64b5f6", "#42a5f5",
    "#2196f3", "#1e88e5", "#1976d2", "#1565c0", "#0d47a1",
    // Light Blue
    "#e1f5fe", "#b3e5fc", "#81d4fa", "#4fc3f7", "#29b6f6",
    "#03a9f4", "#039be5", "#0288d1", "#0277bd", "#01579b",
    // Cyan
    "#e0f7fa", "#b2ebf2", "#80deea", "#4dd0e1", "#26c6da",
    "#00bcd4", "#00acc1", "#0097a7", "#00838f", "#006064",
    // Teal
    "#e0f2f1", "#b2dfdb", "#80cbc4", "#4db6ac", "#26a69a",
    "#009688", "#00897b", "#00796b", "#00695c", "#004d40",
    // Green
    "#e8f5e9", "#c8e6c9", "#a5d6a7", "#81c784", "#66bb6a",
    "#4caf50", "#43a047", "#388e3c", "#2e7d32", "#1b5e20",
    // Light Green
    "#f1f8e9", "#dcedc8", "#c5e1a5", "#aed581", "#9ccc65",
    "#8bc34a", "#7cb342", "#689f38", "#558b2f", "#33691e",
    // Lime
    "#f9fbe7", "#f0f4c3", "#e6ee9c", "#dce775", "#d4e157",
    "#cddc39", "#c0ca33", "#afb42b", "#9e9d24", "#827717",
    // Yellow
    "#fffde7", "#fff9c4", "#fff59d", "#fff176", "#ffee58",
    "#ffeb3b", "#fdd835", "#fbc02d", "#f9a825", "#f57f17",
    // Amber
    "#fff8e1", "#ffecb3", "#ffe082", "#ffd54f", "#ffca28",
    "#ffc107", "#ffb300", "#ffa000", "#ff8f00", "#ff6f00",
    // Orange
    "#fff3e0", "#ffe0b2", "#ffcc80", "#ffb74d", "#ffa726",
    "#ff9800", "#fb8c00", "#f57c00", "#ef6c00", "#e65100",
    // Deep Orange
    "#fbe9e7", "#ffccbc", "#ffab91", "#ff8a65", "#ff7043",
    "#ff5722", "#f4511e", "#e64a19", "#d84315", "#bf360c",
    // Brown
    "#efebe9", "#d7ccc8", "#bcaaa4", "#a1887f", "#8d6e63",
    "#795548", "#6d4c41", "#5d4037", "#4e342e", "#3e2723",
    // Grey
    "#fafafa", "#f5f5f5", "#eeeeee", "#e0e0e0", "#bdbdbd",
    "#9e9e9e", "#757575", "#616161", "#424242", "#212121",
];

/// Ordered list of selectable colors plus the number of colors per row.
///
/// Order is display order. Duplicates are kept and an empty list is allowed
/// (it lays out as zero rows).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
    columns: usize,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            colors: default_colors(),
            columns: constants::COLUMN_COUNT,
        }
    }
}

impl Palette {
    /// Create a palette; a column count of 0 is raised to 1.
    pub fn new(colors: Vec<String>, columns: usize) -> Self {
        Self {
            colors,
            columns: clamp_columns(columns),
        }
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.colors.first().map(String::as_str)
    }

    /// Replace every color at once.
    pub fn replace(&mut self, colors: Vec<String>) {
        self.colors = colors;
    }

    pub fn set_columns(&mut self, columns: usize) {
        self.columns = clamp_columns(columns);
    }

    /// Membership test used to validate a selection: an exact match first,
    /// then the lowercased candidate.
    pub fn contains(&self, color: &str) -> bool {
        if self.colors.iter().any(|c| c == color) {
            return true;
        }
        let lower = color.to_lowercase();
        self.colors.iter().any(|c| *c == lower)
    }
}

/// Owned copy of [`DEFAULT_COLORS`].
pub fn default_colors() -> Vec<String> {
    DEFAULT_COLORS.iter().map(|c| c.to_string()).collect()
}

fn clamp_columns(columns: usize) -> usize {
    if columns == 0 {
        log::warn!("column count must be at least 1, using 1");
        1
    } else {
        columns
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn palette(colors: &[&str]) -> Palette {
        Palette::new(colors.iter().map(|c| c.to_string()).collect(), 3)
    }

    #[test]
    fn test_default_palette() {
        let p = Palette::default();
        assert_eq!(p.len(), DEFAULT_COLOR_COUNT);
        assert_eq!(p.columns(), 18);
        assert_eq!(p.first(), Some("#ffebee"));
        assert_eq!(p.colors().last().map(String::as_str), Some("#212121"));
    }

    #[test]
    fn test_default_colors_are_lowercase_hex() {
        for c in DEFAULT_COLORS {
            assert_eq!(c.len(), 7);
            assert!(c.starts_with('#'));
            assert_eq!(c, c.to_lowercase());
        }
    }

    #[test]
    fn test_contains_exact_and_lowercased() {
        let p = palette(&["#ffffff", "#ABCDEF"]);
        assert!(p.contains("#ffffff"));
        assert!(p.contains("#FFFFFF"));
        assert!(p.contains("#ABCDEF"));
        assert!(!p.contains("#123456"));
    }

    #[test]
    fn test_contains_does_not_fold_palette_side() {
        // The palette entry is uppercase and the candidate is not an exact match.
        let p = palette(&["#ABCDEF"]);
        assert!(!p.contains("#abcdef"));
    }

    #[test]
    fn test_zero_columns_clamped() {
        let mut p = palette(&["#000000"]);
        p.set_columns(0);
        assert_eq!(p.columns(), 1);
        assert_eq!(Palette::new(Vec::new(), 0).columns(), 1);
    }

    #[test]
    fn test_duplicates_and_empty() {
        let p = palette(&["#000000", "#000000"]);
        assert_eq!(p.len(), 2);
        let empty = palette(&[]);
        assert!(empty.is_empty());
        assert_eq!(empty.first(), None);
    }
}
