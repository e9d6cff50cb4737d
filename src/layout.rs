//! Grid geometry for the swatch dropdown.
//!
//! Swatches are square and laid out row-major: index `i` sits in row
//! `i / columns`, column `i % columns`.

use crate::constants;
use crate::error::{SwatchError, SwatchResult};

/// Derived size of the swatch grid.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GridDimensions {
    pub rows: usize,
    pub columns: usize,
    pub width: f64,
    pub height: f64,
}

/// Compute rows and pixel extent for `palette_size` swatches.
///
/// A zero column count is treated as one column and an unusable
/// `swatch_size` falls back to [`constants::SWATCH_SIZE`].
pub fn compute_grid(palette_size: usize, column_count: usize, swatch_size: f64) -> GridDimensions {
    let columns = column_count.max(1);
    let size = sanitize_swatch_size(swatch_size);
    let rows = palette_size.div_ceil(columns);
    GridDimensions {
        rows,
        columns,
        width: columns as f64 * size,
        height: rows as f64 * size,
    }
}

/// Parse a CSS-like length (`"24"`, `"24px"`, `" 24.5px "`).
pub fn parse_swatch_size(value: &str) -> SwatchResult<f64> {
    let trimmed = value.trim();
    let number = trimmed.strip_suffix("px").unwrap_or(trimmed).trim();
    match number.parse::<f64>() {
        Ok(size) if size.is_finite() && size > 0.0 => Ok(size),
        _ => Err(SwatchError::InvalidSize(value.to_string())),
    }
}

/// Resolve an optional size string, falling back to the default swatch size
/// when it is unset, empty or invalid.
pub fn resolve_swatch_size(value: Option<&str>) -> f64 {
    let Some(value) = value.filter(|v| !v.trim().is_empty()) else {
        return constants::SWATCH_SIZE;
    };
    parse_swatch_size(value).unwrap_or_else(|err| {
        log::debug!("{err}, using {}px", constants::SWATCH_SIZE);
        constants::SWATCH_SIZE
    })
}

pub(crate) fn sanitize_swatch_size(size: f64) -> f64 {
    if size.is_finite() && size > 0.0 {
        size
    } else {
        constants::SWATCH_SIZE
    }
}

/// Order in which palette entries fill the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GridOrder {
    /// Left to right, then top to bottom.
    #[default]
    RowMajor,
    /// Top to bottom, then left to right. With the default palette and 18
    /// columns each hue family gets its own column.
    ColumnMajor,
}

/// Top-left corner of swatch `index`.
pub fn swatch_origin(
    index: usize,
    grid: &GridDimensions,
    swatch_size: f64,
    order: GridOrder,
) -> (f64, f64) {
    let (row, col) = match order {
        GridOrder::RowMajor => {
            let columns = grid.columns.max(1);
            (index / columns, index % columns)
        }
        GridOrder::ColumnMajor => {
            let rows = grid.rows.max(1);
            (index % rows, index / rows)
        }
    };
    (col as f64 * swatch_size, row as f64 * swatch_size)
}

/// Index of the swatch under `(x, y)`, if any.
pub fn swatch_at(
    x: f64,
    y: f64,
    palette_size: usize,
    grid: &GridDimensions,
    swatch_size: f64,
    order: GridOrder,
) -> Option<usize> {
    if !(x >= 0.0 && y >= 0.0 && swatch_size > 0.0) {
        return None;
    }
    // Bounds are checked in f64 so far-off points never reach the casts.
    let col = (x / swatch_size).floor();
    let row = (y / swatch_size).floor();
    if col >= grid.columns as f64 || row >= grid.rows as f64 {
        return None;
    }
    let (col, row) = (col as usize, row as usize);
    let index = match order {
        GridOrder::RowMajor => row.checked_mul(grid.columns)?.checked_add(col)?,
        GridOrder::ColumnMajor => col.checked_mul(grid.rows)?.checked_add(row)?,
    };
    (index < palette_size).then_some(index)
}
