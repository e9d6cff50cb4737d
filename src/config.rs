//! Static picker configuration.

use lucide_icons::Icon;

use crate::constants;
use crate::layout::{self, GridOrder};
use crate::palette;

/// Horizontal edge of the trigger the dropdown lines up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Right,
}

/// Vertical edge of the trigger the dropdown lines up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Bottom,
}

/// Options fixed at construction time.
///
/// Palette and column count here are the initial values; bind signals through
/// [`SwatchPickerProps`](crate::SwatchPickerProps) to change them later.
#[derive(Debug, Clone)]
pub struct SwatchPickerConfig {
    pub palette: Vec<String>,
    pub column_count: usize,
    pub swatch_size: f64,
    pub grid_order: GridOrder,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    /// Glyph drawn with the Lucide icon font.
    pub icon: String,
    /// Suppress the pressed highlight on the trigger button.
    pub no_ink: bool,
}

impl Default for SwatchPickerConfig {
    fn default() -> Self {
        Self {
            palette: palette::default_colors(),
            column_count: constants::COLUMN_COUNT,
            swatch_size: constants::SWATCH_SIZE,
            grid_order: GridOrder::default(),
            horizontal_align: HorizontalAlign::default(),
            vertical_align: VerticalAlign::default(),
            icon: Icon::PaintBucket.unicode().to_string(),
            no_ink: false,
        }
    }
}

impl SwatchPickerConfig {
    pub fn palette<S: Into<String>>(mut self, colors: impl IntoIterator<Item = S>) -> Self {
        self.palette = colors.into_iter().map(Into::into).collect();
        self
    }

    pub fn column_count(mut self, columns: usize) -> Self {
        self.column_count = columns;
        self
    }

    pub fn swatch_size(mut self, size: f64) -> Self {
        self.swatch_size = size;
        self
    }

    /// Set the swatch size from a CSS-like length such as `"24px"`.
    /// Empty or invalid values select the default size.
    pub fn swatch_size_str(mut self, size: &str) -> Self {
        self.swatch_size = layout::resolve_swatch_size(Some(size));
        self
    }

    pub fn grid_order(mut self, order: GridOrder) -> Self {
        self.grid_order = order;
        self
    }

    pub fn horizontal_align(mut self, align: HorizontalAlign) -> Self {
        self.horizontal_align = align;
        self
    }

    pub fn vertical_align(mut self, align: VerticalAlign) -> Self {
        self.vertical_align = align;
        self
    }

    pub fn icon(mut self, icon: Icon) -> Self {
        self.icon = icon.unicode().to_string();
        self
    }

    pub fn no_ink(mut self, no_ink: bool) -> Self {
        self.no_ink = no_ink;
        self
    }
}
