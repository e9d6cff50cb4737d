//! Sizing, color, and styling constants for the picker.

/// Default edge length of one swatch, in logical pixels
pub const SWATCH_SIZE: f64 = 20.0;

/// Default number of swatches per grid row
pub const COLUMN_COUNT: usize = 18;

/// Scale applied to the swatch under the pointer
pub const HOVER_SCALE: f64 = 1.3;

/// Trigger button edge length
pub const TRIGGER_SIZE: f32 = 32.0;

/// Trigger icon font size
pub const ICON_FONT: f32 = 20.0;

/// Border radius of the trigger button
pub const RADIUS: f32 = 4.0;

/// Z-index of the open dropdown panel
pub const DROPDOWN_Z: i32 = 10;

/// Icon tint when nothing is selected
pub const IDLE_ICON: (u8, u8, u8) = (120, 120, 120);
