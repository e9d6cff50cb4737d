//! # floem-swatch
//!
//! A swatch color picker widget for [Floem](https://github.com/lapce/floem).
//!
//! A small icon button opens a dropdown grid of palette colors (the Material
//! Design palette by default). Tapping a swatch stores it as a lowercase
//! `#rrggbb` string in the bound signal and fires the `on_selected` callback.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use floem::prelude::*;
//! use floem_swatch::{swatch_picker, SwatchPickerConfig, SwatchPickerProps};
//!
//! let color = RwSignal::new("#e91e63".to_string());
//! let props = SwatchPickerProps::new(color)
//!     .config(SwatchPickerConfig::default().column_count(18))
//!     .on_selected(|hex| println!("picked {hex}"));
//! // Use `swatch_picker(props)` in your Floem view tree.
//! ```
//!
//! The picker logic lives in [`SwatchPickerState`] and can be driven without
//! a window.

mod color;
mod config;
mod constants;
mod error;
mod layout;
mod palette;
mod picker;
mod state;
mod swatch_grid;

pub use color::{normalize_color, rgb_to_hex, SwatchColor};
pub use config::{HorizontalAlign, SwatchPickerConfig, VerticalAlign};
pub use error::{SwatchError, SwatchResult};
pub use layout::{compute_grid, parse_swatch_size, resolve_swatch_size, GridDimensions, GridOrder};
pub use palette::{default_colors, Palette, DEFAULT_COLORS, DEFAULT_COLOR_COUNT};
pub use picker::SwatchPickerProps;
pub use state::{PickerEvent, SubscriptionId, Swatch, SwatchPickerState, Update};

use std::sync::Once;

use floem::prelude::*;
use floem::text::FONT_SYSTEM;

static LOAD_LUCIDE_FONT: Once = Once::new();

/// Creates the swatch picker view.
///
/// The picker reads from and writes to the color signal in `props`. External
/// changes to the signal are reflected in the trigger icon, and swatch taps
/// update the signal.
pub fn swatch_picker(props: SwatchPickerProps) -> impl IntoView {
    LOAD_LUCIDE_FONT.call_once(|| {
        FONT_SYSTEM
            .lock()
            .db_mut()
            .load_font_data(lucide_icons::LUCIDE_FONT_BYTES.to_vec());
    });
    picker::picker(props)
}
