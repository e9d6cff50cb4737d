//! Headless picker state.
//!
//! Every mutation goes through [`SwatchPickerState::apply`], which validates
//! the selection, recomputes the grid, invalidates rendered swatches and
//! reports what changed. The Floem view drives this; hosts can also use it on
//! its own and observe it through [`SwatchPickerState::subscribe`].

use crate::color::{normalize_color, SwatchColor};
use crate::constants;
use crate::layout::{self, GridDimensions, GridOrder};
use crate::palette::Palette;

/// One cell of the built swatch grid.
#[derive(Debug, Clone, PartialEq)]
pub struct Swatch {
    pub index: usize,
    /// Palette entry as given by the host.
    pub raw: String,
    /// `None` when `raw` is neither hex nor an rgb triplet.
    pub color: Option<SwatchColor>,
    pub x: f64,
    pub y: f64,
}

/// A state change request.
#[derive(Debug, Clone, PartialEq)]
pub enum Update {
    /// Widget attached to a window: check the selection against the palette,
    /// recompute the grid, forget built swatches.
    Attach,
    SetPalette(Vec<String>),
    SetColumnCount(usize),
    SetSwatchSize(f64),
    SetGridOrder(GridOrder),
    /// Programmatic selection. `None` or `""` clears it.
    SetColor(Option<String>),
    /// User tapped a swatch whose raw color string is given. Closes the
    /// dropdown.
    SelectSwatch(String),
}

/// Notification emitted by [`SwatchPickerState::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PickerEvent {
    /// The stored color changed. `None` means no selection.
    ColorChanged(Option<String>),
    /// A color was picked from the grid (`color-picker-selected`). Fires on
    /// every tap, even when the color did not change.
    Selected(String),
}

/// Handle returned by [`SwatchPickerState::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Box<dyn FnMut(&PickerEvent)>;

pub struct SwatchPickerState {
    palette: Palette,
    swatch_size: f64,
    order: GridOrder,
    color: Option<String>,
    grid: GridDimensions,
    swatches: Vec<Swatch>,
    rendered: bool,
    open: bool,
    build_count: usize,
    listeners: Vec<(SubscriptionId, Listener)>,
    next_listener: u64,
}

impl Default for SwatchPickerState {
    fn default() -> Self {
        Self::new(Palette::default(), constants::SWATCH_SIZE)
    }
}

impl std::fmt::Debug for SwatchPickerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SwatchPickerState")
            .field("palette", &self.palette)
            .field("swatch_size", &self.swatch_size)
            .field("color", &self.color)
            .field("order", &self.order)
            .field("grid", &self.grid)
            .field("rendered", &self.rendered)
            .field("open", &self.open)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}

impl SwatchPickerState {
    pub fn new(palette: Palette, swatch_size: f64) -> Self {
        let swatch_size = layout::sanitize_swatch_size(swatch_size);
        let grid = layout::compute_grid(palette.len(), palette.columns(), swatch_size);
        Self {
            palette,
            swatch_size,
            order: GridOrder::default(),
            color: None,
            grid,
            swatches: Vec::new(),
            rendered: false,
            open: false,
            build_count: 0,
            listeners: Vec::new(),
            next_listener: 0,
        }
    }

    pub fn palette(&self) -> &Palette {
        &self.palette
    }

    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    pub fn grid(&self) -> GridDimensions {
        self.grid
    }

    pub fn swatch_size(&self) -> f64 {
        self.swatch_size
    }

    pub fn grid_order(&self) -> GridOrder {
        self.order
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Whether the swatches are built and current.
    pub fn is_rendered(&self) -> bool {
        self.rendered
    }

    /// How many times the swatch list has been (re)built.
    pub fn build_count(&self) -> usize {
        self.build_count
    }

    /// Swatches from the last build. Empty until the dropdown is first opened.
    pub fn swatches(&self) -> &[Swatch] {
        &self.swatches
    }

    /// Register a listener for every emitted [`PickerEvent`].
    ///
    /// Listeners run inside [`apply`](Self::apply) and must not touch this
    /// state again.
    pub fn subscribe(&mut self, listener: impl FnMut(&PickerEvent) + 'static) -> SubscriptionId {
        let id = SubscriptionId(self.next_listener);
        self.next_listener += 1;
        self.listeners.push((id, Box::new(listener)));
        id
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.listeners.len();
        self.listeners.retain(|(lid, _)| *lid != id);
        self.listeners.len() != before
    }

    /// Apply one update, notify listeners, and return the emitted events.
    pub fn apply(&mut self, update: Update) -> Vec<PickerEvent> {
        let mut events = Vec::new();
        match update {
            Update::Attach => {
                self.validate_against_palette(&mut events);
                self.invalidate();
            }
            Update::SetPalette(colors) => {
                self.palette.replace(colors);
                self.validate_against_palette(&mut events);
                self.invalidate();
            }
            Update::SetColumnCount(columns) => {
                if columns != self.palette.columns() {
                    self.palette.set_columns(columns);
                    self.invalidate();
                }
            }
            Update::SetSwatchSize(size) => {
                let size = layout::sanitize_swatch_size(size);
                if size != self.swatch_size {
                    self.swatch_size = size;
                    self.invalidate();
                }
            }
            Update::SetGridOrder(order) => {
                if order != self.order {
                    self.order = order;
                    self.invalidate();
                }
            }
            Update::SetColor(color) => {
                self.store_color(color, &mut events);
            }
            Update::SelectSwatch(raw) => {
                let hex = normalize_color(&raw);
                self.open = false;
                self.store_color(Some(hex.clone()), &mut events);
                events.push(PickerEvent::Selected(hex));
            }
        }

        for event in &events {
            for (_, listener) in self.listeners.iter_mut() {
                listener(event);
            }
        }
        events
    }

    pub fn attach(&mut self) -> Vec<PickerEvent> {
        self.apply(Update::Attach)
    }

    pub fn set_palette(&mut self, colors: Vec<String>) -> Vec<PickerEvent> {
        self.apply(Update::SetPalette(colors))
    }

    pub fn set_column_count(&mut self, columns: usize) -> Vec<PickerEvent> {
        self.apply(Update::SetColumnCount(columns))
    }

    pub fn set_swatch_size(&mut self, size: f64) -> Vec<PickerEvent> {
        self.apply(Update::SetSwatchSize(size))
    }

    pub fn set_grid_order(&mut self, order: GridOrder) -> Vec<PickerEvent> {
        self.apply(Update::SetGridOrder(order))
    }

    pub fn set_color(&mut self, color: impl Into<String>) -> Vec<PickerEvent> {
        self.apply(Update::SetColor(Some(color.into())))
    }

    pub fn clear_color(&mut self) -> Vec<PickerEvent> {
        self.apply(Update::SetColor(None))
    }

    pub fn select_swatch(&mut self, raw: impl Into<String>) -> Vec<PickerEvent> {
        self.apply(Update::SelectSwatch(raw.into()))
    }

    /// Open the dropdown and build the swatches if they are stale.
    ///
    /// Returns `true` when a rebuild happened.
    pub fn open_dropdown(&mut self) -> bool {
        self.open = true;
        if self.rendered {
            return false;
        }
        let grid = self.grid;
        let order = self.order;
        let size = self.swatch_size;
        self.swatches = self
            .palette
            .colors()
            .iter()
            .enumerate()
            .map(|(index, raw)| {
                let color = match SwatchColor::parse(raw) {
                    Ok(color) => Some(color),
                    Err(err) => {
                        log::warn!("swatch {index} is not drawable: {err}");
                        None
                    }
                };
                let (x, y) = layout::swatch_origin(index, &grid, size, order);
                Swatch {
                    index,
                    raw: raw.clone(),
                    color,
                    x,
                    y,
                }
            })
            .collect();
        self.rendered = true;
        self.build_count += 1;
        log::debug!(
            "built {} swatches ({}x{})",
            self.swatches.len(),
            self.grid.columns,
            self.grid.rows
        );
        true
    }

    /// Close the dropdown. Returns `true` if it was open.
    pub fn close_dropdown(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    /// Open if closed, close if open. Returns `true` when a rebuild happened.
    pub fn toggle_dropdown(&mut self) -> bool {
        if self.close_dropdown() {
            false
        } else {
            self.open_dropdown()
        }
    }

    fn invalidate(&mut self) {
        self.grid = layout::compute_grid(self.palette.len(), self.palette.columns(), self.swatch_size);
        self.rendered = false;
    }

    fn store_color(&mut self, color: Option<String>, events: &mut Vec<PickerEvent>) {
        let color = color.filter(|c| !c.is_empty());
        if color == self.color {
            return;
        }
        self.color = color;
        events.push(PickerEvent::ColorChanged(self.color.clone()));
    }

    fn validate_against_palette(&mut self, events: &mut Vec<PickerEvent>) {
        let Some(current) = self.color.as_deref() else {
            return;
        };
        if self.palette.contains(current) {
            return;
        }
        let fallback = self.palette.first().map(str::to_string);
        log::debug!("{current} not in palette, resetting to {fallback:?}");
        self.store_color(fallback, events);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn colors(list: &[&str]) -> Vec<String> {
        list.iter().map(|c| c.to_string()).collect()
    }

    fn small_state() -> SwatchPickerState {
        SwatchPickerState::new(Palette::new(colors(&["#ff0000", "#00ff00", "#0000ff"]), 2), 20.0)
    }

    #[test]
    fn test_initial_grid() {
        let state = SwatchPickerState::default();
        assert_eq!(state.grid().rows, 10);
        assert_eq!(state.grid().columns, 18);
        assert_eq!(state.grid().width, 360.0);
        assert_eq!(state.color(), None);
        assert!(!state.is_rendered());
    }

    #[test]
    fn test_set_color_notifies_once() {
        let mut state = small_state();
        let events = state.set_color("#00ff00");
        assert_eq!(events, vec![PickerEvent::ColorChanged(Some("#00ff00".into()))]);
        assert!(state.set_color("#00ff00").is_empty());
        assert_eq!(state.color(), Some("#00ff00"));
    }

    #[test]
    fn test_empty_string_clears_selection() {
        let mut state = small_state();
        state.set_color("#ff0000");
        let events = state.set_color("");
        assert_eq!(events, vec![PickerEvent::ColorChanged(None)]);
        assert!(state.clear_color().is_empty());
    }

    #[test]
    fn test_palette_keeps_case_folded_match() {
        let mut state = small_state();
        state.set_color("#FFFFFF");
        let events = state.set_palette(colors(&["#000000", "#ffffff"]));
        assert!(events.is_empty());
        assert_eq!(state.color(), Some("#FFFFFF"));
    }

    #[test]
    fn test_palette_resets_missing_color() {
        let mut state = small_state();
        state.set_color("#123456");
        let events = state.set_palette(colors(&["#abcdef", "#fedcba"]));
        assert_eq!(events, vec![PickerEvent::ColorChanged(Some("#abcdef".into()))]);
        assert_eq!(state.color(), Some("#abcdef"));
    }

    #[test]
    fn test_empty_palette_clears_selection() {
        let mut state = small_state();
        state.set_color("#123456");
        let events = state.set_palette(Vec::new());
        assert_eq!(events, vec![PickerEvent::ColorChanged(None)]);
        assert_eq!(state.color(), None);
        assert_eq!(state.grid().rows, 0);
    }

    #[test]
    fn test_palette_change_without_selection_is_silent() {
        let mut state = small_state();
        assert!(state.set_palette(colors(&["#abcdef"])).is_empty());
        assert_eq!(state.color(), None);
    }

    #[test]
    fn test_select_swatch_normalizes_rgb() {
        let mut state = small_state();
        let events = state.select_swatch("rgb(0, 255, 0)");
        assert_eq!(
            events,
            vec![
                PickerEvent::ColorChanged(Some("#00ff00".into())),
                PickerEvent::Selected("#00ff00".into()),
            ]
        );
    }

    #[test]
    fn test_select_same_swatch_fires_selected_only() {
        let mut state = small_state();
        state.select_swatch("#0000ff");
        let events = state.select_swatch("#0000ff");
        assert_eq!(events, vec![PickerEvent::Selected("#0000ff".into())]);
    }

    #[test]
    fn test_open_dropdown_caches_swatches() {
        let mut state = small_state();
        assert!(state.swatches().is_empty());
        assert!(state.open_dropdown());
        assert!(!state.open_dropdown());
        assert_eq!(state.build_count(), 1);
        assert_eq!(state.swatches().len(), 3);
        assert_eq!(state.swatches()[2].x, 0.0);
        assert_eq!(state.swatches()[2].y, 20.0);
    }

    #[test]
    fn test_column_change_invalidates_cache() {
        let mut state = small_state();
        state.open_dropdown();
        state.set_column_count(3);
        assert!(!state.is_rendered());
        assert_eq!(state.grid().rows, 1);
        assert!(state.open_dropdown());
        assert_eq!(state.build_count(), 2);
        assert_eq!(state.swatches()[2].x, 40.0);
    }

    #[test]
    fn test_same_column_count_keeps_cache() {
        let mut state = small_state();
        state.open_dropdown();
        state.set_column_count(2);
        assert!(state.is_rendered());
    }

    #[test]
    fn test_palette_and_attach_invalidate_cache() {
        let mut state = small_state();
        state.open_dropdown();
        state.set_palette(colors(&["#111111"]));
        assert!(state.open_dropdown());
        state.attach();
        assert!(state.open_dropdown());
        assert_eq!(state.build_count(), 3);
    }

    #[test]
    fn test_swatch_size_recomputes_grid() {
        let mut state = small_state();
        state.set_swatch_size(30.0);
        assert_eq!(state.grid().width, 60.0);
        assert_eq!(state.grid().height, 60.0);
        state.set_swatch_size(f64::NAN);
        assert_eq!(state.swatch_size(), 20.0);
    }

    #[test]
    fn test_undrawable_swatch_kept() {
        let mut state = SwatchPickerState::new(Palette::new(colors(&["#ff0000", "tomato"]), 2), 20.0);
        state.open_dropdown();
        assert_eq!(state.swatches()[0].color, Some(SwatchColor::from_rgb(255, 0, 0)));
        assert_eq!(state.swatches()[1].color, None);
    }

    #[test]
    fn test_attach_resets_color_outside_palette() {
        let mut state = SwatchPickerState::default();
        state.set_color("#123456");
        let events = state.attach();
        assert_eq!(events, vec![PickerEvent::ColorChanged(Some("#ffebee".into()))]);
        assert_eq!(state.color(), Some("#ffebee"));
    }

    #[test]
    fn test_attach_keeps_palette_color() {
        let mut state = SwatchPickerState::default();
        state.set_color("#E91E63");
        assert!(state.attach().is_empty());
        assert_eq!(state.color(), Some("#E91E63"));
    }

    #[test]
    fn test_dropdown_open_close() {
        let mut state = small_state();
        assert!(!state.is_open());
        assert!(state.toggle_dropdown());
        assert!(state.is_open());
        assert!(!state.toggle_dropdown());
        assert!(!state.is_open());
        assert!(!state.toggle_dropdown());
        assert!(state.is_open());
        assert_eq!(state.build_count(), 1);
        assert!(state.close_dropdown());
        assert!(!state.close_dropdown());
    }

    #[test]
    fn test_select_swatch_closes_dropdown() {
        let mut state = small_state();
        state.open_dropdown();
        state.select_swatch("#ff0000");
        assert!(!state.is_open());
    }

    #[test]
    fn test_grid_order_changes_swatch_positions() {
        let mut state = small_state();
        state.open_dropdown();
        assert_eq!((state.swatches()[1].x, state.swatches()[1].y), (20.0, 0.0));
        state.set_grid_order(GridOrder::ColumnMajor);
        assert!(!state.is_rendered());
        state.open_dropdown();
        assert_eq!(state.grid_order(), GridOrder::ColumnMajor);
        assert_eq!((state.swatches()[1].x, state.swatches()[1].y), (0.0, 20.0));
        assert_eq!((state.swatches()[2].x, state.swatches()[2].y), (20.0, 0.0));
    }

    #[test]
    fn test_subscribers_receive_events() {
        let mut state = small_state();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        let id = state.subscribe(move |event| sink.borrow_mut().push(event.clone()));

        state.select_swatch("#ff0000");
        assert_eq!(seen.borrow().len(), 2);

        assert!(state.unsubscribe(id));
        state.set_color("#00ff00");
        assert_eq!(seen.borrow().len(), 2);
        assert!(!state.unsubscribe(id));
    }
}
