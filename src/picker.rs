//! Trigger button plus dropdown, bound to host signals.

use std::cell::RefCell;
use std::rc::Rc;

use floem::event::{Event, EventListener, EventPropagation};
use floem::prelude::*;
use floem::reactive::{create_effect, RwSignal, SignalGet, SignalUpdate};
use floem::{View, ViewId};

use crate::color::SwatchColor;
use crate::config::{HorizontalAlign, SwatchPickerConfig, VerticalAlign};
use crate::constants;
use crate::palette::Palette;
use crate::state::{PickerEvent, SwatchPickerState};
use crate::swatch_grid::{swatch_grid, to_floem_color, GridUpdate};

type SelectedCallback = Rc<dyn Fn(&str)>;

/// Host bindings for [`swatch_picker`](crate::swatch_picker).
///
/// `color` is two-way: the picker writes the selected `#rrggbb` into it and
/// follows external writes. An empty string means no selection.
pub struct SwatchPickerProps {
    color: RwSignal<String>,
    palette: Option<RwSignal<Vec<String>>>,
    column_count: Option<RwSignal<usize>>,
    on_selected: Option<SelectedCallback>,
    config: SwatchPickerConfig,
}

impl SwatchPickerProps {
    pub fn new(color: RwSignal<String>) -> Self {
        Self {
            color,
            palette: None,
            column_count: None,
            on_selected: None,
            config: SwatchPickerConfig::default(),
        }
    }

    /// Drive the palette from a signal instead of the config value.
    pub fn palette(mut self, palette: RwSignal<Vec<String>>) -> Self {
        self.palette = Some(palette);
        self
    }

    /// Drive the column count from a signal instead of the config value.
    pub fn column_count(mut self, columns: RwSignal<usize>) -> Self {
        self.column_count = Some(columns);
        self
    }

    /// Called with the picked color every time the user taps a swatch.
    pub fn on_selected(mut self, callback: impl Fn(&str) + 'static) -> Self {
        self.on_selected = Some(Rc::new(callback));
        self
    }

    pub fn config(mut self, config: SwatchPickerConfig) -> Self {
        self.config = config;
        self
    }
}

/// Forward state notifications to the host. Must run with the state unborrowed:
/// writing `color` re-enters the color effect.
fn dispatch(events: Vec<PickerEvent>, color: RwSignal<String>, on_selected: Option<&SelectedCallback>) {
    for event in events {
        match event {
            PickerEvent::ColorChanged(value) => {
                let value = value.unwrap_or_default();
                if color.get_untracked() != value {
                    color.set(value);
                }
            }
            PickerEvent::Selected(hex) => {
                if let Some(callback) = on_selected {
                    callback(&hex);
                }
            }
        }
    }
}

fn grid_update(state: &SwatchPickerState) -> GridUpdate {
    GridUpdate {
        swatches: state.swatches().to_vec(),
        swatch_size: state.swatch_size(),
        grid: state.grid(),
        order: state.grid_order(),
    }
}

/// Open or close the dropdown, pushing freshly built swatches to the grid
/// when the cache was stale.
fn toggle_dropdown(state: &Rc<RefCell<SwatchPickerState>>, open: RwSignal<bool>, grid_id: ViewId) {
    let (update, is_open) = {
        let mut st = state.borrow_mut();
        let rebuilt = st.toggle_dropdown();
        (rebuilt.then(|| grid_update(&st)), st.is_open())
    };
    if let Some(update) = update {
        grid_id.update_state(update);
    }
    open.set(is_open);
}

/// Rebuild a visible grid after the palette or column count changed.
fn refresh_if_open(state: &Rc<RefCell<SwatchPickerState>>, grid_id: ViewId) {
    let update = {
        let mut st = state.borrow_mut();
        if !st.is_open() || !st.open_dropdown() {
            return;
        }
        grid_update(&st)
    };
    grid_id.update_state(update);
}

fn close_dropdown(state: &Rc<RefCell<SwatchPickerState>>, open: RwSignal<bool>) {
    if state.borrow_mut().close_dropdown() {
        open.set(false);
    }
}

fn icon_tint(color: &str) -> Color {
    match SwatchColor::parse(color) {
        Ok(c) => to_floem_color(c),
        Err(_) => {
            let (r, g, b) = constants::IDLE_ICON;
            Color::rgb8(r, g, b)
        }
    }
}

pub(crate) fn picker(props: SwatchPickerProps) -> impl IntoView {
    let SwatchPickerProps {
        color,
        palette,
        column_count,
        on_selected,
        config,
    } = props;

    let colors = palette.map_or_else(|| config.palette.clone(), |p| p.get_untracked());
    let columns = column_count.map_or(config.column_count, |c| c.get_untracked());
    let mut initial = SwatchPickerState::new(Palette::new(colors, columns), config.swatch_size);
    initial.set_grid_order(config.grid_order);
    let state = Rc::new(RefCell::new(initial));
    let open = RwSignal::new(false);

    // External color -> state
    let color_state = state.clone();
    create_effect(move |_| {
        let value = color.get();
        let events = color_state.borrow_mut().set_color(value);
        dispatch(events, color, None);
    });

    // The initial color is checked against the palette whether or not a
    // palette signal is bound.
    let events = state.borrow_mut().attach();
    dispatch(events, color, None);

    let dims = RwSignal::new(state.borrow().grid());
    let select_state = state.clone();
    let grid = swatch_grid(dims, move |raw| {
        let events = select_state.borrow_mut().select_swatch(raw);
        open.set(false);
        dispatch(events, color, on_selected.as_ref());
    });
    let grid_id = grid.id();

    // Palette -> state
    if let Some(palette) = palette {
        let palette_state = state.clone();
        create_effect(move |_| {
            let colors = palette.get();
            let (events, grid) = {
                let mut st = palette_state.borrow_mut();
                let events = st.set_palette(colors);
                (events, st.grid())
            };
            dims.set(grid);
            refresh_if_open(&palette_state, grid_id);
            dispatch(events, color, None);
        });
    }

    // Column count -> state
    if let Some(column_count) = column_count {
        let column_state = state.clone();
        create_effect(move |_| {
            let columns = column_count.get();
            let grid = {
                let mut st = column_state.borrow_mut();
                st.set_column_count(columns);
                st.grid()
            };
            dims.set(grid);
            refresh_if_open(&column_state, grid_id);
        });
    }

    let no_ink = config.no_ink;
    let pressed = RwSignal::new(false);
    let glyph = config.icon.clone();
    let toggle_state = state.clone();
    let trigger = container(label(move || glyph.clone()).style(move |s| {
        s.font_size(constants::ICON_FONT)
            .font_family("lucide".to_string())
            .color(icon_tint(&color.get()))
    }))
    .style(move |s| {
        s.size(constants::TRIGGER_SIZE, constants::TRIGGER_SIZE)
            .items_center()
            .justify_center()
            .border_radius(constants::RADIUS)
            .cursor(floem::style::CursorStyle::Pointer)
            .hover(|s| s.background(Color::rgb8(235, 235, 235)))
            .apply_if(pressed.get() && !no_ink, |s| {
                s.background(Color::rgb8(215, 215, 215))
            })
    })
    .on_event_stop(EventListener::PointerDown, move |_| {
        pressed.set(true);
    })
    .on_event_stop(EventListener::PointerUp, move |_| {
        pressed.set(false);
        toggle_dropdown(&toggle_state, open, grid_id);
    });

    let horizontal = config.horizontal_align;
    let vertical = config.vertical_align;
    let dropdown = container(grid).style(move |s| {
        let s = s
            .absolute()
            .z_index(constants::DROPDOWN_Z)
            .background(Color::WHITE)
            .border(1.0)
            .border_color(Color::rgb8(200, 200, 200));
        let s = match horizontal {
            HorizontalAlign::Left => s.inset_left(0.0),
            HorizontalAlign::Right => s.inset_right(0.0),
        };
        let s = match vertical {
            VerticalAlign::Top => s.inset_top(0.0),
            VerticalAlign::Bottom => s.inset_bottom(0.0),
        };
        s.apply_if(!open.get(), |s| s.hide())
    });

    // The root takes focus while the dropdown is open, so a click anywhere
    // else in the window (focus lost) or Escape dismisses it.
    let escape_state = state.clone();
    let blur_state = state;
    let root = h_stack((trigger, dropdown))
        .keyboard_navigable()
        .on_event(EventListener::KeyDown, move |e| {
            if let Event::KeyDown(ke) = e {
                if ke.key.logical_key
                    == floem::keyboard::Key::Named(floem::keyboard::NamedKey::Escape)
                    && open.get_untracked()
                {
                    close_dropdown(&escape_state, open);
                    return EventPropagation::Stop;
                }
            }
            EventPropagation::Continue
        })
        .on_event(EventListener::FocusLost, move |_| {
            close_dropdown(&blur_state, open);
            EventPropagation::Continue
        });
    let root_id = root.id();
    create_effect(move |_| {
        if open.get() {
            root_id.request_focus();
        }
    });
    root
}
