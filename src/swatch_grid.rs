//! Swatch grid painted as a single view.
//!
//! Cells are filled rectangles rather than child views, so a 180-color
//! palette costs one view. The hovered cell is drawn last and scaled up so it
//! overlaps its neighbours.

use floem::kurbo::{Point, Rect, Size};
use floem::peniko::Color;
use floem::reactive::{RwSignal, SignalGet};
use floem::views::Decorators;
use floem::{
    context::{EventCx, PaintCx, UpdateCx},
    event::{Event, EventPropagation},
    View, ViewId,
};
use floem_renderer::Renderer;

use crate::color::SwatchColor;
use crate::constants;
use crate::layout::{self, GridDimensions, GridOrder};
use crate::state::Swatch;

/// Freshly built swatches, pushed when the dropdown opens on a stale cache.
pub(crate) struct GridUpdate {
    pub swatches: Vec<Swatch>,
    pub swatch_size: f64,
    pub grid: GridDimensions,
    pub order: GridOrder,
}

pub(crate) struct SwatchGrid {
    id: ViewId,
    swatches: Vec<Swatch>,
    swatch_size: f64,
    grid: GridDimensions,
    order: GridOrder,
    hovered: Option<usize>,
    on_select: Box<dyn Fn(String)>,
}

/// Creates the grid. It starts empty; swatches arrive through
/// [`GridUpdate`] the first time the dropdown opens.
pub(crate) fn swatch_grid(
    dims: RwSignal<GridDimensions>,
    on_select: impl Fn(String) + 'static,
) -> SwatchGrid {
    SwatchGrid {
        id: ViewId::new(),
        swatches: Vec::new(),
        swatch_size: constants::SWATCH_SIZE,
        grid: dims.get_untracked(),
        order: GridOrder::default(),
        hovered: None,
        on_select: Box::new(on_select),
    }
    .style(move |s| {
        let d = dims.get();
        s.width(d.width as f32)
            .height(d.height as f32)
            .cursor(floem::style::CursorStyle::Pointer)
    })
}

pub(crate) fn to_floem_color(color: SwatchColor) -> Color {
    let (r, g, b) = color.to_rgb();
    Color::rgb8(r, g, b)
}

impl SwatchGrid {
    fn index_at(&self, pos: Point) -> Option<usize> {
        layout::swatch_at(
            pos.x,
            pos.y,
            self.swatches.len(),
            &self.grid,
            self.swatch_size,
            self.order,
        )
    }

    fn cell_rect(&self, swatch: &Swatch, scale: f64) -> Rect {
        let size = self.swatch_size;
        let center = Point::new(swatch.x + size / 2.0, swatch.y + size / 2.0);
        Rect::from_center_size(center, Size::new(size * scale, size * scale))
    }

    fn set_hovered(&mut self, hovered: Option<usize>) {
        if self.hovered != hovered {
            self.hovered = hovered;
            self.id.request_paint();
        }
    }
}

impl View for SwatchGrid {
    fn id(&self) -> ViewId {
        self.id
    }

    fn update(&mut self, _cx: &mut UpdateCx, state: Box<dyn std::any::Any>) {
        if let Ok(update) = state.downcast::<GridUpdate>() {
            let GridUpdate {
                swatches,
                swatch_size,
                grid,
                order,
            } = *update;
            self.swatches = swatches;
            self.swatch_size = swatch_size;
            self.grid = grid;
            self.order = order;
            self.hovered = None;
            self.id.request_layout();
        }
    }

    fn event_before_children(&mut self, cx: &mut EventCx, event: &Event) -> EventPropagation {
        match event {
            // Picking on press: the same press may move focus and close the
            // dropdown before a release would arrive.
            Event::PointerDown(e) => {
                cx.update_active(self.id());
                if let Some(swatch) = self.index_at(e.pos).and_then(|i| self.swatches.get(i)) {
                    (self.on_select)(swatch.raw.clone());
                }
                EventPropagation::Stop
            }
            Event::PointerMove(e) => {
                let hovered = self.index_at(e.pos);
                self.set_hovered(hovered);
                EventPropagation::Continue
            }
            Event::PointerLeave => {
                self.set_hovered(None);
                EventPropagation::Continue
            }
            _ => EventPropagation::Continue,
        }
    }

    fn paint(&mut self, cx: &mut PaintCx) {
        for swatch in &self.swatches {
            if Some(swatch.index) == self.hovered {
                continue;
            }
            if let Some(color) = swatch.color {
                cx.fill(&self.cell_rect(swatch, 1.0), to_floem_color(color), 0.0);
            }
        }

        let hovered = self.hovered.and_then(|i| self.swatches.get(i));
        if let Some(swatch) = hovered {
            if let Some(color) = swatch.color {
                let rect = self.cell_rect(swatch, constants::HOVER_SCALE);
                cx.fill(&rect, to_floem_color(color), 0.0);
            }
        }
    }
}
