//! Standalone demo: opens a window with the swatch picker.

use floem::prelude::*;
use floem::window::WindowConfig;
use floem_swatch::{swatch_picker, SwatchPickerConfig, SwatchPickerProps};

fn main() {
    env_logger::init();

    let color = RwSignal::new("#2196f3".to_string());
    let columns = RwSignal::new(18_usize);

    let props = SwatchPickerProps::new(color)
        .column_count(columns)
        .config(SwatchPickerConfig::default())
        .on_selected(|hex| log::info!("color-picker-selected: {hex}"));

    floem::Application::new()
        .window(
            move |_| {
                v_stack((
                    swatch_picker(props),
                    label(move || format!("selected: {}", color.get())),
                ))
                .style(|s| s.padding(8.0).gap(8.0).size_full())
                .on_event_stop(floem::event::EventListener::WindowClosed, |_| {
                    floem::quit_app()
                })
            },
            Some(
                WindowConfig::default()
                    .size((400.0, 280.0))
                    .title("floem-swatch"),
            ),
        )
        .run();
}
