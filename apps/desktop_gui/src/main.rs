//! Circle demo desktop GUI: a radius entry, a slider, derived perimeter /
//! area / volume readouts, and a rendered outline, all kept in sync through
//! the observer wiring in `circle_core`.

use std::{cell::RefCell, rc::Rc};

use circle_core::{CircleModel, Controller};

mod ui;
mod views;

use ui::CircleApp;
use views::{ImageView, SliderView, TextView};

fn main() -> eframe::Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();

    let mut controller = Controller::new(CircleModel::new());

    let image_view = Rc::new(RefCell::new(ImageView::new()));
    let text_view = Rc::new(RefCell::new(TextView::new()));
    let slider_view = Rc::new(RefCell::new(SliderView::new()));

    // Notification order: image, then text, then slider.
    controller.add_observer(image_view.clone());
    controller.add_observer(text_view.clone());
    controller.add_observer(slider_view.clone());

    tracing::info!("starting circle demo window");

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Circle Demo")
            .with_inner_size([600.0, 400.0])
            .with_min_inner_size([520.0, 360.0]),
        ..Default::default()
    };
    eframe::run_native(
        "Circle Demo",
        options,
        Box::new(move |_cc| {
            Ok(Box::new(CircleApp::new(
                controller,
                image_view,
                text_view,
                slider_view,
            )))
        }),
    )
}
