//! Widget tree and event wiring for the circle demo window.

use std::{cell::RefCell, rc::Rc};

use circle_core::{render, Controller};

use crate::views::{ImageView, SliderView, TextView};

const ENTRY_WIDTH: f32 = 140.0;
const SLIDER_RANGE: std::ops::RangeInclusive<f64> = 0.0..=100.0;

/// Parses the radius entry. `None` means the input is malformed and the
/// previous radius is retained; no feedback is shown.
fn parse_radius(input: &str) -> Option<f64> {
    input.trim().parse::<f64>().ok().filter(|r| r.is_finite())
}

/// The window shell. Owns the controller (which owns the model) and keeps
/// handles to the concrete views it draws from; the controller holds the
/// same views as its observers.
pub struct CircleApp {
    controller: Controller,
    image_view: Rc<RefCell<ImageView>>,
    text_view: Rc<RefCell<TextView>>,
    slider_view: Rc<RefCell<SliderView>>,
}

impl CircleApp {
    pub fn new(
        controller: Controller,
        image_view: Rc<RefCell<ImageView>>,
        text_view: Rc<RefCell<TextView>>,
        slider_view: Rc<RefCell<SliderView>>,
    ) -> Self {
        Self {
            controller,
            image_view,
            text_view,
            slider_view,
        }
    }

    fn readout_row(ui: &mut egui::Ui, label: &str, value: &str) {
        ui.label(label);
        let mut text = value.to_string();
        ui.add_enabled(
            false,
            egui::TextEdit::singleline(&mut text).desired_width(ENTRY_WIDTH),
        );
        ui.end_row();
    }

    fn show_radius_entry(&mut self, ui: &mut egui::Ui) {
        ui.label("Radius");
        // The borrow must end before set_radius notifies the text view.
        let response = {
            let mut text_view = self.text_view.borrow_mut();
            ui.add(
                egui::TextEdit::singleline(&mut text_view.radius_input)
                    .desired_width(ENTRY_WIDTH),
            )
        };
        ui.end_row();

        if response.changed() {
            let input = self.text_view.borrow().radius_input.clone();
            match parse_radius(&input) {
                Some(radius) => self.controller.set_radius(radius),
                // Malformed input: keep the previous radius, no feedback.
                None => {}
            }
        }
    }

    fn show_slider(&mut self, ui: &mut egui::Ui) {
        let mut position = self.slider_view.borrow().position;
        let response = ui.add(
            egui::Slider::new(&mut position, SLIDER_RANGE)
                .step_by(1.0)
                .show_value(false),
        );
        if response.changed() {
            self.controller.set_radius(position);
        }
    }

    fn show_image(&mut self, ui: &mut egui::Ui) {
        let texture = self.image_view.borrow_mut().texture(ui.ctx());
        let side = render::CANVAS_SIZE as f32;
        ui.add(egui::Image::new(&texture).fit_to_exact_size(egui::vec2(side, side)));
    }
}

impl eframe::App for CircleApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            ui.horizontal_top(|ui| {
                ui.vertical(|ui| {
                    egui::Grid::new("circle-readouts")
                        .num_columns(2)
                        .spacing([8.0, 6.0])
                        .show(ui, |ui| {
                            self.show_radius_entry(ui);
                            let (perimeter, area, volume) = {
                                let text_view = self.text_view.borrow();
                                (
                                    text_view.perimeter.clone(),
                                    text_view.area.clone(),
                                    text_view.volume.clone(),
                                )
                            };
                            Self::readout_row(ui, "Perimeter", &perimeter);
                            Self::readout_row(ui, "Area", &area);
                            Self::readout_row(ui, "Volume", &volume);
                        });
                    ui.add_space(6.0);
                    self.show_slider(ui);
                });
                ui.add_space(8.0);
                self.show_image(ui);
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::parse_radius;

    #[test]
    fn accepts_plain_and_fractional_numbers() {
        assert_eq!(parse_radius("42"), Some(42.0));
        assert_eq!(parse_radius("3.5"), Some(3.5));
        assert_eq!(parse_radius(" 10.25 "), Some(10.25));
    }

    #[test]
    fn rejects_malformed_input() {
        assert_eq!(parse_radius("abc"), None);
        assert_eq!(parse_radius(""), None);
        assert_eq!(parse_radius("1.5.2"), None);
        assert_eq!(parse_radius("12px"), None);
    }

    #[test]
    fn rejects_non_finite_input() {
        assert_eq!(parse_radius("inf"), None);
        assert_eq!(parse_radius("NaN"), None);
    }

    #[test]
    fn negative_values_parse_and_are_stored_verbatim() {
        assert_eq!(parse_radius("-5"), Some(-5.0));
    }
}
