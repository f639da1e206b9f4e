use std::f64::consts::PI;

/// Single source of truth for the radius and its derived quantities.
///
/// Mutated only through [`CircleModel::set_radius`]; everything else is a
/// pure read. Validation happens at the input boundary, so the setter stores
/// whatever it is given.
#[derive(Debug, Default)]
pub struct CircleModel {
    radius: f64,
}

impl CircleModel {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_radius(&mut self, radius: f64) {
        self.radius = radius;
    }

    pub fn radius(&self) -> f64 {
        self.radius
    }

    pub fn perimeter(&self) -> f64 {
        2.0 * PI * self.radius
    }

    pub fn area(&self) -> f64 {
        PI * self.radius * self.radius
    }

    pub fn volume(&self) -> f64 {
        4.0 * PI * self.radius.powi(3) / 3.0
    }
}
