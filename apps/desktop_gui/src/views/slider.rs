use circle_core::{CircleModel, ModelObserver, ViewError};

/// Mirrors the raw radius into the slider's position.
pub struct SliderView {
    pub position: f64,
}

impl SliderView {
    pub fn new() -> Self {
        Self { position: 0.0 }
    }
}

impl Default for SliderView {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelObserver for SliderView {
    fn on_model_changed(&mut self, model: &CircleModel) -> Result<(), ViewError> {
        self.position = model.radius();
        Ok(())
    }
}
