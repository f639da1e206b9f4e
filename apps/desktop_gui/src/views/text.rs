use circle_core::{CircleModel, ModelObserver, ViewError};

/// Backing text for the editable radius entry and the three read-only
/// readouts. The shell draws its entry widgets straight from these buffers.
pub struct TextView {
    pub radius_input: String,
    pub perimeter: String,
    pub area: String,
    pub volume: String,
}

impl TextView {
    /// Readouts start as captions until the first model notification.
    pub fn new() -> Self {
        Self {
            radius_input: String::new(),
            perimeter: "Perimeter".to_string(),
            area: "Area".to_string(),
            volume: "Volume".to_string(),
        }
    }
}

impl Default for TextView {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelObserver for TextView {
    fn on_model_changed(&mut self, model: &CircleModel) -> Result<(), ViewError> {
        self.radius_input = format!("{:.2}", model.radius());
        self.perimeter = format!("{:.2}", model.perimeter());
        self.area = format!("{:.2}", model.area());
        self.volume = format!("{:.2}", model.volume());
        Ok(())
    }
}
