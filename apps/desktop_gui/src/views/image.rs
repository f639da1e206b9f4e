use circle_core::{render, CircleModel, ModelObserver, ViewError};

/// Holds the rasterized circle and the texture the shell displays it with.
///
/// Notifications arrive without an egui `Context`, so the view re-rasterizes
/// into a `ColorImage` immediately and defers the GPU upload to the next
/// frame via a dirty flag.
pub struct ImageView {
    pub color_image: egui::ColorImage,
    texture: Option<egui::TextureHandle>,
    dirty: bool,
}

impl ImageView {
    /// Starts with the neutral gray placeholder shown before the first
    /// notification.
    pub fn new() -> Self {
        let size = render::CANVAS_SIZE as usize;
        let placeholder = vec![0xaa; size * size * 4];
        Self {
            color_image: egui::ColorImage::from_rgba_unmultiplied([size, size], &placeholder),
            texture: None,
            dirty: false,
        }
    }

    /// Uploads the pending raster if needed and returns the display texture.
    pub fn texture(&mut self, ctx: &egui::Context) -> egui::TextureHandle {
        if self.dirty {
            self.texture = None;
            self.dirty = false;
        }
        self.texture
            .get_or_insert_with(|| {
                ctx.load_texture(
                    "circle-outline",
                    self.color_image.clone(),
                    egui::TextureOptions::NEAREST,
                )
            })
            .clone()
    }
}

impl Default for ImageView {
    fn default() -> Self {
        Self::new()
    }
}

impl ModelObserver for ImageView {
    fn on_model_changed(&mut self, model: &CircleModel) -> Result<(), ViewError> {
        let raster = render::circle_outline(model.radius());
        let size = [raster.width() as usize, raster.height() as usize];
        self.color_image = egui::ColorImage::from_rgba_unmultiplied(size, raster.as_raw());
        self.dirty = true;
        Ok(())
    }
}
