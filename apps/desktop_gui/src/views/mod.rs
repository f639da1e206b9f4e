//! The three model observers: text readouts, slider position, and the
//! rendered circle image.

pub mod image;
pub mod slider;
pub mod text;

pub use image::ImageView;
pub use slider::SliderView;
pub use text::TextView;
