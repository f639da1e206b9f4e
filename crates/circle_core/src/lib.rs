//! GUI-free core of the circle demo: the radius model, the
//! controller/observer wiring, and the raster renderer for the outline.

pub mod controller;
pub mod model;
pub mod render;

pub use controller::{Controller, ModelObserver, ViewError};
pub use model::CircleModel;
