//! UI layer: the window shell wiring widget events into the controller.

pub mod app;

pub use app::CircleApp;
