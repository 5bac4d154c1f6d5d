//! The components module contains all shared components for our app.

mod app;
mod engine;
mod icons;
mod player;
mod side_panel;

pub use app::*;
pub use engine::*;
pub use icons::*;
pub use player::*;
pub use side_panel::*;
