//! The components module contains the view layer that drives the library session.

mod app;
mod player;
pub mod views;

pub use app::*;
pub use player::*;
