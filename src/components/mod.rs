//! Shared components: app shell, player chrome, and the views.

mod app;
mod audio_manager;
mod icons;
mod navbar;
mod playback_controller;
mod player;
pub mod views;

pub use app::*;
pub use audio_manager::*;
pub use icons::*;
pub use navbar::*;
pub use playback_controller::*;
pub use player::*;
