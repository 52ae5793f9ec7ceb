//! REST client for the Dreamster backend.

pub mod client;
pub mod models;

pub use client::{ApiConfig, DreamsterClient};
pub use models::*;
