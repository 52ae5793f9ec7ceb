//! Playback state for the bottom player bar.

pub mod session;

pub use session::{DisplaySnapshot, EngineCommand, PlaybackSession, PlaybackState};
