//! Bridge between the UI and the playback session.
//!
//! Views and the player bar talk to this controller; it runs the state
//! machine and queues the resulting engine instructions for the audio
//! controller to apply. Nothing here touches the DOM.

use dioxus::prelude::*;

use crate::api::models::Track;
use crate::player::{DisplaySnapshot, EngineCommand, PlaybackSession};

#[derive(Clone, Copy)]
pub struct PlayerController {
    session: Signal<PlaybackSession>,
    command_queue: Signal<Vec<EngineCommand>>,
    now_playing: Signal<Option<Track>>,
}

impl PlayerController {
    pub fn new(
        session: Signal<PlaybackSession>,
        command_queue: Signal<Vec<EngineCommand>>,
        now_playing: Signal<Option<Track>>,
    ) -> PlayerController {
        PlayerController {
            session,
            command_queue,
            now_playing,
        }
    }

    fn push_commands(&mut self, commands: Vec<EngineCommand>) {
        if !commands.is_empty() {
            self.command_queue.write().extend(commands);
        }
    }

    /// Drain pending engine instructions. Reading subscribes, so the
    /// audio controller's apply-effect re-runs whenever new ones arrive.
    ///
    /// Draining marks the session's latest instructions as applied: the
    /// caller executes the whole batch synchronously before any engine
    /// event handler can run, so events relayed afterwards rightly carry
    /// the new tag while events already in flight stay stale.
    pub fn take_commands(&mut self) -> Vec<EngineCommand> {
        if self.command_queue.read().is_empty() {
            return Vec::new();
        }
        let commands = std::mem::take(&mut *self.command_queue.write());
        self.session.write().mark_applied();
        commands
    }

    pub fn now_playing(&self) -> Option<Track> {
        self.now_playing.read().clone()
    }

    pub fn display(&self) -> DisplaySnapshot {
        self.session.read().display()
    }

    pub fn is_muted(&self) -> bool {
        self.session.read().is_muted()
    }

    pub fn is_current_track(&self, track_id: &str) -> bool {
        self.now_playing
            .read()
            .as_ref()
            .map(|t| t.id == track_id)
            .unwrap_or(false)
    }

    /// Play a track from a listing. Tapping the track that is already
    /// loaded toggles it instead of restarting.
    pub fn play_track(&mut self, track: &Track) {
        let Some(stream_url) = track.stream_url.clone() else {
            return;
        };
        if self.session.read().source() == Some(stream_url.as_str()) {
            self.toggle_play();
            return;
        }
        self.now_playing.set(Some(track.clone()));
        let mut commands = self.session.write().load(stream_url);
        commands.extend(self.session.write().toggle_play());
        self.push_commands(commands);
    }

    pub fn toggle_play(&mut self) {
        let commands = self.session.write().toggle_play();
        self.push_commands(commands);
    }

    pub fn seek(&mut self, target_secs: f64) {
        let commands = self.session.write().seek(target_secs);
        self.push_commands(commands);
    }

    /// Seek from the progress bar, where the input reports 0..=100.
    pub fn seek_percent(&mut self, percent: f64) {
        let duration = self.session.read().duration_secs();
        if duration > 0.0 {
            self.seek(duration * (percent / 100.0).clamp(0.0, 1.0));
        }
    }

    pub fn set_volume(&mut self, value: f64) {
        let commands = self.session.write().set_volume(value);
        self.push_commands(commands);
    }

    pub fn toggle_mute(&mut self) {
        let commands = self.session.write().toggle_mute();
        self.push_commands(commands);
    }

    /// Tag sampled by the audio controller when it relays an engine
    /// event. This is the last *applied* instruction, not the last
    /// issued one, so a report firing between an intent and its
    /// execution is still recognized as stale.
    pub fn applied_seq(&self) -> u64 {
        self.session.peek().applied_seq()
    }

    // Engine event relays.

    pub fn on_duration_change(&mut self, duration_secs: f64) {
        let commands = self.session.write().on_duration_change(duration_secs);
        self.push_commands(commands);
    }

    pub fn on_time_update(&mut self, seq: u64, engine_time_secs: f64) {
        self.session.write().on_time_update(seq, engine_time_secs);
    }

    pub fn on_play_rejected(&mut self) {
        self.session.write().on_play_rejected();
    }

    pub fn on_ended(&mut self) {
        self.session.write().on_ended();
    }

    pub fn on_load_progress(&mut self, buffered_percent: f64) {
        self.session.write().on_load_progress(buffered_percent);
    }
}
