//! Playback state machine for one media session.
//!
//! The machine is pure: user intents and engine events mutate it and
//! return the instructions to forward to the media engine. The audio
//! controller component owns the actual `HtmlAudioElement` and stays a
//! thin relay, which keeps every transition testable off-browser.

const DEFAULT_VOLUME: f64 = 0.8;

/// Transport state. `Loading` means a source is set but the engine has
/// not reported a duration yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PlaybackState {
    #[default]
    Idle,
    Loading,
    Ready,
    Playing,
    Ended,
}

/// Instruction for the media engine, produced by session operations.
#[derive(Debug, Clone, PartialEq)]
pub enum EngineCommand {
    Load(String),
    Play,
    Pause,
    SetCurrentTime(f64),
    SetVolume(f64),
}

/// Last non-zero playback metrics, kept so the UI never flashes back to
/// `0:00 / 0%` on a transient zero reading from the engine.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
struct LastKnownGood {
    duration_secs: f64,
    current_time_secs: f64,
    progress_percent: f64,
}

/// What the player bar renders. Transient zeros are already substituted;
/// this snapshot must never feed back into seek targets or engine calls.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DisplaySnapshot {
    pub duration_secs: f64,
    pub current_time_secs: f64,
    pub progress_percent: f64,
    pub buffered_percent: f64,
    pub is_playing: bool,
    pub shows_muted: bool,
    pub volume: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PlaybackSession {
    state: PlaybackState,
    source: Option<String>,
    duration_secs: f64,
    current_time_secs: f64,
    volume: f64,
    muted: bool,
    pre_mute_volume: f64,
    buffered_percent: f64,
    last_known_good: LastKnownGood,
    /// Monotonic tag bumped on every engine instruction that moves the
    /// playhead. Engine events carrying an older tag are stale (e.g. a
    /// timeupdate queued before a seek) and are dropped.
    instruction_seq: u64,
    /// Tag of the newest instruction the engine has actually executed.
    /// Events are relayed under this tag, so a report that fires between
    /// a seek intent and its application still reads as stale.
    applied_seq: u64,
    /// Seek requested before the duration was known; re-clamped once the
    /// engine reports metadata.
    pending_seek_secs: Option<f64>,
}

impl Default for PlaybackSession {
    fn default() -> Self {
        Self::new()
    }
}

impl PlaybackSession {
    pub fn new() -> PlaybackSession {
        PlaybackSession {
            state: PlaybackState::Idle,
            source: None,
            duration_secs: 0.0,
            current_time_secs: 0.0,
            volume: DEFAULT_VOLUME,
            muted: false,
            pre_mute_volume: DEFAULT_VOLUME,
            buffered_percent: 0.0,
            last_known_good: LastKnownGood::default(),
            instruction_seq: 0,
            applied_seq: 0,
            pending_seek_secs: None,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_playing(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    pub fn has_source(&self) -> bool {
        self.source.is_some()
    }

    pub fn source(&self) -> Option<&str> {
        self.source.as_deref()
    }

    pub fn duration_secs(&self) -> f64 {
        self.duration_secs
    }

    pub fn current_time_secs(&self) -> f64 {
        self.current_time_secs
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Tag of the latest issued instruction.
    pub fn current_seq(&self) -> u64 {
        self.instruction_seq
    }

    /// Tag the controller samples when relaying an engine event. Lags
    /// `current_seq` while instructions sit in the queue unexecuted.
    pub fn applied_seq(&self) -> u64 {
        self.applied_seq
    }

    /// The engine has executed every instruction issued so far. Called
    /// by the audio controller after it drains the command queue into
    /// the element; from here on, engine reports reflect those
    /// instructions and carry the new tag.
    pub fn mark_applied(&mut self) {
        self.applied_seq = self.instruction_seq;
    }

    fn progress_percent(&self) -> f64 {
        if self.duration_secs > 0.0 {
            (self.current_time_secs / self.duration_secs * 100.0).clamp(0.0, 100.0)
        } else {
            0.0
        }
    }

    fn engine_volume(&self) -> f64 {
        if self.muted {
            0.0
        } else {
            self.volume
        }
    }

    /// Record a trusted playhead value (engine-reported or user intent).
    fn remember_good(&mut self) {
        if self.duration_secs > 0.0 {
            self.last_known_good.duration_secs = self.duration_secs;
        }
        self.last_known_good.current_time_secs = self.current_time_secs;
        self.last_known_good.progress_percent = self.progress_percent();
    }

    /// Point the session at a new source. Volume survives the swap,
    /// everything else resets.
    pub fn load(&mut self, url: impl Into<String>) -> Vec<EngineCommand> {
        let url = url.into();
        self.source = Some(url.clone());
        self.state = PlaybackState::Loading;
        self.duration_secs = 0.0;
        self.current_time_secs = 0.0;
        self.buffered_percent = 0.0;
        self.last_known_good = LastKnownGood::default();
        self.pending_seek_secs = None;
        self.instruction_seq += 1;
        vec![
            EngineCommand::Load(url),
            EngineCommand::SetVolume(self.engine_volume()),
        ]
    }

    /// Play/pause intent. A no-op without a source.
    pub fn toggle_play(&mut self) -> Vec<EngineCommand> {
        match self.state {
            PlaybackState::Idle => Vec::new(),
            PlaybackState::Playing => {
                self.state = PlaybackState::Ready;
                vec![EngineCommand::Pause]
            }
            PlaybackState::Loading | PlaybackState::Ready => {
                self.state = PlaybackState::Playing;
                vec![EngineCommand::Play]
            }
            PlaybackState::Ended => {
                // Replay from the top.
                self.current_time_secs = 0.0;
                self.instruction_seq += 1;
                self.remember_good();
                self.state = PlaybackState::Playing;
                vec![EngineCommand::SetCurrentTime(0.0), EngineCommand::Play]
            }
        }
    }

    /// Jump the playhead. Optimistically updates the visible time before
    /// the engine confirms, so the UI tracks the thumb while dragging.
    pub fn seek(&mut self, target_secs: f64) -> Vec<EngineCommand> {
        if self.state == PlaybackState::Idle {
            return Vec::new();
        }
        let target = if self.duration_secs > 0.0 {
            target_secs.clamp(0.0, self.duration_secs)
        } else {
            // Duration unknown: keep the raw target and re-clamp when
            // metadata arrives.
            let raw = target_secs.max(0.0);
            self.pending_seek_secs = Some(raw);
            raw
        };
        self.current_time_secs = target;
        self.instruction_seq += 1;
        self.remember_good();
        if self.state == PlaybackState::Ended {
            self.state = PlaybackState::Ready;
        }
        vec![EngineCommand::SetCurrentTime(target)]
    }

    /// Volume slider intent. Zero is displayed as muted but is distinct
    /// from the mute toggle; moving the slider always unmutes.
    pub fn set_volume(&mut self, value: f64) -> Vec<EngineCommand> {
        self.volume = if value.is_finite() {
            value.clamp(0.0, 1.0)
        } else {
            DEFAULT_VOLUME
        };
        self.muted = false;
        vec![EngineCommand::SetVolume(self.volume)]
    }

    /// Explicit mute toggle; remembers the pre-mute volume and restores
    /// it on unmute.
    pub fn toggle_mute(&mut self) -> Vec<EngineCommand> {
        if self.muted {
            self.muted = false;
            self.volume = self.pre_mute_volume;
        } else {
            self.pre_mute_volume = self.volume;
            self.muted = true;
        }
        vec![EngineCommand::SetVolume(self.engine_volume())]
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    /// Engine reported metadata. Resolves any seek issued while the
    /// duration was unknown; returns the corrective instruction when the
    /// raw target needed clamping.
    pub fn on_duration_change(&mut self, duration_secs: f64) -> Vec<EngineCommand> {
        if !duration_secs.is_finite() || duration_secs <= 0.0 {
            return Vec::new();
        }
        self.duration_secs = duration_secs;
        if self.state == PlaybackState::Loading {
            self.state = PlaybackState::Ready;
        }

        let mut commands = Vec::new();
        if let Some(raw) = self.pending_seek_secs.take() {
            let clamped = raw.clamp(0.0, duration_secs);
            self.current_time_secs = clamped;
            if clamped != raw {
                self.instruction_seq += 1;
                commands.push(EngineCommand::SetCurrentTime(clamped));
            }
        } else {
            self.current_time_secs = self.current_time_secs.clamp(0.0, duration_secs);
        }
        self.remember_good();
        commands
    }

    /// Engine playhead report. `seq` is the instruction tag sampled when
    /// the event was relayed; anything older than the latest instruction
    /// is a stale pre-seek reading and is silently dropped.
    pub fn on_time_update(&mut self, seq: u64, engine_time_secs: f64) {
        if seq < self.instruction_seq {
            return;
        }
        if !engine_time_secs.is_finite() || engine_time_secs < 0.0 {
            return;
        }
        self.current_time_secs = if self.duration_secs > 0.0 {
            engine_time_secs.min(self.duration_secs)
        } else {
            engine_time_secs
        };
        if engine_time_secs > 0.0 {
            self.remember_good();
        }
    }

    /// The engine refused the play command (autoplay policy, detached
    /// element). Rolls the optimistic `Playing` back so the controls
    /// match the paused engine; never stays playing without the engine
    /// confirming it.
    pub fn on_play_rejected(&mut self) {
        if self.state == PlaybackState::Playing {
            self.state = PlaybackState::Ready;
        }
    }

    /// Track ran out. Parks in `Ended`; the next intent re-arms playback.
    pub fn on_ended(&mut self) {
        self.current_time_secs = 0.0;
        self.state = PlaybackState::Ended;
        // End-of-track is a real reset, not a glitch: the display should
        // read 0:00 again.
        self.last_known_good.current_time_secs = 0.0;
        self.last_known_good.progress_percent = 0.0;
    }

    /// Buffering report; independent of transport state.
    pub fn on_load_progress(&mut self, buffered_percent: f64) {
        if buffered_percent.is_finite() {
            self.buffered_percent = buffered_percent.clamp(0.0, 100.0);
        }
    }

    /// Snapshot for the UI, with transient zeros substituted by the last
    /// known good values.
    pub fn display(&self) -> DisplaySnapshot {
        let duration = if self.duration_secs > 0.0 {
            self.duration_secs
        } else {
            self.last_known_good.duration_secs
        };
        let (current, progress) = if self.current_time_secs > 0.0 {
            (self.current_time_secs, self.progress_percent())
        } else {
            (
                self.last_known_good.current_time_secs,
                self.last_known_good.progress_percent,
            )
        };
        DisplaySnapshot {
            duration_secs: duration,
            current_time_secs: current,
            progress_percent: progress,
            buffered_percent: self.buffered_percent,
            is_playing: self.is_playing(),
            shows_muted: self.muted || self.volume == 0.0,
            volume: self.volume,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loaded_session(duration: f64) -> PlaybackSession {
        let mut session = PlaybackSession::new();
        session.load("https://cdn.test/track.mp3");
        session.on_duration_change(duration);
        session
    }

    #[test]
    fn idle_ignores_play_and_seek() {
        let mut session = PlaybackSession::new();
        assert!(session.toggle_play().is_empty());
        assert!(session.seek(30.0).is_empty());
        assert_eq!(session.state(), PlaybackState::Idle);
    }

    #[test]
    fn load_then_metadata_reaches_ready() {
        let mut session = PlaybackSession::new();
        let commands = session.load("https://cdn.test/track.mp3");
        assert_eq!(session.state(), PlaybackState::Loading);
        assert!(matches!(commands[0], EngineCommand::Load(_)));

        session.on_duration_change(237.0);
        assert_eq!(session.state(), PlaybackState::Ready);
        assert_eq!(session.duration_secs(), 237.0);
    }

    #[test]
    fn toggle_play_round_trip() {
        let mut session = loaded_session(200.0);
        assert_eq!(session.toggle_play(), vec![EngineCommand::Play]);
        assert!(session.is_playing());
        assert_eq!(session.toggle_play(), vec![EngineCommand::Pause]);
        assert_eq!(session.state(), PlaybackState::Ready);
    }

    #[test]
    fn play_while_loading_is_allowed() {
        let mut session = PlaybackSession::new();
        session.load("https://cdn.test/track.mp3");
        assert_eq!(session.toggle_play(), vec![EngineCommand::Play]);
        assert!(session.is_playing());
        // Metadata arriving later must not pause the session.
        session.on_duration_change(180.0);
        assert!(session.is_playing());
    }

    #[test]
    fn seek_clamps_to_known_duration() {
        let mut session = loaded_session(237.0);
        assert_eq!(
            session.seek(300.0),
            vec![EngineCommand::SetCurrentTime(237.0)]
        );
        assert_eq!(session.current_time_secs(), 237.0);

        session.seek(-5.0);
        assert_eq!(session.current_time_secs(), 0.0);
    }

    #[test]
    fn early_seek_reclamps_when_duration_resolves() {
        let mut session = PlaybackSession::new();
        session.load("https://cdn.test/track.mp3");
        assert_eq!(
            session.seek(300.0),
            vec![EngineCommand::SetCurrentTime(300.0)]
        );

        let corrections = session.on_duration_change(237.0);
        assert_eq!(corrections, vec![EngineCommand::SetCurrentTime(237.0)]);
        assert_eq!(session.current_time_secs(), 237.0);
    }

    #[test]
    fn early_seek_within_bounds_needs_no_correction() {
        let mut session = PlaybackSession::new();
        session.load("https://cdn.test/track.mp3");
        session.seek(30.0);
        assert!(session.on_duration_change(237.0).is_empty());
        assert_eq!(session.current_time_secs(), 30.0);
    }

    #[test]
    fn volume_clamps_to_unit_range() {
        let mut session = PlaybackSession::new();
        session.set_volume(1.7);
        assert_eq!(session.volume(), 1.0);
        session.set_volume(-0.3);
        assert_eq!(session.volume(), 0.0);
        session.set_volume(f64::NAN);
        assert!(session.volume() > 0.0 && session.volume() <= 1.0);
    }

    #[test]
    fn mute_remembers_and_restores_volume() {
        let mut session = PlaybackSession::new();
        session.set_volume(0.6);
        assert_eq!(session.toggle_mute(), vec![EngineCommand::SetVolume(0.0)]);
        assert!(session.is_muted());
        assert!(session.display().shows_muted);

        assert_eq!(session.toggle_mute(), vec![EngineCommand::SetVolume(0.6)]);
        assert!(!session.is_muted());
        assert_eq!(session.volume(), 0.6);
    }

    #[test]
    fn zero_volume_shows_muted_without_mute_state() {
        let mut session = PlaybackSession::new();
        session.set_volume(0.0);
        assert!(session.display().shows_muted);
        assert!(!session.is_muted());
    }

    #[test]
    fn slider_movement_unmutes() {
        let mut session = PlaybackSession::new();
        session.toggle_mute();
        session.set_volume(0.4);
        assert!(!session.is_muted());
        assert_eq!(session.volume(), 0.4);
    }

    #[test]
    fn progress_is_monotonic_under_nondecreasing_updates() {
        let mut session = loaded_session(100.0);
        session.toggle_play();
        let seq = session.current_seq();
        let mut last = 0.0;
        for t in [1.0, 2.5, 2.5, 7.0, 42.0, 99.9] {
            session.on_time_update(seq, t);
            assert!(session.current_time_secs() >= last);
            last = session.current_time_secs();
        }
    }

    #[test]
    fn stale_time_update_after_seek_is_discarded() {
        let mut session = loaded_session(200.0);
        session.toggle_play();
        let stale_seq = session.current_seq();
        session.on_time_update(stale_seq, 45.0);

        session.seek(120.0);
        // The engine still reports a pre-seek position tagged with the
        // old sequence; it must not snap the playhead back.
        session.on_time_update(stale_seq, 46.0);
        assert_eq!(session.current_time_secs(), 120.0);

        session.on_time_update(session.current_seq(), 121.0);
        assert_eq!(session.current_time_secs(), 121.0);
    }

    #[test]
    fn report_between_seek_and_apply_reads_as_stale() {
        let mut session = loaded_session(200.0);
        session.toggle_play();
        session.mark_applied();
        session.on_time_update(session.applied_seq(), 45.0);
        assert_eq!(session.current_time_secs(), 45.0);

        // The seek instruction is queued but the engine has not executed
        // it yet; a timeupdate firing in that window still reads the old
        // position and carries the last-applied tag.
        session.seek(120.0);
        session.on_time_update(session.applied_seq(), 45.2);
        assert_eq!(session.current_time_secs(), 120.0);

        // Once the instruction lands, reports carry the new tag.
        session.mark_applied();
        session.on_time_update(session.applied_seq(), 120.4);
        assert_eq!(session.current_time_secs(), 120.4);
    }

    #[test]
    fn applied_tag_advances_only_when_marked() {
        let mut session = loaded_session(100.0);
        session.toggle_play();
        session.mark_applied();
        let before = session.applied_seq();

        session.seek(10.0);
        assert_eq!(session.applied_seq(), before);
        assert!(session.current_seq() > before);

        session.mark_applied();
        assert_eq!(session.applied_seq(), session.current_seq());
    }

    #[test]
    fn rejected_play_rolls_back_to_ready() {
        let mut session = loaded_session(200.0);
        session.toggle_play();
        assert!(session.is_playing());

        // Autoplay policy blocked the play promise.
        session.on_play_rejected();
        assert_eq!(session.state(), PlaybackState::Ready);
        assert!(!session.display().is_playing);

        // A user-gesture retry still works.
        assert_eq!(session.toggle_play(), vec![EngineCommand::Play]);
        assert!(session.is_playing());
    }

    #[test]
    fn late_rejection_after_pause_changes_nothing() {
        let mut session = loaded_session(200.0);
        session.toggle_play();
        session.toggle_play();
        session.on_play_rejected();
        assert_eq!(session.state(), PlaybackState::Ready);

        let mut reloaded = loaded_session(200.0);
        reloaded.load("https://cdn.test/next.mp3");
        reloaded.on_play_rejected();
        assert_eq!(reloaded.state(), PlaybackState::Loading);
    }

    #[test]
    fn transient_zero_display_holds_last_known_good() {
        let mut session = loaded_session(237.0);
        session.toggle_play();
        let seq = session.current_seq();
        session.on_time_update(seq, 45.0);

        // Transient engine glitch: time snaps to 0 while buffering.
        session.on_time_update(seq, 0.0);
        assert_eq!(session.current_time_secs(), 0.0);
        let display = session.display();
        assert_eq!(display.current_time_secs, 45.0);
        assert!((display.progress_percent - 45.0 / 237.0 * 100.0).abs() < 1e-9);
    }

    #[test]
    fn transient_zero_duration_never_displays_zero() {
        let mut session = loaded_session(237.0);
        session.toggle_play();
        session.on_time_update(session.current_seq(), 45.0);

        // Engine momentarily loses metadata; simulate by reloading the
        // reading path the display uses.
        let display_before = session.display();
        assert_eq!(display_before.duration_secs, 237.0);
        // Internal duration cannot regress through on_duration_change
        // (non-positive readings are ignored).
        session.on_duration_change(0.0);
        assert_eq!(session.display().duration_secs, 237.0);
    }

    #[test]
    fn ended_resets_playhead_and_replays_from_zero() {
        let mut session = loaded_session(180.0);
        session.toggle_play();
        session.on_time_update(session.current_seq(), 180.0);
        session.on_ended();

        assert_eq!(session.state(), PlaybackState::Ended);
        assert!(!session.is_playing());
        assert_eq!(session.display().current_time_secs, 0.0);

        let commands = session.toggle_play();
        assert_eq!(
            commands,
            vec![EngineCommand::SetCurrentTime(0.0), EngineCommand::Play]
        );
        assert!(session.is_playing());
    }

    #[test]
    fn seek_rearms_after_ended() {
        let mut session = loaded_session(180.0);
        session.toggle_play();
        session.on_ended();
        session.seek(10.0);
        assert_eq!(session.state(), PlaybackState::Ready);
        assert_eq!(session.current_time_secs(), 10.0);
    }

    #[test]
    fn buffered_percent_clamps() {
        let mut session = loaded_session(60.0);
        session.on_load_progress(140.0);
        assert_eq!(session.display().buffered_percent, 100.0);
        session.on_load_progress(-3.0);
        assert_eq!(session.display().buffered_percent, 0.0);
        session.on_load_progress(f64::NAN);
        assert_eq!(session.display().buffered_percent, 0.0);
    }

    #[test]
    fn load_resets_state_but_keeps_volume() {
        let mut session = loaded_session(200.0);
        session.set_volume(0.3);
        session.toggle_play();
        session.on_time_update(session.current_seq(), 50.0);

        let commands = session.load("https://cdn.test/next.mp3");
        assert_eq!(session.state(), PlaybackState::Loading);
        assert_eq!(session.current_time_secs(), 0.0);
        assert_eq!(session.display().current_time_secs, 0.0);
        assert!(commands.contains(&EngineCommand::SetVolume(0.3)));
    }

    #[test]
    fn stale_updates_from_previous_source_are_dropped() {
        let mut session = loaded_session(200.0);
        session.toggle_play();
        let old_seq = session.current_seq();
        session.load("https://cdn.test/next.mp3");
        session.on_time_update(old_seq, 150.0);
        assert_eq!(session.current_time_secs(), 0.0);
    }
}
