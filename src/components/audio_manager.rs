//! Browser audio engine bridge.
//!
//! Owns the hidden `<audio>` element, relays its events into the
//! playback session (tagged with the last-applied instruction sequence)
//! and applies queued engine instructions. All playback decisions
//! happen in the session; this component never reasons about state on
//! its own.

use dioxus::prelude::*;

use crate::components::PlayerController;

#[cfg(target_arch = "wasm32")]
use crate::player::EngineCommand;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::{closure::Closure, JsCast};
#[cfg(target_arch = "wasm32")]
use web_sys::{window, HtmlAudioElement};

#[cfg(target_arch = "wasm32")]
const AUDIO_ELEMENT_ID: &str = "dreamster-audio";

/// Initialize the global audio element once.
#[cfg(target_arch = "wasm32")]
fn get_or_create_audio_element() -> Option<HtmlAudioElement> {
    let document = window()?.document()?;

    if let Some(existing) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
        return existing.dyn_into::<HtmlAudioElement>().ok();
    }

    let audio: HtmlAudioElement = document.create_element("audio").ok()?.dyn_into().ok()?;
    audio.set_id(AUDIO_ELEMENT_ID);
    audio.set_attribute("preload", "metadata").ok()?;
    document.body()?.append_child(&audio).ok()?;

    Some(audio)
}

#[cfg(target_arch = "wasm32")]
fn try_play(audio: &HtmlAudioElement, relay: PlayerController) {
    match audio.play() {
        Ok(promise) => {
            spawn(async move {
                let mut relay = relay;
                // Autoplay rejections surface here; roll the optimistic
                // play back so the bar shows paused until the user taps
                // play again.
                if wasm_bindgen_futures::JsFuture::from(promise).await.is_err() {
                    relay.on_play_rejected();
                }
            });
        }
        Err(_) => {
            let mut relay = relay;
            relay.on_play_rejected();
        }
    }
}

/// Percent of the track the engine has buffered, from the end of the
/// last buffered range.
#[cfg(target_arch = "wasm32")]
fn buffered_percent(audio: &HtmlAudioElement) -> Option<f64> {
    let duration = audio.duration();
    if !duration.is_finite() || duration <= 0.0 {
        return None;
    }
    let ranges = audio.buffered();
    if ranges.length() == 0 {
        return None;
    }
    let end = ranges.end(ranges.length() - 1).ok()?;
    Some(end / duration * 100.0)
}

#[cfg(target_arch = "wasm32")]
fn attach_listener(audio: &HtmlAudioElement, event: &str, handler: Box<dyn FnMut()>) {
    let closure = Closure::wrap(handler);
    let _ = audio.add_event_listener_with_callback(event, closure.as_ref().unchecked_ref());
    // The element lives for the whole session; the handlers do too.
    closure.forget();
}

#[cfg(target_arch = "wasm32")]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerController>();

    // Wire engine events once per element.
    use_effect(move || {
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        if audio.get_attribute("data-wired").is_some() {
            return;
        }
        let _ = audio.set_attribute("data-wired", "true");

        let mut relay = controller;
        attach_listener(&audio, "timeupdate", {
            let audio = audio.clone();
            Box::new(move || {
                // Tag with the last instruction the element has actually
                // executed. A seek whose command is still queued keeps
                // this report stale, so a pre-seek engine position never
                // snaps the playhead back.
                let seq = relay.applied_seq();
                relay.on_time_update(seq, audio.current_time());
            })
        });

        let mut relay = controller;
        attach_listener(&audio, "loadedmetadata", {
            let audio = audio.clone();
            Box::new(move || relay.on_duration_change(audio.duration()))
        });

        let mut relay = controller;
        attach_listener(&audio, "ended", Box::new(move || relay.on_ended()));

        let mut relay = controller;
        attach_listener(&audio, "progress", {
            let audio = audio.clone();
            Box::new(move || {
                if let Some(percent) = buffered_percent(&audio) {
                    relay.on_load_progress(percent);
                }
            })
        });
    });

    // Apply queued instructions as they arrive.
    use_effect(move || {
        let mut controller = controller;
        let commands = controller.take_commands();
        if commands.is_empty() {
            return;
        }
        let Some(audio) = get_or_create_audio_element() else {
            return;
        };
        for command in commands {
            match command {
                EngineCommand::Load(url) => {
                    audio.set_src(&url);
                    audio.load();
                }
                EngineCommand::Play => try_play(&audio, controller),
                EngineCommand::Pause => {
                    let _ = audio.pause();
                }
                EngineCommand::SetCurrentTime(secs) => audio.set_current_time(secs),
                EngineCommand::SetVolume(volume) => audio.set_volume(volume.clamp(0.0, 1.0)),
            }
        }
    });

    // Release the engine when the shell unmounts.
    use_drop(move || {
        if let Some(document) = window().and_then(|w| w.document()) {
            if let Some(element) = document.get_element_by_id(AUDIO_ELEMENT_ID) {
                if let Ok(audio) = element.dyn_into::<HtmlAudioElement>() {
                    let _ = audio.pause();
                    audio.set_src("");
                }
            }
        }
    });

    rsx! {}
}

/// Native builds have no media engine yet; drain the queue so intents
/// don't pile up between renders.
#[cfg(not(target_arch = "wasm32"))]
#[component]
pub fn AudioController() -> Element {
    let controller = use_context::<PlayerController>();

    use_effect(move || {
        let mut controller = controller;
        let _ = controller.take_commands();
    });

    rsx! {}
}
