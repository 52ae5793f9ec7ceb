//! Persistent player bar. Renders only when a track is loaded.
//!
//! Everything shown here comes from the display snapshot, so a stalled
//! engine never flashes the readout back to `0:00`. Seeks always go
//! through the controller, never back through the snapshot.

use dioxus::prelude::*;

use crate::api::models::format_duration;
use crate::components::{Icon, PlayerController};

#[component]
pub fn PlayerBar() -> Element {
    let controller = use_context::<PlayerController>();

    let Some(track) = controller.now_playing() else {
        return rsx! {};
    };
    let display = controller.display();

    let play_icon = if display.is_playing { "pause" } else { "play" };
    let volume_icon = if display.shows_muted {
        "volume-muted"
    } else {
        "volume"
    };
    let volume_percent = display.volume * 100.0;

    rsx! {
        div { class: "player-bar flex items-center gap-4 px-4 py-3",
            div { class: "flex items-center gap-3 w-56 min-w-0",
                if let Some(cover) = track.cover_url.clone() {
                    img { class: "w-12 h-12 rounded object-cover", src: "{cover}", alt: "" }
                }
                div { class: "min-w-0",
                    p { class: "truncate font-medium", "{track.title}" }
                    if let Some(artist) = track.artist_name.clone() {
                        p { class: "truncate text-sm opacity-70", "{artist}" }
                    }
                }
            }

            button {
                class: "rounded-full bg-violet-600 hover:bg-violet-500 p-3",
                aria_label: if display.is_playing { "Pause" } else { "Play" },
                onclick: move |_| {
                    let mut controller = controller;
                    controller.toggle_play();
                },
                Icon { name: "{play_icon}", class: "w-5 h-5" }
            }

            span { class: "text-sm tabular-nums w-12 text-right",
                {format_duration(display.current_time_secs as u32)}
            }
            div { class: "relative flex-1",
                // Buffered underlay behind the scrubber.
                div {
                    class: "absolute inset-y-1/2 left-0 h-1 -translate-y-1/2 rounded bg-white/20 pointer-events-none",
                    style: "width: {display.buffered_percent}%",
                }
                input {
                    class: "relative w-full",
                    r#type: "range",
                    min: "0",
                    max: "100",
                    step: "0.1",
                    value: "{display.progress_percent}",
                    aria_label: "Seek",
                    oninput: move |event| {
                        let mut controller = controller;
                        if let Ok(percent) = event.value().parse::<f64>() {
                            controller.seek_percent(percent);
                        }
                    },
                }
            }
            span { class: "text-sm tabular-nums w-12",
                {format_duration(display.duration_secs as u32)}
            }

            button {
                class: "p-2 opacity-80 hover:opacity-100",
                aria_label: if display.shows_muted { "Unmute" } else { "Mute" },
                onclick: move |_| {
                    let mut controller = controller;
                    controller.toggle_mute();
                },
                Icon { name: "{volume_icon}", class: "w-5 h-5" }
            }
            input {
                class: "w-24",
                r#type: "range",
                min: "0",
                max: "100",
                value: "{volume_percent}",
                aria_label: "Volume",
                oninput: move |event| {
                    let mut controller = controller;
                    if let Ok(value) = event.value().parse::<f64>() {
                        controller.set_volume(value / 100.0);
                    }
                },
            }
        }
    }
}
