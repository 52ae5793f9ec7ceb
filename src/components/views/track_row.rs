use dioxus::prelude::*;

use crate::api::models::{format_duration, format_price, Track};
use crate::components::{Icon, PlayerController};
use crate::routes::Route;

/// One track in a listing. The play button only appears when the track
/// carries a stream URL the visitor may use.
#[component]
pub fn TrackRow(track: Track, index: usize) -> Element {
    let controller = use_context::<PlayerController>();
    let is_current = controller.is_current_track(&track.id);
    let icon = if is_current && controller.display().is_playing {
        "pause"
    } else {
        "play"
    };

    rsx! {
        div { class: "flex items-center gap-3 rounded-lg px-3 py-2 hover:bg-white/5",
            span { class: "w-6 text-right text-sm opacity-60", "{index}" }

            if track.stream_url.is_some() {
                button {
                    class: "rounded-full bg-white/10 hover:bg-violet-600 p-2",
                    aria_label: "Play",
                    onclick: {
                        let track = track.clone();
                        move |_| {
                            let mut controller = controller;
                            controller.play_track(&track);
                        }
                    },
                    Icon { name: "{icon}", class: "w-4 h-4" }
                }
            }

            div { class: "flex-1 min-w-0",
                Link {
                    to: Route::TrackDetail { id: track.id.clone() },
                    class: "block truncate font-medium hover:underline",
                    "{track.title}"
                }
                if let (Some(artist_id), Some(artist_name)) =
                    (track.artist_id.clone(), track.artist_name.clone())
                {
                    Link {
                        to: Route::ArtistPage { id: artist_id },
                        class: "block truncate text-sm opacity-70 hover:underline",
                        "{artist_name}"
                    }
                }
            }

            if track.duration > 0 {
                span { class: "text-sm tabular-nums opacity-60",
                    {format_duration(track.duration)}
                }
            }
            span { class: "w-20 text-right text-sm", {format_price(track.price_usd)} }
        }
    }
}
