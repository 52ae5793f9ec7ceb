use dioxus::prelude::*;

use crate::api::models::{format_price, Track};
use crate::components::views::api_client;
use crate::components::Icon;
use crate::routes::Route;

#[component]
pub fn MusicianDashboard() -> Element {
    let my_tracks = use_resource(move || async move { api_client().get_my_tracks().await });

    rsx! {
        div { class: "space-y-6",
            header { class: "flex items-center justify-between",
                h1 { class: "text-2xl font-bold", "Your music" }
                Link {
                    to: Route::Studio {},
                    class: "flex items-center gap-2 rounded-lg bg-violet-600 hover:bg-violet-500 px-4 py-2",
                    Icon { name: "upload", class: "w-4 h-4" }
                    "Upload a track"
                }
            }

            {
                match my_tracks() {
                    Some(Ok(tracks)) if tracks.is_empty() => rsx! {
                        p { class: "py-20 text-center opacity-60",
                            "Nothing here yet. Your first upload starts in the studio."
                        }
                    },
                    Some(Ok(tracks)) => {
                        let total_plays: u64 = tracks.iter().map(|t| t.play_count).sum();
                        let published = tracks.iter().filter(|t| t.published).count();
                        rsx! {
                            div { class: "flex gap-6 text-sm opacity-70",
                                span { "{tracks.len()} tracks" }
                                span { "{published} published" }
                                span { "{total_plays} plays" }
                            }
                            div { class: "space-y-1",
                                for track in tracks {
                                    UploadRow { track }
                                }
                            }
                        }
                    }
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Could not load your tracks: {error}" }
                    },
                    None => rsx! {
                        div { class: "flex justify-center py-16",
                            Icon { name: "loader", class: "w-8 h-8 opacity-60" }
                        }
                    },
                }
            }
        }
    }
}

#[component]
fn UploadRow(track: Track) -> Element {
    rsx! {
        div { class: "flex items-center gap-3 rounded-lg px-3 py-2 hover:bg-white/5",
            div { class: "flex-1 min-w-0",
                Link {
                    to: Route::TrackDetail { id: track.id.clone() },
                    class: "block truncate font-medium hover:underline",
                    "{track.title}"
                }
                p { class: "text-sm opacity-60", "{track.play_count} plays" }
            }
            span {
                class: if track.published { "rounded-full bg-emerald-500/20 text-emerald-400 px-3 py-1 text-xs" } else { "rounded-full bg-amber-500/20 text-amber-400 px-3 py-1 text-xs" },
                if track.published { "Published" } else { "In review" }
            }
            span { class: "w-20 text-right text-sm", {format_price(track.price_usd)} }
        }
    }
}
