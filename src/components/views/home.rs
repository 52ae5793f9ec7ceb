use dioxus::prelude::*;

use crate::components::views::{api_client, TrackRow};
use crate::components::Icon;
use crate::routes::Route;

#[component]
pub fn Home() -> Element {
    let featured = use_resource(move || async move { api_client().get_tracks(None, 12).await });

    rsx! {
        div { class: "space-y-10",
            section { class: "rounded-2xl bg-gradient-to-br from-violet-900/60 to-fuchsia-900/30 p-10",
                h1 { class: "text-3xl font-bold", "Own the music you love" }
                p { class: "mt-2 max-w-xl opacity-80",
                    "Collect tracks directly from independent musicians. Every purchase "
                    "is yours to keep, with perks straight from the artist."
                }
                Link {
                    to: Route::Explore {},
                    class: "mt-6 inline-block rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5 font-medium",
                    "Start exploring"
                }
            }

            section {
                h2 { class: "text-xl font-semibold mb-4", "Featured drops" }
                {
                    match featured() {
                        Some(Ok(tracks)) => rsx! {
                            div { class: "space-y-1",
                                for (index , track) in tracks.into_iter().enumerate() {
                                    TrackRow { track, index: index + 1 }
                                }
                            }
                        },
                        Some(Err(error)) => rsx! {
                            p { class: "text-red-400", "Could not load tracks: {error}" }
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
}
