use dioxus::prelude::*;

use crate::components::views::{api_client, TrackRow};
use crate::components::Icon;

#[component]
pub fn Explore() -> Element {
    let mut query = use_signal(String::new);

    let results = use_resource(move || {
        let query = query();
        async move {
            let q = query.trim().to_string();
            let q = (!q.is_empty()).then_some(q);
            api_client().get_tracks(q.as_deref(), 50).await
        }
    });

    rsx! {
        div { class: "space-y-6",
            header { class: "space-y-4",
                h1 { class: "text-2xl font-bold", "Explore" }
                input {
                    class: "w-full max-w-md rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                    r#type: "search",
                    placeholder: "Search tracks or artists",
                    value: "{query}",
                    oninput: move |event| query.set(event.value()),
                }
            }

            {
                match results() {
                    Some(Ok(tracks)) if tracks.is_empty() => rsx! {
                        p { class: "py-16 text-center opacity-60", "Nothing matched that search." }
                    },
                    Some(Ok(tracks)) => rsx! {
                        div { class: "space-y-1",
                            for (index , track) in tracks.into_iter().enumerate() {
                                TrackRow { track, index: index + 1 }
                            }
                        }
                    },
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Search failed: {error}" }
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
