use dioxus::prelude::*;

use crate::components::views::{api_client, TrackRow};
use crate::components::Icon;
use crate::routes::Route;

#[component]
pub fn Collection() -> Element {
    let owned = use_resource(move || async move { api_client().get_collection().await });

    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-2xl font-bold", "Your collection" }

            {
                match owned() {
                    Some(Ok(items)) if items.is_empty() => rsx! {
                        div { class: "py-20 text-center space-y-3",
                            p { class: "opacity-60", "You haven't collected anything yet." }
                            Link {
                                to: Route::Explore {},
                                class: "inline-block rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5",
                                "Find your first track"
                            }
                        }
                    },
                    Some(Ok(items)) => rsx! {
                        div { class: "space-y-1",
                            for (index , item) in items.into_iter().enumerate() {
                                TrackRow { track: item.track, index: index + 1 }
                            }
                        }
                    },
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Could not load your collection: {error}" }
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
