use dioxus::prelude::*;

use crate::components::views::{api_client, TrackRow};
use crate::components::Icon;

#[component]
pub fn ArtistPage(id: String) -> Element {
    let catalogue_id = id.clone();
    let profile = use_resource(use_reactive!(|(id,)| async move {
        api_client().get_artist(&id).await
    }));
    let tracks = use_resource(use_reactive!(|(catalogue_id,)| async move {
        api_client().get_artist_tracks(&catalogue_id).await
    }));

    rsx! {
        div { class: "space-y-8",
            {
                match profile() {
                    Some(Ok(artist)) => rsx! {
                        header { class: "flex items-center gap-6",
                            if let Some(avatar) = artist.avatar_url.clone() {
                                img { class: "w-28 h-28 rounded-full object-cover", src: "{avatar}", alt: "" }
                            }
                            div {
                                h1 { class: "text-3xl font-bold", "{artist.name}" }
                                p { class: "text-sm opacity-60",
                                    "{artist.track_count} tracks · {artist.follower_count} followers"
                                }
                                if let Some(bio) = artist.bio.clone() {
                                    p { class: "mt-2 max-w-xl opacity-80", "{bio}" }
                                }
                            }
                        }
                    },
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Could not load this artist: {error}" }
                    },
                    None => rsx! {
                        div { class: "flex justify-center py-16",
                            Icon { name: "loader", class: "w-8 h-8 opacity-60" }
                        }
                    },
                }
            }

            if let Some(Ok(track_list)) = tracks() {
                section {
                    h2 { class: "text-xl font-semibold mb-3", "Releases" }
                    if track_list.is_empty() {
                        p { class: "opacity-60", "No releases yet." }
                    } else {
                        div { class: "space-y-1",
                            for (index , track) in track_list.into_iter().enumerate() {
                                TrackRow { track, index: index + 1 }
                            }
                        }
                    }
                }
            }
        }
    }
}
