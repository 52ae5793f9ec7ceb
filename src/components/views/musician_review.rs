use dioxus::prelude::*;

use crate::components::views::{api_client, TrackRow};
use crate::components::Icon;
use crate::routes::Route;

/// Admin-side look at one musician: profile plus their catalogue as it
/// appears to fans.
#[component]
pub fn MusicianReview(artist_id: String) -> Element {
    let catalogue_id = artist_id.clone();
    let profile = use_resource(use_reactive!(|(artist_id,)| async move {
        api_client().admin_musician_profile(&artist_id).await
    }));
    let tracks = use_resource(use_reactive!(|(catalogue_id,)| async move {
        api_client().get_artist_tracks(&catalogue_id).await
    }));

    rsx! {
        div { class: "space-y-8",
            Link {
                to: Route::AdminDashboard {},
                class: "text-sm opacity-70 hover:underline",
                "← Back to admin"
            }

            {
                match profile() {
                    Some(Ok(artist)) => rsx! {
                        header { class: "space-y-1",
                            h1 { class: "text-2xl font-bold", "{artist.name}" }
                            p { class: "text-sm opacity-60",
                                "{artist.track_count} tracks · {artist.follower_count} followers"
                            }
                            if let Some(bio) = artist.bio.clone() {
                                p { class: "max-w-xl opacity-80", "{bio}" }
                            }
                        }
                    },
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Could not load this musician: {error}" }
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
                    h2 { class: "text-xl font-semibold mb-3", "Catalogue" }
                    if track_list.is_empty() {
                        p { class: "opacity-60", "No tracks yet." }
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
