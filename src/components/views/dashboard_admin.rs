use dioxus::prelude::*;

use crate::api::models::format_price;
use crate::components::views::api_client;
use crate::components::Icon;
use crate::routes::Route;

#[component]
pub fn AdminDashboard() -> Element {
    let mut refresh = use_signal(|| 0u32);

    let stats = use_resource(move || async move { api_client().admin_stats().await });
    let pending = use_resource(move || {
        let _ = refresh();
        async move { api_client().admin_pending_tracks().await }
    });

    let review = move |track_id: String, approve: bool| {
        spawn(async move {
            if api_client()
                .admin_review_track(&track_id, approve)
                .await
                .is_ok()
            {
                refresh += 1;
            }
        });
    };

    rsx! {
        div { class: "space-y-8",
            h1 { class: "text-2xl font-bold", "Admin" }

            if let Some(Ok(stats)) = stats() {
                div { class: "grid grid-cols-2 gap-3 sm:grid-cols-4",
                    StatCard { label: "Users", value: stats.total_users.to_string() }
                    StatCard { label: "Artists", value: stats.total_artists.to_string() }
                    StatCard { label: "Pending review", value: stats.pending_tracks.to_string() }
                    StatCard { label: "Total sales", value: format_price(stats.total_sales_usd) }
                }
            }

            section {
                h2 { class: "text-xl font-semibold mb-3", "Awaiting review" }
                {
                    match pending() {
                        Some(Ok(tracks)) if tracks.is_empty() => rsx! {
                            p { class: "opacity-60", "The review queue is empty." }
                        },
                        Some(Ok(tracks)) => rsx! {
                            div { class: "space-y-2",
                                for track in tracks {
                                    div { class: "flex items-center gap-3 rounded-lg bg-white/5 px-4 py-3",
                                        div { class: "flex-1 min-w-0",
                                            p { class: "truncate font-medium", "{track.title}" }
                                            if let (Some(artist_id), Some(artist_name)) =
                                                (track.artist_id.clone(), track.artist_name.clone())
                                            {
                                                Link {
                                                    to: Route::MusicianReview { artist_id },
                                                    class: "text-sm opacity-70 hover:underline",
                                                    "{artist_name}"
                                                }
                                            }
                                        }
                                        span { class: "text-sm", {format_price(track.price_usd)} }
                                        button {
                                            class: "rounded-lg bg-emerald-600 hover:bg-emerald-500 p-2",
                                            aria_label: "Approve",
                                            onclick: {
                                                let id = track.id.clone();
                                                move |_| review(id.clone(), true)
                                            },
                                            Icon { name: "check", class: "w-4 h-4" }
                                        }
                                        button {
                                            class: "rounded-lg bg-red-600/80 hover:bg-red-500 p-2",
                                            aria_label: "Reject",
                                            onclick: {
                                                let id = track.id.clone();
                                                move |_| review(id.clone(), false)
                                            },
                                            Icon { name: "x", class: "w-4 h-4" }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(error)) => rsx! {
                            p { class: "text-red-400", "Could not load the queue: {error}" }
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

#[component]
fn StatCard(label: String, value: String) -> Element {
    rsx! {
        div { class: "rounded-xl bg-white/5 p-4",
            p { class: "text-sm opacity-60", "{label}" }
            p { class: "text-2xl font-semibold", "{value}" }
        }
    }
}
