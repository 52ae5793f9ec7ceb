use dioxus::prelude::*;

use crate::api::models::{format_duration, format_price};
use crate::components::views::api_client;
use crate::components::{Icon, PlayerController};
use crate::routes::Route;

#[component]
pub fn TrackDetail(id: String) -> Element {
    let controller = use_context::<PlayerController>();
    let mut purchase_status = use_signal(|| None::<Result<(), String>>);

    let perk_track_id = id.clone();
    let track = use_resource(use_reactive!(|(id,)| async move {
        api_client().get_track(&id).await
    }));
    let perks = use_resource(use_reactive!(|(perk_track_id,)| async move {
        api_client()
            .get_perks(&perk_track_id)
            .await
            .unwrap_or_default()
    }));

    match track() {
        Some(Ok(track)) => {
            let playable = track.stream_url.is_some();
            let is_playing =
                controller.is_current_track(&track.id) && controller.display().is_playing;
            let play_icon = if is_playing { "pause" } else { "play" };

            rsx! {
                div { class: "space-y-8",
                    div { class: "flex gap-6",
                        if let Some(cover) = track.cover_url.clone() {
                            img { class: "w-48 h-48 rounded-xl object-cover", src: "{cover}", alt: "" }
                        }
                        div { class: "space-y-2",
                            h1 { class: "text-3xl font-bold", "{track.title}" }
                            if let (Some(artist_id), Some(artist_name)) =
                                (track.artist_id.clone(), track.artist_name.clone())
                            {
                                Link {
                                    to: Route::ArtistPage { id: artist_id },
                                    class: "text-lg opacity-80 hover:underline",
                                    "{artist_name}"
                                }
                            }
                            if track.duration > 0 {
                                p { class: "text-sm opacity-60", {format_duration(track.duration)} }
                            }
                            p { class: "text-xl font-semibold", {format_price(track.price_usd)} }

                            div { class: "flex gap-3 pt-2",
                                if playable {
                                    button {
                                        class: "flex items-center gap-2 rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5",
                                        onclick: {
                                            let track = track.clone();
                                            move |_| {
                                                let mut controller = controller;
                                                controller.play_track(&track);
                                            }
                                        },
                                        Icon { name: "{play_icon}", class: "w-4 h-4" }
                                        if is_playing { "Pause" } else { "Play" }
                                    }
                                } else {
                                    button {
                                        class: "rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5",
                                        onclick: {
                                            let track_id = track.id.clone();
                                            move |_| {
                                                let track_id = track_id.clone();
                                                spawn(async move {
                                                    let result = api_client()
                                                        .purchase_track(&track_id)
                                                        .await
                                                        .map(|_| ());
                                                    purchase_status.set(Some(result));
                                                });
                                            }
                                        },
                                        "Buy for "
                                        {format_price(track.price_usd)}
                                    }
                                }
                            }

                            match purchase_status() {
                                Some(Ok(())) => rsx! {
                                    p { class: "text-emerald-400",
                                        "It's yours. "
                                        Link { to: Route::Collection {}, class: "underline", "View your collection" }
                                    }
                                },
                                Some(Err(error)) => rsx! {
                                    p { class: "text-red-400", "Purchase failed: {error}" }
                                },
                                None => rsx! {},
                            }
                        }
                    }

                    if let Some(perk_list) = perks() {
                        if !perk_list.is_empty() {
                            section {
                                h2 { class: "text-xl font-semibold mb-3", "Perks for collectors" }
                                ul { class: "space-y-2",
                                    for perk in perk_list {
                                        li { class: "rounded-lg bg-white/5 px-4 py-3",
                                            p { class: "font-medium", "{perk.title}" }
                                            if let Some(description) = perk.description {
                                                p { class: "text-sm opacity-70", "{description}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        Some(Err(error)) => rsx! {
            p { class: "py-16 text-center text-red-400", "Could not load this track: {error}" }
        },
        None => rsx! {
            div { class: "flex justify-center py-24",
                Icon { name: "loader", class: "w-8 h-8 opacity-60" }
            }
        },
    }
}
