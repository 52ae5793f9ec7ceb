use dioxus::prelude::*;
use uuid::Uuid;

use crate::api::models::{format_price, TrackDraft};
use crate::components::views::api_client;
use crate::components::Icon;
use crate::routes::Route;

fn new_draft() -> TrackDraft {
    TrackDraft {
        // Minted client-side so every wizard step saves against the
        // same handle.
        draft_id: Uuid::new_v4().to_string(),
        title: String::new(),
        genre: None,
        price_usd: 9.99,
        royalty_percent: 10.0,
    }
}

/// Three-step upload wizard: details, pricing, review.
#[component]
pub fn Studio() -> Element {
    let mut step = use_signal(|| 1u8);
    let mut draft = use_signal(new_draft);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);
    let mut published_id = use_signal(|| None::<String>);

    let preview = use_resource(move || {
        let price = draft().price_usd;
        async move { api_client().pricing_preview(price).await }
    });

    let mut save_and_advance = move || {
        let current = draft();
        if current.title.trim().is_empty() {
            error.set(Some("Give the track a title first.".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            match api_client().save_draft(&current).await {
                Ok(saved) => {
                    draft.set(saved);
                    step += 1;
                }
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    let publish = move |_| {
        let draft_id = draft().draft_id.clone();
        busy.set(true);
        error.set(None);
        spawn(async move {
            match api_client().publish_track(&draft_id).await {
                Ok(track) => published_id.set(Some(track.id)),
                Err(message) => error.set(Some(message)),
            }
            busy.set(false);
        });
    };

    if let Some(track_id) = published_id() {
        return rsx! {
            div { class: "py-24 text-center space-y-4",
                Icon { name: "check", class: "mx-auto w-12 h-12 text-emerald-400" }
                h1 { class: "text-2xl font-bold", "Submitted for review" }
                p { class: "opacity-70",
                    "Your track goes live as soon as an admin approves it."
                }
                div { class: "flex justify-center gap-4",
                    Link {
                        to: Route::TrackDetail { id: track_id },
                        class: "rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5",
                        "View track"
                    }
                    Link {
                        to: Route::MusicianDashboard {},
                        class: "rounded-lg bg-white/10 hover:bg-white/20 px-5 py-2.5",
                        "Back to dashboard"
                    }
                }
            }
        };
    }

    let current = draft();

    rsx! {
        div { class: "mx-auto max-w-xl space-y-8",
            header {
                h1 { class: "text-2xl font-bold", "Upload a track" }
                p { class: "text-sm opacity-60", "Step {step} of 3" }
            }

            if let Some(message) = error() {
                p { class: "text-sm text-red-400", "{message}" }
            }

            {
                match step() {
                    1 => rsx! {
                        div { class: "space-y-4",
                            label { class: "block space-y-1",
                                span { class: "text-sm opacity-70", "Title" }
                                input {
                                    class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                                    value: "{current.title}",
                                    oninput: move |event| draft.write().title = event.value(),
                                }
                            }
                            label { class: "block space-y-1",
                                span { class: "text-sm opacity-70", "Genre (optional)" }
                                input {
                                    class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                                    value: current.genre.clone().unwrap_or_default(),
                                    oninput: move |event| {
                                        let value = event.value();
                                        draft.write().genre = (!value.trim().is_empty()).then_some(value);
                                    },
                                }
                            }
                            button {
                                class: "rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5 disabled:opacity-50",
                                disabled: busy(),
                                onclick: move |_| save_and_advance(),
                                "Continue to pricing"
                            }
                        }
                    },
                    2 => rsx! {
                        div { class: "space-y-4",
                            label { class: "block space-y-1",
                                span { class: "text-sm opacity-70", "Price (USD)" }
                                input {
                                    class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                                    r#type: "number",
                                    min: "0",
                                    step: "0.01",
                                    value: "{current.price_usd}",
                                    oninput: move |event| {
                                        if let Ok(price) = event.value().parse::<f64>() {
                                            draft.write().price_usd = price.max(0.0);
                                        }
                                    },
                                }
                            }
                            label { class: "block space-y-1",
                                span { class: "text-sm opacity-70", "Resale royalty (%)" }
                                input {
                                    class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                                    r#type: "number",
                                    min: "0",
                                    max: "50",
                                    value: "{current.royalty_percent}",
                                    oninput: move |event| {
                                        if let Ok(royalty) = event.value().parse::<f64>() {
                                            draft.write().royalty_percent = royalty.clamp(0.0, 50.0);
                                        }
                                    },
                                }
                            }

                            if let Some(Ok(split)) = preview() {
                                div { class: "rounded-xl bg-white/5 p-4 text-sm space-y-1",
                                    p { class: "flex justify-between",
                                        span { class: "opacity-70", "List price" }
                                        span { {format_price(split.list_price_usd)} }
                                    }
                                    p { class: "flex justify-between",
                                        span { class: "opacity-70", "Platform fee" }
                                        span { {format_price(split.platform_fee_usd)} }
                                    }
                                    p { class: "flex justify-between font-medium",
                                        span { "You receive" }
                                        span { {format_price(split.artist_net_usd)} }
                                    }
                                }
                            }

                            div { class: "flex gap-3",
                                button {
                                    class: "rounded-lg bg-white/10 hover:bg-white/20 px-5 py-2.5",
                                    onclick: move |_| step.set(1),
                                    "Back"
                                }
                                button {
                                    class: "rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5 disabled:opacity-50",
                                    disabled: busy(),
                                    onclick: move |_| save_and_advance(),
                                    "Review"
                                }
                            }
                        }
                    },
                    _ => rsx! {
                        div { class: "space-y-4",
                            div { class: "rounded-xl bg-white/5 p-4 space-y-2",
                                p { class: "text-lg font-semibold", "{current.title}" }
                                if let Some(genre) = current.genre.clone() {
                                    p { class: "text-sm opacity-70", "{genre}" }
                                }
                                p { class: "text-sm",
                                    {format_price(current.price_usd)}
                                    " · {current.royalty_percent}% resale royalty"
                                }
                            }
                            div { class: "flex gap-3",
                                button {
                                    class: "rounded-lg bg-white/10 hover:bg-white/20 px-5 py-2.5",
                                    onclick: move |_| step.set(2),
                                    "Back"
                                }
                                button {
                                    class: "rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5 disabled:opacity-50",
                                    disabled: busy(),
                                    onclick: publish,
                                    if busy() { "Publishing…" } else { "Publish" }
                                }
                            }
                        }
                    },
                }
            }
        }
    }
}
