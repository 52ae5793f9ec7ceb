use dioxus::prelude::*;

use crate::api::models::{format_price, OwnedTrack};
use crate::components::views::api_client;
use crate::components::Icon;
use crate::routes::Route;

/// Holdings view: the same collection, but from the ownership side.
#[component]
pub fn Wallet() -> Element {
    let holdings = use_resource(move || async move { api_client().get_collection().await });

    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-2xl font-bold", "Wallet" }

            {
                match holdings() {
                    Some(Ok(items)) => {
                        let total: f64 = items.iter().map(|item| item.purchase_price_usd).sum();
                        rsx! {
                            p { class: "opacity-70",
                                "{items.len()} collectibles · "
                                {format_price(total)}
                                " spent"
                            }
                            div { class: "grid gap-3 sm:grid-cols-2",
                                for item in items {
                                    HoldingCard { item }
                                }
                            }
                        }
                    }
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Could not load your wallet: {error}" }
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
fn HoldingCard(item: OwnedTrack) -> Element {
    let purchased = item
        .purchased_at
        .map(|date| date.format("%b %e, %Y").to_string());

    rsx! {
        div { class: "rounded-xl bg-white/5 p-4 space-y-1",
            Link {
                to: Route::TrackDetail { id: item.track.id.clone() },
                class: "font-medium hover:underline",
                "{item.track.title}"
            }
            if let Some(token_id) = item.token_id {
                p { class: "text-xs font-mono opacity-50", "{token_id}" }
            }
            p { class: "text-sm opacity-70",
                "Paid "
                {format_price(item.purchase_price_usd)}
                if let Some(date) = purchased {
                    " on {date}"
                }
            }
        }
    }
}
