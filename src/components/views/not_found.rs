use dioxus::prelude::*;

use crate::routes::Route;

#[component]
pub fn NotFound(segments: Vec<String>) -> Element {
    let path = format!("/{}", segments.join("/"));

    rsx! {
        div { class: "py-24 text-center space-y-4",
            h1 { class: "text-3xl font-bold", "Page not found" }
            p { class: "opacity-70", "There is nothing at {path}." }
            Link {
                to: Route::Home {},
                class: "inline-block rounded-lg bg-violet-600 hover:bg-violet-500 px-5 py-2.5",
                "Back home"
            }
        }
    }
}
