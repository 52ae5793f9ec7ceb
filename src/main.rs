use dioxus::prelude::*;

mod api;
mod auth;
mod components;
mod db;
mod player;
mod routes;

use routes::Route;

const FAVICON: Asset = asset!("/assets/favicon.ico");
const MANIFEST: Asset = asset!("/assets/site.webmanifest");
const APP_CSS: Asset = asset!("/assets/styling/app.css");
const TAILWIND_CSS: Asset = asset!("/assets/tailwind.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "manifest", href: MANIFEST }

        // Theme color for mobile browsers
        document::Meta { name: "theme-color", content: "#7c3aed" }
        document::Meta { name: "mobile-web-app-capable", content: "yes" }
        document::Meta { name: "apple-mobile-web-app-title", content: "Dreamster" }

        document::Stylesheet { href: TAILWIND_CSS }
        document::Stylesheet { href: APP_CSS }

        Router::<Route> {}
    }
}
