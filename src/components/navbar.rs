//! Top navigation. Links vary with the signed-in role; the gate still
//! enforces access if something slips through here.

use dioxus::prelude::*;

use crate::auth::{Role, Session};
use crate::components::{apply_logout, Icon};
use crate::routes::Route;

#[component]
pub fn Navbar() -> Element {
    let session = use_context::<Signal<Session>>();
    let navigator = use_navigator();
    let current = session();

    rsx! {
        header { class: "flex items-center justify-between px-4 py-3 border-b border-white/10",
            Link { to: Route::Home {}, class: "flex items-center gap-2 text-lg font-semibold",
                Icon { name: "music", class: "w-6 h-6 text-violet-400" }
                "Dreamster"
            }

            nav { class: "flex items-center gap-4 text-sm",
                Link { to: Route::Explore {}, "Explore" }
                Link { to: Route::About {}, "About" }

                if current.is_logged_in {
                    {
                        match current.role {
                            Role::Fan => rsx! {
                                Link { to: Route::Collection {}, "Collection" }
                                Link { to: Route::Wallet {}, "Wallet" }
                            },
                            Role::Musician => rsx! {
                                Link { to: Route::MusicianDashboard {}, "Dashboard" }
                                Link { to: Route::Studio {}, "Studio" }
                            },
                            Role::Admin | Role::Unknown => rsx! {
                                Link { to: Route::AdminDashboard {}, "Admin" }
                            },
                        }
                    }
                    Link {
                        to: Route::Notifications {},
                        aria_label: "Notifications",
                        Icon { name: "bell", class: "w-5 h-5" }
                    }
                    button {
                        class: "opacity-80 hover:opacity-100",
                        onclick: move |_| {
                            apply_logout(session);
                            navigator.push(Route::Home {});
                        },
                        "Log out"
                    }
                } else {
                    Link { to: Route::LoginEmail {}, "Log in" }
                    Link {
                        to: Route::Register {},
                        class: "rounded bg-violet-600 hover:bg-violet-500 px-3 py-1.5",
                        "Sign up"
                    }
                }
            }
        }
    }
}
