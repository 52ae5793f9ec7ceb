use dioxus::prelude::*;

use crate::components::views::api_client;
use crate::components::Icon;

#[component]
pub fn Notifications() -> Element {
    let mut refresh = use_signal(|| 0u32);

    let notifications = use_resource(move || {
        let _ = refresh();
        async move { api_client().get_notifications().await }
    });

    rsx! {
        div { class: "space-y-6",
            h1 { class: "text-2xl font-bold", "Notifications" }

            {
                match notifications() {
                    Some(Ok(items)) if items.is_empty() => rsx! {
                        p { class: "py-20 text-center opacity-60", "Nothing new." }
                    },
                    Some(Ok(items)) => rsx! {
                        ul { class: "space-y-2",
                            for item in items {
                                li {
                                    class: if item.read { "rounded-lg bg-white/5 px-4 py-3 opacity-60" } else { "rounded-lg bg-white/10 px-4 py-3" },
                                    div { class: "flex items-center justify-between gap-4",
                                        div {
                                            p { "{item.message}" }
                                            if let Some(date) = item.created_at {
                                                p { class: "text-xs opacity-50", {date.format("%b %e, %Y").to_string()} }
                                            }
                                        }
                                        if !item.read {
                                            button {
                                                class: "shrink-0 rounded p-1.5 hover:bg-white/10",
                                                aria_label: "Mark as read",
                                                onclick: {
                                                    let id = item.id.clone();
                                                    move |_| {
                                                        let id = id.clone();
                                                        spawn(async move {
                                                            if api_client().mark_notification_read(&id).await.is_ok() {
                                                                refresh += 1;
                                                            }
                                                        });
                                                    }
                                                },
                                                Icon { name: "check", class: "w-4 h-4" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    },
                    Some(Err(error)) => rsx! {
                        p { class: "text-red-400", "Could not load notifications: {error}" }
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
