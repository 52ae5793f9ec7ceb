use dioxus::prelude::*;

use crate::auth::{role_home, Role, Session};
use crate::components::views::api_client;
use crate::components::apply_login;
use crate::routes::Route;

#[component]
pub fn Register() -> Element {
    let session = use_context::<Signal<Session>>();
    let navigator = use_navigator();

    let mut display_name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut role = use_signal(|| Role::Fan);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let display_name = display_name().trim().to_string();
        let email = email().trim().to_string();
        let password = password();
        if display_name.is_empty() || email.is_empty() || password.is_empty() {
            error.set(Some("All fields are required.".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        let chosen_role = role();
        spawn(async move {
            match api_client()
                .register(&email, &password, &display_name, chosen_role)
                .await
            {
                Ok(auth) => {
                    apply_login(session, auth.role, auth.token.as_deref());
                    let home = role_home(auth.role).parse::<Route>().unwrap_or(Route::Home {});
                    navigator.push(home);
                }
                Err(message) => {
                    error.set(Some(message));
                    busy.set(false);
                }
            }
        });
    };

    rsx! {
        div { class: "mx-auto max-w-sm py-12 space-y-6",
            h1 { class: "text-2xl font-bold", "Create your account" }

            form { class: "space-y-4", onsubmit: submit,
                label { class: "block space-y-1",
                    span { class: "text-sm opacity-70", "Display name" }
                    input {
                        class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                        value: "{display_name}",
                        oninput: move |event| display_name.set(event.value()),
                    }
                }
                label { class: "block space-y-1",
                    span { class: "text-sm opacity-70", "Email" }
                    input {
                        class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                        r#type: "email",
                        value: "{email}",
                        oninput: move |event| email.set(event.value()),
                    }
                }
                label { class: "block space-y-1",
                    span { class: "text-sm opacity-70", "Password" }
                    input {
                        class: "w-full rounded-lg bg-white/5 border border-white/10 px-4 py-2",
                        r#type: "password",
                        value: "{password}",
                        oninput: move |event| password.set(event.value()),
                    }
                }

                fieldset { class: "flex gap-2",
                    button {
                        class: if role() == Role::Fan { "flex-1 rounded-lg bg-violet-600 px-4 py-2" } else { "flex-1 rounded-lg bg-white/5 hover:bg-white/10 px-4 py-2" },
                        r#type: "button",
                        onclick: move |_| role.set(Role::Fan),
                        "I'm a fan"
                    }
                    button {
                        class: if role() == Role::Musician { "flex-1 rounded-lg bg-violet-600 px-4 py-2" } else { "flex-1 rounded-lg bg-white/5 hover:bg-white/10 px-4 py-2" },
                        r#type: "button",
                        onclick: move |_| role.set(Role::Musician),
                        "I make music"
                    }
                }

                if let Some(message) = error() {
                    p { class: "text-sm text-red-400", "{message}" }
                }

                button {
                    class: "w-full rounded-lg bg-violet-600 hover:bg-violet-500 px-4 py-2.5 font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Creating account…" } else { "Sign up" }
                }
            }

            p { class: "text-sm opacity-70",
                "Already have an account? "
                Link { to: Route::LoginEmail {}, class: "underline", "Log in" }
            }
        }
    }
}
