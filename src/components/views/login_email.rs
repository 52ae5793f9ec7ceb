use dioxus::prelude::*;

use crate::auth::{role_home, Session};
use crate::components::views::api_client;
use crate::components::apply_login;
use crate::routes::Route;

#[component]
pub fn LoginEmail() -> Element {
    let session = use_context::<Signal<Session>>();
    let navigator = use_navigator();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);
    let mut busy = use_signal(|| false);

    let submit = move |_| {
        let email = email().trim().to_string();
        let password = password();
        if email.is_empty() || password.is_empty() {
            error.set(Some("Email and password are required.".to_string()));
            return;
        }
        busy.set(true);
        error.set(None);
        spawn(async move {
            match api_client().login_email(&email, &password).await {
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
            h1 { class: "text-2xl font-bold", "Log in" }

            form { class: "space-y-4", onsubmit: submit,
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

                if let Some(message) = error() {
                    p { class: "text-sm text-red-400", "{message}" }
                }

                button {
                    class: "w-full rounded-lg bg-violet-600 hover:bg-violet-500 px-4 py-2.5 font-medium disabled:opacity-50",
                    r#type: "submit",
                    disabled: busy(),
                    if busy() { "Signing in…" } else { "Log in" }
                }
            }

            p { class: "text-sm opacity-70",
                "New here? "
                Link { to: Route::Register {}, class: "underline", "Create an account" }
            }
        }
    }
}
