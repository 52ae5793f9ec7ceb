//! Application shell: context providers, the navigation gate, and the
//! persistent chrome around the routed views.

use chrono::Utc;
use dioxus::prelude::*;

use crate::api::ApiConfig;
use crate::auth::{evaluate, AccessDecision, RoutePolicy, Session, SessionStore};
use crate::components::{AudioController, Navbar, PlayerBar, PlayerController};
use crate::db;
use crate::player::PlaybackSession;
use crate::routes::Route;

#[component]
pub fn AppShell() -> Element {
    let playback = use_signal(PlaybackSession::new);
    let command_queue = use_signal(Vec::new);
    let now_playing = use_signal(|| None);
    let controller =
        use_context_provider(|| PlayerController::new(playback, command_queue, now_playing));

    // Session context for the chrome. Login and logout update it; the
    // gate below reads the cookie store directly instead.
    use_context_provider(|| Signal::new(SessionStore.read()));

    // Restore player preferences once, and drop a stored API token that
    // is already past its expiry claim.
    use_effect(move || {
        let mut controller = controller;
        if let Ok(settings) = db::load_settings() {
            controller.set_volume(settings.volume);
            if settings.muted {
                controller.toggle_mute();
            }
        }

        if let Some(token) = db::load_api_token() {
            let config = ApiConfig::default().with_token(token);
            if !config.token_is_fresh(Utc::now().timestamp()) {
                db::save_api_token(None);
            }
        }
    });

    // Persist preferences when they change.
    let mut saved_settings = use_signal(db::AppSettings::default);
    use_effect(move || {
        let mut controller = controller;
        let volume = controller.display().volume;
        let muted = controller.is_muted();

        let mut settings = saved_settings.peek().clone();
        if settings.volume != volume || settings.muted != muted {
            settings.volume = volume;
            settings.muted = muted;
            saved_settings.set(settings.clone());
            let _ = db::save_settings(&settings);
        }
    });

    let navigator = use_navigator();
    let route = use_route::<Route>();
    let path = route.to_string();

    // The gate sees every navigation with a fresh cookie read, so a
    // session change in another tab is picked up on the next click.
    match evaluate(&path, SessionStore.read(), &RoutePolicy::canonical()) {
        AccessDecision::Allow => {}
        AccessDecision::RedirectTo(target) => {
            navigator.replace(target.parse::<Route>().unwrap_or(Route::Home {}));
            return rsx! {};
        }
    }

    rsx! {
        div { class: "min-h-screen pb-24",
            Navbar {}
            main { class: "max-w-5xl mx-auto px-4 py-6",
                Outlet::<Route> {}
            }
            PlayerBar {}
            AudioController {}
        }
    }
}

/// Sign the visitor in: persist the cookie session and the API token,
/// then refresh the chrome.
pub fn apply_login(
    mut session: Signal<Session>,
    role: crate::auth::Role,
    token: Option<&str>,
) -> Session {
    let logged_in = Session::logged_in(role);
    SessionStore.write(logged_in);
    db::save_api_token(token);
    session.set(logged_in);
    logged_in
}

/// Sign the visitor out everywhere the session is mirrored.
pub fn apply_logout(mut session: Signal<Session>) {
    SessionStore.clear();
    db::save_api_token(None);
    session.set(Session::logged_out());
}
