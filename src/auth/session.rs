//! Account session as read from the cookie store.
//!
//! The gate never reads cookies itself; the session is read once per
//! navigation and handed to it as a plain value.

use serde::{Deserialize, Serialize};

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;
#[cfg(target_arch = "wasm32")]
use web_sys::HtmlDocument;

const LOGGED_IN_KEY: &str = "isLoggedIn";
const ROLE_KEY: &str = "role";

/// Account category controlling which routes are reachable.
///
/// `Unknown` covers a missing or unrecognized cookie value. It is kept
/// distinct so the admin-home fallback stays visible in code instead of
/// happening through string fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Musician,
    Fan,
    Admin,
    #[default]
    #[serde(other)]
    Unknown,
}

impl Role {
    pub fn parse(value: &str) -> Role {
        match value.trim().to_ascii_lowercase().as_str() {
            "musician" => Role::Musician,
            "fan" => Role::Fan,
            "admin" => Role::Admin,
            _ => Role::Unknown,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Musician => "musician",
            Role::Fan => "fan",
            Role::Admin => "admin",
            Role::Unknown => "unknown",
        }
    }

    /// Whether this role satisfies a route's required role.
    ///
    /// `Unknown` passes an `Admin` requirement: the admin home is also the
    /// fallback target for unset roles, so rejecting it there would
    /// redirect the gate onto itself.
    pub fn satisfies(&self, required: Role) -> bool {
        *self == required || (*self == Role::Unknown && required == Role::Admin)
    }
}

/// Session fields consumed by the gate. Read-only from its perspective.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Session {
    pub is_logged_in: bool,
    pub role: Role,
}

impl Session {
    pub fn logged_out() -> Session {
        Session::default()
    }

    pub fn logged_in(role: Role) -> Session {
        Session {
            is_logged_in: true,
            role,
        }
    }
}

fn parse_cookie_value(cookies: &str, key: &str) -> Option<String> {
    for pair in cookies.split(';') {
        let (name, value) = pair.split_once('=')?;
        if name.trim() == key {
            let value = value.trim();
            if !value.is_empty() {
                return Some(value.to_string());
            }
        }
    }
    None
}

fn session_from_pairs(logged_in: Option<&str>, role: Option<&str>) -> Session {
    // A malformed or missing flag means logged out: default deny.
    let is_logged_in = logged_in.map(|v| v.trim() == "true").unwrap_or(false);
    let role = role.map(Role::parse).unwrap_or(Role::Unknown);
    Session { is_logged_in, role }
}

#[cfg(not(target_arch = "wasm32"))]
static NATIVE_SESSION: Lazy<Mutex<Session>> = Lazy::new(|| Mutex::new(Session::logged_out()));

/// Cookie-backed session store. On wasm this reads and writes
/// `document.cookie`; on native builds it falls back to process memory.
#[derive(Clone, Copy, Default)]
pub struct SessionStore;

impl SessionStore {
    #[cfg(target_arch = "wasm32")]
    fn document() -> Option<HtmlDocument> {
        web_sys::window()?
            .document()?
            .dyn_into::<HtmlDocument>()
            .ok()
    }

    #[cfg(target_arch = "wasm32")]
    pub fn read(&self) -> Session {
        let Some(doc) = Self::document() else {
            return Session::logged_out();
        };
        let cookies = doc.cookie().unwrap_or_default();
        session_from_pairs(
            parse_cookie_value(&cookies, LOGGED_IN_KEY).as_deref(),
            parse_cookie_value(&cookies, ROLE_KEY).as_deref(),
        )
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn read(&self) -> Session {
        *NATIVE_SESSION.lock().unwrap_or_else(|e| e.into_inner())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn write(&self, session: Session) {
        if let Some(doc) = Self::document() {
            let flag = if session.is_logged_in { "true" } else { "false" };
            let _ = doc.set_cookie(&format!("{LOGGED_IN_KEY}={flag}; path=/"));
            let _ = doc.set_cookie(&format!("{ROLE_KEY}={}; path=/", session.role.as_str()));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn write(&self, session: Session) {
        *NATIVE_SESSION.lock().unwrap_or_else(|e| e.into_inner()) = session;
    }

    #[cfg(target_arch = "wasm32")]
    pub fn clear(&self) {
        if let Some(doc) = Self::document() {
            let expired = "expires=Thu, 01 Jan 1970 00:00:00 GMT; path=/";
            let _ = doc.set_cookie(&format!("{LOGGED_IN_KEY}=; {expired}"));
            let _ = doc.set_cookie(&format!("{ROLE_KEY}=; {expired}"));
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn clear(&self) {
        *NATIVE_SESSION.lock().unwrap_or_else(|e| e.into_inner()) = Session::logged_out();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parses_known_values() {
        assert_eq!(Role::parse("musician"), Role::Musician);
        assert_eq!(Role::parse(" Fan "), Role::Fan);
        assert_eq!(Role::parse("ADMIN"), Role::Admin);
    }

    #[test]
    fn role_parse_defaults_to_unknown() {
        assert_eq!(Role::parse(""), Role::Unknown);
        assert_eq!(Role::parse("moderator"), Role::Unknown);
    }

    #[test]
    fn unknown_satisfies_admin_only() {
        assert!(Role::Unknown.satisfies(Role::Admin));
        assert!(!Role::Unknown.satisfies(Role::Musician));
        assert!(!Role::Unknown.satisfies(Role::Fan));
        assert!(Role::Fan.satisfies(Role::Fan));
        assert!(!Role::Fan.satisfies(Role::Admin));
    }

    #[test]
    fn cookie_values_are_trimmed_and_matched_exactly() {
        let cookies = "theme=dark; isLoggedIn=true ; role=musician";
        assert_eq!(
            parse_cookie_value(cookies, "isLoggedIn").as_deref(),
            Some("true")
        );
        assert_eq!(
            parse_cookie_value(cookies, "role").as_deref(),
            Some("musician")
        );
        assert_eq!(parse_cookie_value(cookies, "isLogged"), None);
    }

    #[test]
    fn malformed_session_means_logged_out() {
        let session = session_from_pairs(Some("yes"), Some("musician"));
        assert!(!session.is_logged_in);

        let session = session_from_pairs(None, None);
        assert!(!session.is_logged_in);
        assert_eq!(session.role, Role::Unknown);
    }

    #[test]
    fn well_formed_session_round_trips() {
        let session = session_from_pairs(Some("true"), Some("fan"));
        assert!(session.is_logged_in);
        assert_eq!(session.role, Role::Fan);
    }
}
