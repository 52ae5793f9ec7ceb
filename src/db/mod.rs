//! Local settings persistence.
//!
//! Marketplace data lives on the backend; the only thing worth keeping
//! on-device is player preferences. Browser builds use LocalStorage,
//! native builds keep a process-local copy.

use serde::{Deserialize, Serialize};

#[cfg(target_arch = "wasm32")]
use gloo_storage::{LocalStorage, Storage};

#[cfg(not(target_arch = "wasm32"))]
use once_cell::sync::Lazy;
#[cfg(not(target_arch = "wasm32"))]
use std::sync::Mutex;

#[cfg(target_arch = "wasm32")]
const SETTINGS_KEY: &str = "dreamster.app_settings";
#[cfg(target_arch = "wasm32")]
const TOKEN_KEY: &str = "dreamster.api_token";

/// Error type for settings operations on native platforms
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug)]
pub struct DbError(String);

#[cfg(not(target_arch = "wasm32"))]
impl DbError {
    pub fn new(msg: impl Into<String>) -> Self {
        Self(msg.into())
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::fmt::Display for DbError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl std::error::Error for DbError {}

/// Player preferences persisted between visits.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    pub volume: f64,
    pub theme: String,
    #[serde(default)]
    pub muted: bool,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            volume: 0.8,
            theme: "dark".to_string(),
            muted: false,
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
static NATIVE_STORE: Lazy<Mutex<(AppSettings, Option<String>)>> =
    Lazy::new(|| Mutex::new((AppSettings::default(), None)));

#[cfg(target_arch = "wasm32")]
pub fn load_settings() -> Result<AppSettings, String> {
    match LocalStorage::get::<AppSettings>(SETTINGS_KEY) {
        Ok(settings) => Ok(settings),
        Err(gloo_storage::errors::StorageError::KeyNotFound(_)) => Ok(AppSettings::default()),
        Err(e) => Err(e.to_string()),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_settings() -> Result<AppSettings, DbError> {
    Ok(NATIVE_STORE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .0
        .clone())
}

#[cfg(target_arch = "wasm32")]
pub fn save_settings(settings: &AppSettings) -> Result<(), String> {
    LocalStorage::set(SETTINGS_KEY, settings).map_err(|e| e.to_string())
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_settings(settings: &AppSettings) -> Result<(), DbError> {
    NATIVE_STORE.lock().unwrap_or_else(|e| e.into_inner()).0 = settings.clone();
    Ok(())
}

#[cfg(target_arch = "wasm32")]
pub fn load_api_token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok()
}

#[cfg(not(target_arch = "wasm32"))]
pub fn load_api_token() -> Option<String> {
    NATIVE_STORE
        .lock()
        .unwrap_or_else(|e| e.into_inner())
        .1
        .clone()
}

#[cfg(target_arch = "wasm32")]
pub fn save_api_token(token: Option<&str>) {
    match token {
        Some(token) => {
            let _ = LocalStorage::set(TOKEN_KEY, token);
        }
        None => LocalStorage::delete(TOKEN_KEY),
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn save_api_token(token: Option<&str>) {
    NATIVE_STORE.lock().unwrap_or_else(|e| e.into_inner()).1 = token.map(str::to_string);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn settings_default_to_sane_player_values() {
        let settings = AppSettings::default();
        assert!(settings.volume > 0.0 && settings.volume <= 1.0);
        assert!(!settings.muted);
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_store_round_trips() {
        let mut settings = AppSettings::default();
        settings.volume = 0.35;
        save_settings(&settings).unwrap();
        assert_eq!(load_settings().unwrap().volume, 0.35);

        save_api_token(Some("tok-1"));
        assert_eq!(load_api_token().as_deref(), Some("tok-1"));
        save_api_token(None);
        assert_eq!(load_api_token(), None);
    }
}
