//! Response and request models for the Dreamster REST API, plus the
//! display formatting helpers the views share.

use base64::Engine as _;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::auth::Role;

/// A track as listed in the marketplace and in dashboards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Track {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub artist_id: Option<String>,
    #[serde(default)]
    pub artist_name: Option<String>,
    /// Seconds; 0 when the backend has not probed the file yet.
    #[serde(default)]
    pub duration: u32,
    #[serde(default)]
    pub price_usd: f64,
    #[serde(default)]
    pub cover_url: Option<String>,
    /// Streaming URL; absent until the buyer owns the track or the
    /// artist previews their own upload.
    #[serde(default)]
    pub stream_url: Option<String>,
    #[serde(default)]
    pub published: bool,
    #[serde(default)]
    pub play_count: u64,
}

/// Public artist profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArtistProfile {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub avatar_url: Option<String>,
    #[serde(default)]
    pub track_count: u32,
    #[serde(default)]
    pub follower_count: u64,
}

/// An NFT the fan holds in their wallet/collection.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OwnedTrack {
    pub track: Track,
    #[serde(default)]
    pub token_id: Option<String>,
    #[serde(default)]
    pub purchased_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub purchase_price_usd: f64,
}

/// Extra content attached to a track purchase.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Perk {
    pub id: String,
    pub track_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub id: String,
    pub message: String,
    #[serde(default)]
    pub read: bool,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

/// Server-computed split for a draft price, shown in the upload wizard
/// before publishing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct PricingPreview {
    pub list_price_usd: f64,
    pub platform_fee_usd: f64,
    pub royalty_percent: f64,
    pub artist_net_usd: f64,
}

/// Draft sent by the upload wizard; the id is minted client-side so the
/// wizard steps can save against a stable handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackDraft {
    pub draft_id: String,
    pub title: String,
    #[serde(default)]
    pub genre: Option<String>,
    #[serde(default)]
    pub price_usd: f64,
    #[serde(default)]
    pub royalty_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct AdminStats {
    #[serde(default)]
    pub total_users: u64,
    #[serde(default)]
    pub total_artists: u64,
    #[serde(default)]
    pub pending_tracks: u64,
    #[serde(default)]
    pub total_sales_usd: f64,
}

#[derive(Debug, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct RegisterRequest {
    pub email: String,
    pub password: String,
    pub display_name: String,
    pub role: Role,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthResponse {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Role,
}

/// `mm:ss` readout used by the player bar and track rows.
pub fn format_duration(total_secs: u32) -> String {
    let minutes = total_secs / 60;
    let seconds = total_secs % 60;
    format!("{minutes}:{seconds:02}")
}

/// Dollar display; prices come from the backend as plain floats.
pub fn format_price(usd: f64) -> String {
    if !usd.is_finite() || usd < 0.0 {
        return "$0.00".to_string();
    }
    format!("${usd:.2}")
}

/// Expiry (unix seconds) from a JWT payload, without verifying the
/// signature. Good enough to decide whether a stored token is worth
/// sending.
pub fn token_expiry(token: &str) -> Option<i64> {
    let payload_b64 = token.split('.').nth(1)?;
    let bytes = base64::engine::general_purpose::URL_SAFE_NO_PAD
        .decode(payload_b64)
        .ok()?;
    let payload: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    payload.get("exp")?.as_i64()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duration_formats_with_zero_padded_seconds() {
        assert_eq!(format_duration(0), "0:00");
        assert_eq!(format_duration(59), "0:59");
        assert_eq!(format_duration(61), "1:01");
        assert_eq!(format_duration(237), "3:57");
        assert_eq!(format_duration(3600), "60:00");
    }

    #[test]
    fn price_formats_to_cents() {
        assert_eq!(format_price(12.0), "$12.00");
        assert_eq!(format_price(0.5), "$0.50");
        assert_eq!(format_price(-3.0), "$0.00");
        assert_eq!(format_price(f64::NAN), "$0.00");
    }

    #[test]
    fn token_expiry_reads_exp_claim() {
        // Header/signature are irrelevant; only the middle segment is read.
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(br#"{"sub":"u-1","exp":1767225600}"#);
        let token = format!("eyJhbGciOiJIUzI1NiJ9.{payload}.sig");
        assert_eq!(token_expiry(&token), Some(1767225600));
    }

    #[test]
    fn token_expiry_tolerates_garbage() {
        assert_eq!(token_expiry(""), None);
        assert_eq!(token_expiry("not-a-jwt"), None);
        assert_eq!(token_expiry("a.%%%.c"), None);
    }

    #[test]
    fn track_deserializes_with_missing_optionals() {
        let track: Track =
            serde_json::from_str(r#"{"id":"t-1","title":"Neon Tide"}"#).unwrap();
        assert_eq!(track.duration, 0);
        assert_eq!(track.price_usd, 0.0);
        assert!(track.stream_url.is_none());
        assert!(!track.published);
    }
}
