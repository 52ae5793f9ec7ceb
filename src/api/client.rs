//! Thin client over the Dreamster REST backend.
//!
//! Every call is an independent request; retries and cross-request
//! coordination are the backend's problem. Errors collapse to strings
//! the views can show inline.

use once_cell::sync::Lazy;
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::api::models::*;
use crate::auth::Role;

static HTTP_CLIENT: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

const CLIENT_NAME: &str = "Dreamster";
const DEFAULT_BASE_URL: &str = "https://api.dreamster.app/v1";

/// Where the client points and who it speaks as.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApiConfig {
    pub base_url: String,
    pub token: Option<String>,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> ApiConfig {
        ApiConfig {
            base_url: base_url.into(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> ApiConfig {
        self.token = Some(token.into());
        self
    }

    /// Whether the stored token is present and not past its `exp` claim.
    pub fn token_is_fresh(&self, now_unix: i64) -> bool {
        match self.token.as_deref() {
            Some(token) => token_expiry(token).map(|exp| exp > now_unix).unwrap_or(true),
            None => false,
        }
    }
}

pub struct DreamsterClient {
    pub config: ApiConfig,
}

impl DreamsterClient {
    pub fn new(config: ApiConfig) -> Self {
        Self { config }
    }

    pub fn with_default_base(token: Option<String>) -> Self {
        Self {
            config: ApiConfig {
                base_url: DEFAULT_BASE_URL.to_string(),
                token,
            },
        }
    }

    fn build_url(&self, endpoint: &str, params: &[(&str, &str)]) -> String {
        let mut url = format!(
            "{}/{}",
            self.config.base_url.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        );
        let mut separator = '?';
        for (key, value) in params {
            url.push(separator);
            url.push_str(key);
            url.push('=');
            url.push_str(&urlencoding::encode(value));
            separator = '&';
        }
        url
    }

    fn request(&self, method: reqwest::Method, url: String) -> reqwest::RequestBuilder {
        let mut builder = HTTP_CLIENT
            .request(method, url)
            .header("X-Client", CLIENT_NAME);
        if let Some(token) = &self.config.token {
            builder = builder.bearer_auth(token);
        }
        builder
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        endpoint: &str,
        params: &[(&str, &str)],
    ) -> Result<T, String> {
        let response = self
            .request(reqwest::Method::GET, self.build_url(endpoint, params))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::parse(response).await
    }

    async fn post_json<T: DeserializeOwned, B: Serialize>(
        &self,
        endpoint: &str,
        body: &B,
    ) -> Result<T, String> {
        let response = self
            .request(reqwest::Method::POST, self.build_url(endpoint, &[]))
            .json(body)
            .send()
            .await
            .map_err(|e| e.to_string())?;
        Self::parse(response).await
    }

    async fn parse<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, String> {
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            if body.is_empty() {
                return Err(format!("request failed: {status}"));
            }
            return Err(format!("request failed: {status}: {body}"));
        }
        response.json::<T>().await.map_err(|e| e.to_string())
    }

    // ── auth ────────────────────────────────────────────────────────

    pub async fn login_email(&self, email: &str, password: &str) -> Result<AuthResponse, String> {
        let payload = LoginRequest {
            email: email.to_string(),
            password: password.to_string(),
        };
        self.post_json("auth/login/email", &payload).await
    }

    pub async fn register(
        &self,
        email: &str,
        password: &str,
        display_name: &str,
        role: Role,
    ) -> Result<AuthResponse, String> {
        let payload = RegisterRequest {
            email: email.to_string(),
            password: password.to_string(),
            display_name: display_name.to_string(),
            role,
        };
        self.post_json("auth/register", &payload).await
    }

    // ── tracks ──────────────────────────────────────────────────────

    pub async fn get_tracks(&self, query: Option<&str>, limit: u32) -> Result<Vec<Track>, String> {
        let limit = limit.to_string();
        let mut params: Vec<(&str, &str)> = vec![("limit", limit.as_str())];
        if let Some(q) = query.filter(|q| !q.trim().is_empty()) {
            params.push(("q", q));
        }
        self.get_json("tracks", &params).await
    }

    pub async fn get_track(&self, track_id: &str) -> Result<Track, String> {
        self.get_json(&format!("tracks/{track_id}"), &[]).await
    }

    pub async fn get_artist(&self, artist_id: &str) -> Result<ArtistProfile, String> {
        self.get_json(&format!("artists/{artist_id}"), &[]).await
    }

    pub async fn get_artist_tracks(&self, artist_id: &str) -> Result<Vec<Track>, String> {
        self.get_json(&format!("artists/{artist_id}/tracks"), &[])
            .await
    }

    /// The artist's own uploads, drafts included.
    pub async fn get_my_tracks(&self) -> Result<Vec<Track>, String> {
        self.get_json("me/tracks", &[]).await
    }

    // ── upload wizard ───────────────────────────────────────────────

    pub async fn save_draft(&self, draft: &TrackDraft) -> Result<TrackDraft, String> {
        self.post_json("tracks/drafts", draft).await
    }

    pub async fn pricing_preview(&self, price_usd: f64) -> Result<PricingPreview, String> {
        let price = format!("{price_usd:.2}");
        self.get_json("tracks/pricing-preview", &[("price", price.as_str())])
            .await
    }

    pub async fn publish_track(&self, draft_id: &str) -> Result<Track, String> {
        self.post_json(&format!("tracks/drafts/{draft_id}/publish"), &())
            .await
    }

    // ── payments / collection ───────────────────────────────────────

    pub async fn purchase_track(&self, track_id: &str) -> Result<OwnedTrack, String> {
        self.post_json(&format!("payments/purchase/{track_id}"), &())
            .await
    }

    pub async fn get_collection(&self) -> Result<Vec<OwnedTrack>, String> {
        self.get_json("me/collection", &[]).await
    }

    pub async fn get_perks(&self, track_id: &str) -> Result<Vec<Perk>, String> {
        self.get_json(&format!("tracks/{track_id}/perks"), &[])
            .await
    }

    // ── notifications ───────────────────────────────────────────────

    pub async fn get_notifications(&self) -> Result<Vec<Notification>, String> {
        self.get_json("me/notifications", &[]).await
    }

    pub async fn mark_notification_read(&self, id: &str) -> Result<(), String> {
        let _: serde_json::Value = self
            .post_json(&format!("me/notifications/{id}/read"), &())
            .await?;
        Ok(())
    }

    // ── admin ───────────────────────────────────────────────────────

    pub async fn admin_stats(&self) -> Result<AdminStats, String> {
        self.get_json("admin/stats", &[]).await
    }

    pub async fn admin_pending_tracks(&self) -> Result<Vec<Track>, String> {
        self.get_json("admin/tracks", &[("status", "pending")]).await
    }

    pub async fn admin_review_track(&self, track_id: &str, approve: bool) -> Result<(), String> {
        let verdict = if approve { "approve" } else { "reject" };
        let _: serde_json::Value = self
            .post_json(&format!("admin/tracks/{track_id}/{verdict}"), &())
            .await?;
        Ok(())
    }

    pub async fn admin_musician_profile(&self, artist_id: &str) -> Result<ArtistProfile, String> {
        self.get_json(&format!("admin/musicians/{artist_id}"), &[])
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_url_joins_and_encodes() {
        let client = DreamsterClient::new(ApiConfig::new("https://api.test/v1/"));
        assert_eq!(
            client.build_url("tracks", &[]),
            "https://api.test/v1/tracks"
        );
        assert_eq!(
            client.build_url("/tracks", &[("q", "lo fi"), ("limit", "20")]),
            "https://api.test/v1/tracks?q=lo%20fi&limit=20"
        );
    }

    #[test]
    fn token_freshness_follows_exp_claim() {
        use base64::Engine as _;
        let payload = base64::engine::general_purpose::URL_SAFE_NO_PAD
            .encode(br#"{"exp":1000}"#);
        let token = format!("h.{payload}.s");

        let config = ApiConfig::new("https://api.test").with_token(token);
        assert!(config.token_is_fresh(999));
        assert!(!config.token_is_fresh(1000));

        // Opaque (non-JWT) tokens are assumed usable.
        let config = ApiConfig::new("https://api.test").with_token("opaque-token");
        assert!(config.token_is_fresh(0));

        assert!(!ApiConfig::new("https://api.test").token_is_fresh(0));
    }
}
