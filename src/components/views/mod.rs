//! Routed page views.

mod about;
mod artist;
mod collection;
mod dashboard_admin;
mod dashboard_musician;
mod explore;
mod home;
mod login_email;
mod musician_review;
mod not_found;
mod notifications;
mod register;
mod studio;
mod track_detail;
mod track_row;
mod wallet;

pub use about::About;
pub use artist::ArtistPage;
pub use collection::Collection;
pub use dashboard_admin::AdminDashboard;
pub use dashboard_musician::MusicianDashboard;
pub use explore::Explore;
pub use home::Home;
pub use login_email::LoginEmail;
pub use musician_review::MusicianReview;
pub use not_found::NotFound;
pub use notifications::Notifications;
pub use register::Register;
pub use studio::Studio;
pub use track_detail::TrackDetail;
pub use track_row::TrackRow;
pub use wallet::Wallet;

use crate::api::DreamsterClient;
use crate::db;

/// Client for the signed-in visitor, or anonymous when no token is
/// stored.
pub(super) fn api_client() -> DreamsterClient {
    DreamsterClient::with_default_base(db::load_api_token())
}
