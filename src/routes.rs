use dioxus::prelude::*;

use crate::components::views::{
    About, AdminDashboard, ArtistPage, Collection, Explore, Home, LoginEmail, MusicianDashboard,
    MusicianReview, NotFound, Notifications, Register, Studio, TrackDetail, Wallet,
};
use crate::components::AppShell;

/// Every page the router knows about. The shell layout wraps all of
/// them so the access gate sees each navigation.
#[derive(Clone, Debug, PartialEq, Routable)]
#[rustfmt::skip]
pub enum Route {
    #[layout(AppShell)]
        #[route("/")]
        Home {},
        #[route("/explore")]
        Explore {},
        #[route("/about")]
        About {},
        #[route("/track/:id")]
        TrackDetail { id: String },
        #[route("/artist/:id")]
        ArtistPage { id: String },
        #[route("/auth/login/email")]
        LoginEmail {},
        #[route("/auth/register")]
        Register {},
        #[route("/collection")]
        Collection {},
        #[route("/wallet")]
        Wallet {},
        #[route("/notifications")]
        Notifications {},
        #[route("/dashboard/musician")]
        MusicianDashboard {},
        #[route("/dashboard/musician/review/:artist_id")]
        MusicianReview { artist_id: String },
        #[route("/dashboard/admin")]
        AdminDashboard {},
        #[route("/studio")]
        Studio {},
        #[route("/:..segments")]
        NotFound { segments: Vec<String> },
}
