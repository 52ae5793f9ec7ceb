//! Session state and the route access-control gate.

pub mod gate;
pub mod session;

pub use gate::{evaluate, role_home, AccessDecision, RoutePolicy, LOGIN_PATH};
pub use session::{Role, Session, SessionStore};
