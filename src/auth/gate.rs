//! Access-control gate evaluated once per navigation.
//!
//! Pure decision function over (path, session, policy): no I/O, no
//! panics, always produces a decision. The caller translates
//! `RedirectTo` into a router replace.

use crate::auth::session::{Role, Session};

/// Where unauthenticated visitors of protected pages are sent.
pub const LOGIN_PATH: &str = "/auth/login/email";

/// Path prefixes reachable without authentication.
const PUBLIC_PREFIXES: &[&str] = &[
    "/",
    "/explore",
    "/track",
    "/artist",
    "/about",
    "/auth/login",
    "/auth/register",
];

/// Public prefixes that a logged-in visitor is bounced away from.
const AUTH_PAGE_PREFIXES: &[&str] = &["/auth/login", "/auth/register"];

/// Redirect targets per role, total by construction.
#[derive(Debug, Clone, Copy)]
pub struct RoleFallback {
    pub musician: &'static str,
    pub fan: &'static str,
    pub admin: &'static str,
    pub unknown: &'static str,
}

impl RoleFallback {
    fn for_role(&self, role: Role) -> &'static str {
        match role {
            Role::Musician => self.musician,
            Role::Fan => self.fan,
            Role::Admin => self.admin,
            Role::Unknown => self.unknown,
        }
    }
}

const HOME_FALLBACK: RoleFallback = RoleFallback {
    musician: "/dashboard/musician",
    fan: "/collection",
    admin: "/dashboard/admin",
    unknown: "/dashboard/admin",
};

/// One role-scoped prefix rule.
#[derive(Debug, Clone, Copy)]
pub struct RoleScope {
    pub prefix: &'static str,
    pub required_role: Role,
    pub fallback: RoleFallback,
}

/// Role-scoped rules, most-specific prefix first. The review entry must
/// stay ahead of the broader musician rule: it is the one nested
/// sub-path under `/dashboard/musician` that admins reach.
const ROLE_SCOPED: &[RoleScope] = &[
    RoleScope {
        prefix: "/dashboard/musician/review",
        required_role: Role::Admin,
        fallback: HOME_FALLBACK,
    },
    RoleScope {
        prefix: "/dashboard/musician",
        required_role: Role::Musician,
        fallback: HOME_FALLBACK,
    },
    RoleScope {
        prefix: "/dashboard/admin",
        required_role: Role::Admin,
        fallback: HOME_FALLBACK,
    },
    RoleScope {
        prefix: "/studio",
        required_role: Role::Musician,
        fallback: HOME_FALLBACK,
    },
];

/// The static table the gate evaluates against.
#[derive(Debug, Clone, Copy)]
pub struct RoutePolicy {
    pub public_prefixes: &'static [&'static str],
    pub auth_page_prefixes: &'static [&'static str],
    pub role_scoped: &'static [RoleScope],
}

impl RoutePolicy {
    pub const fn canonical() -> RoutePolicy {
        RoutePolicy {
            public_prefixes: PUBLIC_PREFIXES,
            auth_page_prefixes: AUTH_PAGE_PREFIXES,
            role_scoped: ROLE_SCOPED,
        }
    }

    fn is_public(&self, path: &str) -> bool {
        self.public_prefixes
            .iter()
            .any(|prefix| prefix_matches(prefix, path))
    }

    fn is_auth_page(&self, path: &str) -> bool {
        self.auth_page_prefixes
            .iter()
            .any(|prefix| prefix_matches(prefix, path))
    }
}

/// Decision for one navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Allow,
    RedirectTo(&'static str),
}

/// Landing page per role after login or when bounced off auth pages.
pub fn role_home(role: Role) -> &'static str {
    HOME_FALLBACK.for_role(role)
}

/// Prefix match on path-segment boundaries: `/user` matches `/user` and
/// `/user/42` but never `/user2`. The bare root only matches itself.
fn prefix_matches(prefix: &str, path: &str) -> bool {
    if prefix == "/" {
        return path == "/";
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}

/// Evaluate a navigation against the policy. Rules in fixed order;
/// first match wins.
pub fn evaluate(path: &str, session: Session, policy: &RoutePolicy) -> AccessDecision {
    let is_public = policy.is_public(path);
    let is_auth_page = policy.is_auth_page(path);

    // 1. Public pages pass, except auth pages for visitors who are
    //    already signed in (rule 3 takes those).
    if is_public && !(session.is_logged_in && is_auth_page) {
        return AccessDecision::Allow;
    }

    // 2. Default deny: everything not explicitly public needs a login.
    if !session.is_logged_in {
        return AccessDecision::RedirectTo(LOGIN_PATH);
    }

    // 3. Signed-in visitors have no business on login/register.
    if is_auth_page {
        return AccessDecision::RedirectTo(role_home(session.role));
    }

    // 4. Role-scoped prefixes, most-specific first.
    for scope in policy.role_scoped {
        if prefix_matches(scope.prefix, path) {
            if session.role.satisfies(scope.required_role) {
                return AccessDecision::Allow;
            }
            return AccessDecision::RedirectTo(scope.fallback.for_role(session.role));
        }
    }

    // 5. Authenticated, unscoped.
    AccessDecision::Allow
}

#[cfg(test)]
mod tests {
    use super::*;

    const POLICY: RoutePolicy = RoutePolicy::canonical();

    fn gate(path: &str, session: Session) -> AccessDecision {
        evaluate(path, session, &POLICY)
    }

    const ALL_ROLES: [Role; 4] = [Role::Musician, Role::Fan, Role::Admin, Role::Unknown];

    #[test]
    fn default_deny_redirects_to_login() {
        for path in ["/collection", "/wallet", "/dashboard/musician", "/studio/upload"] {
            assert_eq!(
                gate(path, Session::logged_out()),
                AccessDecision::RedirectTo(LOGIN_PATH),
                "path {path}"
            );
        }
    }

    #[test]
    fn public_pages_never_bounce_on_auth_state() {
        for path in ["/", "/explore", "/track/abc-123", "/artist/9", "/about"] {
            assert_eq!(gate(path, Session::logged_out()), AccessDecision::Allow);
            for role in ALL_ROLES {
                assert_eq!(
                    gate(path, Session::logged_in(role)),
                    AccessDecision::Allow,
                    "path {path}, role {role:?}"
                );
            }
        }
    }

    #[test]
    fn auth_pages_open_to_visitors_closed_to_members() {
        assert_eq!(
            gate("/auth/login/email", Session::logged_out()),
            AccessDecision::Allow
        );
        assert_eq!(
            gate("/auth/login/email", Session::logged_in(Role::Musician)),
            AccessDecision::RedirectTo("/dashboard/musician")
        );
        assert_eq!(
            gate("/auth/register", Session::logged_in(Role::Fan)),
            AccessDecision::RedirectTo("/collection")
        );
        assert_eq!(
            gate("/auth/login/email", Session::logged_in(Role::Unknown)),
            AccessDecision::RedirectTo("/dashboard/admin")
        );
    }

    #[test]
    fn role_homes_never_redirect_their_own_role() {
        for role in ALL_ROLES {
            assert_eq!(
                gate(role_home(role), Session::logged_in(role)),
                AccessDecision::Allow,
                "role {role:?}"
            );
        }
    }

    #[test]
    fn role_scoped_prefixes_exclude_other_roles() {
        assert_eq!(
            gate("/dashboard/musician", Session::logged_in(Role::Fan)),
            AccessDecision::RedirectTo("/collection")
        );
        assert_eq!(
            gate("/dashboard/musician/tracks", Session::logged_in(Role::Admin)),
            AccessDecision::RedirectTo("/dashboard/admin")
        );
        assert_eq!(
            gate("/dashboard/admin", Session::logged_in(Role::Musician)),
            AccessDecision::RedirectTo("/dashboard/musician")
        );
        assert_eq!(
            gate("/studio", Session::logged_in(Role::Fan)),
            AccessDecision::RedirectTo("/collection")
        );
    }

    #[test]
    fn fallback_targets_are_allowed_for_their_role() {
        // Property 4 closes the loop with property 3: wherever a role is
        // sent, that page must let it in.
        for scope in POLICY.role_scoped {
            for role in ALL_ROLES {
                if role.satisfies(scope.required_role) {
                    continue;
                }
                let target = scope.fallback.for_role(role);
                assert_eq!(
                    gate(target, Session::logged_in(role)),
                    AccessDecision::Allow,
                    "scope {}, role {role:?}",
                    scope.prefix
                );
            }
        }
    }

    #[test]
    fn nested_review_path_admits_admins_only() {
        assert_eq!(
            gate(
                "/dashboard/musician/review/m-42",
                Session::logged_in(Role::Admin)
            ),
            AccessDecision::Allow
        );
        assert_eq!(
            gate(
                "/dashboard/musician/review/m-42",
                Session::logged_in(Role::Musician)
            ),
            AccessDecision::RedirectTo("/dashboard/musician")
        );
    }

    #[test]
    fn unknown_role_is_treated_as_admin() {
        assert_eq!(
            gate("/dashboard/admin", Session::logged_in(Role::Unknown)),
            AccessDecision::Allow
        );
        assert_eq!(
            gate("/dashboard/musician", Session::logged_in(Role::Unknown)),
            AccessDecision::RedirectTo("/dashboard/admin")
        );
    }

    #[test]
    fn prefix_matching_respects_segment_boundaries() {
        assert!(prefix_matches("/track", "/track"));
        assert!(prefix_matches("/track", "/track/1"));
        assert!(!prefix_matches("/track", "/tracks"));
        assert!(!prefix_matches("/user", "/user2"));
        assert!(prefix_matches("/", "/"));
        assert!(!prefix_matches("/", "/explore"));

        // A path that merely shares characters with a public prefix is
        // still protected.
        assert_eq!(
            gate("/trackstats", Session::logged_out()),
            AccessDecision::RedirectTo(LOGIN_PATH)
        );
    }

    #[test]
    fn scoped_table_is_ordered_most_specific_first() {
        for pair in POLICY.role_scoped.windows(2) {
            let (a, b) = (pair[0].prefix, pair[1].prefix);
            if prefix_matches(b, a) {
                assert!(
                    a.len() > b.len(),
                    "{a} must be listed before its parent {b}"
                );
            }
        }
    }

    #[test]
    fn decisions_are_deterministic() {
        let session = Session::logged_in(Role::Fan);
        let first = gate("/dashboard/musician", session);
        for _ in 0..10 {
            assert_eq!(gate("/dashboard/musician", session), first);
        }
    }
}
