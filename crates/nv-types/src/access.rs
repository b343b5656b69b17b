//! Access decisions for protected views.

use crate::session::Session;

/// Where the router should send a visitor that failed the access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RedirectTarget {
    Login,
    Unauthorized,
}

impl RedirectTarget {
    pub fn path(&self) -> &'static str {
        match self {
            RedirectTarget::Login => "/login",
            RedirectTarget::Unauthorized => "/unauthorized",
        }
    }
}

/// Decide whether a view guarded by `required` may be entered.
///
/// Fails closed: an anonymous session redirects to login no matter what the
/// view requires. An authenticated session missing any required permission
/// redirects to the unauthorized page. Membership is exact string equality
/// and independent of the order of `required`.
///
/// Purely local; the cached permissions are trusted until the next login.
pub fn evaluate<S: AsRef<str>>(session: &Session, required: &[S]) -> Option<RedirectTarget> {
    if !session.is_authenticated() {
        return Some(RedirectTarget::Login);
    }

    if required.iter().all(|acl| session.has_permission(acl.as_ref())) {
        None
    } else {
        Some(RedirectTarget::Unauthorized)
    }
}

#[cfg(test)]
#[path = "access_tests.rs"]
mod tests;
