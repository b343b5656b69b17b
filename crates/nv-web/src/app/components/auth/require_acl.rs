use dioxus::prelude::*;
use nv_types::access::evaluate;

use crate::app::session::use_session;

/// Route guard requiring an authenticated session and optional permissions.
///
/// The check runs once when the view mounts: an anonymous visitor is
/// replaced to `/login`, an authenticated one missing a required permission
/// is replaced to `/unauthorized`. Navigation uses replace so the protected
/// URL never lands in history. The decision is purely local; cached
/// permissions are trusted until the next login.
///
/// # Examples
///
/// ```text
/// // Require authentication only
/// RequireAcl { PropertiesPage {} }
///
/// // Require specific permissions
/// RequireAcl { acls: vec![acl::VIEW_MESSAGES.into()], MessagesPage {} }
/// ```
#[component]
pub fn RequireAcl(
    /// Permissions that must all be held; empty means token-only
    acls: Option<Vec<String>>,
    /// Page content to show when authorized
    children: Element,
) -> Element {
    let session = use_session();
    let nav = navigator();

    // Evaluated once per mount; later permission changes take effect on the
    // next navigation, not in place.
    let decision = use_hook(|| {
        let required = acls.clone().unwrap_or_default();
        evaluate(&session.session(), &required)
    });

    use_effect(move || {
        if let Some(target) = decision {
            nav.replace(target.path());
        }
    });

    if decision.is_some() {
        // Redirect in flight; keep the protected content unrendered.
        return rsx! {
            div {}
        };
    }

    rsx! {
        {children}
    }
}
