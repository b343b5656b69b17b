use dioxus::prelude::*;

use crate::app::session::use_session;

/// Permission-based conditional rendering, without navigation.
///
/// Shows children only when the session holds every listed permission,
/// otherwise the fallback (or nothing). With no `acls`, authentication alone
/// is enough. Use this for buttons and form sections inside a view that
/// [`super::RequireAcl`] already guards.
#[component]
pub fn Protected(
    /// Permissions that must all be held
    acls: Option<Vec<String>>,
    /// Content to show when the check fails
    fallback: Option<Element>,
    /// Content to show when the check passes
    children: Element,
) -> Element {
    let session = use_session();
    let current = session.current();

    let is_authorized = {
        let held = current.read();
        let required = acls.unwrap_or_default();
        held.is_authenticated() && required.iter().all(|acl| held.has_permission(acl))
    };

    rsx! {
        if is_authorized {
            {children}
        } else if let Some(fallback_element) = fallback {
            {fallback_element}
        }
    }
}
