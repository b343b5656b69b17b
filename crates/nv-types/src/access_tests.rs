//! Unit tests for access-guard decisions.

use super::*;

fn session(token: Option<&str>, acls: &[&str]) -> Session {
    Session {
        token: token.map(str::to_string),
        role: Some("CLIENT".to_string()),
        acls: acls.iter().map(|a| a.to_string()).collect(),
        email: Some("user@example.com".to_string()),
    }
}

#[test]
fn missing_token_always_redirects_to_login() {
    let anonymous = session(None, &["view_property", "edit_property"]);

    let no_requirements: &[&str] = &[];
    assert_eq!(evaluate(&anonymous, no_requirements), Some(RedirectTarget::Login));
    assert_eq!(evaluate(&anonymous, &["view_property"]), Some(RedirectTarget::Login));
    assert_eq!(evaluate(&anonymous, &["anything"]), Some(RedirectTarget::Login));
}

#[test]
fn token_with_no_requirements_passes() {
    let authenticated = session(Some("tok"), &[]);
    let no_requirements: &[&str] = &[];
    assert_eq!(evaluate(&authenticated, no_requirements), None);
}

#[test]
fn all_requirements_held_passes() {
    let s = session(Some("tok"), &["view_property", "edit_property"]);
    assert_eq!(evaluate(&s, &["edit_property"]), None);
    assert_eq!(evaluate(&s, &["view_property", "edit_property"]), None);
}

#[test]
fn missing_requirement_redirects_to_unauthorized() {
    let s = session(Some("tok"), &["view_property"]);
    assert_eq!(evaluate(&s, &["edit_property"]), Some(RedirectTarget::Unauthorized));
    assert_eq!(
        evaluate(&s, &["view_property", "edit_property"]),
        Some(RedirectTarget::Unauthorized)
    );
}

#[test]
fn decision_is_order_independent() {
    let s = session(Some("tok"), &["a", "b", "c"]);
    assert_eq!(evaluate(&s, &["c", "a", "b"]), None);

    let partial = session(Some("tok"), &["b"]);
    assert_eq!(evaluate(&partial, &["a", "b"]), Some(RedirectTarget::Unauthorized));
    assert_eq!(evaluate(&partial, &["b", "a"]), Some(RedirectTarget::Unauthorized));
}

#[test]
fn redirect_paths() {
    assert_eq!(RedirectTarget::Login.path(), "/login");
    assert_eq!(RedirectTarget::Unauthorized.path(), "/unauthorized");
}
