use dioxus::prelude::*;

use crate::{app::session::use_session, components::Layout};

/// Logout is purely local: clear the stored session, then leave.
#[component]
pub fn LogoutPage() -> Element {
    let session = use_session();
    let navigator = use_navigator();

    use_effect(move || {
        session.logout();
        navigator.replace("/login");
    });

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body text-center space-y-4",
                        h2 { class: "card-title justify-center", "Logging out" }
                        span { class: "loading loading-spinner loading-lg mx-auto" }
                        p { "Signing you out..." }
                    }
                }
            }
        }
    }
}
