use dioxus::prelude::*;

use crate::components::Layout;

/// Landing page for authenticated users missing a required permission.
#[component]
pub fn UnauthorizedPage() -> Element {
    rsx! {
        Layout {
            div { class: "hero min-h-[calc(100vh-16rem)] bg-base-200",
                div { class: "hero-content text-center",
                    div {
                        h1 { class: "text-5xl font-bold", "403" }
                        p { class: "py-6", "You don't have permission to access this page." }
                        Link { to: crate::Routes::PropertiesPage {}, class: "btn btn-primary", "Go Home" }
                    }
                }
            }
        }
    }
}
