use dioxus::prelude::*;

use crate::app::{self, config::ApiConfig, session::SessionProvider};

/// Root shell: wraps the router and global providers.
#[component]
pub fn app_root() -> Element {
    use_context_provider(ApiConfig::from_env);

    rsx! {
        document::Title { "NestView" }
        document::Stylesheet { href: asset!("/assets/main.css") }
        SessionProvider { children: rsx!( app::routes::AppRouter {} ) }
    }
}
