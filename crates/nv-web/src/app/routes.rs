use dioxus::prelude::*;

use crate::{
    components::Layout,
    pages::{
        AppointmentsPage, LoginPage, LogoutPage, MessagesPage, PropertiesPage, PropertyDetailPage, UnauthorizedPage,
    },
};

#[component]
pub fn AppRouter() -> Element {
    rsx! {
        Router::<Routes> {}
    }
}

#[derive(Clone, Routable, PartialEq)]
pub enum Routes {
    #[route("/")]
    PropertiesPage {},
    #[route("/property/:id")]
    PropertyDetailPage { id: i64 },
    #[route("/messages")]
    MessagesPage {},
    #[route("/appointments")]
    AppointmentsPage {},
    #[route("/login")]
    LoginPage {},
    #[route("/logout")]
    LogoutPage {},
    #[route("/unauthorized")]
    UnauthorizedPage {},
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
pub fn NotFound(route: Vec<String>) -> Element {
    let path = route.join("/");
    rsx!(Layout { p { "Not found: /{path}" } })
}
