use dioxus::prelude::*;
use nv_types::acl;

use crate::app::components::Protected;
use crate::app::session::use_session;

#[component]
pub fn NavBar() -> Element {
    let session = use_session();
    let current = session.current();
    let logged_in = current.read().is_authenticated();
    let email = current.read().email.clone();

    rsx! {
        div { class: "navbar bg-base-200 shadow-sm",
            div { class: "flex-1",
                a { class: "btn btn-ghost text-xl", href: "/", "NestView" }
                ul { class: "menu menu-horizontal px-1",
                    if logged_in {
                        Protected {
                            acls: vec![acl::VIEW_PROPERTY.to_string()],
                            li { Link { to: crate::Routes::PropertiesPage {}, "Listings" } }
                        }
                        Protected {
                            acls: vec![acl::VIEW_MESSAGES.to_string()],
                            li { Link { to: crate::Routes::MessagesPage {}, "Messages" } }
                        }
                        Protected {
                            acls: vec![acl::VIEW_APPOINTMENTS.to_string()],
                            li { Link { to: crate::Routes::AppointmentsPage {}, "Appointments" } }
                        }
                    }
                }
            }

            div { class: "flex-none gap-2",
                if logged_in {
                    if let Some(email) = email {
                        span { class: "text-sm opacity-70", "{email}" }
                    }
                    Link { class: "btn btn-ghost btn-sm", to: crate::Routes::LogoutPage {}, "Logout" }
                } else {
                    Link { class: "btn btn-primary btn-sm", to: crate::Routes::LoginPage {}, "Login" }
                }
            }
        }
    }
}
