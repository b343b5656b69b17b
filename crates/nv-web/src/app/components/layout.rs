use dioxus::prelude::*;

use crate::app::components::NavBar;

#[component]
pub fn Layout(children: Element) -> Element {
    rsx! {
        div { class: "nv-layout min-h-screen flex flex-col",
            header {
                NavBar {}
            }
            main {
                class: "nv-main flex-grow p-4", {
                    children
                }
            }
        }
    }
}
