use dioxus::prelude::*;
use nv_types::auth::LoginRequest;

use crate::{
    app::{
        api::{self, use_api, use_cancel_on_unmount},
        session::use_session,
    },
    components::Layout,
};

#[component]
pub fn LoginPage() -> Element {
    let session = use_session();
    let navigator = use_navigator();
    let api = use_api();
    let cancel = use_cancel_on_unmount();

    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut error_message = use_signal(|| None::<String>);

    // Redirect away from login if already authenticated
    {
        let current = session.current();
        use_effect(move || {
            if current.read().is_authenticated() {
                navigator.push("/");
            }
        });
    }

    let on_submit = move |evt: Event<FormData>| {
        evt.stop_propagation();
        evt.prevent_default();

        if submitting() {
            return;
        }

        error_message.set(None);

        let email_val = email();
        let password_val = password();

        if email_val.trim().is_empty() {
            error_message.set(Some("Email is required".to_string()));
            return;
        }

        if password_val.is_empty() {
            error_message.set(Some("Password is required".to_string()));
            return;
        }

        submitting.set(true);

        let session = session.clone();
        let api = api.clone();
        let cancel = cancel.clone();

        spawn(async move {
            let request = LoginRequest {
                email: email_val,
                password: password_val,
            };

            match api::auth::login(&api, &request, &cancel).await {
                Ok(response) => {
                    // One value-object replace: token, role, acls, and email
                    // land together.
                    session.login(response.into());
                    navigator.push("/");
                }
                Err(err) => {
                    error_message.set(Some(err.to_string()));
                }
            }

            submitting.set(false);
        });
    };

    rsx! {
        Layout {
            div { class: "flex items-center justify-center min-h-[calc(100vh-16rem)]",
                div { class: "card w-96 bg-base-100 shadow-xl",
                    div { class: "card-body",
                        h2 { class: "card-title justify-center mb-4", "Login to NestView" }

                        form { onsubmit: on_submit,
                            class: "flex flex-col gap-4",
                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Email" }
                                }
                                input {
                                    r#type: "email",
                                    placeholder: "you@example.com",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{email}",
                                    oninput: move |evt| email.set(evt.value()),
                                    autocomplete: "email",
                                }
                            }

                            div { class: "form-control w-full max-w-xs flex flex-col gap-2",
                                label { class: "label",
                                    span { class: "label-text", "Password" }
                                }
                                input {
                                    r#type: "password",
                                    placeholder: "password",
                                    class: "input input-bordered w-full max-w-xs",
                                    value: "{password}",
                                    oninput: move |evt| password.set(evt.value()),
                                    autocomplete: "current-password",
                                }
                            }

                            if let Some(error) = error_message() {
                                div { class: "alert alert-error mt-4",
                                    span { "{error}" }
                                }
                            }

                            div { class: "card-actions justify-end mt-6",
                                button {
                                    r#type: "submit",
                                    class: "btn btn-primary w-full",
                                    disabled: submitting(),
                                    if submitting() {
                                        span { class: "loading loading-spinner" }
                                        span { "Logging in" }
                                    } else {
                                        span { "Login" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
