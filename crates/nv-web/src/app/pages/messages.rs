use dioxus::prelude::*;
use nv_types::{acl, messages::Conversation, messages::SendMessageRequest};

use crate::{
    app::{
        api::{messages, use_api, use_cancel_on_unmount},
        session::use_session,
    },
    components::{Layout, RequireAcl},
};

#[component]
pub fn MessagesPage() -> Element {
    rsx! {
        Layout {
            RequireAcl {
                acls: vec![acl::VIEW_MESSAGES.to_string()],
                Inbox {}
            }
        }
    }
}

#[component]
fn Inbox() -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();
    let session = use_session();

    let me = session.session().email.unwrap_or_default();

    let conversations = use_resource({
        let api = api.clone();
        let cancel = cancel.clone();
        let me = me.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let me = me.clone();
            async move { messages::conversations(&api, &me, &cancel).await }
        }
    });

    let mut selected = use_signal(|| None::<Conversation>);

    rsx! {
        div { class: "grid grid-cols-1 lg:grid-cols-3 gap-4",
            div { class: "card bg-base-100 shadow lg:col-span-1",
                div { class: "card-body",
                    h2 { class: "card-title", "Conversations" }
                    match &*conversations.read() {
                        Some(Ok(items)) => rsx! {
                            if items.is_empty() {
                                p { class: "opacity-70", "No conversations yet" }
                            } else {
                                ul { class: "menu p-0",
                                    for conversation in items.iter() {
                                        li {
                                            a {
                                                onclick: {
                                                    let conversation = conversation.clone();
                                                    move |_| selected.set(Some(conversation.clone()))
                                                },
                                                div { class: "flex flex-col items-start",
                                                    span { class: "font-semibold",
                                                        {conversation.other_party(&me)}
                                                    }
                                                    span { class: "text-xs opacity-70",
                                                        "Property #{conversation.property_id}: {conversation.last_message}"
                                                    }
                                                }
                                                if conversation.unread_count > 0 {
                                                    span { class: "badge badge-primary", "{conversation.unread_count}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        },
                        Some(Err(err)) => rsx! {
                            div { class: "alert alert-error", span { "{err}" } }
                        },
                        None => rsx! {
                            span { class: "loading loading-spinner" }
                        },
                    }
                }
            }

            div { class: "lg:col-span-2",
                if let Some(conversation) = selected() {
                    // Keyed so switching threads remounts and refetches.
                    Thread {
                        key: "{conversation.property_id}:{conversation.client_email}:{conversation.agent_email}",
                        conversation,
                        me: me.clone(),
                    }
                } else {
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body items-center opacity-70",
                            p { "Select a conversation" }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn Thread(conversation: Conversation, me: String) -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();

    let other = conversation.other_party(&me).to_string();
    let property_id = conversation.property_id;

    let mut thread = use_resource({
        let api = api.clone();
        let cancel = cancel.clone();
        let me = me.clone();
        let other = other.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let me = me.clone();
            let other = other.clone();
            async move { messages::conversation(&api, &me, &other, property_id, &cancel).await }
        }
    });

    // Opening a thread marks the partner's messages as read.
    use_effect({
        let api = api.clone();
        let cancel = cancel.clone();
        let me = me.clone();
        let other = other.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let me = me.clone();
            let other = other.clone();
            spawn(async move {
                if let Err(err) = messages::mark_read(&api, &me, &other, property_id, &cancel).await {
                    if !err.is_cancelled() {
                        tracing::warn!("failed to mark conversation read: {err}");
                    }
                }
            });
        }
    });

    let mut draft = use_signal(String::new);
    let mut sending = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let mut form_notice = use_signal(|| None::<String>);

    let send_api = api.clone();
    let send_cancel = cancel.clone();
    let send_me = me.clone();
    let send_other = other.clone();

    let on_send = move |evt: Event<FormData>| {
        evt.prevent_default();

        if sending() {
            return;
        }

        form_error.set(None);
        form_notice.set(None);

        let content = draft();
        if content.trim().is_empty() {
            return;
        }

        sending.set(true);

        let api = send_api.clone();
        let cancel = send_cancel.clone();
        let request = SendMessageRequest {
            content,
            sender_email: send_me.clone(),
            receiver_email: send_other.clone(),
            property_id,
        };

        spawn(async move {
            match messages::send_message(&api, &request, &cancel).await {
                Ok(()) => {
                    draft.set(String::new());
                    form_notice.set(Some("Message sent".to_string()));
                    thread.restart();
                }
                Err(err) => {
                    if !err.is_cancelled() {
                        form_error.set(Some(err.to_string()));
                    }
                }
            }
            sending.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body gap-4",
                h2 { class: "card-title", "{other}" }
                p { class: "text-sm opacity-70", "Property #{property_id}" }

                match &*thread.read() {
                    Some(Ok(items)) => rsx! {
                        ul { class: "flex flex-col gap-2",
                            for message in items.iter() {
                                li {
                                    class: if message.sender_email == me {
                                        "chat chat-end"
                                    } else {
                                        "chat chat-start"
                                    },
                                    div { class: "chat-bubble", "{message.content}" }
                                }
                            }
                        }
                    },
                    Some(Err(err)) => rsx! {
                        div { class: "alert alert-error", span { "{err}" } }
                    },
                    None => rsx! {
                        span { class: "loading loading-spinner" }
                    },
                }

                form { class: "flex gap-2", onsubmit: on_send,
                    input {
                        r#type: "text",
                        class: "input input-bordered flex-1",
                        placeholder: "Write a message...",
                        value: "{draft}",
                        oninput: move |evt| draft.set(evt.value()),
                    }
                    button {
                        r#type: "submit",
                        class: "btn btn-primary",
                        disabled: sending(),
                        "Send"
                    }
                }

                if let Some(error) = form_error() {
                    div { class: "alert alert-error", span { "{error}" } }
                }
                if let Some(notice) = form_notice() {
                    div { class: "alert alert-success", span { "{notice}" } }
                }
            }
        }
    }
}
