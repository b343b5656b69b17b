use dioxus::prelude::*;
use nv_types::{
    acl,
    appointments::{Appointment, AppointmentStatus},
    auth,
};

use crate::{
    app::{
        api::{appointments, use_api, use_cancel_on_unmount},
        session::use_session,
    },
    components::{Layout, RequireAcl},
};

#[component]
pub fn AppointmentsPage() -> Element {
    rsx! {
        Layout {
            RequireAcl {
                acls: vec![acl::VIEW_APPOINTMENTS.to_string()],
                AppointmentList {}
            }
        }
    }
}

#[component]
fn AppointmentList() -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();
    let session = use_session();

    let current = session.session();
    let me = current.email.unwrap_or_default();
    let is_agent = current.role.as_deref() == Some(auth::ROLE_AGENT);

    let mut list = use_resource({
        let api = api.clone();
        let cancel = cancel.clone();
        let me = me.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let me = me.clone();
            async move {
                if is_agent {
                    appointments::for_agent(&api, &me, &cancel).await
                } else {
                    appointments::for_client(&api, &me, &cancel).await
                }
            }
        }
    });

    let mut comment = use_signal(String::new);
    let mut busy = use_signal(|| false);
    let mut action_error = use_signal(|| None::<String>);

    let decide = use_callback({
        let api = api.clone();
        let cancel = cancel.clone();
        move |(id, status): (i64, AppointmentStatus)| {
            if busy() {
                return;
            }
            busy.set(true);
            action_error.set(None);

            let api = api.clone();
            let cancel = cancel.clone();
            let note = comment();
            let note = if note.trim().is_empty() { None } else { Some(note) };

            spawn(async move {
                match appointments::update_status(&api, id, status, note.as_deref(), &cancel).await {
                    Ok(_) => {
                        comment.set(String::new());
                        list.restart();
                    }
                    Err(err) => {
                        if !err.is_cancelled() {
                            action_error.set(Some(err.to_string()));
                        }
                    }
                }
                busy.set(false);
            });
        }
    });

    rsx! {
        div { class: "flex flex-col gap-4",
            h1 { class: "text-3xl font-bold",
                if is_agent { "Your calendar" } else { "Your viewings" }
            }

            if is_agent {
                div { class: "flex gap-2 items-center",
                    input {
                        r#type: "text",
                        class: "input input-bordered flex-1",
                        placeholder: "Optional comment for your next decision",
                        value: "{comment}",
                        oninput: move |evt| comment.set(evt.value()),
                    }
                }
            }

            if let Some(error) = action_error() {
                div { class: "alert alert-error", span { "{error}" } }
            }

            match &*list.read() {
                Some(Ok(items)) => rsx! {
                    if items.is_empty() {
                        div { class: "card bg-base-100 p-8 text-center opacity-70", "Nothing scheduled" }
                    } else {
                        table { class: "table bg-base-100 shadow",
                            thead {
                                tr {
                                    th { "When" }
                                    th { "Property" }
                                    th { if is_agent { "Client" } else { "Agent" } }
                                    th { "Status" }
                                    if is_agent {
                                        th { "" }
                                    }
                                }
                            }
                            tbody {
                                for appointment in items.iter() {
                                    AppointmentRow {
                                        key: "{appointment.id}",
                                        appointment: appointment.clone(),
                                        is_agent,
                                        busy: busy(),
                                        on_decide: move |args: (i64, AppointmentStatus)| decide.call(args),
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
                    div { class: "flex justify-center p-8",
                        span { class: "loading loading-spinner loading-lg" }
                    }
                },
            }
        }
    }
}

#[component]
fn AppointmentRow(
    appointment: Appointment,
    is_agent: bool,
    busy: bool,
    on_decide: EventHandler<(i64, AppointmentStatus)>,
) -> Element {
    let id = appointment.id;
    let when = appointment.scheduled_at.format("%Y-%m-%d %H:%M").to_string();
    let counterpart = if is_agent {
        appointment.client_email.clone()
    } else {
        appointment.agent_email.clone()
    };
    let badge = match appointment.status {
        AppointmentStatus::Pending => "badge-warning",
        AppointmentStatus::Confirmed => "badge-success",
        AppointmentStatus::Declined => "badge-error",
        AppointmentStatus::Completed => "badge-neutral",
    };

    rsx! {
        tr {
            td { "{when}" }
            td {
                Link {
                    to: crate::Routes::PropertyDetailPage { id: appointment.property_id },
                    class: "link",
                    "#{appointment.property_id}"
                }
            }
            td { "{counterpart}" }
            td {
                span { class: "badge {badge}", "{appointment.status.as_str()}" }
                if let Some(comment) = appointment.comment.as_ref() {
                    span { class: "text-xs opacity-70 ml-2", "{comment}" }
                }
            }
            if is_agent {
                td {
                    if appointment.status == AppointmentStatus::Pending {
                        div { class: "flex gap-2",
                            button {
                                class: "btn btn-success btn-xs",
                                disabled: busy,
                                onclick: move |_| on_decide.call((id, AppointmentStatus::Confirmed)),
                                "Confirm"
                            }
                            button {
                                class: "btn btn-error btn-xs",
                                disabled: busy,
                                onclick: move |_| on_decide.call((id, AppointmentStatus::Declined)),
                                "Decline"
                            }
                        }
                    }
                }
            }
        }
    }
}
