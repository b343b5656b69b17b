use chrono::{DateTime, NaiveDateTime, Utc};
use dioxus::prelude::*;
use nv_types::{
    acl,
    appointments::CreateAppointmentRequest,
    properties::Property,
    reviews::CreateReviewRequest,
};

use crate::{
    app::{
        api::{appointments, properties, reviews, use_api, use_cancel_on_unmount},
        session::use_session,
    },
    components::{Layout, Protected, RequireAcl},
};

#[component]
pub fn PropertyDetailPage(id: i64) -> Element {
    rsx! {
        Layout {
            RequireAcl {
                acls: vec![acl::VIEW_PROPERTY.to_string()],
                PropertyDetail { id }
            }
        }
    }
}

#[component]
fn PropertyDetail(id: i64) -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();

    let property = use_resource(move || {
        let api = api.clone();
        let cancel = cancel.clone();
        async move { properties::get(&api, id, &cancel).await }
    });

    rsx! {
        match &*property.read() {
            Some(Ok(property)) => rsx! {
                div { class: "flex flex-col gap-6",
                    div { class: "card bg-base-100 shadow",
                        div { class: "card-body",
                            div { class: "flex justify-between items-start",
                                div {
                                    h1 { class: "text-3xl font-bold", "{property.title}" }
                                    p { class: "opacity-70", "{property.address}, {property.city}" }
                                }
                                span { class: "text-2xl font-bold text-success", "${property.price}" }
                            }
                            div { class: "flex gap-4 text-sm",
                                span { "{property.bedrooms} beds" }
                                span { "{property.bathrooms} baths" }
                                span { "{property.surface} sqft" }
                                span { "{property.property_type}" }
                            }
                            p { class: "mt-2 leading-relaxed", "{property.description}" }
                        }
                    }

                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-6",
                        ReviewsSection { property: property.clone() }
                        BookingSection { property: property.clone() }
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

#[component]
fn ReviewsSection(property: Property) -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();
    let session = use_session();

    let property_id = property.id;
    let agent_email = property.agent_email.clone();

    let mut review_list = use_resource({
        let api = api.clone();
        let cancel = cancel.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            async move { reviews::property_reviews(&api, property_id, &cancel).await }
        }
    });

    // Average over the agent's listings, shown next to this property's reviews.
    let listing_rating = use_resource({
        let api = api.clone();
        let cancel = cancel.clone();
        let agent_email = agent_email.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let agent_email = agent_email.clone();
            async move { reviews::property_rating(&api, &agent_email, &cancel).await }
        }
    });

    let mut rating = use_signal(|| 5u8);
    let mut comment = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let mut form_notice = use_signal(|| None::<String>);

    let submit_api = api.clone();
    let submit_cancel = cancel.clone();
    let submit_agent = property.agent_email.clone();

    let on_submit = move |evt: Event<FormData>| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        form_error.set(None);
        form_notice.set(None);

        let reviewer = match session.session().email {
            Some(email) => email,
            None => {
                form_error.set(Some("You must be logged in to review".to_string()));
                return;
            }
        };

        let comment_val = comment();
        if comment_val.trim().is_empty() {
            form_error.set(Some("A comment is required".to_string()));
            return;
        }

        submitting.set(true);

        let api = submit_api.clone();
        let cancel = submit_cancel.clone();
        let request = CreateReviewRequest {
            property_id,
            agent_email: submit_agent.clone(),
            reviewer_email: reviewer,
            rating: rating(),
            comment: comment_val,
        };

        spawn(async move {
            match reviews::create(&api, &request, &cancel).await {
                Ok(_) => {
                    comment.set(String::new());
                    form_notice.set(Some("Review submitted".to_string()));
                    review_list.restart();
                }
                Err(err) => {
                    if !err.is_cancelled() {
                        form_error.set(Some(err.to_string()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body gap-4",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "Reviews" }
                    if let Some(Ok(rating)) = &*listing_rating.read() {
                        span { class: "text-sm opacity-70", "Listings rated {rating:.1} on average" }
                    }
                }

                match &*review_list.read() {
                    Some(Ok(items)) => rsx! {
                        if items.is_empty() {
                            p { class: "opacity-70", "No reviews yet" }
                        } else {
                            ul { class: "flex flex-col gap-3",
                                for review in items.iter() {
                                    li { class: "border-b border-base-200 pb-2",
                                        div { class: "flex justify-between text-sm",
                                            span { class: "font-semibold", "{review.reviewer_email}" }
                                            span { class: "text-warning", "{review.rating}/5" }
                                        }
                                        p { class: "text-sm", "{review.comment}" }
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

                Protected {
                    acls: vec![acl::SUBMIT_REVIEW.to_string()],
                    form { class: "flex flex-col gap-2", onsubmit: on_submit,
                        h3 { class: "font-semibold", "Leave a review" }
                        select {
                            class: "select select-bordered w-24",
                            onchange: move |evt| {
                                if let Ok(value) = evt.value().parse() {
                                    rating.set(value);
                                }
                            },
                            option { value: "5", "5" }
                            option { value: "4", "4" }
                            option { value: "3", "3" }
                            option { value: "2", "2" }
                            option { value: "1", "1" }
                        }
                        textarea {
                            class: "textarea textarea-bordered",
                            rows: "3",
                            placeholder: "How was your experience?",
                            value: "{comment}",
                            oninput: move |evt| comment.set(evt.value()),
                        }
                        if let Some(error) = form_error() {
                            div { class: "alert alert-error", span { "{error}" } }
                        }
                        if let Some(notice) = form_notice() {
                            div { class: "alert alert-success", span { "{notice}" } }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary self-start",
                            disabled: submitting(),
                            "Submit review"
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BookingSection(property: Property) -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();
    let session = use_session();

    let property_id = property.id;
    let agent_email = property.agent_email.clone();

    let agent_summary = use_resource({
        let api = api.clone();
        let cancel = cancel.clone();
        let agent_email = agent_email.clone();
        move || {
            let api = api.clone();
            let cancel = cancel.clone();
            let agent_email = agent_email.clone();
            async move {
                let rating = reviews::agent_rating(&api, &agent_email, &cancel).await?;
                let count = reviews::agent_review_count(&api, &agent_email, &cancel).await?;
                Ok::<_, crate::error::ApiError>((rating, count))
            }
        }
    });

    let mut slot = use_signal(String::new);
    let mut submitting = use_signal(|| false);
    let mut form_error = use_signal(|| None::<String>);
    let mut form_notice = use_signal(|| None::<String>);

    let on_book = move |evt: Event<FormData>| {
        evt.prevent_default();

        if submitting() {
            return;
        }

        form_error.set(None);
        form_notice.set(None);

        let client = match session.session().email {
            Some(email) => email,
            None => {
                form_error.set(Some("You must be logged in to book".to_string()));
                return;
            }
        };

        // datetime-local inputs have no zone; treat the value as UTC.
        let scheduled_at = match NaiveDateTime::parse_from_str(&slot(), "%Y-%m-%dT%H:%M") {
            Ok(naive) => DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc),
            Err(_) => {
                form_error.set(Some("Pick a date and time".to_string()));
                return;
            }
        };

        submitting.set(true);

        let api = api.clone();
        let cancel = cancel.clone();
        let request = CreateAppointmentRequest {
            property_id,
            client_email: client,
            agent_email: agent_email.clone(),
            scheduled_at,
        };

        spawn(async move {
            match appointments::create(&api, &request, &cancel).await {
                Ok(_) => {
                    slot.set(String::new());
                    form_notice.set(Some("Viewing requested; the agent will confirm".to_string()));
                }
                Err(err) => {
                    // A 409 shows the backend's conflict text verbatim.
                    if !err.is_cancelled() {
                        form_error.set(Some(err.to_string()));
                    }
                }
            }
            submitting.set(false);
        });
    };

    rsx! {
        div { class: "card bg-base-100 shadow",
            div { class: "card-body gap-4",
                h2 { class: "card-title", "Schedule a viewing" }
                p { class: "text-sm opacity-70",
                    "Listed by {property.agent_email}"
                    if let Some(Ok((rating, count))) = &*agent_summary.read() {
                        span { " · rated {rating:.1} across {count} reviews" }
                    }
                }

                Protected {
                    acls: vec![acl::BOOK_APPOINTMENT.to_string()],
                    fallback: rsx! {
                        p { class: "opacity-70", "Your account cannot book viewings" }
                    },
                    form { class: "flex flex-col gap-2", onsubmit: on_book,
                        input {
                            r#type: "datetime-local",
                            class: "input input-bordered",
                            value: "{slot}",
                            oninput: move |evt| slot.set(evt.value()),
                        }
                        if let Some(error) = form_error() {
                            div { class: "alert alert-error", span { "{error}" } }
                        }
                        if let Some(notice) = form_notice() {
                            div { class: "alert alert-success", span { "{notice}" } }
                        }
                        button {
                            r#type: "submit",
                            class: "btn btn-primary self-start",
                            disabled: submitting(),
                            "Request viewing"
                        }
                    }
                }
            }
        }
    }
}
