use dioxus::prelude::*;
use nv_types::{acl, properties::PropertySearch};

use crate::{
    app::api::{properties, use_api, use_cancel_on_unmount},
    components::{Layout, RequireAcl},
};

#[component]
pub fn PropertiesPage() -> Element {
    rsx! {
        Layout {
            RequireAcl {
                acls: vec![acl::VIEW_PROPERTY.to_string()],
                PropertyList {}
            }
        }
    }
}

#[component]
fn PropertyList() -> Element {
    let api = use_api();
    let cancel = use_cancel_on_unmount();

    // Form inputs; copied into `filters` on submit so typing doesn't refetch.
    let mut query = use_signal(String::new);
    let mut property_type = use_signal(String::new);
    let mut min_price = use_signal(String::new);
    let mut max_price = use_signal(String::new);
    let mut min_bedrooms = use_signal(String::new);
    let mut sort = use_signal(String::new);

    let mut filters = use_signal(PropertySearch::default);

    let listings = use_resource(move || {
        let api = api.clone();
        let cancel = cancel.clone();
        let filters = filters();
        async move { properties::search(&api, &filters, &cancel).await }
    });

    let on_search = move |evt: Event<FormData>| {
        evt.prevent_default();

        let non_empty = |s: String| if s.trim().is_empty() { None } else { Some(s) };
        filters.set(PropertySearch {
            q: non_empty(query()),
            property_type: non_empty(property_type()),
            min_price: min_price().trim().parse().ok(),
            max_price: max_price().trim().parse().ok(),
            min_bedrooms: min_bedrooms().trim().parse().ok(),
            sort: non_empty(sort()),
        });
    };

    rsx! {
        div { class: "flex flex-col gap-4",
            h1 { class: "text-3xl font-bold", "Find your next home" }

            form { class: "flex gap-2 flex-wrap items-end", onsubmit: on_search,
                input {
                    r#type: "text",
                    placeholder: "Search address, city, keywords...",
                    class: "input input-bordered flex-1 min-w-48",
                    value: "{query}",
                    oninput: move |evt| query.set(evt.value()),
                }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| property_type.set(evt.value()),
                    option { value: "", "All types" }
                    option { value: "Single Family", "Single Family" }
                    option { value: "Condo", "Condo" }
                    option { value: "Townhome", "Townhome" }
                    option { value: "Multi-Family", "Multi-Family" }
                }
                input {
                    r#type: "number",
                    placeholder: "Min $",
                    class: "input input-bordered w-28",
                    value: "{min_price}",
                    oninput: move |evt| min_price.set(evt.value()),
                }
                input {
                    r#type: "number",
                    placeholder: "Max $",
                    class: "input input-bordered w-28",
                    value: "{max_price}",
                    oninput: move |evt| max_price.set(evt.value()),
                }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| min_bedrooms.set(evt.value()),
                    option { value: "", "Beds" }
                    option { value: "1", "1+" }
                    option { value: "2", "2+" }
                    option { value: "3", "3+" }
                    option { value: "4", "4+" }
                }
                select {
                    class: "select select-bordered",
                    onchange: move |evt| sort.set(evt.value()),
                    option { value: "", "Newest" }
                    option { value: "price_asc", "Price ↑" }
                    option { value: "price_desc", "Price ↓" }
                }
                button { r#type: "submit", class: "btn btn-primary", "Search" }
            }

            match &*listings.read() {
                Some(Ok(items)) => rsx! {
                    if items.is_empty() {
                        div { class: "card bg-base-100 p-8 text-center opacity-70", "No listings match your search" }
                    } else {
                        div { class: "grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-4",
                            for property in items.iter() {
                                PropertyCard { property: property.clone() }
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
fn PropertyCard(property: nv_types::properties::Property) -> Element {
    let badge = match property.status {
        nv_types::properties::PropertyStatus::Active => "badge-success",
        nv_types::properties::PropertyStatus::Pending => "badge-warning",
        nv_types::properties::PropertyStatus::Sold => "badge-error",
    };

    rsx! {
        Link {
            to: crate::Routes::PropertyDetailPage { id: property.id },
            class: "card bg-base-100 shadow hover:shadow-lg transition-shadow",
            div { class: "card-body",
                div { class: "flex justify-between items-start",
                    span { class: "text-xl font-bold text-success", "${property.price}" }
                    span { class: "badge {badge}", "{property.status.as_str()}" }
                }
                h3 { class: "card-title text-base", "{property.title}" }
                p { class: "text-sm opacity-70", "{property.address}, {property.city}" }
                div { class: "flex gap-3 text-sm",
                    span { "{property.bedrooms} bd" }
                    span { "{property.bathrooms} ba" }
                    span { "{property.surface} sqft" }
                }
            }
        }
    }
}
