//! Property listing DTOs.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum PropertyStatus {
    Active,
    Pending,
    Sold,
}

impl PropertyStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyStatus::Active => "Active",
            PropertyStatus::Pending => "Pending",
            PropertyStatus::Sold => "Sold",
        }
    }
}

/// Listing as returned by the backend.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Property {
    pub id: i64,
    pub title: String,
    pub address: String,
    pub city: String,
    pub price: u64,
    pub bedrooms: u8,
    pub bathrooms: f32,
    /// Interior surface in square feet.
    pub surface: u32,
    pub property_type: String,
    pub status: PropertyStatus,
    pub description: String,
    /// Email of the listing agent; used for messaging, appointments, and
    /// review lookups.
    pub agent_email: String,
    #[serde(default)]
    pub photo_urls: Vec<String>,
}

/// Search filters serialized onto the listing query string.
///
/// `None` fields are omitted entirely so the backend applies no filter.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertySearch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_bedrooms: Option<u8>,
    /// Sort key: "price_asc", "price_desc", or "newest".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
}
