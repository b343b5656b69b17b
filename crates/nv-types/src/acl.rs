//! Permission labels used across the marketplace UI.
//!
//! Labels are opaque strings checked with exact membership; the backend is
//! the source of truth for which labels a user holds.

pub const VIEW_PROPERTY: &str = "view_property";
pub const EDIT_PROPERTY: &str = "edit_property";
pub const VIEW_MESSAGES: &str = "view_messages";
pub const VIEW_APPOINTMENTS: &str = "view_appointments";
pub const BOOK_APPOINTMENT: &str = "book_appointment";
pub const SUBMIT_REVIEW: &str = "submit_review";
