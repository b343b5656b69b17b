//! NestView web entrypoint and common exports.
//!
//! This crate hosts the Dioxus-based browser UI for the NestView real-estate
//! marketplace. All data access goes through the REST clients in
//! [`app::api`]; session state and route guarding live in [`app::session`]
//! and [`app::components::auth`].

pub mod app;
pub mod app_root;
pub mod error;

pub use app::routes::Routes;
pub use app::{components, pages, routes};
