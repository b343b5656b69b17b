//! Session state: persistent store plus reactive context for the UI.

pub mod provider;
pub mod store;

pub use provider::{use_session, use_session_provider, SessionContext, SessionProvider};
pub use store::SessionStore;
