use dioxus::prelude::*;
use nv_types::session::Session;

use super::store::SessionStore;
use crate::app::storage::BrowserStorage;

/// Session state shared through context: the persistent store plus a
/// reactive snapshot the UI re-renders from.
///
/// The snapshot and the store change together through [`login`] and
/// [`logout`]; nothing else writes session state.
///
/// [`login`]: SessionContext::login
/// [`logout`]: SessionContext::logout
#[derive(Clone)]
pub struct SessionContext {
    store: SessionStore,
    current: Signal<Session>,
}

impl SessionContext {
    /// Reactive handle to the current session.
    pub fn current(&self) -> Signal<Session> {
        self.current
    }

    /// Owned snapshot of the current session.
    pub fn session(&self) -> Session {
        self.current.peek().clone()
    }

    /// Replace the persisted session and the reactive snapshot in one step.
    pub fn login(&self, session: Session) {
        self.store.replace(&session);
        let mut current = self.current;
        current.set(session);
    }

    /// Clear the persisted session and return to anonymous.
    pub fn logout(&self) {
        self.store.clear();
        let mut current = self.current;
        current.set(Session::anonymous());
    }
}

fn default_storage() -> BrowserStorage {
    #[cfg(feature = "web")]
    {
        BrowserStorage::Local
    }
    #[cfg(not(feature = "web"))]
    {
        BrowserStorage::memory()
    }
}

/// Install the session context; the initial snapshot comes from storage so a
/// reloaded tab stays logged in.
pub fn use_session_provider() -> SessionContext {
    let store = use_hook(|| SessionStore::new(default_storage()));
    let current = use_signal({
        let store = store.clone();
        move || store.load()
    });
    use_context_provider(|| SessionContext { store, current })
}

/// Get the session context installed by [`SessionProvider`].
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
}

/// Provider component wrapping the app root.
#[component]
pub fn SessionProvider(children: Element) -> Element {
    use_session_provider();
    rsx! {
        {children}
    }
}
