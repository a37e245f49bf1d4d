use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use crate::domain::Session;

/// Keyed store of per-user selection state.
///
/// `update` runs the merge closure while holding the store's lock for that
/// key, so a read-modify-write is one atomic step even on a multi-threaded
/// runtime. Sessions have no cross-key invariants; updates for different
/// users are independent by construction.
pub trait SessionStore: Send + Sync {
    /// Returns the user's session, or an empty default when absent.
    fn get(&self, user_id: &str) -> Session;

    /// Applies `apply` to the user's session (created empty if absent) and
    /// returns the post-merge snapshot.
    fn update(&self, user_id: &str, apply: &mut dyn FnMut(&mut Session)) -> Session;
}

/// Process-lifetime map. Entries are never evicted; they die with the
/// process, which is the intended lifecycle for this store.
#[derive(Default)]
pub struct InMemorySessionStore {
    sessions: Mutex<HashMap<String, Session>>,
}

impl InMemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    fn get(&self, user_id: &str) -> Session {
        let sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        sessions.get(user_id).copied().unwrap_or_default()
    }

    fn update(&self, user_id: &str, apply: &mut dyn FnMut(&mut Session)) -> Session {
        let mut sessions = self.sessions.lock().unwrap_or_else(PoisonError::into_inner);
        let session = sessions.entry(user_id.to_owned()).or_default();
        apply(session);
        *session
    }
}

#[cfg(test)]
mod tests {
    use super::{InMemorySessionStore, SessionStore};
    use crate::domain::{Category, Industry, Session};

    #[test]
    fn get_returns_default_for_unknown_user() {
        let store = InMemorySessionStore::new();
        assert_eq!(store.get("U1"), Session::default());
    }

    #[test]
    fn update_merges_and_returns_snapshot() {
        let store = InMemorySessionStore::new();

        let after = store.update("U1", &mut |session| {
            session.industry = Some(Industry::Retail);
        });
        assert_eq!(after.industry, Some(Industry::Retail));
        assert_eq!(after.category, None);

        let after = store.update("U1", &mut |session| {
            session.category = Some(Category::Marketing);
        });
        assert_eq!(after.industry, Some(Industry::Retail));
        assert_eq!(after.category, Some(Category::Marketing));
    }

    #[test]
    fn repeated_selection_of_same_value_is_idempotent() {
        let store = InMemorySessionStore::new();

        let first = store.update("U1", &mut |session| {
            session.industry = Some(Industry::Finance);
        });
        let second = store.update("U1", &mut |session| {
            session.industry = Some(Industry::Finance);
        });

        assert_eq!(first, second);
    }

    #[test]
    fn users_are_independent_keys() {
        let store = InMemorySessionStore::new();

        store.update("U1", &mut |session| {
            session.industry = Some(Industry::Education);
        });

        assert_eq!(store.get("U2"), Session::default());
        assert_eq!(store.get("U1").industry, Some(Industry::Education));
    }
}
