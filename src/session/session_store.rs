use tokio::sync::watch;
use tracing::debug;

use super::{Session, SessionContext};

/// In-memory session store.
///
/// The value lives in a watch channel: `replace` swaps it and marks every
/// receiver as changed in one step, so observers see the update before the
/// call returns. Nothing is persisted; the session ends with the store.
pub struct SessionStore {
    current: watch::Sender<Option<Session>>,
}

impl SessionStore {
    pub fn new() -> Self {
        let (current, _) = watch::channel(None);
        SessionStore { current }
    }
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext for SessionStore {
    fn get(&self) -> Option<Session> {
        self.current.borrow().clone()
    }

    fn replace(&self, session: Option<Session>) {
        let populated = session.is_some();
        let previous = self.current.send_replace(session);
        debug!(
            populated,
            replaced = previous.is_some(),
            observers = self.current.receiver_count(),
            "session updated"
        );
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.current.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;

    enum Op {
        Set(&'static str),
        Clear,
    }

    fn apply(store: &SessionStore, ops: &[Op]) {
        for op in ops {
            match op {
                Op::Set(token) => store.set(Session::new(*token)),
                Op::Clear => store.clear(),
            }
        }
    }

    #[test]
    fn test_starts_empty() {
        let store = SessionStore::new();
        assert_eq!(store.get(), None);
        assert_eq!(store.state(), SessionState::Empty);
    }

    #[test]
    fn test_set_then_clear() {
        let store = SessionStore::new();

        store.set(Session::new("abc123"));
        assert_eq!(store.get(), Some(Session::new("abc123")));
        assert_eq!(store.get().unwrap().bearer_token(), "abc123");
        assert_eq!(store.state(), SessionState::Populated);

        store.clear();
        assert_eq!(store.get(), None);
        assert_eq!(store.state(), SessionState::Empty);
    }

    #[test]
    fn test_set_overwrites_without_merging() {
        let store = SessionStore::new();
        store.set(Session::new("first"));
        store.set(Session::new("second"));
        assert_eq!(store.get(), Some(Session::new("second")));
    }

    #[test]
    fn test_get_returns_last_write() {
        let cases: Vec<(Vec<Op>, Option<&str>)> = vec![
            (vec![], None),
            (vec![Op::Clear], None),
            (vec![Op::Set("a")], Some("a")),
            (vec![Op::Set("a"), Op::Clear], None),
            (vec![Op::Clear, Op::Set("b")], Some("b")),
            (vec![Op::Set("a"), Op::Clear, Op::Set("c"), Op::Set("d")], Some("d")),
            (vec![Op::Set("a"), Op::Set("b"), Op::Clear, Op::Clear], None),
        ];

        for (ops, expected) in cases {
            let store = SessionStore::new();
            apply(&store, &ops);
            assert_eq!(store.get(), expected.map(Session::new));
        }
    }

    #[test]
    fn test_clear_is_idempotent() {
        let store = SessionStore::new();
        store.clear();
        store.clear();
        assert_eq!(store.get(), None);
    }

    #[test]
    fn test_empty_token_is_accepted() {
        let store = SessionStore::new();
        store.set(Session::new(""));
        assert_eq!(store.get(), Some(Session::new("")));
        assert_eq!(store.state(), SessionState::Populated);
    }

    #[test]
    fn test_observers_are_notified_before_set_returns() {
        let store = SessionStore::new();
        let mut first = store.subscribe();
        let mut second = store.subscribe();
        assert!(!first.has_changed().unwrap());

        store.set(Session::new("abc123"));
        assert!(first.has_changed().unwrap());
        assert!(second.has_changed().unwrap());
        assert_eq!(*first.borrow_and_update(), Some(Session::new("abc123")));
        assert!(!first.has_changed().unwrap());

        store.clear();
        assert!(first.has_changed().unwrap());
        assert_eq!(*first.borrow_and_update(), None);
        assert_eq!(*second.borrow_and_update(), None);
    }

    #[tokio::test]
    async fn test_observer_wakes_on_change() {
        let store = std::sync::Arc::new(SessionStore::new());
        let mut rx = store.subscribe();

        let writer = store.clone();
        tokio::spawn(async move {
            writer.set(Session::new("from-login-flow"));
        });

        rx.changed().await.unwrap();
        assert_eq!(*rx.borrow(), Some(Session::new("from-login-flow")));
    }
}
