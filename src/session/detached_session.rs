use tokio::sync::watch;
use tracing::debug;

use super::{Session, SessionContext};

/// A no-op session context used before a real store is mounted.
/// Reads are always empty and writes are dropped.
pub struct DetachedSession {
    // Never written; keeps subscribers' channels open.
    empty: watch::Sender<Option<Session>>,
}

impl DetachedSession {
    pub fn new() -> Self {
        let (empty, _) = watch::channel(None);
        DetachedSession { empty }
    }
}

impl Default for DetachedSession {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionContext for DetachedSession {
    fn get(&self) -> Option<Session> {
        None
    }

    fn replace(&self, _session: Option<Session>) {
        debug!("Session context is detached; ignoring write.");
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.empty.subscribe()
    }

    fn is_attached(&self) -> bool {
        false
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::SessionState;

    #[test]
    fn test_detached_session_ignores_set() {
        let detached = DetachedSession::new();
        detached.set(Session::new("abc123"));
        assert_eq!(detached.get(), None);
        assert_eq!(detached.state(), SessionState::Empty);
    }

    #[test]
    fn test_detached_session_clear_is_noop() {
        let detached = DetachedSession::new();
        detached.clear();
        assert_eq!(detached.get(), None);
    }

    #[test]
    fn test_detached_session_observers_never_change() {
        let detached = DetachedSession::new();
        let rx = detached.subscribe();
        detached.set(Session::new("abc123"));
        assert!(!rx.has_changed().unwrap());
        assert_eq!(*rx.borrow(), None);
    }
}
