use std::sync::Arc;

use super::Theme;
use crate::session::{DetachedSession, SessionContext};

/// State every view can read without it being threaded through each call:
/// the current session and the theme.
#[derive(Clone)]
pub struct ViewContext {
    session: Arc<dyn SessionContext>,
    theme: Arc<Theme>,
}

impl ViewContext {
    pub fn new(session: Arc<dyn SessionContext>, theme: Arc<Theme>) -> Self {
        Self { session, theme }
    }

    /// A context with no session provider mounted.
    pub fn detached() -> Self {
        Self::new(Arc::new(DetachedSession::new()), Arc::new(Theme::default()))
    }

    pub fn session(&self) -> &dyn SessionContext {
        self.session.as_ref()
    }

    pub fn theme(&self) -> &Theme {
        &self.theme
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::{Session, SessionStore};

    #[test]
    fn test_clones_share_one_session() {
        let ctx = ViewContext::new(Arc::new(SessionStore::new()), Arc::new(Theme::default()));
        let nested = ctx.clone();

        ctx.session().set(Session::new("abc123"));
        assert_eq!(nested.session().get(), Some(Session::new("abc123")));

        nested.session().clear();
        assert_eq!(ctx.session().get(), None);
    }

    #[test]
    fn test_detached_context() {
        let ctx = ViewContext::detached();
        assert!(!ctx.session().is_attached());
        ctx.session().set(Session::new("abc123"));
        assert_eq!(ctx.session().get(), None);
        assert_eq!(ctx.theme(), &Theme::default());
    }
}
