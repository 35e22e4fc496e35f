pub mod base;
pub mod detached_session;
pub mod session_store;

// Re-export the primary session items so code outside can do
// "use crate::session::{Session, SessionContext, create_session_context};"
pub use base::{create_session_context, Session, SessionContext, SessionState};
pub use detached_session::DetachedSession;
pub use session_store::SessionStore;
