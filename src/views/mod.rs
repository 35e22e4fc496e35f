//! Views rendered by the landing service and the state they share.

pub mod context;
pub mod home;
pub mod theme;

pub use context::ViewContext;
pub use home::{HomeView, VersionDisplay};
pub use theme::Theme;
