// This module re-exports important pieces for convenience,
// so we can "use crate::config::*" easily.
pub mod config;
pub mod endpoints;
pub mod logging;
pub mod session;
pub mod site;

pub use config::*;
pub use endpoints::*;
pub use logging::*;
pub use session::*;
pub use site::*;
