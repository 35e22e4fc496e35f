//! Library exports for elideus, shared between the binary and tests.

pub mod config;
pub mod routes;
pub mod session;
pub mod startup;
pub mod state;
pub mod utils;
pub mod version;
pub mod views;
