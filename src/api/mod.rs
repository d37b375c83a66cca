//! Reportfill API server module
//!
//! Provides the HTTP surface for report filling.
//! Run with `reportfill-server`.

pub mod handlers;
pub mod server;

pub use server::run_api_server;
