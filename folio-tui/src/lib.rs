//! Folio Terminal UI
//!
//! Library half of the `folio` binary, exposed for integration tests.

pub mod app;
pub mod backend;
pub mod handlers;
pub mod logging;
pub mod ui;
