//! Categoria - paged synthetic category listing
//!
//! Serves windows of a deterministic list of 1001 categories over HTTP,
//! after an artificial non-blocking delay.

pub mod cli;
pub mod config;
pub mod context;
pub mod di;
pub mod error;
pub mod http;
pub mod models;
pub mod services;

pub use di::FromRef;
