//! HTTP gateway for the receipt points service
//!
//! Thin boundary over `receipt-core`: binds and validates submissions,
//! stores them, and serves point totals computed on demand.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod metrics;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::AppState;
