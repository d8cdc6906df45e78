//! HTTP surface for the Passage authentication service
//!
//! Exposed as a library so the binary and the integration tests build the
//! same application.

pub mod app;
pub mod config;
pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
