//! # Marketplace server
//! An actix-web server that mimics a handmade-goods marketplace's REST API (v3), for developing and testing clients
//! without touching the real service. All state lives in memory.
//!
//! Requests pass through, in order:
//! * access logging, and decoration with rate-limit, CORS and content-type headers,
//! * CORS preflight handling,
//! * the application credential check (`x-api-key`) and bearer token resolution ([`middleware`]),
//! * the per-route OAuth scope guard, and finally the handler ([`routes`]).
//!
//! ## Configuration
//! The server is configured via environment variables. See [config](config/index.html) for more information.
pub mod auth;
pub mod cli;
pub mod config;
pub mod data_objects;
pub mod errors;
pub mod helpers;
pub mod middleware;
pub mod routes;
pub mod server;

#[cfg(test)]
mod endpoint_tests;
