//! Character API facade service

#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    dead_code
)]

/// Query service over the upstream client
pub mod characters;

/// HTTP routes
pub mod routes;

/// Server setup and lifecycle
pub mod server;

/// Shared types: data model, configuration, universal error handling
pub mod types;

/// Upstream character API client
pub mod upstream;
