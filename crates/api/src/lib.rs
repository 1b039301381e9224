//! petchat API server library.
//!
//! Exposes the building blocks (config, state, error handling, dialogue
//! engine, outbound clients, routes) so integration tests and the binary entrypoint can both
//! access them.

pub mod auth;
pub mod config;
pub mod engine;
pub mod error;
pub mod external;
pub mod handlers;
pub mod middleware;
pub mod query;
pub mod router;
pub mod routes;
pub mod state;
