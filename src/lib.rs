//! Minimal JSON-over-HTTP starter service.
//!
//! A fixed set of GET routes returning static or near-static JSON, behind a
//! permissive CORS policy, plus a small client that calls `/hello` and renders
//! the result.
//!
//! # Routes
//!
//! ```text
//! GET /           "Hello Hono!"                               text/plain
//! GET /hello      {"message":"Hello BHVR!","success":true}
//! GET /api/hello  {"message":"Hello, World!"}
//! GET /version    {"version":"0.0.0","name":"server"}         (or APP_VERSION / APP_NAME)
//! GET /health     {"status":"ok"}
//! GET /test       {"test":"ok"}
//! ```
//!
//! # Modules
//!
//! - [`api`]: HTTP router, handlers and middleware
//! - [`badge`]: GitHub Actions badge URL helpers
//! - [`client`]: Client for the `/hello` route
//! - [`config`]: Configuration loading from environment
//! - [`error`]: Unified error types
//! - [`greeting`]: Greeting helpers
//! - [`metrics`]: Request metrics
//! - [`types`]: JSON response shapes
//! - [`utils`]: Utility functions

pub mod api;
pub mod badge;
pub mod client;
pub mod config;
pub mod error;
pub mod greeting;
pub mod metrics;
pub mod types;
pub mod utils;

pub use config::Config;
pub use error::{ClientError, Result, ServerError};
