//! HTTP client for the blog backend.
//!
//! Every request carries the session's bearer credential when one is stored.
//! Failures are returned as [`ApiError`]; nothing is retried and a 401 is
//! handed back to the caller like any other status.

pub(crate) mod client;
pub(crate) mod error;


pub use client::ApiClient;
pub use error::{ApiError, Result as ApiResult};
