//! HTTP client module
//!
//! A thin wrapper around `reqwest` that sets the user agent, encodes query
//! parameters and turns non-success statuses into errors.
//!
//! Requests are sent exactly once. There is no retry, backoff or rate
//! limiting, and no authentication is applied.

mod client;

pub use client::{HttpClient, HttpClientConfig, RequestConfig};
