//! HTTP client module
//!
//! Provides the transport used by the SWAPI resource client.
//!
//! # Features
//!
//! - **Base URL joining**: relative paths resolve against the API root
//! - **Error classification**: status, timeout and decode failures map onto
//!   distinct error variants
//! - **No retries**: every call is a single request

mod client;

pub use client::{HttpClient, HttpClientConfig, HttpClientConfigBuilder, RequestConfig};

#[cfg(test)]
mod tests;
