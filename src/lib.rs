//! # swapi-catalog
//!
//! Lazily paginated, strongly-typed collections over the Star Wars API.
//!
//! ## Features
//!
//! - **Lazy pagination**: records are pulled one at a time; a page is fetched
//!   only when the previous one is used up
//! - **Exact termination**: a sequence ends at the total the server reported
//! - **Typed records**: people, films and planets with enumerated fields
//! - **Injectable transport**: swap the HTTP client for an in-memory one
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use swapi_catalog::{CatalogConfig, Registry, ResourceKind, Result, SwapiClient};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let client = SwapiClient::from_config(&CatalogConfig::default())?;
//!     let registry = Registry::new(Arc::new(client));
//!
//!     let luke = registry.get(ResourceKind::Person, 1).await?;
//!     println!("{luke}");
//!
//!     let mut films = registry.all(ResourceKind::Film).await?;
//!     println!("{} films", films.count());
//!     while let Some(film) = films.advance().await? {
//!         println!("{film}");
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │ Registry   get(kind, id) → Record    all(kind) → Sequence│
//! └───────────────┬───────────────────────────┬──────────────┘
//!                 │                           │
//! ┌───────────────┴──────────┐  ┌─────────────┴──────────────┐
//! │ Record decoders          │  │ PaginatedSequence          │
//! │ Person · Film · Planet   │  │ one page held, count-bound │
//! └──────────────────────────┘  └─────────────┬──────────────┘
//!                                             │
//!                      ┌──────────────────────┴─────────────┐
//!                      │ ResourceClient                     │
//!                      │ SwapiClient (HTTP) · MemoryClient  │
//!                      └────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types
pub mod error;

/// Common types and type aliases
pub mod types;

/// Client configuration
pub mod config;

/// HTTP transport
pub mod http;

/// Resource clients
pub mod client;

/// Typed records
pub mod record;

/// Pages, tokens and the lazy sequence
pub mod pagination;

/// Kind-to-decoder registry
pub mod registry;

/// Command-line interface
pub mod cli;

// ============================================================================
// Re-exports
// ============================================================================

pub use error::{Error, ErrorCategory, Result};
pub use types::*;

pub use client::{MemoryClient, ResourceClient, SwapiClient};
pub use config::CatalogConfig;
pub use pagination::{Page, PageToken, PaginatedSequence, RecordStream};
pub use record::{Film, Person, Planet, Record};
pub use registry::Registry;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
