//! Core library for PMCH Guide.
//!
//! Shared by the API server and the terminal client:
//!
//! - [`models`]: wire records and the response envelope
//! - [`api`]: HTTP client for the read-only data service
//! - [`cache`]: durable last-known-good storage per resource
//! - [`fetch`]: offline-first `CachedFetch` built on the two above
//! - [`i18n`]: Hindi/English selection and the persisted preference

pub mod api;
pub mod cache;
pub mod config;
pub mod fetch;
pub mod i18n;
pub mod models;
pub mod utils;

pub use api::{ApiClient, ApiError};
pub use cache::{CacheEntry, CacheManager, StorageError};
pub use config::Config;
pub use fetch::{producer, CachedFetch, FetchState, Producer, Subscription};
pub use i18n::{Language, LanguageContext};
