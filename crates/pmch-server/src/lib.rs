//! Read-only REST API for PMCH departments, FAQs, emergency contacts and
//! OPD timings.

pub mod catalog;
pub mod config;
pub mod http;
pub mod logging;

pub use catalog::{Catalog, CatalogError};
pub use config::{Environment, ServerConfig};
