//! REST API client module for the PMCH data service.
//!
//! This module provides the `ApiClient` for fetching departments, FAQs,
//! emergency contacts and OPD timings. The service is read-only and
//! unauthenticated; every response is wrapped in the `ApiResponse` envelope.

pub mod client;
pub mod error;

pub use client::{ApiClient, DEPARTMENTS_PAGE_SIZE};
pub use error::ApiError;
