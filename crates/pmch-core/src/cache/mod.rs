//! Local caching module for offline data access.
//!
//! This module provides the `CacheManager` for storing the last successful
//! payload of each resource. Entries are JSON `{data, timestamp}` blobs and
//! never expire: in a hospital with patchy connectivity, old information is
//! better than none. Age is shown to the user instead.
//!
//! Cached resources:
//! - Departments, and each department's detail
//! - OPD timings
//! - FAQs
//! - Emergency contacts

pub mod manager;
pub mod store;

pub use manager::{now_millis, CacheEntry, CacheManager};
pub use store::{FileStore, KeyValueStore, MemoryStore, StorageError};

/// Cache keys, one per logical resource.
pub mod keys {
    pub const DEPARTMENTS: &str = "departments";
    pub const OPD_TIMINGS: &str = "opd_timings";
    pub const FAQS: &str = "faqs";
    pub const CONTACTS: &str = "contacts";

    /// Stored outside the cache namespace.
    pub const LANGUAGE: &str = "pmch_language";

    pub fn department(id: i64) -> String {
        format!("department_{}", id)
    }
}
