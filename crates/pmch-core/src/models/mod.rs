//! Data models for PMCH records.
//!
//! These mirror the JSON the API emits field for field (camelCase on the
//! wire), so the same types are used to serve, fetch and cache data:
//!
//! - `Department`, `OpdTiming`: hospital departments and their slim OPD view
//! - `Faq`: bilingual question/answer pairs grouped by category
//! - `EmergencyContact`, `ContactType`: phone numbers by kind
//! - `ApiResponse`, `PaginationInfo`: the uniform response envelope

pub mod contact;
pub mod department;
pub mod envelope;
pub mod faq;

pub use contact::{ContactType, EmergencyContact};
pub use department::{Department, OpdTiming};
pub use envelope::{ApiResponse, HealthStatus, PaginationInfo};
pub use faq::{Faq, FaqCategory};
