//! In-memory, read-only dataset behind the API.
//!
//! Loaded once at startup from the built-in seed (or a seed file) and never
//! mutated, so handlers share it behind an `Arc` without locking.

use std::collections::HashSet;
use std::path::Path;

use pmch_core::models::{ContactType, Department, EmergencyContact, Faq, OpdTiming};
use serde::Deserialize;
use thiserror::Error;

/// Hospital dataset shipped with the server.
const BUILTIN_SEED: &str = include_str!("seed.json");

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Failed to read seed file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse seed data: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Duplicate {table} id {id} in seed data")]
    DuplicateId { table: &'static str, id: i64 },
}

#[derive(Debug, Deserialize)]
struct Seed {
    departments: Vec<Department>,
    faqs: Vec<Faq>,
    contacts: Vec<EmergencyContact>,
}

#[derive(Debug, Clone)]
pub struct Catalog {
    /// Sorted by display order.
    departments: Vec<Department>,
    /// Sorted by id.
    faqs: Vec<Faq>,
    /// Sorted by id.
    contacts: Vec<EmergencyContact>,
}

fn check_unique(table: &'static str, ids: impl Iterator<Item = i64>) -> Result<(), CatalogError> {
    let mut seen = HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(CatalogError::DuplicateId { table, id });
        }
    }
    Ok(())
}

impl Catalog {
    pub fn new(
        mut departments: Vec<Department>,
        mut faqs: Vec<Faq>,
        mut contacts: Vec<EmergencyContact>,
    ) -> Result<Self, CatalogError> {
        check_unique("department", departments.iter().map(|d| d.id))?;
        check_unique("faq", faqs.iter().map(|f| f.id))?;
        check_unique("contact", contacts.iter().map(|c| c.id))?;

        departments.sort_by_key(|d| (d.order, d.id));
        faqs.sort_by_key(|f| f.id);
        contacts.sort_by_key(|c| c.id);

        Ok(Self {
            departments,
            faqs,
            contacts,
        })
    }

    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_SEED)
    }

    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let seed: Seed = serde_json::from_str(json)?;
        Self::new(seed.departments, seed.faqs, seed.contacts)
    }

    pub fn from_file(path: &Path) -> Result<Self, CatalogError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn department_count(&self) -> usize {
        self.departments.len()
    }

    /// One page of departments (1-based `page`) and the overall row count.
    pub fn departments_page(&self, page: u32, page_size: u32) -> (Vec<Department>, usize) {
        let skip = (page.saturating_sub(1) as usize).saturating_mul(page_size as usize);
        let rows = self
            .departments
            .iter()
            .skip(skip)
            .take(page_size as usize)
            .cloned()
            .collect();
        (rows, self.departments.len())
    }

    pub fn department(&self, id: i64) -> Option<&Department> {
        self.departments.iter().find(|d| d.id == id)
    }

    /// FAQs, optionally restricted to one category (exact match).
    pub fn faqs(&self, category: Option<&str>) -> Vec<Faq> {
        self.faqs
            .iter()
            .filter(|f| category.map_or(true, |c| f.category == c))
            .cloned()
            .collect()
    }

    pub fn contacts(&self, contact_type: Option<ContactType>) -> Vec<EmergencyContact> {
        self.contacts
            .iter()
            .filter(|c| contact_type.map_or(true, |t| c.contact_type == t))
            .cloned()
            .collect()
    }

    pub fn opd_timings(&self) -> Vec<OpdTiming> {
        self.departments.iter().map(Department::to_opd_timing).collect()
    }
}
