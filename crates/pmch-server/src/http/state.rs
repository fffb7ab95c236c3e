use std::sync::Arc;

use crate::catalog::Catalog;
use crate::config::Environment;

#[derive(Debug, Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
    environment: Environment,
}

impl AppState {
    pub fn new(catalog: Catalog, environment: Environment) -> Self {
        Self {
            catalog: Arc::new(catalog),
            environment,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }
}
