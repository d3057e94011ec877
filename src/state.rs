use std::sync::Arc;

use crate::dto;
use crate::validation::SchemaSet;

#[derive(Clone)]
pub struct AppState {
    pub schemas: Arc<SchemaSet>,
}

impl AppState {
    pub fn new(schemas: SchemaSet) -> Self {
        AppState {
            schemas: Arc::new(schemas),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(dto::default_schemas())
    }
}
