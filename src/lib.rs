pub mod config;
pub mod dto;
pub mod error;
pub mod guard;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;
pub mod tasks;
pub mod utils;
pub mod validation;

// Re-export commonly used items for convenience
pub use error::{IdentifierError, ValidationErrors};
pub use guard::{ValidId, require_valid_parameter};
pub use models::Identifier;
pub use state::AppState;
pub use validation::{FieldKind, FieldRule, InputSchema, SchemaSet, is_valid_array, is_valid_single};
