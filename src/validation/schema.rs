use serde_json::{Map, Value};
use std::collections::HashMap;

use super::{is_valid_array, is_valid_single};
use crate::error::ValidationErrors;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Uuid,
    UuidArray,
}

/// A UUID rule bound to one named field of an input object.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRule {
    pub field: String,
    pub kind: FieldKind,
}

impl FieldRule {
    pub fn uuid(field: impl Into<String>) -> Self {
        Self { field: field.into(), kind: FieldKind::Uuid }
    }

    pub fn uuid_array(field: impl Into<String>) -> Self {
        Self { field: field.into(), kind: FieldKind::UuidArray }
    }

    /// Rejection message naming this rule's field.
    pub fn message(&self) -> String {
        match self.kind {
            FieldKind::Uuid => format!("{} deve ser um UUID válido", self.field),
            FieldKind::UuidArray => format!("{} deve ser um array de UUIDs válidos", self.field),
        }
    }

    pub fn check(&self, input: &Map<String, Value>) -> Result<(), String> {
        let value = input.get(&self.field);
        let valid = match self.kind {
            FieldKind::Uuid => is_valid_single(value),
            FieldKind::UuidArray => is_valid_array(value),
        };
        if valid { Ok(()) } else { Err(self.message()) }
    }
}

/// An input object schema: an explicit, ordered list of field rules.
#[derive(Debug, Clone, Default)]
pub struct InputSchema {
    name: String,
    rules: Vec<FieldRule>,
}

impl InputSchema {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into(), rules: Vec::new() }
    }

    pub fn field(mut self, rule: FieldRule) -> Self {
        self.rules.push(rule);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn rules(&self) -> &[FieldRule] {
        &self.rules
    }

    /// Runs every rule and collects all rejections in declaration order.
    ///
    /// A body that is not a JSON object carries no fields, so only rules
    /// that reject absence could fail on it (none do today).
    pub fn validate(&self, input: &Value) -> Result<(), ValidationErrors> {
        let empty = Map::new();
        let fields = input.as_object().unwrap_or(&empty);

        let messages: Vec<String> = self
            .rules
            .iter()
            .filter_map(|rule| rule.check(fields).err())
            .collect();

        if messages.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors::new(messages))
        }
    }
}

/// Schemas addressable by name. Built once and owned by the caller; there
/// is no process-wide registry.
#[derive(Debug, Clone, Default)]
pub struct SchemaSet {
    schemas: HashMap<String, InputSchema>,
}

impl SchemaSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `schema`, replacing any schema already registered under its name.
    pub fn register(mut self, schema: InputSchema) -> Self {
        self.schemas.insert(schema.name.clone(), schema);
        self
    }

    pub fn get(&self, name: &str) -> Option<&InputSchema> {
        self.schemas.get(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.schemas.keys().map(String::as_str)
    }
}
