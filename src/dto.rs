//! Identifier rules for the back-office input objects.

use crate::validation::{FieldRule, InputSchema, SchemaSet};

pub fn sale_schema() -> InputSchema {
    InputSchema::new("sale")
        .field(FieldRule::uuid("customerId"))
        .field(FieldRule::uuid("sellerId"))
        .field(FieldRule::uuid("budgetId"))
        .field(FieldRule::uuid_array("productIds"))
}

pub fn budget_schema() -> InputSchema {
    InputSchema::new("budget")
        .field(FieldRule::uuid("customerId"))
        .field(FieldRule::uuid("sellerId"))
        .field(FieldRule::uuid_array("productIds"))
}

pub fn product_schema() -> InputSchema {
    InputSchema::new("product")
        .field(FieldRule::uuid("categoryId"))
        .field(FieldRule::uuid("supplierId"))
}

pub fn notification_schema() -> InputSchema {
    InputSchema::new("notification")
        .field(FieldRule::uuid("customerId"))
        .field(FieldRule::uuid("saleId"))
        .field(FieldRule::uuid_array("budgetIds"))
}

pub fn printer_schema() -> InputSchema {
    InputSchema::new("printer")
        .field(FieldRule::uuid("printerId"))
        .field(FieldRule::uuid("saleId"))
}

pub fn default_schemas() -> SchemaSet {
    SchemaSet::new()
        .register(sale_schema())
        .register(budget_schema())
        .register(product_schema())
        .register(notification_schema())
        .register(printer_schema())
}
