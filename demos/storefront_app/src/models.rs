// demos/storefront_app/src/models.rs

//! Catalog entities owned by the host. The extension never sees these; it
//! only reads and writes named attributes keyed by the product id.

use chrono::{DateTime, Utc};
use serde::Serialize;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize)]
pub struct CatalogProduct {
    pub id: Uuid,
    pub name: String,
    pub description: Option<String>, // Description can be optional
    pub price_cents: i32,
    pub created_at: DateTime<Utc>,
}

impl CatalogProduct {
    pub fn new(name: &str, description: Option<&str>, price_cents: i32) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            description: description.map(|d| d.to_string()),
            price_cents,
            created_at: Utc::now(),
        }
    }

    pub fn display_price(&self) -> String {
        format!("${}.{:02}", self.price_cents / 100, self.price_cents % 100)
    }
}
