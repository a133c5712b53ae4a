use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use time::OffsetDateTime;
use uuid::Uuid;

/// Catalog entry. Prices are integer currency units; the UI groups categories
/// by `Classic` / `Premium` / `Graphic` but the column is free-form text.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub price: i64,
    pub category: String,
    pub image: String,
    pub sizes: Vec<String>,
    pub colors: Vec<String>,
    pub stock: i32,
    pub featured: bool,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
}

/// Insert payload used by the seeder.
#[derive(Debug, Clone)]
pub struct NewProduct {
    pub name: &'static str,
    pub description: &'static str,
    pub price: i64,
    pub category: &'static str,
    pub image: &'static str,
    pub sizes: &'static [&'static str],
    pub colors: &'static [&'static str],
    pub stock: i32,
    pub featured: bool,
}
