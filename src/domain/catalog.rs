use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A sellable item as stored in the catalog.
///
/// Prices are `rust_decimal::Decimal` to keep currency math exact. The image
/// URL is optional and unreliable; delivery degrades to text when it cannot
/// be fetched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    pub price: Decimal,
    pub stock: i64,
    #[serde(default)]
    pub image_url: Option<String>,
    pub category_id: u32,
}

impl Product {
    pub fn in_stock(&self) -> bool {
        self.stock > 0
    }
}

/// A catalog category. The icon is an optional glyph; the menu renders a
/// default one when it is missing.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub icon: Option<String>,
}
