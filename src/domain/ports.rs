use super::catalog::{Category, Product};
use super::session::Session;
use crate::error::Result;
use async_trait::async_trait;
use rust_decimal::Decimal;

/// Read access to products and categories, plus the single stock mutation
/// the purchase flow performs.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Case-insensitive substring match on product name.
    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>>;
    /// All categories, ordered by id ascending.
    async fn list_categories(&self) -> Result<Vec<Category>>;
    async fn category_by_id(&self, id: u32) -> Result<Option<Category>>;
    async fn products_by_category(&self, category_id: u32) -> Result<Vec<Product>>;
    async fn product_by_id(&self, id: u32) -> Result<Option<Product>>;
    /// Blind decrement, no compare-and-swap. Concurrent purchases can race
    /// here; callers accept the lost-update risk.
    async fn decrement_stock(&self, product_id: u32, by: i64) -> Result<()>;
}

/// Per-user conversation state, keyed by opaque sender identity.
///
/// No per-user locking: two overlapping messages from the same sender can
/// both read the same snapshot. Known limitation of the current design.
#[async_trait]
pub trait SessionStore: Send + Sync {
    async fn get(&self, user_id: &str) -> Result<Option<Session>>;
    async fn put(&self, user_id: &str, session: Session) -> Result<()>;
}

/// A created pay-by-code charge. `code` is the string the customer pastes
/// into their banking app.
#[derive(Debug, Clone, PartialEq)]
pub struct Charge {
    pub code: String,
}

#[async_trait]
pub trait PaymentGateway: Send + Sync {
    async fn create_charge(
        &self,
        amount: Decimal,
        description: &str,
        payer_email: &str,
    ) -> Result<Charge>;
}

/// Outbound side of the chat transport.
#[async_trait]
pub trait Outbound: Send + Sync {
    async fn send_text(&self, user_id: &str, text: &str) -> Result<()>;
    async fn send_media(&self, user_id: &str, media_url: &str, caption: &str) -> Result<()>;
}

pub type CatalogBox = Box<dyn Catalog>;
pub type SessionStoreBox = Box<dyn SessionStore>;
pub type PaymentGatewayBox = Box<dyn PaymentGateway>;
pub type OutboundBox = Box<dyn Outbound>;
