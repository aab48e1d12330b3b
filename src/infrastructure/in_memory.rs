use crate::domain::catalog::{Category, Product};
use crate::domain::ports::{Catalog, SessionStore};
use crate::domain::session::Session;
use crate::error::{BotError, Result};
use async_trait::async_trait;
use std::collections::{BTreeMap, HashMap};
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory catalog.
///
/// Categories live in a `BTreeMap` so listing them comes out ordered by id.
/// Cloning shares the underlying maps, which is what the tests rely on to
/// observe stock changes made through the engine.
#[derive(Default, Clone)]
pub struct InMemoryCatalog {
    categories: Arc<RwLock<BTreeMap<u32, Category>>>,
    products: Arc<RwLock<HashMap<u32, Product>>>,
}

impl InMemoryCatalog {
    /// Creates a new, empty in-memory catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a catalog pre-populated with the given categories and products.
    pub fn seed(categories: Vec<Category>, products: Vec<Product>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(
                categories.into_iter().map(|c| (c.id, c)).collect(),
            )),
            products: Arc::new(RwLock::new(
                products.into_iter().map(|p| (p.id, p)).collect(),
            )),
        }
    }
}

#[async_trait]
impl Catalog for InMemoryCatalog {
    async fn search_by_name(&self, term: &str) -> Result<Vec<Product>> {
        let term = term.to_lowercase();
        let products = self.products.read().await;
        let mut found: Vec<Product> = products
            .values()
            .filter(|p| p.name.to_lowercase().contains(&term))
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id);
        Ok(found)
    }

    async fn list_categories(&self) -> Result<Vec<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.values().cloned().collect())
    }

    async fn category_by_id(&self, id: u32) -> Result<Option<Category>> {
        let categories = self.categories.read().await;
        Ok(categories.get(&id).cloned())
    }

    async fn products_by_category(&self, category_id: u32) -> Result<Vec<Product>> {
        let products = self.products.read().await;
        let mut found: Vec<Product> = products
            .values()
            .filter(|p| p.category_id == category_id)
            .cloned()
            .collect();
        found.sort_by_key(|p| p.id);
        Ok(found)
    }

    async fn product_by_id(&self, id: u32) -> Result<Option<Product>> {
        let products = self.products.read().await;
        Ok(products.get(&id).cloned())
    }

    async fn decrement_stock(&self, product_id: u32, by: i64) -> Result<()> {
        let mut products = self.products.write().await;
        let product = products
            .get_mut(&product_id)
            .ok_or_else(|| BotError::Catalog(format!("unknown product {product_id}")))?;
        // Guarded at zero; the decrement itself is still not conditional on
        // current stock, so overlapping purchases can oversell.
        product.stock = (product.stock - by).max(0);
        Ok(())
    }
}

/// A thread-safe in-memory session store.
///
/// One `RwLock` over the whole map and no per-user locking: overlapping
/// messages for the same user may interleave get/put. Sessions are never
/// removed.
#[derive(Default, Clone)]
pub struct InMemorySessionStore {
    sessions: Arc<RwLock<HashMap<String, Session>>>,
}

impl InMemorySessionStore {
    /// Creates a new, empty in-memory session store.
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, user_id: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(user_id).cloned())
    }

    async fn put(&self, user_id: &str, session: Session) -> Result<()> {
        let mut sessions = self.sessions.write().await;
        sessions.insert(user_id.to_string(), session);
        Ok(())
    }
}
