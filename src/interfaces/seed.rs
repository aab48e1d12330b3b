use crate::domain::catalog::{Category, Product};
use crate::error::Result;
use serde::Deserialize;
use std::io::Read;

/// Catalog contents loaded at startup when running against the in-memory
/// store. In production the catalog is an external database; this is the
/// console/test substitute.
#[derive(Debug, Deserialize)]
pub struct CatalogSeed {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
}

/// Reads a catalog seed from any JSON `Read` source (e.g. File, Stdin).
pub fn read_seed<R: Read>(source: R) -> Result<CatalogSeed> {
    Ok(serde_json::from_reader(source)?)
}
