use crate::{
    expression,
    store::{PRODUCT_ID, Product, ProductStore, ScanResult, StoreError},
};

use async_trait::async_trait;
use indexmap::IndexMap;
use serde_json::Value;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Products kept in process memory, in insertion order.
///
/// Mirrors the DynamoDB backend: writes are last-write-wins, a record without a string
/// `productID` is rejected, updates and deletes of a missing product leave the collection
/// untouched.
#[derive(Clone, Debug, Default)]
pub struct MemoryProductStore {
    products: Arc<RwLock<IndexMap<String, Product>>>,
}

impl MemoryProductStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored products.
    pub async fn len(&self) -> usize {
        self.products.read().await.len()
    }

    /// Whether the store holds no product.
    pub async fn is_empty(&self) -> bool {
        self.products.read().await.is_empty()
    }
}

#[async_trait]
impl ProductStore for MemoryProductStore {
    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let products = self.products.read().await;
        Ok(products.get(id).cloned())
    }

    async fn put(&self, product: &Product) -> Result<(), StoreError> {
        let Some(Value::String(id)) = product.get(PRODUCT_ID) else {
            return Err(StoreError::MissingKey);
        };
        let mut products = self.products.write().await;
        products.insert(id.clone(), product.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        update_set: expression::UpdateSet,
    ) -> Result<Option<Product>, StoreError> {
        let mut products = self.products.write().await;
        let Some(product) = products.get_mut(id) else {
            return Ok(None);
        };
        for assignment in update_set {
            product.insert(assignment.field, assignment.value);
        }
        Ok(Some(product.clone()))
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let mut products = self.products.write().await;
        Ok(products.shift_remove(id).is_some())
    }

    async fn scan(&self) -> Result<ScanResult, StoreError> {
        let products = self.products.read().await;
        let items: Vec<Product> = products.values().cloned().collect();
        let count = i32::try_from(items.len()).unwrap_or(i32::MAX);
        Ok(ScanResult {
            items: Some(items),
            count,
            scanned_count: count,
        })
    }
}
