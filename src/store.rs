//! Product storage backends.
//!
//! Handlers only talk to [`ProductStore`]. [`dynamo::DynamoProductStore`] is the
//! production backend; [`memory::MemoryProductStore`] keeps records in process with the
//! same semantics.

/// DynamoDB backend.
pub mod dynamo;

/// In-process backend.
pub mod memory;

use crate::expression;

use async_trait::async_trait;
use serde::Serialize;
use serde_json::Value;
use thiserror::Error;

/// Name of the key attribute of every product.
pub const PRODUCT_ID: &str = "productID";

/// A schemaless product record.
pub type Product = serde_json::Map<String, Value>;

/// Storage failure.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage service rejected the request or could not be reached.
    #[error("dynamodb request failed: {0}")]
    Sdk(#[from] aws_sdk_dynamodb::Error),
    /// A record could not be converted to or from attribute values.
    #[error("attribute conversion failed: {0}")]
    Serialization(#[from] serde_dynamo::Error),
    /// The record carries no string `productID`.
    #[error("record has no string productID attribute")]
    MissingKey,
}

/// Result of a full table scan, serialized the way the store reports it.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ScanResult {
    /// Every record, or `None` when the store reported no items array at all.
    #[serde(rename = "Items")]
    pub items: Option<Vec<Product>>,
    /// Number of records returned.
    #[serde(rename = "Count")]
    pub count: i32,
    /// Number of records evaluated.
    #[serde(rename = "ScannedCount")]
    pub scanned_count: i32,
}

/// Storage operations used by the product handlers.
#[async_trait]
pub trait ProductStore: Send + Sync {
    /// Strongly consistent point lookup.
    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError>;

    /// Store a record unconditionally, replacing any record with the same identifier.
    async fn put(&self, product: &Product) -> Result<(), StoreError>;

    /// Overwrite the given fields of an existing record and return its new image.
    ///
    /// Returns `None` without writing anything when no record has this identifier.
    async fn update(
        &self,
        id: &str,
        update_set: expression::UpdateSet,
    ) -> Result<Option<Product>, StoreError>;

    /// Remove an existing record. Returns `false` when no record has this identifier.
    async fn delete(&self, id: &str) -> Result<bool, StoreError>;

    /// Read every record of the collection, unordered.
    async fn scan(&self) -> Result<ScanResult, StoreError>;
}
