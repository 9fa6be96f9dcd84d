#![deny(missing_docs)]

//! # Product CRUD
//!
//! Request handlers exposing create, read, update, delete and list operations over a
//! single DynamoDB table of schemaless "product" records keyed by `productID`.
//!
//! ## Overview
//!
//! Every handler takes an explicitly constructed [`store::ProductStore`] and a
//! [`lambda_http::Request`], performs exactly one storage call and maps the outcome to a
//! [`lambda_http::Response`]:
//!
//! | Handler | Route | Success |
//! |---|---|---|
//! | [`handler::create::create_product`] | `POST /products` | `201` + stored record |
//! | [`handler::get::get_product`] | `GET /products/{id}` | `200` + record |
//! | [`handler::update::update_product`] | `PATCH`/`PUT /products/{id}` | `200` + updated record |
//! | [`handler::delete::delete_product`] | `DELETE /products/{id}` | `204` |
//! | [`handler::list::list_products`] | `GET /products` | `200` + scan payload |
//!
//! ## Quick Example
//!
//! ```no_run
//! use lambda_http::{Request, service_fn};
//! use product_crud::{config::Config, router, store::dynamo::DynamoProductStore};
//!
//! # async fn example() -> Result<(), lambda_http::Error> {
//! let config = Config::from_env();
//! let store = DynamoProductStore::connect(&config).await;
//! lambda_http::run(service_fn(|request: Request| router::route(&store, request))).await
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@handler`] - The five product handlers
//! - [`mod@router`] - Method and path dispatch onto the handlers
//! - [`mod@store`] - Storage seam with DynamoDB and in-memory backends
//! - [`mod@expression`] - Store-independent update assignments
//! - [`mod@common`], [`mod@read`], [`mod@write`] - Typed DynamoDB operations

/// Common utilities for keys and conditions.
pub mod common;

/// Process configuration read from the environment.
pub mod config;

/// API error type and its HTTP mapping.
pub mod error;

/// Update assignments built from a record's field names.
pub mod expression;

/// Product request handlers.
///
/// This module provides one entry point per operation:
/// - Creating a product with a generated identifier
/// - Reading a product by identifier
/// - Partially updating a product
/// - Deleting a product
/// - Listing every product
pub mod handler;

/// Read operations for retrieving data from DynamoDB tables.
pub mod read;

/// Dispatch of incoming requests onto the product handlers.
pub mod router;

/// Product storage backends.
pub mod store;

/// Write operations for modifying data in DynamoDB tables.
pub mod write;
