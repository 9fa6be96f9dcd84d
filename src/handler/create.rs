use crate::{
    error::ApiError,
    handler,
    store::{PRODUCT_ID, ProductStore},
};

use lambda_http::{Body, Request, Response, http::StatusCode};
use serde_json::Value;
use uuid::Uuid;

/// `POST /products`: store the JSON object body under a freshly generated `productID`.
///
/// Any `productID` sent by the client is replaced. The put is unconditional; responds
/// `201` with the stored record.
#[tracing::instrument(name = "product_crud.create_product", skip_all)]
pub async fn create_product<S>(store: &S, request: Request) -> Result<Response<Body>, ApiError>
where
    S: ProductStore + ?Sized,
{
    let mut product = handler::parse_product(&request)?;
    let id = Uuid::new_v4().to_string();
    product.insert(PRODUCT_ID.to_string(), Value::String(id.clone()));
    store.put(&product).await?;
    tracing::info!(product_id = %id, "product created");
    handler::json_response(StatusCode::CREATED, &product)
}
