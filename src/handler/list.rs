use crate::{error::ApiError, handler, store::ProductStore};

use lambda_http::{Body, Request, Response, http::StatusCode};

/// `GET /products`: full unordered scan of the table.
///
/// Responds `200` with the scan payload (`Items`, `Count`, `ScannedCount`). When the store
/// reports no items array at all the body is `{"error": "No items found"}`, still `200`.
#[tracing::instrument(name = "product_crud.list_products", skip_all)]
pub async fn list_products<S>(store: &S, _request: Request) -> Result<Response<Body>, ApiError>
where
    S: ProductStore + ?Sized,
{
    let result = store.scan().await?;
    if result.items.is_none() {
        return handler::json_response(
            StatusCode::OK,
            &serde_json::json!({ "error": handler::NO_ITEMS_FOUND }),
        );
    }
    tracing::debug!(count = result.count, scanned_count = result.scanned_count, "products listed");
    handler::json_response(StatusCode::OK, &result)
}
