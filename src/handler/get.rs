use crate::{error::ApiError, handler, store::ProductStore};

use lambda_http::{Body, Request, Response, http::StatusCode};

/// `GET /products/{id}`: strongly consistent read of one product.
#[tracing::instrument(name = "product_crud.get_product", skip_all)]
pub async fn get_product<S>(store: &S, request: Request) -> Result<Response<Body>, ApiError>
where
    S: ProductStore + ?Sized,
{
    let id = handler::path_id(&request)?;
    match store.get(&id).await? {
        Some(product) => handler::json_response(StatusCode::OK, &product),
        None => {
            tracing::debug!(product_id = %id, "product not found");
            Err(ApiError::NotFound(handler::ITEM_NOT_FOUND.to_string()))
        }
    }
}
