use crate::{
    error::ApiError,
    expression::UpdateSet,
    handler,
    store::{PRODUCT_ID, ProductStore},
};

use lambda_http::{Body, Request, Response, http::StatusCode};

/// `PATCH`/`PUT /products/{id}`: overwrite exactly the fields present in the JSON body.
///
/// `productID` in the body is ignored since the key is immutable. The write only applies
/// to an existing product; otherwise responds `404`. Responds `200` with the updated
/// record.
#[tracing::instrument(name = "product_crud.update_product", skip_all)]
pub async fn update_product<S>(store: &S, request: Request) -> Result<Response<Body>, ApiError>
where
    S: ProductStore + ?Sized,
{
    let id = handler::path_id(&request)?;
    let fields = handler::parse_product(&request)?;
    let update_set: UpdateSet = fields
        .into_iter()
        .filter(|(field, _)| field != PRODUCT_ID)
        .collect();
    if update_set.is_empty() {
        return Err(ApiError::BadRequest("No fields to update".to_string()));
    }
    tracing::debug!(product_id = %id, fields = update_set.len(), "updating product");
    match store.update(&id, update_set).await? {
        Some(product) => handler::json_response(StatusCode::OK, &product),
        None => Err(ApiError::NotFound(handler::UPDATE_FAILED.to_string())),
    }
}
