use crate::{error::ApiError, handler, store::ProductStore};

use lambda_http::{Body, Request, Response, http::StatusCode};

/// `DELETE /products/{id}`: remove an existing product, responding `204` with no body.
#[tracing::instrument(name = "product_crud.delete_product", skip_all)]
pub async fn delete_product<S>(store: &S, request: Request) -> Result<Response<Body>, ApiError>
where
    S: ProductStore + ?Sized,
{
    let id = handler::path_id(&request)?;
    if store.delete(&id).await? {
        tracing::info!(product_id = %id, "product deleted");
        Ok(handler::empty_response(StatusCode::NO_CONTENT))
    } else {
        Err(ApiError::NotFound(handler::ITEM_NOT_FOUND.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handler::{create::create_product, get::get_product, testing},
        store::{PRODUCT_ID, memory::MemoryProductStore},
    };

    use serde_json::json;

    #[tokio::test]
    async fn test_delete_then_get() {
        let store = MemoryProductStore::new();
        let created = create_product(&store, testing::request(json!({"name": "Widget"})))
            .await
            .unwrap();
        let created = testing::body(&created);
        let id = created[PRODUCT_ID].as_str().unwrap();

        let response = delete_product(&store, testing::with_id(Request::default(), id))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.body().is_empty());

        let err = get_product(&store, testing::with_id(Request::default(), id))
            .await
            .unwrap_err();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_delete_missing_product() {
        let store = MemoryProductStore::new();
        let response = delete_product(&store, testing::with_id(Request::default(), "missing"))
            .await
            .unwrap_err()
            .into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(testing::body(&response), json!({"error": "Item doesn't exist"}));
    }

    #[tokio::test]
    async fn test_delete_without_id() {
        let store = MemoryProductStore::new();
        let err = delete_product(&store, Request::default()).await.unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }
}
