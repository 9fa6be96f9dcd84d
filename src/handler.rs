//! Product request handlers.
//!
//! Each handler takes the shared store and one request, issues a single storage call and
//! maps the outcome to a response:
//! - [`create::create_product`] stores the body under a fresh `productID`
//! - [`get::get_product`] reads one product
//! - [`update::update_product`] overwrites the fields present in the body
//! - [`delete::delete_product`] removes one product
//! - [`list::list_products`] scans the whole table
//!
//! Bodies are always JSON and always sent with `Content-Type: application/json`; a `204`
//! carries no body.

/// Create handler.
pub mod create;

/// Delete handler.
pub mod delete;

/// Read handler.
pub mod get;

/// List handler.
pub mod list;

/// Update handler.
pub mod update;

use crate::{error::ApiError, store::Product};

use lambda_http::{
    Body, Request, RequestExt, Response,
    http::{HeaderValue, StatusCode, header},
};
use serde::Serialize;

/// Name of the path parameter carrying the product identifier.
pub const ID_PARAMETER: &str = "id";

pub(crate) const ITEM_NOT_FOUND: &str = "Item doesn't exist";
pub(crate) const UPDATE_FAILED: &str = "Update failed";
pub(crate) const NO_ITEMS_FOUND: &str = "No items found";

pub(crate) fn json_response(
    status: StatusCode,
    body: &impl Serialize,
) -> Result<Response<Body>, ApiError> {
    let json = serde_json::to_string(body).map_err(|e| ApiError::Internal(e.to_string()))?;
    let mut response = Response::new(Body::from(json));
    *response.status_mut() = status;
    response.headers_mut().insert(
        header::CONTENT_TYPE,
        HeaderValue::from_static("application/json"),
    );
    Ok(response)
}

pub(crate) fn empty_response(status: StatusCode) -> Response<Body> {
    let mut response = Response::new(Body::Empty);
    *response.status_mut() = status;
    response
}

pub(crate) fn path_id(request: &Request) -> Result<String, ApiError> {
    request
        .path_parameters()
        .first(ID_PARAMETER)
        .filter(|id| !id.is_empty())
        .map(str::to_owned)
        .ok_or_else(|| ApiError::BadRequest(format!("Missing path parameter '{ID_PARAMETER}'")))
}

pub(crate) fn parse_product(request: &Request) -> Result<Product, ApiError> {
    let product: Product = serde_json::from_slice(request.body())?;
    Ok(product)
}


#[cfg(test)]
mod tests {
    use super::*;

    use serde_json::{Value, json};

    #[test]
    fn test_path_id() {
        let request = testing::with_id(Request::default(), "abc");
        assert_eq!(path_id(&request).unwrap(), "abc");
    }

    #[test]
    fn test_path_id_missing() {
        let err = path_id(&Request::default()).unwrap_err();
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn test_path_id_empty() {
        let request = testing::with_id(Request::default(), "");
        assert!(matches!(path_id(&request), Err(ApiError::BadRequest(_))));
    }

    #[test]
    fn test_parse_product() {
        let product = parse_product(&testing::request(json!({"name": "Widget"}))).unwrap();
        assert_eq!(Value::Object(product), json!({"name": "Widget"}));
    }

    #[test]
    fn test_parse_product_rejects_non_objects() {
        for body in ["", "not json", "[1, 2]", "\"Widget\""] {
            let err = parse_product(&testing::raw_request(body)).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest(_)), "{body}");
        }
    }

    #[test]
    fn test_json_response() {
        let response = json_response(StatusCode::CREATED, &json!({"a": 1})).unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        assert_eq!(testing::content_type(&response), Some("application/json"));
        assert_eq!(testing::body(&response), json!({"a": 1}));
    }

    #[test]
    fn test_empty_response() {
        let response = empty_response(StatusCode::NO_CONTENT);
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert!(response.body().is_empty());
        assert_eq!(testing::content_type(&response), None);
    }
}
