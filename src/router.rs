//! Dispatch of incoming requests onto the product handlers.
//!
//! | Method | Path | Handler |
//! |---|---|---|
//! | `POST` | `/products` | [`handler::create::create_product`] |
//! | `GET` | `/products` | [`handler::list::list_products`] |
//! | `GET` | `/products/{id}` | [`handler::get::get_product`] |
//! | `PATCH`, `PUT` | `/products/{id}` | [`handler::update::update_product`] |
//! | `DELETE` | `/products/{id}` | [`handler::delete::delete_product`] |
//!
//! Leading path segments such as an API Gateway stage name are ignored. An `id` taken from
//! the path is percent-decoded; one that does not decode to UTF-8 is used as is.

use crate::{error::ApiError, handler, store::ProductStore};

use lambda_http::{Body, Request, RequestExt, Response, http::Method};
use std::{borrow::Cow, collections};

const COLLECTION: &str = "products";

#[derive(Debug, PartialEq)]
enum Route {
    Collection,
    Item(String),
}

fn match_route(path: &str) -> Option<Route> {
    let segments: Vec<&str> = path.split('/').filter(|segment| !segment.is_empty()).collect();
    match segments.as_slice() {
        [.., COLLECTION, id] => Some(Route::Item(
            urlencoding::decode(id).map_or_else(|_| (*id).to_string(), Cow::into_owned),
        )),
        [.., COLLECTION] => Some(Route::Collection),
        _ => None,
    }
}

fn with_id(request: Request, id: String) -> Request {
    if request
        .path_parameters_ref()
        .and_then(|parameters| parameters.first(handler::ID_PARAMETER))
        .is_some()
    {
        return request;
    }
    request.with_path_parameters(collections::HashMap::from([(
        handler::ID_PARAMETER.to_string(),
        id,
    )]))
}

/// Route one request and render any [`ApiError`] as its JSON response.
///
/// Never fails: every error, including storage faults, becomes a response.
pub async fn route<S>(store: &S, request: Request) -> Result<Response<Body>, lambda_http::Error>
where
    S: ProductStore + ?Sized,
{
    let method = request.method().clone();
    let path = request.uri().path().to_string();
    tracing::info!(%method, %path, "incoming request");

    let response = match dispatch(store, request, &method, &path).await {
        Ok(response) => response,
        Err(e) => {
            if e.status().is_server_error() {
                tracing::error!(error = %e, "request failed");
            } else {
                tracing::info!(error = %e, status = e.status().as_u16(), "request rejected");
            }
            e.into_response()
        }
    };
    Ok(response)
}

async fn dispatch<S>(
    store: &S,
    request: Request,
    method: &Method,
    path: &str,
) -> Result<Response<Body>, ApiError>
where
    S: ProductStore + ?Sized,
{
    match match_route(path) {
        Some(Route::Collection) => match *method {
            Method::GET => handler::list::list_products(store, request).await,
            Method::POST => handler::create::create_product(store, request).await,
            _ => Err(ApiError::MethodNotAllowed),
        },
        Some(Route::Item(id)) => {
            let request = with_id(request, id);
            match *method {
                Method::GET => handler::get::get_product(store, request).await,
                Method::PATCH | Method::PUT => {
                    handler::update::update_product(store, request).await
                }
                Method::DELETE => handler::delete::delete_product(store, request).await,
                _ => Err(ApiError::MethodNotAllowed),
            }
        }
        None => Err(ApiError::NotFound("Not found".to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        handler::testing,
        store::{PRODUCT_ID, memory::MemoryProductStore},
    };

    use lambda_http::http::StatusCode;
    use rstest::rstest;
    use serde_json::{Value, json};

    fn request(method: Method, path: &str, body: Option<Value>) -> Request {
        let body = body.map_or(Body::Empty, |body| Body::from(body.to_string()));
        let mut request = Request::new(body);
        *request.method_mut() = method;
        *request.uri_mut() = path.parse().unwrap();
        request
    }

    #[rstest]
    #[case::collection("/products", Some(Route::Collection))]
    #[case::trailing_slash("/products/", Some(Route::Collection))]
    #[case::staged_collection("/prod/products", Some(Route::Collection))]
    #[case::item("/products/abc", Some(Route::Item("abc".to_string())))]
    #[case::staged_item("/prod/products/abc", Some(Route::Item("abc".to_string())))]
    #[case::encoded_item("/products/a%20b", Some(Route::Item("a b".to_string())))]
    #[case::invalid_utf8_item("/products/a%FF", Some(Route::Item("a%FF".to_string())))]
    #[case::root("/", None)]
    #[case::other("/orders/abc", None)]
    #[case::too_deep("/products/abc/reviews", None)]
    fn test_match_route(#[case] path: &str, #[case] expected: Option<Route>) {
        assert_eq!(match_route(path), expected);
    }

    #[test]
    fn test_with_id_keeps_runtime_parameter() {
        let request = testing::with_id(Request::default(), "from-runtime");
        let request = with_id(request, "from-path".to_string());
        assert_eq!(
            request.path_parameters().first(handler::ID_PARAMETER),
            Some("from-runtime")
        );
    }

    #[tokio::test]
    async fn test_crud_round_trip() {
        let store = MemoryProductStore::new();

        let response = route(
            &store,
            request(Method::POST, "/products", Some(json!({"name": "Widget", "price": 9.99}))),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::CREATED);
        let created = testing::body(&response);
        let id = created[PRODUCT_ID].as_str().unwrap().to_string();
        let item_path = format!("/products/{id}");

        let response = route(&store, request(Method::GET, &item_path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(testing::body(&response), created);

        let response = route(
            &store,
            request(Method::PATCH, &item_path, Some(json!({"price": 5}))),
        )
        .await
        .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(testing::body(&response)["price"], json!(5));

        let response = route(&store, request(Method::GET, "/products", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(testing::body(&response)["Count"], json!(1));

        let response = route(&store, request(Method::DELETE, &item_path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NO_CONTENT);

        let response = route(&store, request(Method::GET, &item_path, None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(testing::body(&response), json!({"error": "Item doesn't exist"}));
    }

    #[rstest]
    #[case::unknown_path(
        Method::GET,
        "/orders",
        StatusCode::NOT_FOUND,
        json!({"error": "Not found"})
    )]
    #[case::collection_method(
        Method::DELETE,
        "/products",
        StatusCode::METHOD_NOT_ALLOWED,
        json!({"error": "Method not allowed"})
    )]
    #[case::item_method(
        Method::POST,
        "/products/abc",
        StatusCode::METHOD_NOT_ALLOWED,
        json!({"error": "Method not allowed"})
    )]
    #[tokio::test]
    async fn test_route_errors(
        #[case] method: Method,
        #[case] path: &str,
        #[case] status: StatusCode,
        #[case] body: Value,
    ) {
        let store = MemoryProductStore::new();
        let response = route(&store, request(method, path, None)).await.unwrap();
        assert_eq!(response.status(), status);
        assert_eq!(testing::body(&response), body);
    }

    #[tokio::test]
    async fn test_encoded_id_reaches_store() {
        let store = MemoryProductStore::new();
        let product = match json!({"productID": "a b", "name": "Widget"}) {
            Value::Object(product) => product,
            _ => unreachable!(),
        };
        store.put(&product).await.unwrap();

        let response = route(&store, request(Method::GET, "/products/a%20b", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(testing::body(&response)["name"], json!("Widget"));
    }

    #[tokio::test]
    async fn test_update_without_body() {
        let store = MemoryProductStore::new();
        let response = route(&store, request(Method::PUT, "/products/abc", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        let body = testing::body(&response);
        assert!(body["error"].as_str().unwrap().starts_with("Invalid JSON"));
    }
}
