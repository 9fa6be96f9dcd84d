use lambda_http::{Error, Request, run, service_fn};
use product_crud::{config::Config, router, store::dynamo::DynamoProductStore};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .json()
        .with_target(false)
        .without_time()
        .init();

    let config = Config::from_env();
    let store = DynamoProductStore::connect(&config).await;
    tracing::info!(table = %store.table_name(), region = %config.region, "product store ready");

    run(service_fn(|request: Request| router::route(&store, request))).await
}
