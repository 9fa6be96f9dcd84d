use crate::{
    common,
    config::Config,
    expression, read,
    store::{PRODUCT_ID, Product, ProductStore, ScanResult, StoreError},
    write,
};

use async_trait::async_trait;
use aws_sdk_dynamodb::{Client, config::Region, types};
use serde_dynamo::from_item;
use std::collections;

type Item = collections::HashMap<String, types::AttributeValue>;

/// Products stored in a DynamoDB table keyed by `productID`.
///
/// Build it once per process and share it across invocations; the SDK client pools its
/// connections internally and carries no request state.
#[derive(Clone, Debug)]
pub struct DynamoProductStore {
    client: Client,
    table_name: String,
}

impl DynamoProductStore {
    /// Wrap an existing SDK client.
    pub fn new(client: Client, table_name: impl Into<String>) -> Self {
        Self {
            client,
            table_name: table_name.into(),
        }
    }

    /// Load the AWS configuration for `config.region` and build the store.
    pub async fn connect(config: &Config) -> Self {
        let sdk_config = aws_config::defaults(aws_config::BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .load()
            .await;
        Self::new(Client::new(&sdk_config), config.table_name.clone())
    }

    /// Name of the backing table.
    pub fn table_name(&self) -> &str {
        &self.table_name
    }

    fn key(id: &str) -> common::key::Key<&str> {
        common::key::Key {
            name: PRODUCT_ID.to_string(),
            value: id,
        }
    }

    fn must_exist(&self, return_values: Option<types::ReturnValue>) -> write::common::WriteArgs {
        write::common::WriteArgs {
            condition: Some(common::condition::AttributeExists {
                name: PRODUCT_ID.to_string(),
            }),
            return_values,
            table_name: self.table_name.clone(),
        }
    }
}

fn to_product(item: Item) -> Result<Product, StoreError> {
    from_item(item).map_err(StoreError::from)
}

#[async_trait]
impl ProductStore for DynamoProductStore {
    async fn get(&self, id: &str) -> Result<Option<Product>, StoreError> {
        let output = read::get_item::GetItem {
            key: Self::key(id),
            read_args: read::common::ReadArgs {
                consistent_read: Some(true),
                table_name: self.table_name.clone(),
            },
        }
        .send(&self.client)
        .await
        .map_err(aws_sdk_dynamodb::Error::from)?;
        output.item.map(to_product).transpose()
    }

    async fn put(&self, product: &Product) -> Result<(), StoreError> {
        write::put_item::PutItem {
            item: product,
            write_args: write::common::WriteArgs {
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        }
        .send(&self.client)
        .await
        .map_err(aws_sdk_dynamodb::Error::from)?;
        Ok(())
    }

    async fn update(
        &self,
        id: &str,
        update_set: expression::UpdateSet,
    ) -> Result<Option<Product>, StoreError> {
        let result = write::update_item::UpdateItem {
            key: Self::key(id),
            update_set,
            write_args: self.must_exist(Some(types::ReturnValue::AllNew)),
        }
        .send(&self.client)
        .await;
        match result {
            Ok(output) => output.attributes.map(to_product).transpose(),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|err| err.is_conditional_check_failed_exception()) =>
            {
                tracing::debug!(product_id = %id, "update skipped, no such product");
                Ok(None)
            }
            Err(err) => Err(aws_sdk_dynamodb::Error::from(err).into()),
        }
    }

    async fn delete(&self, id: &str) -> Result<bool, StoreError> {
        let result = write::delete_item::DeleteItem {
            key: Self::key(id),
            write_args: self.must_exist(None),
        }
        .send(&self.client)
        .await;
        match result {
            Ok(_) => Ok(true),
            Err(err)
                if err
                    .as_service_error()
                    .is_some_and(|err| err.is_conditional_check_failed_exception()) =>
            {
                tracing::debug!(product_id = %id, "delete skipped, no such product");
                Ok(false)
            }
            Err(err) => Err(aws_sdk_dynamodb::Error::from(err).into()),
        }
    }

    async fn scan(&self) -> Result<ScanResult, StoreError> {
        let output = read::scan::Scan {
            read_args: read::common::ReadArgs {
                table_name: self.table_name.clone(),
                ..Default::default()
            },
        }
        .send(&self.client)
        .await
        .map_err(aws_sdk_dynamodb::Error::from)?;
        let items = output
            .items
            .map(|items| items.into_iter().map(to_product).collect::<Result<Vec<_>, _>>())
            .transpose()?;
        Ok(ScanResult {
            items,
            count: output.count,
            scanned_count: output.scanned_count,
        })
    }
}
