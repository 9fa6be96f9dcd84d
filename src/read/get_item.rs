use crate::{common, read};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result};
use std::collections;

/// get item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct GetItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    read_args: read::common::ReadArgs,
}

/// Get item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use product_crud::{common, read};
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let get_item = read::get_item::GetItem {
///     key: common::key::Key {
///         name: "productID".to_string(),
///         value: "1".to_string(),
///     },
///     read_args: read::common::ReadArgs {
///         consistent_read: Some(true),
///         table_name: "ProductsTable".to_string(),
///     },
/// };
/// get_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetItem<T> {
    /// The partition key of the item to retrieve.
    pub key: common::key::Key<T>,
    /// Additional read operation arguments (table name, consistent read).
    pub read_args: read::common::ReadArgs,
}

impl<T: Serialize> TryFrom<GetItem<T>> for GetItemInput {
    type Error = Error;

    fn try_from(get_item: GetItem<T>) -> Result<Self> {
        let key = get_item.key.try_into()?;
        let operation = Self {
            key,
            read_args: get_item.read_args,
        };
        Ok(operation)
    }
}

impl<T: Serialize> GetItem<T> {
    /// Execute the get item operation.
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::get_item::GetItemOutput,
        error::SdkError<operation::get_item::GetItemError>,
    > {
        let get_item: GetItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client.get_item().set_key(Some(get_item.key));
        crate::apply_read_args!(builder, get_item.read_args)
            .send()
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use rstest::rstest;
    use serde_json::Value;

    #[rstest]
    #[case::eventually_consistent(
        GetItem {
            key: common::key::Key {
                name: "a".to_string(),
                value: Value::String(
                    "b".to_string()
                ),
            },
            read_args: read::common::ReadArgs {
                table_name: "c".to_string(),
                ..Default::default()
            },
        },
        GetItemInput {
            key: collections::HashMap::from(
                [
                    (
                        "a".to_string(),
                        types::AttributeValue::S(
                            "b".to_string()
                        )
                    ),
                ]
            ),
            read_args: read::common::ReadArgs {
                table_name: "c".to_string(),
                ..Default::default()
            },
        }
    )]
    #[case::consistent(
        GetItem {
            key: common::key::Key {
                name: "productID".to_string(),
                value: Value::String(
                    "d".to_string()
                ),
            },
            read_args: read::common::ReadArgs {
                consistent_read: Some(true),
                table_name: "ProductsTable".to_string(),
            },
        },
        GetItemInput {
            key: collections::HashMap::from(
                [
                    (
                        "productID".to_string(),
                        types::AttributeValue::S(
                            "d".to_string()
                        )
                    ),
                ]
            ),
            read_args: read::common::ReadArgs {
                consistent_read: Some(true),
                table_name: "ProductsTable".to_string(),
            },
        }
    )]
    fn test_get_item(#[case] args: GetItem<Value>, #[case] expected: GetItemInput) {
        let actual: GetItemInput = args.try_into().unwrap();
        assert_eq!(actual, expected);
    }
}
