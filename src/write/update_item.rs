use crate::{common, expression, write};

use aws_sdk_dynamodb::{Client, error, operation, types};
use serde::Serialize;
use serde_dynamo::{Error, Result, to_attribute_value};
use std::collections;

impl TryFrom<expression::UpdateSet> for common::ExpressionInput {
    type Error = Error;

    fn try_from(update_set: expression::UpdateSet) -> Result<Self> {
        let mut operations = Vec::with_capacity(update_set.len());
        for assignment in update_set {
            let value: types::AttributeValue = to_attribute_value(assignment.value)?;
            let expression = format!(
                "{} = {}",
                assignment.name_placeholder, assignment.value_placeholder
            );
            let operation = common::ExpressionInput {
                expression,
                expression_attribute_names: collections::HashMap::from([(
                    assignment.name_placeholder,
                    assignment.field,
                )]),
                expression_attribute_values: collections::HashMap::from([(
                    assignment.value_placeholder,
                    value,
                )]),
            };
            operations.push(operation);
        }
        let mut operation = common::ExpressionInput::merge(", ", operations);
        operation.expression = format!("SET {}", operation.expression);
        Ok(operation)
    }
}

/// update item operation
#[derive(Clone, Debug, Default, PartialEq)]
struct UpdateItemInput {
    key: collections::HashMap<String, types::AttributeValue>,
    update_expression: String,
    write_operation: write::common::WriteInput,
}

/// Update item operation.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::{Client, types};
/// use product_crud::{common, expression, write};
/// use serde_json::json;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let update_item = write::update_item::UpdateItem {
///     key: common::key::Key {
///         name: "productID".to_string(),
///         value: "1".to_string(),
///     },
///     update_set: expression::UpdateSet::from_fields([
///         ("price".to_string(), json!(5)),
///     ]),
///     write_args: write::common::WriteArgs {
///         return_values: Some(types::ReturnValue::AllNew),
///         table_name: "ProductsTable".to_string(),
///         ..Default::default()
///     },
/// };
/// // Sends "SET #key0 = :value0" with {"#key0": "price"} and {":value0": 5}
/// update_item.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct UpdateItem<T> {
    /// The partition key of the item to update.
    pub key: common::key::Key<T>,
    /// The fields to overwrite.
    pub update_set: expression::UpdateSet,
    /// Additional write operation arguments (table name, condition, return values).
    pub write_args: write::common::WriteArgs,
}

impl<T: Serialize> TryFrom<UpdateItem<T>> for UpdateItemInput {
    type Error = Error;

    fn try_from(update_item: UpdateItem<T>) -> Result<Self> {
        let key = update_item.key.try_into()?;
        let mut write_operation: write::common::WriteInput = update_item.write_args.into();
        let operation = update_item.update_set.try_into()?;
        let update_expression = write_operation.merge_expression(operation);
        let operation = Self {
            key,
            update_expression,
            write_operation,
        };
        Ok(operation)
    }
}

impl<T: Serialize> UpdateItem<T> {
    /// Execute the update item operation.
    #[tracing::instrument(name = "product_crud.update_item", skip_all, err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<
        operation::update_item::UpdateItemOutput,
        error::SdkError<operation::update_item::UpdateItemError>,
    > {
        let update_item: UpdateItemInput = self.try_into().map_err(error::BuildError::other)?;
        let builder = client
            .update_item()
            .set_key(Some(update_item.key))
            .update_expression(update_item.update_expression);
        crate::apply_write_operation!(builder, update_item.write_operation)
            .send()
            .await
    }
}
