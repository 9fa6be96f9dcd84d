//! Common utilities for DynamoDB operations.
//!
//! This module provides shared types used across read and write operations,
//! including key handling and condition expressions.

/// Existence conditions for conditional writes.
pub mod condition;

/// Key types for identifying items in DynamoDB tables.
pub mod key;

use aws_sdk_dynamodb::types;
use std::collections;

fn get_expression(left: String, operator: &str, right: String) -> String {
    if left.is_empty() {
        right
    } else if right.is_empty() {
        left
    } else {
        format!("{left}{operator}{right}")
    }
}

pub(crate) fn non_empty<K, V>(
    map: collections::HashMap<K, V>,
) -> Option<collections::HashMap<K, V>> {
    if map.is_empty() { None } else { Some(map) }
}

/// expression operation
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct ExpressionInput {
    pub(crate) expression: String,
    pub(crate) expression_attribute_names: collections::HashMap<String, String>,
    pub(crate) expression_attribute_values: collections::HashMap<String, types::AttributeValue>,
}

impl ExpressionInput {
    pub(crate) fn merge(operator: &str, items: Vec<Self>) -> Self {
        let mut operation = Self::default();
        for item in items {
            operation
                .expression_attribute_names
                .extend(item.expression_attribute_names);
            operation
                .expression_attribute_values
                .extend(item.expression_attribute_values);
            operation.expression = get_expression(operation.expression, operator, item.expression);
        }
        operation
    }

    pub(crate) fn merge_into(
        self,
        names: &mut Option<collections::HashMap<String, String>>,
        values: &mut Option<collections::HashMap<String, types::AttributeValue>>,
    ) -> String {
        if !self.expression_attribute_names.is_empty() {
            match names {
                Some(existing) => existing.extend(self.expression_attribute_names),
                None => *names = Some(self.expression_attribute_names),
            }
        }
        if !self.expression_attribute_values.is_empty() {
            match values {
                Some(existing) => existing.extend(self.expression_attribute_values),
                None => *values = Some(self.expression_attribute_values),
            }
        }
        self.expression
    }
}
