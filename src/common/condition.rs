use crate::common;

use std::collections;

/// Condition requiring an attribute to be present on the stored item.
///
/// Placed on the key attribute it turns a write into "only if the item exists".
///
/// ```rust
/// use product_crud::common::condition;
///
/// let condition = condition::AttributeExists {
///     name: "productID".to_string(),
/// };
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct AttributeExists {
    /// The name of the attribute that must exist.
    pub name: String,
}

impl From<AttributeExists> for common::ExpressionInput {
    fn from(condition: AttributeExists) -> Self {
        let placeholder = format!("#{}", condition.name);
        Self {
            expression: format!("attribute_exists({placeholder})"),
            expression_attribute_names: collections::HashMap::from([(
                placeholder,
                condition.name,
            )]),
            ..Default::default()
        }
    }
}
