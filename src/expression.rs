//! Update assignments built from a record's field names.
//!
//! A partial update is described as an ordered list of [`Assignment`]s, one per field to
//! overwrite. Each field name and value is bound to an indirection token so a backend can
//! render the list into its own update primitive without the field names colliding with
//! reserved words of its expression grammar. The DynamoDB rendering lives in
//! [`crate::write::update_item`].

use serde_json::Value;

/// Prefix of the placeholder standing for a field name.
pub const NAME_PLACEHOLDER_PREFIX: &str = "#key";

/// Prefix of the placeholder standing for a field value.
pub const VALUE_PLACEHOLDER_PREFIX: &str = ":value";

/// A single field overwrite with its placeholders.
#[derive(Clone, Debug, PartialEq)]
pub struct Assignment {
    /// The name of the field to overwrite.
    pub field: String,
    /// Placeholder bound to [`Assignment::field`], e.g. `#key0`.
    pub name_placeholder: String,
    /// Placeholder bound to [`Assignment::value`], e.g. `:value0`.
    pub value_placeholder: String,
    /// The new value of the field.
    pub value: Value,
}

/// Ordered set of field overwrites.
///
/// ```rust
/// use product_crud::expression::UpdateSet;
/// use serde_json::json;
///
/// let update_set = UpdateSet::from_fields(
///     json!({"name": "Widget", "price": 5}).as_object().cloned().unwrap_or_default(),
/// );
/// let placeholders: Vec<_> = update_set
///     .assignments()
///     .iter()
///     .map(|assignment| assignment.name_placeholder.as_str())
///     .collect();
/// assert_eq!(placeholders, ["#key0", "#key1"]);
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct UpdateSet {
    assignments: Vec<Assignment>,
}

impl UpdateSet {
    /// Build assignments for exactly the given fields, in iteration order.
    pub fn from_fields<I>(fields: I) -> Self
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let assignments = fields
            .into_iter()
            .enumerate()
            .map(|(index, (field, value))| Assignment {
                field,
                name_placeholder: format!("{NAME_PLACEHOLDER_PREFIX}{index}"),
                value_placeholder: format!("{VALUE_PLACEHOLDER_PREFIX}{index}"),
                value,
            })
            .collect();
        Self { assignments }
    }

    /// The assignments in placeholder order.
    pub fn assignments(&self) -> &[Assignment] {
        &self.assignments
    }

    /// Whether there is nothing to overwrite.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of fields to overwrite.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }
}

impl FromIterator<(String, Value)> for UpdateSet {
    fn from_iter<I: IntoIterator<Item = (String, Value)>>(iter: I) -> Self {
        Self::from_fields(iter)
    }
}

impl IntoIterator for UpdateSet {
    type Item = Assignment;
    type IntoIter = std::vec::IntoIter<Assignment>;

    fn into_iter(self) -> Self::IntoIter {
        self.assignments.into_iter()
    }
}
