use aws_sdk_dynamodb::{operation, types};
use std::collections;

/// Arguments for read operations (GetItem, Scan).
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct ReadArgs {
    /// Whether to use a consistent read.
    ///
    /// `true` for strongly consistent reads, `false` or `None` for eventually consistent reads.
    /// Consistent reads consume more capacity units but guarantee you see the latest data.
    pub consistent_read: Option<bool>,
    /// The name of the table to read from.
    pub table_name: String,
}

/// Fold every page of a scan into a single output.
///
/// `items` stays `None` only when no page carried an items array, which is distinct from
/// a scan that returned an empty array.
pub(crate) fn merge_pages(
    pages: Vec<operation::scan::ScanOutput>,
) -> operation::scan::ScanOutput {
    let initial: (Option<Vec<collections::HashMap<String, types::AttributeValue>>>, i32, i32) =
        (None, 0, 0);
    let (items, count, scanned_count) =
        pages
            .into_iter()
            .fold(initial, |(items, count, scanned_count), page| {
                let items = match (items, page.items) {
                    (Some(mut items), Some(other_items)) => {
                        items.extend(other_items);
                        Some(items)
                    }
                    (items, other_items) => items.or(other_items),
                };
                (
                    items,
                    count + page.count,
                    scanned_count + page.scanned_count,
                )
            });
    operation::scan::ScanOutput::builder()
        .set_items(items)
        .count(count)
        .scanned_count(scanned_count)
        .build()
}

/// apply common read operation settings to a builder
#[macro_export]
macro_rules! apply_read_args {
    ($builder:expr, $read_args:expr) => {
        $builder
            .set_consistent_read($read_args.consistent_read)
            .table_name($read_args.table_name)
    };
}
