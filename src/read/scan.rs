use crate::read;

use aws_sdk_dynamodb::{Client, error, operation};

/// Scan operation.
///
/// Follows `LastEvaluatedKey` until the whole table has been read and folds every page
/// into a single output.
///
/// ```rust,no_run
/// use aws_sdk_dynamodb::Client;
/// use product_crud::read;
///
/// # async fn example(client: &Client) -> Result<(), Box<dyn std::error::Error>> {
/// let scan = read::scan::Scan {
///     read_args: read::common::ReadArgs {
///         table_name: "ProductsTable".to_string(),
///         ..Default::default()
///     },
/// };
/// scan.send(client).await?;
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug, Default, Eq, Hash, PartialEq)]
pub struct Scan {
    /// Additional read operation arguments (table name, consistent read).
    pub read_args: read::common::ReadArgs,
}

impl Scan {
    /// Execute the scan operation.
    #[tracing::instrument(name = "product_crud.scan", skip(client), err)]
    pub async fn send(
        self,
        client: &Client,
    ) -> Result<operation::scan::ScanOutput, error::SdkError<operation::scan::ScanError>> {
        let builder = client.scan();
        let mut paginator = crate::apply_read_args!(builder, self.read_args)
            .into_paginator()
            .send();
        let mut pages = Vec::new();
        while let Some(page) = paginator.next().await {
            pages.push(page?);
        }
        tracing::debug!(pages = pages.len(), "scan finished");
        Ok(read::common::merge_pages(pages))
    }
}
