//! AWS account API operations

use log::debug;
use serde_json::Value;

use crate::cloudhealth::ChClient;
use crate::config::api;
use crate::error::Result;

use super::models::AwsAccountsPage;
use super::pagination::{advance, PageStep, PaginationCursor};

impl ChClient {
    /// Build the URL of one page of the AWS accounts listing
    pub fn aws_accounts_url(&self, cursor: PaginationCursor) -> String {
        format!(
            "{}/{}?page={}&per_page={}",
            self.base_url(),
            api::AWS_ACCOUNTS,
            cursor.page,
            cursor.per_page
        )
    }

    /// Fetch the account records of a single page
    pub async fn get_aws_accounts_page(&self, cursor: PaginationCursor) -> Result<Vec<Value>> {
        let url = self.aws_accounts_url(cursor);
        let error_context = format!("AWS accounts (page {})", cursor.page);

        let body = self.get_body(&url, &error_context).await?;
        let page = AwsAccountsPage::from_body(&body)?;

        debug!("Page {} returned {} accounts", cursor.page, page.aws_accounts.len());
        Ok(page.aws_accounts)
    }

    /// List AWS accounts, page by page.
    ///
    /// Without `owner_id` every page is read until an empty one comes back.
    /// With `owner_id` the scan stops at the first page containing a matching
    /// account and returns only the matches from that page.
    pub async fn list_aws_accounts(
        &self,
        per_page: u32,
        owner_id: Option<u64>,
    ) -> Result<Vec<Value>> {
        let mut accounts = Vec::new();
        let mut step = PageStep::Scanning(PaginationCursor::new(per_page));

        while let PageStep::Scanning(cursor) = step {
            let records = self.get_aws_accounts_page(cursor).await?;
            let outcome = advance(cursor, owner_id, records);
            accounts.extend(outcome.keep);
            step = outcome.step;
        }

        debug!("Collected {} AWS accounts", accounts.len());
        Ok(accounts)
    }
}
