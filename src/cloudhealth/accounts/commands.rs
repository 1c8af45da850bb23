//! AWS account listing command handler

use log::{debug, info};

use crate::cli::{validate_api_key, validate_owner_id, validate_per_page, validate_timeout, AccountsCli};
use crate::cloudhealth::ChClient;
use crate::error::Result;
use crate::output::JsonFormatter;

/// Validate arguments, list the accounts and print them as a JSON array
pub async fn run_accounts_command(cli: &AccountsCli) -> Result<()> {
    let api_key = validate_api_key(cli.api_key.as_deref())?;
    let owner_id = cli
        .owner_id
        .as_deref()
        .map(validate_owner_id)
        .transpose()?;
    let per_page = validate_per_page(cli.per_page)?;
    let timeout = validate_timeout(cli.timeout)?;

    debug!(
        "Listing AWS accounts: owner_id={:?}, per_page={}, api_url={}",
        owner_id, per_page, cli.api_url
    );

    let mut client = ChClient::new(api_key.to_string(), cli.api_url.clone(), timeout)?;
    client.set_verbose(cli.verbose);

    let accounts = client.list_aws_accounts(per_page, owner_id).await?;
    info!("Found {} AWS accounts", accounts.len());

    JsonFormatter::new(cli.pretty).print(&accounts)
}
