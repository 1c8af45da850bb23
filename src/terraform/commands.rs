//! State schema command handler

use std::io::{self, Write};

use log::{debug, info};

use crate::aws::{
    AwsSession, JsonFileCache, ObjectStore, S3ObjectStore, SessionOptions, StsCallerIdentity,
};
use crate::cli::{validate_timeout, StateSchemaCli};
use crate::error::Result;
use crate::output::JsonFormatter;

use super::schema::AccountSchema;
use super::state::{parse_state, root_outputs};

/// Resolve the session, read the state from S3 and print the account schema
pub async fn run_state_schema_command(cli: &StateSchemaCli) -> Result<()> {
    let timeout = validate_timeout(cli.timeout)?;

    if cli.verbose {
        eprintln!("Getting session from profile {}", cli.profile);
    }

    let options = SessionOptions {
        profile: cli.profile.clone(),
        region: cli.region.clone(),
        timeout,
        cache: (!cli.no_cache).then(JsonFileCache::new),
    };
    let session = AwsSession::load(&options).await?;
    debug!("Session region: {:?}", session.region());

    if cli.verbose {
        let arn = StsCallerIdentity::new(&session).caller_arn().await?;
        eprintln!("Caller identity is {}", arn);
    }

    let store = S3ObjectStore::new(&session);
    let mut stderr = io::stderr();
    let diagnostics = cli.verbose.then_some(&mut stderr as &mut dyn Write);
    let schema = build_schema(&store, &cli.s3_bucket, &cli.s3_key, diagnostics).await?;
    info!("Built account schema for '{}'", schema.name);

    JsonFormatter::new(cli.pretty).print(&schema)
}

/// Fetch a Terraform state object and project its root outputs.
///
/// When `diagnostics` is given, the raw state and the root outputs are
/// pretty-printed to it. The schema itself is never written there.
pub async fn build_schema<S>(
    store: &S,
    bucket: &str,
    key: &str,
    mut diagnostics: Option<&mut dyn Write>,
) -> Result<AccountSchema>
where
    S: ObjectStore + ?Sized,
{
    let body = store.get_object(bucket, key).await?;
    let state = parse_state(&body)?;

    let dump = JsonFormatter::new(true);
    if let Some(out) = diagnostics.as_deref_mut() {
        writeln!(out, "state")?;
        writeln!(out, "{}", dump.format(&state)?)?;
    }

    let outputs = root_outputs(&state)?;
    if let Some(out) = diagnostics.as_deref_mut() {
        writeln!(out, "outputs")?;
        writeln!(out, "{}", dump.format(outputs)?)?;
    }

    AccountSchema::from_outputs(outputs)
}
