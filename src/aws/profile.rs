//! Profile properties that identify an assumed-role session
//!
//! The credential cache must not hand one configuration's session to
//! another, so its key covers every property that decides where a
//! profile's credentials come from, following the `source_profile` chain.

use std::borrow::Cow;
use std::collections::BTreeMap;

use aws_config::profile::profile_file::ProfileFiles;
use aws_types::os_shim_internal::{Env, Fs};

use crate::error::{ChError, Result};

/// Properties that select the role, the session or the credential source
pub const SESSION_PROPERTIES: &[&str] = &[
    "role_arn",
    "role_session_name",
    "external_id",
    "duration_seconds",
    "source_profile",
    "credential_source",
    "mfa_serial",
    "credential_process",
    "web_identity_token_file",
    "sso_session",
    "sso_start_url",
    "sso_account_id",
    "sso_role_name",
    "aws_access_key_id",
];

/// Collect the session properties of `profile` and of its source profiles.
///
/// Keys are `<profile>.<property>`. A profile that is not defined yields an
/// empty map; credential resolution reports that case itself.
pub async fn session_parameters(
    fs: &Fs,
    env: &Env,
    files: &ProfileFiles,
    profile: &str,
) -> Result<BTreeMap<String, String>> {
    let profiles = aws_config::profile::load(fs, env, files, Some(Cow::Owned(profile.to_string())))
        .await
        .map_err(|e| ChError::Credentials(format!("Failed to load AWS profiles: {}", e)))?;

    let mut params = BTreeMap::new();
    let mut visited: Vec<String> = Vec::new();
    let mut next = Some(profile.to_string());

    while let Some(name) = next.take() {
        if visited.contains(&name) {
            break;
        }
        let Some(section) = profiles.get_profile(&name) else {
            break;
        };

        for property in SESSION_PROPERTIES {
            if let Some(value) = section.get(property) {
                params.insert(format!("{}.{}", name, property), value.to_string());
            }
        }

        next = section.get("source_profile").map(str::to_string);
        visited.push(name);
    }

    Ok(params)
}

/// Session properties of `profile` read from the default config files
pub async fn default_session_parameters(profile: &str) -> Result<BTreeMap<String, String>> {
    session_parameters(&Fs::real(), &Env::real(), &ProfileFiles::default(), profile).await
}
