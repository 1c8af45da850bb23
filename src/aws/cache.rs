//! File-backed cache for temporary AWS credentials
//!
//! Assumed-role sessions are written as JSON files under `~/.aws/boto/cache`
//! so that repeated short-lived invocations reuse a session instead of
//! calling STS AssumeRole every time. Static credentials are never written.

use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use std::time::SystemTime;

use aws_credential_types::provider::{self, future, ProvideCredentials};
use aws_credential_types::Credentials;
use chrono::{DateTime, Duration, SecondsFormat, Utc};
use log::{debug, warn};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::config::cache as cache_config;
use crate::error::{ChError, Result};

/// On-disk cache entry
#[derive(Serialize, Deserialize, Debug)]
struct CacheEntry {
    #[serde(rename = "Credentials")]
    credentials: CachedCredentials,
}

#[derive(Serialize, Deserialize, Debug)]
#[serde(rename_all = "PascalCase")]
struct CachedCredentials {
    access_key_id: String,
    secret_access_key: String,
    #[serde(default)]
    session_token: Option<String>,
    /// RFC 3339 timestamp
    expiration: String,
}

/// Directory of cached credential files, one per cache key
#[derive(Debug, Clone)]
pub struct JsonFileCache {
    dir: PathBuf,
}

impl Default for JsonFileCache {
    fn default() -> Self {
        Self::new()
    }
}

impl JsonFileCache {
    /// Cache in the default directory (~/.aws/boto/cache)
    pub fn new() -> Self {
        Self {
            dir: dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(cache_config::DIR_PATH),
        }
    }

    /// Cache in a custom directory (for testing)
    pub fn with_dir(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Cache key: hex SHA-256 of the profile name, region and the
    /// profile's role/session properties
    pub fn cache_key(
        profile: &str,
        region: Option<&str>,
        session: &BTreeMap<String, String>,
    ) -> String {
        let params = serde_json::json!({
            "profile": profile,
            "region": region,
            "session": session,
        });
        format!("{:x}", Sha256::digest(params.to_string().as_bytes()))
    }

    fn entry_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    /// Load credentials that are still valid at `now` (with the expiry margin)
    pub fn load(&self, key: &str, now: DateTime<Utc>) -> Option<Credentials> {
        let path = self.entry_path(key);
        let content = fs::read_to_string(&path).ok()?;

        let entry: CacheEntry = match serde_json::from_str(&content) {
            Ok(entry) => entry,
            Err(e) => {
                debug!("Ignoring unreadable cache file {}: {}", path.display(), e);
                return None;
            }
        };

        let expiration = DateTime::parse_from_rfc3339(&entry.credentials.expiration)
            .ok()?
            .with_timezone(&Utc);
        if expiration - Duration::seconds(cache_config::EXPIRY_MARGIN_SECS) <= now {
            debug!("Cached credentials in {} have expired", path.display());
            return None;
        }

        let creds = entry.credentials;
        Some(Credentials::new(
            creds.access_key_id,
            creds.secret_access_key,
            creds.session_token,
            Some(SystemTime::from(expiration)),
            cache_config::PROVIDER_NAME,
        ))
    }

    /// Write expiring credentials; credentials without expiry are skipped
    pub fn store(&self, key: &str, credentials: &Credentials) -> Result<()> {
        let Some(expiry) = credentials.expiry() else {
            return Ok(());
        };

        let entry = CacheEntry {
            credentials: CachedCredentials {
                access_key_id: credentials.access_key_id().to_string(),
                secret_access_key: credentials.secret_access_key().to_string(),
                session_token: credentials.session_token().map(str::to_string),
                expiration: DateTime::<Utc>::from(expiry)
                    .to_rfc3339_opts(SecondsFormat::Secs, true),
            },
        };

        fs::create_dir_all(&self.dir).map_err(|e| {
            ChError::Config(format!(
                "Failed to create cache directory {}: {}",
                self.dir.display(),
                e
            ))
        })?;

        let path = self.entry_path(key);
        let tmp_path = path.with_extension("json.tmp");
        fs::write(&tmp_path, serde_json::to_string(&entry)?).map_err(|e| {
            ChError::Config(format!(
                "Failed to write cache file {}: {}",
                tmp_path.display(),
                e
            ))
        })?;

        // Set 0600 permissions on Unix
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;
            fs::set_permissions(&tmp_path, fs::Permissions::from_mode(0o600)).map_err(|e| {
                ChError::Config(format!("Failed to set permissions on cache file: {}", e))
            })?;
        }

        fs::rename(&tmp_path, &path).map_err(|e| {
            ChError::Config(format!(
                "Failed to rename cache file to {}: {}",
                path.display(),
                e
            ))
        })
    }
}

/// Credentials provider that consults a [`JsonFileCache`] before `inner`
#[derive(Debug)]
pub struct CachedCredentialsProvider<P> {
    inner: P,
    cache: Option<JsonFileCache>,
    key: String,
}

impl<P: ProvideCredentials> CachedCredentialsProvider<P> {
    /// Wrap `inner`; with no cache every call goes to `inner`
    pub fn new(inner: P, cache: Option<JsonFileCache>, key: String) -> Self {
        Self { inner, cache, key }
    }

    async fn resolve(&self) -> provider::Result {
        if let Some(cache) = &self.cache {
            if let Some(credentials) = cache.load(&self.key, Utc::now()) {
                debug!("Using cached credentials for key {}", self.key);
                return Ok(credentials);
            }
        }

        let credentials = self.inner.provide_credentials().await?;

        if let Some(cache) = &self.cache {
            if let Err(e) = cache.store(&self.key, &credentials) {
                warn!("Could not cache credentials: {}", e);
            }
        }

        Ok(credentials)
    }
}

impl<P: ProvideCredentials> ProvideCredentials for CachedCredentialsProvider<P> {
    fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
    where
        Self: 'a,
    {
        future::ProvideCredentials::new(self.resolve())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;

    fn session_credentials(expires_in: Duration) -> Credentials {
        Credentials::new(
            "ASIAEXAMPLE",
            "secret",
            Some("token".to_string()),
            Some(SystemTime::from(Utc::now() + expires_in)),
            "test",
        )
    }

    /// Provider counting how often it is asked for credentials
    #[derive(Debug)]
    struct CountingProvider {
        calls: AtomicUsize,
        credentials: Credentials,
    }

    impl ProvideCredentials for CountingProvider {
        fn provide_credentials<'a>(&'a self) -> future::ProvideCredentials<'a>
        where
            Self: 'a,
        {
            self.calls.fetch_add(1, Ordering::SeqCst);
            future::ProvideCredentials::ready(Ok(self.credentials.clone()))
        }
    }

    #[test]
    fn test_cache_key_is_stable_and_distinct() {
        let none = BTreeMap::new();
        let a = JsonFileCache::cache_key("default", None, &none);
        assert_eq!(a, JsonFileCache::cache_key("default", None, &none));
        assert_eq!(a.len(), 64);
        assert_ne!(a, JsonFileCache::cache_key("ops", None, &none));
        assert_ne!(
            a,
            JsonFileCache::cache_key("default", Some("eu-west-1"), &none)
        );

        let role = BTreeMap::from([(
            "default.role_arn".to_string(),
            "arn:aws:iam::111111111111:role/deploy".to_string(),
        )]);
        assert_ne!(a, JsonFileCache::cache_key("default", None, &role));
    }

    #[test]
    fn test_store_then_load() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::with_dir(dir.path().join("cache"));

        cache
            .store("k", &session_credentials(Duration::hours(1)))
            .unwrap();
        let loaded = cache.load("k", Utc::now()).unwrap();

        assert_eq!(loaded.access_key_id(), "ASIAEXAMPLE");
        assert_eq!(loaded.secret_access_key(), "secret");
        assert_eq!(loaded.session_token(), Some("token"));
        assert!(loaded.expiry().is_some());
    }

    #[test]
    fn test_expired_entry_is_ignored() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::with_dir(dir.path().to_path_buf());

        // Inside the expiry margin counts as expired
        cache
            .store("k", &session_credentials(Duration::seconds(60)))
            .unwrap();
        assert!(cache.load("k", Utc::now()).is_none());
    }

    #[test]
    fn test_static_credentials_are_not_written() {
        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::with_dir(dir.path().to_path_buf());

        let creds = Credentials::new("AKIAEXAMPLE", "secret", None, None, "test");
        cache.store("k", &creds).unwrap();
        assert!(!dir.path().join("k.json").exists());
    }

    #[test]
    fn test_corrupt_file_is_ignored() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("k.json"), "not json").unwrap();
        let cache = JsonFileCache::with_dir(dir.path().to_path_buf());
        assert!(cache.load("k", Utc::now()).is_none());
    }

    #[test]
    fn test_reads_botocore_style_entry() {
        let dir = TempDir::new().unwrap();
        fs::write(
            dir.path().join("k.json"),
            r#"{"Credentials": {"AccessKeyId": "ASIA1", "SecretAccessKey": "s",
                "SessionToken": "t", "Expiration": "2999-01-01T00:00:00+00:00"},
                "AssumedRoleUser": {"Arn": "arn:aws:sts::123456789012:assumed-role/r/s"}}"#,
        )
        .unwrap();
        let cache = JsonFileCache::with_dir(dir.path().to_path_buf());
        let loaded = cache.load("k", Utc::now()).unwrap();
        assert_eq!(loaded.access_key_id(), "ASIA1");
    }

    #[cfg(unix)]
    #[test]
    fn test_cache_file_permissions() {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new().unwrap();
        let cache = JsonFileCache::with_dir(dir.path().to_path_buf());
        cache
            .store("k", &session_credentials(Duration::hours(1)))
            .unwrap();

        let mode = fs::metadata(dir.path().join("k.json"))
            .unwrap()
            .permissions()
            .mode();
        assert_eq!(mode & 0o777, 0o600);
    }

    #[tokio::test]
    async fn test_provider_uses_cache_on_second_call() {
        let dir = TempDir::new().unwrap();
        let inner = CountingProvider {
            calls: AtomicUsize::new(0),
            credentials: session_credentials(Duration::hours(1)),
        };
        let provider = CachedCredentialsProvider::new(
            inner,
            Some(JsonFileCache::with_dir(dir.path().to_path_buf())),
            "k".to_string(),
        );

        provider.provide_credentials().await.unwrap();
        let second = provider.provide_credentials().await.unwrap();

        assert_eq!(provider.inner.calls.load(Ordering::SeqCst), 1);
        assert_eq!(second.access_key_id(), "ASIAEXAMPLE");
    }

    #[tokio::test]
    async fn test_provider_without_cache_always_delegates() {
        let inner = CountingProvider {
            calls: AtomicUsize::new(0),
            credentials: session_credentials(Duration::hours(1)),
        };
        let provider = CachedCredentialsProvider::new(inner, None, "k".to_string());

        provider.provide_credentials().await.unwrap();
        provider.provide_credentials().await.unwrap();

        assert_eq!(provider.inner.calls.load(Ordering::SeqCst), 2);
    }
}
