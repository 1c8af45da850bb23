//! Reading Terraform state objects from S3

use async_trait::async_trait;
use aws_sdk_s3::error::DisplayErrorContext;
use aws_sdk_s3::Client as S3Client;
use log::debug;

use crate::error::{ChError, Result};

use super::AwsSession;

/// Source of stored objects, addressed by bucket and key
#[async_trait]
pub trait ObjectStore: Send + Sync {
    /// Read a whole object
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>>;
}

/// [`ObjectStore`] backed by S3 GetObject
pub struct S3ObjectStore {
    client: S3Client,
}

impl S3ObjectStore {
    pub fn new(session: &AwsSession) -> Self {
        Self {
            client: S3Client::new(session.config()),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn get_object(&self, bucket: &str, key: &str) -> Result<Vec<u8>> {
        debug!("Fetching s3://{}/{}", bucket, key);

        let output = self
            .client
            .get_object()
            .bucket(bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| ChError::Storage(DisplayErrorContext(&e).to_string()))?;

        let data = output.body.collect().await.map_err(|e| {
            ChError::Storage(format!("Failed to read s3://{}/{}: {}", bucket, key, e))
        })?;

        let bytes = data.into_bytes();
        debug!("Read {} bytes from s3://{}/{}", bytes.len(), bucket, key);
        Ok(bytes.to_vec())
    }
}
