//! AWS S3 URL Signer Implementation
//!
//! Presigns GET-object requests against the avatar bucket, with support for
//! LocalStack / MinIO through a custom endpoint.

use std::time::Duration;

use aws_config::{BehaviorVersion, Region};
use aws_credential_types::Credentials;
use aws_sdk_s3::config::SharedCredentialsProvider;
use aws_sdk_s3::presigning::PresigningConfig;
use aws_sdk_s3::Client as S3Client;

use crate::{validate_key, StorageConfig, StorageError, UrlSigner};

/// AWS S3 presigning signer
pub struct S3UrlSigner {
    client: S3Client,
    bucket: String,
    ttl: Duration,
}

impl S3UrlSigner {
    /// Create a new S3 signer
    pub async fn new(config: StorageConfig) -> Result<Self, StorageError> {
        if config.bucket.trim().is_empty() {
            return Err(StorageError::Configuration(
                "S3_BUCKET_AVATARS must not be empty".to_string(),
            ));
        }

        let region = config
            .aws_region
            .clone()
            .unwrap_or_else(|| "us-east-1".to_string());

        let client = match config.aws_endpoint_url.as_ref() {
            Some(endpoint_url) => {
                tracing::info!("Using custom S3 endpoint: {}", endpoint_url);

                // For LocalStack, use dummy credentials
                let credentials = Credentials::new(
                    "test-access-key",
                    "test-secret-key",
                    None,
                    None,
                    "localstack-storage-provider",
                );

                let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region))
                    .endpoint_url(endpoint_url)
                    .credentials_provider(SharedCredentialsProvider::new(credentials))
                    .load()
                    .await;

                // LocalStack and MinIO do not serve virtual-hosted bucket names
                let s3_config = aws_sdk_s3::config::Builder::from(&sdk_config)
                    .force_path_style(true)
                    .build();
                S3Client::from_conf(s3_config)
            }
            None => {
                let sdk_config = aws_config::defaults(BehaviorVersion::latest())
                    .region(Region::new(region))
                    .load()
                    .await;
                S3Client::new(&sdk_config)
            }
        };

        Ok(Self {
            client,
            bucket: config.bucket,
            ttl: config.url_ttl,
        })
    }
}

#[async_trait::async_trait]
impl UrlSigner for S3UrlSigner {
    async fn sign(&self, file_key: &str) -> Result<String, StorageError> {
        validate_key(file_key)?;

        let presigning = PresigningConfig::expires_in(self.ttl)
            .map_err(|e| StorageError::Configuration(format!("Invalid URL TTL: {}", e)))?;

        let request = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(file_key)
            .presigned(presigning)
            .await
            .map_err(|e| {
                tracing::warn!(file_key, error = %e, "Failed to presign S3 object");
                StorageError::Signing(e.to_string())
            })?;

        Ok(request.uri().to_string())
    }

    fn url_ttl(&self) -> Duration {
        self.ttl
    }
}
