//! CareBridge Storage Service
//!
//! Turns stored file references (avatar keys) into time-limited access URLs:
//! - AWS S3 presigned GET URLs for production
//! - Mock signer producing deterministic URLs for testing and development
//! - LocalStack / MinIO support through a custom endpoint

use std::time::Duration;

use thiserror::Error;

pub mod mock;
pub mod s3;

/// Default lifetime of a signed URL
pub const DEFAULT_URL_TTL_SECS: u64 = 3600;

/// Longest lifetime S3 accepts for a presigned URL (7 days)
pub const MAX_URL_TTL_SECS: u64 = 604_800;

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Storage configuration error: {0}")]
    Configuration(String),

    #[error("Invalid file key: {0}")]
    InvalidKey(String),

    #[error("URL signing failed: {0}")]
    Signing(String),
}

impl From<StorageError> for carebridge_common::Error {
    fn from(err: StorageError) -> Self {
        carebridge_common::Error::Storage(err.to_string())
    }
}

/// Storage service configuration
#[derive(Debug, Clone)]
pub struct StorageConfig {
    /// Signer provider (s3, mock)
    pub provider: String,
    /// Bucket holding uploaded avatars
    pub bucket: String,
    /// AWS region for S3
    pub aws_region: Option<String>,
    /// AWS endpoint URL (for LocalStack / MinIO)
    pub aws_endpoint_url: Option<String>,
    /// Lifetime of generated URLs
    pub url_ttl: Duration,
}

impl StorageConfig {
    /// Create storage config from environment variables
    pub fn from_env() -> Result<Self, StorageError> {
        dotenvy::dotenv().ok();

        let provider = std::env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "mock".to_string());

        let bucket =
            std::env::var("S3_BUCKET_AVATARS").unwrap_or_else(|_| "carebridge-avatars".to_string());

        let aws_region = std::env::var("AWS_REGION").ok();
        let aws_endpoint_url = std::env::var("AWS_ENDPOINT_URL").ok();

        let ttl_secs = match std::env::var("SIGNED_URL_TTL_SECS") {
            Ok(raw) => raw.parse::<u64>().map_err(|_| {
                StorageError::Configuration(format!("SIGNED_URL_TTL_SECS is not a number: {}", raw))
            })?,
            Err(_) => DEFAULT_URL_TTL_SECS,
        };

        if ttl_secs == 0 || ttl_secs > MAX_URL_TTL_SECS {
            return Err(StorageError::Configuration(format!(
                "SIGNED_URL_TTL_SECS must be between 1 and {}",
                MAX_URL_TTL_SECS
            )));
        }

        Ok(Self {
            provider,
            bucket,
            aws_region,
            aws_endpoint_url,
            url_ttl: Duration::from_secs(ttl_secs),
        })
    }
}

/// Signed-URL provider
#[async_trait::async_trait]
pub trait UrlSigner: Send + Sync {
    /// Produce a time-limited GET URL for a stored file reference
    async fn sign(&self, file_key: &str) -> Result<String, StorageError>;

    /// Lifetime of URLs produced by this signer
    fn url_ttl(&self) -> Duration;
}

/// Reject keys S3 would treat as the bucket root or that carry traversal segments.
pub(crate) fn validate_key(file_key: &str) -> Result<(), StorageError> {
    let key = file_key.trim();
    if key.is_empty() {
        return Err(StorageError::InvalidKey("file key is empty".to_string()));
    }
    if key.split('/').any(|segment| segment == "..") {
        return Err(StorageError::InvalidKey(format!(
            "file key contains a parent segment: {}",
            file_key
        )));
    }
    Ok(())
}

/// URL signer factory
pub struct UrlSignerFactory;

impl UrlSignerFactory {
    /// Create a signer based on configuration
    pub async fn create(config: StorageConfig) -> Result<Box<dyn UrlSigner>, StorageError> {
        match config.provider.as_str() {
            "s3" | "aws-s3" => {
                tracing::info!(bucket = %config.bucket, "Creating S3 URL signer");
                let signer = s3::S3UrlSigner::new(config).await?;
                Ok(Box::new(signer))
            }
            "mock" => {
                tracing::info!("Creating mock URL signer");
                Ok(Box::new(mock::MockUrlSigner::with_ttl(config.url_ttl)))
            }
            provider => Err(StorageError::Configuration(format!(
                "Unknown storage provider: {}. Supported providers: s3, mock",
                provider
            ))),
        }
    }
}
