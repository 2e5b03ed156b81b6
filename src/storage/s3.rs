use std::time::Duration;

use async_trait::async_trait;
use aws_config::{timeout::TimeoutConfig, BehaviorVersion, Region, SdkConfig};
use aws_sdk_s3::{primitives::ByteStream, types::ObjectCannedAcl, Client};
use axum::body::Bytes;
use tracing::{debug, info};

use super::{ObjectStore, StorageResult};
use crate::config::ServiceConfig;

const OPERATION_TIMEOUT: Duration = Duration::from_secs(30);

/// S3 bucket holding publicly readable airport images
pub struct S3ObjectStore {
    client: Client,
    bucket: String,
    public_base_url: String,
}

impl S3ObjectStore {
    /// Build a client for the configured bucket using ambient AWS credentials
    pub async fn new(config: &ServiceConfig) -> Self {
        let timeout_config = TimeoutConfig::builder()
            .operation_timeout(OPERATION_TIMEOUT)
            .build();

        let mut loader = aws_config::defaults(BehaviorVersion::latest())
            .region(Region::new(config.region.clone()))
            .timeout_config(timeout_config);

        if let Some(endpoint_url) = &config.endpoint_url {
            loader = loader.endpoint_url(endpoint_url);
        }

        let sdk_config = loader.load().await;

        info!(
            "Initialized S3 client for bucket {} in {}",
            config.bucket, config.region
        );

        Self::from_sdk_config(&sdk_config, config)
    }

    fn from_sdk_config(sdk_config: &SdkConfig, config: &ServiceConfig) -> Self {
        let mut builder = aws_sdk_s3::config::Builder::from(sdk_config);

        // Custom endpoints (LocalStack, MinIO) don't resolve bucket subdomains
        if config.endpoint_url.is_some() {
            builder = builder.force_path_style(true);
        }

        Self {
            client: Client::from_conf(builder.build()),
            bucket: config.bucket.clone(),
            public_base_url: config.public_base_url.clone(),
        }
    }
}

#[async_trait]
impl ObjectStore for S3ObjectStore {
    async fn put_object(&self, key: &str, body: Bytes, content_type: &str) -> StorageResult<()> {
        debug!("PutObject s3://{}/{} ({} bytes)", self.bucket, key, body.len());

        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .body(ByteStream::from(body))
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .send()
            .await?;

        Ok(())
    }

    fn public_url(&self, key: &str) -> String {
        format!("{}/{}", self.public_base_url, key)
    }
}
