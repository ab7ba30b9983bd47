//! S3-compatible object storage (AWS S3, MinIO, LocalStack, Supabase S3)

use async_trait::async_trait;
use aws_sdk_s3::config::http::HttpResponse;
use aws_sdk_s3::config::{BehaviorVersion, Builder, Credentials, Region};
use aws_sdk_s3::error::{DisplayErrorContext, SdkError};
use aws_sdk_s3::primitives::ByteStream;
use aws_sdk_s3::types::ObjectCannedAcl;
use aws_sdk_s3::Client;
use reqwest::Url;
use urlencoding::encode;

use crate::config::{S3Config, StorageProvider};
use crate::domain::ports::{ObjectStorage, StoredObject};
use crate::error::StorageError;

const CREDENTIALS_PROVIDER: &str = "wednesdev-config";

pub struct S3Storage {
    client: Client,
    endpoint: String,
    bucket: String,
}

/// SDK settings for a static-credential, path-style endpoint
fn sdk_config(config: &S3Config, endpoint: &str) -> Builder {
    let credentials = Credentials::new(
        config.access_key.clone(),
        config.secret_key.clone(),
        None,
        None,
        CREDENTIALS_PROVIDER,
    );
    aws_sdk_s3::Config::builder()
        .behavior_version(BehaviorVersion::latest())
        .region(Region::new(config.region.clone()))
        .endpoint_url(endpoint)
        .credentials_provider(credentials)
        .force_path_style(true)
}

fn checked_endpoint(config: &S3Config) -> Result<String, StorageError> {
    let endpoint = config.endpoint.trim_end_matches('/').to_string();
    let parsed = Url::parse(&endpoint).map_err(|e| {
        StorageError::Misconfigured(format!("Invalid S3 endpoint '{}': {}", endpoint, e))
    })?;
    if parsed.host_str().is_none() {
        return Err(StorageError::Misconfigured(format!(
            "S3 endpoint '{}' has no host",
            endpoint
        )));
    }
    Ok(endpoint)
}

/// Status code and provider message of a failed SDK call
fn failure<E>(err: &SdkError<E, HttpResponse>) -> (u16, String)
where
    E: std::error::Error + 'static,
{
    let status = err
        .raw_response()
        .map(|response| response.status().as_u16())
        .unwrap_or(0);
    (status, DisplayErrorContext(err).to_string())
}

impl S3Storage {
    pub fn new(config: &S3Config) -> Result<Self, StorageError> {
        let endpoint = checked_endpoint(config)?;
        let client = Client::from_conf(sdk_config(config, &endpoint).build());
        Ok(Self {
            client,
            endpoint,
            bucket: config.bucket.clone(),
        })
    }

    /// Object URL, keeping any path prefix the endpoint carries
    pub fn public_url(&self, key: &str) -> String {
        let encoded: Vec<String> = key.split('/').map(|seg| encode(seg).into_owned()).collect();
        format!(
            "{}/{}/{}",
            self.endpoint,
            encode(&self.bucket),
            encoded.join("/")
        )
    }
}

#[async_trait]
impl ObjectStorage for S3Storage {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        self.client
            .put_object()
            .bucket(&self.bucket)
            .key(path)
            .content_type(content_type)
            .acl(ObjectCannedAcl::PublicRead)
            .body(ByteStream::from(bytes))
            .send()
            .await
            .map_err(|e| {
                let (status, message) = failure(&e);
                StorageError::Upload { status, message }
            })?;

        Ok(StoredObject {
            url: self.public_url(path),
            path: path.to_string(),
        })
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        self.client
            .delete_object()
            .bucket(&self.bucket)
            .key(path)
            .send()
            .await
            .map_err(|e| {
                let (status, message) = failure(&e);
                StorageError::Delete { status, message }
            })?;
        Ok(())
    }

    fn provider(&self) -> StorageProvider {
        StorageProvider::S3
    }
}
