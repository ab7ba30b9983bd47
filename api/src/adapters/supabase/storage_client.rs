//! Supabase Storage client

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use urlencoding::encode;

use crate::config::StorageProvider;
use crate::domain::ports::{ObjectStorage, StoredObject};
use crate::error::StorageError;

const CACHE_CONTROL: &str = "max-age=3600";

pub struct SupabaseStorage {
    http: Client,
    base_url: String,
    bucket: String,
    /// Service role key when configured, else the anon key
    api_key: String,
}

#[derive(Serialize)]
struct RemoveRequest<'a> {
    prefixes: Vec<&'a str>,
}

impl SupabaseStorage {
    pub fn new(base_url: String, bucket: String, api_key: String) -> Self {
        Self {
            http: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            bucket,
            api_key,
        }
    }

    fn encoded_key(key: &str) -> String {
        key.split('/')
            .map(|seg| encode(seg).into_owned())
            .collect::<Vec<_>>()
            .join("/")
    }

    fn object_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/{}/{}",
            self.base_url,
            self.bucket,
            Self::encoded_key(key)
        )
    }

    pub fn public_url(&self, key: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url,
            self.bucket,
            Self::encoded_key(key)
        )
    }
}

#[async_trait]
impl ObjectStorage for SupabaseStorage {
    async fn upload(
        &self,
        path: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, StorageError> {
        let response = self
            .http
            .post(self.object_url(path))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .header("content-type", content_type)
            .header("cache-control", CACHE_CONTROL)
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Upload {
                status: status.as_u16(),
                message,
            });
        }

        Ok(StoredObject {
            url: self.public_url(path),
            path: path.to_string(),
        })
    }

    async fn delete(&self, path: &str) -> Result<(), StorageError> {
        let response = self
            .http
            .delete(format!("{}/storage/v1/object/{}", self.base_url, self.bucket))
            .header("apikey", &self.api_key)
            .bearer_auth(&self.api_key)
            .json(&RemoveRequest {
                prefixes: vec![path],
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(StorageError::Delete {
                status: status.as_u16(),
                message,
            });
        }
        Ok(())
    }

    fn provider(&self) -> StorageProvider {
        StorageProvider::Supabase
    }
}
