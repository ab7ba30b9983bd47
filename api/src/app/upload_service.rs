//! Upload service
//!
//! Names and validates uploaded objects before handing them to the
//! configured object storage.

use std::sync::Arc;

use chrono::Utc;
use rand::Rng;

use crate::domain::ports::{ObjectStorage, StoredObject};
use crate::error::{AppError, StorageError};

/// Folder used when the editor does not pick one
pub const DEFAULT_FOLDER: &str = "blog-images";
const SUFFIX_LEN: usize = 7;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

pub struct UploadService {
    storage: Arc<dyn ObjectStorage>,
    max_bytes: usize,
}

impl UploadService {
    pub fn new(storage: Arc<dyn ObjectStorage>, max_bytes: usize) -> Self {
        Self { storage, max_bytes }
    }

    /// Store `bytes` under a fresh key in `folder`, keeping the file extension
    pub async fn upload(
        &self,
        folder: Option<&str>,
        file_name: &str,
        content_type: &str,
        bytes: Vec<u8>,
    ) -> Result<StoredObject, AppError> {
        let folder = folder.map(str::trim).filter(|f| !f.is_empty()).unwrap_or(DEFAULT_FOLDER);
        if !is_valid_folder(folder) {
            return Err(AppError::BadRequest(format!("Invalid folder: {}", folder)));
        }
        if bytes.is_empty() {
            return Err(AppError::BadRequest("Upload body is empty".to_string()));
        }
        if bytes.len() > self.max_bytes {
            return Err(AppError::BadRequest(format!(
                "Upload exceeds {} bytes",
                self.max_bytes
            )));
        }

        let key = object_key(folder, file_name);
        let size = bytes.len();
        let stored = self.storage.upload(&key, content_type, bytes).await?;

        tracing::info!(
            provider = %self.storage.provider(),
            path = %stored.path,
            size,
            "Object uploaded"
        );
        Ok(stored)
    }

    pub async fn delete(&self, path: &str) -> Result<(), AppError> {
        validate_object_path(path)?;
        self.storage.delete(path).await?;

        tracing::info!(provider = %self.storage.provider(), path, "Object deleted");
        Ok(())
    }
}

/// `{folder}/{unix_millis}-{7 base36 chars}.{ext}`
pub fn object_key(folder: &str, file_name: &str) -> String {
    let mut rng = rand::thread_rng();
    let suffix: String = (0..SUFFIX_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect();

    format!(
        "{}/{}-{}.{}",
        folder,
        Utc::now().timestamp_millis(),
        suffix,
        file_extension(file_name)
    )
}

/// Lowercased extension of `file_name`, `bin` when there is no usable one
fn file_extension(file_name: &str) -> String {
    file_name
        .rsplit_once('.')
        .map(|(_, ext)| ext.to_ascii_lowercase())
        .filter(|ext| !ext.is_empty() && ext.chars().all(|c| c.is_ascii_alphanumeric()))
        .unwrap_or_else(|| "bin".to_string())
}

fn is_valid_folder(folder: &str) -> bool {
    !folder.is_empty()
        && folder
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_')
}

/// Reject traversal, absolute paths and empty segments
pub fn validate_object_path(path: &str) -> Result<(), StorageError> {
    let invalid = path.is_empty()
        || path.starts_with('/')
        || path.split('/').any(|seg| seg.is_empty() || seg == "." || seg == "..");

    if invalid {
        return Err(StorageError::InvalidPath(path.to_string()));
    }
    Ok(())
}
