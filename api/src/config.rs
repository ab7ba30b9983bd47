use std::env;

use anyhow::{anyhow, Context};

/// Default bucket used by both storage providers
const DEFAULT_BUCKET: &str = "blog-content";
const DEFAULT_MAX_UPLOAD_BYTES: usize = 10 * 1024 * 1024;

/// Which object store receives uploads
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageProvider {
    Supabase,
    S3,
}

impl std::fmt::Display for StorageProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageProvider::Supabase => write!(f, "supabase"),
            StorageProvider::S3 => write!(f, "s3"),
        }
    }
}

impl std::str::FromStr for StorageProvider {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "supabase" => Ok(StorageProvider::Supabase),
            "s3" => Ok(StorageProvider::S3),
            _ => Err(format!("Unknown storage provider: {}", s)),
        }
    }
}

/// S3-compatible storage settings (AWS S3, MinIO, LocalStack)
#[derive(Clone)]
pub struct S3Config {
    pub endpoint: String,
    pub bucket: String,
    pub region: String,
    pub access_key: String,
    pub secret_key: String,
}

#[derive(Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub supabase_url: String,
    pub supabase_anon_key: String,
    /// Service role key, preferred over the anon key for storage writes
    pub supabase_service_key: Option<String>,
    /// Analytics measurement id exposed to the site; optional
    pub analytics_measurement_id: Option<String>,
    pub storage_provider: StorageProvider,
    /// Supabase Storage bucket
    pub storage_bucket: String,
    /// Present when `storage_provider` is S3
    pub s3: Option<S3Config>,
    /// Display name used when neither an override nor a profile name exists
    pub default_author_name: String,
    pub max_upload_bytes: usize,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let storage_provider = match var("STORAGE_PROVIDER") {
            Some(raw) => raw.parse::<StorageProvider>().map_err(|e| anyhow!(e))?,
            None => StorageProvider::Supabase,
        };

        let s3 = match storage_provider {
            StorageProvider::S3 => Some(S3Config {
                endpoint: var("S3_ENDPOINT")
                    .context("S3_ENDPOINT must be set when STORAGE_PROVIDER=s3")?
                    .trim_end_matches('/')
                    .to_string(),
                bucket: var("S3_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
                region: var("S3_REGION").unwrap_or_else(|| "ap-southeast-1".to_string()),
                access_key: var("S3_ACCESS_KEY")
                    .context("S3_ACCESS_KEY must be set when STORAGE_PROVIDER=s3")?,
                secret_key: var("S3_SECRET_KEY")
                    .context("S3_SECRET_KEY must be set when STORAGE_PROVIDER=s3")?,
            }),
            StorageProvider::Supabase => None,
        };

        let port = match var("PORT") {
            Some(p) => p.parse().with_context(|| format!("Invalid PORT: {}", p))?,
            None => 8080,
        };

        let max_upload_bytes = match var("MAX_UPLOAD_BYTES") {
            Some(v) => v
                .parse()
                .with_context(|| format!("Invalid MAX_UPLOAD_BYTES: {}", v))?,
            None => DEFAULT_MAX_UPLOAD_BYTES,
        };

        Ok(Self {
            database_url: var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port,
            supabase_url: var("SUPABASE_URL")
                .unwrap_or_else(|| "http://localhost:54321".to_string())
                .trim_end_matches('/')
                .to_string(),
            supabase_anon_key: var("SUPABASE_ANON_KEY").unwrap_or_default(),
            supabase_service_key: var("SUPABASE_SERVICE_ROLE_KEY"),
            analytics_measurement_id: var("GA_MEASUREMENT_ID"),
            storage_provider,
            storage_bucket: var("STORAGE_BUCKET").unwrap_or_else(|| DEFAULT_BUCKET.to_string()),
            s3,
            default_author_name: var("DEFAULT_AUTHOR_NAME")
                .unwrap_or_else(|| "WednesDev Team".to_string()),
            max_upload_bytes,
        })
    }

    /// Key used for server-side storage calls against Supabase
    pub fn storage_key(&self) -> &str {
        self.supabase_service_key
            .as_deref()
            .unwrap_or(&self.supabase_anon_key)
    }
}
