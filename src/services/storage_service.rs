// src/services/storage_service.rs

use async_trait::async_trait;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::errors::Result;

/// Write options forwarded to the object store.
#[derive(Debug, Clone)]
pub struct UploadOptions {
  pub cache_control_secs: u32,
  /// When false the store must refuse to clobber an existing key.
  pub overwrite: bool,
}

impl Default for UploadOptions {
  fn default() -> Self {
    Self {
      cache_control_secs: 3600,
      overwrite: false,
    }
  }
}

/// Seam over the external object storage (`upload(key, bytes, opts)` in
/// the store's own API).
#[async_trait]
pub trait ObjectStore: Send + Sync {
  async fn put(&self, bucket: &str, key: &str, bytes: &[u8], options: &UploadOptions) -> Result<()>;
}

/// Derives the destination key for an uploaded file: a random v4 id plus
/// the original name's extension (the part after the last `.`). A name
/// with no extension yields a bare id rather than a dangling suffix.
pub fn storage_key_for(original_name: &str) -> String {
  let id = Uuid::new_v4();
  match original_name.rsplit_once('.') {
    Some((_, ext)) if !ext.is_empty() => format!("{}.{}", id, ext),
    _ => id.to_string(),
  }
}

/// Uploads a file under a randomized key and returns that key. Collisions
/// are refused by the store (`overwrite = false`); responses are cacheable
/// for an hour. Store failures propagate untouched: nothing was committed,
/// so there is no cleanup to do.
#[instrument(name = "storage_service::store_upload", skip(store, bytes), fields(size = bytes.len()))]
pub async fn store_upload(store: &dyn ObjectStore, bucket: &str, original_name: &str, bytes: &[u8]) -> Result<String> {
  let key = storage_key_for(original_name);
  store.put(bucket, &key, bytes, &UploadOptions::default()).await?;
  info!(bucket, key, "Upload stored.");
  Ok(key)
}
