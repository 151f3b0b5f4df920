// src/services/storage_mock.rs

use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::HashMap;
use tracing::info;

use crate::errors::{AppError, Result};
use crate::services::storage_service::{ObjectStore, UploadOptions};

#[derive(Debug, Clone)]
pub struct StoredObject {
  pub bytes: Vec<u8>,
  pub cache_control_secs: u32,
}

/// In-memory stand-in for the external object storage. Serves local runs
/// and tests; honors the same overwrite contract the real store does.
#[derive(Default)]
pub struct InMemoryObjectStore {
  objects: RwLock<HashMap<(String, String), StoredObject>>,
}

impl InMemoryObjectStore {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn contains(&self, bucket: &str, key: &str) -> bool {
    self.objects.read().contains_key(&(bucket.to_string(), key.to_string()))
  }

  pub fn get(&self, bucket: &str, key: &str) -> Option<StoredObject> {
    self.objects.read().get(&(bucket.to_string(), key.to_string())).cloned()
  }

  pub fn len(&self) -> usize {
    self.objects.read().len()
  }

  pub fn is_empty(&self) -> bool {
    self.objects.read().is_empty()
  }
}

#[async_trait]
impl ObjectStore for InMemoryObjectStore {
  async fn put(&self, bucket: &str, key: &str, bytes: &[u8], options: &UploadOptions) -> Result<()> {
    let mut objects = self.objects.write();
    let entry = (bucket.to_string(), key.to_string());
    if !options.overwrite && objects.contains_key(&entry) {
      return Err(AppError::Storage(format!(
        "Destination key '{}' already exists in bucket '{}'.",
        key, bucket
      )));
    }
    objects.insert(
      entry,
      StoredObject {
        bytes: bytes.to_vec(),
        cache_control_secs: options.cache_control_secs,
      },
    );
    info!(bucket, key, "Object stored in memory.");
    Ok(())
  }
}
