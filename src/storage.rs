//! Best-effort key/value persistence of certificate data.
//!
//! The store is one JSON object on disk. Each value is wrapped in a
//! [`ValidatedEntry`] carrying a SHA-256 checksum, and a value whose
//! checksum does not match reads as absent.

use crate::errors::{AppError, ResultExt};
use crate::models::CertificateData;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

/// Key under which the latest certificate is stored.
pub const CERTIFICATE_STORAGE_KEY: &str = "anandakAssessmentCertificate";

/// Stored value with integrity checksum.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ValidatedEntry {
    /// The stored data (JSON string)
    pub data: String,
    /// SHA-256 checksum of the data (hex encoded)
    pub checksum: String,
}

impl ValidatedEntry {
    pub fn new(data: String) -> Self {
        let checksum = Self::compute_checksum(&data);
        Self { data, checksum }
    }

    fn compute_checksum(data: &str) -> String {
        let mut hasher = Sha256::new();
        hasher.update(data.as_bytes());
        hex::encode(hasher.finalize())
    }

    /// Returns true if the checksum matches, false if tampered
    pub fn is_valid(&self) -> bool {
        Self::compute_checksum(&self.data) == self.checksum
    }

    /// The data, if the checksum matches.
    pub fn into_valid_data(self) -> Option<String> {
        if self.is_valid() {
            Some(self.data)
        } else {
            None
        }
    }
}

/// JSON object file used as a key/value store.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_all(&self) -> Result<BTreeMap<String, ValidatedEntry>, AppError> {
        let content = match tokio::fs::read_to_string(&self.path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(e).with_context(|| format!("reading {}", self.path.display()))
            }
        };
        serde_json::from_str(&content).map_err(|e| {
            AppError::StorageUnavailable(format!(
                "{} is not a valid store: {}",
                self.path.display(),
                e
            ))
        })
    }

    /// Reads `key`. Missing keys and values failing their checksum are `None`.
    pub async fn get(&self, key: &str) -> Result<Option<String>, AppError> {
        let _guard = self.lock.lock().await;
        let mut entries = self.read_all().await?;
        match entries.remove(key) {
            Some(entry) => {
                let data = entry.into_valid_data();
                if data.is_none() {
                    tracing::warn!("Checksum mismatch for stored key '{}', ignoring it", key);
                }
                Ok(data)
            }
            None => Ok(None),
        }
    }

    pub async fn set(&self, key: &str, value: String) -> Result<(), AppError> {
        let _guard = self.lock.lock().await;
        // An unreadable store is replaced rather than blocking new writes.
        let mut entries = self.read_all().await.unwrap_or_else(|e| {
            tracing::warn!("Discarding unreadable store: {}", e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), ValidatedEntry::new(value));

        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| AppError::StorageUnavailable(format!("serializing store: {}", e)))?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .with_context(|| format!("creating {}", parent.display()))?;
        }

        // Write-then-rename so a crash never leaves a truncated store.
        let tmp = self.path.with_extension("tmp");
        tokio::fs::write(&tmp, json)
            .await
            .with_context(|| format!("writing {}", tmp.display()))?;
        tokio::fs::rename(&tmp, &self.path)
            .await
            .with_context(|| format!("replacing {}", self.path.display()))?;
        Ok(())
    }
}

/// Saves the certificate under [`CERTIFICATE_STORAGE_KEY`]. Failures are
/// logged and swallowed.
pub async fn persist_certificate(store: &JsonFileStore, data: &CertificateData) {
    let json = match serde_json::to_string(data) {
        Ok(json) => json,
        Err(e) => {
            tracing::error!("Could not serialize certificate data: {}", e);
            return;
        }
    };
    match store.set(CERTIFICATE_STORAGE_KEY, json).await {
        Ok(()) => tracing::info!("Certificate saved to {}", store.path().display()),
        Err(e) => tracing::error!("Could not save certificate data: {}", e),
    }
}

/// Reads the last saved certificate.
pub async fn load_certificate(store: &JsonFileStore) -> Result<Option<CertificateData>, AppError> {
    let Some(json) = store.get(CERTIFICATE_STORAGE_KEY).await? else {
        return Ok(None);
    };
    serde_json::from_str(&json)
        .map(Some)
        .map_err(|e| {
            AppError::StorageUnavailable(format!("stored certificate is malformed: {}", e))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_entry() {
        let entry = ValidatedEntry::new(r#"{"name":"Asha"}"#.to_string());
        assert!(entry.is_valid());
        assert_eq!(entry.checksum.len(), 64);
    }

    #[test]
    fn test_tampered_entry() {
        let mut entry = ValidatedEntry::new(r#"{"score":3}"#.to_string());
        entry.data = r#"{"score":30}"#.to_string();
        assert!(!entry.is_valid());
        assert!(entry.into_valid_data().is_none());
    }
}
