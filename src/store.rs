use std::path::Path;

use async_openai::{
    config::OpenAIConfig,
    types::{
        CreateFileRequestArgs, CreateVectorStoreRequestArgs, FilePurpose, VectorStoreObject,
        VectorStoreStatus,
    },
    Client,
};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::config::Config;

/// The four vector store fields these tools ever read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoreRecord {
    pub id: String,
    pub name: String,
    pub status: String,
    pub created_at: i64,
}

impl std::fmt::Display for StoreRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "VectorStore(id={}, name={}, status={}, created_at={})",
            self.id, self.name, self.status, self.created_at
        )
    }
}

impl From<VectorStoreObject> for StoreRecord {
    fn from(object: VectorStoreObject) -> Self {
        Self {
            id: object.id,
            // Stores can be unnamed; an empty name prints as such.
            name: object.name.unwrap_or_default(),
            status: status_label(&object.status).to_string(),
            created_at: i64::from(object.created_at),
        }
    }
}

fn status_label(status: &VectorStoreStatus) -> &'static str {
    match status {
        VectorStoreStatus::InProgress => "in_progress",
        VectorStoreStatus::Completed => "completed",
        VectorStoreStatus::Expired => "expired",
    }
}

/// A failed vendor call, carried as the vendor's message.
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StoreApiError(pub String);

/// The vendor calls the loaders issue. `upload_document` returns the id of
/// the uploaded file, ready to attach to a store at creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait VectorStoreApi: Send + Sync {
    async fn upload_document(&self, path: &Path) -> Result<String, StoreApiError>;
    async fn create_store(
        &self,
        name: &str,
        file_ids: Vec<String>,
    ) -> Result<StoreRecord, StoreApiError>;
    async fn retrieve_store(&self, id: &str) -> Result<StoreRecord, StoreApiError>;
}

/// Production implementation backed by the OpenAI client.
pub struct OpenAiVectorStores {
    client: Client<OpenAIConfig>,
}

impl OpenAiVectorStores {
    pub fn new(config: &Config) -> Self {
        let client =
            Client::with_config(OpenAIConfig::new().with_api_key(config.api_key.clone()));
        Self { client }
    }
}

#[async_trait]
impl VectorStoreApi for OpenAiVectorStores {
    async fn upload_document(&self, path: &Path) -> Result<String, StoreApiError> {
        debug!("Uploading document: {}", path.display());

        let request = CreateFileRequestArgs::default()
            .file(path)
            .purpose(FilePurpose::Assistants)
            .build()
            .map_err(|e| StoreApiError(e.to_string()))?;

        let file = self
            .client
            .files()
            .create(request)
            .await
            .map_err(|e| StoreApiError(e.to_string()))?;

        Ok(file.id)
    }

    async fn create_store(
        &self,
        name: &str,
        file_ids: Vec<String>,
    ) -> Result<StoreRecord, StoreApiError> {
        debug!("Creating vector store named: {}", name);

        let mut request = CreateVectorStoreRequestArgs::default();
        request.name(name);
        if !file_ids.is_empty() {
            request.file_ids(file_ids);
        }
        let request = request.build().map_err(|e| StoreApiError(e.to_string()))?;

        let store = self
            .client
            .vector_stores()
            .create(request)
            .await
            .map_err(|e| StoreApiError(e.to_string()))?;

        Ok(store.into())
    }

    async fn retrieve_store(&self, id: &str) -> Result<StoreRecord, StoreApiError> {
        debug!("Retrieving vector store: {}", id);

        let store = self
            .client
            .vector_stores()
            .retrieve(id)
            .await
            .map_err(|e| StoreApiError(e.to_string()))?;

        Ok(store.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_display() {
        let record = StoreRecord {
            id: "vs_1".to_string(),
            name: "kb".to_string(),
            status: "completed".to_string(),
            created_at: 1700000000,
        };

        assert_eq!(
            record.to_string(),
            "VectorStore(id=vs_1, name=kb, status=completed, created_at=1700000000)"
        );
    }

    #[test]
    fn test_record_from_unnamed_store() {
        let object: VectorStoreObject = serde_json::from_value(serde_json::json!({
            "id": "vs_1",
            "object": "vector_store",
            "created_at": 1700000000u32,
            "name": null,
            "usage_bytes": 0,
            "file_counts": {
                "in_progress": 0,
                "completed": 0,
                "failed": 0,
                "cancelled": 0,
                "total": 0
            },
            "status": "completed"
        }))
        .unwrap();

        let record = StoreRecord::from(object);

        assert_eq!(record.id, "vs_1");
        assert_eq!(record.name, "");
        assert_eq!(record.status, "completed");
        assert_eq!(record.created_at, 1700000000);
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(status_label(&VectorStoreStatus::InProgress), "in_progress");
        assert_eq!(status_label(&VectorStoreStatus::Completed), "completed");
        assert_eq!(status_label(&VectorStoreStatus::Expired), "expired");
    }
}
