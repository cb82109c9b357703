use std::path::PathBuf;

use thiserror::Error;

use crate::store::{StoreRecord, VectorStoreApi};

/// Name given to every store the creator makes. Creation never uses the
/// configured identifier, so each run produces a fresh store.
pub const CREATED_STORE_NAME: &str = "cgcc_knowledge_base";

/// Remote-call failure, categorized by the operation that issued it. The
/// `Display` text is the line the binaries print.
#[derive(Debug, Error)]
pub enum StoreOpError {
    #[error("Error creating vector store: {0}")]
    Create(String),
    #[error("Error retrieving vector store: {0}")]
    Retrieve(String),
}

/// Outcome of one Store Creator run.
#[derive(Debug)]
pub enum CreateOutcome {
    /// The create call succeeded. `files` holds the ids of the documents
    /// attached to the new store. `probe` holds the follow-up retrieve of
    /// the configured identifier, which may itself have failed; the created
    /// store is reported either way.
    Created {
        store: StoreRecord,
        files: Vec<String>,
        probe: Result<StoreRecord, StoreOpError>,
    },
    Failed(StoreOpError),
}

/// Uploads the configured documents, creates a store under the fixed name
/// with those files attached, then probes retrieval of `probe_id`. The probe
/// targets the configured identifier, not the store just created. Any
/// failure in the sequence is reported under the creation category.
pub async fn create_and_probe(
    api: &dyn VectorStoreApi,
    probe_id: &str,
    documents: &[PathBuf],
) -> CreateOutcome {
    let mut files = Vec::with_capacity(documents.len());
    for path in documents {
        match api.upload_document(path).await {
            Ok(file_id) => files.push(file_id),
            Err(e) => return CreateOutcome::Failed(StoreOpError::Create(e.0)),
        }
    }

    let store = match api.create_store(CREATED_STORE_NAME, files.clone()).await {
        Ok(store) => store,
        Err(e) => return CreateOutcome::Failed(StoreOpError::Create(e.0)),
    };

    let probe = api
        .retrieve_store(probe_id)
        .await
        .map_err(|e| StoreOpError::Create(e.0));

    CreateOutcome::Created {
        store,
        files,
        probe,
    }
}

/// Retrieves one store record for the Status Reporter.
pub async fn store_status(api: &dyn VectorStoreApi, id: &str) -> Result<StoreRecord, StoreOpError> {
    api.retrieve_store(id)
        .await
        .map_err(|e| StoreOpError::Retrieve(e.0))
}

/// Renders the four status lines, in the order the reporter prints them.
pub fn render_status(store: &StoreRecord) -> String {
    format!(
        "ID: {}\nName: {}\nStatus: {}\nCreated at: {}",
        store.id, store.name, store.status, store.created_at
    )
}
