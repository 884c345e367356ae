//! # Content Store
//!
//! Owns the document being edited and the status of the last load/save.
//!
//! ## Lifecycle
//!
//! ```text
//! Idle → Loading → Ready | Error
//! Ready → Saving → Saved | Error
//! ```
//!
//! `Saved` and `Error` never block further edits. A failed save keeps the
//! edited document as-is so the same payload can be saved again; a failed
//! load keeps whatever document was held before.
//!
//! `load` and `save` take `&mut self`, so a store never has two requests in
//! flight at once.

use crate::{ContentTransport, EditorError, Mutation, MutationError};
use dwd_content::Document;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreStatus {
    Idle,
    Loading,
    Ready,
    Saving,
    Saved { at: String },
    Error { message: String },
}

impl StoreStatus {
    pub fn is_error(&self) -> bool {
        matches!(self, StoreStatus::Error { .. })
    }
}

pub struct ContentStore<T> {
    transport: T,
    document: Option<Document>,
    status: StoreStatus,

    /// Incremented on every applied edit
    pub version: u64,

    dirty: bool,
}

impl<T: ContentTransport> ContentStore<T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            document: None,
            status: StoreStatus::Idle,
            version: 0,
            dirty: false,
        }
    }

    /// Create a store and fetch the document straight away
    pub async fn init(transport: T) -> Self {
        let mut store = Self::new(transport);
        store.load().await;
        store
    }

    pub fn status(&self) -> &StoreStatus {
        &self.status
    }

    pub fn document(&self) -> Option<&Document> {
        self.document.as_ref()
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Edits applied since the last successful load or save
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Replace the held document with the server's copy
    pub async fn load(&mut self) -> &StoreStatus {
        self.status = StoreStatus::Loading;

        self.status = match self.transport.fetch().await {
            Ok(document) => {
                self.document = Some(document);
                self.dirty = false;
                StoreStatus::Ready
            }
            Err(e) => {
                tracing::warn!(error = %e, "content load failed");
                StoreStatus::Error {
                    message: format!("Failed to load content: {}", e),
                }
            }
        };

        &self.status
    }

    /// Write the held document back
    pub async fn save(&mut self) -> &StoreStatus {
        let Some(document) = &self.document else {
            self.status = StoreStatus::Error {
                message: "Failed to save content: nothing loaded".to_string(),
            };
            return &self.status;
        };

        self.status = StoreStatus::Saving;
        let result = self.transport.store(document).await;

        self.status = match result {
            Ok(receipt) => {
                tracing::info!(saved_at = %receipt.saved_at, version = self.version, "content saved");
                self.dirty = false;
                StoreStatus::Saved {
                    at: receipt.saved_at,
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "content save failed");
                StoreStatus::Error {
                    message: format!("Failed to save content: {}", e),
                }
            }
        };

        &self.status
    }

    /// Swap in the result of an engine operation.
    ///
    /// ```rust,ignore
    /// store.edit(|doc| mutations::set(doc, &path!["brand", "left"], "DWD"))?;
    /// ```
    ///
    /// On error the held document is left as it was.
    pub fn edit<F>(&mut self, op: F) -> Result<&Document, EditorError>
    where
        F: FnOnce(&Document) -> Result<Document, MutationError>,
    {
        let current = self.document.as_ref().ok_or(EditorError::NotLoaded)?;
        let next = op(current)?;

        self.version += 1;
        self.dirty = true;
        Ok(self.document.insert(next))
    }

    pub fn apply(&mut self, mutation: &Mutation) -> Result<&Document, EditorError> {
        tracing::debug!(mutation = mutation.name(), path = %mutation.path(), "applying mutation");
        self.edit(|doc| mutation.apply(doc))
    }
}
