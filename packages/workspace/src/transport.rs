use crate::repository::ContentRepository;
use async_trait::async_trait;
use dwd_content::Document;
use dwd_editor::{ContentTransport, SaveReceipt, TransportError};
use std::sync::Arc;

/// Reads and writes the repository directly, without a server in between.
/// File access runs on the blocking pool.
pub struct LocalTransport {
    repository: Arc<ContentRepository>,
}

impl LocalTransport {
    pub fn new(repository: Arc<ContentRepository>) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl ContentTransport for LocalTransport {
    async fn fetch(&self) -> Result<Document, TransportError> {
        let repository = self.repository.clone();
        tokio::task::spawn_blocking(move || repository.read())
            .await
            .map_err(|e| TransportError::Backend(e.to_string()))?
            .map_err(|e| TransportError::Backend(e.to_string()))
    }

    async fn store(&self, document: &Document) -> Result<SaveReceipt, TransportError> {
        let repository = self.repository.clone();
        let document = document.clone();
        tokio::task::spawn_blocking(move || repository.write(&document))
            .await
            .map_err(|e| TransportError::Backend(e.to_string()))?
            .map_err(|e| TransportError::Backend(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_round_trip_through_files() {
        let temp = TempDir::new().unwrap();
        let repository = Arc::new(ContentRepository::from_root(temp.path()));
        let transport = LocalTransport::new(repository.clone());

        assert!(transport.fetch().await.is_err());

        let document = Document::seed().unwrap();
        let receipt = transport.store(&document).await.unwrap();

        assert!(receipt.ok);
        assert_eq!(transport.fetch().await.unwrap(), document);
        assert!(repository.output_path().exists());
    }
}
