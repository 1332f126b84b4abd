//! Browser download sink

use super::{DocumentSink, Downloader, SaveOutcome, SinkKind};

/// Hands the document to a download trigger. Always reports `Saved`.
#[derive(Debug, Clone)]
pub struct BrowserSink<D> {
    downloader: D,
}

impl<D: Downloader> BrowserSink<D> {
    pub fn new(downloader: D) -> Self {
        Self { downloader }
    }
}

impl<D: Downloader> DocumentSink for BrowserSink<D> {
    fn kind(&self) -> SinkKind {
        SinkKind::Browser
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> SaveOutcome {
        self.downloader.download(file_name, bytes).await;
        tracing::info!("Download triggered for {}", file_name);
        SaveOutcome::Saved {
            uri: file_name.to_string(),
        }
    }
}
