//! Native filesystem sink
//!
//! Write to `Documents/{name}` and open it. If that write fails, retry once
//! at `ExternalStorage/Download/{name}`. Open failures are not fatal.

use super::{
    Directory, DocumentSink, FileOpener, NativeFilesystem, SaveOutcome, SinkKind,
    WriteFileRequest, PDF_CONTENT_TYPE,
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;

/// Subdirectory of external storage used when Documents is not writable
pub const FALLBACK_SUBDIR: &str = "Download";

#[derive(Debug, Clone)]
pub struct NativeSink<F, O> {
    filesystem: F,
    opener: O,
}

impl<F: NativeFilesystem, O: FileOpener> NativeSink<F, O> {
    pub fn new(filesystem: F, opener: O) -> Self {
        Self { filesystem, opener }
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }

    pub fn opener(&self) -> &O {
        &self.opener
    }
}

impl<F: NativeFilesystem, O: FileOpener> DocumentSink for NativeSink<F, O> {
    fn kind(&self) -> SinkKind {
        SinkKind::Native
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> SaveOutcome {
        let data = STANDARD.encode(bytes);
        let primary = WriteFileRequest::new(file_name, data.clone(), Directory::Documents);

        let primary_error = match self.filesystem.write_file(primary).await {
            Ok(uri) => {
                return match self.opener.open(&uri, PDF_CONTENT_TYPE).await {
                    Ok(()) => {
                        tracing::info!("Saved and opened {}", uri);
                        SaveOutcome::Saved { uri }
                    }
                    Err(e) => {
                        tracing::warn!("Saved {} but could not open it: {}", uri, e);
                        SaveOutcome::SavedOpenFailed { uri }
                    }
                };
            }
            Err(e) => e,
        };

        tracing::warn!(
            "Write to Documents failed, trying {}: {}",
            FALLBACK_SUBDIR,
            primary_error
        );
        let fallback = WriteFileRequest::new(
            format!("{}/{}", FALLBACK_SUBDIR, file_name),
            data,
            Directory::ExternalStorage,
        );
        match self.filesystem.write_file(fallback).await {
            Ok(uri) => {
                tracing::info!("Saved {} to fallback location", uri);
                SaveOutcome::SavedToFallback { uri }
            }
            Err(e) => {
                tracing::error!("Fallback write failed: {}", e);
                SaveOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        }
    }
}
