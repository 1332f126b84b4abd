//! Platform capabilities the sinks are built on
//!
//! These mirror the host services a mobile shell exposes: a filesystem that
//! takes base64 payloads, a "open with default viewer" call, and a browser
//! download trigger.

use crate::SinkError;
use serde::{Deserialize, Serialize};
use std::future::Future;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";

/// Well-known storage roots
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Directory {
    Documents,
    ExternalStorage,
}

/// A file write, payload base64-encoded
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WriteFileRequest {
    /// Path relative to `directory`
    pub path: String,
    pub data: String,
    pub directory: Directory,
    /// Create missing parent directories
    pub recursive: bool,
}

impl WriteFileRequest {
    pub fn new(path: impl Into<String>, data: impl Into<String>, directory: Directory) -> Self {
        Self {
            path: path.into(),
            data: data.into(),
            directory,
            recursive: true,
        }
    }
}

/// Native filesystem write; resolves to the written file's URI
pub trait NativeFilesystem: Send + Sync {
    fn write_file(
        &self,
        request: WriteFileRequest,
    ) -> impl Future<Output = Result<String, SinkError>> + Send;
}

/// Opens a written file in the platform viewer
pub trait FileOpener: Send + Sync {
    fn open(
        &self,
        file_path: &str,
        content_type: &str,
    ) -> impl Future<Output = Result<(), SinkError>> + Send;
}

/// Triggers a client-side download. The trigger itself reports nothing back.
pub trait Downloader: Send + Sync {
    fn download(&self, file_name: &str, bytes: &[u8]) -> impl Future<Output = ()> + Send;
}
