//! Desktop implementations of the platform capabilities

use super::{Directory, Downloader, FileOpener, NativeFilesystem, WriteFileRequest};
use crate::SinkError;
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use std::path::{Component, Path, PathBuf};
use tokio::process::Command;

/// Maps each [`Directory`] to a root on the local disk
#[derive(Debug, Clone)]
pub struct LocalFilesystem {
    documents: PathBuf,
    external_storage: PathBuf,
}

impl LocalFilesystem {
    pub fn new(documents: impl Into<PathBuf>, external_storage: impl Into<PathBuf>) -> Self {
        Self {
            documents: documents.into(),
            external_storage: external_storage.into(),
        }
    }

    pub fn root(&self, directory: Directory) -> &Path {
        match directory {
            Directory::Documents => &self.documents,
            Directory::ExternalStorage => &self.external_storage,
        }
    }

    /// Resolve a request path under its root, refusing escapes
    pub fn resolve(&self, request: &WriteFileRequest) -> Result<PathBuf, SinkError> {
        let relative = contained_path(&request.path)?;
        Ok(self.root(request.directory).join(relative))
    }
}

/// A non-empty relative path with no parent, root, or prefix components
pub fn contained_path(path: &str) -> Result<&Path, SinkError> {
    let relative = Path::new(path);
    let escapes = relative
        .components()
        .any(|c| !matches!(c, Component::Normal(_) | Component::CurDir));
    if path.is_empty() || escapes {
        return Err(SinkError::InvalidPath(path.to_string()));
    }
    Ok(relative)
}

impl NativeFilesystem for LocalFilesystem {
    async fn write_file(&self, request: WriteFileRequest) -> Result<String, SinkError> {
        let path = self.resolve(&request)?;
        let bytes = STANDARD.decode(request.data.as_bytes())?;

        if let Some(parent) = path.parent() {
            if request.recursive {
                tokio::fs::create_dir_all(parent).await?;
            } else if !parent.is_dir() {
                return Err(SinkError::InvalidPath(request.path));
            }
        }
        tokio::fs::write(&path, bytes).await?;
        tracing::debug!("Wrote {}", path.display());
        Ok(file_uri(&path))
    }
}

/// `file://` URI for a path, absolute when the path can be resolved
pub fn file_uri(path: &Path) -> String {
    let absolute = std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf());
    format!("file://{}", absolute.display())
}

/// Opens files with the desktop's default handler
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemOpener;

impl SystemOpener {
    fn command(path: &str) -> Command {
        if cfg!(target_os = "macos") {
            let mut cmd = Command::new("open");
            cmd.arg(path);
            cmd
        } else if cfg!(target_os = "windows") {
            let mut cmd = Command::new("cmd");
            cmd.args(["/C", "start", "", path]);
            cmd
        } else {
            let mut cmd = Command::new("xdg-open");
            cmd.arg(path);
            cmd
        }
    }
}

impl FileOpener for SystemOpener {
    async fn open(&self, file_path: &str, content_type: &str) -> Result<(), SinkError> {
        let path = file_path.strip_prefix("file://").unwrap_or(file_path);
        tracing::debug!("Opening {} as {}", path, content_type);
        let status = Self::command(path).status().await?;
        if status.success() {
            Ok(())
        } else {
            Err(SinkError::OpenFailed(format!("opener exited with {}", status)))
        }
    }
}

/// Stands in for a browser download by writing into a downloads folder
#[derive(Debug, Clone)]
pub struct DirectoryDownloader {
    dir: PathBuf,
}

impl DirectoryDownloader {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    async fn write(&self, file_name: &str, bytes: &[u8]) -> Result<PathBuf, SinkError> {
        let path = self.dir.join(contained_path(file_name)?);
        if let Some(parent) = path.parent() {
            tokio::fs::create_dir_all(parent).await?;
        }
        tokio::fs::write(&path, bytes).await?;
        Ok(path)
    }
}

impl Downloader for DirectoryDownloader {
    async fn download(&self, file_name: &str, bytes: &[u8]) {
        match self.write(file_name, bytes).await {
            Ok(path) => tracing::debug!("Downloaded to {}", path.display()),
            Err(e) => tracing::error!("Download of {} failed: {}", file_name, e),
        }
    }
}
