//! Output sinks
//!
//! A [`DocumentSink`] persists a finished PDF and reports what happened.
//! The browser sink triggers a download; the native sink writes into the
//! Documents directory, opens the file, and falls back to external storage
//! once if the first write fails. Sinks never return errors: every failure
//! becomes a [`SaveOutcome`].

mod browser;
mod capabilities;
mod local;
mod native;
mod outcome;

pub use browser::*;
pub use capabilities::*;
pub use local::*;
pub use native::*;
pub use outcome::*;

use std::future::Future;

/// Where a finished document goes
pub trait DocumentSink: Send + Sync {
    fn kind(&self) -> SinkKind;

    fn save(&self, file_name: &str, bytes: &[u8]) -> impl Future<Output = SaveOutcome> + Send;
}

/// The desktop sinks, chosen at runtime
#[derive(Debug, Clone)]
pub enum AnySink {
    Browser(BrowserSink<DirectoryDownloader>),
    Native(NativeSink<LocalFilesystem, SystemOpener>),
}

impl DocumentSink for AnySink {
    fn kind(&self) -> SinkKind {
        match self {
            AnySink::Browser(sink) => sink.kind(),
            AnySink::Native(sink) => sink.kind(),
        }
    }

    async fn save(&self, file_name: &str, bytes: &[u8]) -> SaveOutcome {
        match self {
            AnySink::Browser(sink) => sink.save(file_name, bytes).await,
            AnySink::Native(sink) => sink.save(file_name, bytes).await,
        }
    }
}
