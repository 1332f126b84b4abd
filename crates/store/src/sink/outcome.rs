//! Save outcomes and the notifications they map to

use serde::{Deserialize, Serialize};
use std::fmt;

/// Which kind of sink produced an outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    Browser,
    Native,
}

/// What happened to a finished document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "camelCase")]
pub enum SaveOutcome {
    /// Written (and opened, for native sinks)
    Saved { uri: String },
    /// Written to Documents, but the viewer could not be launched
    SavedOpenFailed { uri: String },
    /// Primary write failed; the fallback location worked
    SavedToFallback { uri: String },
    /// Both writes failed
    Failed { reason: String },
}

impl SaveOutcome {
    pub fn uri(&self) -> Option<&str> {
        match self {
            SaveOutcome::Saved { uri }
            | SaveOutcome::SavedOpenFailed { uri }
            | SaveOutcome::SavedToFallback { uri } => Some(uri),
            SaveOutcome::Failed { .. } => None,
        }
    }

    /// True when the file exists somewhere
    pub fn is_saved(&self) -> bool {
        self.uri().is_some()
    }
}

/// The two documents the exporter produces
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    Exam,
    Report,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

/// A user-visible message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub level: NotificationLevel,
    pub message: String,
}

impl Notification {
    fn new(level: NotificationLevel, message: &str) -> Self {
        Self {
            level,
            message: message.to_string(),
        }
    }

    /// Message for a save outcome
    pub fn for_outcome(document: DocumentKind, sink: SinkKind, outcome: &SaveOutcome) -> Self {
        use DocumentKind::*;
        use NotificationLevel::*;

        match (document, sink, outcome) {
            (Exam, SinkKind::Browser, _) => Self::new(Success, "Exam PDF downloaded!"),
            (Report, SinkKind::Browser, _) => Self::new(Success, "Report downloaded!"),
            (Exam, SinkKind::Native, SaveOutcome::Saved { .. }) => {
                Self::new(Success, "File saved to Documents folder!")
            }
            (Exam, SinkKind::Native, SaveOutcome::SavedOpenFailed { .. }) => {
                Self::new(Info, "Check your Documents folder")
            }
            (Exam, SinkKind::Native, SaveOutcome::SavedToFallback { .. }) => {
                Self::new(Success, "Saved to Internal Storage/Download")
            }
            (Exam, SinkKind::Native, SaveOutcome::Failed { .. }) => {
                Self::new(Error, "Could not save file to device storage")
            }
            (Report, SinkKind::Native, SaveOutcome::Saved { .. }) => {
                Self::new(Success, "Report saved to Documents!")
            }
            (Report, SinkKind::Native, SaveOutcome::SavedOpenFailed { .. }) => {
                Self::new(Info, "Report saved. Check your Documents folder")
            }
            (Report, SinkKind::Native, SaveOutcome::SavedToFallback { .. }) => {
                Self::new(Success, "Saved to Download folder")
            }
            (Report, SinkKind::Native, SaveOutcome::Failed { .. }) => {
                Self::new(Error, "Could not save report file")
            }
        }
    }

    /// Message when rendering or PDF writing failed before any save
    pub fn generation_failed(document: DocumentKind) -> Self {
        match document {
            DocumentKind::Exam => Self::new(NotificationLevel::Error, "Failed to generate PDF"),
            DocumentKind::Report => Self::new(
                NotificationLevel::Error,
                "Failed to generate analytics report",
            ),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{:?}] {}", self.level, self.message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn uri() -> String {
        "file:///tmp/x.pdf".to_string()
    }

    #[test]
    fn test_native_outcomes_are_distinct() {
        let outcomes = [
            SaveOutcome::Saved { uri: uri() },
            SaveOutcome::SavedOpenFailed { uri: uri() },
            SaveOutcome::SavedToFallback { uri: uri() },
            SaveOutcome::Failed {
                reason: "disk full".to_string(),
            },
        ];
        for document in [DocumentKind::Exam, DocumentKind::Report] {
            let messages: Vec<String> = outcomes
                .iter()
                .map(|o| Notification::for_outcome(document, SinkKind::Native, o).message)
                .collect();
            for (i, a) in messages.iter().enumerate() {
                for b in &messages[i + 1..] {
                    assert_ne!(a, b, "{:?}", document);
                }
            }
        }
    }

    #[test]
    fn test_levels() {
        let failed = SaveOutcome::Failed {
            reason: "denied".to_string(),
        };
        let n = Notification::for_outcome(DocumentKind::Report, SinkKind::Native, &failed);
        assert_eq!(n.level, NotificationLevel::Error);
        assert_eq!(n.message, "Could not save report file");

        let opened = SaveOutcome::SavedOpenFailed { uri: uri() };
        let n = Notification::for_outcome(DocumentKind::Exam, SinkKind::Native, &opened);
        assert_eq!(n.level, NotificationLevel::Info);
    }

    #[test]
    fn test_uri_accessor() {
        assert_eq!(SaveOutcome::SavedToFallback { uri: uri() }.uri(), Some("file:///tmp/x.pdf"));
        assert!(!SaveOutcome::Failed { reason: String::new() }.is_saved());
    }

    #[test]
    fn test_outcome_json_shape() {
        let json = serde_json::to_string(&SaveOutcome::SavedToFallback { uri: uri() }).unwrap();
        assert_eq!(json, r#"{"status":"savedToFallback","uri":"file:///tmp/x.pdf"}"#);
    }
}
