//! Command execution

use crate::cli::{Cli, Commands, Target};
use anyhow::{Context, Result};
use exam_model::{ExamDocument, ReportData};
use std::path::Path;
use store::sink::{
    AnySink, BrowserSink, DirectoryDownloader, LocalFilesystem, NativeSink, SystemOpener,
};
use store::{DirectorySettings, ExamExporter, ExportReport, ExportSettings, SettingsManager};
use tokio::io::AsyncReadExt;

pub async fn run(cli: &Cli) -> Result<ExportReport> {
    let settings = load_settings(cli.config.as_deref()).await?;
    let directories = match &cli.output_dir {
        Some(dir) => DirectorySettings::under(dir),
        None => settings.directories.clone(),
    };
    let exporter = ExamExporter::from_settings(build_sink(cli.target, &directories), &settings);

    let report = match &cli.command {
        Commands::Exam(args) => {
            let payload = read_input(&args.input).await?;
            let doc = ExamDocument::from_json(&payload)
                .with_context(|| format!("Invalid exam payload in {}", args.input.display()))?;
            tracing::info!(
                "Exporting {} questions for {} / {}",
                doc.questions.len(),
                doc.subject_name,
                doc.topic_name
            );
            exporter.export_exam(&doc).await
        }
        Commands::Report(args) => {
            let payload = read_input(&args.input).await?;
            let data = ReportData::from_json(&payload)
                .with_context(|| format!("Invalid report data in {}", args.input.display()))?;
            exporter.export_report(&data).await
        }
    };
    Ok(report)
}

pub fn build_sink(target: Target, directories: &DirectorySettings) -> AnySink {
    match target {
        Target::Browser => AnySink::Browser(BrowserSink::new(DirectoryDownloader::new(
            &directories.downloads,
        ))),
        Target::Native => AnySink::Native(NativeSink::new(
            LocalFilesystem::new(&directories.documents, &directories.external_storage),
            SystemOpener,
        )),
    }
}

async fn load_settings(path: Option<&Path>) -> Result<ExportSettings> {
    let Some(path) = path else {
        return Ok(ExportSettings::default());
    };
    let mut manager = SettingsManager::new(path);
    let settings = manager
        .load()
        .await
        .with_context(|| format!("Could not read settings from {}", path.display()))?;
    Ok(settings.clone())
}

async fn read_input(path: &Path) -> Result<String> {
    if path == Path::new("-") {
        let mut payload = String::new();
        tokio::io::stdin()
            .read_to_string(&mut payload)
            .await
            .context("Could not read payload from stdin")?;
        return Ok(payload);
    }
    tokio::fs::read_to_string(path)
        .await
        .with_context(|| format!("Could not read {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::ffi::OsStr;
    use store::sink::{DocumentSink, SaveOutcome, SinkKind};
    use store::ExportOutcome;

    #[test]
    fn test_build_sink_kind() {
        let dirs = DirectorySettings::default();
        assert_eq!(build_sink(Target::Browser, &dirs).kind(), SinkKind::Browser);
        assert_eq!(build_sink(Target::Native, &dirs).kind(), SinkKind::Native);
    }

    #[tokio::test]
    async fn test_browser_export_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("paper.json");
        std::fs::write(
            &input,
            r#"{"subject": "Data Structures", "topic": "Queues",
                "questions": [{"text": "Which is FIFO?", "type": "mcq",
                               "options": "Stack, Queue", "answer": "Queue"}]}"#,
        )
        .unwrap();
        let out = dir.path().join("out");

        let cli = Cli::try_parse_from([
            OsStr::new("exam-oracle"),
            OsStr::new("exam"),
            input.as_os_str(),
            OsStr::new("--target"),
            OsStr::new("browser"),
            OsStr::new("--output-dir"),
            out.as_os_str(),
        ])
        .unwrap();
        let report = run(&cli).await.unwrap();

        assert_eq!(report.notification.message, "Exam PDF downloaded!");
        assert!(matches!(
            report.outcome,
            ExportOutcome::Delivered(SaveOutcome::Saved { .. })
        ));
        let pdf = std::fs::read(out.join("Downloads").join("Data_Structures_Queues_Exam.pdf")).unwrap();
        assert!(pdf.starts_with(b"%PDF-"));
        // The native directories are untouched
        assert!(!out.join("Documents").exists());
    }

    #[tokio::test]
    async fn test_settings_file_is_applied() {
        let dir = tempfile::tempdir().unwrap();
        let config = dir.path().join("export.json");
        std::fs::write(&config, r#"{"pdf": {"compress": false}}"#).unwrap();

        let settings = load_settings(Some(config.as_path())).await.unwrap();
        assert!(!settings.pdf.compress);
        assert_eq!(load_settings(None).await.unwrap(), ExportSettings::default());
    }

    #[tokio::test]
    async fn test_malformed_payload_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("bad.json");
        std::fs::write(&input, "{ nope").unwrap();

        let cli = Cli::try_parse_from([OsStr::new("exam-oracle"), OsStr::new("report"), input.as_os_str()])
            .unwrap();
        assert!(run(&cli).await.is_err());
    }
}
