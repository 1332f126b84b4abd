//! Analytics report data
//!
//! Mirrors what the reports screen exports: vetting overview counts, the
//! Bloom's taxonomy distribution, and per-topic syllabus coverage.

use crate::raw::{first_number, first_string, parse_timestamp};
use crate::{format_marks, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Vetting overview counters
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct OverviewStats {
    pub generated: u64,
    pub approved: u64,
    pub rejected: u64,
    pub pending: u64,
    pub approval_rate: f64,
}

impl From<Value> for OverviewStats {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return OverviewStats::default();
        };
        OverviewStats {
            generated: count(&map, &["generated"]),
            approved: count(&map, &["approved"]),
            rejected: count(&map, &["rejected"]),
            pending: count(&map, &["pending"]),
            approval_rate: first_number(&map, &["approvalRate", "approval_rate"]).unwrap_or(0.0),
        }
    }
}

/// One Bloom's taxonomy level
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct BloomsRow {
    pub level: String,
    pub count: u64,
    pub percentage: f64,
}

impl From<Value> for BloomsRow {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return BloomsRow::default();
        };
        BloomsRow {
            level: first_string(&map, &["level", "name"]).unwrap_or_default(),
            count: count(&map, &["count"]),
            percentage: first_number(&map, &["percentage"]).unwrap_or(0.0),
        }
    }
}

/// Coverage of one syllabus topic
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct TopicCoverageRow {
    pub name: String,
    pub questions: u64,
    pub percentage: f64,
}

impl From<Value> for TopicCoverageRow {
    fn from(value: Value) -> Self {
        let Value::Object(map) = value else {
            return TopicCoverageRow::default();
        };
        TopicCoverageRow {
            name: first_string(&map, &["name", "topic"]).unwrap_or_default(),
            questions: count(&map, &["questions", "count"]),
            percentage: first_number(&map, &["percentage"]).unwrap_or(0.0),
        }
    }
}

/// Everything the analytics report renders
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value", rename_all = "camelCase")]
pub struct ReportData {
    pub overview: OverviewStats,
    pub blooms: Vec<BloomsRow>,
    pub syllabus: Vec<TopicCoverageRow>,
    pub generated_at: DateTime<Utc>,
}

impl From<Value> for ReportData {
    fn from(value: Value) -> Self {
        let map = match value {
            Value::Object(map) => map,
            _ => Map::new(),
        };
        ReportData {
            overview: map
                .get("overview")
                .cloned()
                .map(OverviewStats::from)
                .unwrap_or_default(),
            blooms: rows(map.get("blooms")),
            syllabus: rows(map.get("syllabus")),
            generated_at: first_string(&map, &["generatedAt", "generated_at"])
                .as_deref()
                .map(parse_timestamp)
                .unwrap_or_else(Utc::now),
        }
    }
}

/// Non-negative whole count; anything else reads as 0
fn count(map: &Map<String, Value>, keys: &[&str]) -> u64 {
    first_number(map, keys)
        .filter(|n| *n >= 0.0)
        .map(|n| n.round() as u64)
        .unwrap_or(0)
}

/// Rows of a list; a non-list value is an empty table
fn rows<T: From<Value>>(value: Option<&Value>) -> Vec<T> {
    match value {
        Some(Value::Array(items)) => items.iter().cloned().map(T::from).collect(),
        _ => Vec::new(),
    }
}

impl ReportData {
    /// Parse report data from JSON text
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// `Analytics_Report_{YYYY-MM-DD}.pdf`
    pub fn file_name(&self) -> String {
        format!("Analytics_Report_{}.pdf", self.generated_at.format("%Y-%m-%d"))
    }

    /// Metric/value rows for the overview table
    pub fn overview_rows(&self) -> Vec<[String; 2]> {
        let o = &self.overview;
        vec![
            ["Total Generated".to_string(), o.generated.to_string()],
            ["Approved Questions".to_string(), o.approved.to_string()],
            ["Rejected Questions".to_string(), o.rejected.to_string()],
            ["Pending Review".to_string(), o.pending.to_string()],
            ["Approval Rate".to_string(), percent(o.approval_rate)],
        ]
    }

    pub fn blooms_rows(&self) -> Vec<[String; 3]> {
        self.blooms
            .iter()
            .map(|b| [b.level.clone(), b.count.to_string(), percent(b.percentage)])
            .collect()
    }

    pub fn topic_rows(&self) -> Vec<[String; 3]> {
        self.syllabus
            .iter()
            .map(|t| [t.name.clone(), t.questions.to_string(), percent(t.percentage)])
            .collect()
    }
}

fn percent(value: f64) -> String {
    format!("{}%", format_marks(value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_partial_report() {
        let data = ReportData::from_json(
            r#"{
                "overview": {"generated": 40, "approved": 30, "approvalRate": 75},
                "blooms": [{"level": "Remember", "count": 12, "percentage": 30}],
                "generatedAt": "2024-06-01T08:00:00Z"
            }"#,
        )
        .unwrap();

        assert_eq!(data.overview.generated, 40);
        assert_eq!(data.overview.rejected, 0);
        assert!(data.syllabus.is_empty());
        assert_eq!(data.file_name(), "Analytics_Report_2024-06-01.pdf");
        assert_eq!(data.overview_rows()[4][1], "75%");
        assert_eq!(data.blooms_rows()[0], ["Remember", "12", "30%"]);
    }

    #[test]
    fn test_loose_report_shapes() {
        let data = ReportData::from_json(
            r#"{
                "overview": {"generated": "40", "approved": 30.0, "pending": -2},
                "blooms": [{"level": "Apply", "count": "7", "percentage": "17.5"}, "junk"],
                "syllabus": "not a list",
                "generatedAt": "2024-06-01"
            }"#,
        )
        .unwrap();

        assert_eq!(data.overview.generated, 40);
        assert_eq!(data.overview.approved, 30);
        assert_eq!(data.overview.pending, 0);
        assert_eq!(data.blooms_rows()[0], ["Apply", "7", "17.5%"]);
        assert_eq!(data.blooms[1], BloomsRow::default());
        assert!(data.syllabus.is_empty());
        assert_eq!(data.file_name(), "Analytics_Report_2024-06-01.pdf");
    }

    #[test]
    fn test_report_invalid_json_is_error() {
        assert!(ReportData::from_json("{oops").is_err());
    }
}
