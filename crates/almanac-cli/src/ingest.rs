//! Reading parsed documents from JSON and checking them at the boundary.
//!
//! The graph builder trusts its input. Every record read here is checked against
//! the frontmatter rules first; records that fail are reported and left out,
//! the rest go on to the build.

use crate::error::{CliError, Result};
use almanac_domain::{Document, DocumentType, Status};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use std::fs;
use std::path::Path;

static DATE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d{4}-\d{2}-\d{2}$").expect("valid date regex"));

/// ISO datetimes as emitted by frontmatter parsers, e.g. `2024-03-01T00:00:00.000Z`
static DATETIME_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(\d{4}-\d{2}-\d{2})T[0-9:.]+(Z|[+-]\d{2}:?\d{2})?$").expect("valid datetime regex"));

const LINK_FIELDS: [&str; 5] = ["project", "experiment", "parent", "enables", "related"];

/// A record excluded from the build.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// File path, id or position of the record
    pub source: String,
    /// Everything wrong with it
    pub errors: Vec<String>,
}

/// Outcome of reading an input file.
#[derive(Debug, Default)]
pub struct IngestReport {
    /// Records that passed validation, in input order
    pub documents: Vec<Document>,
    /// Records that did not
    pub rejected: Vec<Rejection>,
}

/// Read a JSON array of parsed documents from `path`.
pub fn load_documents(path: &Path) -> Result<IngestReport> {
    let contents = fs::read_to_string(path)?;
    let value: Value = serde_json::from_str(&contents)?;

    let Value::Array(records) = value else {
        return Err(CliError::InvalidInput(format!(
            "{} must contain a JSON array of documents",
            path.display()
        )));
    };

    let report = ingest_records(records);
    tracing::info!(
        "Loaded {} document(s) from {} ({} rejected)",
        report.documents.len(),
        path.display(),
        report.rejected.len()
    );
    Ok(report)
}

/// Validate and convert raw records, keeping input order.
pub fn ingest_records(records: Vec<Value>) -> IngestReport {
    let mut report = IngestReport::default();

    for (position, mut record) in records.into_iter().enumerate() {
        let source = record_source(&record, position);

        let converted = validate_record(&mut record)
            .and_then(|()| serde_json::from_value::<Document>(record).map_err(|e| vec![e.to_string()]));

        match converted {
            Ok(document) => {
                let missing = missing_sections(&document);
                if !missing.is_empty() {
                    tracing::warn!("{} is missing required sections: {}", source, missing.join(", "));
                }
                report.documents.push(document);
            }
            Err(errors) => {
                tracing::error!("Validation errors in {}:\n  - {}", source, errors.join("\n  - "));
                report.rejected.push(Rejection { source, errors });
            }
        }
    }

    report
}

/// Check one record's frontmatter, normalizing its date in place.
///
/// All problems are collected rather than stopping at the first.
pub fn validate_record(record: &mut Value) -> std::result::Result<(), Vec<String>> {
    let Some(fields) = record.as_object_mut() else {
        return Err(vec!["Record must be a JSON object".to_string()]);
    };

    let mut errors = Vec::new();

    for field in ["id", "type", "title", "date", "status", "lab"] {
        if !is_present(fields.get(field)) {
            errors.push(format!("Missing required field: {}", field));
        }
    }
    match fields.get("authors") {
        Some(Value::Array(authors)) if !authors.is_empty() => {}
        _ => errors.push("Missing or invalid required field: authors (must be non-empty array)".to_string()),
    }
    if !matches!(fields.get("tags"), Some(Value::Array(_))) {
        errors.push("Missing or invalid required field: tags (must be array)".to_string());
    }
    if !matches!(fields.get("links"), Some(Value::Object(_))) {
        errors.push("Missing or invalid required field: links (must be object)".to_string());
    }

    let doc_type = fields.get("type").and_then(Value::as_str).map(DocumentType::parse);
    if let Some(doc_type) = &doc_type {
        if !doc_type.is_known() {
            let valid: Vec<&str> = DocumentType::KNOWN.iter().map(|t| t.as_str()).collect();
            errors.push(format!("Invalid type: {}. Must be one of: {}", doc_type, valid.join(", ")));
        }
    }

    if let Some(status) = fields.get("status").and_then(Value::as_str) {
        if Status::parse(status).is_none() {
            let valid: Vec<&str> = Status::ALL.iter().map(|s| s.as_str()).collect();
            errors.push(format!("Invalid status: {}. Must be one of: {}", status, valid.join(", ")));
        }
    }

    if let Some(date) = fields.get_mut("date") {
        normalize_date(date);
        match date.as_str() {
            Some(text) if DATE_RE.is_match(text) => {}
            Some(text) if !text.is_empty() => {
                errors.push(format!("Invalid date format: {}. Must be YYYY-MM-DD", text));
            }
            Some(_) => {}
            None => errors.push(format!("Invalid date format: {}. Must be YYYY-MM-DD", date)),
        }
    }

    if let Some(Value::Object(links)) = fields.get("links") {
        errors.extend(validate_links(links, doc_type.as_ref()));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

fn validate_links(links: &Map<String, Value>, doc_type: Option<&DocumentType>) -> Vec<String> {
    let mut errors = Vec::new();

    for key in links.keys() {
        if !LINK_FIELDS.contains(&key.as_str()) {
            errors.push(format!("Invalid links field: {}. Valid fields: {}", key, LINK_FIELDS.join(", ")));
        }
    }

    for field in ["enables", "related"] {
        if let Some(value) = links.get(field) {
            if !value.is_null() && !value.is_array() {
                errors.push(format!("links.{} must be an array", field));
            }
        }
    }

    if let Some(doc_type) = doc_type {
        if doc_type.requires_project_link() && !is_present(links.get("project")) {
            errors.push(format!("{} pages require links.project to be set", doc_type));
        }
    }

    errors
}

/// Section headings a document of its type is expected to carry but does not.
pub fn missing_sections(document: &Document) -> Vec<&'static str> {
    required_sections(&document.doc_type)
        .iter()
        .copied()
        .filter(|section| !has_section(&document.raw_content, section))
        .collect()
}

fn required_sections(doc_type: &DocumentType) -> &'static [&'static str] {
    match doc_type {
        DocumentType::Project => &["Objective", "Research Scope", "Key Questions"],
        DocumentType::Milestone => &["Milestone Summary", "Outcome", "Enables"],
        DocumentType::Experiment => &["Research Question", "Hypothesis", "Method"],
        DocumentType::DailyNote => &["Focus", "Actions", "Observations"],
        DocumentType::Insight => &["Insight", "Evidence"],
        DocumentType::Decision => &["Decision", "Rationale"],
        DocumentType::Synthesis => &["What Was Established", "Key Decisions", "Resulting System Posture"],
        DocumentType::Other(_) => &[],
    }
}

/// `## <section>` at the start of some line, any amount of blank space after the hashes
fn has_section(markdown: &str, section: &str) -> bool {
    markdown.lines().any(|line| {
        line.strip_prefix("##")
            .filter(|rest| rest.starts_with(char::is_whitespace))
            .is_some_and(|rest| rest.trim_start().starts_with(section))
    })
}

fn normalize_date(date: &mut Value) {
    let Some(text) = date.as_str() else {
        return;
    };
    if let Some(day) = DATETIME_RE.captures(text).and_then(|c| c.get(1)) {
        *date = Value::String(day.as_str().to_string());
    }
}

fn is_present(value: Option<&Value>) -> bool {
    match value {
        None | Some(Value::Null) => false,
        Some(Value::String(s)) => !s.is_empty(),
        Some(_) => true,
    }
}

fn record_source(record: &Value, position: usize) -> String {
    ["filePath", "id"]
        .iter()
        .find_map(|key| record.get(*key).and_then(Value::as_str))
        .map(str::to_string)
        .unwrap_or_else(|| format!("record #{}", position))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn valid() -> Value {
        json!({
            "id": "exp-1",
            "type": "experiment",
            "title": "Baseline",
            "date": "2024-02-15",
            "status": "in-progress",
            "lab": "Sunrise Labs",
            "authors": ["R. Ito"],
            "tags": [],
            "links": { "project": "proj-a" },
            "rawContent": "## Research Question\n\n## Hypothesis\n\n## Method\n"
        })
    }

    #[test]
    fn test_valid_record_passes() {
        let mut record = valid();
        assert_eq!(validate_record(&mut record), Ok(()));
    }

    #[test]
    fn test_missing_fields_all_reported() {
        let mut record = json!({ "id": "x", "type": "insight", "links": {} });
        let errors = validate_record(&mut record).unwrap_err();

        for field in ["title", "date", "status", "lab"] {
            assert!(errors.contains(&format!("Missing required field: {}", field)));
        }
        assert!(errors.iter().any(|e| e.contains("authors")));
        assert!(errors.iter().any(|e| e.contains("tags")));
    }

    #[test]
    fn test_datetime_normalized() {
        let mut record = valid();
        record["date"] = json!("2024-02-15T00:00:00.000Z");

        assert_eq!(validate_record(&mut record), Ok(()));
        assert_eq!(record["date"], json!("2024-02-15"));
    }

    #[test]
    fn test_bad_date_rejected() {
        let mut record = valid();
        record["date"] = json!("15/02/2024");

        let errors = validate_record(&mut record).unwrap_err();
        assert_eq!(errors, vec!["Invalid date format: 15/02/2024. Must be YYYY-MM-DD".to_string()]);
    }

    #[test]
    fn test_invalid_type_and_status() {
        let mut record = valid();
        record["type"] = json!("memo");
        record["status"] = json!("done");

        let errors = validate_record(&mut record).unwrap_err();
        assert!(errors[0].starts_with("Invalid type: memo"));
        assert!(errors[1].starts_with("Invalid status: done"));
    }

    #[test]
    fn test_link_rules() {
        let mut record = valid();
        record["links"] = json!({ "projects": "proj-a", "related": "ins-1" });

        let errors = validate_record(&mut record).unwrap_err();
        assert!(errors.iter().any(|e| e.starts_with("Invalid links field: projects")));
        assert!(errors.contains(&"links.related must be an array".to_string()));
        assert!(errors.contains(&"experiment pages require links.project to be set".to_string()));
    }

    #[test]
    fn test_insight_needs_no_project() {
        let mut record = valid();
        record["type"] = json!("insight");
        record["links"] = json!({});

        assert_eq!(validate_record(&mut record), Ok(()));
    }

    #[test]
    fn test_missing_sections() {
        let mut record = valid();
        record["rawContent"] = json!("## Research Question\n##Hypothesis\n#  Method\n");
        validate_record(&mut record).unwrap();
        let doc: Document = serde_json::from_value(record).unwrap();

        assert_eq!(missing_sections(&doc), vec!["Hypothesis", "Method"]);
    }

    #[test]
    fn test_ingest_keeps_order_and_skips_invalid() {
        let mut second = valid();
        second["id"] = json!("exp-2");
        let broken = json!({ "id": "bad", "filePath": "lab/bad.md" });

        let report = ingest_records(vec![valid(), broken, second]);

        let ids: Vec<&str> = report.documents.iter().map(|d| d.id.as_str()).collect();
        assert_eq!(ids, vec!["exp-1", "exp-2"]);
        assert_eq!(report.rejected.len(), 1);
        assert_eq!(report.rejected[0].source, "lab/bad.md");
    }

    #[test]
    fn test_non_object_record() {
        let report = ingest_records(vec![json!(42)]);
        assert!(report.documents.is_empty());
        assert_eq!(report.rejected[0].source, "record #0");
    }
}
