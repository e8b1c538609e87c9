//! JSON corpus loader.
//!
//! The corpus is an array of row objects with the tabular column names:
//! project_id, project_name, project_type, region, site, capacity,
//! total_cost_usd, civil_cost, mechanical_cost, electrical_cost,
//! automation_cost, contingency_pct, execution_year.

use std::path::Path;

use serde_json::Value;
use tracing::{info, warn};

use capex_core::errors::{CapexResult, CorpusError};
use capex_core::models::HistoricalProject;

use crate::corpus::ProjectCorpus;

/// Load and validate the corpus from a JSON file.
pub fn load_corpus(path: &Path) -> CapexResult<ProjectCorpus> {
    let content = std::fs::read_to_string(path).map_err(|e| CorpusError::Io {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let rows: Vec<Value> = serde_json::from_str(&content).map_err(|e| CorpusError::Parse {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    build_corpus(&rows)
}

/// Parse corpus rows from an in-memory JSON string. Used by tests and by
/// callers that source rows from somewhere other than a file.
pub fn parse_rows(input: &str) -> CapexResult<ProjectCorpus> {
    let rows: Vec<Value> = serde_json::from_str(input).map_err(|e| CorpusError::Parse {
        path: "<inline>".to_string(),
        reason: e.to_string(),
    })?;
    build_corpus(&rows)
}

fn build_corpus(rows: &[Value]) -> CapexResult<ProjectCorpus> {
    let mut projects = Vec::with_capacity(rows.len());
    let mut dropped = 0usize;
    for (index, row) in rows.iter().enumerate() {
        match parse_row(row) {
            Ok(project) => projects.push(project),
            Err(reason) => {
                dropped += 1;
                warn!(row = index, %reason, "dropping corpus row");
            }
        }
    }
    if projects.is_empty() {
        return Err(CorpusError::EmptyCorpus.into());
    }
    info!(rows = projects.len(), dropped, "corpus loaded");
    Ok(ProjectCorpus::new(projects))
}

fn parse_row(row: &Value) -> Result<HistoricalProject, String> {
    Ok(HistoricalProject {
        project_type: required_str(row, "project_type")?,
        region: required_str(row, "region")?,
        capacity: required_number(row, "capacity")?,
        execution_year: required_year(row, "execution_year")?,
        project_id: optional_str(row, "project_id"),
        project_name: optional_str(row, "project_name"),
        site: optional_str(row, "site"),
        total_cost_usd: optional_number(row, "total_cost_usd")?,
        civil_cost: optional_number(row, "civil_cost")?,
        mechanical_cost: optional_number(row, "mechanical_cost")?,
        electrical_cost: optional_number(row, "electrical_cost")?,
        automation_cost: optional_number(row, "automation_cost")?,
        contingency_pct: optional_number(row, "contingency_pct")?,
    })
}

fn required_str(row: &Value, field: &str) -> Result<String, String> {
    match row.get(field) {
        Some(Value::String(s)) if !s.is_empty() => Ok(s.clone()),
        Some(Value::Null) | None => Err(format!("missing required field {field}")),
        Some(_) => Err(format!("field {field} is not a string")),
    }
}

fn optional_str(row: &Value, field: &str) -> String {
    row.get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

fn required_number(row: &Value, field: &str) -> Result<f64, String> {
    match row.get(field) {
        Some(Value::Null) | None => Err(format!("missing required field {field}")),
        Some(value) => value
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("field {field} is not numeric")),
    }
}

/// Numeric field with a 0.0 default: absent is fine, present-but-non-numeric
/// drops the row.
fn optional_number(row: &Value, field: &str) -> Result<f64, String> {
    match row.get(field) {
        Some(Value::Null) | None => Ok(0.0),
        Some(value) => value
            .as_f64()
            .filter(|v| v.is_finite())
            .ok_or_else(|| format!("field {field} is not numeric")),
    }
}

/// Calendar years arrive as JSON integers, occasionally as integral floats.
fn required_year(row: &Value, field: &str) -> Result<i32, String> {
    let value = required_number(row, field)?;
    if value.fract() != 0.0 {
        return Err(format!("field {field} is not an integer year"));
    }
    Ok(value as i32)
}
