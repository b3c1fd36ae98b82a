//! Raw record readers: one JSON object, or a CSV file with one record per row.
//!
//! Keys and headers are matched to the canonical field names ignoring case, so
//! exports from spreadsheets or other tools work without renaming columns.
//! Keys and columns that name no field are ignored. Two keys or columns that
//! fold to the same field are an input error.

use std::collections::HashMap;
use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde_json::{Map, Value};

use crate::domain::fields::canonical_name;
use crate::domain::{RawInputRecord, RawValue};
use crate::error::AppError;

/// One parsed CSV row.
#[derive(Debug, Clone)]
pub struct CsvRow {
    pub line: usize,
    pub id: Option<String>,
    pub record: RawInputRecord,
}

/// A row-level problem; the rest of the batch carries on.
#[derive(Debug, Clone, PartialEq)]
pub struct RowError {
    pub line: usize,
    pub id: Option<String>,
    pub message: String,
}

#[derive(Debug, Clone)]
pub struct CsvBatch {
    pub rows: Vec<CsvRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

pub fn read_record_json(path: &Path) -> Result<RawInputRecord, AppError> {
    let json = std::fs::read_to_string(path)
        .map_err(|e| AppError::new(2, format!("Failed to open record JSON '{}': {e}", path.display())))?;
    parse_record_json(&json).map_err(|e| AppError::new(e.exit_code(), format!("'{}': {e}", path.display())))
}

/// Parse one JSON object. Known fields must be numbers; other keys are ignored.
pub fn parse_record_json(json: &str) -> Result<RawInputRecord, AppError> {
    let object: Map<String, Value> =
        serde_json::from_str(json).map_err(|e| AppError::new(2, format!("Invalid record JSON: {e}")))?;

    let mut raw = RawInputRecord::new();
    let mut seen: HashMap<&'static str, &str> = HashMap::new();
    for (key, value) in &object {
        let Some(field) = canonical_name(key) else {
            tracing::debug!(key = key.as_str(), "ignoring unknown record key");
            continue;
        };
        if let Some(previous) = seen.insert(field, key) {
            return Err(AppError::new(
                2,
                format!("Keys '{previous}' and '{key}' both name `{field}`."),
            ));
        }
        let number = json_number(value)
            .ok_or_else(|| AppError::new(2, format!("`{field}` must be a number, got {value}.")))?;
        raw.insert(field, number);
    }
    Ok(raw)
}

fn json_number(value: &Value) -> Option<RawValue> {
    let Value::Number(n) = value else {
        return None;
    };
    match n.as_i64() {
        Some(i) => Some(RawValue::Int(i)),
        None => n.as_f64().filter(|v| v.is_finite()).map(RawValue::Float),
    }
}

pub fn read_records_csv(path: &Path) -> Result<CsvBatch, AppError> {
    let file = File::open(path)
        .map_err(|e| AppError::new(2, format!("Failed to open CSV '{}': {e}", path.display())))?;
    read_records_csv_from(file)
}

pub fn read_records_csv_from<R: Read>(reader: R) -> Result<CsvBatch, AppError> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let headers = reader
        .headers()
        .map_err(|e| AppError::new(2, format!("Failed to read CSV headers: {e}")))?
        .clone();

    let columns = build_column_map(&headers)?;
    if columns.fields.is_empty() {
        return Err(AppError::new(
            2,
            "CSV header does not contain any known field names.",
        ));
    }

    let mut rows = Vec::new();
    let mut row_errors = Vec::new();
    let mut rows_read = 0usize;

    for (idx, result) in reader.records().enumerate() {
        // +2: header is line 1, records are 1-based after it.
        let line = idx + 2;
        rows_read += 1;

        let record = match result {
            Ok(r) => r,
            Err(e) => {
                row_errors.push(RowError {
                    line,
                    id: None,
                    message: format!("CSV parse error: {e}"),
                });
                continue;
            }
        };

        let id = columns
            .id
            .and_then(|i| record.get(i))
            .filter(|s| !s.is_empty())
            .map(str::to_string);

        match parse_row(&record, &columns) {
            Ok(record) => rows.push(CsvRow { line, id, record }),
            Err(message) => row_errors.push(RowError { line, id, message }),
        }
    }

    Ok(CsvBatch {
        rows,
        row_errors,
        rows_read,
    })
}

struct ColumnMap {
    id: Option<usize>,
    fields: HashMap<&'static str, usize>,
}

fn build_column_map(headers: &StringRecord) -> Result<ColumnMap, AppError> {
    let mut id = None;
    let mut fields = HashMap::new();
    for (idx, name) in headers.iter().enumerate() {
        // Spreadsheet exports often carry a BOM on the first header.
        let name = name.trim().trim_start_matches('\u{feff}');
        if name.eq_ignore_ascii_case("id") {
            id = Some(idx);
        } else if let Some(canonical) = canonical_name(name) {
            if fields.insert(canonical, idx).is_some() {
                return Err(AppError::new(
                    2,
                    format!("CSV header names `{canonical}` more than once."),
                ));
            }
        }
    }
    Ok(ColumnMap { id, fields })
}

fn parse_row(record: &StringRecord, columns: &ColumnMap) -> Result<RawInputRecord, String> {
    let mut raw = RawInputRecord::new();
    for (&field, &idx) in &columns.fields {
        let Some(cell) = record.get(idx).filter(|s| !s.is_empty()) else {
            // Left absent: the encoder reports it as a missing field.
            continue;
        };
        let value = RawValue::parse(cell).ok_or_else(|| format!("Invalid value '{cell}' for `{field}`."))?;
        raw.insert(field, value);
    }
    Ok(raw)
}
