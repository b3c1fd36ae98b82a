//! Formatted terminal output.
//!
//! Formatting lives here so the encoder and the pipeline stay free of
//! presentation concerns. Every function returns a `String`; printing is the
//! caller's job.

use serde::Serialize;

use crate::app::pipeline::{BatchOutput, PredictionOutput};
use crate::codes::{self, CodeList};
use crate::domain::{FeatureVector, Prediction, RawValue};
use crate::encode::{self, BUCKET_POLICY_VERSION, FieldTrace};
use crate::error::AppError;
use crate::io::record::RowError;
use crate::validate::InputWarning;

/// Single-record prediction, optionally with the bucketing trace.
pub fn format_prediction(out: &PredictionOutput, explain: bool) -> String {
    let mut out_s = String::new();

    out_s.push_str(&format!("Result: {}\n", prediction_line(&out.prediction)));

    if explain {
        if !out.warnings.is_empty() {
            out_s.push('\n');
            out_s.push_str(&format_warnings(&out.warnings));
        }
        out_s.push('\n');
        out_s.push_str(&format_trace(&out.trace));
        out_s.push('\n');
        out_s.push_str(&format_features(&out.features));
    }

    out_s
}

fn prediction_line(prediction: &Prediction) -> String {
    match prediction.dropout_probability {
        Some(p) => format!("{} (dropout probability {:.1}%)", prediction.label.display_name(), p * 100.0),
        None => prediction.label.display_name().to_string(),
    }
}

/// How each bucketed field was simplified.
pub fn format_trace(trace: &[FieldTrace]) -> String {
    let mut out = String::new();
    out.push_str("Bucketed fields:\n");
    out.push_str(&format!(
        "{:<38} {:>8}  {:<34} {:<16} {:>3}\n",
        "field", "raw", "meaning", "bucket", "ord"
    ));
    for t in trace {
        let meaning = t
            .raw
            .as_code()
            .and_then(|c| codes::label(t.field, c))
            .unwrap_or("");
        out.push_str(&format!(
            "{:<38} {:>8}  {:<34} {:<16} {:>3}\n",
            t.field,
            t.raw.to_string(),
            truncate(meaning, 34),
            t.bucket,
            t.ordinal
        ));
    }
    out
}

/// The encoded vector, one `name = value` line per feature in vector order.
pub fn format_features(features: &FeatureVector) -> String {
    let mut out = String::new();
    out.push_str(&format!("Feature vector ({} features):\n", features.len()));
    let width = features.names().iter().map(String::len).max().unwrap_or(0);
    for (name, value) in features.iter() {
        out.push_str(&format!("  {name:<width$} = {value}\n"));
    }
    out
}

pub fn format_warnings(warnings: &[InputWarning]) -> String {
    let mut out = String::new();
    out.push_str(&format!("Input warnings ({}):\n", warnings.len()));
    for w in warnings {
        out.push_str(&format!("- {w}\n"));
    }
    out
}

/// Feature order of a schema, marking how each feature is produced.
pub fn format_schema(feature_names: &[String], source: &str) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Schema: {source} | {} features | bucket policy v{BUCKET_POLICY_VERSION}\n",
        feature_names.len()
    ));
    for (idx, name) in feature_names.iter().enumerate() {
        let how = match encode::simplifier_for(name) {
            Some(s) => format!("bucketed ({})", s.table_name()),
            None if encode::PASS_THROUGH_FIELDS.contains(&name.as_str()) => "pass-through".to_string(),
            None => "unknown to the encoder".to_string(),
        };
        out.push_str(&format!("{idx:>3}  {name:<46} {how}\n"));
    }
    out
}

/// Code list of one field with the bucket and ordinal each code encodes to.
pub fn format_codes(field: &str, list: CodeList) -> String {
    let simplifier = encode::simplifier_for(field);
    let mut out = String::new();
    match simplifier {
        Some(s) => out.push_str(&format!("{field} (bucketed, {})\n", s.table_name())),
        None => out.push_str(&format!("{field} (pass-through)\n")),
    }
    for (code, label) in list {
        match simplifier {
            Some(s) => {
                let (bucket, ordinal) = s.apply(RawValue::Int(*code));
                out.push_str(&format!(
                    "{code:>6}  {:<48} -> {bucket:<16} {ordinal}\n",
                    truncate(label, 48)
                ));
            }
            None => out.push_str(&format!("{code:>6}  {label}\n")),
        }
    }
    out
}

/// Fields that have a code catalogue.
pub fn format_catalogue_index() -> String {
    let mut out = String::new();
    out.push_str("Catalogued fields (use `dropout codes <FIELD>`):\n");
    for field in codes::CATALOGUED_FIELDS {
        let n = codes::catalogue(field).map_or(0, |l| l.len());
        let how = if encode::is_bucketed(field) { "bucketed" } else { "pass-through" };
        out.push_str(&format!("  {field:<28} {n:>3} codes  {how}\n"));
    }
    out
}

pub fn format_batch_summary(batch: &BatchOutput) -> String {
    let mut out = String::new();
    out.push_str(&format!(
        "Rows: read={} | scored={} | errors={}\n",
        batch.rows_read,
        batch.scored.len(),
        batch.row_errors.len()
    ));
    if !batch.scored.is_empty() {
        let dropouts = batch.dropout_count();
        out.push_str(&format!(
            "Predicted dropout: {dropouts} of {} ({:.1}%)\n",
            batch.scored.len(),
            dropouts as f64 * 100.0 / batch.scored.len() as f64
        ));
    }

    if !batch.scored.is_empty() {
        out.push('\n');
        out.push_str(&format!("{:>6}  {:<16} {:<9} {:>8}\n", "line", "id", "result", "p"));
        for row in &batch.scored {
            out.push_str(&format!(
                "{:>6}  {:<16} {:<9} {:>8}\n",
                row.line,
                truncate(row.id.as_deref().unwrap_or("-"), 16),
                row.prediction.label.display_name(),
                row.prediction
                    .dropout_probability
                    .map(|p| format!("{p:.3}"))
                    .unwrap_or_else(|| "-".to_string()),
            ));
        }
    }

    if !batch.row_errors.is_empty() {
        out.push('\n');
        out.push_str(&format_row_errors(&batch.row_errors));
    }

    out
}

pub fn format_row_errors(errors: &[RowError]) -> String {
    let mut out = String::new();
    out.push_str("Row errors:\n");
    for e in errors {
        match &e.id {
            Some(id) => out.push_str(&format!("- line {} (id={id}): {}\n", e.line, e.message)),
            None => out.push_str(&format!("- line {}: {}\n", e.line, e.message)),
        }
    }
    out
}

#[derive(Serialize)]
struct PredictionJson<'a> {
    prediction: &'a Prediction,
    features: &'a FeatureVector,
    #[serde(skip_serializing_if = "Option::is_none")]
    trace: Option<&'a [FieldTrace]>,
    warnings: &'a [InputWarning],
}

/// `--json` rendering of a prediction.
pub fn prediction_json(out: &PredictionOutput, explain: bool) -> Result<String, AppError> {
    to_json(&PredictionJson {
        prediction: &out.prediction,
        features: &out.features,
        trace: explain.then_some(out.trace.as_slice()),
        warnings: &out.warnings,
    })
}

#[derive(Serialize)]
struct EncodeJson<'a> {
    features: &'a FeatureVector,
    trace: &'a [FieldTrace],
}

/// `--json` rendering of an encoded record.
pub fn features_json(features: &FeatureVector, trace: &[FieldTrace]) -> Result<String, AppError> {
    to_json(&EncodeJson { features, trace })
}

fn to_json<T: Serialize>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value).map_err(|e| AppError::new(4, format!("Failed to render JSON: {e}")))
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut t: String = s.chars().take(max.saturating_sub(1)).collect();
    t.push('~');
    t
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::pipeline::ScoredRow;
    use crate::domain::Label;
    use crate::domain::fields::*;
    use crate::encode::assemble::tests::sample_record;

    fn output(explain_warning: bool) -> PredictionOutput {
        let raw = sample_record();
        let features = encode::encode(&raw).unwrap();
        let trace = encode::explain(&raw).unwrap();
        let warnings = if explain_warning {
            vec![InputWarning::NotWhole {
                field: DEBTOR,
                value: 0.5,
            }]
        } else {
            Vec::new()
        };
        PredictionOutput {
            features,
            trace,
            prediction: Prediction {
                label: Label::Dropout,
                dropout_probability: Some(0.625),
            },
            warnings,
        }
    }

    #[test]
    fn prediction_summary_and_explain() {
        let short = format_prediction(&output(false), false);
        assert_eq!(short, "Result: Dropout (dropout probability 62.5%)\n");

        let long = format_prediction(&output(true), true);
        assert!(long.contains("Input warnings (1):"));
        assert!(long.contains("Bucketed fields:"));
        assert!(long.contains("Feature vector (36 features):"));
        // Course 9500 is labelled from the catalogue and lands in Health.
        let course = long.lines().find(|l| l.starts_with("Course ")).unwrap();
        assert!(course.contains("Nursing"), "{course}");
        assert!(course.contains("Health"), "{course}");
    }

    #[test]
    fn schema_marks_feature_kinds() {
        let names = vec![COURSE.to_string(), GDP.to_string(), "Target".to_string()];
        let text = format_schema(&names, "model.json");
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[0].contains("3 features"));
        assert!(lines[1].contains("bucketed"));
        assert!(lines[2].contains("pass-through"));
        assert!(lines[3].contains("unknown to the encoder"));
    }

    #[test]
    fn codes_show_bucket_and_ordinal() {
        let list = codes::catalogue(NACIONALITY).unwrap();
        let text = format_codes(NACIONALITY, list);
        let portuguese = text.lines().find(|l| l.contains("Portuguese")).unwrap();
        assert!(portuguese.trim_end().ends_with("Local            0"), "{portuguese}");

        let gender = format_codes(GENDER, codes::catalogue(GENDER).unwrap());
        assert!(gender.starts_with("Gender (pass-through)"));
    }

    #[test]
    fn batch_summary_lists_rows_and_errors() {
        let out = output(false);
        let batch = BatchOutput {
            scored: vec![ScoredRow {
                line: 2,
                id: Some("s-1".to_string()),
                prediction: out.prediction,
                features: out.features,
                warnings: Vec::new(),
            }],
            row_errors: vec![RowError {
                line: 3,
                id: None,
                message: "missing required field `GDP`".to_string(),
            }],
            rows_read: 2,
        };
        let text = format_batch_summary(&batch);
        assert!(text.starts_with("Rows: read=2 | scored=1 | errors=1\n"));
        assert!(text.contains("Predicted dropout: 1 of 1 (100.0%)"));
        assert!(text.contains("- line 3: missing required field `GDP`"));
    }

    #[test]
    fn json_output_keeps_feature_order() {
        let json = prediction_json(&output(false), false).unwrap();
        let v: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(v["prediction"]["label"], "dropout");
        assert!(v.get("trace").is_none());
        let first_key = json.split("\"features\"").nth(1).unwrap();
        assert!(first_key.trim_start_matches([':', ' ', '{', '\n']).starts_with("\"Marital_status\""));
    }
}
