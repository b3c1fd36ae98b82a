//! Shared prediction pipeline used by every CLI command.
//!
//! raw record -> soft checks -> bucket/encode -> project to model schema -> classify
//!
//! The command handlers only deal with reading inputs and presenting outputs.

use rayon::prelude::*;

use crate::domain::{FeatureVector, Prediction, RawInputRecord};
use crate::encode::{self, BUCKET_POLICY_VERSION, FieldTrace};
use crate::error::EncodeError;
use crate::io::record::{CsvBatch, RowError};
use crate::model::Classifier;
use crate::validate::{InputWarning, check_ranges};

/// Everything computed for one record.
#[derive(Debug, Clone)]
pub struct PredictionOutput {
    pub features: FeatureVector,
    pub trace: Vec<FieldTrace>,
    pub prediction: Prediction,
    pub warnings: Vec<InputWarning>,
}

/// Encode a record against the classifier's schema and classify it.
///
/// All-or-nothing: either every step succeeds or the error is returned and
/// nothing is classified.
pub fn predict_record<C: Classifier + ?Sized>(
    raw: &RawInputRecord,
    classifier: &C,
) -> Result<PredictionOutput, EncodeError> {
    let warnings = check_ranges(raw);
    for w in &warnings {
        tracing::warn!("{w}");
    }
    let features = encode::encode_for(raw, classifier.feature_names())?;
    let trace = encode::explain(raw)?;

    let values = features.values();
    let prediction = Prediction {
        label: classifier.predict(values),
        dropout_probability: classifier.dropout_probability(values),
    };

    Ok(PredictionOutput {
        features,
        trace,
        prediction,
        warnings,
    })
}

/// Encode without classifying, in the classifier's order when one is given.
pub fn encode_record<C: Classifier + ?Sized>(
    raw: &RawInputRecord,
    classifier: Option<&C>,
) -> Result<(FeatureVector, Vec<FieldTrace>), EncodeError> {
    let features = match classifier {
        Some(c) => encode::encode_for(raw, c.feature_names())?,
        None => encode::encode(raw)?,
    };
    let trace = encode::explain(raw)?;
    Ok((features, trace))
}

/// Warn once when a model was trained against a different bucket policy.
pub fn check_policy_version<C: Classifier + ?Sized>(classifier: &C) {
    match classifier.bucket_policy_version() {
        Some(v) if v != BUCKET_POLICY_VERSION => {
            tracing::warn!(
                model = v,
                encoder = BUCKET_POLICY_VERSION,
                "model was trained against a different bucket policy version"
            );
        }
        Some(_) => {}
        None => tracing::debug!("model does not record a bucket policy version"),
    }
}

/// One successfully scored CSV row.
#[derive(Debug, Clone)]
pub struct ScoredRow {
    pub line: usize,
    pub id: Option<String>,
    pub prediction: Prediction,
    pub features: FeatureVector,
    pub warnings: Vec<InputWarning>,
}

#[derive(Debug, Clone)]
pub struct BatchOutput {
    pub scored: Vec<ScoredRow>,
    pub row_errors: Vec<RowError>,
    pub rows_read: usize,
}

impl BatchOutput {
    pub fn dropout_count(&self) -> usize {
        self.scored
            .iter()
            .filter(|r| r.prediction.label == crate::domain::Label::Dropout)
            .count()
    }
}

/// Score every row of a CSV batch in parallel.
///
/// Rows are independent: one row failing to encode becomes a row error and
/// does not affect the others. Output keeps input order.
pub fn predict_batch<C: Classifier + ?Sized>(batch: CsvBatch, classifier: &C) -> BatchOutput {
    let CsvBatch {
        rows,
        mut row_errors,
        rows_read,
    } = batch;

    let results: Vec<Result<ScoredRow, RowError>> = rows
        .par_iter()
        .map(|row| {
            predict_record(&row.record, classifier)
                .map(|out| ScoredRow {
                    line: row.line,
                    id: row.id.clone(),
                    prediction: out.prediction,
                    features: out.features,
                    warnings: out.warnings,
                })
                .map_err(|e| RowError {
                    line: row.line,
                    id: row.id.clone(),
                    message: e.to_string(),
                })
        })
        .collect();

    let mut scored = Vec::with_capacity(results.len());
    for result in results {
        match result {
            Ok(row) => scored.push(row),
            Err(err) => row_errors.push(err),
        }
    }
    row_errors.sort_by_key(|e| e.line);

    tracing::info!(
        rows_read,
        scored = scored.len(),
        errors = row_errors.len(),
        "batch scored"
    );

    BatchOutput {
        scored,
        row_errors,
        rows_read,
    }
}
