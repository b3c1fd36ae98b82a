//! Export batch predictions to CSV.
//!
//! One row per scored input row (label name and its 0/1 class), followed by the encoded features in the
//! model's column order so the file can be fed back into training scripts.

use std::io::Write;
use std::path::Path;

use crate::app::pipeline::ScoredRow;
use crate::error::AppError;

pub fn write_predictions_csv(path: &Path, rows: &[ScoredRow], feature_names: &[String]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)
        .map_err(|e| AppError::new(2, format!("Failed to create export CSV '{}': {e}", path.display())))?;
    write_predictions(file, rows, feature_names)
}

pub fn write_predictions<W: Write>(writer: W, rows: &[ScoredRow], feature_names: &[String]) -> Result<(), AppError> {
    let mut out = csv::Writer::from_writer(writer);
    let write_err = |e: csv::Error| AppError::new(2, format!("Failed to write export CSV: {e}"));

    let mut header = vec![
        "line".to_string(),
        "id".to_string(),
        "label".to_string(),
        "class".to_string(),
        "dropout_probability".to_string(),
    ];
    header.extend(feature_names.iter().cloned());
    out.write_record(&header).map_err(write_err)?;

    for row in rows {
        let mut fields = Vec::with_capacity(header.len());
        fields.push(row.line.to_string());
        fields.push(row.id.clone().unwrap_or_default());
        fields.push(row.prediction.label.display_name().to_string());
        fields.push(row.prediction.label.class().to_string());
        fields.push(
            row.prediction
                .dropout_probability
                .map(|p| format!("{p:.6}"))
                .unwrap_or_default(),
        );
        fields.extend(row.features.values().iter().map(|v| v.to_string()));
        out.write_record(&fields).map_err(write_err)?;
    }

    out.flush()
        .map_err(|e| AppError::new(2, format!("Failed to flush export CSV: {e}")))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{FeatureVector, Label, Prediction};

    fn row(line: usize, id: Option<&str>, label: Label, p: Option<f64>) -> ScoredRow {
        ScoredRow {
            line,
            id: id.map(str::to_string),
            prediction: Prediction {
                label,
                dropout_probability: p,
            },
            features: FeatureVector::from_parts(vec!["Debtor".to_string(), "Age_at_enrollment".to_string()], vec![1.0, 2.0]),
            warnings: Vec::new(),
        }
    }

    #[test]
    fn writes_header_and_rows() {
        let names = vec!["Debtor".to_string(), "Age_at_enrollment".to_string()];
        let rows = vec![
            row(2, Some("s-1"), Label::Dropout, Some(0.75)),
            row(3, None, Label::Graduate, None),
        ];
        let mut buf = Vec::new();
        write_predictions(&mut buf, &rows, &names).unwrap();
        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "line,id,label,class,dropout_probability,Debtor,Age_at_enrollment");
        assert_eq!(lines[1], "2,s-1,Dropout,1,0.750000,1,2");
        assert_eq!(lines[2], "3,,Graduate,0,,1,2");
    }

    #[test]
    fn writes_to_a_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_predictions_csv(&path, &[row(2, None, Label::Graduate, Some(0.1))], &["Debtor".to_string()]).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("line,id,label,class,dropout_probability,Debtor\n"));
    }
}
