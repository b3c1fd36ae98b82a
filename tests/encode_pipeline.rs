//! End-to-end checks through the public API: records in, feature vectors and
//! predictions out, including the file formats the CLI reads and writes.

use std::io::Write;

use dropout_risk::app::pipeline::{predict_batch, predict_record};
use dropout_risk::domain::fields::{self, FieldKind, RAW_FIELDS, canonical_feature_order};
use dropout_risk::domain::{Label, RawInputRecord, RawValue};
use dropout_risk::encode::tables::{
    ADMISSION_GRADE_THRESHOLDS, PREVIOUS_QUALIFICATION_GRADE_THRESHOLDS, SEM1_GRADE_THRESHOLDS, SEM2_GRADE_THRESHOLDS,
};
use dropout_risk::encode::{self, Simplifier};
use dropout_risk::error::EncodeError;
use dropout_risk::io::{read_record_json, read_records_csv, write_predictions_csv};
use dropout_risk::model::{Classifier, ForestModel};
use proptest::prelude::*;

fn student() -> RawInputRecord {
    RawInputRecord::new()
        .with(fields::MARITAL_STATUS, 1)
        .with(fields::APPLICATION_MODE, 1)
        .with(fields::APPLICATION_ORDER, 2)
        .with(fields::COURSE, 9119)
        .with(fields::DAYTIME_EVENING_ATTENDANCE, 1)
        .with(fields::PREVIOUS_QUALIFICATION, 1)
        .with(fields::PREVIOUS_QUALIFICATION_GRADE, 128.0)
        .with(fields::NACIONALITY, 1)
        .with(fields::MOTHERS_QUALIFICATION, 19)
        .with(fields::FATHERS_QUALIFICATION, 1)
        .with(fields::MOTHERS_OCCUPATION, 5)
        .with(fields::FATHERS_OCCUPATION, 7)
        .with(fields::ADMISSION_GRADE, 121.5)
        .with(fields::DISPLACED, 0)
        .with(fields::EDUCATIONAL_SPECIAL_NEEDS, 0)
        .with(fields::DEBTOR, 1)
        .with(fields::TUITION_FEES_UP_TO_DATE, 0)
        .with(fields::GENDER, 1)
        .with(fields::SCHOLARSHIP_HOLDER, 0)
        .with(fields::AGE_AT_ENROLLMENT, 24)
        .with(fields::INTERNATIONAL, 0)
        .with(fields::SEM1_CREDITED, 0)
        .with(fields::SEM1_ENROLLED, 6)
        .with(fields::SEM1_EVALUATIONS, 9)
        .with(fields::SEM1_APPROVED, 3)
        .with(fields::SEM1_GRADE, 10.2)
        .with(fields::SEM1_WITHOUT_EVALUATIONS, 1)
        .with(fields::SEM2_CREDITED, 0)
        .with(fields::SEM2_ENROLLED, 6)
        .with(fields::SEM2_EVALUATIONS, 8)
        .with(fields::SEM2_APPROVED, 2)
        .with(fields::SEM2_GRADE, 9.5)
        .with(fields::SEM2_WITHOUT_EVALUATIONS, 0)
        .with(fields::UNEMPLOYMENT_RATE, 12.4)
        .with(fields::INFLATION_RATE, 0.5)
        .with(fields::GDP, 1.79)
}

/// Two stumps over `Debtor` and `Curricular_units_1st_sem_grade`.
const FOREST_JSON: &str = r#"{
    "feature_names": ["Debtor", "Curricular_units_1st_sem_grade", "Gender"],
    "bucket_policy_version": 1,
    "trees": [
        { "nodes": [
            { "feature": 0, "threshold": 0.5, "left": 1, "right": 2 },
            { "dropout_probability": 0.2 },
            { "dropout_probability": 0.9 }
        ] },
        { "nodes": [
            { "feature": 1, "threshold": 1.5, "left": 1, "right": 2 },
            { "dropout_probability": 0.7 },
            { "dropout_probability": 0.1 }
        ] }
    ]
}"#;

fn any_record() -> impl Strategy<Value = RawInputRecord> {
    prop::collection::vec(-50_000i64..50_000, RAW_FIELDS.len()).prop_map(|values| {
        RAW_FIELDS
            .iter()
            .zip(values)
            .map(|(spec, v)| {
                let value = match spec.kind {
                    FieldKind::Code | FieldKind::Flag | FieldKind::Count => RawValue::Int(v),
                    _ => RawValue::Float(v as f64 / 100.0),
                };
                (spec.name.to_string(), value)
            })
            .collect()
    })
}

#[test]
fn student_encodes_in_canonical_order() {
    let fv = encode::encode(&student()).unwrap();
    assert_eq!(fv.names(), canonical_feature_order().as_slice());
    // Informatics engineering, general contingent, 24 years old, debtor.
    assert_eq!(fv.get(fields::COURSE), Some(0.0));
    assert_eq!(fv.get(fields::APPLICATION_MODE), Some(0.0));
    assert_eq!(fv.get(fields::AGE_AT_ENROLLMENT), Some(2.0));
    assert_eq!(fv.get(fields::ADMISSION_GRADE), Some(1.0));
    assert_eq!(fv.get(fields::SEM1_GRADE), Some(0.0));
    assert_eq!(fv.get(fields::DEBTOR), Some(1.0));
    assert_eq!(fv.get(fields::GDP), Some(1.79));
}

#[test]
fn forest_file_predicts_through_the_pipeline() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(FOREST_JSON.as_bytes()).unwrap();
    let model = ForestModel::load(file.path()).unwrap();

    // Debtor (0.9) and lowest semester-1 bucket (0.7).
    let out = predict_record(&student(), &model).unwrap();
    assert_eq!(out.features.values(), &[1.0, 0.0, 1.0]);
    assert_eq!(out.prediction.label, Label::Dropout);
    assert!((out.prediction.dropout_probability.unwrap() - 0.8).abs() < 1e-12);

    // Not a debtor (0.2) with a top semester-1 grade (0.1).
    let good = student().with(fields::DEBTOR, 0).with(fields::SEM1_GRADE, 16.0);
    let out = predict_record(&good, &model).unwrap();
    assert_eq!(out.prediction.label, Label::Graduate);
}

#[test]
fn schema_with_unknown_feature_is_rejected() {
    let schema = ["Debtor", "Target", "Admission_grade_bucket"];
    let err = encode::encode_for(&student(), &schema).unwrap_err();
    assert_eq!(
        err,
        EncodeError::SchemaMismatch {
            missing: vec!["Target".to_string(), "Admission_grade_bucket".to_string()]
        }
    );
}

#[test]
fn record_json_file_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");
    std::fs::write(&path, serde_json::to_string(&student()).unwrap()).unwrap();

    let raw = read_record_json(&path).unwrap();
    assert_eq!(raw, student());
    assert_eq!(encode::encode(&raw).unwrap(), encode::encode(&student()).unwrap());
}

#[test]
fn record_json_with_dataset_target_column_still_predicts() {
    let mut object = serde_json::to_value(student()).unwrap();
    object["Target"] = serde_json::Value::from("Dropout");
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("record.json");
    std::fs::write(&path, object.to_string()).unwrap();

    let raw = read_record_json(&path).unwrap();
    assert_eq!(raw, student());
    let model = ForestModel::from_json_str(FOREST_JSON).unwrap();
    assert_eq!(predict_record(&raw, &model).unwrap().prediction.label, Label::Dropout);
}

#[test]
fn csv_batch_scores_and_exports() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("rows.csv");
    let export = dir.path().join("scored.csv");

    let header: Vec<String> = std::iter::once("id".to_string())
        .chain(RAW_FIELDS.iter().map(|s| s.name.to_lowercase()))
        .collect();
    let row = |id: &str, debtor: &str| -> String {
        let raw = student();
        std::iter::once(id.to_string())
            .chain(RAW_FIELDS.iter().map(|s| {
                if s.name == fields::DEBTOR {
                    debtor.to_string()
                } else {
                    raw.get(s.name).map(|v| v.to_string()).unwrap_or_default()
                }
            }))
            .collect::<Vec<_>>()
            .join(",")
    };
    let csv = [header.join(","), row("s-1", "1"), row("s-2", ""), row("s-3", "0")].join("\n");
    std::fs::write(&input, csv).unwrap();

    let model = ForestModel::from_json_str(FOREST_JSON).unwrap();
    let batch = read_records_csv(&input).unwrap();
    let out = predict_batch(batch, &model);

    assert_eq!(out.rows_read, 3);
    assert_eq!(out.scored.len(), 2);
    assert_eq!(out.row_errors.len(), 1);
    assert_eq!(out.row_errors[0].id.as_deref(), Some("s-2"));
    assert!(out.row_errors[0].message.contains(fields::DEBTOR));

    write_predictions_csv(&export, &out.scored, model.feature_names()).unwrap();
    let text = std::fs::read_to_string(&export).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines[0],
        "line,id,label,class,dropout_probability,Debtor,Curricular_units_1st_sem_grade,Gender"
    );
    assert!(lines[1].starts_with("2,s-1,Dropout,1,"));
    assert!(lines[2].starts_with("4,s-3,"));
}

proptest! {
    #[test]
    fn encoding_is_deterministic(raw in any_record()) {
        let a = encode::encode(&raw).unwrap();
        let b = encode::encode(&raw).unwrap();
        prop_assert_eq!(a.names(), b.names());
        let bits = |v: &[f64]| v.iter().map(|x| x.to_bits()).collect::<Vec<_>>();
        prop_assert_eq!(bits(a.values()), bits(b.values()));
    }

    #[test]
    fn every_code_encodes_inside_its_table(code in any::<i64>()) {
        for (field, simplifier) in encode::BUCKETED_FIELDS {
            let (_, ordinal) = simplifier.apply(RawValue::Int(code));
            prop_assert!(ordinal <= 5, "{} -> {}", field, ordinal);
            let raw = student().with(field, code);
            prop_assert!(encode::encode(&raw).is_ok());
        }
    }

    #[test]
    fn grade_ordinals_are_monotone(a in -10.0f64..250.0, b in -10.0f64..250.0) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        for thresholds in [
            ADMISSION_GRADE_THRESHOLDS,
            SEM1_GRADE_THRESHOLDS,
            SEM2_GRADE_THRESHOLDS,
            PREVIOUS_QUALIFICATION_GRADE_THRESHOLDS,
        ] {
            let s = Simplifier::Grade(thresholds);
            prop_assert!(s.apply(RawValue::Float(lo)).1 <= s.apply(RawValue::Float(hi)).1);
        }
    }

    #[test]
    fn permuted_schema_permutes_values(order in Just(canonical_feature_order()).prop_shuffle()) {
        let raw = student();
        let canonical = encode::encode(&raw).unwrap();
        let permuted = encode::encode_for(&raw, &order).unwrap();
        prop_assert_eq!(permuted.names(), order.as_slice());
        for (name, value) in permuted.iter() {
            prop_assert_eq!(canonical.get(name).map(f64::to_bits), Some(value.to_bits()));
        }
    }

    #[test]
    fn any_missing_field_is_named(idx in 0usize..RAW_FIELDS.len()) {
        let mut raw = student();
        let name = RAW_FIELDS[idx].name;
        raw.remove(name);
        prop_assert_eq!(encode::encode(&raw).unwrap_err(), EncodeError::missing_field(name));
    }
}
