//! Feature assembly: bucket + encode, copy pass-through fields, project to the
//! classifier's column order.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::fields::{self, RAW_FIELDS};
use crate::domain::{FeatureVector, RawInputRecord, RawValue};
use crate::encode::buckets::{
    ApplicationModeBucket, Bucket, CodeBucket, CourseBucket, NationalityBucket, OccupationBucket,
    QualificationBucket, simplify_age, simplify_grade,
};
use crate::encode::tables::{
    ADMISSION_GRADE_THRESHOLDS, AGE_TABLE, APPLICATION_MODE_TABLE, COURSE_TABLE, EDUCATION_TABLE, GRADE_TABLE,
    GradeThresholds, NATIONALITY_TABLE, OCCUPATION_TABLE, OrdinalTable, PREVIOUS_QUALIFICATION_GRADE_THRESHOLDS,
    SEM1_GRADE_THRESHOLDS, SEM2_GRADE_THRESHOLDS,
};
use crate::error::EncodeError;

/// How a bucketed field is simplified and which table encodes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Simplifier {
    Qualification,
    Nationality,
    Occupation,
    Course,
    ApplicationMode,
    Grade(GradeThresholds),
    Age,
}

impl Simplifier {
    /// Bucket a raw value and encode it. Returns `(bucket label, ordinal)`.
    pub fn apply(self, value: RawValue) -> (&'static str, u8) {
        match self {
            Simplifier::Qualification => encoded(&EDUCATION_TABLE, QualificationBucket::from_raw(value)),
            Simplifier::Nationality => encoded(&NATIONALITY_TABLE, NationalityBucket::from_raw(value)),
            Simplifier::Occupation => encoded(&OCCUPATION_TABLE, OccupationBucket::from_raw(value)),
            Simplifier::Course => encoded(&COURSE_TABLE, CourseBucket::from_raw(value)),
            Simplifier::ApplicationMode => encoded(&APPLICATION_MODE_TABLE, ApplicationModeBucket::from_raw(value)),
            Simplifier::Grade(thresholds) => encoded(&GRADE_TABLE, simplify_grade(value.as_f64(), &thresholds)),
            Simplifier::Age => encoded(&AGE_TABLE, simplify_age(value.as_f64())),
        }
    }

    pub fn table_name(self) -> &'static str {
        match self {
            Simplifier::Qualification => EDUCATION_TABLE.name,
            Simplifier::Nationality => NATIONALITY_TABLE.name,
            Simplifier::Occupation => OCCUPATION_TABLE.name,
            Simplifier::Course => COURSE_TABLE.name,
            Simplifier::ApplicationMode => APPLICATION_MODE_TABLE.name,
            Simplifier::Grade(_) => GRADE_TABLE.name,
            Simplifier::Age => AGE_TABLE.name,
        }
    }
}

fn encoded<B: Bucket>(table: &OrdinalTable<B>, bucket: B) -> (&'static str, u8) {
    (bucket.label(), table.encode(bucket))
}

pub const BUCKETED_FIELDS: [(&str, Simplifier); 13] = [
    (fields::PREVIOUS_QUALIFICATION, Simplifier::Qualification),
    (fields::MOTHERS_QUALIFICATION, Simplifier::Qualification),
    (fields::FATHERS_QUALIFICATION, Simplifier::Qualification),
    (fields::ADMISSION_GRADE, Simplifier::Grade(ADMISSION_GRADE_THRESHOLDS)),
    (fields::SEM1_GRADE, Simplifier::Grade(SEM1_GRADE_THRESHOLDS)),
    (fields::SEM2_GRADE, Simplifier::Grade(SEM2_GRADE_THRESHOLDS)),
    (
        fields::PREVIOUS_QUALIFICATION_GRADE,
        Simplifier::Grade(PREVIOUS_QUALIFICATION_GRADE_THRESHOLDS),
    ),
    (fields::AGE_AT_ENROLLMENT, Simplifier::Age),
    (fields::NACIONALITY, Simplifier::Nationality),
    (fields::FATHERS_OCCUPATION, Simplifier::Occupation),
    (fields::MOTHERS_OCCUPATION, Simplifier::Occupation),
    (fields::COURSE, Simplifier::Course),
    (fields::APPLICATION_MODE, Simplifier::ApplicationMode),
];

/// Fields copied into the feature vector unchanged.
pub const PASS_THROUGH_FIELDS: [&str; 23] = [
    fields::MARITAL_STATUS,
    fields::APPLICATION_ORDER,
    fields::DAYTIME_EVENING_ATTENDANCE,
    fields::DISPLACED,
    fields::EDUCATIONAL_SPECIAL_NEEDS,
    fields::DEBTOR,
    fields::TUITION_FEES_UP_TO_DATE,
    fields::GENDER,
    fields::SCHOLARSHIP_HOLDER,
    fields::INTERNATIONAL,
    fields::SEM1_CREDITED,
    fields::SEM1_ENROLLED,
    fields::SEM1_EVALUATIONS,
    fields::SEM1_APPROVED,
    fields::SEM1_WITHOUT_EVALUATIONS,
    fields::SEM2_CREDITED,
    fields::SEM2_ENROLLED,
    fields::SEM2_EVALUATIONS,
    fields::SEM2_APPROVED,
    fields::SEM2_WITHOUT_EVALUATIONS,
    fields::UNEMPLOYMENT_RATE,
    fields::INFLATION_RATE,
    fields::GDP,
];

pub fn simplifier_for(field: &str) -> Option<Simplifier> {
    BUCKETED_FIELDS
        .iter()
        .find(|(name, _)| *name == field)
        .map(|(_, s)| *s)
}

pub fn is_bucketed(field: &str) -> bool {
    simplifier_for(field).is_some()
}

/// How one bucketed field was encoded.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FieldTrace {
    pub field: &'static str,
    pub raw: RawValue,
    pub bucket: &'static str,
    pub ordinal: u8,
}

/// Combined (unordered) features: encoded ordinals plus pass-through values.
pub type EncodedFeatures = BTreeMap<&'static str, f64>;

/// Bucket and encode the 13 simplified fields, keeping the intermediate labels.
pub fn explain(raw: &RawInputRecord) -> Result<Vec<FieldTrace>, EncodeError> {
    BUCKETED_FIELDS
        .iter()
        .map(|&(field, simplifier)| {
            let value = raw.require(field)?;
            let (bucket, ordinal) = simplifier.apply(value);
            Ok(FieldTrace {
                field,
                raw: value,
                bucket,
                ordinal,
            })
        })
        .collect()
}

/// Steps 1 and 2 of assembly: encoded fields merged with pass-through fields.
///
/// Every raw field is checked up front, in canonical order, so the reported
/// missing field is stable no matter which step would have needed it first.
pub fn assemble(raw: &RawInputRecord) -> Result<EncodedFeatures, EncodeError> {
    for spec in &RAW_FIELDS {
        raw.require(spec.name)?;
    }

    let mut features = EncodedFeatures::new();
    for trace in explain(raw)? {
        features.insert(trace.field, f64::from(trace.ordinal));
    }
    for field in PASS_THROUGH_FIELDS {
        features.insert(field, raw.require(field)?.as_f64());
    }
    Ok(features)
}

/// Step 3: lay the combined features out in the classifier's order.
///
/// Every missing name is reported at once. Features the schema does not ask
/// for are dropped.
pub fn project<S: AsRef<str>>(features: &EncodedFeatures, feature_names: &[S]) -> Result<FeatureVector, EncodeError> {
    let mut names = Vec::with_capacity(feature_names.len());
    let mut values = Vec::with_capacity(feature_names.len());
    let mut missing = Vec::new();

    for name in feature_names {
        let name = name.as_ref();
        match features.get(name) {
            Some(&value) => {
                names.push(name.to_string());
                values.push(value);
            }
            None => missing.push(name.to_string()),
        }
    }

    if !missing.is_empty() {
        return Err(EncodeError::SchemaMismatch { missing });
    }

    Ok(FeatureVector::from_parts(names, values))
}

/// Encode a raw record in the canonical training order.
pub fn encode(raw: &RawInputRecord) -> Result<FeatureVector, EncodeError> {
    let order: Vec<&str> = RAW_FIELDS.iter().map(|f| f.name).collect();
    encode_for(raw, order.as_slice())
}

/// Encode a raw record in the order of a classifier's `feature_names`.
pub fn encode_for<S: AsRef<str>>(raw: &RawInputRecord, feature_names: &[S]) -> Result<FeatureVector, EncodeError> {
    let features = assemble(raw)?;
    project(&features, feature_names)
}
