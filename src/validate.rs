//! Soft input checks.
//!
//! The encoder accepts anything numeric. These checks flag values the entry
//! form would not have allowed, so a caller can log or show them; they never
//! block encoding.

use std::fmt;

use serde::Serialize;

use crate::codes;
use crate::domain::RawInputRecord;
use crate::domain::fields::{FieldKind, RAW_FIELDS};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum InputWarning {
    /// Numeric value outside the range accepted at data entry.
    OutOfRange {
        field: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },
    /// Flag or count that is not a whole number.
    NotWhole { field: &'static str, value: f64 },
    /// Code with no catalogue entry. It still encodes (to the fallback bucket).
    UncataloguedCode { field: &'static str, code: String },
}

impl fmt::Display for InputWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputWarning::OutOfRange { field, value, min, max } => {
                write!(f, "`{field}` = {value} is outside [{min}, {max}]")
            }
            InputWarning::NotWhole { field, value } => {
                write!(f, "`{field}` = {value} should be a whole number")
            }
            InputWarning::UncataloguedCode { field, code } => {
                write!(f, "`{field}` code {code} is not in the code catalogue")
            }
        }
    }
}

/// Check every present field; absent fields are the encoder's business.
pub fn check_ranges(raw: &RawInputRecord) -> Vec<InputWarning> {
    let mut warnings = Vec::new();

    for spec in &RAW_FIELDS {
        let Some(value) = raw.get(spec.name) else {
            continue;
        };

        if spec.kind == FieldKind::Code {
            if let Some(list) = codes::catalogue(spec.name) {
                let known = value.as_code().is_some_and(|c| list.iter().any(|(code, _)| *code == c));
                if !known {
                    warnings.push(InputWarning::UncataloguedCode {
                        field: spec.name,
                        code: value.to_string(),
                    });
                }
            }
            continue;
        }

        let v = value.as_f64();
        if matches!(spec.kind, FieldKind::Flag | FieldKind::Count) && value.as_code().is_none() {
            warnings.push(InputWarning::NotWhole { field: spec.name, value: v });
        }
        if let Some((min, max)) = spec.range
            && !(min..=max).contains(&v)
        {
            warnings.push(InputWarning::OutOfRange {
                field: spec.name,
                value: v,
                min,
                max,
            });
        }
    }

    warnings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fields::*;
    use crate::encode::assemble::tests::sample_record;

    #[test]
    fn sample_record_is_clean() {
        assert!(check_ranges(&sample_record()).is_empty());
    }

    #[test]
    fn flags_out_of_range_and_fractional_counts() {
        let raw = sample_record()
            .with(SEM1_GRADE, 21.5)
            .with(DEBTOR, 2)
            .with(SEM2_ENROLLED, 4.5);
        let warnings = check_ranges(&raw);
        assert!(warnings.contains(&InputWarning::OutOfRange {
            field: SEM1_GRADE,
            value: 21.5,
            min: 0.0,
            max: 20.0
        }));
        assert!(warnings.contains(&InputWarning::OutOfRange {
            field: DEBTOR,
            value: 2.0,
            min: 0.0,
            max: 1.0
        }));
        assert!(warnings.contains(&InputWarning::NotWhole {
            field: SEM2_ENROLLED,
            value: 4.5
        }));
        assert_eq!(warnings.len(), 3);
    }

    #[test]
    fn uncatalogued_codes_are_reported_not_rejected() {
        let raw = sample_record().with(COURSE, 1234);
        let warnings = check_ranges(&raw);
        assert_eq!(
            warnings,
            vec![InputWarning::UncataloguedCode {
                field: COURSE,
                code: "1234".to_string()
            }]
        );
        assert!(crate::encode::encode(&raw).is_ok());
    }

    #[test]
    fn missing_fields_are_ignored() {
        let mut raw = sample_record();
        raw.remove(GDP);
        assert!(check_ranges(&raw).is_empty());
    }
}
