//! Raw field catalogue.
//!
//! The names are the column names of the training data (including the
//! `Nacionality` spelling) and must not be "fixed". `RAW_FIELDS` lists them in
//! the canonical training order.

pub const MARITAL_STATUS: &str = "Marital_status";
pub const APPLICATION_MODE: &str = "Application_mode";
pub const APPLICATION_ORDER: &str = "Application_order";
pub const COURSE: &str = "Course";
pub const DAYTIME_EVENING_ATTENDANCE: &str = "Daytime_evening_attendance";
pub const PREVIOUS_QUALIFICATION: &str = "Previous_qualification";
pub const PREVIOUS_QUALIFICATION_GRADE: &str = "Previous_qualification_grade";
pub const NACIONALITY: &str = "Nacionality";
pub const MOTHERS_QUALIFICATION: &str = "Mothers_qualification";
pub const FATHERS_QUALIFICATION: &str = "Fathers_qualification";
pub const MOTHERS_OCCUPATION: &str = "Mothers_occupation";
pub const FATHERS_OCCUPATION: &str = "Fathers_occupation";
pub const ADMISSION_GRADE: &str = "Admission_grade";
pub const DISPLACED: &str = "Displaced";
pub const EDUCATIONAL_SPECIAL_NEEDS: &str = "Educational_special_needs";
pub const DEBTOR: &str = "Debtor";
pub const TUITION_FEES_UP_TO_DATE: &str = "Tuition_fees_up_to_date";
pub const GENDER: &str = "Gender";
pub const SCHOLARSHIP_HOLDER: &str = "Scholarship_holder";
pub const AGE_AT_ENROLLMENT: &str = "Age_at_enrollment";
pub const INTERNATIONAL: &str = "International";
pub const SEM1_CREDITED: &str = "Curricular_units_1st_sem_credited";
pub const SEM1_ENROLLED: &str = "Curricular_units_1st_sem_enrolled";
pub const SEM1_EVALUATIONS: &str = "Curricular_units_1st_sem_evaluations";
pub const SEM1_APPROVED: &str = "Curricular_units_1st_sem_approved";
pub const SEM1_GRADE: &str = "Curricular_units_1st_sem_grade";
pub const SEM1_WITHOUT_EVALUATIONS: &str = "Curricular_units_1st_sem_without_evaluations";
pub const SEM2_CREDITED: &str = "Curricular_units_2nd_sem_credited";
pub const SEM2_ENROLLED: &str = "Curricular_units_2nd_sem_enrolled";
pub const SEM2_EVALUATIONS: &str = "Curricular_units_2nd_sem_evaluations";
pub const SEM2_APPROVED: &str = "Curricular_units_2nd_sem_approved";
pub const SEM2_GRADE: &str = "Curricular_units_2nd_sem_grade";
pub const SEM2_WITHOUT_EVALUATIONS: &str = "Curricular_units_2nd_sem_without_evaluations";
pub const UNEMPLOYMENT_RATE: &str = "Unemployment_rate";
pub const INFLATION_RATE: &str = "Inflation_rate";
pub const GDP: &str = "GDP";

/// What kind of quantity a raw field carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Government classification code.
    Code,
    /// 0/1 indicator.
    Flag,
    /// Non-negative integer count (curricular units, application order).
    Count,
    /// Continuous grade.
    Grade,
    /// Age in years.
    Age,
    /// Macro-economic indicator.
    Rate,
}

/// One raw field and the value range the entry form accepted for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub kind: FieldKind,
    /// Inclusive `(min, max)`; `None` for codes, which are open-ended.
    pub range: Option<(f64, f64)>,
}

const fn code(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Code,
        range: None,
    }
}

const fn flag(name: &'static str) -> FieldSpec {
    FieldSpec {
        name,
        kind: FieldKind::Flag,
        range: Some((0.0, 1.0)),
    }
}

const fn ranged(name: &'static str, kind: FieldKind, min: f64, max: f64) -> FieldSpec {
    FieldSpec {
        name,
        kind,
        range: Some((min, max)),
    }
}

pub const RAW_FIELD_COUNT: usize = 36;

pub const RAW_FIELDS: [FieldSpec; RAW_FIELD_COUNT] = [
    code(MARITAL_STATUS),
    code(APPLICATION_MODE),
    ranged(APPLICATION_ORDER, FieldKind::Count, 0.0, 9.0),
    code(COURSE),
    flag(DAYTIME_EVENING_ATTENDANCE),
    code(PREVIOUS_QUALIFICATION),
    ranged(PREVIOUS_QUALIFICATION_GRADE, FieldKind::Grade, 0.0, 200.0),
    code(NACIONALITY),
    code(MOTHERS_QUALIFICATION),
    code(FATHERS_QUALIFICATION),
    code(MOTHERS_OCCUPATION),
    code(FATHERS_OCCUPATION),
    ranged(ADMISSION_GRADE, FieldKind::Grade, 0.0, 200.0),
    flag(DISPLACED),
    flag(EDUCATIONAL_SPECIAL_NEEDS),
    flag(DEBTOR),
    flag(TUITION_FEES_UP_TO_DATE),
    flag(GENDER),
    flag(SCHOLARSHIP_HOLDER),
    ranged(AGE_AT_ENROLLMENT, FieldKind::Age, 15.0, 60.0),
    flag(INTERNATIONAL),
    ranged(SEM1_CREDITED, FieldKind::Count, 0.0, 20.0),
    ranged(SEM1_ENROLLED, FieldKind::Count, 0.0, 26.0),
    ranged(SEM1_EVALUATIONS, FieldKind::Count, 0.0, 45.0),
    ranged(SEM1_APPROVED, FieldKind::Count, 0.0, 26.0),
    ranged(SEM1_GRADE, FieldKind::Grade, 0.0, 20.0),
    ranged(SEM1_WITHOUT_EVALUATIONS, FieldKind::Count, 0.0, 12.0),
    ranged(SEM2_CREDITED, FieldKind::Count, 0.0, 19.0),
    ranged(SEM2_ENROLLED, FieldKind::Count, 0.0, 23.0),
    ranged(SEM2_EVALUATIONS, FieldKind::Count, 0.0, 33.0),
    ranged(SEM2_APPROVED, FieldKind::Count, 0.0, 20.0),
    ranged(SEM2_GRADE, FieldKind::Grade, 0.0, 20.0),
    ranged(SEM2_WITHOUT_EVALUATIONS, FieldKind::Count, 0.0, 12.0),
    ranged(UNEMPLOYMENT_RATE, FieldKind::Rate, 7.6, 16.2),
    ranged(INFLATION_RATE, FieldKind::Rate, -0.8, 3.7),
    ranged(GDP, FieldKind::Rate, -4.06, 3.51),
];

pub fn field_spec(name: &str) -> Option<&'static FieldSpec> {
    RAW_FIELDS.iter().find(|f| f.name == name)
}

/// Resolve a header or JSON key to its canonical field name.
///
/// Matching ignores ASCII case and surrounding whitespace, so `gdp` and
/// ` Admission_Grade ` both resolve.
pub fn canonical_name(name: &str) -> Option<&'static str> {
    let name = name.trim();
    RAW_FIELDS
        .iter()
        .map(|f| f.name)
        .find(|canonical| canonical.eq_ignore_ascii_case(name))
}

/// The feature order the bundled schema uses when no classifier supplies one.
pub fn canonical_feature_order() -> Vec<String> {
    RAW_FIELDS.iter().map(|f| f.name.to_string()).collect()
}
