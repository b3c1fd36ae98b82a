//! Bucket policy: code groups, grade thresholds and ordinal tables.
//!
//! These constants are what the classifier was trained against. Changing any
//! of them changes the meaning of the features, so bump
//! `BUCKET_POLICY_VERSION` together with the edit.

use crate::encode::buckets::{
    AgeBucket, ApplicationModeBucket, Bucket, CourseBucket, GradeBucket, NationalityBucket, OccupationBucket,
    QualificationBucket,
};

pub const BUCKET_POLICY_VERSION: u32 = 1;

// Qualification groups (previous, mother's, father's).
pub const BASIC_QUALIFICATIONS: &[i64] = &[19, 35, 36, 37, 38];
pub const SECONDARY_QUALIFICATIONS: &[i64] = &[1, 9, 10, 12, 14, 15, 22, 26, 27, 29, 30];
pub const HIGHER_QUALIFICATIONS: &[i64] = &[2, 3, 4, 5, 6, 40, 41, 42, 43, 44];

pub const LOCAL_NATIONALITY: i64 = 1;

pub const OFFICER_OCCUPATIONS: &[i64] = &[
    1, 2, 3, 4, 112, 114, 121, 122, 123, 124, 131, 132, 134, 135, 141, 143, 144,
];
pub const LABOR_OCCUPATIONS: &[i64] = &[
    5, 6, 7, 8, 9, 10, 151, 152, 153, 154, 161, 163, 171, 172, 174, 175, 181, 182, 183, 191, 192, 193, 194, 195,
];

pub const ENGINEERING_TECH_COURSES: &[i64] = &[33, 9119, 9130];
pub const ARTS_DESIGN_COURSES: &[i64] = &[171, 9070, 9773];
pub const HEALTH_COURSES: &[i64] = &[9500, 9556, 9085];
pub const SOCIAL_SCIENCES_COURSES: &[i64] = &[8014, 9238, 9853];
pub const BUSINESS_COURSES: &[i64] = &[9147, 9991, 9254];

pub const REGULAR_APPLICATION_MODES: &[i64] = &[1, 17, 18];
pub const SPECIAL_APPLICATION_MODES: &[i64] = &[2, 5, 10, 16];
pub const INTERNATIONAL_APPLICATION_MODES: &[i64] = &[15, 57];
pub const TRANSFER_APPLICATION_MODES: &[i64] = &[42, 43, 51, 53];
pub const OTHER_APPLICATION_MODES: &[i64] = &[26, 27, 39, 44];

/// Three ascending cut points: `VeryLow <= very_low < Low <= low < High <= high < VeryHigh`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradeThresholds {
    pub very_low: f64,
    pub low: f64,
    pub high: f64,
}

pub const ADMISSION_GRADE_THRESHOLDS: GradeThresholds = GradeThresholds {
    very_low: 117.9,
    low: 126.1,
    high: 134.8,
};

pub const SEM1_GRADE_THRESHOLDS: GradeThresholds = GradeThresholds {
    very_low: 11.0,
    low: 12.29,
    high: 13.4,
};

pub const SEM2_GRADE_THRESHOLDS: GradeThresholds = GradeThresholds {
    very_low: 10.75,
    low: 12.2,
    high: 13.33,
};

pub const PREVIOUS_QUALIFICATION_GRADE_THRESHOLDS: GradeThresholds = GradeThresholds {
    very_low: 125.0,
    low: 133.1,
    high: 140.0,
};

// Age bounds: `< 18`, `<= 21`, `<= 25`, above.
pub const AGE_MINOR_BELOW: f64 = 18.0;
pub const AGE_YOUNG_MAX: f64 = 21.0;
pub const AGE_ADULT_MAX: f64 = 25.0;

/// Bucket -> ordinal code lookup with a named fallback entry.
#[derive(Debug)]
pub struct OrdinalTable<B: 'static> {
    pub name: &'static str,
    pub entries: &'static [(B, u8)],
    /// Entry used for buckets (or labels) the table does not list.
    pub fallback: B,
}

impl<B: Bucket> OrdinalTable<B> {
    pub fn code_of(&self, bucket: B) -> Option<u8> {
        self.entries
            .iter()
            .find(|(b, _)| *b == bucket)
            .map(|(_, code)| *code)
    }

    pub fn fallback_code(&self) -> u8 {
        self.code_of(self.fallback).unwrap_or(0)
    }

    pub fn encode(&self, bucket: B) -> u8 {
        self.code_of(bucket).unwrap_or_else(|| self.fallback_code())
    }

    /// Label-based lookup; unknown labels get the fallback code.
    pub fn encode_label(&self, label: &str) -> u8 {
        B::from_label(label).map_or_else(|| self.fallback_code(), |b| self.encode(b))
    }
}

pub const EDUCATION_TABLE: OrdinalTable<QualificationBucket> = OrdinalTable {
    name: "education",
    entries: &[
        (QualificationBucket::Basic, 0),
        (QualificationBucket::Secondary, 1),
        (QualificationBucket::Higher, 2),
        (QualificationBucket::Other, 3),
    ],
    fallback: QualificationBucket::Basic,
};

pub const GRADE_TABLE: OrdinalTable<GradeBucket> = OrdinalTable {
    name: "grade",
    entries: &[
        (GradeBucket::VeryLow, 0),
        (GradeBucket::Low, 1),
        (GradeBucket::High, 2),
        (GradeBucket::VeryHigh, 3),
    ],
    fallback: GradeBucket::VeryLow,
};

pub const AGE_TABLE: OrdinalTable<AgeBucket> = OrdinalTable {
    name: "age",
    entries: &[
        (AgeBucket::Under18, 0),
        (AgeBucket::From18To21, 1),
        (AgeBucket::From22To25, 2),
        (AgeBucket::Over25, 3),
    ],
    fallback: AgeBucket::Under18,
};

// Nationality and occupation shared one overloaded table in the trained
// pipeline (`Local=0, Foreign=1, Officer=0, Labor=1, Other=2`). They are split
// here, with the same codes, so the model still sees identical values.
pub const NATIONALITY_TABLE: OrdinalTable<NationalityBucket> = OrdinalTable {
    name: "nationality",
    entries: &[(NationalityBucket::Local, 0), (NationalityBucket::Foreign, 1)],
    fallback: NationalityBucket::Local,
};

pub const OCCUPATION_TABLE: OrdinalTable<OccupationBucket> = OrdinalTable {
    name: "occupation",
    entries: &[
        (OccupationBucket::Officer, 0),
        (OccupationBucket::Labor, 1),
        (OccupationBucket::Other, 2),
    ],
    fallback: OccupationBucket::Officer,
};

pub const COURSE_TABLE: OrdinalTable<CourseBucket> = OrdinalTable {
    name: "course",
    entries: &[
        (CourseBucket::EngineeringTech, 0),
        (CourseBucket::ArtsDesign, 1),
        (CourseBucket::Health, 2),
        (CourseBucket::SocialSciences, 3),
        (CourseBucket::Business, 4),
        (CourseBucket::Other, 5),
    ],
    fallback: CourseBucket::EngineeringTech,
};

pub const APPLICATION_MODE_TABLE: OrdinalTable<ApplicationModeBucket> = OrdinalTable {
    name: "application_mode",
    entries: &[
        (ApplicationModeBucket::Regular, 0),
        (ApplicationModeBucket::Special, 1),
        (ApplicationModeBucket::International, 2),
        (ApplicationModeBucket::Transfer, 3),
        (ApplicationModeBucket::Other, 4),
        (ApplicationModeBucket::Unknown, 5),
    ],
    fallback: ApplicationModeBucket::Regular,
};
