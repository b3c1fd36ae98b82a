//! Bucket types and the functions that simplify raw values into them.
//!
//! Every function here is total: each code or real number maps to exactly one
//! bucket, with a catch-all bucket for anything outside the enumerated groups.
//! Groups are tested in declaration order and the first match wins.

use std::fmt;

use crate::domain::RawValue;
use crate::encode::tables::{
    AGE_ADULT_MAX, AGE_MINOR_BELOW, AGE_YOUNG_MAX, ARTS_DESIGN_COURSES, BASIC_QUALIFICATIONS, BUSINESS_COURSES,
    ENGINEERING_TECH_COURSES, GradeThresholds, HEALTH_COURSES, HIGHER_QUALIFICATIONS, INTERNATIONAL_APPLICATION_MODES,
    LABOR_OCCUPATIONS, LOCAL_NATIONALITY, OFFICER_OCCUPATIONS, OTHER_APPLICATION_MODES, REGULAR_APPLICATION_MODES,
    SECONDARY_QUALIFICATIONS, SOCIAL_SCIENCES_COURSES, SPECIAL_APPLICATION_MODES, TRANSFER_APPLICATION_MODES,
};

/// A closed set of category labels.
pub trait Bucket: Copy + Eq + fmt::Debug + 'static {
    /// Every bucket, in ordinal order.
    const ALL: &'static [Self];

    fn label(self) -> &'static str;

    fn from_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|b| b.label() == label)
    }
}

/// Buckets produced from a classification code.
pub trait CodeBucket: Bucket {
    /// Where codes outside every enumerated group go.
    const UNMATCHED: Self;

    fn from_code(code: i64) -> Self;

    /// Non-integral values are not codes and resolve to `UNMATCHED`.
    fn from_raw(value: RawValue) -> Self {
        value.as_code().map_or(Self::UNMATCHED, Self::from_code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QualificationBucket {
    Basic,
    Secondary,
    Higher,
    Other,
}

impl Bucket for QualificationBucket {
    const ALL: &'static [Self] = &[Self::Basic, Self::Secondary, Self::Higher, Self::Other];

    fn label(self) -> &'static str {
        match self {
            Self::Basic => "Basic",
            Self::Secondary => "Secondary",
            Self::Higher => "Higher",
            Self::Other => "Other",
        }
    }
}

impl CodeBucket for QualificationBucket {
    const UNMATCHED: Self = Self::Other;

    fn from_code(code: i64) -> Self {
        simplify_qualification(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NationalityBucket {
    Local,
    Foreign,
}

impl Bucket for NationalityBucket {
    const ALL: &'static [Self] = &[Self::Local, Self::Foreign];

    fn label(self) -> &'static str {
        match self {
            Self::Local => "Local",
            Self::Foreign => "Foreign",
        }
    }
}

impl CodeBucket for NationalityBucket {
    const UNMATCHED: Self = Self::Foreign;

    fn from_code(code: i64) -> Self {
        simplify_nationality(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OccupationBucket {
    Officer,
    Labor,
    Other,
}

impl Bucket for OccupationBucket {
    const ALL: &'static [Self] = &[Self::Officer, Self::Labor, Self::Other];

    fn label(self) -> &'static str {
        match self {
            Self::Officer => "Officer",
            Self::Labor => "Labor",
            Self::Other => "Other",
        }
    }
}

impl CodeBucket for OccupationBucket {
    const UNMATCHED: Self = Self::Other;

    fn from_code(code: i64) -> Self {
        group_occupation(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CourseBucket {
    EngineeringTech,
    ArtsDesign,
    Health,
    SocialSciences,
    Business,
    Other,
}

impl Bucket for CourseBucket {
    const ALL: &'static [Self] = &[
        Self::EngineeringTech,
        Self::ArtsDesign,
        Self::Health,
        Self::SocialSciences,
        Self::Business,
        Self::Other,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::EngineeringTech => "Engineering/Tech",
            Self::ArtsDesign => "Arts/Design",
            Self::Health => "Health",
            Self::SocialSciences => "Social Sciences",
            Self::Business => "Business",
            Self::Other => "Other",
        }
    }
}

impl CodeBucket for CourseBucket {
    const UNMATCHED: Self = Self::Other;

    fn from_code(code: i64) -> Self {
        simplify_course(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ApplicationModeBucket {
    Regular,
    Special,
    International,
    Transfer,
    Other,
    Unknown,
}

impl Bucket for ApplicationModeBucket {
    const ALL: &'static [Self] = &[
        Self::Regular,
        Self::Special,
        Self::International,
        Self::Transfer,
        Self::Other,
        Self::Unknown,
    ];

    fn label(self) -> &'static str {
        match self {
            Self::Regular => "Regular",
            Self::Special => "Special",
            Self::International => "International",
            Self::Transfer => "Transfer",
            Self::Other => "Other",
            Self::Unknown => "Unknown",
        }
    }
}

impl CodeBucket for ApplicationModeBucket {
    const UNMATCHED: Self = Self::Unknown;

    fn from_code(code: i64) -> Self {
        simplify_application_mode(code)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GradeBucket {
    VeryLow,
    Low,
    High,
    VeryHigh,
}

impl Bucket for GradeBucket {
    const ALL: &'static [Self] = &[Self::VeryLow, Self::Low, Self::High, Self::VeryHigh];

    fn label(self) -> &'static str {
        match self {
            Self::VeryLow => "Very Low",
            Self::Low => "Low",
            Self::High => "High",
            Self::VeryHigh => "Very High",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgeBucket {
    Under18,
    From18To21,
    From22To25,
    Over25,
}

impl Bucket for AgeBucket {
    const ALL: &'static [Self] = &[Self::Under18, Self::From18To21, Self::From22To25, Self::Over25];

    fn label(self) -> &'static str {
        match self {
            Self::Under18 => "<18",
            Self::From18To21 => "18-21",
            Self::From22To25 => "22-25",
            Self::Over25 => ">25",
        }
    }
}

/// Previous, mother's and father's qualification.
pub fn simplify_qualification(code: i64) -> QualificationBucket {
    if BASIC_QUALIFICATIONS.contains(&code) {
        QualificationBucket::Basic
    } else if SECONDARY_QUALIFICATIONS.contains(&code) {
        QualificationBucket::Secondary
    } else if HIGHER_QUALIFICATIONS.contains(&code) {
        QualificationBucket::Higher
    } else {
        QualificationBucket::Other
    }
}

pub fn simplify_nationality(code: i64) -> NationalityBucket {
    if code == LOCAL_NATIONALITY {
        NationalityBucket::Local
    } else {
        NationalityBucket::Foreign
    }
}

/// Mother's and father's occupation.
pub fn group_occupation(code: i64) -> OccupationBucket {
    if OFFICER_OCCUPATIONS.contains(&code) {
        OccupationBucket::Officer
    } else if LABOR_OCCUPATIONS.contains(&code) {
        OccupationBucket::Labor
    } else {
        OccupationBucket::Other
    }
}

pub fn simplify_course(code: i64) -> CourseBucket {
    if ENGINEERING_TECH_COURSES.contains(&code) {
        CourseBucket::EngineeringTech
    } else if ARTS_DESIGN_COURSES.contains(&code) {
        CourseBucket::ArtsDesign
    } else if HEALTH_COURSES.contains(&code) {
        CourseBucket::Health
    } else if SOCIAL_SCIENCES_COURSES.contains(&code) {
        CourseBucket::SocialSciences
    } else if BUSINESS_COURSES.contains(&code) {
        CourseBucket::Business
    } else {
        CourseBucket::Other
    }
}

pub fn simplify_application_mode(code: i64) -> ApplicationModeBucket {
    if REGULAR_APPLICATION_MODES.contains(&code) {
        ApplicationModeBucket::Regular
    } else if SPECIAL_APPLICATION_MODES.contains(&code) {
        ApplicationModeBucket::Special
    } else if INTERNATIONAL_APPLICATION_MODES.contains(&code) {
        ApplicationModeBucket::International
    } else if TRANSFER_APPLICATION_MODES.contains(&code) {
        ApplicationModeBucket::Transfer
    } else if OTHER_APPLICATION_MODES.contains(&code) {
        ApplicationModeBucket::Other
    } else {
        ApplicationModeBucket::Unknown
    }
}

/// Piecewise grade bucketing with inclusive upper bounds.
///
/// NaN fails every comparison and ends up in `VeryHigh`.
pub fn simplify_grade(value: f64, thresholds: &GradeThresholds) -> GradeBucket {
    if value <= thresholds.very_low {
        GradeBucket::VeryLow
    } else if value <= thresholds.low {
        GradeBucket::Low
    } else if value <= thresholds.high {
        GradeBucket::High
    } else {
        GradeBucket::VeryHigh
    }
}

pub fn simplify_age(age: f64) -> AgeBucket {
    if age < AGE_MINOR_BELOW {
        AgeBucket::Under18
    } else if age <= AGE_YOUNG_MAX {
        AgeBucket::From18To21
    } else if age <= AGE_ADULT_MAX {
        AgeBucket::From22To25
    } else {
        AgeBucket::Over25
    }
}
