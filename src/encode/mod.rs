//! The feature encoder.
//!
//! A pure function of a raw record: no state, no I/O, safe to call from any
//! number of threads at once.
//!
//! - `buckets`: raw value -> coarse category
//! - `tables`: code groups, thresholds and category -> ordinal tables
//! - `assemble`: ordinals + pass-through values, projected to the model's column order

pub mod assemble;
pub mod buckets;
pub mod tables;

pub use assemble::{
    BUCKETED_FIELDS, EncodedFeatures, FieldTrace, PASS_THROUGH_FIELDS, Simplifier, assemble, encode, encode_for,
    explain, is_bucketed, project, simplifier_for,
};
pub use tables::BUCKET_POLICY_VERSION;
