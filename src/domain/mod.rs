//! Domain types used throughout the pipeline.
//!
//! This module defines:
//!
//! - the raw record handed over by the data-entry side (`RawInputRecord`, `RawValue`)
//! - the ordered output of the encoder (`FeatureVector`)
//! - the classifier verdict (`Label`, `Prediction`)
//! - the catalogue of raw field names (`fields`)

pub mod fields;
pub mod types;

pub use types::*;
