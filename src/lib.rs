//! `dropout-risk` library crate.
//!
//! Turns a raw student record (36 numeric fields from the enrolment form and
//! the first two semesters) into the feature vector a pre-trained classifier
//! expects, and runs that classifier.
//!
//! The binary (`dropout`) is a thin wrapper around this library so the encoder
//! can be used and tested without spawning processes.

pub mod app;
pub mod cli;
pub mod codes;
pub mod config;
pub mod domain;
pub mod encode;
pub mod error;
pub mod io;
pub mod model;
pub mod report;
pub mod validate;
