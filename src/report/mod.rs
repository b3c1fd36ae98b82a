//! Terminal and JSON rendering of encoder and prediction results.

pub mod format;

pub use format::*;
