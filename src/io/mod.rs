//! Input/output helpers.
//!
//! - raw record readers, JSON and CSV (`record`)
//! - batch prediction export (`export`)

pub mod export;
pub mod record;

pub use export::*;
pub use record::*;
