//! Environment-backed settings.
//!
//! A `.env` file in the working directory is loaded first, so a project can pin
//! its model file without passing `--model` on every call.

use std::path::{Path, PathBuf};

use crate::error::AppError;

pub const MODEL_ENV: &str = "DROPOUT_MODEL";
pub const LOG_ENV: &str = "DROPOUT_LOG";

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Settings {
    pub model_path: Option<PathBuf>,
    pub log_filter: Option<String>,
}

impl Settings {
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let non_empty = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        Self {
            model_path: non_empty(MODEL_ENV).map(PathBuf::from),
            log_filter: non_empty(LOG_ENV),
        }
    }

    /// `--model` wins over the environment.
    pub fn model_path(&self, flag: Option<&Path>) -> Option<PathBuf> {
        flag.map(Path::to_path_buf).or_else(|| self.model_path.clone())
    }

    pub fn require_model_path(&self, flag: Option<&Path>) -> Result<PathBuf, AppError> {
        self.model_path(flag).ok_or_else(|| {
            AppError::new(
                2,
                format!("No model file given. Pass --model or set {MODEL_ENV} (a .env file works too)."),
            )
        })
    }
}
