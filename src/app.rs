//! Top-level application orchestration.
//!
//! `src/main.rs` is intentionally tiny; this module is the "real main" that:
//! - loads settings and starts logging
//! - parses CLI arguments
//! - loads the model and the input records
//! - runs the shared pipeline and prints results

use std::path::Path;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::cli::{BatchArgs, CodesArgs, Command, EncodeArgs, PredictArgs, SchemaArgs};
use crate::config::Settings;
use crate::domain::fields::{canonical_feature_order, canonical_name};
use crate::error::AppError;
use crate::model::{Classifier, ForestModel};

pub mod pipeline;

/// Entry point for the `dropout` binary.
pub fn run() -> Result<(), AppError> {
    let settings = Settings::from_env();
    init_tracing(&settings);

    let cli = crate::cli::Cli::parse();
    match cli.command {
        Command::Predict(args) => handle_predict(args, &settings),
        Command::Encode(args) => handle_encode(args, &settings),
        Command::Batch(args) => handle_batch(args, &settings),
        Command::Schema(args) => handle_schema(args, &settings),
        Command::Codes(args) => handle_codes(args),
    }
}

/// Log filter: `DROPOUT_LOG`, then `RUST_LOG`, then `warn`. Logs go to stderr.
fn init_tracing(settings: &Settings) {
    let filter = match settings.log_filter.as_deref() {
        Some(directives) => EnvFilter::try_new(directives).unwrap_or_else(|_| EnvFilter::new("warn")),
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    // A subscriber may already be installed (tests, embedding callers); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

pub fn load_model(path: &Path) -> Result<ForestModel, AppError> {
    let model = ForestModel::load(path)
        .map_err(|e| AppError::new(2, format!("Failed to load model '{}': {e}", path.display())))?;
    tracing::info!(
        path = %path.display(),
        trees = model.n_trees(),
        features = model.feature_names().len(),
        "model loaded"
    );
    pipeline::check_policy_version(&model);
    Ok(model)
}

fn handle_predict(args: PredictArgs, settings: &Settings) -> Result<(), AppError> {
    let model_path = settings.require_model_path(args.model.model.as_deref())?;
    let model = load_model(&model_path)?;
    let raw = crate::io::read_record_json(&args.input)?;

    let out = pipeline::predict_record(&raw, &model)?;

    if args.json {
        println!("{}", crate::report::prediction_json(&out, args.explain)?);
    } else {
        print!("{}", crate::report::format_prediction(&out, args.explain));
    }
    Ok(())
}

fn handle_encode(args: EncodeArgs, settings: &Settings) -> Result<(), AppError> {
    let model = settings
        .model_path(args.model.model.as_deref())
        .map(|path| load_model(&path))
        .transpose()?;
    let raw = crate::io::read_record_json(&args.input)?;

    let (features, trace) = pipeline::encode_record(&raw, model.as_ref())?;

    if args.json {
        println!("{}", crate::report::features_json(&features, &trace)?);
    } else {
        print!("{}", crate::report::format_trace(&trace));
        println!();
        print!("{}", crate::report::format_features(&features));
    }
    Ok(())
}

fn handle_batch(args: BatchArgs, settings: &Settings) -> Result<(), AppError> {
    let model_path = settings.require_model_path(args.model.model.as_deref())?;
    let model = load_model(&model_path)?;
    let batch = crate::io::read_records_csv(&args.input)?;

    let out = pipeline::predict_batch(batch, &model);
    print!("{}", crate::report::format_batch_summary(&out));

    if let Some(path) = &args.export {
        crate::io::write_predictions_csv(path, &out.scored, model.feature_names())?;
        tracing::info!(path = %path.display(), rows = out.scored.len(), "predictions exported");
    }

    if out.scored.is_empty() {
        return Err(AppError::new(3, "No usable rows after validation."));
    }
    Ok(())
}

fn handle_schema(args: SchemaArgs, settings: &Settings) -> Result<(), AppError> {
    let (names, source) = match settings.model_path(args.model.model.as_deref()) {
        Some(path) => {
            let model = load_model(&path)?;
            (model.feature_names().to_vec(), path.display().to_string())
        }
        None => (canonical_feature_order(), "canonical order".to_string()),
    };
    print!("{}", crate::report::format_schema(&names, &source));
    Ok(())
}

fn handle_codes(args: CodesArgs) -> Result<(), AppError> {
    let Some(field) = args.field else {
        print!("{}", crate::report::format_catalogue_index());
        return Ok(());
    };

    let list = canonical_name(&field)
        .and_then(|name| crate::codes::catalogue(name).map(|list| (name, list)));
    match list {
        Some((name, list)) => {
            print!("{}", crate::report::format_codes(name, list));
            Ok(())
        }
        None => Err(AppError::new(
            2,
            format!(
                "No code list for '{field}'. Fields with codes: {}",
                crate::codes::CATALOGUED_FIELDS.join(", ")
            ),
        )),
    }
}
