//! Command-line parsing for the dropout risk tool.
//!
//! Argument parsing is kept apart from command dispatch (`app`) and from the
//! encoder itself.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Top-level CLI.
#[derive(Debug, Parser)]
#[command(
    name = "dropout",
    version,
    about = "Encode student records and predict dropout risk with a pre-trained forest"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Encode one record and predict Graduate or Dropout.
    Predict(PredictArgs),
    /// Print the encoded feature vector of one record.
    Encode(EncodeArgs),
    /// Score every row of a CSV file in parallel.
    Batch(BatchArgs),
    /// List the feature order of a model (or the canonical order).
    Schema(SchemaArgs),
    /// List the known codes of a categorical field and their buckets.
    Codes(CodesArgs),
}

/// Model file option shared by every command that can use one.
#[derive(Debug, Args, Clone)]
pub struct ModelArg {
    /// Forest model JSON. Defaults to $DROPOUT_MODEL.
    #[arg(short, long)]
    pub model: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct PredictArgs {
    /// Record JSON (one object, field name -> number).
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub model: ModelArg,

    /// Show how each categorical and graded field was bucketed.
    #[arg(long)]
    pub explain: bool,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct EncodeArgs {
    /// Record JSON (one object, field name -> number).
    #[arg(short, long)]
    pub input: PathBuf,

    // Model order instead of the canonical one when given.
    #[command(flatten)]
    pub model: ModelArg,

    /// Print JSON instead of text.
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct BatchArgs {
    /// CSV file, one record per row. An optional `id` column names rows.
    #[arg(short, long)]
    pub input: PathBuf,

    #[command(flatten)]
    pub model: ModelArg,

    /// Write per-row predictions and encoded features to CSV.
    #[arg(long)]
    pub export: Option<PathBuf>,
}

#[derive(Debug, Args, Clone)]
pub struct SchemaArgs {
    #[command(flatten)]
    pub model: ModelArg,
}

#[derive(Debug, Args, Clone)]
pub struct CodesArgs {
    /// Field name (case-insensitive). Lists catalogued fields when omitted.
    pub field: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_predict_flags() {
        let cli = Cli::try_parse_from(["dropout", "predict", "-i", "rec.json", "--model", "m.json", "--explain"]).unwrap();
        let Command::Predict(args) = cli.command else {
            panic!("expected predict");
        };
        assert_eq!(args.input, PathBuf::from("rec.json"));
        assert_eq!(args.model.model, Some(PathBuf::from("m.json")));
        assert!(args.explain);
        assert!(!args.json);
    }

    #[test]
    fn codes_field_is_optional() {
        let cli = Cli::try_parse_from(["dropout", "codes"]).unwrap();
        assert!(matches!(cli.command, Command::Codes(CodesArgs { field: None })));
    }
}
