//! Command line argument parsing for the symptom-triage CLI using clap.

use clap::{Parser, Subcommand, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::config::TriageConfig;
use crate::error::Result;

/// symptom-triage - Classify free-text symptom descriptions
#[derive(Parser, Debug, Clone)]
#[command(name = "symptom-triage")]
#[command(about = "Classify free-text symptom descriptions into conditions")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
pub struct TriageArgs {
    /// Verbosity level (0=quiet, 1=normal, 2=verbose, 3=debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Quiet mode (overrides verbose)
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output format
    #[arg(short = 'f', long = "format", default_value = "human", global = true)]
    pub output_format: OutputFormat,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,

    /// Configuration file (JSON)
    #[arg(short, long, value_name = "CONFIG_FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Classifier artifact (.json or bincode)
    #[arg(long, value_name = "PATH", global = true)]
    pub model: Option<PathBuf>,

    /// Vectorizer artifact (.json or bincode)
    #[arg(long, value_name = "PATH", global = true)]
    pub vectorizer: Option<PathBuf>,

    /// Stopword list, one word per line
    #[arg(long, value_name = "PATH", global = true)]
    pub stopwords: Option<PathBuf>,

    /// WordNet dictionary directory (index.noun, noun.exc, ...)
    #[arg(long, value_name = "DIR", global = true)]
    pub lemma_dir: Option<PathBuf>,

    /// Label table (JSON array)
    #[arg(long, value_name = "PATH", global = true)]
    pub labels: Option<PathBuf>,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,
}

impl TriageArgs {
    /// Get the effective verbosity level
    pub fn verbosity(&self) -> u8 {
        if self.quiet {
            0
        } else {
            match self.verbose {
                0 => 1, // Default to normal
                n => n,
            }
        }
    }

    /// Build the effective configuration: the `--config` file (or defaults),
    /// then individual path flags on top.
    pub fn triage_config(&self) -> Result<TriageConfig> {
        let mut config = match &self.config {
            Some(path) => TriageConfig::from_file(path)?,
            None => TriageConfig::default(),
        };

        if let Some(model) = &self.model {
            config.model_path = model.clone();
        }
        if let Some(vectorizer) = &self.vectorizer {
            config.vectorizer_path = vectorizer.clone();
        }
        if let Some(labels) = &self.labels {
            config.labels_path = Some(labels.clone());
        }
        if let Some(stopwords) = &self.stopwords {
            config.resources.stopwords_path = Some(stopwords.clone());
        }
        if let Some(lemma_dir) = &self.lemma_dir {
            config.resources.lemma_dir = Some(lemma_dir.clone());
        }
        Ok(config)
    }
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Classify one symptom description
    Predict(PredictArgs),

    /// Classify every entry of a file
    Batch(BatchArgs),

    /// Read descriptions from stdin, one per line
    Interactive(InteractiveArgs),

    /// Print the normalized form of a text
    Normalize(NormalizeArgs),

    /// Show artifact metadata
    Inspect,
}

impl Command {
    /// Subcommand name as typed on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            Command::Predict(_) => "predict",
            Command::Batch(_) => "batch",
            Command::Interactive(_) => "interactive",
            Command::Normalize(_) => "normalize",
            Command::Inspect => "inspect",
        }
    }
}

/// Where a single text comes from. Stdin is used when neither is given.
#[derive(Parser, Debug, Clone)]
pub struct TextInput {
    /// Text to process
    #[arg(value_name = "TEXT", conflicts_with = "file")]
    pub text: Option<String>,

    /// Read the text from a file
    #[arg(long, value_name = "PATH")]
    pub file: Option<PathBuf>,
}

/// Arguments for a single prediction
#[derive(Parser, Debug, Clone)]
pub struct PredictArgs {
    #[command(flatten)]
    pub input: TextInput,
}

/// Arguments for batch prediction
#[derive(Parser, Debug, Clone)]
pub struct BatchArgs {
    /// Input file: one description per line
    #[arg(value_name = "PATH")]
    pub path: PathBuf,

    /// Treat the input file as a JSON array of strings
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the interactive loop
#[derive(Parser, Debug, Clone)]
pub struct InteractiveArgs {
    /// Prompt printed before each line (human format only)
    #[arg(long, default_value = "> ")]
    pub prompt: String,
}

/// Arguments for normalization
#[derive(Parser, Debug, Clone)]
pub struct NormalizeArgs {
    #[command(flatten)]
    pub input: TextInput,

    /// Show the output of every normalization stage
    #[arg(long)]
    pub explain: bool,
}

/// Output formats for CLI
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable output
    Human,
    /// JSON output
    Json,
    /// Styled HTML card
    Html,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_predict_command() {
        let args =
            TriageArgs::try_parse_from(["symptom-triage", "predict", "I feel dizzy"]).unwrap();

        if let Command::Predict(predict_args) = args.command {
            assert_eq!(predict_args.input.text.as_deref(), Some("I feel dizzy"));
            assert!(predict_args.input.file.is_none());
        } else {
            panic!("Expected Predict command");
        }
    }

    #[test]
    fn test_predict_text_and_file_conflict() {
        let result = TriageArgs::try_parse_from([
            "symptom-triage",
            "predict",
            "text",
            "--file",
            "input.txt",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_names() {
        let args = TriageArgs::try_parse_from(["symptom-triage", "batch", "in.txt"]).unwrap();
        assert_eq!(args.command.name(), "batch");

        let args = TriageArgs::try_parse_from(["symptom-triage", "inspect"]).unwrap();
        assert_eq!(args.command.name(), "inspect");
    }

    #[test]
    fn test_batch_command() {
        let args =
            TriageArgs::try_parse_from(["symptom-triage", "batch", "reviews.json", "--json"])
                .unwrap();

        if let Command::Batch(batch_args) = args.command {
            assert_eq!(batch_args.path, PathBuf::from("reviews.json"));
            assert!(batch_args.json);
        } else {
            panic!("Expected Batch command");
        }
    }

    #[test]
    fn test_normalize_explain() {
        let args = TriageArgs::try_parse_from([
            "symptom-triage",
            "normalize",
            "--explain",
            "Headaches!",
        ])
        .unwrap();

        if let Command::Normalize(normalize_args) = args.command {
            assert!(normalize_args.explain);
            assert_eq!(normalize_args.input.text.as_deref(), Some("Headaches!"));
        } else {
            panic!("Expected Normalize command");
        }
    }

    #[test]
    fn test_verbosity_levels() {
        // Default verbosity
        let args = TriageArgs::try_parse_from(["symptom-triage", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Verbose flag
        let args = TriageArgs::try_parse_from(["symptom-triage", "-v", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 1);

        // Multiple verbose flags
        let args = TriageArgs::try_parse_from(["symptom-triage", "-vvv", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 3);

        // Quiet flag
        let args = TriageArgs::try_parse_from(["symptom-triage", "--quiet", "inspect"]).unwrap();
        assert_eq!(args.verbosity(), 0);
    }

    #[test]
    fn test_output_format() {
        let args =
            TriageArgs::try_parse_from(["symptom-triage", "--format", "html", "inspect"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Html);

        let args = TriageArgs::try_parse_from(["symptom-triage", "inspect", "-f", "json"]).unwrap();
        assert_eq!(args.output_format, OutputFormat::Json);
    }

    #[test]
    fn test_path_flags_override_config() {
        let dir = tempfile::tempdir().unwrap();
        let config_path = dir.path().join("triage.json");
        std::fs::write(
            &config_path,
            r#"{"model_path": "from-file.json", "vectorizer_path": "vec.bin"}"#,
        )
        .unwrap();

        let args = TriageArgs::try_parse_from([
            "symptom-triage",
            "--config",
            config_path.to_str().unwrap(),
            "--model",
            "from-flag.bin",
            "--labels",
            "labels.json",
            "inspect",
        ])
        .unwrap();

        let config = args.triage_config().unwrap();
        assert_eq!(config.model_path, PathBuf::from("from-flag.bin"));
        assert_eq!(config.vectorizer_path, PathBuf::from("vec.bin"));
        assert_eq!(config.labels_path, Some(PathBuf::from("labels.json")));
    }
}
