//! Command implementations for the symptom-triage CLI.

use std::fs;
use std::io::{self, BufRead, Read, Write};
use std::path::Path;

use log::{debug, info};

use crate::analysis::TextNormalizer;
use crate::cli::args::*;
use crate::cli::output::*;
use crate::error::{Result, TriageError};
use crate::ml::ArtifactSummary;
use crate::predictor::Predictor;
use crate::shell::InteractionShell;

/// Line that ends an interactive session.
pub const QUIT_COMMAND: &str = ":quit";

/// Execute a CLI command.
pub fn execute_command(args: TriageArgs) -> Result<()> {
    match &args.command {
        Command::Predict(predict_args) => predict(predict_args, &args),
        Command::Batch(batch_args) => batch(batch_args, &args),
        Command::Interactive(interactive_args) => interactive(interactive_args, &args),
        Command::Normalize(normalize_args) => normalize(normalize_args, &args),
        Command::Inspect => inspect(&args),
    }
}

/// Classify one text.
fn predict(args: &PredictArgs, cli_args: &TriageArgs) -> Result<()> {
    let predictor = Predictor::load(&cli_args.triage_config()?)?;
    let text = read_text(&args.input)?;

    let mut shell = InteractionShell::new(&predictor);
    let outcome = shell.submit(&text)?;

    let stdout = io::stdout();
    output_outcome(
        &mut stdout.lock(),
        &outcome,
        cli_args.output_format,
        cli_args.pretty,
    )
}

/// Classify every entry of a file.
fn batch(args: &BatchArgs, cli_args: &TriageArgs) -> Result<()> {
    let predictor = Predictor::load(&cli_args.triage_config()?)?;
    let entries = read_batch_entries(&args.path, args.json)?;
    info!("Classifying {} entries from {}", entries.len(), args.path.display());

    let mut shell = InteractionShell::new(&predictor);
    let mut items = Vec::with_capacity(entries.len());
    for (i, input) in entries.into_iter().enumerate() {
        let outcome = shell.submit(&input)?;
        items.push(BatchItem {
            index: i + 1,
            input,
            outcome,
        });
    }

    let stdout = io::stdout();
    output_batch(
        &mut stdout.lock(),
        &items,
        cli_args.output_format,
        cli_args.pretty,
    )
}

/// Read submissions from stdin until EOF or `:quit`.
fn interactive(args: &InteractiveArgs, cli_args: &TriageArgs) -> Result<()> {
    let predictor = Predictor::load(&cli_args.triage_config()?)?;
    let mut shell = InteractionShell::new(&predictor);

    let prompt = match cli_args.output_format {
        OutputFormat::Human => Some(args.prompt.as_str()),
        _ => None,
    };

    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = run_session(
        &mut shell,
        stdin.lock(),
        &mut stdout.lock(),
        prompt,
        cli_args.output_format,
        cli_args.pretty,
    )?;
    debug!("interactive session ended after {handled} submissions");
    Ok(())
}

/// Print the normalized form of a text. Needs no artifacts.
fn normalize(args: &NormalizeArgs, cli_args: &TriageArgs) -> Result<()> {
    let config = cli_args.triage_config()?;
    let normalizer = TextNormalizer::from_config(&config.resources)?;
    let text = read_text(&args.input)?;
    let trace = normalizer.explain(&text)?;

    let stdout = io::stdout();
    output_normalization(
        &mut stdout.lock(),
        &trace,
        args.explain,
        cli_args.output_format,
        cli_args.pretty,
    )
}

/// Show artifact metadata.
fn inspect(cli_args: &TriageArgs) -> Result<()> {
    let config = cli_args.triage_config()?;
    let summary = ArtifactSummary::load(&config)?;

    let stdout = io::stdout();
    output_result(
        &mut stdout.lock(),
        &format!(
            "Artifacts: {} / {}",
            config.model_path.display(),
            config.vectorizer_path.display()
        ),
        &summary,
        cli_args.output_format,
        cli_args.pretty,
    )
}

/// Drive a shell from a line reader. Returns the number of submissions
/// handled; every line, blank ones included, is one submission.
pub fn run_session<R: BufRead, W: Write>(
    shell: &mut InteractionShell<'_>,
    mut reader: R,
    out: &mut W,
    prompt: Option<&str>,
    format: OutputFormat,
    pretty: bool,
) -> Result<usize> {
    let mut handled = 0;
    let mut line = String::new();
    loop {
        if let Some(prompt) = prompt {
            write!(out, "{prompt}")?;
            out.flush()?;
        }

        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim_end_matches(['\n', '\r']);
        if input.trim() == QUIT_COMMAND {
            break;
        }

        let outcome = shell.submit(input)?;
        output_outcome(out, &outcome, format, pretty)?;
        handled += 1;
    }
    Ok(handled)
}

/// Load batch entries: one per line, or a JSON array of strings.
pub fn read_batch_entries(path: &Path, json: bool) -> Result<Vec<String>> {
    let content = fs::read_to_string(path)
        .map_err(|e| TriageError::invalid_argument(format!("cannot read {}: {e}", path.display())))?;
    if json {
        Ok(serde_json::from_str(&content)?)
    } else {
        Ok(content.lines().map(str::to_string).collect())
    }
}

/// Resolve a text argument: inline, from a file, or from stdin.
fn read_text(input: &TextInput) -> Result<String> {
    if let Some(text) = &input.text {
        return Ok(text.clone());
    }
    if let Some(path) = &input.file {
        return fs::read_to_string(path).map_err(|e| {
            TriageError::invalid_argument(format!("cannot read {}: {e}", path.display()))
        });
    }
    let mut text = String::new();
    io::stdin().read_to_string(&mut text)?;
    Ok(text)
}
