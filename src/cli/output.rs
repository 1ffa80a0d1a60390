//! Output formatting for CLI commands.
//!
//! Every renderer writes to a caller-supplied [`Write`] so the commands can
//! print to stdout and the tests can capture into a buffer.

use std::io::Write;

use serde::Serialize;

use crate::analysis::NormalizationTrace;
use crate::cli::args::OutputFormat;
use crate::error::Result;
use crate::labels::LabelStyle;
use crate::shell::Outcome;

/// One entry of a batch run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchItem {
    /// 1-based position in the input.
    pub index: usize,
    pub input: String,
    pub outcome: Outcome,
}

/// Output a shell outcome in the specified format.
pub fn output_outcome<W: Write>(
    out: &mut W,
    outcome: &Outcome,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => output_outcome_human(out, outcome),
        OutputFormat::Json => output_json(out, outcome, pretty),
        OutputFormat::Html => {
            writeln!(out, "{}", outcome_html(outcome))?;
            Ok(())
        }
    }
}

/// Output a batch run in the specified format. JSON output is a single array.
pub fn output_batch<W: Write>(
    out: &mut W,
    items: &[BatchItem],
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json => output_json(out, &items, pretty),
        OutputFormat::Human => {
            for item in items {
                write!(out, "{:>4}: ", item.index)?;
                output_outcome_human(out, &item.outcome)?;
            }
            Ok(())
        }
        OutputFormat::Html => {
            for item in items {
                writeln!(out, "{}", outcome_html(&item.outcome))?;
            }
            Ok(())
        }
    }
}

/// Output a normalization trace. Without `explain` only the normalized text
/// is printed in human format.
pub fn output_normalization<W: Write>(
    out: &mut W,
    trace: &NormalizationTrace,
    explain: bool,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Json if explain => output_json(out, trace, pretty),
        OutputFormat::Json => output_json(
            out,
            &serde_json::json!({ "normalized": trace.normalized }),
            pretty,
        ),
        OutputFormat::Human | OutputFormat::Html if explain => {
            for step in &trace.steps {
                writeln!(out, "{:<20} {}", step.stage, step.output)?;
            }
            writeln!(out, "{:<20} {}", "=>", trace.normalized)?;
            Ok(())
        }
        OutputFormat::Human | OutputFormat::Html => {
            writeln!(out, "{}", trace.normalized)?;
            Ok(())
        }
    }
}

/// Output any serializable result in the specified format.
pub fn output_result<W: Write, T: Serialize>(
    out: &mut W,
    message: &str,
    result: &T,
    format: OutputFormat,
    pretty: bool,
) -> Result<()> {
    match format {
        OutputFormat::Human => {
            writeln!(out, "{message}")?;
            let value = serde_json::to_value(result)?;
            output_generic_human(out, &value, 1)
        }
        OutputFormat::Json => output_json(out, result, pretty),
        OutputFormat::Html => {
            let json = serde_json::to_string_pretty(result)?;
            writeln!(out, "<pre>{}</pre>", html_escape::encode_text(&json))?;
            Ok(())
        }
    }
}

/// The styled card shown for a prediction.
pub fn card_html(style: &LabelStyle) -> String {
    format!(
        "<div style='background-color:{};padding:20px;border-radius:10px;margin-top:20px'>\
         <h3 style='color:{};'>{} Predicted Condition: <b>{}</b></h3></div>",
        html_escape::encode_single_quoted_attribute(&style.background),
        html_escape::encode_single_quoted_attribute(&style.color),
        html_escape::encode_text(&style.icon),
        html_escape::encode_text(&style.name),
    )
}

fn outcome_html(outcome: &Outcome) -> String {
    match outcome {
        Outcome::Warning(message) => format!(
            "<div class='warning'>{}</div>",
            html_escape::encode_text(message)
        ),
        Outcome::Rendered(prediction) => card_html(&prediction.label),
    }
}

fn output_outcome_human<W: Write>(out: &mut W, outcome: &Outcome) -> Result<()> {
    match outcome {
        Outcome::Warning(message) => writeln!(out, "{message}")?,
        Outcome::Rendered(prediction) => writeln!(
            out,
            "{} Predicted Condition: {}",
            prediction.label.icon, prediction.label.name
        )?,
    }
    Ok(())
}

/// Output in JSON format.
fn output_json<W: Write, T: Serialize + ?Sized>(out: &mut W, result: &T, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(result)?
    } else {
        serde_json::to_string(result)?
    };

    writeln!(out, "{json}")?;
    Ok(())
}

/// Output generic data in human format, nesting objects by indentation.
fn output_generic_human<W: Write>(
    out: &mut W,
    value: &serde_json::Value,
    depth: usize,
) -> Result<()> {
    let indent = "  ".repeat(depth);
    match value {
        serde_json::Value::Object(obj) => {
            for (key, val) in obj {
                if val.is_object() {
                    writeln!(out, "{indent}{key}:")?;
                    output_generic_human(out, val, depth + 1)?;
                } else {
                    writeln!(out, "{indent}{key}: {}", format_value(val))?;
                }
            }
        }
        _ => writeln!(out, "{indent}{}", format_value(value))?,
    }
    Ok(())
}

/// Format a JSON value for display.
fn format_value(value: &serde_json::Value) -> String {
    match value {
        serde_json::Value::String(s) => s.clone(),
        serde_json::Value::Number(n) => n.to_string(),
        serde_json::Value::Bool(b) => b.to_string(),
        serde_json::Value::Array(arr) => {
            let formatted_values = arr.iter().map(format_value).collect::<Vec<_>>().join(", ");
            format!("[{formatted_values}]")
        }
        serde_json::Value::Object(_) => "[object]".to_string(),
        serde_json::Value::Null => "null".to_string(),
    }
}
