use std::fs;
use std::path::Path;

use symptom_triage::cli::output::{card_html, output_outcome};
use symptom_triage::cli::OutputFormat;
use symptom_triage::config::TriageConfig;
use symptom_triage::error::Result;
use symptom_triage::predictor::Predictor;
use symptom_triage::shell::{InteractionShell, Outcome, ShellState, WARNING_MESSAGE};

fn demo_config() -> TriageConfig {
    let root = Path::new(env!("CARGO_MANIFEST_DIR"));
    TriageConfig {
        model_path: root.join("models/model.json"),
        vectorizer_path: root.join("models/vectorizer.json"),
        ..TriageConfig::default()
    }
}

fn rendered(outcome: Outcome) -> symptom_triage::predictor::Prediction {
    match outcome {
        Outcome::Rendered(prediction) => prediction,
        Outcome::Warning(message) => panic!("unexpected warning: {message}"),
    }
}

#[test]
fn demo_artifacts_classify_each_condition() -> Result<()> {
    let predictor = Predictor::load(&demo_config())?;
    let mut shell = InteractionShell::new(&predictor);

    let cases = [
        ("I feel so sad and hopeless every day", 0, "Depression", "💭"),
        (
            "My blood sugar is high and I am always thirsty",
            1,
            "Diabetes Type 2",
            "🍬",
        ),
        (
            "Terrible headaches and dizziness, my blood pressure is 160/100",
            2,
            "High Blood Pressure",
            "❤️",
        ),
        ("Chest pain &amp; palpitations after salty food", 2, "High Blood Pressure", "❤️"),
    ];

    for (text, raw_label, name, icon) in cases {
        let prediction = rendered(shell.submit(text)?);
        assert_eq!(prediction.raw_label, raw_label, "{text:?}");
        assert_eq!(prediction.label.name, name);
        assert_eq!(prediction.label.icon, icon);
        assert_eq!(shell.state(), ShellState::Rendered);
    }
    Ok(())
}

#[test]
fn blank_submission_is_rejected() -> Result<()> {
    let predictor = Predictor::load(&demo_config())?;
    let mut shell = InteractionShell::new(&predictor);

    let outcome = shell.submit("   \n")?;
    assert_eq!(outcome, Outcome::Warning(WARNING_MESSAGE.to_string()));
    assert_eq!(shell.state(), ShellState::Rejected);

    // the shell accepts the next request normally
    let prediction = rendered(shell.submit("so thirsty")?);
    assert_eq!(prediction.raw_label, 1);
    Ok(())
}

#[test]
fn identical_input_gives_identical_label() -> Result<()> {
    let predictor = Predictor::load(&demo_config())?;
    let mut shell = InteractionShell::new(&predictor);

    let text = "Blurry vision and constant hunger";
    let first = rendered(shell.submit(text)?);
    let second = rendered(shell.submit(text)?);
    assert_eq!(first, second);
    Ok(())
}

#[test]
fn text_without_known_terms_still_gets_a_label() -> Result<()> {
    let predictor = Predictor::load(&demo_config())?;
    let prediction = predictor.predict("123 !!!")?;
    assert_eq!(prediction.normalized, "");
    assert!(predictor.classifier().classes().contains(&prediction.raw_label));
    Ok(())
}

#[test]
fn custom_label_table_falls_back_to_unknown() -> Result<()> {
    let dir = tempfile::tempdir()?;
    let labels = dir.path().join("labels.json");
    fs::write(
        &labels,
        r##"[{"index": 0, "name": "Low Mood", "background": "#fafafa", "color": "#333333", "icon": "🌧"}]"##,
    )?;

    let config = TriageConfig {
        labels_path: Some(labels),
        ..demo_config()
    };
    let predictor = Predictor::load(&config)?;

    assert_eq!(predictor.predict("sad and lonely")?.label.name, "Low Mood");
    let prediction = predictor.predict("high blood sugar")?;
    assert_eq!(prediction.raw_label, 1);
    assert_eq!(prediction.label.name, "Unknown");
    assert_eq!(prediction.label.background, "#eceff1");
    Ok(())
}

#[test]
fn html_card_uses_label_colors() -> Result<()> {
    let predictor = Predictor::load(&demo_config())?;
    let mut shell = InteractionShell::new(&predictor);
    let outcome = shell.submit("worthless and empty, crying at night")?;

    let mut buf = Vec::new();
    output_outcome(&mut buf, &outcome, OutputFormat::Html, false)?;
    let html = String::from_utf8(buf).unwrap();

    let prediction = rendered(outcome);
    assert_eq!(html.trim_end(), card_html(&prediction.label));
    assert!(html.contains("background-color:#f3e5f5"));
    assert!(html.contains("color:#6A1B9A"));
    assert!(html.contains("<b>Depression</b>"));
    Ok(())
}
