//! # symptom-triage
//!
//! Classify free-text symptom descriptions into a small set of conditions
//! using pre-trained artifacts.
//!
//! ## Pipeline
//!
//! - [`analysis::TextNormalizer`]: entity decoding, lowercasing, URL,
//!   punctuation and digit removal, stopword removal and lemmatization
//! - [`ml::TfidfVectorizer`]: fitted TF-IDF transform into sparse vectors
//! - [`ml::Classifier`]: linear or multinomial naive Bayes model
//! - [`labels::LabelTable`]: raw label to display style, with a fallback
//! - [`shell::InteractionShell`]: one request at a time, rejecting blank input
//!
//! ```no_run
//! use symptom_triage::config::TriageConfig;
//! use symptom_triage::predictor::Predictor;
//!
//! let predictor = Predictor::load(&TriageConfig::default())?;
//! let prediction = predictor.predict("My blood sugar is high and I am always thirsty")?;
//! println!("{} {}", prediction.label.icon, prediction.label.name);
//! # Ok::<(), symptom_triage::error::TriageError>(())
//! ```

pub mod analysis;
pub mod cli;
pub mod config;
pub mod error;
pub mod labels;
pub mod ml;
pub mod predictor;
pub mod shell;

pub mod prelude {
    pub use crate::analysis::{Analyzer, TextNormalizer};
    pub use crate::config::TriageConfig;
    pub use crate::error::{Result, TriageError};
    pub use crate::labels::{LabelStyle, LabelTable};
    pub use crate::ml::{Classifier, Vectorizer};
    pub use crate::predictor::{Prediction, Predictor};
    pub use crate::shell::{InteractionShell, Outcome, ShellState};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
