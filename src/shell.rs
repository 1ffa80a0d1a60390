//! Interaction shell.
//!
//! Drives one request at a time through the predictor:
//!
//! ```text
//! Idle --blank--> Rejected --warning--> Idle
//! Idle --text---> Processing --> Rendered --card--> Idle
//! ```
//!
//! Blank input is rejected before any pipeline stage runs.

use log::debug;
use serde::Serialize;

use crate::error::Result;
use crate::predictor::{Prediction, Predictor};

/// Warning emitted for blank submissions.
pub const WARNING_MESSAGE: &str = "⚠️ Please enter a valid review.";

/// Where the shell is in its request cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ShellState {
    #[default]
    Idle,
    Rejected,
    Processing,
    Rendered,
}

/// What a submission produced.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "snake_case")]
pub enum Outcome {
    Warning(String),
    Rendered(Prediction),
}

/// Single-request shell over a borrowed [`Predictor`].
#[derive(Debug)]
pub struct InteractionShell<'a> {
    predictor: &'a Predictor,
    state: ShellState,
}

impl<'a> InteractionShell<'a> {
    pub fn new(predictor: &'a Predictor) -> Self {
        Self {
            predictor,
            state: ShellState::Idle,
        }
    }

    /// Handle one submission.
    ///
    /// The state observed after return is the terminal state of this request
    /// (`Rejected` or `Rendered`); the next call starts again from `Idle`.
    /// On error the shell returns to `Idle`.
    pub fn submit(&mut self, input: &str) -> Result<Outcome> {
        self.state = ShellState::Idle;

        if input.trim().is_empty() {
            self.state = ShellState::Rejected;
            debug!("rejected blank submission");
            return Ok(Outcome::Warning(WARNING_MESSAGE.to_string()));
        }

        self.state = ShellState::Processing;
        match self.predictor.predict(input) {
            Ok(prediction) => {
                self.state = ShellState::Rendered;
                Ok(Outcome::Rendered(prediction))
            }
            Err(e) => {
                self.state = ShellState::Idle;
                Err(e)
            }
        }
    }

    pub fn state(&self) -> ShellState {
        self.state
    }

    pub fn predictor(&self) -> &Predictor {
        self.predictor
    }
}
