//! Label resolution.
//!
//! Maps the raw integer emitted by a classifier to a display style. The
//! mapping is total: indices without an entry resolve to the `Unknown`
//! fallback style.

use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{Result, TriageError};

/// Display style of a predicted condition.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LabelStyle {
    pub name: String,
    pub background: String,
    pub color: String,
    pub icon: String,
}

impl LabelStyle {
    pub fn new(name: &str, background: &str, color: &str, icon: &str) -> Self {
        Self {
            name: name.to_string(),
            background: background.to_string(),
            color: color.to_string(),
            icon: icon.to_string(),
        }
    }

    /// Style returned for indices without an entry.
    ///
    /// Deliberately neutral grey rather than the High Blood Pressure card
    /// colors, so an unexpected model output never reads as a diagnosis.
    pub fn unknown() -> Self {
        Self::new("Unknown", "#eceff1", "#455A64", "❔")
    }
}

/// One entry of a label file.
#[derive(Debug, Deserialize)]
struct LabelEntry {
    index: i64,
    #[serde(flatten)]
    style: LabelStyle,
}

/// Index to style mapping with a fixed fallback.
#[derive(Clone, Debug, PartialEq)]
pub struct LabelTable {
    entries: BTreeMap<i64, LabelStyle>,
    fallback: LabelStyle,
}

impl Default for LabelTable {
    fn default() -> Self {
        let entries = BTreeMap::from([
            (0, LabelStyle::new("Depression", "#f3e5f5", "#6A1B9A", "💭")),
            (
                1,
                LabelStyle::new("Diabetes Type 2", "#e1f5fe", "#0277BD", "🍬"),
            ),
            (
                2,
                LabelStyle::new("High Blood Pressure", "#ffebee", "#C62828", "❤️"),
            ),
        ]);
        Self {
            entries,
            fallback: LabelStyle::unknown(),
        }
    }
}

impl LabelTable {
    /// An empty table; every index resolves to the fallback.
    pub fn empty() -> Self {
        Self {
            entries: BTreeMap::new(),
            fallback: LabelStyle::unknown(),
        }
    }

    /// Read a JSON array of `{index, name, background, color, icon}` objects.
    ///
    /// The file replaces the built-in entries entirely. Duplicate indices are
    /// rejected.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            TriageError::resource(format!("cannot read labels {}: {e}", path.display()))
        })?;
        let parsed: Vec<LabelEntry> = serde_json::from_str(&content)?;

        let mut table = Self::empty();
        for entry in parsed {
            if table.entries.contains_key(&entry.index) {
                return Err(TriageError::resource(format!(
                    "duplicate label index {} in {}",
                    entry.index,
                    path.display()
                )));
            }
            table.insert(entry.index, entry.style);
        }
        info!("Loaded {} labels from {}", table.len(), path.display());
        Ok(table)
    }

    pub fn insert(&mut self, index: i64, style: LabelStyle) -> Option<LabelStyle> {
        self.entries.insert(index, style)
    }

    /// Resolve a raw classifier output. Never fails.
    pub fn resolve(&self, index: i64) -> &LabelStyle {
        self.entries.get(&index).unwrap_or(&self.fallback)
    }

    pub fn fallback(&self) -> &LabelStyle {
        &self.fallback
    }

    pub fn iter(&self) -> impl Iterator<Item = (i64, &LabelStyle)> {
        self.entries.iter().map(|(index, style)| (*index, style))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
