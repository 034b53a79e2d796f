use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// The three interchangeable data origins feeding the histogram.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SourceKind {
    Normal,
    Poisson,
    FileLoad,
}

/// Per-source trigger counters.
///
/// Two instances exist per session: the observed counts the UI bumps on each
/// interaction, and the stored last-seen counts the arbiter diffs against.
/// The stored instance is updated one counter at a time, by the arbiter only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TriggerCounts {
    pub normal: u64,
    pub poisson: u64,
    pub file_load: u64,
}

impl TriggerCounts {
    pub fn bump(&mut self, kind: SourceKind) {
        match kind {
            SourceKind::Normal => self.normal += 1,
            SourceKind::Poisson => self.poisson += 1,
            SourceKind::FileLoad => self.file_load += 1,
        }
    }
}

/// How to parse a selected single-column numeric file.
///
/// Captured once per load event; toggling the header checkbox afterwards only
/// affects the next selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSpec {
    pub path: PathBuf,
    pub has_header: bool,
}

/// The numeric sequence feeding the histogram, tagged with the source that
/// produced it. Replaced wholesale on every fire; carries no other identity.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    pub kind: SourceKind,
    pub values: Vec<f64>,
}

impl Dataset {
    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
