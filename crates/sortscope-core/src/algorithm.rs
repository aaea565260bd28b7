//! The algorithm catalogue.
//!
//! [`Algorithm`] names every generator the workspace provides and carries the
//! metadata a menu or CLI needs: a stable slug, a display name, whether it
//! sorts or searches, and whether it expects pre-sorted input.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// Whether an algorithm sorts its input or searches it for a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlgorithmKind {
    Sort,
    Search,
}

impl fmt::Display for AlgorithmKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlgorithmKind::Sort => write!(f, "sorting"),
            AlgorithmKind::Search => write!(f, "searching"),
        }
    }
}

/// Every algorithm that has a step generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Algorithm {
    Bubble,
    Insertion,
    Selection,
    Quick,
    Merge,
    Linear,
    Binary,
}

impl Algorithm {
    /// All algorithms in menu order: sorting group first, then searching.
    pub const ALL: [Algorithm; 7] = [
        Algorithm::Bubble,
        Algorithm::Insertion,
        Algorithm::Selection,
        Algorithm::Quick,
        Algorithm::Merge,
        Algorithm::Linear,
        Algorithm::Binary,
    ];

    /// Stable lowercase identifier, used on the command line and in JSON.
    pub fn slug(self) -> &'static str {
        match self {
            Algorithm::Bubble => "bubble",
            Algorithm::Insertion => "insertion",
            Algorithm::Selection => "selection",
            Algorithm::Quick => "quick",
            Algorithm::Merge => "merge",
            Algorithm::Linear => "linear",
            Algorithm::Binary => "binary",
        }
    }

    /// Human-readable name.
    pub fn display_name(self) -> &'static str {
        match self {
            Algorithm::Bubble => "Bubble Sort",
            Algorithm::Insertion => "Insertion Sort",
            Algorithm::Selection => "Selection Sort",
            Algorithm::Quick => "Quick Sort",
            Algorithm::Merge => "Merge Sort",
            Algorithm::Linear => "Linear Search",
            Algorithm::Binary => "Binary Search",
        }
    }

    pub fn kind(self) -> AlgorithmKind {
        match self {
            Algorithm::Linear | Algorithm::Binary => AlgorithmKind::Search,
            _ => AlgorithmKind::Sort,
        }
    }

    pub fn is_search(self) -> bool {
        self.kind() == AlgorithmKind::Search
    }

    /// Binary search assumes the caller already sorted its input ascending.
    pub fn requires_sorted_input(self) -> bool {
        matches!(self, Algorithm::Binary)
    }

    /// Algorithms of the given kind, in menu order.
    pub fn of_kind(kind: AlgorithmKind) -> impl Iterator<Item = Algorithm> {
        Algorithm::ALL.into_iter().filter(move |a| a.kind() == kind)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for Algorithm {
    type Err = CoreError;

    /// Accepts the slug (`quick`), the slug with its kind suffix
    /// (`quick-sort`, `quick_sort`) or the display name (`Quick Sort`),
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .to_ascii_lowercase()
            .chars()
            .map(|c| if c == '_' || c == ' ' { '-' } else { c })
            .collect();

        Algorithm::ALL
            .into_iter()
            .find(|alg| {
                let suffix = match alg.kind() {
                    AlgorithmKind::Sort => "-sort",
                    AlgorithmKind::Search => "-search",
                };
                normalized == alg.slug() || normalized == format!("{}{}", alg.slug(), suffix)
            })
            .ok_or_else(|| CoreError::UnknownAlgorithm {
                name: s.to_string(),
            })
    }
}
