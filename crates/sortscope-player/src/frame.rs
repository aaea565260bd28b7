//! Frames: what a render adapter draws for one cursor position.
//!
//! A [`Frame`] resolves the current step into per-index highlight sets and a
//! one-line explanation. It is derived state, rebuilt from the player on
//! every cursor move.

use serde::{Deserialize, Serialize};
use sortscope_core::{Algorithm, AlgorithmKind};

use crate::player::Player;

/// How a single element is highlighted, in priority order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Highlight {
    Normal,
    Comparing,
    Swapped,
    Sorted,
    Found,
}

/// One renderable moment of playback.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Frame {
    pub algorithm: Algorithm,
    /// The current snapshot, or the base array before the first step.
    pub array: Vec<f64>,
    pub comparing: Vec<usize>,
    pub swapped: Vec<usize>,
    pub found: Vec<usize>,
    pub sorted: Vec<usize>,
    /// Cursor position; `None` before the first step.
    pub position: Option<usize>,
    pub total: usize,
    pub finished: bool,
}

impl Frame {
    pub(crate) fn capture(player: &Player) -> Frame {
        let algorithm = player.algorithm();
        let finished = player.is_finished();
        let step = player.current_step();

        let array = step.map_or_else(|| player.base().to_vec(), |s| s.array.clone());
        let comparing = step.map_or_else(Vec::new, |s| s.comparing.to_vec());

        let swapped = if finished && algorithm.kind() == AlgorithmKind::Sort {
            (0..array.len()).collect()
        } else if step.is_some_and(|s| s.is_mutation()) {
            comparing.clone()
        } else {
            Vec::new()
        };

        let found = if step.is_some_and(|s| s.is_found()) {
            comparing.clone()
        } else {
            Vec::new()
        };

        let sorted = step
            .and_then(|s| s.sorted_indices.as_ref())
            .map_or_else(Vec::new, |set| set.iter().copied().collect());

        Frame {
            algorithm,
            array,
            comparing,
            swapped,
            found,
            sorted,
            position: player.cursor(),
            total: player.steps().len(),
            finished,
        }
    }

    /// Highlight for element `index`: Found > Sorted > Swapped > Comparing.
    pub fn highlight(&self, index: usize) -> Highlight {
        if self.found.contains(&index) {
            Highlight::Found
        } else if self.sorted.contains(&index) {
            Highlight::Sorted
        } else if self.swapped.contains(&index) {
            Highlight::Swapped
        } else if self.comparing.contains(&index) {
            Highlight::Comparing
        } else {
            Highlight::Normal
        }
    }

    /// Highlights for every element, in index order.
    pub fn highlights(&self) -> Vec<Highlight> {
        (0..self.array.len()).map(|i| self.highlight(i)).collect()
    }

    /// "Step: k / n", counting from 1 and showing 0 before the first step.
    pub fn progress_label(&self) -> String {
        let shown = self.position.map_or(0, |p| p + 1);
        format!("Step: {} / {}", shown, self.total)
    }

    /// A one-line description of the current step.
    pub fn explanation(&self) -> String {
        let value = |i: usize| self.array.get(i).copied().unwrap_or(f64::NAN);

        match self.algorithm.kind() {
            AlgorithmKind::Sort => {
                if self.finished {
                    return "Array is sorted!".to_string();
                }
                match self.comparing.as_slice() {
                    [] => "Press Play to start.".to_string(),
                    [a, b] if !self.swapped.is_empty() && a == b => {
                        format!("Placed {} at index {}.", value(*a), a)
                    }
                    [a, b] if !self.swapped.is_empty() => {
                        format!("Swapped {} and {}.", value(*a), value(*b))
                    }
                    [a, b] => format!("Comparing {} and {}. No swap needed.", value(*a), value(*b)),
                    _ => "Ready.".to_string(),
                }
            }
            AlgorithmKind::Search => match (self.comparing.first(), self.found.first()) {
                (_, Some(&i)) => format!("Found {} at index {}.", value(i), i),
                (Some(_), None) if self.finished => "Target not found.".to_string(),
                (Some(&i), None) => format!("Checking {} at index {}.", value(i), i),
                (None, None) => "Press Play to start.".to_string(),
            },
        }
    }
}
