//! Render layouts: where each element of a snapshot goes on screen.
//!
//! Three display modes share one frame: a flat row of bars, a scatter of
//! nodes, and a balanced binary tree. All of them are pure functions of the
//! snapshot array; none feeds anything back into step generation.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Display mode for a frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DisplayMode {
    #[default]
    Bars,
    Scatter,
    Tree,
}

impl fmt::Display for DisplayMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DisplayMode::Bars => write!(f, "bars"),
            DisplayMode::Scatter => write!(f, "scatter"),
            DisplayMode::Tree => write!(f, "tree"),
        }
    }
}

impl FromStr for DisplayMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "bars" | "bar" => Ok(DisplayMode::Bars),
            "scatter" | "nodes" => Ok(DisplayMode::Scatter),
            "tree" => Ok(DisplayMode::Tree),
            other => Err(format!("unknown display mode '{}', expected bars/scatter/tree", other)),
        }
    }
}

/// Bar heights as fractions of the tallest bar.
///
/// The scale is `max(1, largest value)`, so all-small or all-negative data
/// does not blow up. Negative values get zero height.
pub fn bar_heights(array: &[f64]) -> Vec<f64> {
    let scale = array.iter().copied().fold(0.0_f64, f64::max).max(1.0);
    array.iter().map(|&v| (v / scale).max(0.0)).collect()
}

/// A position in percent of the canvas, `(0, 0)` top-left.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f64,
    pub y: f64,
}

/// Deterministic scattered positions for `len` nodes, within 10%..90% of
/// both axes.
pub fn scatter_positions(len: usize) -> Vec<Position> {
    (0..len)
        .map(|i| Position {
            x: 10.0 + ((i * 10) % 80) as f64,
            y: 10.0 + ((i * 15) % 80) as f64,
        })
        .collect()
}

/// Spacing parameters for [`TreeLayout`], in canvas units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TreeSpacing {
    pub width: f64,
    pub top: f64,
    pub horizontal: f64,
    pub vertical: f64,
}

impl Default for TreeSpacing {
    fn default() -> Self {
        TreeSpacing {
            width: 800.0,
            top: 40.0,
            horizontal: 200.0,
            vertical: 80.0,
        }
    }
}

/// What a tree node stands for.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum TreeSlot {
    /// The element at `index` of the snapshot.
    Element { index: usize, value: f64 },
    /// Synthetic filler for the empty side of a split that left one child.
    Placeholder,
}

/// A node in the arena of a [`TreeLayout`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TreeNode {
    pub slot: TreeSlot,
    pub depth: usize,
    pub x: f64,
    pub y: f64,
    /// Arena index of the left child.
    pub left: Option<usize>,
    /// Arena index of the right child.
    pub right: Option<usize>,
}

/// A balanced binary tree over a snapshot, built by recursive midpoint split.
///
/// The tree is a presentation structure only: it is rebuilt from each
/// snapshot and says nothing about how the algorithm itself recurses.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TreeLayout {
    nodes: Vec<TreeNode>,
    root: Option<usize>,
}

impl TreeLayout {
    pub fn build(array: &[f64], spacing: &TreeSpacing) -> TreeLayout {
        let mut layout = TreeLayout::default();
        let root = layout.split(array, 0, array.len(), 0, spacing.width / 2.0, spacing.top, spacing);
        layout.root = root;
        layout
    }

    /// Builds the subtree for `array[lo..hi]` and returns its arena index.
    #[allow(clippy::too_many_arguments)]
    fn split(
        &mut self,
        array: &[f64],
        lo: usize,
        hi: usize,
        depth: usize,
        x: f64,
        y: f64,
        spacing: &TreeSpacing,
    ) -> Option<usize> {
        if lo >= hi {
            return None;
        }
        let mid = lo + (hi - lo - 1) / 2;
        let id = self.push(TreeSlot::Element { index: mid, value: array[mid] }, depth, x, y);

        let offset = spacing.horizontal / (depth + 1) as f64;
        let (left_x, right_x, child_y) = (x - offset, x + offset, y + spacing.vertical);

        let mut left = self.split(array, lo, mid, depth + 1, left_x, child_y, spacing);
        let mut right = self.split(array, mid + 1, hi, depth + 1, right_x, child_y, spacing);
        match (left, right) {
            (None, Some(_)) => left = Some(self.push(TreeSlot::Placeholder, depth + 1, left_x, child_y)),
            (Some(_), None) => right = Some(self.push(TreeSlot::Placeholder, depth + 1, right_x, child_y)),
            _ => {}
        }

        self.nodes[id].left = left;
        self.nodes[id].right = right;
        Some(id)
    }

    fn push(&mut self, slot: TreeSlot, depth: usize, x: f64, y: f64) -> usize {
        self.nodes.push(TreeNode {
            slot,
            depth,
            x,
            y,
            left: None,
            right: None,
        });
        self.nodes.len() - 1
    }

    pub fn root(&self) -> Option<&TreeNode> {
        self.root.map(|id| &self.nodes[id])
    }

    pub fn nodes(&self) -> &[TreeNode] {
        &self.nodes
    }

    pub fn get(&self, id: usize) -> Option<&TreeNode> {
        self.nodes.get(id)
    }

    /// Number of levels; 0 for an empty tree.
    pub fn height(&self) -> usize {
        self.nodes.iter().map(|n| n.depth + 1).max().unwrap_or(0)
    }

    /// Nodes grouped by depth, each level ordered left to right.
    pub fn levels(&self) -> Vec<Vec<&TreeNode>> {
        let mut levels: Vec<Vec<&TreeNode>> = vec![Vec::new(); self.height()];
        for node in &self.nodes {
            levels[node.depth].push(node);
        }
        for level in &mut levels {
            level.sort_by(|a, b| a.x.total_cmp(&b.x));
        }
        levels
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element_index(node: &TreeNode) -> Option<usize> {
        match node.slot {
            TreeSlot::Element { index, .. } => Some(index),
            TreeSlot::Placeholder => None,
        }
    }

    #[test]
    fn bar_heights_scale_to_max() {
        assert_eq!(bar_heights(&[50.0, 100.0, 25.0]), vec![0.5, 1.0, 0.25]);
    }

    #[test]
    fn bar_heights_use_unit_floor() {
        assert_eq!(bar_heights(&[0.5, 0.25]), vec![0.5, 0.25]);
        assert_eq!(bar_heights(&[-3.0, 0.0]), vec![0.0, 0.0]);
        assert!(bar_heights(&[]).is_empty());
    }

    #[test]
    fn scatter_positions_wrap_within_bounds() {
        let positions = scatter_positions(10);
        assert_eq!(positions[0], Position { x: 10.0, y: 10.0 });
        assert_eq!(positions[1], Position { x: 20.0, y: 25.0 });
        assert_eq!(positions[8], Position { x: 10.0, y: 50.0 });
        assert!(positions.iter().all(|p| (10.0..90.0).contains(&p.x) && (10.0..90.0).contains(&p.y)));
    }

    #[test]
    fn display_mode_parses() {
        assert_eq!("Tree".parse::<DisplayMode>().unwrap(), DisplayMode::Tree);
        assert_eq!("nodes".parse::<DisplayMode>().unwrap(), DisplayMode::Scatter);
        assert!("pie".parse::<DisplayMode>().is_err());
        assert_eq!(DisplayMode::default(), DisplayMode::Bars);
    }

    #[test]
    fn empty_array_has_no_tree() {
        let tree = TreeLayout::build(&[], &TreeSpacing::default());
        assert!(tree.root().is_none());
        assert_eq!(tree.height(), 0);
    }

    #[test]
    fn root_is_the_midpoint() {
        let tree = TreeLayout::build(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], &TreeSpacing::default());
        let root = tree.root().unwrap();
        assert_eq!(element_index(root), Some(3));
        assert_eq!((root.x, root.y), (400.0, 40.0));
        assert_eq!(tree.height(), 3);
        assert_eq!(tree.nodes().len(), 7);
    }

    #[test]
    fn children_are_offset_by_depth() {
        let tree = TreeLayout::build(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0], &TreeSpacing::default());
        let root = tree.root().unwrap();
        let left = tree.get(root.left.unwrap()).unwrap();
        let right = tree.get(root.right.unwrap()).unwrap();
        assert_eq!(element_index(left), Some(1));
        assert_eq!(element_index(right), Some(5));
        assert_eq!((left.x, left.y), (200.0, 120.0));
        assert_eq!(right.x, 600.0);

        let left_left = tree.get(left.left.unwrap()).unwrap();
        assert_eq!(left_left.x, 100.0);
    }

    #[test]
    fn single_child_splits_get_a_placeholder() {
        // [a, b]: midpoint 0, left side empty, right side holds index 1.
        let tree = TreeLayout::build(&[4.0, 9.0], &TreeSpacing::default());
        let root = tree.root().unwrap();
        assert_eq!(element_index(root), Some(0));
        let left = tree.get(root.left.unwrap()).unwrap();
        let right = tree.get(root.right.unwrap()).unwrap();
        assert_eq!(left.slot, TreeSlot::Placeholder);
        assert_eq!(element_index(right), Some(1));
    }

    #[test]
    fn every_element_appears_once() {
        let array: Vec<f64> = (0..10).map(f64::from).collect();
        let tree = TreeLayout::build(&array, &TreeSpacing::default());
        let mut indices: Vec<usize> = tree.nodes().iter().filter_map(element_index).collect();
        indices.sort_unstable();
        assert_eq!(indices, (0..10).collect::<Vec<_>>());
        for node in tree.nodes() {
            if let TreeSlot::Element { index, value } = node.slot {
                assert_eq!(value, array[index]);
            }
        }
    }

    #[test]
    fn root_links_both_children() {
        let tree = TreeLayout::build(&[1.0, 2.0, 3.0], &TreeSpacing::default());
        let root = tree.root().unwrap();
        assert_eq!((root.left, root.right), (Some(1), Some(2)));
        assert_eq!(element_index(tree.get(1).unwrap()), Some(0));
        assert_eq!(element_index(tree.get(2).unwrap()), Some(2));
    }

    #[test]
    fn levels_are_ordered_left_to_right() {
        let tree = TreeLayout::build(&[1.0, 2.0, 3.0, 4.0, 5.0], &TreeSpacing::default());
        let levels = tree.levels();
        let second: Vec<Option<usize>> = levels[1].iter().map(|n| element_index(n)).collect();
        assert_eq!(second, vec![Some(0), Some(3)]);
    }
}
