//! Sort step generators.
//!
//! Each generator takes the caller's numbers by reference, sorts a private
//! working copy, and returns every comparison and mutation it performed as a
//! fully materialized step list. The last step of a non-empty list always
//! holds the input sorted ascending.

pub mod bubble;
pub mod insertion;
pub mod merge;
pub mod quick;
pub mod selection;

pub use bubble::bubble_sort_steps;
pub use insertion::insertion_sort_steps;
pub use merge::merge_sort_steps;
pub use quick::quick_sort_steps;
pub use selection::selection_sort_steps;
