//! Search step generators.
//!
//! Each probe emits one step with a single index in `comparing` and `found`
//! set to whether that slot equals the target. Generation stops at the first
//! hit.

pub mod binary;
pub mod linear;

pub use binary::binary_search_steps;
pub use linear::linear_search_steps;
