//! Directional inference strategies.
//!
//! Two interchangeable implementations of "produce an assessment from a
//! filtered event set": a deterministic rule engine (`rules`) and a
//! narrative delegation to a text-generation service (`narrative`).

pub mod narrative;
pub mod rules;

pub use narrative::NarrativeAnalyst;
