//! Report rendering.
//!
//! Two consumers, two formats: [`terminal`] renders colored tables for
//! humans, [`json`] serializes the same report types for tooling.

pub mod json;
pub mod terminal;
