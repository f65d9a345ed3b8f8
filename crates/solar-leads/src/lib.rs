//! Qualification engine for inbound residential solar leads.
//!
//! Raw lead attributes are normalized into canonical signals and then scored by a
//! deterministic rule set into sub-scores, a qualification tier, a buyer type,
//! pain points, and hard disqualification reasons.

pub mod config;
pub mod error;
pub mod leads;
pub mod telemetry;
