//! Talentflow core library.
//!
//! Houses the interview scorecard workflows (validation, aggregation, and
//! hiring recommendation), the panel-sheet import path that feeds them, and
//! the configuration/telemetry/error plumbing shared with the API service.

pub mod config;
pub mod error;
pub mod telemetry;
pub mod workflows;
