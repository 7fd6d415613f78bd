//! Expected-utility analysis for a single purchase decision.
//!
//! [`engine::calculate_utilities`] turns a [`types::input::PurchaseInput`]
//! into four scenario utilities; the [`decision`] functions weigh them with
//! subjective beliefs to recommend buying or not.

pub mod cli;
pub mod config;
pub mod decision;
pub mod engine;
pub mod error;
pub mod intake;
pub mod report;
pub mod telemetry;
pub mod types;
