pub mod config;
pub mod input;
pub mod metrics;
pub mod report;
pub mod tags;
