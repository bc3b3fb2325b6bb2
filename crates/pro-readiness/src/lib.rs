pub mod config;
pub mod error;
pub mod professionals;
pub mod telemetry;
