pub mod config;
pub mod error;
pub mod influence;
pub mod telemetry;
