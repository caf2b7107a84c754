//! # Meridian Shared
//! 
//! Shared configuration, telemetry, and identifier types for the Meridian
//! location check-in service.

pub mod constants;
pub mod types;
pub mod telemetry;
pub mod config;
pub mod error;

pub use types::*;
pub use error::AppError;
