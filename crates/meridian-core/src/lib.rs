//! # Meridian Core
//! 
//! Domain entities, repository ports, geofencing, and the location check-in
//! services. Every operation here is scoped by an explicit [`AuthContext`].

pub mod auth;
pub mod domain;
pub mod error;
pub mod repositories;
pub mod services;

// Re-export domain entities
pub use auth::{AuthContext, IdentitySource};
pub use domain::*;
pub use error::DomainError;
