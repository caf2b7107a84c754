//! # Meridian API
//! 
//! HTTP handlers, the access guard, DTOs, and the router for the location
//! check-in service.

pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod response;
pub mod router;
pub mod state;

pub use error::ApiError;
pub use router::{build_router, cors_layer};
pub use state::AppState;
