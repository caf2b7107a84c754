//! # Meridian Security
//! 
//! Signed session tokens carrying the caller's user and family circle.

pub mod session;

pub use session::{SessionClaims, SessionError, SessionService};
