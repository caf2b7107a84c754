//! # Meridian Core - Domain Module
//! 
//! Domain entities for location check-ins.

pub mod alert;
pub mod checkin;
pub mod family_member;
pub mod named_place;

// Re-export all entities
pub use alert::AlertState;
pub use checkin::{Checkin, CheckinRequest, CheckinView, CheckinWithMember, NewCheckin};
pub use family_member::{photo_url_for, FamilyMember};
pub use named_place::NamedPlace;
