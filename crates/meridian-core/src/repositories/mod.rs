//! Repository traits (ports)

pub mod alert_repository;
pub mod checkin_repository;
pub mod family_member_repository;
pub mod named_place_repository;

pub use alert_repository::AlertRepository;
pub use checkin_repository::CheckinRepository;
pub use family_member_repository::FamilyMemberRepository;
pub use named_place_repository::NamedPlaceRepository;

#[cfg(test)]
pub use alert_repository::MockAlertRepository;
#[cfg(test)]
pub use checkin_repository::MockCheckinRepository;
#[cfg(test)]
pub use family_member_repository::MockFamilyMemberRepository;
#[cfg(test)]
pub use named_place_repository::MockNamedPlaceRepository;
