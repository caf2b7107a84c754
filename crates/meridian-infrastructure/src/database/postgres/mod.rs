//! PostgreSQL repository implementations

pub mod alert_repo_impl;
pub mod checkin_repo_impl;
pub mod family_member_repo_impl;
pub mod named_place_repo_impl;

pub use alert_repo_impl::PgAlertRepository;
pub use checkin_repo_impl::PgCheckinRepository;
pub use family_member_repo_impl::PgFamilyMemberRepository;
pub use named_place_repo_impl::PgNamedPlaceRepository;
