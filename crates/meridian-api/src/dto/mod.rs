pub mod alert;
pub mod checkin;
pub mod session;

pub use alert::SetAlertRequest;
pub use checkin::CreateCheckinBody;
pub use session::LoginRequest;
