pub mod alert;
pub mod health;
pub mod location;
pub mod photo;
pub mod session;
