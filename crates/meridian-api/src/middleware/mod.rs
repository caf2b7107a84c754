//! Request middleware and extractors

pub mod access_guard;

pub use access_guard::{access_guard, resolve_identity, Authenticated, TenantScope};
