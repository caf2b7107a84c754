//! # Meridian Infrastructure
//! 
//! PostgreSQL adapters for the core repository ports.

pub mod database;

pub use database::{
    create_pool, run_migrations, PgAlertRepository, PgCheckinRepository,
    PgFamilyMemberRepository, PgNamedPlaceRepository,
};
