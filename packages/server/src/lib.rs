// Salon Directory - API Core
//
// Read-only lookup service over provider listings: random recommendations,
// filtered search and single-listing detail, served as JSON over axum.
//
// Provider records live in the account system's Postgres table and are
// consumed here through the store trait in kernel/traits.rs.

pub mod common;
pub mod config;
pub mod domains;
pub mod kernel;
pub mod server;

pub use config::*;
