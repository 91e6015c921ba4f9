//! # innkeep-database
//!
//! PostgreSQL connection management, embedded migrations, and repository
//! implementations for Innkeep.

pub mod connection;
pub mod migration;
pub mod repositories;
