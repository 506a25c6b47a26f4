//! # Chirp Infrastructure
//!
//! Concrete implementations of the ports defined in `chirp-core`.
//!
//! ## Feature Flags
//!
//! - `postgres` (default) - PostgreSQL persistence via SeaORM
//! - `minimal` - In-memory repositories only

pub mod auth;
pub mod database;

pub use auth::Argon2PasswordService;
pub use database::{DatabaseConnections, InMemoryPostRepository, InMemoryUserRepository};
