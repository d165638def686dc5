//! This module contains all the sqlx structs for the database tables.

/// sqlx structs for the post table.
pub mod post;
