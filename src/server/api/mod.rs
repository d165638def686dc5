//! This module contains the API endpoints for the server.
pub mod pages;
pub mod payments;
pub mod posts;
pub mod routes;
pub mod state;
pub mod utils;
