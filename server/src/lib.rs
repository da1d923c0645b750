//! Fellowship website server library.
//! This crate exposes internal modules for integration testing.
//! The binary entry point is in main.rs.

pub mod api;
pub mod config;
pub mod error;
pub mod routes;
pub mod state;
pub mod store;
