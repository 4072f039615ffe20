//! Database layer for mindmate
//!
//! This module provides the storage layer using SQLite with:
//! - Schema migrations
//! - Repository pattern for queries
//! - The SQLite-backed settings store

pub mod repo;
pub mod schema;

pub use repo::Database;
