//! # mindmate-core
//!
//! Core library for MindMate - an AI mental-health companion.
//!
//! This library provides:
//! - Domain types for chat exchanges, journal entries, and session context
//! - SQLite storage for the chat log, journal log, and settings
//! - A pure mood analytics engine (positivity, streaks, trends, check-ins)
//! - The practice catalog (mindfulness exercises and yoga poses)
//! - Configuration management and logging infrastructure
//!
//! ## Architecture
//!
//! The chat and journal logs are append-only; every analytic is a pure
//! function recomputed from a snapshot of those logs. The one piece of
//! persisted engine state is the last check-in date, used to debounce
//! low-mood alerts to once per day.
//!
//! External collaborators (the LLM chat/classification API, speech
//! synthesis, and the interactive UI) are out of scope; they feed records
//! in and present results out through the store and engine APIs.
//!
//! ## Example
//!
//! ```rust,no_run
//! use mindmate_core::{Config, Database};
//!
//! // Load configuration
//! let config = Config::load().expect("failed to load config");
//!
//! // Open database
//! let db = Database::open(&Config::database_path()).expect("failed to open database");
//! db.migrate().expect("failed to run migrations");
//! ```

// Re-export commonly used items at the crate root
pub use config::Config;
pub use db::Database;
pub use error::{Error, Result};
pub use settings::{Settings, SettingsStore};
pub use types::*;

// Public modules
pub mod analytics;
pub mod config;
pub mod db;
pub mod error;
pub mod logging;
pub mod practice;
pub mod settings;
pub mod types;
