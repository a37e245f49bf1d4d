//! Core domain and configuration for counsel.
//!
//! This crate holds everything the interface crates share:
//! - **Domain** (`domain`) - the closed industry/category sets and the
//!   per-user `Session` record
//! - **Session Store** (`session`) - keyed selection state behind an
//!   injectable trait, in-memory for now
//! - **Configuration** (`config`) - TOML + environment layering with
//!   fail-fast validation of the startup credentials
//!
//! # Key Types
//!
//! - `Industry` / `Category` - fixed option sets; invalid values are
//!   unrepresentable past the parse boundary
//! - `SessionStore` - atomic per-user read-modify-write
//! - `AppConfig` - validated startup configuration

pub mod config;
pub mod domain;
pub mod session;

pub use config::{AppConfig, ConfigError, ConfigOverrides, LoadOptions, LogFormat};
pub use domain::{Category, Industry, Session};
pub use session::{InMemorySessionStore, SessionStore};
