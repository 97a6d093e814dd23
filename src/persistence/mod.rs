//! Persistence for high score, coin balance and settings
//!
//! Features:
//! - `KeyValueStore` trait with get/set string semantics
//! - In-memory store (tests, headless runs)
//! - JSON file store (tmp file → rename on every write)
//! - `Profile` typed accessors that fall back to defaults on bad data

pub mod profile;
pub mod store;

pub use profile::Profile;
pub use store::{FileStore, KeyValueStore, MemoryStore, Result, StorageError};
