//! Storage layer for NovaMatch local files.
//!
//! - `session_storage`: file-backed durable storage for the signed-in profile

pub mod session_storage;

pub use session_storage::FileSessionStorage;
