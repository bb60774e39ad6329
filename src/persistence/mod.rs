//! Save/load persistence
//!
//! Features:
//! - Versioned JSON envelope
//! - Backup rotation (tmp → save, old save → backup)
//! - Corruption detection with fallback to the backup

pub mod envelope;

pub use envelope::{Envelope, FORMAT_VERSION, PersistenceError, load_json, save_json};
