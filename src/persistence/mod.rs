//! Snapshot persistence.
//!
//! The engine never touches storage itself. It hands out a
//! [`GameSnapshot`] and accepts one back; stores move snapshots to and
//! from durable storage under a fixed key.

pub mod error;
pub mod snapshot;
pub mod store;

pub use error::SnapshotError;
pub use snapshot::{GameSnapshot, SnapshotFormat};
pub use store::{load_engine, FileStore, MemoryStore, SnapshotStore, STORAGE_KEY};
