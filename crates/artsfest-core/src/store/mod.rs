//! Local persistence for festival data.
//!
//! Every collection is stored as one JSON document under a fixed key and is
//! rewritten whole on each change. The layering is:
//!
//! - `StorageBackend`: where the text lives (`FileBackend` on disk,
//!   `MemoryBackend` in-process)
//! - `KeyValueStore`: JSON encode/decode with default-on-failure semantics
//! - `FestivalStore`: one typed load/save pair per collection
//!
//! There are no transactions and no locking across keys; the last writer wins.

pub mod backend;
pub mod keys;
pub mod kv;
pub mod repository;

pub use backend::{FileBackend, MemoryBackend, StorageBackend};
pub use keys::StoreKey;
pub use kv::KeyValueStore;
pub use repository::{FestivalStore, DEFAULT_ADMIN_PASSWORD, DEFAULT_GRADES};
