//! On-disk lyrics cache
//!
//! One JSON record per track, keyed by a hash of (title, artist, album).
//! Records never expire; a negative record remembers that a track has no
//! usable lyrics so the provider is not asked again.
//!
//! # Layout
//!
//! | File | Purpose |
//! |------|---------|
//! | `<key>.json` | Persisted [`CacheRecord`] |
//! | `<key>.lock` | Advisory lock guarding the record's read-modify-write |
//!
//! # Locking
//!
//! [`CacheStore`] does no locking of its own. Callers take the per-key
//! [`CacheLock`] before `get` and hold it until any resulting `put`
//! has finished, so concurrent processes asking for the same track fetch
//! it from the network at most once.

pub mod key;
pub mod lock;
pub mod record;
pub mod store;

pub use key::CacheKey;
pub use lock::CacheLock;
pub use record::CacheRecord;
pub use store::CacheStore;
