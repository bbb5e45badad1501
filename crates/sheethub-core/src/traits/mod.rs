//! Core traits defined in `sheethub-core` and implemented by other crates.

pub mod storage;

pub use storage::BlobStore;
