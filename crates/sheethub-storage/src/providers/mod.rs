//! Blob store implementations.

pub mod local;

pub use local::LocalBlobStore;
