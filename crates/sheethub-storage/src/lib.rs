//! # sheethub-storage
//!
//! Blob storage for uploaded spreadsheets. Raw uploads land on the local
//! filesystem under a per-category directory.

pub mod naming;
pub mod providers;

pub use naming::upload_path;
pub use providers::LocalBlobStore;
