//! Spreadsheet upload pipeline.

pub mod service;

pub use service::{UploadParams, UploadService};
