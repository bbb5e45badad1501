//! # sheethub-service
//!
//! Business logic service layer for SheetHub. Each service orchestrates
//! repositories, the blob store, and the extractor to implement one
//! application-level use case.
//!
//! Services follow constructor injection: all dependencies are provided
//! at construction time via `Arc` references or cheap clones.

pub mod aggregate;
pub mod category;
pub mod upload;

pub use aggregate::AggregateService;
pub use category::CategoryService;
pub use upload::{UploadParams, UploadService};
