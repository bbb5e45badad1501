//! Category management.

pub mod service;

pub use service::CategoryService;
