//! Read-only aggregate queries.

pub mod service;

pub use service::AggregateService;
