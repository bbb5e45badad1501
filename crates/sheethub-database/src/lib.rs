//! # sheethub-database
//!
//! PostgreSQL connection management, the per-request unit of work, and
//! repository implementations for SheetHub entities.

pub mod connection;
pub mod migration;
pub mod repositories;
pub mod unit_of_work;

pub use connection::DatabasePool;
pub use unit_of_work::UnitOfWork;
