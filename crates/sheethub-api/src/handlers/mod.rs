//! Route handlers organized by domain.

pub mod aggregate;
pub mod category;
pub mod health;
pub mod upload;
