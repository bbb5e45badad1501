//! Core type definitions used across the SheetHub workspace.

pub mod id;

pub use id::*;
