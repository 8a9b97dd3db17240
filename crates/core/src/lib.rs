//! Shared domain types and errors for the catalog service.

pub mod error;
pub mod types;
