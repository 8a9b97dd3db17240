//! HTTP handlers, grouped per entity.

pub mod product;
