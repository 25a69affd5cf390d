//! Catalog API route handlers and module exports.

pub mod catalog;
