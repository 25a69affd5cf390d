//! Common library exports shared between frontend and backend.

extern crate serde;


pub mod catalog;
pub mod facet_selection;
pub mod filter_codec;
pub mod facet_catalog;
pub mod pricing;
pub mod list_query;
pub mod list_const;
