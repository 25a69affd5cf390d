//! Server-side proxy to the external product catalog service.

pub mod api;
pub mod remote;
pub mod server_extra;
