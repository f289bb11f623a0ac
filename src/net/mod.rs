//! Network layer: error normalization, HTTP helpers, wire types, and the
//! typed API surface.

pub mod api;
pub mod error;
pub mod http;
pub mod types;
