//! # Stargaze Shared
//!
//! Wire types shared between the API server and its clients.
//! Kept free of domain types so a browser client can compile it to WASM.

pub mod dto;
pub mod response;

pub use response::{ApiResponse, ErrorResponse};
