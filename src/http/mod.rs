//! Request-line handling.
//!
//! This module covers the parsing side of the pipeline:
//!
//! - **`parser`**: Splits a raw request line into its routable tokens
//! - **`request`**: The parsed (method, path) representation handed to the router
//!
//! Only the request line is understood here. Headers, bodies, and the rest
//! of the HTTP protocol are out of scope for this crate.

pub mod parser;
pub mod request;
