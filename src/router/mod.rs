//! Route table matching
//!
//! This module implements the routing core: an ordered route table scanned
//! in registration order, with single path-segment parameter capture
//! (pattern segments beginning with `:`).

pub mod matcher;
pub mod route;

pub use matcher::{RouteMatch, find_match, resolve};
pub use route::{Route, RouteTable};
