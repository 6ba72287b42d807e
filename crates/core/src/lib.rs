//! Shared primitives for the Star Wars API.
//!
//! Holds the domain error type, id aliases, and payload-shape checks that
//! have no database or HTTP dependencies.

pub mod error;
pub mod payload;
pub mod types;
