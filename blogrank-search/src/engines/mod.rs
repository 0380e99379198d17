//! Search backend implementations.
//!
//! Each module provides a struct implementing [`crate::engine::OrganicSearch`]
//! against a specific search API.

pub mod serper;

pub use serper::SerperEngine;
