//! Miras core — domain models, filter compilation, statistics and store
//! ports for the cultural-heritage catalog.
//!
//! This crate knows nothing about HTTP or any concrete storage backend;
//! persistence is reached exclusively through the traits in [`ports`].

pub mod error;
pub mod filter;
pub mod models;
pub mod ports;
pub mod stats;

pub use error::{CatalogError, Result};
