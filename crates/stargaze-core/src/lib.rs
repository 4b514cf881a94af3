//! # Stargaze Core
//!
//! The domain layer of the observation feed.
//! This crate contains pure business logic with zero infrastructure dependencies:
//! the observation entity, the feed query engine, like toggling and draft validation.

pub mod domain;
pub mod error;
pub mod feed;
pub mod ports;

pub use error::DomainError;
