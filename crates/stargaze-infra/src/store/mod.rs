//! Observation and profile storage.

pub mod fixtures;
mod memory;
mod profile;

pub use memory::InMemoryObservationStore;
pub use profile::InMemoryProfileStore;
