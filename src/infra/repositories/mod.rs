//! Repository layer - Data access abstraction
//!
//! Repositories provide an abstraction over the read-only directory
//! schema, following the Repository pattern for clean separation of concerns.

pub(crate) mod entities;
mod person_repository;

pub use person_repository::{PersonRepository, PersonStore};

#[cfg(test)]
pub use person_repository::MockPersonRepository;
