//! Domain layer - Core directory entities and logic
//!
//! Plain types for people and citations, independent of the database
//! and web service representations they are loaded from.

pub mod citation;
pub mod person;

pub use citation::{group_by_year, Author, Citation, CitationsEnvelope, YearGroup};
pub use person::{Membership, Person, Role};
