//! Infrastructure layer - External systems integration
//!
//! This module handles all external system concerns:
//! - Database connections and repositories
//! - External web service clients

pub mod db;
pub mod repositories;
pub mod webservices;

pub use db::Database;
pub use repositories::{PersonRepository, PersonStore};
pub use webservices::{CitationsApi, CitationsClient};

#[cfg(test)]
pub use repositories::MockPersonRepository;
#[cfg(test)]
pub use webservices::MockCitationsApi;
