//! Application services layer - Use cases.
//!
//! Services load directory data through repositories and web service
//! clients and hand it to the renderers. They depend on abstractions
//! (traits) for dependency inversion.

mod citation_service;
pub mod container;
mod directory_service;

// Service Container
pub use container::{ServiceContainer, Services};

// Service traits and implementations
pub use citation_service::{CitationManager, CitationService};
pub use directory_service::{DirectoryManager, DirectoryService};
