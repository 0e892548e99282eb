//! Outbound web service clients.

mod citations_client;

pub use citations_client::{CitationsApi, CitationsClient};

#[cfg(test)]
pub use citations_client::MockCitationsApi;
