pub mod analytics;
pub mod commands;
pub mod config;
pub mod contracts;
mod destination;
pub mod enrichment;
pub mod error;
pub mod export;
pub mod ingest;
pub mod report;

pub use contracts::envelope::{ErrorContract, SuccessEnvelope, error_contract};
pub use error::{AnalyticsError, AnalyticsResult};
pub use ingest::Transaction;

/// Version of the JSON result contract, independent of the crate version.
pub const API_VERSION: &str = "v1";
