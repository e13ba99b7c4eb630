//! This crate provides the core business logic for the IAM access audit:
//! - streaming ingestion and emission of comma-separated user inventories
//! - per-user IAM lookups (inline policies, attached policies, groups)
//! - aggregation of the results into derived CSV columns
//!

pub mod api;
pub mod aws;
mod csv;
mod enrichment;
mod errors;

// Re-exports for a small, focused public API
pub use api::enrich_users;
pub use api::model::{EnrichUsersConfig, EnrichUsersSummary, ROOT_ACCOUNT_SENTINEL};
pub use aws::iam::AwsIamClient;
pub use aws::AwsError;
pub use enrichment::{collect_user_access, PolicySource, UserAccess};
pub use errors::AuditError;
