//! IAM Access Audit Core API Interface

mod enrich_users;
pub mod model;

pub use enrich_users::enrich_users;
