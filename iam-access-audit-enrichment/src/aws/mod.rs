//! AWS SDK integration: IAM list-call wrappers and STS identity lookup.

/// IAM list calls
pub mod iam;

/// sts calls
pub mod sts;

use thiserror::Error;

#[derive(Error, Debug)]
/// AWS Errors from AWS SDK calls
pub enum AwsError {
    #[error("IAM client error: {0}")]
    /// errors from calls to AWS IAM
    IamError(String),
    #[error("AWS SDK error: {0}")]
    /// errors from SDK output
    SdkError(String),
}

/// Type of AWS Result extending Result
pub type AwsResult<T> = Result<T, AwsError>;
