use aws_sdk_sts::Client as StsClient;

use crate::aws::{AwsError, AwsResult};

/// Return the current caller account ID using STS GetCallerIdentity.
///
/// The pipeline records which account an audit run read its data from;
/// the lookup itself grants nothing and reads nothing from IAM.
///
/// # Arguments
///
/// * `client` - STS client to use for the API call
pub async fn caller_account_id(client: &StsClient) -> AwsResult<String> {
    let identity = client
        .get_caller_identity()
        .send()
        .await
        .map_err(|e| AwsError::SdkError(format!("STS GetCallerIdentity failed: {}", e)))?;
    identity
        .account()
        .map(str::to_string)
        .ok_or_else(|| AwsError::SdkError("STS GetCallerIdentity returned no Account".to_string()))
}
