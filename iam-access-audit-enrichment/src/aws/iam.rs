use async_trait::async_trait;
use aws_sdk_iam::Client as IamClient;

use crate::aws::{AwsError, AwsResult};
use crate::enrichment::PolicySource;

/// Client to call the AWS IAM list APIs used during enrichment.
///
/// Each lookup issues exactly one call and returns the first page; a
/// truncated listing is not followed.
pub struct AwsIamClient {
    pub(crate) client: IamClient,
}

/// Impl for AWS IAM client wrapper
impl AwsIamClient {
    /// New construct
    pub fn new(client: IamClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl PolicySource for AwsIamClient {
    async fn user_policy_names(&self, user_name: &str) -> AwsResult<Vec<String>> {
        let out = self
            .client
            .list_user_policies()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "ListUserPolicies failed for user '{}': {}",
                    user_name, e
                ))
            })?;
        Ok(out.policy_names().to_vec())
    }

    async fn attached_user_policy_names(&self, user_name: &str) -> AwsResult<Vec<String>> {
        let out = self
            .client
            .list_attached_user_policies()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "ListAttachedUserPolicies failed for user '{}': {}",
                    user_name, e
                ))
            })?;
        // PolicyName is optional in the model; entries without one are
        // dropped rather than surfaced as empty strings.
        Ok(out
            .attached_policies()
            .iter()
            .filter_map(|p| p.policy_name().map(str::to_string))
            .collect())
    }

    async fn group_names_for_user(&self, user_name: &str) -> AwsResult<Vec<String>> {
        let out = self
            .client
            .list_groups_for_user()
            .user_name(user_name)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "ListGroupsForUser failed for user '{}': {}",
                    user_name, e
                ))
            })?;
        Ok(out
            .groups()
            .iter()
            .map(|g| g.group_name().to_string())
            .collect())
    }

    async fn group_policy_names(&self, group_name: &str) -> AwsResult<Vec<String>> {
        let out = self
            .client
            .list_group_policies()
            .group_name(group_name)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "ListGroupPolicies failed for group '{}': {}",
                    group_name, e
                ))
            })?;
        Ok(out.policy_names().to_vec())
    }

    async fn attached_group_policy_names(&self, group_name: &str) -> AwsResult<Vec<String>> {
        let out = self
            .client
            .list_attached_group_policies()
            .group_name(group_name)
            .send()
            .await
            .map_err(|e| {
                AwsError::IamError(format!(
                    "ListAttachedGroupPolicies failed for group '{}': {}",
                    group_name, e
                ))
            })?;
        Ok(out
            .attached_policies()
            .iter()
            .filter_map(|p| p.policy_name().map(str::to_string))
            .collect())
    }
}
