//! Per-user aggregation of IAM policy and group lookups.

use async_trait::async_trait;
use log::debug;

use crate::aws::AwsResult;

/// Separator used when concatenating policy or group names into one field.
pub(crate) const NAME_SEPARATOR: &str = ";";

/// Literal written to the `role_names` column until role enumeration lands.
pub(crate) const ROLE_NAMES_PLACEHOLDER: &str = "not_implemented";

/// Read-side IAM lookups needed to enrich one user.
///
/// Implementations must coalesce absent response collections to empty
/// vectors; callers never see a missing list.
#[async_trait]
pub trait PolicySource {
    /// Inline policy names embedded in the user.
    async fn user_policy_names(&self, user_name: &str) -> AwsResult<Vec<String>>;

    /// Managed policy names attached to the user.
    async fn attached_user_policy_names(&self, user_name: &str) -> AwsResult<Vec<String>>;

    /// Names of the groups the user belongs to, in membership order.
    async fn group_names_for_user(&self, user_name: &str) -> AwsResult<Vec<String>>;

    /// Inline policy names embedded in a group.
    async fn group_policy_names(&self, group_name: &str) -> AwsResult<Vec<String>>;

    /// Managed policy names attached to a group.
    async fn attached_group_policy_names(&self, group_name: &str) -> AwsResult<Vec<String>>;
}

/// Aggregated access details for one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserAccess {
    /// Policy names in collection order: user inline, user attached, then
    /// per-group inline and attached following group membership order.
    /// Duplicates are kept as returned.
    pub policy_names: Vec<String>,
    /// Group names in membership order.
    pub group_names: Vec<String>,
}

impl UserAccess {
    /// Semicolon-joined policy names; empty string when there are none.
    pub fn joined_policy_names(&self) -> String {
        self.policy_names.join(NAME_SEPARATOR)
    }

    /// Semicolon-joined group names; empty string when there are none.
    pub fn joined_group_names(&self) -> String {
        self.group_names.join(NAME_SEPARATOR)
    }
}

/// Collect every policy and group name visible for `user_name`.
///
/// One call per lookup category, strictly sequential; the group lookups run
/// once per group the user belongs to. The first failed lookup aborts the
/// whole collection.
pub async fn collect_user_access<S: PolicySource>(
    source: &S,
    user_name: &str,
) -> AwsResult<UserAccess> {
    let mut policy_names = source.user_policy_names(user_name).await?;
    policy_names.extend(source.attached_user_policy_names(user_name).await?);

    let group_names = source.group_names_for_user(user_name).await?;
    for group_name in &group_names {
        policy_names.extend(source.group_policy_names(group_name).await?);
        policy_names.extend(source.attached_group_policy_names(group_name).await?);
    }

    debug!(
        "Collected {} policy names and {} group names for user '{}'",
        policy_names.len(),
        group_names.len(),
        user_name
    );

    Ok(UserAccess {
        policy_names,
        group_names,
    })
}

#[cfg(test)]
pub(crate) mod stub {
    //! In-memory `PolicySource` used by unit tests.

    use std::collections::HashMap;

    use async_trait::async_trait;

    use super::PolicySource;
    use crate::aws::{AwsError, AwsResult};

    type NameMap = HashMap<String, Vec<String>>;

    #[derive(Debug, Default)]
    pub(crate) struct StubPolicySource {
        pub(crate) user_inline: NameMap,
        pub(crate) user_attached: NameMap,
        pub(crate) user_groups: NameMap,
        pub(crate) group_inline: NameMap,
        pub(crate) group_attached: NameMap,
        /// User name whose lookups fail, to exercise abort paths.
        pub(crate) failing_user: Option<String>,
    }

    fn names(map: &NameMap, key: &str) -> Vec<String> {
        map.get(key).cloned().unwrap_or_default()
    }

    pub(crate) fn name_map(entries: &[(&str, &[&str])]) -> NameMap {
        entries
            .iter()
            .map(|(key, values)| {
                (
                    key.to_string(),
                    values.iter().map(|v| v.to_string()).collect(),
                )
            })
            .collect()
    }

    #[async_trait]
    impl PolicySource for StubPolicySource {
        async fn user_policy_names(&self, user_name: &str) -> AwsResult<Vec<String>> {
            if self.failing_user.as_deref() == Some(user_name) {
                return Err(AwsError::IamError(format!(
                    "ListUserPolicies failed for user '{}': stubbed failure",
                    user_name
                )));
            }
            Ok(names(&self.user_inline, user_name))
        }

        async fn attached_user_policy_names(&self, user_name: &str) -> AwsResult<Vec<String>> {
            Ok(names(&self.user_attached, user_name))
        }

        async fn group_names_for_user(&self, user_name: &str) -> AwsResult<Vec<String>> {
            Ok(names(&self.user_groups, user_name))
        }

        async fn group_policy_names(&self, group_name: &str) -> AwsResult<Vec<String>> {
            Ok(names(&self.group_inline, group_name))
        }

        async fn attached_group_policy_names(&self, group_name: &str) -> AwsResult<Vec<String>> {
            Ok(names(&self.group_attached, group_name))
        }
    }
}
