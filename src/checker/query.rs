//! Query-strategy checker: one filtered count per decision

use super::RoleChecker;
use crate::error::Result;
use crate::store::RolePermissionStore;
use crate::types::{MatchPartition, PermissionSpec, RoleId};
use async_trait::async_trait;
use std::sync::Arc;
use tracing::debug;

/// Checker that answers each call with a single filtered count against the
/// store, holding no state between calls beyond the role it was built for.
pub struct QueryChecker {
    role: RoleId,
    store: Arc<dyn RolePermissionStore>,
}

impl QueryChecker {
    /// Create a checker for one role
    pub fn new(role: impl Into<RoleId>, store: Arc<dyn RolePermissionStore>) -> Self {
        Self {
            role: role.into(),
            store,
        }
    }
}

#[async_trait]
impl RoleChecker for QueryChecker {
    /// The `require_all` comparison uses the duplicate-inclusive length of
    /// the normalized request, while the store count is deduplicated by
    /// granted-permission identity. A request that repeats a name, like
    /// `["a", "a"]`, can therefore fail `require_all` even when `a` is
    /// granted.
    async fn has_permission(&self, spec: &PermissionSpec, require_all: bool) -> Result<bool> {
        if spec.is_empty() {
            return Ok(true);
        }

        let names = spec.names();
        let partition = MatchPartition::from_names(&names);

        let matched = self
            .store
            .count_matching(&self.role, &partition.exact, &partition.wildcard)
            .await?;

        debug!(
            "permission check: role={}, requested={}, matched={}, require_all={}",
            self.role,
            names.len(),
            matched,
            require_all
        );

        Ok(if require_all {
            matched >= names.len() as u64
        } else {
            matched > 0
        })
    }

    async fn flush_cache(&self) {}
}
