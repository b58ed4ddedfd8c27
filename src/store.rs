//! Role permission storage port and in-memory backend

use crate::error::Result;
use crate::matcher::like_match;
use crate::types::{PermissionName, RoleId};
use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

/// Read-side port over a role's granted permissions.
///
/// Implementations are free to back this with an ORM, a SQL pool, or an
/// in-memory map; the checkers only ever read through this trait and never
/// mutate role state.
#[async_trait]
pub trait RolePermissionStore: Send + Sync {
    /// Count the role's granted permissions equal to any exact name or
    /// matching any wildcard pattern.
    ///
    /// Corresponds to a single filtered count query, `WHERE name IN (exact)
    /// OR name LIKE pattern OR ...`. Each granted permission counts once
    /// even when it satisfies several requested criteria.
    async fn count_matching(
        &self,
        role: &RoleId,
        exact: &[PermissionName],
        wildcard: &[PermissionName],
    ) -> Result<u64>;

    /// Every permission name currently granted to the role.
    async fn granted_permissions(&self, role: &RoleId) -> Result<Vec<PermissionName>>;
}

/// In-memory store backed by a read-write locked map.
///
/// Grants are attached and detached here; the checkers see them through the
/// [`RolePermissionStore`] reads only.
pub struct InMemoryPermissionStore {
    grants: RwLock<HashMap<RoleId, HashSet<PermissionName>>>,
}

impl InMemoryPermissionStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            grants: RwLock::new(HashMap::new()),
        }
    }

    /// Grant a permission to a role
    pub async fn attach(&self, role: impl Into<RoleId>, permission: impl Into<PermissionName>) {
        let mut grants = self.grants.write().await;
        grants
            .entry(role.into())
            .or_default()
            .insert(permission.into());
    }

    /// Grant several permissions to a role
    pub async fn attach_all<I, P>(&self, role: impl Into<RoleId>, permissions: I)
    where
        I: IntoIterator<Item = P>,
        P: Into<PermissionName>,
    {
        let mut grants = self.grants.write().await;
        let granted = grants.entry(role.into()).or_default();
        for permission in permissions {
            granted.insert(permission.into());
        }
    }

    /// Revoke a permission from a role
    pub async fn detach(&self, role: &str, permission: &str) {
        let mut grants = self.grants.write().await;
        if let Some(granted) = grants.get_mut(role) {
            granted.remove(permission);
        }
    }
}

impl Default for InMemoryPermissionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RolePermissionStore for InMemoryPermissionStore {
    async fn count_matching(
        &self,
        role: &RoleId,
        exact: &[PermissionName],
        wildcard: &[PermissionName],
    ) -> Result<u64> {
        let grants = self.grants.read().await;

        let Some(granted) = grants.get(role) else {
            return Ok(0);
        };

        let count = granted
            .iter()
            .filter(|name| {
                exact.iter().any(|e| e == *name)
                    || wildcard.iter().any(|pattern| like_match(pattern, name))
            })
            .count();

        Ok(count as u64)
    }

    async fn granted_permissions(&self, role: &RoleId) -> Result<Vec<PermissionName>> {
        let grants = self.grants.read().await;

        Ok(grants
            .get(role)
            .map(|granted| granted.iter().cloned().collect())
            .unwrap_or_default())
    }
}
