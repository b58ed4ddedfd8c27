//! Cached-strategy checker with a TTL-bounded permission snapshot

use super::RoleChecker;
use crate::error::Result;
use crate::matcher::like_match;
use crate::store::RolePermissionStore;
use crate::types::{MatchPartition, PermissionName, PermissionSpec, RoleId};
use async_trait::async_trait;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

struct Snapshot {
    permissions: HashSet<PermissionName>,
    cached_at: Instant,
}

impl Snapshot {
    fn new(permissions: HashSet<PermissionName>) -> Self {
        Self {
            permissions,
            cached_at: Instant::now(),
        }
    }

    fn is_expired(&self, ttl: Duration) -> bool {
        self.cached_at.elapsed() > ttl
    }
}

/// Checker that evaluates decisions against an in-memory snapshot of the
/// role's granted permissions, refreshed from the store when the TTL lapses
/// or the cache is flushed.
///
/// Decisions agree with [`super::QueryChecker`] whenever the snapshot is
/// fresh; matching dedups by granted-permission identity the same way.
pub struct CachedChecker {
    role: RoleId,
    store: Arc<dyn RolePermissionStore>,
    ttl: Duration,
    snapshot: RwLock<Option<Snapshot>>,
}

impl CachedChecker {
    /// Create a checker for one role
    pub fn new(role: impl Into<RoleId>, store: Arc<dyn RolePermissionStore>, ttl: Duration) -> Self {
        Self {
            role: role.into(),
            store,
            ttl,
            snapshot: RwLock::new(None),
        }
    }

    async fn granted(&self) -> Result<HashSet<PermissionName>> {
        {
            let guard = self.snapshot.read().await;
            if let Some(snapshot) = guard.as_ref() {
                if !snapshot.is_expired(self.ttl) {
                    return Ok(snapshot.permissions.clone());
                }
            }
        }

        let fresh: HashSet<PermissionName> = self
            .store
            .granted_permissions(&self.role)
            .await?
            .into_iter()
            .collect();

        debug!(
            "permission snapshot refreshed: role={}, granted={}",
            self.role,
            fresh.len()
        );

        let mut guard = self.snapshot.write().await;
        *guard = Some(Snapshot::new(fresh.clone()));

        Ok(fresh)
    }
}

#[async_trait]
impl RoleChecker for CachedChecker {
    async fn has_permission(&self, spec: &PermissionSpec, require_all: bool) -> Result<bool> {
        if spec.is_empty() {
            return Ok(true);
        }

        let names = spec.names();
        let partition = MatchPartition::from_names(&names);
        let granted = self.granted().await?;

        let matched = granted
            .iter()
            .filter(|name| {
                partition.exact.iter().any(|e| e == *name)
                    || partition
                        .wildcard
                        .iter()
                        .any(|pattern| like_match(pattern, name))
            })
            .count() as u64;

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

    async fn flush_cache(&self) {
        let mut guard = self.snapshot.write().await;
        *guard = None;

        debug!("permission snapshot flushed: role={}", self.role);
    }
}
