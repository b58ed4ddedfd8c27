//! Role facade binding a permission store to a checker strategy

use crate::checker::{make_checker, CheckerConfig, RoleChecker};
use crate::error::Result;
use crate::store::RolePermissionStore;
use crate::types::PermissionSpec;
use std::sync::Arc;

/// A role plus the checker strategy used to answer its permission queries.
///
/// The strategy is selected explicitly through the config passed at
/// construction; nothing here reads ambient global configuration. The store
/// reference is immutable after construction, so a `Role` can be shared
/// across tasks and checked concurrently.
pub struct Role {
    name: String,
    checker: Arc<dyn RoleChecker>,
}

impl Role {
    /// Create a role backed by `store`, checked with the configured strategy
    pub fn new(
        name: impl Into<String>,
        store: Arc<dyn RolePermissionStore>,
        config: &CheckerConfig,
    ) -> Self {
        let name = name.into();
        let checker = make_checker(name.clone(), store, config);

        Self { name, checker }
    }

    /// Role name, also the store key for its grants
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Check the requested permissions against this role's grants.
    ///
    /// Accepts a single name or a list; `role.has_permission("x", all)` and
    /// `role.has_permission(["x"], all)` are equivalent.
    pub async fn has_permission(
        &self,
        spec: impl Into<PermissionSpec>,
        require_all: bool,
    ) -> Result<bool> {
        self.checker.has_permission(&spec.into(), require_all).await
    }

    /// Drop any checker-held cache for this role. Never fails.
    pub async fn flush_cache(&self) {
        self.checker.flush_cache().await
    }
}
