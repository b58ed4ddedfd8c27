//! Pluggable permission checker strategies
//!
//! Every strategy implements the same [`RoleChecker`] contract; the variant
//! is selected explicitly through [`CheckerConfig`] at construction time.

pub mod cached;
pub mod query;

pub use cached::CachedChecker;
pub use query::QueryChecker;

use crate::error::Result;
use crate::store::RolePermissionStore;
use crate::types::{PermissionSpec, RoleId};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

/// Which checking strategy a role uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CheckerStrategy {
    /// One filtered count query against the store per decision
    Query,

    /// Decisions evaluated against a TTL-bounded snapshot of the role's
    /// granted permissions
    Cached,
}

/// Checker configuration
#[derive(Debug, Clone)]
pub struct CheckerConfig {
    /// Strategy used to answer permission checks
    pub strategy: CheckerStrategy,

    /// Time-to-live for the cached strategy's permission snapshot
    pub cache_ttl: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            strategy: CheckerStrategy::Query,
            cache_ttl: Duration::from_secs(60),
        }
    }
}

/// Shared contract across checker strategies
#[async_trait]
pub trait RoleChecker: Send + Sync {
    /// Decide whether the role satisfies the requested permissions.
    ///
    /// With `require_all` every requested name must be covered by a granted
    /// permission; otherwise a single match suffices. An empty spec is
    /// trivially satisfied. The only error is a failed store read, forwarded
    /// as-is.
    async fn has_permission(&self, spec: &PermissionSpec, require_all: bool) -> Result<bool>;

    /// Drop any cached role state.
    ///
    /// Never fails. A no-op for strategies that hold no cache; the method
    /// exists so callers can invalidate without knowing the strategy.
    async fn flush_cache(&self);
}

/// Build the checker selected by `config` for one role
pub fn make_checker(
    role: RoleId,
    store: Arc<dyn RolePermissionStore>,
    config: &CheckerConfig,
) -> Arc<dyn RoleChecker> {
    match config.strategy {
        CheckerStrategy::Query => Arc::new(QueryChecker::new(role, store)),
        CheckerStrategy::Cached => Arc::new(CachedChecker::new(role, store, config.cache_ttl)),
    }
}
