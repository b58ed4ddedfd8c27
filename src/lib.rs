//! # rolegate
//!
//! Role and permission authorization checks with wildcard matching and
//! require-all / require-any semantics.
//!
//! ## Features
//!
//! - **Pluggable checker strategies** sharing one contract: a query-based
//!   checker that counts against the store per call, and a cached checker
//!   holding a TTL-bounded snapshot
//! - **Wildcard permissions** with SQL LIKE semantics (`posts.*`)
//! - **Require-all / require-any** quantification over requested names
//! - **Async-first design** with an injected, backend-agnostic permission
//!   store port
//!
//! ## Example
//!
//! ```rust
//! use std::sync::Arc;
//! use rolegate::{CheckerConfig, InMemoryPermissionStore, Role};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let store = Arc::new(InMemoryPermissionStore::new());
//!     store.attach("editor", "posts.create").await;
//!     store.attach("editor", "posts.publish").await;
//!
//!     let role = Role::new("editor", store, &CheckerConfig::default());
//!
//!     assert!(role.has_permission("posts.create", false).await?);
//!     assert!(role.has_permission("posts.*", false).await?);
//!     assert!(role.has_permission(["posts.create", "posts.publish"], true).await?);
//!     assert!(!role.has_permission(["posts.create", "posts.delete"], true).await?);
//!
//!     Ok(())
//! }
//! ```

pub mod checker;
pub mod error;
pub mod matcher;
pub mod role;
pub mod store;
pub mod types;

// Re-export commonly used types
pub use checker::{CachedChecker, CheckerConfig, CheckerStrategy, QueryChecker, RoleChecker};
pub use error::{PermissionError, Result};
pub use role::Role;
pub use store::{InMemoryPermissionStore, RolePermissionStore};
pub use types::{MatchPartition, PermissionName, PermissionSpec, RoleId, WILDCARD};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
