//! Core role and permission types

use serde::{Deserialize, Serialize};

/// Unique role identifier
pub type RoleId = String;

/// Permission identifier. Opaque to this crate; a requested name containing
/// [`WILDCARD`] is matched as a pattern instead of by equality.
pub type PermissionName = String;

/// Marker character that turns a requested permission name into a wildcard
/// pattern (e.g. `"posts.*"`).
pub const WILDCARD: char = '*';

/// A requested permission specification: a single name or an ordered list.
///
/// The serialized form is exactly the caller-facing shape, so `"admin"` and
/// `["posts.read", "posts.write"]` both deserialize directly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PermissionSpec {
    /// A single permission name
    One(PermissionName),

    /// An ordered list of permission names
    Many(Vec<PermissionName>),
}

impl PermissionSpec {
    /// True for the empty string and the empty list.
    ///
    /// An empty requirement is trivially satisfied by every role, so the
    /// checkers short-circuit on it before touching the store.
    pub fn is_empty(&self) -> bool {
        match self {
            Self::One(name) => name.is_empty(),
            Self::Many(names) => names.is_empty(),
        }
    }

    /// Normalize to an ordered list of names.
    ///
    /// A single name becomes a one-element list; lists pass through with
    /// order and duplicates intact. Never fails.
    pub fn names(&self) -> Vec<PermissionName> {
        match self {
            Self::One(name) => vec![name.clone()],
            Self::Many(names) => names.clone(),
        }
    }
}

impl From<&str> for PermissionSpec {
    fn from(name: &str) -> Self {
        Self::One(name.to_string())
    }
}

impl From<String> for PermissionSpec {
    fn from(name: String) -> Self {
        Self::One(name)
    }
}

impl From<Vec<String>> for PermissionSpec {
    fn from(names: Vec<String>) -> Self {
        Self::Many(names)
    }
}

impl From<Vec<&str>> for PermissionSpec {
    fn from(names: Vec<&str>) -> Self {
        Self::Many(names.into_iter().map(String::from).collect())
    }
}

impl<const N: usize> From<[&str; N]> for PermissionSpec {
    fn from(names: [&str; N]) -> Self {
        Self::Many(names.into_iter().map(String::from).collect())
    }
}

/// Requested names split into wildcard patterns and exact names for one
/// evaluation. Relative order and duplicates are preserved within each group.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchPartition {
    /// Names containing the wildcard marker, matched as patterns
    pub wildcard: Vec<PermissionName>,

    /// Plain names, matched by equality
    pub exact: Vec<PermissionName>,
}

impl MatchPartition {
    /// Classify each name in input order as a wildcard pattern or an exact
    /// name. Total over arbitrary strings.
    pub fn from_names(names: &[PermissionName]) -> Self {
        let mut partition = Self::default();

        for name in names {
            if name.contains(WILDCARD) {
                partition.wildcard.push(name.clone());
            } else {
                partition.exact.push(name.clone());
            }
        }

        partition
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spec_emptiness() {
        assert!(PermissionSpec::from("").is_empty());
        assert!(PermissionSpec::from(Vec::<String>::new()).is_empty());
        assert!(!PermissionSpec::from("posts.read").is_empty());
        assert!(!PermissionSpec::from(vec![""]).is_empty());
    }

    #[test]
    fn test_spec_normalization() {
        assert_eq!(PermissionSpec::from("a").names(), vec!["a"]);

        // Order and duplicates survive normalization
        let spec = PermissionSpec::from(vec!["b", "a", "b"]);
        assert_eq!(spec.names(), vec!["b", "a", "b"]);
    }

    #[test]
    fn test_spec_deserializes_from_string_or_list() {
        let one: PermissionSpec = serde_json::from_str(r#""admin""#).unwrap();
        assert_eq!(one, PermissionSpec::from("admin"));

        let many: PermissionSpec = serde_json::from_str(r#"["a", "b"]"#).unwrap();
        assert_eq!(many, PermissionSpec::from(vec!["a", "b"]));
    }

    #[test]
    fn test_partition_preserves_order_and_duplicates() {
        let names: Vec<PermissionName> = ["posts.*", "users.read", "posts.*", "users.read"]
            .into_iter()
            .map(String::from)
            .collect();

        let partition = MatchPartition::from_names(&names);
        assert_eq!(partition.wildcard, vec!["posts.*", "posts.*"]);
        assert_eq!(partition.exact, vec!["users.read", "users.read"]);
    }

    #[test]
    fn test_partition_empty_input() {
        let partition = MatchPartition::from_names(&[]);
        assert!(partition.wildcard.is_empty());
        assert!(partition.exact.is_empty());
    }
}
