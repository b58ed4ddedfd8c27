//! Property tests for the permission resolution algorithm

use proptest::prelude::*;
use rolegate::{CheckerConfig, CheckerStrategy, InMemoryPermissionStore, Role};
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

fn name() -> impl Strategy<Value = String> {
    // Small alphabet so requested and granted names actually collide
    prop::sample::select(vec!["alpha", "beta", "gamma", "delta", "epsilon"])
        .prop_map(String::from)
}

fn names(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(name(), 0..max)
}

fn role_with(granted: &[String], strategy: CheckerStrategy) -> Role {
    let store = Arc::new(InMemoryPermissionStore::new());
    tokio_test::block_on(store.attach_all("role", granted.iter().cloned()));

    let config = CheckerConfig {
        strategy,
        cache_ttl: Duration::from_secs(600),
    };
    Role::new("role", store, &config)
}

proptest! {
    #[test]
    fn prop_empty_requirement_is_always_granted(
        granted in names(5),
        require_all in any::<bool>(),
    ) {
        let role = role_with(&granted, CheckerStrategy::Query);

        prop_assert!(tokio_test::block_on(role.has_permission("", require_all)).unwrap());
        prop_assert!(
            tokio_test::block_on(role.has_permission(Vec::<String>::new(), require_all)).unwrap()
        );
    }

    #[test]
    fn prop_any_semantics_is_set_intersection(
        granted in names(5),
        requested in prop::collection::vec(name(), 1..4),
    ) {
        let role = role_with(&granted, CheckerStrategy::Query);
        let result =
            tokio_test::block_on(role.has_permission(requested.clone(), false)).unwrap();

        let granted: HashSet<_> = granted.iter().collect();
        let expected = requested.iter().any(|name| granted.contains(name));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_all_semantics_is_coverage_for_distinct_requests(
        granted in names(5),
        requested in prop::collection::hash_set(name(), 1..4),
    ) {
        let requested: Vec<String> = requested.into_iter().collect();
        let role = role_with(&granted, CheckerStrategy::Query);
        let result =
            tokio_test::block_on(role.has_permission(requested.clone(), true)).unwrap();

        let granted: HashSet<_> = granted.iter().collect();
        let expected = requested.iter().all(|name| granted.contains(name));
        prop_assert_eq!(result, expected);
    }

    #[test]
    fn prop_single_name_equals_one_element_list(
        granted in names(5),
        requested in name(),
        require_all in any::<bool>(),
    ) {
        let role = role_with(&granted, CheckerStrategy::Query);

        let as_single =
            tokio_test::block_on(role.has_permission(requested.clone(), require_all)).unwrap();
        let as_list =
            tokio_test::block_on(role.has_permission(vec![requested], require_all)).unwrap();
        prop_assert_eq!(as_single, as_list);
    }

    #[test]
    fn prop_strategies_agree(
        granted in names(5),
        requested in prop::collection::vec(name(), 1..4),
        require_all in any::<bool>(),
    ) {
        let query = role_with(&granted, CheckerStrategy::Query);
        let cached = role_with(&granted, CheckerStrategy::Cached);

        let query_result =
            tokio_test::block_on(query.has_permission(requested.clone(), require_all)).unwrap();
        let cached_result =
            tokio_test::block_on(cached.has_permission(requested, require_all)).unwrap();
        prop_assert_eq!(query_result, cached_result);
    }
}
