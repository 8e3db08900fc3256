//! Snapshot caching and tree publication.

use std::fs;

use route_tree::cache::RouteTreeCache;
use route_tree::lifecycle::{boot, TreeHandle};
use route_tree::tree::TreeError;

mod common;

fn must_not_build(_: &mut route_tree::RouteTreeBuilder) -> route_tree::TreeResult<()> {
    Err(TreeError::NodeNotFound("the cached tree should have been used".into()))
}

#[test]
fn test_boot_stores_then_reuses_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(dir.path());
    let cache = RouteTreeCache::from_config(&config.cache);

    let built = boot(&config, common::translator(), common::define).unwrap();
    assert!(cache.exists());

    let cached = boot(&config, common::translator(), must_not_build).unwrap();
    assert_eq!(cached.routes(), built.routes());
    let team = cached.find("about.team").unwrap();
    assert_eq!(cached.path(team, "de"), Some("de/ueber-uns/mitarbeiter"));
}

#[test]
fn test_snapshot_with_other_settings_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(dir.path());
    boot(&config, common::translator(), common::define).unwrap();

    let mut changed = config.clone();
    changed.routing.no_locale_prefix = true;
    let tree = boot(&changed, common::translator(), common::define).unwrap();
    let team = tree.find("about.team").unwrap();
    assert_eq!(tree.path(team, "en"), Some("about/team"));
}

#[test]
fn test_corrupt_snapshot_is_rebuilt() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(dir.path());
    let cache = RouteTreeCache::from_config(&config.cache);
    fs::write(cache.cached_route_tree_path(), "{\"nodes\": 3").unwrap();

    let tree = boot(&config, common::translator(), common::define).unwrap();
    assert!(!tree.routes().is_empty());
    assert!(cache.load().unwrap().is_some());
}

#[test]
fn test_build_errors_surface() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(dir.path());
    let result = boot(&config, common::translator(), |tree| {
        tree.child_of("missing", "child", |_| Ok(()))?;
        Ok(())
    });
    assert!(result.is_err());
    assert!(!RouteTreeCache::from_config(&config.cache).exists());
}

#[test]
fn test_clear_removes_host_cache_and_snapshot() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(dir.path());
    let cache = RouteTreeCache::from_config(&config.cache);
    boot(&config, common::translator(), common::define).unwrap();
    fs::write(cache.route_cache_path(), "[]").unwrap();

    let report = cache.clear().unwrap();
    assert_eq!(report.removed.len(), 2);
    assert!(!cache.exists());
    assert!(!cache.route_cache_path().exists());
}

#[test]
fn test_handle_rebuild_swaps_tree() {
    let dir = tempfile::tempdir().unwrap();
    let config = common::config_in(dir.path());
    let handle = TreeHandle::new(boot(&config, common::translator(), common::define).unwrap());
    let before = handle.load();

    let previous = handle
        .rebuild(&config, common::translator(), |tree| {
            tree.root_with(|root| {
                root.get("PageController@home");
                Ok(())
            })
        })
        .unwrap();

    assert_eq!(previous.routes(), before.routes());
    assert_eq!(handle.load().len(), 1);
    assert!(before.find("about.team").is_ok());
    assert!(handle.load().find("about.team").is_err());
}
