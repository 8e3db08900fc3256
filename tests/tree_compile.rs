//! Compilation of the sample tree: paths, actions and host registrations.

use route_tree::tree::{Handler, Method, RouteRegistration};

mod common;

fn route<'a>(routes: &'a [RouteRegistration], name: &str) -> &'a RouteRegistration {
    routes
        .iter()
        .find(|r| r.name == name)
        .unwrap_or_else(|| panic!("no route named {name}"))
}

#[test]
fn test_nested_path_per_locale() {
    let tree = common::sample_tree();
    let team = tree.find("about.team").unwrap();
    assert_eq!(tree.path(team, "en"), Some("en/about/team"));
    assert_eq!(tree.path(team, "de"), Some("de/ueber-uns/mitarbeiter"));
    assert_eq!(tree.node(team).content_lang_file(), "pages/about/team");
}

#[test]
fn test_root_path_is_the_locale() {
    let tree = common::sample_tree();
    assert_eq!(tree.path(tree.root(), "en"), Some("en"));
    assert_eq!(route(tree.routes(), "en.get").path, "/en");
}

#[test]
fn test_no_locale_prefix_collapses_to_default_locale() {
    let tree = common::sample_tree();
    let legal = tree.find("legal").unwrap();
    assert_eq!(tree.locales(legal), vec!["en"]);
    assert_eq!(tree.path(legal, "en"), Some("legal"));
    assert_eq!(tree.path(legal, "de"), None);
}

#[test]
fn test_segment_not_inherited() {
    let tree = common::sample_tree();
    let blog = tree.find("blog").unwrap();
    let post = tree.find("blog.post").unwrap();
    assert_eq!(tree.path(blog, "en"), Some("en/blog"));
    assert_eq!(tree.path(post, "en"), Some("en/post"));
}

#[test]
fn test_except_locales() {
    let tree = common::sample_tree();
    let contact = tree.find("contact").unwrap();
    assert!(tree.node(contact).has_locale("en"));
    assert!(!tree.node(contact).has_locale("de"));
    assert!(tree.routes().iter().all(|r| r.name != "de.contact.get"));
}

#[test]
fn test_resource_actions_and_paths() {
    let tree = common::sample_tree();
    let users = tree.by_id("users").unwrap();
    let names: Vec<_> = users.actions().iter().map(|a| a.name()).collect();
    assert_eq!(
        names,
        ["index", "create", "store", "show", "edit", "update", "destroy"]
    );

    let path = |action: &str, locale: &str| users.action(action).unwrap().path(locale).unwrap().to_string();
    assert_eq!(path("index", "en"), "en/users");
    assert_eq!(path("create", "en"), "en/users/create");
    assert_eq!(path("create", "de"), "de/users/erstellen");
    assert_eq!(path("show", "en"), "en/users/{user}");
    assert_eq!(path("edit", "de"), "de/users/{user}/bearbeiten");
    assert_eq!(users.action("update").unwrap().method(), Method::Put);
    assert_eq!(
        users.action("destroy").unwrap().handler(),
        &Handler::controller("UserController@destroy")
    );
    assert_eq!(users.parameter().unwrap().name(), "user");
}

#[test]
fn test_resource_child_carries_placeholder() {
    let tree = common::sample_tree();
    let posts = tree.find("users.posts").unwrap();
    assert!(tree.node(posts).is_resource_child());
    assert_eq!(tree.path(posts, "en"), Some("en/users/{user}/posts"));
    assert_eq!(route(tree.routes(), "de.users.posts.get").path, "/de/users/{user}/posts");
}

#[test]
fn test_resource_only_keeps_named_actions() {
    let mut builder = route_tree::RouteTreeBuilder::new(
        route_tree::tree::TreeSettings::from_config(&common::config()),
        common::translator(),
    );
    builder
        .root_with(|root| {
            root.child("photos", |photos| {
                photos.resource("photo", "PhotoController").only(&["index", "show"]);
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    let tree = builder.compile();
    let photos = tree.by_id("photos").unwrap();
    let names: Vec<_> = photos.actions().iter().map(|a| a.name()).collect();
    assert_eq!(names, ["index", "show"]);
}

#[test]
fn test_subtree_registered_before_node() {
    let tree = common::sample_tree();
    let position = |name: &str| tree.routes().iter().position(|r| r.name == name).unwrap();
    assert!(position("en.about.team.get") < position("en.about.get"));
    assert!(position("en.users.posts.get") < position("en.users.index"));
    assert_eq!(tree.routes().last().unwrap().node, "");
}

#[test]
fn test_namespace_and_middleware_are_inherited() {
    let tree = common::sample_tree();
    let dashboard = route(tree.routes(), "en.admin.dashboard.get");
    assert_eq!(dashboard.namespace, "admin::controllers");
    assert_eq!(dashboard.middleware.len(), 1);
    assert_eq!(dashboard.middleware[0].name, "auth");

    let team = route(tree.routes(), "en.about.team.get");
    assert_eq!(team.namespace, "app::controllers");
    assert!(team.middleware.is_empty());
}

#[test]
fn test_view_and_redirect_handlers() {
    let tree = common::sample_tree();
    let about = route(tree.routes(), "de.about.get");
    assert!(matches!(&about.handler, Handler::View { view, .. } if view == "about"));
    let legal = route(tree.routes(), "en.legal.get");
    assert_eq!(legal.path, "/legal");
    assert_eq!(
        legal.handler,
        Handler::Redirect {
            destination: "/en/about".into(),
            status: 301
        }
    );
}

#[test]
fn test_rootline_and_parameters() {
    let tree = common::sample_tree();
    let posts = tree.find("users.posts").unwrap();
    let ids: Vec<_> = tree
        .rootline(posts, true)
        .into_iter()
        .map(|n| tree.node(n).id().to_string())
        .collect();
    assert_eq!(ids, ["", "users", "users.posts"]);
    let parameters: Vec<_> = tree.rootline_parameters(posts).iter().map(|p| p.name()).collect();
    assert_eq!(parameters, ["user"]);
}

#[test]
fn test_register_with_collects_everything() {
    let tree = common::sample_tree();
    let mut host: Vec<RouteRegistration> = Vec::new();
    let count = tree.register_with(&mut host);
    assert_eq!(count, tree.routes().len());
    assert_eq!(host, tree.routes());
}

#[test]
fn test_resource_segments_survive_later_prefix_removal() {
    let mut config = common::config();
    config.localization.default_locale = "de".into();
    let mut builder = route_tree::RouteTreeBuilder::new(
        route_tree::tree::TreeSettings::from_config(&config),
        common::translator(),
    );
    builder
        .root_with(|root| {
            root.child("users", |users| {
                users.except_locales(&["de"]);
                users.resource("user", "UserController");
                users.no_locale_prefix();
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    let tree = builder.compile();
    let users = tree.by_id("users").unwrap();

    let path = |action: &str| users.action(action).unwrap().path("de").unwrap().to_string();
    assert_eq!(path("index"), "users");
    assert_eq!(path("create"), "users/erstellen");
    assert_eq!(path("show"), "users/{user}");
    assert_eq!(path("edit"), "users/{user}/bearbeiten");
    assert_eq!(path("destroy"), "users/{user}");
}
