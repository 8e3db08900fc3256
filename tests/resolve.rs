//! Request-time queries: URLs, active state, titles and breadcrumbs.

use std::collections::BTreeMap;

use route_tree::resolve::{RequestContext, TitleOptions, UrlOptions};
use route_tree::tree::TreeError;

mod common;

#[test]
fn test_url_prefers_index_then_get() {
    let resolver = common::resolver();
    let ctx = RequestContext::new("en");

    let downloads = common::node(&resolver, "downloads");
    let url = resolver.url(downloads, &UrlOptions::new(), &ctx).unwrap();
    assert_eq!(url.path(), "/en/downloads");

    let users = common::node(&resolver, "users");
    let url = resolver.url(users, &UrlOptions::new(), &ctx).unwrap();
    assert_eq!(url.to_string(), "/en/users");
}

#[test]
fn test_url_falls_back_to_first_action() {
    let mut builder = route_tree::RouteTreeBuilder::new(
        route_tree::tree::TreeSettings::from_config(&common::config()),
        common::translator(),
    );
    builder
        .root_with(|root| {
            root.child("gallery", |gallery| {
                gallery.action(route_tree::tree::Method::Get, "GalleryController@show").name("show");
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    let resolver = route_tree::Resolver::new(std::sync::Arc::new(builder.compile()), common::translator());
    let gallery = common::node(&resolver, "gallery");
    let url = resolver.url(gallery, &UrlOptions::new(), &RequestContext::new("de")).unwrap();
    assert_eq!(url.path(), "/de/gallery");
}

#[test]
fn test_url_without_actions() {
    let resolver = common::resolver();
    let admin = common::node(&resolver, "admin");
    let err = resolver.url(admin, &UrlOptions::new(), &RequestContext::new("en")).unwrap_err();
    assert!(matches!(err, TreeError::NoActionAvailable { .. }));
    assert!(err.is_action_not_found());
}

#[test]
fn test_unknown_action() {
    let resolver = common::resolver();
    let team = common::node(&resolver, "about.team");
    let err = resolver
        .url_by_action(team, "edit", &UrlOptions::new(), &RequestContext::new("en"))
        .unwrap_err();
    assert!(matches!(err, TreeError::ActionNotFound { ref action, .. } if action == "edit"));
}

#[test]
fn test_parameters_explicit_then_current() {
    let resolver = common::resolver();
    let users = common::node(&resolver, "users");

    let explicit = UrlOptions::new().parameter("user", "7");
    let url = resolver
        .url_by_action(users, "edit", &explicit, &RequestContext::new("en"))
        .unwrap();
    assert_eq!(url.path(), "/en/users/7/edit");

    let ctx = RequestContext::new("de").with_parameter("user", "5");
    let posts = common::node(&resolver, "users.posts");
    assert_eq!(
        resolver.url(posts, &UrlOptions::new(), &ctx).unwrap().path(),
        "/de/users/5/posts"
    );
    let url = resolver.url_by_action(users, "edit", &explicit, &ctx).unwrap();
    assert_eq!(url.path(), "/de/users/7/bearbeiten");
}

#[test]
fn test_missing_parameter() {
    let resolver = common::resolver();
    let users = common::node(&resolver, "users");
    let err = resolver
        .url_by_action(users, "show", &UrlOptions::new(), &RequestContext::new("en"))
        .unwrap_err();
    match err {
        TreeError::MissingUrlParameter { route, missing } => {
            assert_eq!(route, "en.users.show");
            assert_eq!(missing, vec!["user".to_string()]);
        }
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn test_locale_availability() {
    let resolver = common::resolver();
    let ctx = RequestContext::new("de");

    let legal = common::node(&resolver, "legal");
    assert_eq!(resolver.url(legal, &UrlOptions::new(), &ctx).unwrap().path(), "/legal");

    let contact = common::node(&resolver, "contact");
    let err = resolver.url(contact, &UrlOptions::new(), &ctx).unwrap_err();
    assert!(matches!(err, TreeError::LocaleNotAvailable { ref locale, .. } if locale == "de"));

    let url = resolver
        .url(contact, &UrlOptions::new().locale("en"), &ctx)
        .unwrap();
    assert_eq!(url.path(), "/en/contact");
}

#[test]
fn test_absolute_url() {
    let resolver = common::resolver();
    let team = common::node(&resolver, "about.team");
    let url = resolver
        .url(team, &UrlOptions::new().absolute(true), &RequestContext::new("en"))
        .unwrap();
    assert_eq!(url.to_string(), "https://example.com/en/about/team");
    assert_eq!(url.path(), "/en/about/team");
}

#[test]
fn test_lowest_rootline_action() {
    let resolver = common::resolver();
    let users = common::node(&resolver, "users");

    let editing = common::ctx(&resolver, "users", "edit", "en").with_parameter("user", "5");
    assert_eq!(resolver.lowest_rootline_action(users, &editing), Some("edit"));

    let showing = common::ctx(&resolver, "users", "show", "en").with_parameter("user", "5");
    assert_eq!(resolver.lowest_rootline_action(users, &showing), Some("show"));

    let listing = common::ctx(&resolver, "users", "index", "en");
    assert_eq!(resolver.lowest_rootline_action(users, &listing), Some("index"));

    let elsewhere = RequestContext::new("en").with_path("/en/about");
    assert_eq!(resolver.lowest_rootline_action(users, &elsewhere), None);
}

#[test]
fn test_lowest_rootline_action_equal_length_keeps_first() {
    let resolver = common::resolver();
    let downloads = common::node(&resolver, "downloads");
    let ctx = common::ctx(&resolver, "downloads", "get", "en");
    assert_eq!(resolver.lowest_rootline_action(downloads, &ctx), Some("show"));
}

#[test]
fn test_active_state() {
    let resolver = common::resolver();
    let users = common::node(&resolver, "users");
    let posts = common::node(&resolver, "users.posts");
    let ctx = common::ctx(&resolver, "users.posts", "get", "en").with_parameter("user", "5");

    assert!(resolver.is_active(posts, None, &ctx));
    assert!(!resolver.is_active(users, None, &ctx));
    assert!(resolver.node_or_child_is_active(users, &ctx));
    assert!(resolver.node_or_child_is_active(resolver.tree().root(), &ctx));
    assert!(!resolver.node_or_child_is_active(common::node(&resolver, "about"), &ctx));

    let same = BTreeMap::from([("user".to_string(), "5".to_string())]);
    let other = BTreeMap::from([("user".to_string(), "6".to_string())]);
    assert!(resolver.is_active(posts, Some(&same), &ctx));
    assert!(!resolver.is_active(posts, Some(&other), &ctx));

    assert_eq!(resolver.active_value(users, &ctx), Some("5"));
    assert_eq!(resolver.active_value(common::node(&resolver, "about"), &ctx), None);
}

#[test]
fn test_title_fallback_chain() {
    let resolver = common::resolver();
    let en = RequestContext::new("en");

    let team = common::node(&resolver, "about.team");
    assert_eq!(resolver.title(team, &TitleOptions::new(), &en), "Team");

    let about = common::node(&resolver, "about");
    assert_eq!(resolver.title(about, &TitleOptions::new(), &en), "About us");

    let users = common::node(&resolver, "users");
    assert_eq!(resolver.title(users, &TitleOptions::new(), &en), "Users");
    assert_eq!(
        resolver.title(users, &TitleOptions::new().for_action("create"), &en),
        "Create User"
    );

    let editing = common::ctx(&resolver, "users", "edit", "en");
    assert_eq!(resolver.title(users, &TitleOptions::new(), &editing), "Edit User");
    assert_eq!(resolver.nav_title(users, &TitleOptions::new(), &editing), "Edit");

    let de = RequestContext::new("de");
    assert_eq!(
        resolver.title(users, &TitleOptions::new().for_action("show"), &de),
        "Benutzerverwaltung"
    );
}

#[test]
fn test_show_nav_title_is_active_value() {
    let resolver = common::resolver();
    let users = common::node(&resolver, "users");
    let showing = common::ctx(&resolver, "users", "show", "en").with_parameter("user", "5");

    assert_eq!(resolver.nav_title(users, &TitleOptions::new(), &showing), "5");
    let titles: Vec<_> = resolver
        .breadcrumbs(&showing)
        .into_iter()
        .map(|c| c.title)
        .collect();
    assert_eq!(titles, ["", "5"]);

    let unbound = common::ctx(&resolver, "users", "show", "en");
    assert_eq!(resolver.nav_title(users, &TitleOptions::new(), &unbound), "User");
}

#[test]
fn test_absolute_url_below_base_path() {
    let resolver = route_tree::Resolver::new(std::sync::Arc::new(common::sample_tree()), common::translator())
        .with_urls(&route_tree::config::UrlConfig {
            base_url: Some("https://example.com/app/".into()),
            absolute: true,
        })
        .unwrap();
    let team = common::node(&resolver, "about.team");
    let url = resolver.url(team, &UrlOptions::new(), &RequestContext::new("en")).unwrap();
    assert_eq!(url.to_string(), "https://example.com/app/en/about/team");
}

#[test]
fn test_parameter_values_are_percent_encoded() {
    let resolver = common::resolver();
    let users = common::node(&resolver, "users");
    let url = resolver
        .url_by_action(
            users,
            "show",
            &UrlOptions::new().parameter("user", "a b"),
            &RequestContext::new("en"),
        )
        .unwrap();
    assert_eq!(url.path(), "/en/users/a%20b");
}

#[test]
fn test_breadcrumbs() {
    let resolver = common::resolver();
    let ctx = common::ctx(&resolver, "about.team", "get", "en");
    let crumbs = resolver.breadcrumbs(&ctx);

    let titles: Vec<_> = crumbs.iter().map(|c| c.title.as_str()).collect();
    assert_eq!(titles, ["", "About us", "Team"]);
    let paths: Vec<_> = crumbs
        .iter()
        .map(|c| c.url.as_ref().map(|u| u.path().to_string()))
        .collect();
    assert_eq!(
        paths,
        [
            Some("/en".to_string()),
            Some("/en/about".to_string()),
            Some("/en/about/team".to_string())
        ]
    );
}

#[test]
fn test_parameter_values() {
    let mut builder = route_tree::RouteTreeBuilder::new(
        route_tree::tree::TreeSettings::from_config(&common::config()),
        common::translator(),
    );
    builder
        .root_with(|root| {
            root.child("topic", |topic| {
                topic.parameter("topic").values("en", ["news", "sports"]);
                topic.get("TopicController@show");
                Ok(())
            })?;
            Ok(())
        })
        .unwrap();
    let resolver = route_tree::Resolver::new(std::sync::Arc::new(builder.compile()), common::translator());
    let topic = common::node(&resolver, "topic");

    assert_eq!(
        resolver.values(topic, "en"),
        Some(&["news".to_string(), "sports".to_string()][..])
    );
    assert_eq!(resolver.values(topic, "de"), None);
    assert_eq!(resolver.tree().path(topic, "en"), Some("en/{topic}"));
}
