//! Shared fixtures for integration tests.

#![allow(dead_code)]

use std::path::Path;
use std::sync::Arc;

use route_tree::config::{RouteTreeConfig, UrlConfig};
use route_tree::i18n::{LanguageMapping, MemoryCatalog, Translator};
use route_tree::resolve::{RequestContext, Resolver};
use route_tree::tree::{CompiledTree, Method, NodeId, RouteTreeBuilder, TreeResult, TreeSettings};

/// English + German, English default.
pub fn config() -> RouteTreeConfig {
    let mut config = RouteTreeConfig::default();
    config.localization.locales = vec!["en".into(), "de".into()];
    config.localization.default_locale = "en".into();
    config.localization.fallback_locale = "en".into();
    config
}

/// Same as [`config`], with cache files inside `dir`.
pub fn config_in(dir: &Path) -> RouteTreeConfig {
    let mut config = config();
    config.cache.route_tree_cache_path = dir.join("route-tree.json").to_string_lossy().into_owned();
    config.cache.route_cache_path = dir.join("routes.json").to_string_lossy().into_owned();
    config
}

pub fn catalog() -> MemoryCatalog {
    MemoryCatalog::new()
        .with("de", "route-tree.create_segment", "erstellen")
        .with("de", "route-tree.edit_segment", "bearbeiten")
        .with("de", "pages/about/team.segment.team", "mitarbeiter")
        .with("en", "pages/about.title", "About us")
}

pub fn translator() -> Arc<dyn Translator> {
    Arc::new(catalog())
}

/// The sample site used across the integration tests.
///
/// ```text
/// (root)            GET  /en
/// about             view /en/about            /de/ueber-uns
///   team            GET  /en/about/team       /de/ueber-uns/mitarbeiter
/// legal             301  /legal               (no locale prefix)
/// blog              GET  /en/blog             (segment not inherited)
///   post            GET  /en/post
/// users             resource `user`
///   posts           GET  /en/users/{user}/posts
/// contact           GET  /en/contact          (not in German)
/// downloads         GET  show + get on one path
/// admin             ::admin::controllers, `auth` middleware
///   dashboard       GET  /en/admin/dashboard
/// ```
pub fn define(tree: &mut RouteTreeBuilder) -> TreeResult<()> {
    tree.root_with(|root| {
        root.get("PageController@home");

        root.child("about", |about| {
            about.segment(LanguageMapping::new().with("en", "about").with("de", "ueber-uns"));
            about.view("about", serde_json::json!({ "hero": true }));
            about.child("team", |team| {
                team.get("PageController@team");
                Ok(())
            })?;
            Ok(())
        })?;

        root.child("legal", |legal| {
            legal.no_locale_prefix();
            legal.permanent_redirect("/en/about");
            Ok(())
        })?;

        root.child("blog", |blog| {
            blog.inherit_segment(false);
            blog.get("BlogController@index");
            blog.child("post", |post| {
                post.get("BlogController@show");
                Ok(())
            })?;
            Ok(())
        })?;

        root.child("users", |users| {
            users.title(LanguageMapping::new().with("de", "Benutzerverwaltung"));
            users
                .resource("user", "UserController")
                .child("posts", |posts| {
                    posts.get("UserPostController@index");
                    Ok(())
                })?;
            Ok(())
        })?;

        root.child("contact", |contact| {
            contact.except_locales(&["de"]);
            contact.get("PageController@contact");
            Ok(())
        })?;

        root.child("downloads", |downloads| {
            downloads.action(Method::Get, "DownloadController@show").name("show");
            downloads.get("DownloadController@index");
            Ok(())
        })?;

        root.child("admin", |admin| {
            admin.namespace("::admin::controllers");
            admin.middleware("auth", &[], true);
            admin.child("dashboard", |dashboard| {
                dashboard.get("DashboardController@index");
                Ok(())
            })?;
            Ok(())
        })?;

        Ok(())
    })
}

pub fn sample_tree() -> CompiledTree {
    let mut builder = RouteTreeBuilder::new(TreeSettings::from_config(&config()), translator());
    define(&mut builder).unwrap();
    builder.compile()
}

pub fn resolver() -> Resolver {
    Resolver::new(Arc::new(sample_tree()), translator())
        .with_urls(&UrlConfig {
            base_url: Some("https://example.com".into()),
            absolute: false,
        })
        .unwrap()
}

pub fn node(resolver: &Resolver, id: &str) -> NodeId {
    resolver.tree().find(id).unwrap()
}

/// Context of a request that matched `action` on node `id`.
pub fn ctx(resolver: &Resolver, id: &str, action: &str, locale: &str) -> RequestContext {
    RequestContext::new(locale).with_current(node(resolver, id), action)
}
