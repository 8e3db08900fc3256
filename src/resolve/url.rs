//! URL generation from compiled path templates.

use std::collections::BTreeMap;
use std::fmt;

use url::Url;

/// Caller overrides for URL generation. Unset fields fall back to the
/// request context and configuration.
#[derive(Debug, Clone, Default)]
pub struct UrlOptions {
    pub parameters: BTreeMap<String, String>,
    pub locale: Option<String>,
    pub absolute: Option<bool>,
}

impl UrlOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameter(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.parameters.insert(name.into(), value.into());
        self
    }

    pub fn locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = Some(locale.into());
        self
    }

    pub fn absolute(mut self, absolute: bool) -> Self {
        self.absolute = Some(absolute);
        self
    }
}

/// A generated URL: always a path, plus the absolute form when requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteUrl {
    path: String,
    absolute: Option<Url>,
}

impl RouteUrl {
    /// `base` must end in a slash (see [`normalize_base`]); the path is
    /// joined below it, so a base path such as `/app/` is kept.
    pub(crate) fn new(path: String, base: Option<&Url>) -> Result<Self, url::ParseError> {
        let absolute = base
            .map(|base| base.join(path.trim_start_matches('/')))
            .transpose()?;
        Ok(Self { path, absolute })
    }

    /// Path with a leading slash.
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn absolute(&self) -> Option<&Url> {
        self.absolute.as_ref()
    }

    pub fn as_str(&self) -> &str {
        match &self.absolute {
            Some(url) => url.as_str(),
            None => &self.path,
        }
    }
}

impl fmt::Display for RouteUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Parse a base URL, forcing a trailing slash on its path.
pub(crate) fn normalize_base(base: &str) -> Result<Url, url::ParseError> {
    let mut url = Url::parse(base)?;
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    Ok(url)
}

/// Names of the `{param}` placeholders in `template`, in order.
pub fn placeholders(template: &str) -> Vec<&str> {
    let mut names = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        names.push(&rest[start + 1..start + 1 + len]);
        rest = &rest[start + 2 + len..];
    }
    names
}

/// Substitute placeholders in one pass, consulting `explicit` first and
/// `current` second. Values are percent-encoded and never re-scanned.
/// Returns the names that neither source could fill.
pub(crate) fn substitute(
    template: &str,
    explicit: &BTreeMap<String, String>,
    current: &BTreeMap<String, String>,
) -> Result<String, Vec<String>> {
    let mut out = String::with_capacity(template.len());
    let mut missing = Vec::new();
    let mut rest = template;
    while let Some(start) = rest.find('{') {
        let Some(len) = rest[start + 1..].find('}') else {
            break;
        };
        out.push_str(&rest[..start]);
        let name = &rest[start + 1..start + 1 + len];
        match explicit.get(name).or_else(|| current.get(name)) {
            Some(value) => out.push_str(&urlencoding::encode(value)),
            None => missing.push(name.to_string()),
        }
        rest = &rest[start + 2 + len..];
    }
    out.push_str(rest);
    if missing.is_empty() {
        Ok(out)
    } else {
        Err(missing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_placeholders() {
        assert_eq!(placeholders("en/users/{user}/posts/{post}"), vec!["user", "post"]);
        assert!(placeholders("en/about").is_empty());
        assert_eq!(placeholders("broken/{x"), Vec::<&str>::new());
    }

    #[test]
    fn test_substitute_prefers_explicit() {
        let explicit = BTreeMap::from([("user".to_string(), "7".to_string())]);
        let current = BTreeMap::from([
            ("user".to_string(), "5".to_string()),
            ("post".to_string(), "9".to_string()),
        ]);
        assert_eq!(
            substitute("users/{user}/posts/{post}", &explicit, &current).unwrap(),
            "users/7/posts/9"
        );
    }

    #[test]
    fn test_substitute_reports_missing() {
        let empty = BTreeMap::new();
        assert_eq!(
            substitute("users/{user}", &empty, &empty).unwrap_err(),
            vec!["user".to_string()]
        );
    }

    #[test]
    fn test_substitute_does_not_rescan_values() {
        let explicit = BTreeMap::from([
            ("user".to_string(), "{post}".to_string()),
            ("post".to_string(), "9".to_string()),
        ]);
        let empty = BTreeMap::new();
        assert_eq!(
            substitute("users/{user}/posts/{post}", &explicit, &empty).unwrap(),
            "users/%7Bpost%7D/posts/9"
        );
    }

    #[test]
    fn test_substitute_percent_encodes_values() {
        let explicit = BTreeMap::from([("topic".to_string(), "a b/ü".to_string())]);
        let empty = BTreeMap::new();
        assert_eq!(
            substitute("topics/{topic}", &explicit, &empty).unwrap(),
            "topics/a%20b%2F%C3%BC"
        );
    }

    #[test]
    fn test_absolute_url_keeps_base_path() {
        let base = normalize_base("https://example.com/app").unwrap();
        let url = RouteUrl::new("/en/about/team".into(), Some(&base)).unwrap();
        assert_eq!(url.to_string(), "https://example.com/app/en/about/team");
        assert_eq!(url.path(), "/en/about/team");
    }

    #[test]
    fn test_absolute_url() {
        let base = normalize_base("https://example.com").unwrap();
        let url = RouteUrl::new("/en/about".into(), Some(&base)).unwrap();
        assert_eq!(url.to_string(), "https://example.com/en/about");
        assert_eq!(url.path(), "/en/about");
    }
}
