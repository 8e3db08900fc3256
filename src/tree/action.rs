//! Named HTTP actions registered on a node.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::LanguageMapping;
use crate::tree::payload::Payload;

/// HTTP method an action is bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    Get,
    Post,
    Put,
    Patch,
    Delete,
    Options,
    /// Matches every method.
    Any,
}

impl Method {
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "get",
            Method::Post => "post",
            Method::Put => "put",
            Method::Patch => "patch",
            Method::Delete => "delete",
            Method::Options => "options",
            Method::Any => "any",
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What the host should dispatch an action to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Handler {
    /// `Controller@method` style reference, resolved by the host.
    Controller { target: String },
    /// Render a named view with static data.
    View { view: String, data: serde_json::Value },
    /// Redirect to another location.
    Redirect { destination: String, status: u16 },
}

impl Handler {
    pub fn controller(target: impl Into<String>) -> Self {
        Handler::Controller {
            target: target.into(),
        }
    }
}

impl From<&str> for Handler {
    fn from(value: &str) -> Self {
        Handler::controller(value)
    }
}

impl From<String> for Handler {
    fn from(value: String) -> Self {
        Handler::controller(value)
    }
}

impl fmt::Display for Handler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Handler::Controller { target } => f.write_str(target),
            Handler::View { view, .. } => write!(f, "view:{view}"),
            Handler::Redirect { destination, status } => {
                write!(f, "redirect:{status}:{destination}")
            }
        }
    }
}

/// One (node, method/name) binding.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteAction {
    pub(crate) method: Method,
    pub(crate) handler: Handler,
    pub(crate) name: String,
    pub(crate) segment: Option<LanguageMapping>,
    pub(crate) payload: Payload,
    /// Compiled path templates per locale, filled by the compiler.
    #[serde(default)]
    pub(crate) paths: BTreeMap<String, String>,
}

impl RouteAction {
    pub(crate) fn new(method: Method, handler: Handler, name: Option<String>) -> Self {
        Self {
            name: name.unwrap_or_else(|| method.as_str().to_string()),
            method,
            handler,
            segment: None,
            payload: Payload::default(),
            paths: BTreeMap::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn method(&self) -> Method {
        self.method
    }

    pub fn handler(&self) -> &Handler {
        &self.handler
    }

    /// The action's own sub-segment for `locale`, appended to the node path.
    pub fn segment(&self, locale: &str) -> Option<&str> {
        self.segment.as_ref()?.get(locale)
    }

    pub fn payload(&self) -> &Payload {
        &self.payload
    }

    /// Compiled path template for `locale` (no leading slash).
    pub fn path(&self, locale: &str) -> Option<&str> {
        self.paths.get(locale).map(String::as_str)
    }

    pub fn paths(&self) -> &BTreeMap<String, String> {
        &self.paths
    }
}
