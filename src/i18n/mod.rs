//! Localization contracts consumed by the route tree.
//!
//! # Data Flow
//! ```text
//! LocaleProvider (enabled locales, default locale)
//!     → tree builder seeds every node's locale subset
//!
//! Translator (lookup / lookup_choice)
//!     → auto segments, resource segments and titles
//!     → CachedTranslator memoises repeated lookups
//! ```
//!
//! # Design Decisions
//! - The translation catalog itself is external; only its query contract lives here
//! - Fallback-locale selection is the caller's job, not the translator's
//! - Values that vary by locale are carried as `LanguageMapping`

pub mod locales;
pub mod mapping;
pub mod translator;

pub use locales::{LocaleProvider, StaticLocales};
pub use mapping::{LanguageMapping, Translatable};
pub use translator::{interpolate, CachedTranslator, MemoryCatalog, Translator};
