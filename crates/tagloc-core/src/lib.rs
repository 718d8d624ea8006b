#![forbid(unsafe_code)]

//! Key resolution engine for tag-driven UI localization.
//!
//! # Role in tagloc
//! `tagloc-core` decides what a tagged widget should display. Given the key a
//! designer attached to an attribute and the value the widget currently
//! shows, it produces the localized text, font or image, and tells the caller
//! when the displayed text should be captured as the attribute's key.
//!
//! # This crate provides
//! - [`KeyResolver`] with the text, image and font resolution rules.
//! - [`Translate`], [`TranslateImage`] and [`TranslateFont`], the lookup seams
//!   a translation source implements.
//! - [`FontSpec`] and the font-style inference heuristic.
//! - [`SegmentedKeySpec`] and [`key_for_segment`] for multi-segment controls.
//! - [`ResolverConfig`] for the tunable constants.
//!
//! # How it fits in the system
//! `tagloc-catalog` implements the translator traits over an in-memory
//! catalog, and `tagloc-widgets` drives the resolver from widget lifecycle
//! events. The engine itself holds no state between calls: every write
//! happens in the caller once a call returns.

pub mod config;
pub mod error;
pub mod font;
pub mod resolver;
pub mod segment;
pub mod translate;

pub use config::ResolverConfig;
pub use error::ConfigError;
pub use font::{FontSpec, FontStyle, infer_style_key, parse_point_size};
pub use resolver::{KeyResolver, TextResolution};
pub use segment::{SegmentedKeySpec, key_for_segment};
pub use translate::{
    DegradeOnError, FnTranslator, NoTranslation, Translate, TranslateFont, TranslateImage,
};

/// Returns the key when it is present and non-empty.
///
/// An empty string is never a usable lookup key anywhere in the engine.
#[inline]
#[must_use]
pub fn usable_key(key: Option<&str>) -> Option<&str> {
    key.filter(|k| !k.is_empty())
}
