#![forbid(unsafe_code)]

//! Text, image and font resolution.
//!
//! [`KeyResolver`] turns a `(key, displayed value)` pair into the value a
//! widget should display after localization.
//!
//! # Text rules
//!
//! 1. A non-empty key is looked up. A miss displays the key itself. The key
//!    is returned unchanged.
//! 2. An empty key is a tagging mistake: a warning is logged and the call
//!    continues as if no key was given.
//! 3. Without a key, the displayed value is looked up as if it were a key.
//!    When that finds a translation different from the value, and the caller
//!    allows it, the value is handed back as the key to store ("key
//!    capture"). Later calls then resolve through the captured key even after
//!    the displayed text has changed language.
//! 4. With neither key nor value the result is the empty string.
//!
//! Images and fonts never capture keys. Images have no value-as-key path at
//! all; fonts derive a style key from the observed font name instead.
//!
//! # Invariants
//!
//! 1. No call fails or panics; every miss degrades to the input.
//! 2. Key capture originates only from rule 3, never from an explicit key.
//! 3. The resolver keeps no state between calls.

use crate::config::ResolverConfig;
use crate::font::{FontSpec, infer_style_key_with, parse_point_size};
use crate::translate::{Translate, TranslateFont, TranslateImage};
use crate::usable_key;

/// Outcome of [`KeyResolver::resolve_text`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextResolution {
    /// Text to display.
    pub text: String,
    /// Key the caller should store after this call.
    pub key: Option<String>,
    /// Whether `key` was captured from the displayed value by this call.
    pub captured: bool,
}

impl TextResolution {
    fn unchanged_key(text: String, key: Option<&str>) -> Self {
        Self {
            text,
            key: key.map(str::to_string),
            captured: false,
        }
    }
}

/// Resolves localizable attributes against a translation source.
#[derive(Debug, Clone, Default)]
pub struct KeyResolver<T> {
    translator: T,
    config: ResolverConfig,
}

impl<T> KeyResolver<T> {
    /// Resolver with the default configuration.
    #[must_use]
    pub fn new(translator: T) -> Self {
        Self::with_config(translator, ResolverConfig::default())
    }

    /// Resolver with an explicit configuration.
    #[must_use]
    pub fn with_config(translator: T, config: ResolverConfig) -> Self {
        Self { translator, config }
    }

    /// The translation source.
    #[must_use]
    pub fn translator(&self) -> &T {
        &self.translator
    }

    /// Mutable access to the translation source, e.g. to switch locale.
    pub fn translator_mut(&mut self) -> &mut T {
        &mut self.translator
    }

    /// Active configuration.
    #[must_use]
    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    /// Give back the translation source.
    pub fn into_translator(self) -> T {
        self.translator
    }
}

impl<T: Translate> KeyResolver<T> {
    /// Resolve a text attribute.
    ///
    /// `update_key` allows capturing the displayed value as the key; pass
    /// `false` for attributes whose key is computed rather than stored.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use tagloc_core::KeyResolver;
    ///
    /// let es = HashMap::from([("Save".to_string(), "Guardar".to_string())]);
    /// let resolver = KeyResolver::new(es);
    ///
    /// let first = resolver.resolve_text(None, Some("Save"), true);
    /// assert_eq!(first.text, "Guardar");
    /// assert_eq!(first.key.as_deref(), Some("Save"));
    ///
    /// // The captured key keeps resolving once the label shows Spanish.
    /// let again = resolver.resolve_text(first.key.as_deref(), Some(&first.text), true);
    /// assert_eq!(again.text, "Guardar");
    /// ```
    pub fn resolve_text(
        &self,
        key: Option<&str>,
        value: Option<&str>,
        update_key: bool,
    ) -> TextResolution {
        if let Some(k) = key {
            if !k.is_empty() {
                let text = self.lookup_or_key(k);
                return TextResolution::unchanged_key(text, key);
            }
            if self.config.warn_on_empty_key {
                tracing::warn!(
                    target: "tagloc.resolve",
                    value = value.unwrap_or_default(),
                    "resolve.empty_key"
                );
            }
        }

        let Some(v) = value else {
            return TextResolution::unchanged_key(String::new(), key);
        };

        match self.translator.translate(v) {
            Some(localized) => {
                let captured = update_key && localized != v;
                if captured {
                    tracing::debug!(target: "tagloc.resolve", key = v, "resolve.key_captured");
                    TextResolution {
                        text: localized,
                        key: Some(v.to_string()),
                        captured,
                    }
                } else {
                    TextResolution::unchanged_key(localized, key)
                }
            }
            None => {
                tracing::trace!(target: "tagloc.resolve", key = v, "resolve.value_miss");
                TextResolution::unchanged_key(v.to_string(), key)
            }
        }
    }

    /// [`resolve_text`](Self::resolve_text) with key capture enabled.
    pub fn resolve_text_default(&self, key: Option<&str>, value: Option<&str>) -> TextResolution {
        self.resolve_text(key, value, true)
    }

    /// Point size for a font attribute.
    ///
    /// A usable `size_key` is localized and parsed; otherwise, or when that
    /// does not parse, the observed size is used, then the configured
    /// default.
    pub fn resolve_font_size(&self, size_key: Option<&str>, observed: Option<&FontSpec>) -> f64 {
        usable_key(size_key)
            .and_then(|k| {
                let text = self.lookup_or_key(k);
                let parsed = parse_point_size(&text);
                if parsed.is_none() {
                    tracing::trace!(target: "tagloc.resolve", key = k, text = text.as_str(), "resolve.size_unparsed");
                }
                parsed
            })
            .or_else(|| observed.map(|font| font.point_size))
            .unwrap_or(self.config.default_font_size)
    }

    fn lookup_or_key(&self, key: &str) -> String {
        self.translator.translate(key).unwrap_or_else(|| {
            tracing::trace!(target: "tagloc.resolve", key, "resolve.key_miss");
            key.to_string()
        })
    }
}

impl<T> KeyResolver<T> {
    /// Style key for a font attribute.
    ///
    /// A usable `key` is taken verbatim. Otherwise the key is inferred from
    /// the observed font name. `None` when there is nothing to go on.
    #[must_use]
    pub fn font_style_key(&self, key: Option<&str>, observed: Option<&FontSpec>) -> Option<String> {
        if let Some(k) = usable_key(key) {
            return Some(k.to_string());
        }
        let font = observed?;
        let inferred = infer_style_key_with(
            &font.name,
            &self.config.style_markers,
            &self.config.style_key_prefix,
        );
        (!inferred.is_empty()).then_some(inferred)
    }
}

impl<T: TranslateImage> KeyResolver<T> {
    /// Resolve an image attribute.
    ///
    /// Only an explicit, non-empty key is looked up; a miss keeps the
    /// observed image.
    pub fn resolve_image(&self, key: Option<&str>, observed: Option<T::Image>) -> Option<T::Image> {
        let Some(k) = usable_key(key) else {
            return observed;
        };
        match self.translator.translate_image(k) {
            Some(image) => Some(image),
            None => {
                tracing::trace!(target: "tagloc.resolve", key = k, "resolve.image_miss");
                observed
            }
        }
    }
}

impl<T: Translate + TranslateFont> KeyResolver<T> {
    /// Resolve a font attribute from a style key, a size key and the
    /// currently observed font.
    pub fn resolve_font(
        &self,
        key: Option<&str>,
        size_key: Option<&str>,
        observed: Option<FontSpec>,
    ) -> Option<FontSpec> {
        let Some(style_key) = self.font_style_key(key, observed.as_ref()) else {
            return observed;
        };
        let size = self.resolve_font_size(size_key, observed.as_ref());
        match self.translator.translate_font(&style_key, size) {
            Some(font) => {
                tracing::trace!(target: "tagloc.resolve", key = style_key.as_str(), size, "resolve.font");
                Some(font)
            }
            None => {
                tracing::trace!(target: "tagloc.resolve", key = style_key.as_str(), size, "resolve.font_miss");
                observed
            }
        }
    }
}
