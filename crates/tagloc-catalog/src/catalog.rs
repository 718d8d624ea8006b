#![forbid(unsafe_code)]

//! Locale tables and fallback resolution.
//!
//! A [`StringCatalog`] holds one [`LocaleStrings`] table per locale plus
//! optional font and image tables. Lookups walk a fallback chain:
//!
//! 1. the requested locale,
//! 2. its explicit fallbacks ([`StringCatalog::set_fallback_chain`]), in order,
//! 3. its language tag (`es` for `es-CO` or `es_CO`),
//! 4. the default locale.
//!
//! Each locale appears at most once in a chain.
//!
//! # Example
//!
//! ```
//! use tagloc_catalog::{LocaleStrings, StringCatalog};
//!
//! let mut catalog: StringCatalog = StringCatalog::new();
//! let mut en = LocaleStrings::new();
//! en.insert("greeting", "Hello");
//! en.insert("farewell", "Goodbye");
//! let mut es = LocaleStrings::new();
//! es.insert("greeting", "Hola");
//! catalog.add_locale("en", en);
//! catalog.add_locale("es", es);
//! catalog.set_default_locale("en");
//!
//! assert_eq!(catalog.get("es-CO", "greeting"), Some("Hola"));
//! assert_eq!(catalog.get("es-CO", "farewell"), Some("Goodbye"));
//! ```

use std::collections::BTreeSet;

use ahash::AHashMap;

/// Strings of one locale, keyed by lookup key.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocaleStrings {
    strings: AHashMap<String, String>,
}

impl LocaleStrings {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert or replace a string.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.strings.insert(key.into(), value.into());
    }

    /// String stored for `key` in this table only.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.strings.get(key).map(String::as_str)
    }

    /// Whether `key` has a string.
    #[must_use]
    pub fn contains(&self, key: &str) -> bool {
        self.strings.contains_key(key)
    }

    /// Number of strings.
    #[must_use]
    pub fn len(&self) -> usize {
        self.strings.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.strings.is_empty()
    }

    /// Iterate over keys.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.strings.keys().map(String::as_str)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for LocaleStrings {
    fn from_iter<T: IntoIterator<Item = (K, V)>>(iter: T) -> Self {
        let mut table = Self::new();
        for (k, v) in iter {
            table.insert(k, v);
        }
        table
    }
}

#[derive(Debug, Clone)]
struct LocaleEntry<I> {
    strings: LocaleStrings,
    /// Style key → font family.
    fonts: AHashMap<String, String>,
    images: AHashMap<String, I>,
}

impl<I> Default for LocaleEntry<I> {
    fn default() -> Self {
        Self {
            strings: LocaleStrings::new(),
            fonts: AHashMap::new(),
            images: AHashMap::new(),
        }
    }
}

/// Multi-locale catalog of strings, fonts and images.
///
/// `I` is the image handle type handed out by image lookups.
#[derive(Debug, Clone)]
pub struct StringCatalog<I = ()> {
    locales: AHashMap<String, LocaleEntry<I>>,
    fallbacks: AHashMap<String, Vec<String>>,
    default_locale: Option<String>,
}

impl<I> Default for StringCatalog<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I> StringCatalog<I> {
    /// Empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            locales: AHashMap::new(),
            fallbacks: AHashMap::new(),
            default_locale: None,
        }
    }

    /// Add strings for `locale`, merging into any existing table.
    pub fn add_locale(&mut self, locale: impl Into<String>, strings: LocaleStrings) {
        let entry = self.locales.entry(locale.into()).or_default();
        entry.strings.strings.extend(strings.strings);
    }

    /// Register font families for `locale` by style key.
    pub fn add_fonts<K, F>(&mut self, locale: impl Into<String>, fonts: impl IntoIterator<Item = (K, F)>)
    where
        K: Into<String>,
        F: Into<String>,
    {
        let entry = self.locales.entry(locale.into()).or_default();
        entry
            .fonts
            .extend(fonts.into_iter().map(|(k, f)| (k.into(), f.into())));
    }

    /// Register an image for `key` in `locale`.
    pub fn add_image(&mut self, locale: impl Into<String>, key: impl Into<String>, image: I) {
        let entry = self.locales.entry(locale.into()).or_default();
        entry.images.insert(key.into(), image);
    }

    /// Explicit fallbacks tried after `locale` itself, in order.
    pub fn set_fallback_chain(&mut self, locale: impl Into<String>, chain: Vec<String>) {
        self.fallbacks.insert(locale.into(), chain);
    }

    /// Locale tried last for every lookup.
    pub fn set_default_locale(&mut self, locale: impl Into<String>) {
        self.default_locale = Some(locale.into());
    }

    /// The default locale, if set.
    #[must_use]
    pub fn default_locale(&self) -> Option<&str> {
        self.default_locale.as_deref()
    }

    /// Whether `locale` has any table.
    #[must_use]
    pub fn contains_locale(&self, locale: &str) -> bool {
        self.locales.contains_key(locale)
    }

    /// All locales with a table, sorted.
    #[must_use]
    pub fn locales(&self) -> Vec<&str> {
        let mut locales: Vec<&str> = self.locales.keys().map(String::as_str).collect();
        locales.sort_unstable();
        locales
    }

    /// Locales consulted for a lookup in `locale`, in order.
    #[must_use]
    pub fn resolution_chain<'a>(&'a self, locale: &'a str) -> Vec<&'a str> {
        let mut chain: Vec<&str> = Vec::new();
        let mut push = |l: &'a str| {
            if !l.is_empty() && !chain.contains(&l) {
                chain.push(l);
            }
        };

        push(locale);
        if let Some(explicit) = self.fallbacks.get(locale) {
            for l in explicit {
                push(l.as_str());
            }
        }
        if let Some((language, _)) = locale.split_once(['-', '_']) {
            push(language);
        }
        if let Some(default) = self.default_locale.as_deref() {
            push(default);
        }
        chain
    }

    /// String for `key`, walking the fallback chain of `locale`.
    #[must_use]
    pub fn get(&self, locale: &str, key: &str) -> Option<&str> {
        self.find(locale, |entry| entry.strings.get(key))
    }

    /// Font family registered for style `key`.
    #[must_use]
    pub fn font_family(&self, locale: &str, key: &str) -> Option<&str> {
        self.find(locale, |entry| entry.fonts.get(key).map(String::as_str))
    }

    /// Image registered for `key`.
    #[must_use]
    pub fn image(&self, locale: &str, key: &str) -> Option<&I> {
        self.find(locale, |entry| entry.images.get(key))
    }

    fn find<'a, R: ?Sized>(
        &'a self,
        locale: &str,
        lookup: impl Fn(&'a LocaleEntry<I>) -> Option<&'a R>,
    ) -> Option<&'a R> {
        self.resolution_chain(locale)
            .into_iter()
            .filter_map(|l| self.locales.get(l))
            .find_map(lookup)
    }

    /// String keys missing from each locale's own table.
    ///
    /// The key universe is the union of every locale's string keys. Fallback
    /// chains are not consulted: a key only present through fallback is
    /// reported missing.
    #[must_use]
    pub fn coverage_report(&self) -> CoverageReport {
        let all_keys: BTreeSet<&str> = self
            .locales
            .values()
            .flat_map(|entry| entry.strings.keys())
            .collect();
        let total_keys = all_keys.len();

        let locales = self
            .locales()
            .into_iter()
            .map(|locale| {
                let strings = &self.locales[locale].strings;
                let missing: Vec<String> = all_keys
                    .iter()
                    .filter(|k| !strings.contains(k))
                    .map(|k| (*k).to_string())
                    .collect();
                let present = total_keys - missing.len();
                #[allow(clippy::cast_precision_loss)]
                let coverage_percent = if total_keys == 0 {
                    100.0
                } else {
                    present as f64 * 100.0 / total_keys as f64
                };
                LocaleCoverage {
                    locale: locale.to_string(),
                    present,
                    missing,
                    coverage_percent,
                }
            })
            .collect();

        CoverageReport { total_keys, locales }
    }
}

/// Per-locale translation completeness.
#[derive(Debug, Clone, PartialEq)]
pub struct CoverageReport {
    /// Distinct string keys across all locales.
    pub total_keys: usize,
    /// One entry per locale, sorted by locale.
    pub locales: Vec<LocaleCoverage>,
}

/// Completeness of one locale.
#[derive(Debug, Clone, PartialEq)]
pub struct LocaleCoverage {
    pub locale: String,
    /// Keys with a string in this locale's own table.
    pub present: usize,
    /// Keys without one, sorted.
    pub missing: Vec<String>,
    /// `present / total_keys` as a percentage in `[0, 100]`.
    pub coverage_percent: f64,
}
