#![forbid(unsafe_code)]

//! A catalog bound to a current locale.
//!
//! The locale is the ambient part of every lookup. [`ActiveCatalog`] keeps
//! it behind an [`ArcSwap`] so it can be switched through a shared reference
//! while resolvers and widgets hold on to the catalog.
//!
//! # Example
//!
//! ```
//! use tagloc_catalog::{ActiveCatalog, LocaleStrings, StringCatalog};
//! use tagloc_core::Translate;
//!
//! let mut catalog: StringCatalog = StringCatalog::new();
//! catalog.add_locale("en", [("save", "Save")].into_iter().collect::<LocaleStrings>());
//! catalog.add_locale("es", [("save", "Guardar")].into_iter().collect::<LocaleStrings>());
//!
//! let active = ActiveCatalog::new(catalog, "en").unwrap();
//! assert_eq!(active.translate("save").as_deref(), Some("Save"));
//! active.set_locale("es").unwrap();
//! assert_eq!(active.translate("save").as_deref(), Some("Guardar"));
//! ```

use std::sync::Arc;

use arc_swap::ArcSwap;
use tagloc_core::{FontSpec, Translate, TranslateFont, TranslateImage};

use crate::catalog::StringCatalog;
use crate::error::CatalogError;

/// [`StringCatalog`] plus the locale lookups are answered in.
#[derive(Debug)]
pub struct ActiveCatalog<I = ()> {
    catalog: StringCatalog<I>,
    locale: ArcSwap<String>,
}

impl<I> ActiveCatalog<I> {
    /// Bind `catalog` to `locale`.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownLocale`] when the catalog has no table for
    /// `locale`.
    pub fn new(catalog: StringCatalog<I>, locale: impl Into<String>) -> Result<Self, CatalogError> {
        let locale = locale.into();
        if !catalog.contains_locale(&locale) {
            return Err(CatalogError::UnknownLocale(locale));
        }
        Ok(Self {
            catalog,
            locale: ArcSwap::from_pointee(locale),
        })
    }

    /// The current locale.
    #[must_use]
    pub fn locale(&self) -> Arc<String> {
        self.locale.load_full()
    }

    /// Switch the current locale.
    ///
    /// Returns `Ok(true)` when the locale actually changed, `Ok(false)` when
    /// it was already active. An unknown locale leaves the current one in
    /// place.
    ///
    /// # Errors
    ///
    /// [`CatalogError::UnknownLocale`] when the catalog has no table for
    /// `locale`.
    pub fn set_locale(&self, locale: &str) -> Result<bool, CatalogError> {
        if !self.catalog.contains_locale(locale) {
            tracing::warn!(target: "tagloc.catalog", locale, "catalog.unknown_locale");
            return Err(CatalogError::UnknownLocale(locale.to_string()));
        }
        let previous = self.locale.swap(Arc::new(locale.to_string()));
        let changed = previous.as_str() != locale;
        if changed {
            tracing::debug!(
                target: "tagloc.catalog",
                from = previous.as_str(),
                to = locale,
                "catalog.locale_switched"
            );
        }
        Ok(changed)
    }

    /// The underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &StringCatalog<I> {
        &self.catalog
    }
}

impl<I> Translate for ActiveCatalog<I> {
    fn translate(&self, key: &str) -> Option<String> {
        let locale = self.locale.load();
        self.catalog.get(&locale, key).map(str::to_string)
    }
}

impl<I> TranslateFont for ActiveCatalog<I> {
    fn translate_font(&self, key: &str, size: f64) -> Option<FontSpec> {
        let locale = self.locale.load();
        self.catalog
            .font_family(&locale, key)
            .map(|family| FontSpec::new(family, size))
    }
}

impl<I: Clone> TranslateImage for ActiveCatalog<I> {
    type Image = I;

    fn translate_image(&self, key: &str) -> Option<I> {
        let locale = self.locale.load();
        self.catalog.image(&locale, key).cloned()
    }
}
