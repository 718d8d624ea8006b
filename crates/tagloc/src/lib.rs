#![forbid(unsafe_code)]

//! tagloc public facade crate.
//!
//! Re-exports the types most apps need from the internal crates and offers
//! a prelude. With the default `catalog` feature, [`LocaleSession`] bundles
//! an in-memory catalog, a resolver and a widget localizer behind one
//! locale switch.

// --- Core re-exports -------------------------------------------------------

pub use tagloc_core::{
    ConfigError, DegradeOnError, FnTranslator, FontSpec, FontStyle, KeyResolver, NoTranslation,
    ResolverConfig, SegmentedKeySpec, TextResolution, Translate, TranslateFont, TranslateImage,
    infer_style_key, key_for_segment, parse_point_size,
};

// --- Widget re-exports -----------------------------------------------------

pub use tagloc_widgets::{
    Attribute, ControlState, KeySlot, Localizable, LocalizeProps, LocalizeReport, Localizer,
    WidgetId, WidgetKind, WidgetModel, WidgetStore, localize_widget,
};

// --- Catalog re-exports ----------------------------------------------------

#[cfg(feature = "catalog")]
pub use tagloc_catalog::{ActiveCatalog, CatalogError, CoverageReport, LocaleStrings, StringCatalog};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for tagloc apps.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Invalid resolver configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),
    /// Catalog lookup or locale switch failed.
    #[cfg(feature = "catalog")]
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Standard result type for tagloc APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Session --------------------------------------------------------------

#[cfg(feature = "catalog")]
mod session {
    use std::sync::Arc;

    use super::{
        ActiveCatalog, Localizer, ResolverConfig, Result, StringCatalog, WidgetStore,
    };
    use tagloc_core::KeyResolver;
    use tagloc_widgets::Localizable;

    /// Catalog, resolver and localizer sharing one current locale.
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use tagloc::prelude::*;
    ///
    /// let mut catalog: StringCatalog = StringCatalog::new();
    /// catalog.add_locale("en", [("Save", "Save")].into_iter().collect::<LocaleStrings>());
    /// catalog.add_locale("es", [("Save", "Guardar")].into_iter().collect::<LocaleStrings>());
    ///
    /// let mut session = LocaleSession::new(catalog, "en").unwrap();
    /// let mut widgets = HashMap::new();
    /// let id = WidgetId(1);
    /// widgets.insert(id, WidgetModel::<()>::new(WidgetKind::Label).with_text(Attribute::Text, "Save"));
    /// session.localizer_mut().awake(id, widgets.get_mut(&id).unwrap());
    ///
    /// assert_eq!(session.switch_locale("es", &mut widgets).unwrap(), 1);
    /// assert_eq!(widgets[&id].text(Attribute::Text), Some("Guardar"));
    /// ```
    #[derive(Debug)]
    pub struct LocaleSession<I = ()> {
        active: Arc<ActiveCatalog<I>>,
        localizer: Localizer<Arc<ActiveCatalog<I>>>,
    }

    impl<I> LocaleSession<I> {
        /// Session over `catalog` starting in `locale` with default resolver
        /// settings.
        ///
        /// # Errors
        ///
        /// Fails when `catalog` has no table for `locale`.
        pub fn new(catalog: StringCatalog<I>, locale: &str) -> Result<Self> {
            Self::with_config(catalog, locale, ResolverConfig::default())
        }

        /// Session with explicit resolver settings.
        ///
        /// # Errors
        ///
        /// Fails when `config` does not validate or `catalog` has no table
        /// for `locale`.
        pub fn with_config(
            catalog: StringCatalog<I>,
            locale: &str,
            config: ResolverConfig,
        ) -> Result<Self> {
            config.validate()?;
            let active = Arc::new(ActiveCatalog::new(catalog, locale)?);
            let resolver = KeyResolver::with_config(Arc::clone(&active), config);
            Ok(Self {
                active,
                localizer: Localizer::new(resolver),
            })
        }

        /// The shared catalog.
        #[must_use]
        pub fn catalog(&self) -> &Arc<ActiveCatalog<I>> {
            &self.active
        }

        #[must_use]
        pub fn locale(&self) -> Arc<String> {
            self.active.locale()
        }

        #[must_use]
        pub fn localizer(&self) -> &Localizer<Arc<ActiveCatalog<I>>> {
            &self.localizer
        }

        pub fn localizer_mut(&mut self) -> &mut Localizer<Arc<ActiveCatalog<I>>> {
            &mut self.localizer
        }
    }

    impl<I: Clone> LocaleSession<I> {
        /// Switch to `locale` and re-localize subscribed widgets in `store`.
        ///
        /// Returns the number of widgets refreshed; zero when `locale` was
        /// already current.
        ///
        /// # Errors
        ///
        /// Fails when the catalog has no table for `locale`; the current
        /// locale is kept.
        pub fn switch_locale<S>(&mut self, locale: &str, store: &mut S) -> Result<usize>
        where
            S: WidgetStore + ?Sized,
            S::Widget: Localizable<Image = I>,
        {
            if !self.active.set_locale(locale)? {
                return Ok(0);
            }
            tracing::info!(target: "tagloc.catalog", locale, "session.locale_switched");
            Ok(self.localizer.locale_changed(store))
        }
    }
}

#[cfg(feature = "catalog")]
pub use session::LocaleSession;

// --- Prelude --------------------------------------------------------------

/// Common imports for tagloc apps.
pub mod prelude {
    pub use crate::{
        Attribute, ControlState, Error, FontSpec, KeyResolver, KeySlot, Localizable, Localizer,
        ResolverConfig, Result, Translate, WidgetId, WidgetKind, WidgetModel,
    };

    #[cfg(feature = "catalog")]
    pub use crate::{ActiveCatalog, LocaleSession, LocaleStrings, StringCatalog};

    pub use crate::{core, widgets};

    #[cfg(feature = "catalog")]
    pub use crate::catalog;
}

pub use tagloc_core as core;
pub use tagloc_widgets as widgets;

#[cfg(feature = "catalog")]
pub use tagloc_catalog as catalog;
