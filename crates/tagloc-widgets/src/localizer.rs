#![forbid(unsafe_code)]

//! Widget lifecycle driver.
//!
//! [`Localizer`] owns the resolver, the property side-table and the set of
//! widgets that want to be refreshed when the locale changes.
//!
//! # Lifecycle
//!
//! 1. Keys are assigned with [`Localizer::set_key`], usually while a layout
//!    file is loaded.
//! 2. [`Localizer::awake`] runs once the widget is fully constructed. With
//!    auto-localize on (the default) the widget is localized and subscribed.
//! 3. [`Localizer::locale_changed`] re-localizes every subscribed widget.
//!    Widgets the store no longer holds are unsubscribed.
//! 4. [`Localizer::forget`] drops a widget's properties and subscription.
//!
//! # Example
//!
//! ```
//! use std::collections::HashMap;
//! use tagloc_catalog::{ActiveCatalog, LocaleStrings, StringCatalog};
//! use tagloc_core::KeyResolver;
//! use tagloc_widgets::{Attribute, KeySlot, Localizable, Localizer, WidgetId, WidgetKind, WidgetModel};
//!
//! let mut catalog: StringCatalog = StringCatalog::new();
//! catalog.add_locale("en", [("title.home", "Home")].into_iter().collect::<LocaleStrings>());
//! catalog.add_locale("es", [("title.home", "Inicio")].into_iter().collect::<LocaleStrings>());
//! let active = std::sync::Arc::new(ActiveCatalog::new(catalog, "en").unwrap());
//!
//! let mut localizer = Localizer::new(KeyResolver::new(active.clone()));
//! let mut widgets = HashMap::new();
//! let id = WidgetId(1);
//! widgets.insert(id, WidgetModel::<()>::new(WidgetKind::ViewController));
//!
//! localizer.set_key(id, KeySlot::Title, Some("title.home"));
//! localizer.awake(id, widgets.get_mut(&id).unwrap());
//! assert_eq!(widgets[&id].text(Attribute::Title), Some("Home"));
//!
//! active.set_locale("es").unwrap();
//! localizer.locale_changed(&mut widgets);
//! assert_eq!(widgets[&id].text(Attribute::Title), Some("Inicio"));
//! ```

use std::collections::{BTreeMap, BTreeSet, HashMap};
use std::hash::BuildHasher;

use ahash::AHashMap;
use tagloc_core::{KeyResolver, Translate, TranslateFont, TranslateImage};

use crate::adapter::{Localizable, LocalizeReport, localize_widget};
use crate::attribute::KeySlot;
use crate::props::{PropsTable, WidgetId};

/// Lookup of live widgets by identity.
pub trait WidgetStore {
    type Widget: Localizable + ?Sized;

    /// The widget registered as `id`, if it is still alive.
    fn widget_mut(&mut self, id: WidgetId) -> Option<&mut Self::Widget>;
}

impl<W: Localizable, S: BuildHasher> WidgetStore for HashMap<WidgetId, W, S> {
    type Widget = W;

    fn widget_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.get_mut(&id)
    }
}

impl<W: Localizable> WidgetStore for AHashMap<WidgetId, W> {
    type Widget = W;

    fn widget_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.get_mut(&id)
    }
}

impl<W: Localizable> WidgetStore for BTreeMap<WidgetId, W> {
    type Widget = W;

    fn widget_mut(&mut self, id: WidgetId) -> Option<&mut W> {
        self.get_mut(&id)
    }
}

/// Resolver, per-widget properties and locale-change subscriptions.
#[derive(Debug)]
pub struct Localizer<T> {
    resolver: KeyResolver<T>,
    props: PropsTable,
    subscribers: BTreeSet<WidgetId>,
}

impl<T> Localizer<T> {
    #[must_use]
    pub fn new(resolver: KeyResolver<T>) -> Self {
        Self {
            resolver,
            props: PropsTable::new(),
            subscribers: BTreeSet::new(),
        }
    }

    #[must_use]
    pub fn resolver(&self) -> &KeyResolver<T> {
        &self.resolver
    }

    #[must_use]
    pub fn props(&self) -> &PropsTable {
        &self.props
    }

    pub fn props_mut(&mut self) -> &mut PropsTable {
        &mut self.props
    }

    /// Store a key for `id`. `None` keeps the current key.
    pub fn set_key<S: Into<String>>(&mut self, id: WidgetId, slot: KeySlot, key: Option<S>) {
        self.props.entry(id).set_slot(slot, key);
    }

    /// Key stored for `id` in `slot`.
    #[must_use]
    pub fn key(&self, id: WidgetId, slot: KeySlot) -> Option<&str> {
        self.props.get(id)?.slot(slot)
    }

    /// Remove the key stored for `id` in `slot`.
    pub fn clear_key(&mut self, id: WidgetId, slot: KeySlot) -> Option<String> {
        self.props.entry(id).clear_slot(slot)
    }

    /// Turn auto-localization on or off. Turning it off also drops the
    /// locale-change subscription.
    pub fn set_auto_localize(&mut self, id: WidgetId, enabled: bool) {
        self.props.entry(id).set_auto_localize(enabled);
        if !enabled {
            self.unsubscribe(id);
        }
    }

    /// Subscribe `id` to locale changes. Returns `false` if it already was.
    pub fn subscribe(&mut self, id: WidgetId) -> bool {
        let added = self.subscribers.insert(id);
        if added {
            tracing::debug!(target: "tagloc.widgets", widget = %id, "widgets.subscribed");
        }
        added
    }

    /// Returns `true` if `id` was subscribed.
    pub fn unsubscribe(&mut self, id: WidgetId) -> bool {
        let removed = self.subscribers.remove(&id);
        if removed {
            tracing::debug!(target: "tagloc.widgets", widget = %id, "widgets.unsubscribed");
        }
        removed
    }

    #[must_use]
    pub fn is_subscribed(&self, id: WidgetId) -> bool {
        self.subscribers.contains(&id)
    }

    /// Subscribed widgets in ascending ID order.
    pub fn subscribers(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.subscribers.iter().copied()
    }

    /// Drop everything known about `id`.
    pub fn forget(&mut self, id: WidgetId) {
        self.props.remove(id);
        self.unsubscribe(id);
    }
}

impl<T: Translate + TranslateFont + TranslateImage> Localizer<T> {
    /// Widget construction finished.
    ///
    /// With auto-localize on, localizes `widget` and subscribes it to locale
    /// changes. Returns `None` when auto-localize is off.
    pub fn awake<W>(&mut self, id: WidgetId, widget: &mut W) -> Option<LocalizeReport>
    where
        W: Localizable<Image = T::Image> + ?Sized,
    {
        if !self.props.auto_localize(id) {
            tracing::trace!(target: "tagloc.widgets", widget = %id, "widgets.awake_skipped");
            return None;
        }
        let report = self.localize(id, widget);
        tracing::debug!(
            target: "tagloc.widgets",
            widget = %id,
            written = report.total(),
            "widgets.awake"
        );
        self.subscribe(id);
        Some(report)
    }

    /// Localize `widget` now, regardless of auto-localize.
    pub fn localize<W>(&mut self, id: WidgetId, widget: &mut W) -> LocalizeReport
    where
        W: Localizable<Image = T::Image> + ?Sized,
    {
        let props = self.props.entry(id);
        localize_widget(&self.resolver, props, widget)
    }

    /// Re-localize every subscribed widget found in `store`.
    ///
    /// Subscribers missing from the store are unsubscribed. Returns the
    /// number of widgets refreshed.
    pub fn locale_changed<S>(&mut self, store: &mut S) -> usize
    where
        S: WidgetStore + ?Sized,
        S::Widget: Localizable<Image = T::Image>,
    {
        let ids: Vec<WidgetId> = self.subscribers.iter().copied().collect();
        let mut refreshed = 0;
        let mut dropped = 0;
        for id in ids {
            match store.widget_mut(id) {
                Some(widget) => {
                    let props = self.props.entry(id);
                    localize_widget(&self.resolver, props, widget);
                    refreshed += 1;
                }
                None => {
                    self.unsubscribe(id);
                    dropped += 1;
                }
            }
        }
        tracing::debug!(
            target: "tagloc.widgets",
            refreshed,
            dropped,
            "widgets.locale_changed"
        );
        refreshed
    }
}
