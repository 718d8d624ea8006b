#![forbid(unsafe_code)]

//! Side-table of localization properties.
//!
//! Widgets owned by a host framework cannot grow new fields, so their
//! localization keys live next to them: a [`PropsTable`] maps each widget's
//! [`WidgetId`] to a small [`LocalizeProps`] record.
//!
//! # Invariants
//!
//! 1. Assigning `None` to a slot is a no-op; stored keys are only removed by
//!    [`LocalizeProps::clear_slot`].
//! 2. A widget without a record behaves as a record with defaults:
//!    auto-localize on, no keys.
//!
//! # Example
//!
//! ```
//! use tagloc_widgets::attribute::KeySlot;
//! use tagloc_widgets::props::{PropsTable, WidgetId};
//!
//! let mut table = PropsTable::new();
//! let id = WidgetId(7);
//! table.entry(id).set_slot(KeySlot::Key, Some("button.save"));
//! table.entry(id).set_slot(KeySlot::Key, None::<String>);
//!
//! assert_eq!(table.get(id).unwrap().slot(KeySlot::Key), Some("button.save"));
//! ```

use ahash::AHashMap;

use crate::attribute::{KeySlot, SlotSet};

/// Identity of a widget in the side-table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u64);

impl core::fmt::Display for WidgetId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "widget:{}", self.0)
    }
}

/// Localization properties of one widget.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalizeProps {
    auto_localize: bool,
    slots: [Option<String>; KeySlot::ALL.len()],
}

impl Default for LocalizeProps {
    fn default() -> Self {
        Self {
            auto_localize: true,
            slots: Default::default(),
        }
    }
}

impl LocalizeProps {
    /// Defaults: auto-localize on, no keys.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`set_slot`](Self::set_slot).
    #[must_use]
    pub fn with_slot(mut self, slot: KeySlot, key: impl Into<String>) -> Self {
        self.set_slot(slot, Some(key));
        self
    }

    /// Builder form of [`set_auto_localize`](Self::set_auto_localize).
    #[must_use]
    pub fn with_auto_localize(mut self, enabled: bool) -> Self {
        self.auto_localize = enabled;
        self
    }

    /// Whether the widget localizes itself when it awakes.
    #[must_use]
    pub const fn auto_localize(&self) -> bool {
        self.auto_localize
    }

    pub fn set_auto_localize(&mut self, enabled: bool) {
        self.auto_localize = enabled;
    }

    /// Key stored in `slot`.
    #[must_use]
    pub fn slot(&self, slot: KeySlot) -> Option<&str> {
        self.slots[slot.index()].as_deref()
    }

    /// Store a key. `None` leaves the slot as it is.
    pub fn set_slot<S: Into<String>>(&mut self, slot: KeySlot, key: Option<S>) {
        if let Some(key) = key {
            self.slots[slot.index()] = Some(key.into());
        }
    }

    /// Remove the key stored in `slot`, returning it.
    pub fn clear_slot(&mut self, slot: KeySlot) -> Option<String> {
        self.slots[slot.index()].take()
    }

    /// Slots holding a key.
    #[must_use]
    pub fn filled(&self) -> SlotSet {
        KeySlot::ALL
            .into_iter()
            .filter(|s| self.slots[s.index()].is_some())
            .fold(SlotSet::empty(), |acc, s| acc | s.flag())
    }
}

/// Side-table from widget identity to its [`LocalizeProps`].
#[derive(Debug, Default)]
pub struct PropsTable {
    entries: AHashMap<WidgetId, LocalizeProps>,
}

impl PropsTable {
    /// Empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the record of `id`.
    pub fn insert(&mut self, id: WidgetId, props: LocalizeProps) {
        self.entries.insert(id, props);
    }

    /// Record of `id`, if one was created.
    #[must_use]
    pub fn get(&self, id: WidgetId) -> Option<&LocalizeProps> {
        self.entries.get(&id)
    }

    /// Record of `id`, created with defaults on first access.
    pub fn entry(&mut self, id: WidgetId) -> &mut LocalizeProps {
        self.entries.entry(id).or_default()
    }

    /// Whether `id` auto-localizes. Widgets without a record do.
    #[must_use]
    pub fn auto_localize(&self, id: WidgetId) -> bool {
        self.get(id).is_none_or(LocalizeProps::auto_localize)
    }

    /// Drop the record of `id`.
    pub fn remove(&mut self, id: WidgetId) -> Option<LocalizeProps> {
        self.entries.remove(&id)
    }

    #[must_use]
    pub fn contains(&self, id: WidgetId) -> bool {
        self.entries.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all widget IDs with a record.
    pub fn ids(&self) -> impl Iterator<Item = WidgetId> + '_ {
        self.entries.keys().copied()
    }
}
