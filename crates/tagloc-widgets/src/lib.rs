#![forbid(unsafe_code)]

//! Widget adapter for tagloc.
//!
//! # Role in tagloc
//! `tagloc-widgets` connects the resolver in `tagloc-core` to widgets. It
//! knows which attributes each widget kind displays, where each attribute's
//! key is stored, and which resolution rule applies to it.
//!
//! # This crate provides
//! - [`WidgetKind`] and its declarative [`Binding`] table.
//! - [`LocalizeProps`] and [`PropsTable`], the per-widget key storage.
//! - [`Localizable`], implemented by host widgets, and [`localize_widget`].
//! - [`Localizer`], which drives localization from widget lifecycle events
//!   and locale changes.
//! - [`WidgetModel`], a plain-data widget for headless use.
//!
//! # How it fits in the system
//! Host code assigns keys while building widgets, calls
//! [`Localizer::awake`] when a widget is ready, and
//! [`Localizer::locale_changed`] after switching the translation source to
//! another locale.

pub mod adapter;
pub mod attribute;
pub mod localizer;
pub mod model;
pub mod props;

pub use adapter::{Localizable, LocalizeReport, localize_widget};
pub use attribute::{Attribute, Binding, ControlState, KeySlot, SlotSet, WidgetKind};
pub use localizer::{Localizer, WidgetStore};
pub use model::WidgetModel;
pub use props::{LocalizeProps, PropsTable, WidgetId};
