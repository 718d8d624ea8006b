#![forbid(unsafe_code)]

//! In-memory translation source for tagloc.
//!
//! Provides per-locale string, font and image tables, locale fallback
//! chains, and a translation coverage report.
//!
//! # Role in tagloc
//! The resolver in `tagloc-core` only sees the `Translate*` traits. This
//! crate is the reference implementation of those traits: [`ActiveCatalog`]
//! answers lookups for the locale it currently considers active, and can be
//! switched to another locale from a shared reference.
//!
//! # How it fits in the system
//! Apps that already have their own resource pipeline implement the traits
//! directly and never need this crate. Tests, demos and small apps build a
//! [`StringCatalog`] in code and hand an [`ActiveCatalog`] to the resolver.

pub mod active;
pub mod catalog;
pub mod error;

pub use active::ActiveCatalog;
pub use catalog::{CoverageReport, LocaleCoverage, LocaleStrings, StringCatalog};
pub use error::CatalogError;
