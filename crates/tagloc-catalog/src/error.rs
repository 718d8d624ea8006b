#![forbid(unsafe_code)]

/// Catalog failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CatalogError {
    /// The requested locale was never added to the catalog.
    #[error("unknown locale: {0}")]
    UnknownLocale(String),
}
