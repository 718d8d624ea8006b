#![forbid(unsafe_code)]

//! Lookup seams between the resolver and a translation source.
//!
//! The resolver never knows where translations live. It asks one of these
//! traits for a key and treats `None` as "no translation". The locale is
//! ambient to the implementation: a translator answers for whatever locale it
//! currently considers active.
//!
//! Lookups must not fail outward. A source that can fail (I/O, parse errors)
//! is wrapped in [`DegradeOnError`], which logs the failure and reports a
//! miss.

use std::collections::HashMap;
use std::fmt::Display;
use std::hash::BuildHasher;
use std::sync::Arc;

use crate::font::FontSpec;

/// String catalog lookup by key.
pub trait Translate {
    /// Look up the localized string for `key` in the active locale.
    fn translate(&self, key: &str) -> Option<String>;
}

/// Image lookup by key.
pub trait TranslateImage {
    /// Handle type of the images this source hands out.
    type Image;

    /// Look up the localized image for `key` in the active locale.
    fn translate_image(&self, key: &str) -> Option<Self::Image>;
}

/// Font lookup by style key and point size.
pub trait TranslateFont {
    /// Look up the font registered for `key`, sized to `size` points.
    fn translate_font(&self, key: &str, size: f64) -> Option<FontSpec>;
}

// ---------------------------------------------------------------------------
// Forwarding impls
// ---------------------------------------------------------------------------

macro_rules! forward_translators {
    ($($ptr:ty),*) => {$(
        impl<T: Translate + ?Sized> Translate for $ptr {
            fn translate(&self, key: &str) -> Option<String> {
                (**self).translate(key)
            }
        }

        impl<T: TranslateImage + ?Sized> TranslateImage for $ptr {
            type Image = T::Image;

            fn translate_image(&self, key: &str) -> Option<Self::Image> {
                (**self).translate_image(key)
            }
        }

        impl<T: TranslateFont + ?Sized> TranslateFont for $ptr {
            fn translate_font(&self, key: &str, size: f64) -> Option<FontSpec> {
                (**self).translate_font(key, size)
            }
        }
    )*};
}

forward_translators!(&T, Box<T>, Arc<T>);

impl<S: BuildHasher> Translate for HashMap<String, String, S> {
    fn translate(&self, key: &str) -> Option<String> {
        self.get(key).cloned()
    }
}

// ---------------------------------------------------------------------------
// Adapters
// ---------------------------------------------------------------------------

/// Translator backed by a closure.
///
/// ```
/// use tagloc_core::{FnTranslator, Translate};
///
/// let t = FnTranslator(|key: &str| (key == "Save").then(|| "Guardar".to_string()));
/// assert_eq!(t.translate("Save").as_deref(), Some("Guardar"));
/// assert_eq!(t.translate("Open"), None);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct FnTranslator<F>(pub F);

impl<F> Translate for FnTranslator<F>
where
    F: Fn(&str) -> Option<String>,
{
    fn translate(&self, key: &str) -> Option<String> {
        (self.0)(key)
    }
}

/// Translator that never finds anything.
///
/// Every text resolves to its key (or the displayed value), every font
/// lookup misses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoTranslation;

impl Translate for NoTranslation {
    fn translate(&self, _key: &str) -> Option<String> {
        None
    }
}

impl TranslateFont for NoTranslation {
    fn translate_font(&self, _key: &str, _size: f64) -> Option<FontSpec> {
        None
    }
}

/// Wraps a fallible lookup so errors degrade to a miss.
///
/// The error is logged at `warn` level under the `tagloc.resolve` target and
/// the lookup reports `None`, which the resolver turns into "keep the input".
#[derive(Debug, Clone, Copy)]
pub struct DegradeOnError<F>(pub F);

impl<F, E> Translate for DegradeOnError<F>
where
    F: Fn(&str) -> Result<Option<String>, E>,
    E: Display,
{
    fn translate(&self, key: &str) -> Option<String> {
        match (self.0)(key) {
            Ok(found) => found,
            Err(err) => {
                tracing::warn!(
                    target: "tagloc.resolve",
                    key,
                    error = %err,
                    "translate.failed"
                );
                None
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spanish() -> HashMap<String, String> {
        HashMap::from([("Save".to_string(), "Guardar".to_string())])
    }

    #[test]
    fn hashmap_translates_present_keys() {
        let t = spanish();
        assert_eq!(t.translate("Save").as_deref(), Some("Guardar"));
        assert_eq!(t.translate("Cancel"), None);
    }

    #[test]
    fn references_and_arcs_forward() {
        let t = spanish();
        let by_ref: &dyn Translate = &t;
        assert_eq!(by_ref.translate("Save").as_deref(), Some("Guardar"));

        let shared = Arc::new(spanish());
        assert_eq!(shared.translate("Save").as_deref(), Some("Guardar"));

        let boxed: Box<dyn Translate> = Box::new(spanish());
        assert_eq!(boxed.translate("Save").as_deref(), Some("Guardar"));
    }

    #[test]
    fn no_translation_misses_everything() {
        assert_eq!(NoTranslation.translate("anything"), None);
        assert_eq!(NoTranslation.translate_font("font.bold", 12.0), None);
    }

    #[test]
    fn degrade_on_error_reports_miss() {
        let t = DegradeOnError(|key: &str| -> Result<Option<String>, String> {
            if key == "broken" {
                Err("bundle unreadable".into())
            } else {
                Ok(Some(key.to_uppercase()))
            }
        });
        assert_eq!(t.translate("ok").as_deref(), Some("OK"));
        assert_eq!(t.translate("broken"), None);
    }
}
