#![forbid(unsafe_code)]

//! Font descriptions and the style-key heuristic.
//!
//! A widget that was never tagged with a font key still gets a localized
//! font: its current font name is scanned for a style marker (`Bold`,
//! `Light`, ...) and the matching canonical key, e.g. `font.bold`, is looked
//! up instead. Names without a marker are used verbatim as the key.
//!
//! # Example
//!
//! ```
//! use tagloc_core::font::{FontStyle, infer_style_key};
//!
//! assert_eq!(infer_style_key("HelveticaNeue-Bold"), "font.bold");
//! assert_eq!(infer_style_key("Custom-XYZ"), "Custom-XYZ");
//! assert_eq!(FontStyle::infer("Avenir-LightOblique"), Some(FontStyle::Light));
//! ```

use std::fmt;

/// Prefix of canonical font style keys.
pub const STYLE_KEY_PREFIX: &str = "font";

/// A font as seen by the resolver: a face name and a point size.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpec {
    /// Face name, e.g. `HelveticaNeue-Bold`.
    pub name: String,
    /// Size in points.
    pub point_size: f64,
}

impl FontSpec {
    /// Create a font description.
    #[must_use]
    pub fn new(name: impl Into<String>, point_size: f64) -> Self {
        Self {
            name: name.into(),
            point_size,
        }
    }

    /// Same face at a different size.
    #[must_use]
    pub fn with_size(&self, point_size: f64) -> Self {
        Self {
            name: self.name.clone(),
            point_size,
        }
    }
}

impl fmt::Display for FontSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}pt", self.name, self.point_size)
    }
}

/// Canonical font styles, in the order they are matched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontStyle {
    Regular,
    Medium,
    Bold,
    Light,
    Italic,
}

impl FontStyle {
    /// Every style in match order. `MediumItalic` is Medium, not Italic.
    pub const ALL: [Self; 5] = [
        Self::Regular,
        Self::Medium,
        Self::Bold,
        Self::Light,
        Self::Italic,
    ];

    /// Lowercase marker searched for in font names.
    #[must_use]
    pub const fn marker(self) -> &'static str {
        match self {
            Self::Regular => "regular",
            Self::Medium => "medium",
            Self::Bold => "bold",
            Self::Light => "light",
            Self::Italic => "italic",
        }
    }

    /// Canonical lookup key, `font.<marker>`.
    #[must_use]
    pub fn key(self) -> String {
        style_key(STYLE_KEY_PREFIX, self.marker())
    }

    /// First style whose marker occurs in `font_name`, ignoring case.
    #[must_use]
    pub fn infer(font_name: &str) -> Option<Self> {
        let lowered = font_name.to_lowercase();
        Self::ALL
            .into_iter()
            .find(|style| lowered.contains(style.marker()))
    }
}

/// Style key for `font_name` using the built-in markers.
///
/// Returns `font.<style>` for the first matching marker, or the font name
/// itself when none matches.
#[must_use]
pub fn infer_style_key(font_name: &str) -> String {
    match FontStyle::infer(font_name) {
        Some(style) => style.key(),
        None => font_name.to_string(),
    }
}

/// Style key for `font_name` using a caller-supplied marker list.
///
/// Markers are compared lowercase and tried in order; the first substring
/// match wins.
#[must_use]
pub fn infer_style_key_with<S: AsRef<str>>(font_name: &str, markers: &[S], prefix: &str) -> String {
    let lowered = font_name.to_lowercase();
    markers
        .iter()
        .map(AsRef::as_ref)
        .find(|marker| !marker.is_empty() && lowered.contains(&marker.to_lowercase()))
        .map_or_else(
            || font_name.to_string(),
            |marker| style_key(prefix, &marker.to_lowercase()),
        )
}

fn style_key(prefix: &str, marker: &str) -> String {
    if prefix.is_empty() {
        marker.to_string()
    } else {
        format!("{prefix}.{marker}")
    }
}

/// Parse a localized point size.
///
/// Accepts either `.` or a single `,` as the decimal separator, so `"14"`,
/// `"14.5"` and `"14,5"` all parse. Surrounding whitespace is ignored.
/// Non-finite and non-positive values are rejected.
#[must_use]
pub fn parse_point_size(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return None;
    }
    let parsed = trimmed.parse::<f64>().ok().or_else(|| {
        let comma_decimal = trimmed.matches(',').count() == 1 && !trimmed.contains('.');
        if comma_decimal {
            trimmed.replacen(',', ".", 1).parse::<f64>().ok()
        } else {
            None
        }
    })?;
    (parsed.is_finite() && parsed > 0.0).then_some(parsed)
}

#[cfg(test)]
mod tests {
    use super::*;

    // ── Style inference ────────────────────────────────────────────

    #[test]
    fn infers_bold_from_postscript_name() {
        assert_eq!(infer_style_key("HelveticaNeue-Bold"), "font.bold");
    }

    #[test]
    fn unknown_name_is_its_own_key() {
        assert_eq!(infer_style_key("Custom-XYZ"), "Custom-XYZ");
    }

    #[test]
    fn match_is_case_insensitive() {
        assert_eq!(infer_style_key("AVENIR-LIGHT"), "font.light");
        assert_eq!(infer_style_key("avenir-italic"), "font.italic");
    }

    #[test]
    fn earlier_marker_wins() {
        // Both medium and italic occur; medium is checked first.
        assert_eq!(infer_style_key("Avenir-MediumItalic"), "font.medium");
        // Bold before italic.
        assert_eq!(infer_style_key("Georgia-BoldItalic"), "font.bold");
        // Regular before everything.
        assert_eq!(infer_style_key("Inter-RegularBold"), "font.regular");
    }

    #[test]
    fn custom_markers_follow_given_order() {
        let markers = ["semibold", "bold"];
        assert_eq!(
            infer_style_key_with("Inter-SemiBold", &markers, "font"),
            "font.semibold"
        );
        assert_eq!(infer_style_key_with("Inter-Bold", &markers, "font"), "font.bold");
        assert_eq!(infer_style_key_with("Inter", &markers, "font"), "Inter");
    }

    #[test]
    fn custom_markers_are_lowercased() {
        let markers = ["Black"];
        assert_eq!(
            infer_style_key_with("Inter-Black", &markers, "typeface"),
            "typeface.black"
        );
    }

    #[test]
    fn empty_prefix_yields_bare_marker() {
        assert_eq!(infer_style_key_with("Inter-Bold", &["bold"], ""), "bold");
    }

    #[test]
    fn empty_marker_never_matches() {
        assert_eq!(infer_style_key_with("Inter", &["", "bold"], "font"), "Inter");
    }

    #[test]
    fn style_keys_are_canonical() {
        let keys: Vec<_> = FontStyle::ALL.into_iter().map(FontStyle::key).collect();
        assert_eq!(
            keys,
            ["font.regular", "font.medium", "font.bold", "font.light", "font.italic"]
        );
    }

    // ── Size parsing ───────────────────────────────────────────────

    #[test]
    fn parses_plain_sizes() {
        assert_eq!(parse_point_size("14"), Some(14.0));
        assert_eq!(parse_point_size(" 17.5 "), Some(17.5));
    }

    #[test]
    fn parses_comma_decimal() {
        assert_eq!(parse_point_size("14,5"), Some(14.5));
    }

    #[test]
    fn rejects_garbage() {
        assert_eq!(parse_point_size(""), None);
        assert_eq!(parse_point_size("large"), None);
        assert_eq!(parse_point_size("1,2,3"), None);
        assert_eq!(parse_point_size("1.2,3"), None);
    }

    #[test]
    fn rejects_non_positive_and_non_finite() {
        assert_eq!(parse_point_size("0"), None);
        assert_eq!(parse_point_size("-4"), None);
        assert_eq!(parse_point_size("inf"), None);
        assert_eq!(parse_point_size("NaN"), None);
    }

    #[test]
    fn font_spec_display_and_resize() {
        let font = FontSpec::new("Avenir-Book", 12.0);
        assert_eq!(font.to_string(), "Avenir-Book 12pt");
        assert_eq!(font.with_size(18.0), FontSpec::new("Avenir-Book", 18.0));
    }
}
