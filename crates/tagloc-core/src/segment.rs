#![forbid(unsafe_code)]

//! Segmented-key mini syntax.
//!
//! A multi-segment control carries a single key string that addresses one
//! key per segment:
//!
//! ```text
//! spec := [root ":"] key ("," key)*
//! ```
//!
//! Whitespace anywhere is ignored. When a root is given, every key resolves
//! as `root.key`.
//!
//! # Invariants
//!
//! 1. Parsing is total: every input string yields a spec.
//! 2. Only an exact two-part split on `:` produces a root. `a:b:c` has no
//!    root and its single key is the whole string. An empty root is still a
//!    root: `:one` addresses `.one`.
//! 3. An index past the last key, or addressing an empty key, yields `None`,
//!    meaning "leave that segment alone".
//!
//! # Example
//!
//! ```
//! use tagloc_core::segment::key_for_segment;
//!
//! assert_eq!(key_for_segment(0, Some("nav: one, two")).as_deref(), Some("nav.one"));
//! assert_eq!(key_for_segment(1, Some("nav: one, two")).as_deref(), Some("nav.two"));
//! assert_eq!(key_for_segment(2, Some("nav: one, two")), None);
//! assert_eq!(key_for_segment(0, Some("one,two")).as_deref(), Some("one"));
//! ```

use std::fmt;

/// Parsed form of a segmented key string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SegmentedKeySpec {
    root: Option<String>,
    keys: Vec<String>,
}

impl SegmentedKeySpec {
    /// Parse a spec string. Never fails.
    #[must_use]
    pub fn parse(spec: &str) -> Self {
        let compact: String = spec.chars().filter(|c| !c.is_whitespace()).collect();

        let parts: Vec<&str> = compact.split(':').collect();
        let (root, rest) = match parts.as_slice() {
            [root, rest] => (Some((*root).to_string()), *rest),
            _ => (None, compact.as_str()),
        };

        Self {
            root,
            keys: rest.split(',').map(str::to_string).collect(),
        }
    }

    /// Shared prefix, if the spec declared one.
    #[must_use]
    pub fn root(&self) -> Option<&str> {
        self.root.as_deref()
    }

    /// Per-index keys as written, without the root. May contain empty
    /// entries (`"a,,b"`).
    #[must_use]
    pub fn keys(&self) -> &[String] {
        &self.keys
    }

    /// Number of addressable positions, including empty ones.
    #[must_use]
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Whether no position carries a usable key.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.keys.iter().all(String::is_empty)
    }

    /// Fully qualified key for segment `index`.
    #[must_use]
    pub fn key_for(&self, index: usize) -> Option<String> {
        let key = self.keys.get(index).filter(|k| !k.is_empty())?;
        Some(match &self.root {
            Some(root) => format!("{root}.{key}"),
            None => key.clone(),
        })
    }

    /// Iterate over `(index, qualified key)` for every usable position.
    pub fn iter(&self) -> impl Iterator<Item = (usize, String)> + '_ {
        (0..self.keys.len()).filter_map(|i| self.key_for(i).map(|k| (i, k)))
    }
}

impl From<&str> for SegmentedKeySpec {
    fn from(spec: &str) -> Self {
        Self::parse(spec)
    }
}

impl fmt::Display for SegmentedKeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(root) = &self.root {
            write!(f, "{root}:")?;
        }
        f.write_str(&self.keys.join(","))
    }
}

/// Key for segment `index` of a control tagged with `spec`.
///
/// `None` for an absent spec, an out-of-range index, or an empty key at that
/// position.
#[must_use]
pub fn key_for_segment(index: usize, spec: Option<&str>) -> Option<String> {
    SegmentedKeySpec::parse(spec?).key_for(index)
}
