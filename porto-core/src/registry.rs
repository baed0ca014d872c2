//! Static display attributes per category.
//!
//! A [`CategoryRegistry`] is built once per view and handed to the
//! [`VenueBrowser`](crate::VenueBrowser) as a plain value. Lookups are total:
//! tags without an entry resolve to the registry's `default` attributes.

use std::collections::BTreeMap;

use crate::CategoryTag;

/// Icon, tint and relative size of a marker.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DisplayAttributes {
    /// Icon name, for example `"utensils"` or `"wine-glass"`.
    pub icon: String,
    /// Hex colour such as `"#388e3c"`.
    pub colour: String,
    /// Relative icon scale, 1.0 being the provider's default size.
    pub scale: f32,
}

impl DisplayAttributes {
    pub fn new(icon: impl Into<String>, colour: impl Into<String>, scale: f32) -> Self {
        Self {
            icon: icon.into(),
            colour: colour.into(),
            scale,
        }
    }
}

/// Mapping from category tag to display attributes.
///
/// # Examples
/// ```
/// use porto_core::{CategoryRegistry, CategoryTag, DisplayAttributes};
///
/// let registry = CategoryRegistry::new(DisplayAttributes::new("location-dot", "#616161", 0.6))
///     .with_entry(CategoryTag::Bar, DisplayAttributes::new("wine-glass", "#1976d2", 0.7));
///
/// assert_eq!(registry.lookup(CategoryTag::Bar).icon, "wine-glass");
/// // Unknown tags fall back to the default entry.
/// assert_eq!(registry.lookup(CategoryTag::Museum).icon, "location-dot");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CategoryRegistry {
    default: DisplayAttributes,
    entries: BTreeMap<CategoryTag, DisplayAttributes>,
}

impl CategoryRegistry {
    /// Create a registry containing only the `default` entry.
    pub const fn new(default: DisplayAttributes) -> Self {
        Self {
            default,
            entries: BTreeMap::new(),
        }
    }

    /// Add or replace the attributes for `tag`.
    ///
    /// An entry for [`CategoryTag::Default`] replaces the fallback.
    #[must_use]
    pub fn with_entry(mut self, tag: CategoryTag, attributes: DisplayAttributes) -> Self {
        if tag == CategoryTag::Default {
            self.default = attributes;
        } else {
            self.entries.insert(tag, attributes);
        }
        self
    }

    /// Attributes for `tag`, or the default entry when `tag` is not listed.
    pub fn lookup(&self, tag: CategoryTag) -> &DisplayAttributes {
        self.entries.get(&tag).unwrap_or(&self.default)
    }

    /// Whether `tag` has an entry of its own. `Default` always does.
    pub fn contains(&self, tag: CategoryTag) -> bool {
        tag == CategoryTag::Default || self.entries.contains_key(&tag)
    }

    /// Registry entries in tag order, ending with the default entry.
    ///
    /// The default row is left out when another entry already carries the
    /// same attributes, since it would repeat that row under another label.
    pub fn legend(&self) -> Vec<(CategoryTag, &DisplayAttributes)> {
        let default_is_distinct = self.entries.values().all(|entry| *entry != self.default);
        self.entries
            .iter()
            .map(|(tag, attributes)| (*tag, attributes))
            .chain(
                default_is_distinct.then_some((CategoryTag::Default, &self.default)),
            )
            .collect()
    }
}
