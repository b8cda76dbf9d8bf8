// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ordered HTML attribute lists.

use alloc::string::{String, ToString};

use smallvec::SmallVec;

use crate::style;

/// An insertion-ordered set of HTML attributes.
///
/// Elements rarely carry more than a handful of attributes, so entries live
/// inline in a `SmallVec` and lookups are linear.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HtmlAttributes {
    entries: SmallVec<[(String, String); 4]>,
}

impl HtmlAttributes {
    /// Creates an empty attribute list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if there are no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Value of `name`, if present.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    /// Returns `true` if `name` is present, even with an empty value.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Sets `name`, replacing an existing value in place.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(key, _)| *key == name) {
            Some(slot) => slot.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Builder form of [`HtmlAttributes::set`].
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    /// Removes `name`, returning its value.
    pub fn remove(&mut self, name: &str) -> Option<String> {
        let index = self.entries.iter().position(|(key, _)| key == name)?;
        Some(self.entries.remove(index).1)
    }

    /// Iterates `(name, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    /// Merges `other` into `self`.
    ///
    /// `class` lists are unioned, `style` declarations are merged with
    /// `other` winning per property, and every other attribute from `other`
    /// overwrites the one in `self`.
    pub fn merge(&mut self, other: &Self) {
        for (name, value) in other.iter() {
            let merged = match (name, self.get(name)) {
                ("class", Some(existing)) => merge_classes(existing, value),
                ("style", Some(existing)) => style::merge(existing, value),
                _ => value.to_string(),
            };
            self.set(name, merged);
        }
    }

    /// Builder form of [`HtmlAttributes::merge`].
    #[must_use]
    pub fn merged(mut self, other: &Self) -> Self {
        self.merge(other);
        self
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for HtmlAttributes {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut attrs = Self::new();
        for (name, value) in iter {
            attrs.set(name, value);
        }
        attrs
    }
}

fn merge_classes(existing: &str, extra: &str) -> String {
    let mut out = String::from(existing.trim());
    for class in extra.split_whitespace() {
        if !existing.split_whitespace().any(|c| c == class) {
            if !out.is_empty() {
                out.push(' ');
            }
            out.push_str(class);
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_in_place_and_keeps_order() {
        let mut attrs = HtmlAttributes::new()
            .with("src", "a.png")
            .with("alt", "cat");
        attrs.set("src", "b.png");

        let pairs: alloc::vec::Vec<_> = attrs.iter().collect();
        assert_eq!(pairs, [("src", "b.png"), ("alt", "cat")]);
        assert_eq!(attrs.remove("alt").as_deref(), Some("cat"));
        assert_eq!(attrs.len(), 1);
    }

    #[test]
    fn merge_unions_classes_and_styles() {
        let base: HtmlAttributes = [
            ("class", "rounded flex"),
            ("style", "color: red"),
            ("title", "old"),
        ]
        .into_iter()
        .collect();
        let extra: HtmlAttributes = [
            ("class", "flex shadow"),
            ("style", "color: blue; font-weight: bold"),
            ("title", "new"),
            ("data-x", ""),
        ]
        .into_iter()
        .collect();

        let merged = base.merged(&extra);

        assert_eq!(merged.get("class"), Some("rounded flex shadow"));
        assert_eq!(merged.get("style"), Some("color: blue; font-weight: bold;"));
        assert_eq!(merged.get("title"), Some("new"));
        assert!(merged.contains("data-x"));
    }
}
