// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal inline `style` attribute handling.
//!
//! Only what attribute mapping needs: split a declaration list, look one
//! property up, and merge two lists with later declarations winning.

use alloc::string::String;
use alloc::vec::Vec;

/// Iterates the `property: value` pairs of an inline style, trimmed, in
/// source order. Malformed and empty declarations are skipped.
pub fn declarations(style: &str) -> impl Iterator<Item = (&str, &str)> {
    style.split(';').filter_map(|decl| {
        let (property, value) = decl.split_once(':')?;
        let (property, value) = (property.trim(), value.trim());
        (!property.is_empty() && !value.is_empty()).then_some((property, value))
    })
}

/// Value of `property` in an inline style. Property names compare
/// ASCII-case-insensitively and the last declaration wins.
///
/// ```
/// use understory_rich_text::style::declaration;
///
/// let style = "color: red; Font-Size: 18px; font-size: 20px";
/// assert_eq!(declaration(style, "font-size"), Some("20px"));
/// assert_eq!(declaration(style, "line-height"), None);
/// ```
#[must_use]
pub fn declaration<'a>(style: &'a str, property: &str) -> Option<&'a str> {
    declarations(style)
        .filter(|(name, _)| name.eq_ignore_ascii_case(property))
        .map(|(_, value)| value)
        .last()
}

/// Merges two inline styles. Declarations from `overrides` replace same-named
/// ones from `base` in place; new ones are appended.
#[must_use]
pub fn merge(base: &str, overrides: &str) -> String {
    let mut merged: Vec<(&str, &str)> = Vec::new();
    for (property, value) in declarations(base).chain(declarations(overrides)) {
        match merged
            .iter_mut()
            .find(|(name, _)| name.eq_ignore_ascii_case(property))
        {
            Some(slot) => slot.1 = value,
            None => merged.push((property, value)),
        }
    }
    let mut out = String::new();
    for (property, value) in merged {
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(property);
        out.push_str(": ");
        out.push_str(value);
        out.push(';');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn skips_malformed_declarations() {
        let pairs: Vec<_> = declarations(";color:red;;bogus; width : 2px ;").collect();
        assert_eq!(pairs, [("color", "red"), ("width", "2px")]);
    }

    #[test]
    fn merge_overrides_in_place() {
        assert_eq!(
            merge(
                "font-size: 12px; color: red",
                "font-size: 2rem; font-weight: bold;"
            ),
            "font-size: 2rem; color: red; font-weight: bold;"
        );
        assert_eq!(merge("", ""), "");
    }
}
