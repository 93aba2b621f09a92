//! Admin gesture input typed at the terminal.
//!
//! The storefront opens its admin modal from clicks on the logo, footer and
//! header title, or from Ctrl+Shift+A. At the terminal each of those is a
//! typed word: `logo`, `footer`, `title`, or a chord such as `ctrl+shift+a`.

use vitrina::gesture::{GestureRegion, is_admin_shortcut};

/// One typed gesture input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Trigger {
    /// A click on part of the page.
    Region(GestureRegion),

    /// The admin keyboard shortcut.
    Shortcut,
}

/// Read a typed line as a gesture input. Unknown input is `None`.
#[must_use]
pub fn parse_trigger(line: &str) -> Option<Trigger> {
    let line = line.trim().to_ascii_lowercase();

    let region = match line.as_str() {
        "logo" => Some(GestureRegion::Logo),
        "footer" => Some(GestureRegion::Footer),
        "title" | "header" => Some(GestureRegion::HeaderTitle),
        _ => None,
    };

    if let Some(region) = region {
        return Some(Trigger::Region(region));
    }

    let mut keys: Vec<&str> = line.split('+').map(str::trim).collect();
    let key = keys.pop().and_then(single_char)?;

    let ctrl = keys.contains(&"ctrl");
    let shift = keys.contains(&"shift");

    is_admin_shortcut(ctrl, shift, key, false).then_some(Trigger::Shortcut)
}

fn single_char(key: &str) -> Option<char> {
    let mut chars = key.chars();

    match (chars.next(), chars.next()) {
        (Some(key), None) => Some(key),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_words_map_to_regions() {
        assert_eq!(parse_trigger("logo"), Some(Trigger::Region(GestureRegion::Logo)));
        assert_eq!(parse_trigger(" Footer "), Some(Trigger::Region(GestureRegion::Footer)));
        assert_eq!(
            parse_trigger("title"),
            Some(Trigger::Region(GestureRegion::HeaderTitle))
        );
    }

    #[test]
    fn shortcut_needs_both_modifiers() {
        assert_eq!(parse_trigger("ctrl+shift+a"), Some(Trigger::Shortcut));
        assert_eq!(parse_trigger("Shift + Ctrl + A"), Some(Trigger::Shortcut));
        assert_eq!(parse_trigger("ctrl+a"), None);
        assert_eq!(parse_trigger("ctrl+shift+b"), None);
        assert_eq!(parse_trigger("ctrl+shift+ab"), None);
    }

    #[test]
    fn anything_else_is_ignored() {
        assert_eq!(parse_trigger(""), None);
        assert_eq!(parse_trigger("menu"), None);
    }
}
