#![forbid(unsafe_code)]

//! ANSI colorization for line fragments
//!
//! Descriptions are assembled as plain strings, so colors are applied by
//! wrapping individual fragments rather than by writing to a color-aware
//! stream. The escape sequences come from termcolor's `Ansi` writer; whether
//! they are emitted at all is the driver's decision.

use std::io::Write;
use termcolor::{Ansi, Color, ColorSpec, WriteColor};

/// Semantic styles used by the event descriptions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
    Red,
    Cyan,
    Green,
    Yellow,
    Bold,
    Dim,
}

impl Style {
    fn spec(self) -> ColorSpec {
        let mut spec = ColorSpec::new();
        match self {
            Style::Red => spec.set_fg(Some(Color::Red)),
            Style::Cyan => spec.set_fg(Some(Color::Cyan)),
            Style::Green => spec.set_fg(Some(Color::Green)),
            Style::Yellow => spec.set_fg(Some(Color::Yellow)),
            Style::Bold => spec.set_bold(true),
            Style::Dim => spec.set_dimmed(true),
        };
        spec
    }
}

/// Wrap `text` in the style's escape sequence plus a reset when `enabled`;
/// return it unchanged otherwise.
pub fn paint(text: &str, style: Style, enabled: bool) -> String {
    if !enabled {
        return text.to_string();
    }
    let mut ansi = Ansi::new(Vec::new());
    // Fall back to the plain fragment if the writer errors.
    let ok = ansi.set_color(&style.spec()).is_ok()
        && ansi.write_all(text.as_bytes()).is_ok()
        && ansi.reset().is_ok();
    if !ok {
        return text.to_string();
    }
    String::from_utf8(ansi.into_inner()).unwrap_or_else(|_| text.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    const PALETTE: [Style; 6] = [
        Style::Red,
        Style::Cyan,
        Style::Green,
        Style::Yellow,
        Style::Bold,
        Style::Dim,
    ];

    #[test]
    fn test_disabled_returns_input_unchanged() {
        for style in PALETTE {
            assert_eq!(paint("hello", style, false), "hello");
        }
    }

    #[test]
    fn test_enabled_wraps_fragment_in_escapes() {
        for style in PALETTE {
            let painted = paint("hello", style, true);
            assert!(painted.contains("hello"), "{style:?}");
            assert!(painted.starts_with('\u{1b}'), "{style:?}");
            assert!(painted.len() > "hello".len(), "{style:?}");
            // A reset follows the fragment.
            let after = &painted[painted.find("hello").unwrap() + "hello".len()..];
            assert!(after.starts_with('\u{1b}'), "{style:?}");
        }
    }

    #[test]
    fn test_styles_produce_distinct_sequences() {
        let red = paint("x", Style::Red, true);
        let cyan = paint("x", Style::Cyan, true);
        assert_ne!(red, cyan);
    }

    #[test]
    fn test_empty_fragment() {
        assert_eq!(paint("", Style::Bold, false), "");
        // Still wrapped when enabled; the escapes are all that remain.
        assert!(paint("", Style::Bold, true).starts_with('\u{1b}'));
    }
}
