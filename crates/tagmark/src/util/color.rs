//! Deterministic tag coloring.
//!
//! A tag is mapped onto a fixed palette by a 32-bit string hash, so the same
//! tag gets the same color on every page and in every session.

use serde::Deserialize;
use std::rc::Rc;

/// Built-in palette, chosen to stay readable on a light background.
pub const DEFAULT_COLORS: [&str; 17] = [
    "Crimson",
    "PaleVioletRed",
    "OrangeRed",
    "Violet",
    "BlueViolet",
    "RebeccaPurple",
    "Indigo",
    "SlateBlue",
    "MediumSeaGreen",
    "CadetBlue",
    "CornflowerBlue",
    "DarkGoldenrod",
    "Peru",
    "Sienna",
    "Brown",
    "LightSlateGray",
    "DarkSlateGray",
];

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum PaletteError {
    #[error("palette must contain at least one color")]
    Empty,
}

/// Ordered, never empty list of CSS color values.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<String>")]
pub struct Palette(Rc<[String]>);

impl Palette {
    pub fn new(colors: impl IntoIterator<Item = impl Into<String>>) -> Result<Self, PaletteError> {
        let colors: Rc<[String]> = colors.into_iter().map(Into::into).collect();
        if colors.is_empty() {
            return Err(PaletteError::Empty);
        }
        Ok(Self(colors))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn colors(&self) -> &[String] {
        &self.0
    }

    /// Color for a tag. The tag is trimmed before hashing.
    pub fn color_for(&self, tag: &str) -> &str {
        &self.0[self.index_for(tag)]
    }

    pub fn index_for(&self, tag: &str) -> usize {
        let hash = tag_hash(trim(tag)).cast_unsigned();
        // A palette longer than u32::MAX entries cannot be allocated in wasm32.
        let len = u32::try_from(self.0.len()).unwrap_or(u32::MAX);
        (hash % len) as usize
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self(DEFAULT_COLORS.iter().map(|c| (*c).to_string()).collect())
    }
}

impl TryFrom<Vec<String>> for Palette {
    type Error = PaletteError;

    fn try_from(colors: Vec<String>) -> Result<Self, Self::Error> {
        Self::new(colors)
    }
}

/// 32-bit string hash over UTF-16 code units: `h = h * 31 + unit`, wrapping.
///
/// Matches the hash browsers compute with `(h << 5) - h + s.charCodeAt(i) | 0`,
/// so colors agree with any script-side rendering of the same tags.
pub fn tag_hash(s: &str) -> i32 {
    s.encode_utf16().fold(0i32, |hash, unit| {
        (hash << 5)
            .wrapping_sub(hash)
            .wrapping_add(i32::from(unit))
    })
}

/// Trims like `String.prototype.trim`: JS white space and line terminators.
pub fn trim(s: &str) -> &str {
    s.trim_matches(is_js_whitespace)
}

// ECMAScript WhiteSpace (TAB, VT, FF, ZWNBSP, Zs) and LineTerminator. Unlike
// `char::is_whitespace` this excludes U+0085.
fn is_js_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{b}'
            | '\u{c}'
            | '\r'
            | ' '
            | '\u{a0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200a}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202f}'
            | '\u{205f}'
            | '\u{3000}'
            | '\u{feff}'
    )
}
