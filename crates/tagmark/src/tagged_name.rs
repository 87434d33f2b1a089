//! Names with trailing `#tags`, e.g. `Alice#admin#ops`.

use crate::dom::{DomError, Element, Span};
use crate::util::color::Palette;
use log::trace;

pub const TAG_DELIMITER: char = '#';

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaggedName<'a> {
    pub base: &'a str,
    /// Raw tags in input order, untrimmed.
    pub tags: Vec<&'a str>,
}

impl<'a> TaggedName<'a> {
    pub fn parse(input: &'a str) -> Self {
        let mut parts = input.split(TAG_DELIMITER);
        // `split` always yields at least one item.
        let base = parts.next().unwrap_or_default();
        Self {
            base,
            tags: parts.collect(),
        }
    }

    /// One colored span per tag, text kept verbatim.
    pub fn spans(&self, palette: &Palette) -> Vec<Span> {
        self.tags
            .iter()
            .map(|tag| Span {
                text: format!("{TAG_DELIMITER}{tag}"),
                color: palette.color_for(tag).to_string(),
            })
            .collect()
    }
}

/// Rewrites `element` as its base name followed by a colored span per tag.
///
/// `None` selects [`Palette::default`].
pub fn render_name<E: Element + ?Sized>(
    element: &E,
    palette: Option<&Palette>,
) -> Result<(), DomError> {
    let default_palette;
    let palette = match palette {
        Some(palette) => palette,
        None => {
            default_palette = Palette::default();
            &default_palette
        }
    };
    let text = element.text();
    let name = TaggedName::parse(&text);
    element.set_text(name.base);
    for span in name.spans(palette) {
        trace!("Appending tag `{}` in {}", span.text, span.color);
        element.append_span(&span)?;
    }
    Ok(())
}
