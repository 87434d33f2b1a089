//! Markdown to sanitized HTML.
//!
//! Conversion is done by `pulldown-cmark`, sanitization by `ammonia`. The
//! only way to obtain a [`SanitizedHtml`] is through
//! [`MarkdownRenderer::to_html`], so element content can never be set from
//! unsanitized markup.

use crate::dom::{Document, DomError, Element};
use derive_more::{Display, Into};
use log::{debug, trace};
use pulldown_cmark::{Options, Parser};

/// Marker class of elements rendered when the page loads.
pub const MARKDOWN_CLASS: &str = "markdown";

/// HTML that went through the sanitizer.
#[derive(Debug, Clone, PartialEq, Eq, Display, Into)]
pub struct SanitizedHtml(String);

impl SanitizedHtml {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

pub struct MarkdownRenderer {
    options: Options,
    sanitizer: ammonia::Builder<'static>,
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        let mut options = Options::empty();
        options.insert(Options::ENABLE_TABLES);
        options.insert(Options::ENABLE_STRIKETHROUGH);
        options.insert(Options::ENABLE_TASKLISTS);
        options.insert(Options::ENABLE_FOOTNOTES);

        let mut sanitizer = ammonia::Builder::default();
        // Task list items are rendered as disabled checkboxes.
        sanitizer
            .add_tags(["input"])
            .add_tag_attributes("input", ["type", "checked", "disabled"])
            // Footnote references link to the definition by id, code blocks
            // carry their `language-*` class.
            .add_tag_attributes("div", ["id", "class"])
            .add_tag_attributes("sup", ["class"])
            .add_tag_attributes("code", ["class"]);

        Self { options, sanitizer }
    }

    /// Converts Markdown to HTML and sanitizes the result.
    ///
    /// Never fails: malformed markup degrades to literal text.
    pub fn to_html(&self, source: &str) -> SanitizedHtml {
        let mut html = String::with_capacity(source.len() * 3 / 2);
        pulldown_cmark::html::push_html(&mut html, Parser::new_ext(source, self.options));
        let clean = self.sanitizer.clean(&html).to_string();
        trace!(
            "Rendered {} bytes of markdown into {} bytes of HTML",
            source.len(),
            clean.len()
        );
        SanitizedHtml(clean)
    }

    /// Replaces the content of `element` with its own text rendered as Markdown.
    pub fn render<E: Element + ?Sized>(&self, element: &E) {
        let html = self.to_html(&element.text());
        element.set_html(&html);
    }

    /// Renders every element carrying `class`, in document order.
    ///
    /// Returns the number of rendered elements.
    pub fn render_all<D: Document>(&self, document: &D, class: &str) -> Result<usize, DomError> {
        let elements = document.elements_by_class(class)?;
        for element in &elements {
            self.render(element);
        }
        debug!("Rendered {} `.{class}` elements", elements.len());
        Ok(elements.len())
    }
}

/// Renders a single element with the default renderer.
pub fn render_markdown<E: Element + ?Sized>(element: &E) {
    MarkdownRenderer::new().render(element);
}
