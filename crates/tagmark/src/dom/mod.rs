//! Host element tree abstraction.
//!
//! Renderers only see these traits. [`web`] binds them to `web-sys`,
//! `memory` is a detached tree the renderer tests run against.

#[cfg(test)]
pub mod memory;
pub mod web;

use crate::markdown::SanitizedHtml;

#[derive(Debug, thiserror::Error)]
pub enum DomError {
    #[error("element is not attached to a document")]
    Detached,
    #[error("unexpected node type, expected `{0}`")]
    UnexpectedNode(&'static str),
    #[error("DOM call failed: {0}")]
    Js(String),
}

/// Inline child appended after the text of an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub text: String,
    /// CSS `color` value.
    pub color: String,
}

pub trait Element {
    /// Rendered plain text of the element.
    fn text(&self) -> String;

    /// Replaces all children with a single text node.
    fn set_text(&self, text: &str);

    /// Replaces all children with already sanitized markup.
    fn set_html(&self, html: &SanitizedHtml);

    fn append_span(&self, span: &Span) -> Result<(), DomError>;
}

pub trait Document {
    type Element: Element;

    /// Elements carrying `class`, in document order.
    ///
    /// The result is a snapshot: mutating the returned elements must not
    /// change which elements it contains.
    fn elements_by_class(&self, class: &str) -> Result<Vec<Self::Element>, DomError>;
}
