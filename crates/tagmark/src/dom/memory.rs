//! Detached element tree.

use super::{Document, DomError, Element, Span};
use crate::markdown::SanitizedHtml;
use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Child {
    Text(String),
    Html(String),
    Span(Span),
}

/// Cheaply cloneable handle; clones share the same node.
#[derive(Debug, Clone, Default)]
pub struct MemoryElement {
    classes: Rc<[String]>,
    children: Rc<RefCell<Vec<Child>>>,
}

impl MemoryElement {
    pub fn with_text(text: impl Into<String>) -> Self {
        let element = Self::default();
        element.children.borrow_mut().push(Child::Text(text.into()));
        element
    }

    #[must_use]
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        let mut classes = self.classes.to_vec();
        classes.push(class.into());
        self.classes = classes.into();
        self
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    pub fn children(&self) -> Vec<Child> {
        self.children.borrow().clone()
    }

    pub fn spans(&self) -> Vec<Span> {
        self.children
            .borrow()
            .iter()
            .filter_map(|child| match child {
                Child::Span(span) => Some(span.clone()),
                _ => None,
            })
            .collect()
    }

    /// Serialized content, the way `innerHTML` would read.
    pub fn inner_html(&self) -> String {
        self.children
            .borrow()
            .iter()
            .map(|child| match child {
                Child::Text(text) => escape(text),
                Child::Html(html) => html.clone(),
                Child::Span(Span { text, color }) => {
                    format!("<span style=\"color: {}\">{}</span>", escape(color), escape(text))
                }
            })
            .collect()
    }
}

impl Element for MemoryElement {
    // Markup injected with `set_html` is not parsed back into text; only
    // text nodes and spans contribute.
    fn text(&self) -> String {
        self.children
            .borrow()
            .iter()
            .filter_map(|child| match child {
                Child::Text(text) => Some(text.as_str()),
                Child::Span(span) => Some(span.text.as_str()),
                Child::Html(_) => None,
            })
            .collect()
    }

    fn set_text(&self, text: &str) {
        *self.children.borrow_mut() = vec![Child::Text(text.to_string())];
    }

    fn set_html(&self, html: &SanitizedHtml) {
        *self.children.borrow_mut() = vec![Child::Html(html.to_string())];
    }

    fn append_span(&self, span: &Span) -> Result<(), DomError> {
        self.children.borrow_mut().push(Child::Span(span.clone()));
        Ok(())
    }
}

#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Rc<RefCell<Vec<MemoryElement>>>,
}

impl MemoryDocument {
    pub fn push(&self, element: MemoryElement) {
        self.elements.borrow_mut().push(element);
    }
}

impl Document for MemoryDocument {
    type Element = MemoryElement;

    fn elements_by_class(&self, class: &str) -> Result<Vec<MemoryElement>, DomError> {
        Ok(self
            .elements
            .borrow()
            .iter()
            .filter(|element| element.has_class(class))
            .cloned()
            .collect())
    }
}

fn escape(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            c => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clones_share_the_node() {
        let element = MemoryElement::with_text("a");
        let handle = element.clone();
        handle.set_text("b");
        assert_eq!("b", element.text());
    }

    #[test]
    fn inner_html_escapes_text() {
        let element = MemoryElement::with_text("<b>&</b>");
        element
            .append_span(&Span {
                text: "#x".to_string(),
                color: "Peru".to_string(),
            })
            .unwrap();
        assert_eq!(
            "&lt;b&gt;&amp;&lt;/b&gt;<span style=\"color: Peru\">#x</span>",
            element.inner_html()
        );
    }

    #[test]
    fn query_by_class_keeps_order() {
        let document = MemoryDocument::default();
        document.push(MemoryElement::with_text("1").with_class("markdown"));
        document.push(MemoryElement::with_text("2"));
        document.push(MemoryElement::with_text("3").with_class("x").with_class("markdown"));
        let texts: Vec<_> = document
            .elements_by_class("markdown")
            .unwrap()
            .iter()
            .map(Element::text)
            .collect();
        assert_eq!(vec!["1", "3"], texts);
    }
}
