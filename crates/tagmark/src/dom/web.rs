//! `web-sys` bindings for the element traits.

use super::{Document, DomError, Element, Span};
use crate::markdown::SanitizedHtml;
use log::warn;
use wasm_bindgen::{JsCast as _, JsValue};
use web_sys::HtmlElement;

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{value:?}")))
    }
}

impl Element for HtmlElement {
    fn text(&self) -> String {
        self.inner_text()
    }

    fn set_text(&self, text: &str) {
        self.set_inner_text(text);
    }

    fn set_html(&self, html: &SanitizedHtml) {
        self.set_inner_html(html.as_str());
    }

    fn append_span(&self, span: &Span) -> Result<(), DomError> {
        let document = self.owner_document().ok_or(DomError::Detached)?;
        let child = document
            .create_element("span")?
            .dyn_into::<HtmlElement>()
            .map_err(|_| DomError::UnexpectedNode("HtmlElement"))?;
        child.style().set_property("color", &span.color)?;
        child.set_inner_text(&span.text);
        self.append_child(&child)?;
        Ok(())
    }
}

impl Document for web_sys::Document {
    type Element = HtmlElement;

    fn elements_by_class(&self, class: &str) -> Result<Vec<HtmlElement>, DomError> {
        // The collection is live, copy it out before anything gets mutated.
        let collection = self.get_elements_by_class_name(class);
        let mut elements = Vec::with_capacity(collection.length() as usize);
        for idx in 0..collection.length() {
            let Some(element) = collection.item(idx) else {
                continue;
            };
            match element.dyn_into::<HtmlElement>() {
                Ok(element) => elements.push(element),
                Err(element) => warn!("Skipping non-HTML element `{}`", element.tag_name()),
            }
        }
        Ok(elements)
    }
}
