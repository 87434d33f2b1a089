//! Entry points callable from page scripts.

use crate::{markdown, tagged_name, util::color::Palette};
use wasm_bindgen::prelude::*;
use web_sys::HtmlElement;

/// Renders the text of `element` as sanitized Markdown.
#[wasm_bindgen(js_name = renderMarkdown)]
pub fn render_markdown(element: &HtmlElement) {
    markdown::render_markdown(element);
}

/// Renders `Name#tag#tag` as the name followed by colored tags.
///
/// `colors` replaces the built-in palette; it must not be empty.
#[wasm_bindgen(js_name = renderName)]
pub fn render_name(element: &HtmlElement, colors: Option<Vec<String>>) -> Result<(), JsError> {
    let palette = colors.map(Palette::new).transpose()?;
    tagged_name::render_name(element, palette.as_ref())?;
    Ok(())
}
