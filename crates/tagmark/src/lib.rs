pub mod bindings;
pub mod components;
pub mod dom;
pub mod markdown;
pub mod tagged_name;
pub mod util;

pub use markdown::{MARKDOWN_CLASS, MarkdownRenderer, SanitizedHtml, render_markdown};
pub use tagged_name::{TaggedName, render_name};
pub use util::color::Palette;
