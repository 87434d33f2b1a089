use anyhow::Context as _;
use gloo::events::EventListener;
use log::{debug, error};
use tagmark::{MARKDOWN_CLASS, MarkdownRenderer};

fn main() {
    init_logging();
    let document = gloo::utils::document();
    if document.ready_state() == "complete" {
        // The module finished loading after the page did.
        render_page();
    } else {
        EventListener::once(&gloo::utils::window(), "load", |_| render_page()).forget();
    }
}

fn render_page() {
    if let Err(err) = try_render_page() {
        error!("{err:?}");
        wasm_bindgen::throw_str(&format!("{err:#}"));
    }
}

fn try_render_page() -> Result<(), anyhow::Error> {
    let rendered = MarkdownRenderer::new()
        .render_all(&gloo::utils::document(), MARKDOWN_CLASS)
        .with_context(|| format!("cannot render `.{MARKDOWN_CLASS}` elements"))?;
    debug!("Page load rendering done, {rendered} elements");
    Ok(())
}

fn init_logging() {
    use log::Level;
    use wasm_logger::Config;

    // use debug level for debug builds, warn level for production builds.
    #[cfg(debug_assertions)]
    let level = Level::Trace;
    #[cfg(not(debug_assertions))]
    let level = Level::Warn;

    wasm_logger::init(Config::new(level));
}
