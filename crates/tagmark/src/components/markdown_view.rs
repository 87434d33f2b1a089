use crate::markdown::MarkdownRenderer;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarkdownViewProps {
    /// Markdown source, rendered and sanitized on change.
    pub source: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(MarkdownView)]
pub fn markdown_view(MarkdownViewProps { source, class }: &MarkdownViewProps) -> Html {
    let rendered = use_memo(source.clone(), |source| {
        String::from(MarkdownRenderer::new().to_html(source))
    });
    html! {
        <div class={classes!("markdown-rendered", class.clone())}>
            { Html::from_html_unchecked(AttrValue::from((*rendered).clone())) }
        </div>
    }
}
