use crate::{dom::Span, tagged_name::TaggedName, util::color::Palette};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct TaggedNameViewProps {
    /// Name with `#tag` suffixes, e.g. `Alice#admin`.
    pub name: AttrValue,
    /// Defaults to [`Palette::default`].
    #[prop_or_default]
    pub palette: Option<Palette>,
}

#[function_component(TaggedNameView)]
pub fn tagged_name_view(TaggedNameViewProps { name, palette }: &TaggedNameViewProps) -> Html {
    let palette = palette.clone().unwrap_or_default();
    let name = TaggedName::parse(name);
    html! {
        <span class="tagged-name">
            { name.base }
            { for name.spans(&palette).into_iter().map(|Span { text, color }| html! {
                <span style={format!("color: {color}")}>{ text }</span>
            })}
        </span>
    }
}
