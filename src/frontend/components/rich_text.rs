use leptos::prelude::*;

use crate::models::{Inline, Markup};

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}

/// Renders a description fragment node by node. Empty fragments render nothing.
#[component]
pub fn RichText(markup: Markup) -> impl IntoView {
    markup
        .nodes()
        .iter()
        .map(|node| match *node {
            Inline::Text(text) => text.into_any(),
            Inline::Emphasis(text) => view! { <em>{text}</em> }.into_any(),
            Inline::Strong(text) => view! { <strong>{text}</strong> }.into_any(),
            Inline::Code(text) => view! { <code>{text}</code> }.into_any(),
            Inline::Link { href, text } if is_external(href) => view! {
                <a href=href target="_blank" rel="noopener noreferrer">{text}</a>
            }
            .into_any(),
            Inline::Link { href, text } => view! { <a href=href>{text}</a> }.into_any(),
        })
        .collect_view()
}
