use leptos::prelude::*;

use crate::models::SITE;

#[component]
pub fn Nav() -> impl IntoView {
    view! {
        <nav class="navbar navbar--fixed-top">
            <div class="navbar__inner">
                <div class="navbar__items">
                    <a href="/" class="navbar__brand">
                        <b class="navbar__title">{SITE.title}</b>
                    </a>
                    <a href=SITE.docs_href class="navbar__item navbar__link">"Docs"</a>
                </div>
                <div class="navbar__items navbar__items--right">
                    <a
                        href=SITE.repository
                        target="_blank"
                        rel="noopener noreferrer"
                        class="navbar__item navbar__link"
                    >
                        "GitHub"
                    </a>
                </div>
            </div>
        </nav>
    }
}
