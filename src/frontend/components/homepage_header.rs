use leptos::prelude::*;

use crate::models::SITE;

#[component]
pub fn HomepageHeader() -> impl IntoView {
    view! {
        <header class="hero hero--primary hero-banner">
            <div class="container">
                <h1 class="hero__title">{SITE.title}</h1>
                <p class="hero__subtitle">{SITE.tagline}</p>
                <div class="buttons">
                    <a class="button button--secondary button--lg" href=SITE.docs_href>
                        "Get started"
                    </a>
                </div>
            </div>
        </header>
    }
}
