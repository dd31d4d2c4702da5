//! 404 page for unknown routes

use leptos::prelude::*;

use crate::frontend::components::{Footer, Nav};
use crate::models::SITE;

#[component]
pub fn NotFound() -> impl IntoView {
    view! {
        <div class="main-wrapper">
            <Nav/>
            <main class="container margin-vert--xl">
                <div class="row">
                    <div class="col col--6 col--offset-3 text--center">
                        <h1 class="hero__title">"Page Not Found"</h1>
                        <p>"We could not find what you were looking for."</p>
                        <a href="/" class="button button--primary">"Back to "{SITE.title}</a>
                    </div>
                </div>
            </main>
            <Footer/>
        </div>
    }
}
