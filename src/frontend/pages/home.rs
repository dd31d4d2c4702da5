use leptos::prelude::*;

use crate::frontend::components::{Footer, HomepageFeatures, HomepageHeader, Nav};

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="main-wrapper">
            <Nav/>
            <HomepageHeader/>
            <main>
                <HomepageFeatures/>
            </main>
            <Footer/>
        </div>
    }
}
