use leptos::prelude::*;

use crate::frontend::components::FeatureCard;
use crate::models::{FEATURES, FeatureEntry};

/// Lays out one card per entry in a single row.
///
/// Cards are keyed by their position in `entries`. That is stable only while
/// the slice is static; a catalog that can be edited at runtime needs a
/// per-entry identifier instead.
#[component]
pub fn FeatureGrid(entries: &'static [FeatureEntry]) -> impl IntoView {
    view! {
        <section class="features">
            <div class="container">
                <div class="row">
                    <For
                        each=move || entries.iter().copied().enumerate()
                        key=|(position, _)| *position
                        children=|(_, entry)| view! { <FeatureCard entry=entry/> }
                    />
                </div>
            </div>
        </section>
    }
}

/// Features section of the homepage, built from the shipped catalog.
#[component]
pub fn HomepageFeatures() -> impl IntoView {
    view! { <FeatureGrid entries=FEATURES/> }
}
