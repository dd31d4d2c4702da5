//! Server-side rendering of homepage fragments to HTML strings.
//!
//! Every call renders inside its own reactive owner, so fragments can be
//! produced from any thread without shared state.

use leptos::prelude::*;

use crate::frontend::components::{FeatureCard, FeatureGrid, HomepageFeatures};
use crate::frontend::pages::HomePage;
use crate::models::FeatureEntry;

fn render_to_string<F, V>(view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| view().to_html())
}

pub fn render_feature_card(entry: FeatureEntry) -> String {
    render_to_string(|| view! { <FeatureCard entry=entry/> })
}

pub fn render_feature_grid(entries: &'static [FeatureEntry]) -> String {
    render_to_string(|| view! { <FeatureGrid entries=entries/> })
}

/// The homepage features section built from the shipped catalog.
pub fn render_features_section() -> String {
    render_to_string(|| view! { <HomepageFeatures/> })
}

pub fn render_home_page() -> String {
    render_to_string(|| view! { <HomePage/> })
}
