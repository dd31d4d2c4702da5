use leptos::prelude::*;

use crate::frontend::components::RichText;
use crate::models::FeatureEntry;

/// One third of the row on wide viewports, full width on narrow ones.
pub const CARD_COLUMN_CLASS: &str = "col col--4 margin-top--lg";
pub const CARD_BODY_CLASS: &str = "text--center padding-horiz--md";

#[component]
pub fn FeatureCard(entry: FeatureEntry) -> impl IntoView {
    let FeatureEntry {
        title,
        description,
        icon,
    } = entry;

    view! {
        <div class=CARD_COLUMN_CLASS>
            {icon.map(|icon| view! {
                <div class="text--center">
                    <img class="feature-svg" src=icon.src alt=icon.alt role="img"/>
                </div>
            })}
            <div class=CARD_BODY_CLASS>
                <h3>{title}</h3>
                <p><RichText markup=description/></p>
            </div>
        </div>
    }
}
