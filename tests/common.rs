#![allow(dead_code)]

use metrics_layer_site::frontend::components::CARD_COLUMN_CLASS;
use metrics_layer_site::models::*;

pub const SHIPPED_TITLES: [&str; 3] = ["Easy to Use", "Fast", "Reads LookML"];

pub static EMPTY_CATALOG: &[FeatureEntry] = &[];

pub static UNTITLED_CATALOG: &[FeatureEntry] = &[FeatureEntry::new("", Markup::EMPTY)];

pub static NO_DESCRIPTION_CATALOG: &[FeatureEntry] =
    &[FeatureEntry::new("Only Title", Markup::EMPTY)];

pub static ILLUSTRATED_CATALOG: &[FeatureEntry] = &[FeatureEntry::new(
    "Illustrated",
    Markup(&[Inline::Text("Has a picture.")]),
)
.with_icon(AssetRef {
    src: "/static/img/warehouse.svg",
    alt: "Warehouse illustration",
})];

pub fn count_cards(html: &str) -> usize {
    html.matches(&format!("class=\"{}\"", CARD_COLUMN_CLASS)).count()
}

/// Byte offsets of each needle in `html`, panicking when one is missing.
pub fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
    needles
        .iter()
        .map(|needle| {
            html.find(needle)
                .unwrap_or_else(|| panic!("{needle:?} not found in rendered html"))
        })
        .collect()
}
