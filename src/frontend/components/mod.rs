//! Reusable UI components for the documentation homepage

mod feature_card;
mod footer;
mod homepage_features;
mod homepage_header;
mod nav;
mod rich_text;

pub use feature_card::{CARD_BODY_CLASS, CARD_COLUMN_CLASS, FeatureCard};
pub use footer::Footer;
pub use homepage_features::{FeatureGrid, HomepageFeatures};
pub use homepage_header::HomepageHeader;
pub use nav::Nav;
pub use rich_text::RichText;
