/// One inline node of a feature description.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Inline {
    Text(&'static str),
    Emphasis(&'static str),
    Strong(&'static str),
    Code(&'static str),
    Link {
        href: &'static str,
        text: &'static str,
    },
}

impl Inline {
    /// The visible text of this node, without any markup.
    pub fn text(&self) -> &'static str {
        match self {
            Self::Text(t) | Self::Emphasis(t) | Self::Strong(t) | Self::Code(t) => t,
            Self::Link { text, .. } => text,
        }
    }
}

/// Short rich-text fragment, rendered in order.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Default)]
pub struct Markup(pub &'static [Inline]);

impl Markup {
    pub const EMPTY: Markup = Markup(&[]);

    pub fn nodes(&self) -> &'static [Inline] {
        self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.iter().all(|node| node.text().is_empty())
    }

    /// Concatenated visible text of every node.
    pub fn plain_text(&self) -> String {
        self.0.iter().map(Inline::text).collect()
    }
}

/// Reference to an illustration served from the static assets directory.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct AssetRef {
    pub src: &'static str,
    pub alt: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FeatureEntry {
    pub title: &'static str,
    pub description: Markup,
    /// Illustration slot. None of the shipped entries carry one yet.
    pub icon: Option<AssetRef>,
}

impl FeatureEntry {
    pub const fn new(title: &'static str, description: Markup) -> Self {
        Self {
            title,
            description,
            icon: None,
        }
    }

    pub const fn with_icon(self, icon: AssetRef) -> Self {
        Self {
            icon: Some(icon),
            ..self
        }
    }
}

/// Feature cards shown on the homepage, in display order.
pub static FEATURES: &[FeatureEntry] = &[
    FeatureEntry::new(
        "Easy to Use",
        Markup(&[
            Inline::Text("Metrics Layer lets you "),
            Inline::Strong("query your metrics"),
            Inline::Text(" by name from python or SQL. Ask for "),
            Inline::Code("revenue"),
            Inline::Text(" by "),
            Inline::Code("channel"),
            Inline::Text(" and the joins are written for you."),
        ]),
    ),
    FeatureEntry::new(
        "Fast",
        Markup(&[
            Inline::Text("Metric requests compile to a single SQL query that runs in your warehouse, "),
            Inline::Emphasis("orders of magnitude faster"),
            Inline::Text(" than pulling raw data into python and aggregating it there."),
        ]),
    ),
    FeatureEntry::new(
        "Reads LookML",
        Markup(&[
            Inline::Text("Point Metrics Layer at your existing "),
            Inline::Link {
                href: "https://cloud.google.com/looker/docs/what-is-lookml",
                text: "LookML",
            },
            Inline::Text(" project and get access to your important metrics in python, with no new definitions to maintain."),
        ]),
    ),
];
