#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FooterLink {
    pub label: &'static str,
    pub href: &'static str,
}

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct FooterColumn {
    pub title: &'static str,
    pub links: &'static [FooterLink],
}

/// Identity of the documentation site, shared by the header, navigation and footer.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SiteInfo {
    pub title: &'static str,
    pub tagline: &'static str,
    pub docs_href: &'static str,
    pub repository: &'static str,
    pub copyright_holder: &'static str,
    pub footer: &'static [FooterColumn],
}

impl SiteInfo {
    pub fn copyright(&self, year: u16) -> String {
        format!("Copyright © {} {}", year, self.copyright_holder)
    }
}

pub const COPYRIGHT_YEAR: u16 = 2026;

pub static SITE: SiteInfo = SiteInfo {
    title: "Metrics Layer",
    tagline: "The open source metrics layer for your data warehouse",
    docs_href: "/docs/introduction",
    repository: "https://github.com/Zenlytic/metrics_layer",
    copyright_holder: "Zenlytic, Inc.",
    footer: &[
        FooterColumn {
            title: "Docs",
            links: &[
                FooterLink {
                    label: "Introduction",
                    href: "/docs/introduction",
                },
                FooterLink {
                    label: "Configuration",
                    href: "/docs/configuration",
                },
            ],
        },
        FooterColumn {
            title: "Community",
            links: &[FooterLink {
                label: "Issues",
                href: "https://github.com/Zenlytic/metrics_layer/issues",
            }],
        },
        FooterColumn {
            title: "More",
            links: &[FooterLink {
                label: "GitHub",
                href: "https://github.com/Zenlytic/metrics_layer",
            }],
        },
    ],
};
