//! # siggly-pages
//!
//! Leptos SSR renderer and content registry for the Siggly SEO landing pages.
//!
//! Every landing page is a [`types::PageDescription`]: plain data authored in
//! the [`content`] modules. Rendering maps one description onto a fixed
//! sequence of visual regions (hero, stats, feature grid, content sections,
//! testimonial, FAQ, CTA) and produces static HTML.
//!
//! ## Quick Start
//!
//! ```rust
//! use siggly_pages::content::ContentRegistry;
//! use siggly_pages::types::Category;
//! use siggly_pages::{render_document, DocumentOptions};
//!
//! let registry = ContentRegistry::builtin().unwrap();
//! let page = registry.find(Category::EmailSignatures, "accountant").unwrap();
//!
//! let html = render_document(page, &DocumentOptions::default());
//! assert!(html.starts_with("<!DOCTYPE html>"));
//! ```
//!
//! ## Architecture
//!
//! - [`types`] - Data model for pages and content sections
//! - [`layout`] - Region plan: which regions a page shows, in which order
//! - [`components`] - Leptos UI components
//! - [`content`] - Built-in page data and the validated registry
//! - [`styles`] - CSS constants
//!
//! ## Leptos 0.8 SSR
//!
//! Rendering goes through Leptos 0.8's `RenderHtml` trait. No reactive
//! runtime or hydration is needed - pure static HTML generation.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod components;
pub mod content;
mod error;
pub mod layout;
pub mod styles;
pub mod types;

pub use error::ContentError;

use components::{LandingDocument, SectionRenderer, SeoLandingPage};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;
use types::{ContentSection, PageDescription};

/// Render the body of one landing page as an HTML fragment.
///
/// The fragment is a single `<main class="landing-page">` element. Use it
/// when a host framework owns the document shell; otherwise use
/// [`render_document`].
///
/// Rendering is pure: the same page always produces the same string.
pub fn render_page(page: &PageDescription) -> String {
    view! { <SeoLandingPage page=page.clone() /> }.to_html()
}

/// Render one content section on its own. Unknown sections produce an empty string.
pub fn render_section(section: &ContentSection) -> String {
    // an empty view still serializes to placeholder markup
    if section.kind().is_none() {
        return String::new();
    }
    view! { <SectionRenderer section=section.clone() /> }.to_html()
}

/// Render a complete HTML document for one landing page.
///
/// # Example
///
/// ```rust
/// use siggly_pages::content::ContentRegistry;
/// use siggly_pages::{render_document, DocumentOptions};
///
/// let registry = ContentRegistry::builtin().unwrap();
/// let page = &registry.pages()[0];
/// let html = render_document(page, &DocumentOptions::default());
/// assert!(html.contains("<link rel=\"canonical\""));
/// ```
pub fn render_document(page: &PageDescription, options: &DocumentOptions) -> String {
    let doc = view! {
        <LandingDocument page=page.clone() options=options.clone() />
    };

    let html = doc.to_html();

    // Leptos doesn't include DOCTYPE, so we add it
    format!("<!DOCTYPE html>\n{}", html)
}

/// Site-wide settings for the document shell.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DocumentOptions {
    /// Brand name shown in the header and footer
    pub site_name: String,
    /// Absolute origin prepended to canonical paths, e.g. `https://siggly.io`
    pub base_url: String,
}

impl Default for DocumentOptions {
    fn default() -> Self {
        Self {
            site_name: "Siggly".into(),
            base_url: "https://siggly.io".into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{
        Badge, Category, ComparisonCell, ComparisonRow, Cta, Faq, Feature, Hero, PageStatus, Seo,
        Stat, Testimonial, Theme,
    };

    fn accountant(feature_count: usize) -> PageDescription {
        PageDescription {
            slug: "accountant".into(),
            category: Category::EmailSignatures,
            status: PageStatus::Live,
            seo: Seo {
                title: "Email Signatures for Accountants | Siggly".into(),
                description: "Professional email signatures for accounting firms.".into(),
                keywords: vec!["accountant email signature".into(), "cpa signature".into()],
                canonical: "/email-signatures/accountant".into(),
            },
            breadcrumbs: vec![],
            hero: Hero {
                badge: None,
                title: "Email signatures for accountants".into(),
                description: "Look the part in every client email.".into(),
                theme: Theme::Emerald,
            },
            stats: vec![],
            features: (0..feature_count)
                .map(|i| Feature {
                    icon: "briefcase".into(),
                    title: format!("Feature {i}"),
                    description: "Description".into(),
                })
                .collect(),
            sections: vec![],
            testimonial: None,
            faqs: vec![],
            cta: Cta {
                title: "Ready for a signature your clients trust?".into(),
                description: "Set up your firm in minutes.".into(),
                theme: None,
            },
        }
    }

    #[test]
    fn minimal_page_renders_hero_features_and_cta_only() {
        let html = render_page(&accountant(4));

        assert!(html.contains("data-region=\"hero\""));
        assert!(html.contains("data-region=\"feature-grid\""));
        assert!(html.contains("data-columns=\"4\""));
        assert!(html.contains("features-grid cols-4"));
        assert!(html.contains("data-region=\"cta\""));

        assert!(!html.contains("data-region=\"stats\""));
        assert!(!html.contains("data-region=\"section\""));
        assert!(!html.contains("data-region=\"testimonial\""));
        assert!(!html.contains("data-region=\"faq\""));
        assert!(!html.contains("data-region=\"coming-soon\""));
        assert_eq!(html.matches("data-region=").count(), 3);
    }

    #[test]
    fn long_feature_lists_wrap_to_three_columns() {
        let html = render_page(&accountant(7));
        assert!(html.contains("data-columns=\"3\""));
        assert_eq!(html.matches("class=\"feature-card\"").count(), 7);
    }

    #[test]
    fn optional_regions_render_when_present() {
        let mut page = accountant(3);
        page.status = PageStatus::ComingSoon;
        page.hero.badge = Some(Badge {
            icon: "Calculator".into(),
            text: "Built for CPAs".into(),
        });
        page.stats = vec![Stat {
            value: "2,500+".into(),
            label: "Firms".into(),
        }];
        page.sections = vec![
            ContentSection::ComparisonTable {
                title: "Siggly vs Exclaimer".into(),
                competitor: "Exclaimer".into(),
                rows: vec![ComparisonRow {
                    feature: "Central management".into(),
                    siggly: ComparisonCell::Flag(true),
                    competitor: ComparisonCell::Text("Limited".into()),
                }],
            },
            ContentSection::Unknown,
        ];
        page.testimonial = Some(Testimonial {
            quote: "Our signatures finally match.".into(),
            author: "Dana Reyes".into(),
            role: "Partner, Reyes & Co.".into(),
        });
        page.faqs = vec![Faq {
            question: "Does it work with Outlook?".into(),
            answer: "Yes.".into(),
        }];

        let html = render_page(&page);
        let order = [
            "data-region=\"coming-soon\"",
            "data-region=\"hero\"",
            "data-region=\"stats\"",
            "data-region=\"feature-grid\"",
            "data-region=\"section\"",
            "data-region=\"testimonial\"",
            "data-region=\"faq\"",
            "data-region=\"cta\"",
        ];
        let positions: Vec<usize> = order.iter().map(|m| html.find(m).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");

        // the unknown section is dropped silently
        assert_eq!(html.matches("data-region=\"section\"").count(), 1);
        // unresolvable badge icon falls back to the default
        assert!(html.contains("data-icon=\"sparkles\""));
        assert!(html.contains("Built for CPAs"));
    }

    #[test]
    fn cta_uses_hero_theme_by_default() {
        let html = render_page(&accountant(2));
        assert!(html.contains("class=\"cta theme-emerald\""));

        let mut page = accountant(2);
        page.cta.theme = Some(Theme::Rose);
        let html = render_page(&page);
        assert!(html.contains("class=\"cta theme-rose\""));
    }

    #[test]
    fn rendering_is_idempotent() {
        let page = accountant(5);
        assert_eq!(render_page(&page), render_page(&page));
        let options = DocumentOptions::default();
        assert_eq!(render_document(&page, &options), render_document(&page, &options));
    }

    #[test]
    fn document_has_head_metadata() {
        let html = render_document(&accountant(3), &DocumentOptions::default());

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains("<title>Email Signatures for Accountants | Siggly</title>"));
        assert!(html.contains("https://siggly.io/email-signatures/accountant"));
        assert!(html.contains("accountant email signature, cpa signature"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("script-src"));
    }

    #[test]
    fn document_trims_trailing_slash_from_base_url() {
        let options = DocumentOptions {
            site_name: "Siggly".into(),
            base_url: "https://staging.siggly.io/".into(),
        };
        let html = render_document(&accountant(3), &options);
        assert!(html.contains("https://staging.siggly.io/email-signatures/accountant"));
    }
}
