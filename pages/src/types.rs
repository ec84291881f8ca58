//! Landing page data types.
//!
//! These types define the data model for every landing page. They're designed to be:
//!
//! - **Serializable** - content can be exported or diffed as JSON via serde
//! - **Clone-friendly** - components take owned props without borrowing issues
//! - **Forward-compatible** - unknown section tags deserialize to
//!   [`ContentSection::Unknown`] instead of failing
//!
//! # Example
//!
//! ```rust
//! use siggly_pages::types::{Category, ContentSection};
//!
//! let section: ContentSection = serde_json::from_str(
//!     r#"{ "type": "checklist", "title": "Included", "items": ["Logo", "Banner"] }"#,
//! ).unwrap();
//! assert!(matches!(section, ContentSection::Checklist { .. }));
//!
//! assert_eq!(Category::EmailSignatures.segment(), "email-signatures");
//! ```

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ContentError;

/// Landing page category. Serialized as its URL segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// Signatures for a given profession (`/email-signatures/accountant`)
    EmailSignatures,
    /// Product feature pages
    Features,
    /// How-to guides
    Guides,
    /// Switching from a competitor
    Migrate,
    /// Team and company use cases
    UseCases,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 5] = [
        Category::EmailSignatures,
        Category::Features,
        Category::Guides,
        Category::Migrate,
        Category::UseCases,
    ];

    /// URL segment for this category.
    pub fn segment(self) -> &'static str {
        match self {
            Category::EmailSignatures => "email-signatures",
            Category::Features => "features",
            Category::Guides => "guides",
            Category::Migrate => "migrate",
            Category::UseCases => "use-cases",
        }
    }

    /// Human label used in breadcrumbs.
    pub fn label(self) -> &'static str {
        match self {
            Category::EmailSignatures => "Email Signatures",
            Category::Features => "Features",
            Category::Guides => "Guides",
            Category::Migrate => "Migrate",
            Category::UseCases => "Use Cases",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.segment())
    }
}

impl FromStr for Category {
    type Err = ContentError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.segment() == s)
            .ok_or_else(|| ContentError::UnknownCategory(s.to_string()))
    }
}

/// Publication status. Coming-soon pages render with a banner.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PageStatus {
    /// Launched and exported by default
    #[default]
    Live,
    /// Announced ahead of launch
    ComingSoon,
}

/// Colour palette for hero and CTA blocks.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Theme {
    /// `theme-blue`, the default
    #[default]
    Blue,
    /// `theme-indigo`
    Indigo,
    /// `theme-violet`
    Violet,
    /// `theme-emerald`
    Emerald,
    /// `theme-teal`
    Teal,
    /// `theme-amber`
    Amber,
    /// `theme-rose`
    Rose,
    /// `theme-slate`
    Slate,
}

impl Theme {
    /// CSS class carrying the palette variables.
    pub fn class(self) -> &'static str {
        match self {
            Theme::Blue => "theme-blue",
            Theme::Indigo => "theme-indigo",
            Theme::Violet => "theme-violet",
            Theme::Emerald => "theme-emerald",
            Theme::Teal => "theme-teal",
            Theme::Amber => "theme-amber",
            Theme::Rose => "theme-rose",
            Theme::Slate => "theme-slate",
        }
    }
}

/// Document head metadata. Never used for layout decisions.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Seo {
    /// `<title>` text
    pub title: String,
    /// Meta description
    pub description: String,
    /// Meta keywords, joined with `", "`
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Site-relative canonical path, e.g. `/email-signatures/accountant`
    pub canonical: String,
}

/// One step of the breadcrumb trail.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Breadcrumb {
    /// Link text
    pub label: String,
    /// Site-relative target
    pub href: String,
}

/// Small icon + text label above the hero headline.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Badge {
    /// Free-text icon key, resolved with [`crate::components::IconKey::resolve`]
    pub icon: String,
    /// Label next to the icon
    pub text: String,
}

/// Top-of-page banner.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Hero {
    /// Optional badge above the headline
    #[serde(default)]
    pub badge: Option<Badge>,
    /// Headline (`<h1>`)
    pub title: String,
    /// Lead paragraph under the headline
    pub description: String,
    /// Palette for the hero, and for the CTA unless it sets its own
    #[serde(default)]
    pub theme: Theme,
}

/// Stat callout, e.g. `("10,000+", "Signatures deployed")`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Stat {
    /// Headline number, already formatted
    pub value: String,
    /// Caption under the number
    pub label: String,
}

/// Feature grid entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Feature {
    /// Free-text icon key
    pub icon: String,
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
}

/// One cell of a comparison table.
///
/// Booleans render as check / cross icons, strings as literal text.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ComparisonCell {
    /// Supported (`true`) or not (`false`)
    Flag(bool),
    /// Qualified answer such as "Limited"
    Text(String),
}

impl From<bool> for ComparisonCell {
    fn from(value: bool) -> Self {
        ComparisonCell::Flag(value)
    }
}

impl From<&str> for ComparisonCell {
    fn from(value: &str) -> Self {
        ComparisonCell::Text(value.to_string())
    }
}

/// Comparison table row: Siggly vs. the named competitor.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ComparisonRow {
    /// Row header
    pub feature: String,
    /// Siggly column
    pub siggly: ComparisonCell,
    /// Competitor column
    pub competitor: ComparisonCell,
}

/// Numbered how-it-works step.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step label shown in the marker, usually "1", "2", ...
    pub step: String,
    /// Step heading
    pub title: String,
    /// Step body
    pub description: String,
}

/// Benefits grid card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Benefit {
    /// Free-text icon key
    pub icon: String,
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
}

/// Use-case grid card.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct UseCase {
    /// Card heading
    pub title: String,
    /// Card body
    pub description: String,
}

/// Free-form content block placed between the feature grid and the testimonial.
///
/// The set of variants is closed for rendering purposes, but any other `type`
/// value deserializes to [`ContentSection::Unknown`] so newer content can be
/// served by an older renderer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum ContentSection {
    /// Check-marked items in a two-column grid
    Checklist {
        /// Section heading
        title: String,
        /// Items, in display order
        #[serde(default)]
        items: Vec<String>,
    },
    /// Siggly vs. `competitor` table
    ComparisonTable {
        /// Section heading
        title: String,
        /// Competitor column header
        competitor: String,
        /// Table rows
        #[serde(default)]
        rows: Vec<ComparisonRow>,
    },
    /// Numbered step sequence
    HowItWorks {
        /// Section heading
        title: String,
        /// Steps, in order
        #[serde(default)]
        steps: Vec<Step>,
    },
    /// Icon-card grid
    Benefits {
        /// Section heading
        title: String,
        /// Cards
        #[serde(default)]
        items: Vec<Benefit>,
    },
    /// Paragraphs of running text
    Prose {
        /// Section heading
        title: String,
        /// Paragraphs, in order
        #[serde(default)]
        paragraphs: Vec<String>,
    },
    /// Title + description cards
    UseCasesGrid {
        /// Section heading
        title: String,
        /// Cards
        #[serde(default)]
        items: Vec<UseCase>,
    },
    /// Any `type` this build doesn't know. Renders nothing.
    #[serde(other)]
    Unknown,
}

/// Tag of a recognised [`ContentSection`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SectionKind {
    /// `checklist`
    Checklist,
    /// `comparison-table`
    ComparisonTable,
    /// `how-it-works`
    HowItWorks,
    /// `benefits`
    Benefits,
    /// `prose`
    Prose,
    /// `use-cases-grid`
    UseCasesGrid,
}

impl SectionKind {
    /// Wire tag, identical to the serde `type` value.
    pub fn tag(self) -> &'static str {
        match self {
            SectionKind::Checklist => "checklist",
            SectionKind::ComparisonTable => "comparison-table",
            SectionKind::HowItWorks => "how-it-works",
            SectionKind::Benefits => "benefits",
            SectionKind::Prose => "prose",
            SectionKind::UseCasesGrid => "use-cases-grid",
        }
    }
}

impl ContentSection {
    /// Kind of this section, `None` for unrecognised tags.
    pub fn kind(&self) -> Option<SectionKind> {
        match self {
            ContentSection::Checklist { .. } => Some(SectionKind::Checklist),
            ContentSection::ComparisonTable { .. } => Some(SectionKind::ComparisonTable),
            ContentSection::HowItWorks { .. } => Some(SectionKind::HowItWorks),
            ContentSection::Benefits { .. } => Some(SectionKind::Benefits),
            ContentSection::Prose { .. } => Some(SectionKind::Prose),
            ContentSection::UseCasesGrid { .. } => Some(SectionKind::UseCasesGrid),
            ContentSection::Unknown => None,
        }
    }
}

/// Customer quote.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Testimonial {
    /// Quote text, without quotation marks
    pub quote: String,
    /// Person quoted
    pub author: String,
    /// Job title and company, e.g. "Office Manager, Hart & Co."
    pub role: String,
}

/// FAQ entry.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Faq {
    /// Disclosure summary
    pub question: String,
    /// Revealed answer
    pub answer: String,
}

/// Bottom-of-page conversion block. Required on every page.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Cta {
    /// Heading
    pub title: String,
    /// Supporting line under the heading
    pub description: String,
    /// Falls back to the hero theme when absent
    #[serde(default)]
    pub theme: Option<Theme>,
}

/// Everything needed to render one landing page.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PageDescription {
    /// Last route segment. Lowercase ASCII letters, digits and `-`.
    pub slug: String,
    /// First route segment
    pub category: Category,
    /// Defaults to [`PageStatus::Live`]
    #[serde(default)]
    pub status: PageStatus,
    /// Head metadata
    pub seo: Seo,
    /// Trail shown inside the hero. Empty hides it.
    #[serde(default)]
    pub breadcrumbs: Vec<Breadcrumb>,
    /// Always rendered
    pub hero: Hero,
    /// Stats bar. Empty hides it.
    #[serde(default)]
    pub stats: Vec<Stat>,
    /// Feature grid cards. Must not be empty.
    pub features: Vec<Feature>,
    /// Content sections, rendered in order
    #[serde(default)]
    pub sections: Vec<ContentSection>,
    /// Optional quote block
    #[serde(default)]
    pub testimonial: Option<Testimonial>,
    /// FAQ block. Empty hides it.
    #[serde(default)]
    pub faqs: Vec<Faq>,
    /// Always rendered
    pub cta: Cta,
}

impl PageDescription {
    /// Site-relative route: `/<category>/<slug>`.
    pub fn route(&self) -> String {
        format!("/{}/{}", self.category.segment(), self.slug)
    }

    /// Theme for the CTA block (explicit override or the hero theme).
    pub fn cta_theme(&self) -> Theme {
        self.cta.theme.unwrap_or(self.hero.theme)
    }

    /// Whether the page is announced but not launched.
    pub fn is_coming_soon(&self) -> bool {
        self.status == PageStatus::ComingSoon
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_section_tag_deserializes_to_unknown() {
        let section: ContentSection =
            serde_json::from_str(r#"{ "type": "video-embed", "title": "Watch", "url": "x" }"#)
                .unwrap();
        assert_eq!(section, ContentSection::Unknown);
        assert_eq!(section.kind(), None);
    }

    #[test]
    fn comparison_cells_are_untagged() {
        let row: ComparisonRow = serde_json::from_str(
            r#"{ "feature": "Central management", "siggly": true, "competitor": "Limited" }"#,
        )
        .unwrap();
        assert_eq!(row.siggly, ComparisonCell::Flag(true));
        assert_eq!(row.competitor, ComparisonCell::Text("Limited".into()));
    }

    #[test]
    fn section_tags_match_serde_names() {
        let section = ContentSection::UseCasesGrid {
            title: "Teams".into(),
            items: vec![],
        };
        let json = serde_json::to_value(&section).unwrap();
        assert_eq!(json["type"], "use-cases-grid");
        assert_eq!(section.kind().map(SectionKind::tag), Some("use-cases-grid"));
    }

    #[test]
    fn category_round_trips_through_segment() {
        for category in Category::ALL {
            assert_eq!(category.segment().parse::<Category>().unwrap(), category);
        }
        assert!(matches!(
            "pricing".parse::<Category>(),
            Err(ContentError::UnknownCategory(s)) if s == "pricing"
        ));
    }

    #[test]
    fn status_defaults_to_live() {
        let json = r#"{
            "slug": "lawyer",
            "category": "email-signatures",
            "seo": { "title": "t", "description": "d", "canonical": "/email-signatures/lawyer" },
            "hero": { "title": "h", "description": "d" },
            "features": [{ "icon": "shield", "title": "f", "description": "d" }],
            "cta": { "title": "c", "description": "d" }
        }"#;
        let page: PageDescription = serde_json::from_str(json).unwrap();
        assert_eq!(page.status, PageStatus::Live);
        assert_eq!(page.hero.theme, Theme::Blue);
        assert!(page.sections.is_empty());
        assert_eq!(page.route(), "/email-signatures/lawyer");
        assert_eq!(page.cta_theme(), Theme::Blue);
    }
}
