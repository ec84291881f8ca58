//! Region plan for a landing page.
//!
//! [`PageLayout::plan`] decides which visual regions a page shows and in what
//! order. The [`SeoLandingPage`](crate::components::SeoLandingPage) component
//! renders exactly this plan, so shape rules live here and are testable
//! without parsing HTML.
//!
//! Fixed order:
//!
//! ```text
//! coming-soon banner?  (status == ComingSoon)
//! hero
//! stats?               (non-empty)
//! feature grid         (always)
//! section*             (one per recognised content section)
//! testimonial?         (present)
//! faq?                 (non-empty)
//! cta                  (always)
//! ```

use crate::types::{
    Breadcrumb, ContentSection, Cta, Faq, Feature, Hero, PageDescription, SectionKind, Stat,
    Testimonial, Theme,
};

/// Largest feature count that maps directly to a column count.
pub const MAX_DIRECT_COLUMNS: usize = 4;

/// Column count used once the feature list outgrows [`MAX_DIRECT_COLUMNS`].
pub const WRAPPED_COLUMNS: usize = 3;

/// Feature grid column count for `count` features.
pub fn feature_grid_columns(count: usize) -> usize {
    if count <= MAX_DIRECT_COLUMNS {
        count
    } else {
        WRAPPED_COLUMNS
    }
}

/// Discriminant of a [`Region`], handy for assertions and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegionKind {
    /// Banner above the hero on unreleased pages
    ComingSoon,
    /// Headline block with breadcrumbs and badge
    Hero,
    /// Row of headline numbers
    Stats,
    /// Feature cards laid out in `columns` columns
    FeatureGrid {
        /// Grid column count, see [`feature_grid_columns`]
        columns: usize,
    },
    /// One recognised content section
    Section(SectionKind),
    /// Customer quote
    Testimonial,
    /// Question and answer list
    Faq,
    /// Closing call to action
    Cta,
}

impl RegionKind {
    /// Value of the `data-region` attribute on the region's root element.
    pub fn data_attr(self) -> &'static str {
        match self {
            RegionKind::ComingSoon => "coming-soon",
            RegionKind::Hero => "hero",
            RegionKind::Stats => "stats",
            RegionKind::FeatureGrid { .. } => "feature-grid",
            RegionKind::Section(_) => "section",
            RegionKind::Testimonial => "testimonial",
            RegionKind::Faq => "faq",
            RegionKind::Cta => "cta",
        }
    }
}

/// One planned region, borrowing its data from the page.
///
/// Variants mirror [`RegionKind`] and carry what the matching component needs.
#[derive(Clone, Debug, PartialEq)]
pub enum Region<'a> {
    /// Coming-soon banner
    ComingSoon,
    /// Hero block
    Hero {
        /// Hero content
        hero: &'a Hero,
        /// Trail rendered inside the hero
        breadcrumbs: &'a [Breadcrumb],
    },
    /// Stats bar, never empty
    Stats(&'a [Stat]),
    /// Feature grid
    FeatureGrid {
        /// Cards, never empty for registry pages
        features: &'a [Feature],
        /// Column count from [`feature_grid_columns`]
        columns: usize,
    },
    /// Recognised content section
    Section {
        /// Section data
        section: &'a ContentSection,
        /// Its resolved kind
        kind: SectionKind,
    },
    /// Customer quote
    Testimonial(&'a Testimonial),
    /// FAQ list, never empty
    Faq(&'a [Faq]),
    /// Closing CTA
    Cta {
        /// CTA content
        cta: &'a Cta,
        /// Effective theme, see [`PageDescription::cta_theme`]
        theme: Theme,
    },
}

impl Region<'_> {
    /// Data-free discriminant of this region.
    pub fn kind(&self) -> RegionKind {
        match self {
            Region::ComingSoon => RegionKind::ComingSoon,
            Region::Hero { .. } => RegionKind::Hero,
            Region::Stats(_) => RegionKind::Stats,
            Region::FeatureGrid { columns, .. } => RegionKind::FeatureGrid { columns: *columns },
            Region::Section { kind, .. } => RegionKind::Section(*kind),
            Region::Testimonial(_) => RegionKind::Testimonial,
            Region::Faq(_) => RegionKind::Faq,
            Region::Cta { .. } => RegionKind::Cta,
        }
    }
}

/// Ordered regions for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout<'a> {
    /// Regions in render order
    pub regions: Vec<Region<'a>>,
}

impl<'a> PageLayout<'a> {
    /// Plan the regions for `page`. Absent optional fields produce no region.
    pub fn plan(page: &'a PageDescription) -> Self {
        let mut regions = Vec::with_capacity(8 + page.sections.len());

        if page.is_coming_soon() {
            regions.push(Region::ComingSoon);
        }
        regions.push(Region::Hero {
            hero: &page.hero,
            breadcrumbs: &page.breadcrumbs,
        });
        if !page.stats.is_empty() {
            regions.push(Region::Stats(&page.stats));
        }
        regions.push(Region::FeatureGrid {
            features: &page.features,
            columns: feature_grid_columns(page.features.len()),
        });
        // Unrecognised sections render nothing, so they get no region
        regions.extend(page.sections.iter().filter_map(|section| {
            section.kind().map(|kind| Region::Section { section, kind })
        }));
        if let Some(testimonial) = &page.testimonial {
            regions.push(Region::Testimonial(testimonial));
        }
        if !page.faqs.is_empty() {
            regions.push(Region::Faq(&page.faqs));
        }
        regions.push(Region::Cta {
            cta: &page.cta,
            theme: page.cta_theme(),
        });

        Self { regions }
    }

    /// Kinds of the planned regions, in render order.
    pub fn kinds(&self) -> Vec<RegionKind> {
        self.regions.iter().map(Region::kind).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Category, PageStatus, Seo};
    use pretty_assertions::assert_eq;

    fn feature(n: usize) -> Feature {
        Feature {
            icon: "check".into(),
            title: format!("Feature {n}"),
            description: "Description".into(),
        }
    }

    fn bare_page(feature_count: usize) -> PageDescription {
        PageDescription {
            slug: "accountant".into(),
            category: Category::EmailSignatures,
            status: PageStatus::Live,
            seo: Seo {
                title: "Email Signatures for Accountants".into(),
                description: "d".into(),
                keywords: vec![],
                canonical: "/email-signatures/accountant".into(),
            },
            breadcrumbs: vec![],
            hero: Hero {
                title: "Professional signatures for accountants".into(),
                description: "d".into(),
                ..Default::default()
            },
            stats: vec![],
            features: (0..feature_count).map(feature).collect(),
            sections: vec![],
            testimonial: None,
            faqs: vec![],
            cta: Cta {
                title: "Get started".into(),
                description: "d".into(),
                theme: None,
            },
        }
    }

    #[test]
    fn column_count_follows_feature_count() {
        assert_eq!(feature_grid_columns(1), 1);
        assert_eq!(feature_grid_columns(2), 2);
        assert_eq!(feature_grid_columns(3), 3);
        assert_eq!(feature_grid_columns(4), 4);
        for count in 5..20 {
            assert_eq!(feature_grid_columns(count), 3, "count = {count}");
        }
    }

    #[test]
    fn minimal_page_plans_hero_grid_and_cta_only() {
        let page = bare_page(4);
        let layout = PageLayout::plan(&page);
        assert_eq!(
            layout.kinds(),
            vec![
                RegionKind::Hero,
                RegionKind::FeatureGrid { columns: 4 },
                RegionKind::Cta,
            ]
        );
    }

    #[test]
    fn full_page_keeps_fixed_order() {
        let mut page = bare_page(6);
        page.status = PageStatus::ComingSoon;
        page.stats = vec![Stat {
            value: "5 min".into(),
            label: "Setup".into(),
        }];
        page.sections = vec![
            ContentSection::Prose {
                title: "Why".into(),
                paragraphs: vec!["p".into()],
            },
            ContentSection::Checklist {
                title: "Included".into(),
                items: vec!["a".into()],
            },
        ];
        page.testimonial = Some(Testimonial {
            quote: "q".into(),
            author: "a".into(),
            role: "r".into(),
        });
        page.faqs = vec![Faq {
            question: "q".into(),
            answer: "a".into(),
        }];

        let layout = PageLayout::plan(&page);
        assert_eq!(
            layout.kinds(),
            vec![
                RegionKind::ComingSoon,
                RegionKind::Hero,
                RegionKind::Stats,
                RegionKind::FeatureGrid { columns: 3 },
                RegionKind::Section(SectionKind::Prose),
                RegionKind::Section(SectionKind::Checklist),
                RegionKind::Testimonial,
                RegionKind::Faq,
                RegionKind::Cta,
            ]
        );
    }

    #[test]
    fn unknown_sections_are_not_planned() {
        let mut page = bare_page(2);
        page.sections = vec![ContentSection::Unknown];
        let layout = PageLayout::plan(&page);
        assert_eq!(
            layout.kinds(),
            vec![
                RegionKind::Hero,
                RegionKind::FeatureGrid { columns: 2 },
                RegionKind::Cta,
            ]
        );
    }

    #[test]
    fn cta_inherits_hero_theme_unless_overridden() {
        let mut page = bare_page(3);
        page.hero.theme = Theme::Emerald;
        let layout = PageLayout::plan(&page);
        assert!(matches!(
            layout.regions.last(),
            Some(Region::Cta { theme: Theme::Emerald, .. })
        ));

        page.cta.theme = Some(Theme::Slate);
        let layout = PageLayout::plan(&page);
        assert!(matches!(
            layout.regions.last(),
            Some(Region::Cta { theme: Theme::Slate, .. })
        ));
    }
}
