//! Integration tests over the built-in landing page content.
//!
//! Every authored page must validate, render deterministically and produce
//! exactly the regions its layout plan promises.

use siggly_pages::content::ContentRegistry;
use siggly_pages::layout::{PageLayout, RegionKind, feature_grid_columns};
use siggly_pages::types::{Category, ContentSection, PageDescription, PageStatus};
use siggly_pages::{DocumentOptions, render_document, render_page};

fn registry() -> &'static ContentRegistry {
    ContentRegistry::builtin().expect("built-in content must validate")
}

fn region_marker(kind: RegionKind) -> String {
    format!("data-region=\"{}\"", kind.data_attr())
}

mod registry_shape {
    use super::*;

    #[test]
    fn every_category_has_live_pages() {
        for category in Category::ALL {
            let live = registry()
                .by_category(category)
                .filter(|p| p.status == PageStatus::Live)
                .count();
            assert!(live > 0, "{category} has no live pages");
        }
    }

    #[test]
    fn routes_are_unique() {
        let mut routes: Vec<String> = registry().pages().iter().map(|p| p.route()).collect();
        let total = routes.len();
        routes.sort();
        routes.dedup();
        assert_eq!(routes.len(), total);
    }

    #[test]
    fn every_route_resolves_back_to_its_page() {
        for page in registry().pages() {
            let found = registry().find_route(&page.route()).expect("route lookup");
            assert_eq!(found, page);
        }
    }

    #[test]
    fn content_uses_every_section_type() {
        let mut tags: Vec<&str> = registry()
            .pages()
            .iter()
            .flat_map(|p| p.sections.iter())
            .filter_map(ContentSection::kind)
            .map(|k| k.tag())
            .collect();
        tags.sort_unstable();
        tags.dedup();
        assert_eq!(
            tags,
            [
                "benefits",
                "checklist",
                "comparison-table",
                "how-it-works",
                "prose",
                "use-cases-grid"
            ]
        );
    }
}

mod rendering {
    use super::*;

    #[test]
    fn every_page_renders_its_planned_regions() {
        for page in registry().pages() {
            let html = render_page(page);
            let plan = PageLayout::plan(page);

            assert_eq!(
                html.matches("data-region=").count(),
                plan.regions.len(),
                "region count for {}",
                page.route()
            );

            let mut cursor = 0;
            for kind in plan.kinds() {
                let marker = region_marker(kind);
                let found = html[cursor..]
                    .find(&marker)
                    .unwrap_or_else(|| panic!("{} missing {marker} in order", page.route()));
                cursor += found + marker.len();
            }
        }
    }

    #[test]
    fn every_page_has_hero_feature_grid_and_cta() {
        for page in registry().pages() {
            let html = render_page(page);
            for marker in ["hero", "feature-grid", "cta"] {
                assert!(
                    html.contains(&format!("data-region=\"{marker}\"")),
                    "{} lacks {marker}",
                    page.route()
                );
            }
            let columns = feature_grid_columns(page.features.len());
            assert!(html.contains(&format!("data-columns=\"{columns}\"")));
            assert_eq!(
                html.matches("class=\"feature-card\"").count(),
                page.features.len()
            );
        }
    }

    #[test]
    fn coming_soon_pages_show_the_banner() {
        for page in registry().pages() {
            let html = render_page(page);
            assert_eq!(
                html.contains("data-region=\"coming-soon\""),
                page.is_coming_soon(),
                "{}",
                page.route()
            );
        }
    }

    #[test]
    fn rendering_is_deterministic() {
        let options = DocumentOptions::default();
        for page in registry().pages() {
            assert_eq!(render_page(page), render_page(page));
            assert_eq!(
                render_document(page, &options),
                render_document(page, &options)
            );
        }
    }

    #[test]
    fn documents_point_canonical_at_their_route() {
        let options = DocumentOptions::default();
        for page in registry().pages() {
            let html = render_document(page, &options);
            let canonical = format!("https://siggly.io{}", page.route());
            assert!(html.contains(&canonical), "{canonical}");
        }
    }
}

mod json_content {
    use super::*;

    const ACCOUNTANT_JSON: &str = r#"{
        "slug": "accountant",
        "category": "email-signatures",
        "seo": {
            "title": "Email Signatures for Accountants",
            "description": "Signatures for accounting firms.",
            "keywords": ["accountant email signature"],
            "canonical": "/email-signatures/accountant"
        },
        "hero": {
            "title": "Signatures for accountants",
            "description": "Look the part.",
            "theme": "emerald"
        },
        "features": [
            { "icon": "Shield", "title": "Disclaimers", "description": "Always attached." },
            { "icon": "Award", "title": "Credentials", "description": "CPA and more." },
            { "icon": "Clock", "title": "Tax season", "description": "Scheduled banners." },
            { "icon": "Users", "title": "Whole firm", "description": "One dashboard." }
        ],
        "cta": { "title": "Get started", "description": "Free for 14 days." }
    }"#;

    fn accountant() -> PageDescription {
        serde_json::from_str(ACCOUNTANT_JSON).expect("valid page json")
    }

    #[test]
    fn minimal_page_has_exactly_hero_grid_and_cta() {
        let page = accountant();
        assert_eq!(page.status, PageStatus::Live);

        let plan = PageLayout::plan(&page);
        assert_eq!(
            plan.kinds(),
            vec![
                RegionKind::Hero,
                RegionKind::FeatureGrid { columns: 4 },
                RegionKind::Cta
            ]
        );

        let html = render_page(&page);
        assert!(html.contains("data-columns=\"4\""));
        for absent in ["stats", "section", "testimonial", "faq"] {
            assert!(!html.contains(&format!("data-region=\"{absent}\"")));
        }
    }

    #[test]
    fn unknown_section_types_deserialize_and_render_nothing() {
        let mut value: serde_json::Value = serde_json::from_str(ACCOUNTANT_JSON).unwrap();
        value["sections"] = serde_json::json!([
            { "type": "video-embed", "url": "https://example.com/v.mp4" },
            { "type": "checklist", "title": "Include", "items": ["Name", "Title"] }
        ]);
        let page: PageDescription = serde_json::from_value(value).unwrap();

        assert_eq!(page.sections[0], ContentSection::Unknown);
        let html = render_page(&page);
        assert_eq!(html.matches("data-region=\"section\"").count(), 1);
        assert!(html.contains("data-section=\"checklist\""));
    }

    #[test]
    fn built_in_pages_survive_json() {
        let page = registry()
            .find(Category::Migrate, "from-exclaimer")
            .expect("migration page");
        let json = serde_json::to_string(page).unwrap();
        let back: PageDescription = serde_json::from_str(&json).unwrap();
        assert_eq!(render_page(&back), render_page(page));
    }
}
