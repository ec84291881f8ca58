//! Built-in landing page content and the validated registry.
//!
//! Each category has its own module exporting `pages()`. The registry
//! collects them once per process, checks the content invariants and then
//! serves read-only lookups.

mod email_signatures;
mod features;
mod guides;
mod helpers;
mod migrations;
mod use_cases;

use std::collections::HashSet;

use once_cell::sync::OnceCell;
use tracing::debug;

use crate::error::ContentError;
use crate::types::{Category, PageDescription};

static BUILTIN: OnceCell<ContentRegistry> = OnceCell::new();

/// Every authored page, grouped by category in navigation order.
pub fn all_pages() -> Vec<PageDescription> {
    let mut pages = Vec::new();
    pages.extend(email_signatures::pages());
    pages.extend(features::pages());
    pages.extend(guides::pages());
    pages.extend(migrations::pages());
    pages.extend(use_cases::pages());
    pages
}

/// Validated, immutable set of landing pages.
#[derive(Clone, Debug)]
pub struct ContentRegistry {
    pages: Vec<PageDescription>,
}

impl ContentRegistry {
    /// Validate `pages` and build a registry. Returns the first violation found.
    ///
    /// Checks, per page and in order:
    /// - slug is non-empty
    /// - slug is one URL segment made of lowercase ASCII letters, digits and `-`
    /// - slug is unique within its category
    /// - at least one feature
    /// - `seo.canonical` equals `/<category>/<slug>`
    pub fn from_pages(pages: Vec<PageDescription>) -> Result<Self, ContentError> {
        let mut seen: HashSet<(Category, &str)> = HashSet::with_capacity(pages.len());

        for page in &pages {
            if page.slug.trim().is_empty() {
                return Err(ContentError::EmptySlug {
                    category: page.category,
                });
            }
            if !is_url_segment(&page.slug) {
                return Err(ContentError::InvalidSlug {
                    category: page.category,
                    slug: page.slug.clone(),
                });
            }
            if !seen.insert((page.category, page.slug.as_str())) {
                return Err(ContentError::DuplicateSlug {
                    category: page.category,
                    slug: page.slug.clone(),
                });
            }
            if page.features.is_empty() {
                return Err(ContentError::EmptyFeatures {
                    category: page.category,
                    slug: page.slug.clone(),
                });
            }
            let route = page.route();
            if page.seo.canonical != route {
                return Err(ContentError::CanonicalMismatch {
                    expected: route,
                    found: page.seo.canonical.clone(),
                });
            }
        }

        Ok(Self { pages })
    }

    /// The built-in content, validated on first use and shared afterwards.
    pub fn builtin() -> Result<&'static ContentRegistry, ContentError> {
        BUILTIN.get_or_try_init(|| {
            let registry = ContentRegistry::from_pages(all_pages())?;
            debug!(pages = registry.len(), "built-in content registry loaded");
            Ok(registry)
        })
    }

    /// All pages in authored order.
    pub fn pages(&self) -> &[PageDescription] {
        &self.pages
    }

    /// Number of pages.
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    /// Whether the registry holds no pages.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    /// Look up one page by category and slug.
    pub fn find(&self, category: Category, slug: &str) -> Option<&PageDescription> {
        self.pages
            .iter()
            .find(|p| p.category == category && p.slug == slug)
    }

    /// Look up one page by its route, e.g. `/migrate/from-exclaimer`.
    pub fn find_route(&self, route: &str) -> Option<&PageDescription> {
        let mut parts = route.trim_matches('/').splitn(2, '/');
        let category = parts.next()?.parse::<Category>().ok()?;
        let slug = parts.next()?;
        self.find(category, slug)
    }

    /// Pages of one category, in authored order.
    pub fn by_category(&self, category: Category) -> impl Iterator<Item = &PageDescription> {
        self.pages.iter().filter(move |p| p.category == category)
    }
}

/// Slugs end up as directory names, so only `[a-z0-9-]` is accepted and
/// `-` may not lead or trail.
fn is_url_segment(slug: &str) -> bool {
    !slug.is_empty()
        && !slug.starts_with('-')
        && !slug.ends_with('-')
        && slug
            .bytes()
            .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit() || b == b'-')
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn builtin_content_is_valid() {
        let registry = ContentRegistry::builtin().unwrap();
        assert!(!registry.is_empty());
        for category in Category::ALL {
            assert!(
                registry.by_category(category).next().is_some(),
                "no pages for {category}"
            );
        }
    }

    #[test]
    fn builtin_is_built_once() {
        let a = ContentRegistry::builtin().unwrap();
        let b = ContentRegistry::builtin().unwrap();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn duplicate_slug_in_same_category_is_rejected() {
        let mut pages = all_pages();
        let dup = pages[0].clone();
        pages.push(dup.clone());

        let err = ContentRegistry::from_pages(pages).unwrap_err();
        assert_eq!(
            err,
            ContentError::DuplicateSlug {
                category: dup.category,
                slug: dup.slug
            }
        );
    }

    #[test]
    fn same_slug_in_other_category_is_allowed() {
        let mut pages = all_pages();
        let mut twin = pages
            .iter()
            .find(|p| p.category == Category::EmailSignatures)
            .cloned()
            .unwrap();
        twin.category = Category::UseCases;
        twin.seo.canonical = twin.route();
        pages.push(twin);

        assert!(ContentRegistry::from_pages(pages).is_ok());
    }

    #[test]
    fn page_without_features_is_rejected() {
        let mut pages = all_pages();
        pages[0].features.clear();
        assert!(matches!(
            ContentRegistry::from_pages(pages),
            Err(ContentError::EmptyFeatures { .. })
        ));
    }

    #[test]
    fn empty_slug_is_rejected() {
        let mut pages = all_pages();
        pages[1].slug = " ".into();
        assert!(matches!(
            ContentRegistry::from_pages(pages),
            Err(ContentError::EmptySlug { .. })
        ));
    }

    #[test]
    fn slugs_that_are_not_one_url_segment_are_rejected() {
        for slug in ["a/b", "..", ".", "has space", "UPPER", "back\\slash", "-lead", "trail-"] {
            let mut pages = all_pages();
            pages[0].slug = slug.into();
            pages[0].seo.canonical = pages[0].route();
            let category = pages[0].category;

            assert_eq!(
                ContentRegistry::from_pages(pages).unwrap_err(),
                ContentError::InvalidSlug {
                    category,
                    slug: slug.into()
                },
                "slug = {slug:?}"
            );
        }
    }

    #[test]
    fn builtin_slugs_are_url_segments() {
        for page in ContentRegistry::builtin().unwrap().pages() {
            assert!(is_url_segment(&page.slug), "{}", page.slug);
        }
    }

    #[test]
    fn canonical_must_match_route() {
        let mut pages = all_pages();
        pages[0].seo.canonical = "/somewhere-else".into();
        let expected = pages[0].route();
        assert_eq!(
            ContentRegistry::from_pages(pages).unwrap_err(),
            ContentError::CanonicalMismatch {
                expected,
                found: "/somewhere-else".into()
            }
        );
    }

    #[test]
    fn lookups_by_slug_and_route() {
        let registry = ContentRegistry::builtin().unwrap();
        let page = registry
            .find(Category::EmailSignatures, "accountant")
            .unwrap();
        assert_eq!(page.route(), "/email-signatures/accountant");

        let same = registry.find_route("/email-signatures/accountant/").unwrap();
        assert_eq!(same, page);

        assert!(registry.find(Category::Features, "accountant").is_none());
        assert!(registry.find_route("/pricing/team").is_none());
        assert!(registry.find_route("/").is_none());
    }
}
