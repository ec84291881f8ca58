//! Page selection and static file output.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::Serialize;
use siggly_pages::content::ContentRegistry;
use siggly_pages::types::{Category, PageDescription, PageStatus};
use siggly_pages::{DocumentOptions, render_document};
use tracing::{debug, info};

/// Name of the route manifest written next to the category directories.
pub const ROUTES_FILE: &str = "routes.json";

/// Which pages to export.
#[derive(Clone, Debug, Default)]
pub struct Selection {
    /// Empty means every category.
    pub categories: Vec<Category>,
    pub include_coming_soon: bool,
}

impl Selection {
    fn accepts(&self, page: &PageDescription) -> bool {
        (self.categories.is_empty() || self.categories.contains(&page.category))
            && (self.include_coming_soon || !page.is_coming_soon())
    }
}

/// Pages picked for export, in registry order, plus how many were held back.
#[derive(Debug)]
pub struct Selected<'a> {
    pub pages: Vec<&'a PageDescription>,
    pub skipped_coming_soon: usize,
}

pub fn select<'a>(registry: &'a ContentRegistry, selection: &Selection) -> Selected<'a> {
    let mut pages = Vec::new();
    let mut skipped_coming_soon = 0;

    for page in registry.pages() {
        if selection.accepts(page) {
            pages.push(page);
        } else if page.is_coming_soon()
            && (selection.categories.is_empty() || selection.categories.contains(&page.category))
        {
            skipped_coming_soon += 1;
        }
    }

    Selected {
        pages,
        skipped_coming_soon,
    }
}

/// One entry of `routes.json`.
#[derive(Debug, Serialize)]
pub struct RouteEntry<'a> {
    pub category: Category,
    pub slug: &'a str,
    pub path: String,
    pub title: &'a str,
    pub status: PageStatus,
}

impl<'a> From<&'a PageDescription> for RouteEntry<'a> {
    fn from(page: &'a PageDescription) -> Self {
        Self {
            category: page.category,
            slug: &page.slug,
            path: page.route(),
            title: &page.seo.title,
            status: page.status,
        }
    }
}

/// Output location for one page: `<out>/<category>/<slug>/index.html`.
pub fn page_path(out_dir: &Path, page: &PageDescription) -> PathBuf {
    out_dir
        .join(page.category.segment())
        .join(&page.slug)
        .join("index.html")
}

/// Remove category directories left by an earlier export.
///
/// Only `<out>/<category>` trees are touched, anything else in `out_dir` stays.
pub fn clear_previous_export(out_dir: &Path) -> Result<()> {
    for category in Category::ALL {
        let dir = out_dir.join(category.segment());
        if dir.is_dir() {
            fs::remove_dir_all(&dir)
                .with_context(|| format!("Failed to remove stale pages in {}", dir.display()))?;
            debug!(dir = %dir.display(), "removed previous export");
        }
    }
    Ok(())
}

/// Write every selected page and the route manifest. Returns the number of pages written.
///
/// Pages from earlier runs are cleared first, so the tree always matches `routes.json`.
pub fn write_site(
    pages: &[&PageDescription],
    out_dir: &Path,
    options: &DocumentOptions,
) -> Result<usize> {
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory {}", out_dir.display()))?;
    clear_previous_export(out_dir)?;

    for page in pages {
        let path = page_path(out_dir, page);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let html = render_document(page, options);
        fs::write(&path, html).with_context(|| format!("Failed to write {}", path.display()))?;
        debug!(route = %page.route(), path = %path.display(), "page written");
    }

    let routes: Vec<RouteEntry<'_>> = pages.iter().map(|p| RouteEntry::from(*p)).collect();
    let manifest = out_dir.join(ROUTES_FILE);
    let json = serde_json::to_string_pretty(&routes).context("Failed to serialize routes")?;
    fs::write(&manifest, json)
        .with_context(|| format!("Failed to write {}", manifest.display()))?;

    info!(pages = pages.len(), out = %out_dir.display(), "export finished");
    Ok(pages.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn registry() -> &'static ContentRegistry {
        ContentRegistry::builtin().expect("builtin content")
    }

    #[test]
    fn default_selection_skips_coming_soon() {
        let selected = select(registry(), &Selection::default());
        assert!(selected.pages.iter().all(|p| !p.is_coming_soon()));
        assert!(selected.skipped_coming_soon > 0);
        assert_eq!(
            selected.pages.len() + selected.skipped_coming_soon,
            registry().len()
        );
    }

    #[test]
    fn include_coming_soon_selects_everything() {
        let selection = Selection {
            categories: vec![],
            include_coming_soon: true,
        };
        let selected = select(registry(), &selection);
        assert_eq!(selected.pages.len(), registry().len());
        assert_eq!(selected.skipped_coming_soon, 0);
    }

    #[test]
    fn category_filter_keeps_registry_order() {
        let selection = Selection {
            categories: vec![Category::Migrate],
            include_coming_soon: false,
        };
        let selected = select(registry(), &selection);
        let expected: Vec<&PageDescription> = registry().by_category(Category::Migrate).collect();
        assert_eq!(selected.pages, expected);
    }

    #[test]
    fn writes_pages_and_manifest() {
        let temp = TempDir::new().expect("temp dir");
        let page = registry()
            .find(Category::EmailSignatures, "accountant")
            .expect("accountant page");

        let written = write_site(&[page], temp.path(), &DocumentOptions::default()).unwrap();
        assert_eq!(written, 1);

        let html = fs::read_to_string(page_path(temp.path(), page)).unwrap();
        assert!(html.starts_with("<!DOCTYPE html>"));

        let manifest = fs::read_to_string(temp.path().join(ROUTES_FILE)).unwrap();
        let routes: serde_json::Value = serde_json::from_str(&manifest).unwrap();
        assert_eq!(routes[0]["category"], "email-signatures");
        assert_eq!(routes[0]["slug"], "accountant");
        assert_eq!(routes[0]["path"], "/email-signatures/accountant");
        assert_eq!(routes[0]["status"], "live");
    }

    #[test]
    fn rewrite_drops_pages_from_earlier_runs() {
        let temp = TempDir::new().expect("temp dir");
        let options = DocumentOptions::default();
        let accountant = registry()
            .find(Category::EmailSignatures, "accountant")
            .expect("accountant page");
        let exclaimer = registry()
            .find(Category::Migrate, "from-exclaimer")
            .expect("migration page");
        fs::write(temp.path().join("robots.txt"), "User-agent: *\n").unwrap();

        write_site(&[accountant, exclaimer], temp.path(), &options).unwrap();
        write_site(&[exclaimer], temp.path(), &options).unwrap();

        assert!(!page_path(temp.path(), accountant).exists());
        assert!(!temp.path().join("email-signatures").exists());
        assert!(page_path(temp.path(), exclaimer).exists());
        assert!(temp.path().join("robots.txt").exists());
    }
}
