//! Content validation errors.

use thiserror::Error;

use crate::types::Category;

/// Raised while building a [`crate::content::ContentRegistry`] or parsing
/// content identifiers. Rendering itself never fails.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContentError {
    /// Slug is empty or whitespace.
    #[error("page in category `{category}` has an empty slug")]
    EmptySlug {
        /// Category of the offending page
        category: Category,
    },

    /// Slug is not a single URL segment of `[a-z0-9-]`.
    #[error("slug `{slug}` in category `{category}` is not a valid URL segment")]
    InvalidSlug {
        /// Category of the offending page
        category: Category,
        /// The rejected slug
        slug: String,
    },

    /// Two pages share a slug within one category.
    #[error("duplicate slug `{slug}` in category `{category}`")]
    DuplicateSlug {
        /// Category both pages belong to
        category: Category,
        /// The shared slug
        slug: String,
    },

    /// The feature grid would be empty.
    #[error("page `/{category}/{slug}` has no features")]
    EmptyFeatures {
        /// Category of the offending page
        category: Category,
        /// Slug of the offending page
        slug: String,
    },

    /// `seo.canonical` disagrees with the route.
    #[error("canonical path `{found}` does not match route `{expected}`")]
    CanonicalMismatch {
        /// `/<category>/<slug>`
        expected: String,
        /// Value found in `seo.canonical`
        found: String,
    },

    /// Category segment that names no [`Category`].
    #[error("unknown category `{0}`")]
    UnknownCategory(String),
}
