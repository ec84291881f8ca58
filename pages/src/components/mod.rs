//! Leptos UI components for rendering landing pages.
//!
//! Each component is a Leptos `#[component]` function rendered on the
//! server with `to_html()`. Nothing here hydrates or runs in a browser.
//!
//! # Component Hierarchy
//!
//! ```text
//! LandingDocument
//! └── SeoLandingPage (one region per PageLayout entry)
//!     ├── ComingSoonBanner   (coming-soon pages only)
//!     ├── HeroBlock
//!     │   └── Breadcrumbs
//!     ├── StatsBar
//!     ├── FeatureGrid
//!     ├── SectionRenderer    (per content section)
//!     │   ├── ChecklistSection
//!     │   ├── ComparisonTableSection
//!     │   ├── HowItWorksSection
//!     │   ├── BenefitsSection
//!     │   ├── ProseSection
//!     │   └── UseCasesGridSection
//!     ├── TestimonialBlock
//!     ├── FaqBlock
//!     └── CtaBlock
//! ```
//!
//! # Usage
//!
//! Components are typically used via [`crate::render_page`] or
//! [`crate::render_document`], but can be composed directly:
//!
//! ```rust,ignore
//! use leptos::prelude::*;
//! use siggly_pages::components::SectionRenderer;
//!
//! view! {
//!     {sections.into_iter().map(|s| view! { <SectionRenderer section=s /> }).collect::<Vec<_>>()}
//! }
//! ```

mod cta;
mod document;
mod faq;
mod features;
mod hero;
mod icons;
mod page;
mod sections;
mod stats;
mod testimonial;

pub use cta::CtaBlock;
pub use document::LandingDocument;
pub use faq::FaqBlock;
pub use features::FeatureGrid;
pub use hero::{Breadcrumbs, ComingSoonBanner, HeroBlock};
pub use icons::*;
pub use page::SeoLandingPage;
pub use sections::{
    BenefitsSection, ChecklistSection, ComparisonTableSection, HowItWorksSection, ProseSection,
    SectionRenderer, UseCasesGridSection,
};
pub use stats::StatsBar;
pub use testimonial::TestimonialBlock;
