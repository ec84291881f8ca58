//! Landing page component - renders the region plan for one page

use leptos::prelude::*;

use super::{
    ComingSoonBanner, CtaBlock, FaqBlock, FeatureGrid, HeroBlock, SectionRenderer, StatsBar,
    TestimonialBlock,
};
use crate::layout::{PageLayout, Region};
use crate::types::PageDescription;

/// A complete landing page body.
///
/// Regions come from [`PageLayout::plan`], so every shape rule (fixed order,
/// optional regions, grid columns) is decided there and nowhere else.
#[component]
pub fn SeoLandingPage(page: PageDescription) -> impl IntoView {
    let regions = PageLayout::plan(&page)
        .regions
        .into_iter()
        .map(region_view)
        .collect::<Vec<_>>();

    view! {
        <main class="landing-page" data-category={page.category.segment()} data-slug={page.slug.clone()}>
            {regions}
        </main>
    }
}

fn region_view(region: Region<'_>) -> AnyView {
    match region {
        Region::ComingSoon => view! { <ComingSoonBanner /> }.into_any(),
        Region::Hero { hero, breadcrumbs } => {
            view! { <HeroBlock hero=hero.clone() breadcrumbs=breadcrumbs.to_vec() /> }.into_any()
        }
        Region::Stats(stats) => view! { <StatsBar stats=stats.to_vec() /> }.into_any(),
        Region::FeatureGrid { features, columns } => {
            view! { <FeatureGrid features=features.to_vec() columns=columns /> }.into_any()
        }
        Region::Section { section, .. } => {
            view! { <SectionRenderer section=section.clone() /> }.into_any()
        }
        Region::Testimonial(testimonial) => {
            view! { <TestimonialBlock testimonial=testimonial.clone() /> }.into_any()
        }
        Region::Faq(faqs) => view! { <FaqBlock faqs=faqs.to_vec() /> }.into_any(),
        Region::Cta { cta, theme } => {
            view! { <CtaBlock cta=cta.clone() theme=theme /> }.into_any()
        }
    }
}
