//! Hero region - breadcrumbs, badge, headline and description

use leptos::prelude::*;

use super::{Icon, IconKey};
use crate::types::{Badge, Breadcrumb, Hero};

/// Top-of-page banner for one landing page.
#[component]
pub fn HeroBlock(hero: Hero, breadcrumbs: Vec<Breadcrumb>) -> impl IntoView {
    let class = format!("hero {}", hero.theme.class());

    view! {
        <section class=class data-region="hero">
            <div class="container">
                <Breadcrumbs trail=breadcrumbs />
                {hero.badge.map(|badge| view! { <HeroBadge badge=badge /> })}
                <h1 class="hero-title">{hero.title}</h1>
                <p class="hero-description">{hero.description}</p>
                <div class="hero-actions">
                    <a href="/signup" class="btn btn-primary">"Start free trial"</a>
                    <a href="/demo" class="btn btn-secondary">"Book a demo"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn HeroBadge(badge: Badge) -> impl IntoView {
    let icon = IconKey::resolve(&badge.icon);
    view! {
        <div class="hero-badge">
            <Icon icon=icon size="16" />
            <span>{badge.text}</span>
        </div>
    }
}

/// Breadcrumb trail. The last entry is the current page and is not linked.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn Breadcrumbs(trail: Vec<Breadcrumb>) -> impl IntoView {
    if trail.is_empty() {
        return view! {}.into_any();
    }

    let last = trail.len() - 1;
    view! {
        <nav class="breadcrumbs" aria-label="Breadcrumb">
            <ol>
                {trail.into_iter().enumerate().map(|(idx, crumb)| {
                    if idx == last {
                        view! { <li aria-current="page">{crumb.label}</li> }.into_any()
                    } else {
                        view! { <li><a href=crumb.href>{crumb.label}</a></li> }.into_any()
                    }
                }).collect::<Vec<_>>()}
            </ol>
        </nav>
    }.into_any()
}

/// Banner shown above the hero of pages that are not launched yet.
#[component]
pub fn ComingSoonBanner() -> impl IntoView {
    view! {
        <div class="coming-soon-banner" data-region="coming-soon" role="status">
            <Icon icon=IconKey::Clock size="16" />
            <span>"Coming soon - this page describes a feature that is still in development."</span>
        </div>
    }
}
