//! Feature grid - always rendered, column count comes from the layout plan

use leptos::prelude::*;

use super::{Icon, IconKey};
use crate::types::Feature;

/// Feature card grid with `columns` columns.
#[component]
pub fn FeatureGrid(features: Vec<Feature>, columns: usize) -> impl IntoView {
    let grid_class = format!("features-grid cols-{}", columns);

    view! {
        <section class="features" data-region="feature-grid" data-columns={columns.to_string()}>
            <div class="container">
                <div class=grid_class>
                    {features.into_iter().map(|feature| view! { <FeatureCard feature=feature /> }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn FeatureCard(feature: Feature) -> impl IntoView {
    let icon = IconKey::resolve(&feature.icon);
    view! {
        <article class="feature-card">
            <div class="feature-icon"><Icon icon=icon size="24" /></div>
            <h3 class="feature-title">{feature.title}</h3>
            <p class="feature-description">{feature.description}</p>
        </article>
    }
}
