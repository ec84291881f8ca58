//! Stats bar - a row of headline numbers below the hero

use leptos::prelude::*;

use crate::types::Stat;

/// Row of headline numbers.
#[component]
pub fn StatsBar(stats: Vec<Stat>) -> impl IntoView {
    view! {
        <section class="stats-bar" data-region="stats">
            <div class="container stats-grid">
                {stats.into_iter().map(|stat| view! {
                    <div class="stat">
                        <span class="stat-value">{stat.value}</span>
                        <span class="stat-label">{stat.label}</span>
                    </div>
                }).collect::<Vec<_>>()}
            </div>
        </section>
    }
}
