//! Closing call-to-action block. Present on every page.

use leptos::prelude::*;

use super::{Icon, IconKey};
use crate::types::{Cta, Theme};

/// Closing call to action, painted with `theme`.
#[component]
pub fn CtaBlock(cta: Cta, theme: Theme) -> impl IntoView {
    let class = format!("cta {}", theme.class());

    view! {
        <section class=class data-region="cta">
            <div class="container narrow">
                <h2 class="cta-title">{cta.title}</h2>
                <p class="cta-description">{cta.description}</p>
                <div class="cta-actions">
                    <a href="/signup" class="btn btn-primary">
                        "Start free trial"
                        <Icon icon=IconKey::ArrowRight size="16" />
                    </a>
                    <a href="/pricing" class="btn btn-secondary">"See pricing"</a>
                </div>
                <p class="cta-note">"14-day free trial. No credit card required."</p>
            </div>
        </section>
    }
}
