//! FAQ block - native `<details>` disclosure, no script needed

use leptos::prelude::*;

use crate::types::Faq;

/// FAQ list. Each entry is a `<details>` element.
#[component]
pub fn FaqBlock(faqs: Vec<Faq>) -> impl IntoView {
    view! {
        <section class="faq" data-region="faq">
            <div class="container narrow">
                <h2 class="section-title">"Frequently asked questions"</h2>
                <div class="faq-list">
                    {faqs.into_iter().map(|faq| view! {
                        <details class="faq-item">
                            <summary class="faq-question">{faq.question}</summary>
                            <p class="faq-answer">{faq.answer}</p>
                        </details>
                    }).collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}
