//! Customer quote block

use leptos::prelude::*;

use super::{Icon, IconKey};
use crate::types::Testimonial;

/// Customer quote with author and role.
#[component]
pub fn TestimonialBlock(testimonial: Testimonial) -> impl IntoView {
    view! {
        <section class="testimonial" data-region="testimonial">
            <div class="container narrow">
                <figure>
                    <div class="testimonial-stars" aria-label="5 out of 5 stars">
                        {(0..5).map(|_| view! { <Icon icon=IconKey::Star size="18" /> }).collect::<Vec<_>>()}
                    </div>
                    <blockquote class="testimonial-quote">
                        <p>{testimonial.quote}</p>
                    </blockquote>
                    <figcaption class="testimonial-author">
                        <strong>{testimonial.author}</strong>
                        <span class="testimonial-role">{testimonial.role}</span>
                    </figcaption>
                </figure>
            </div>
        </section>
    }
}
