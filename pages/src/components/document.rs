//! Root document component - the complete HTML page around a landing page body

use leptos::prelude::*;

use super::{Icon, IconKey, SeoLandingPage};
use crate::styles::{CSP, LANDING_CSS};
use crate::types::{Category, PageDescription};
use crate::DocumentOptions;

/// The complete HTML document for one landing page
#[component]
pub fn LandingDocument(page: PageDescription, options: DocumentOptions) -> impl IntoView {
    let canonical = format!("{}{}", options.base_url.trim_end_matches('/'), page.seo.canonical);
    let keywords = page.seo.keywords.join(", ");
    let title = page.seo.title.clone();
    let description = page.seo.description.clone();

    view! {
        <html lang="en">
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <meta name="description" content=description />
                <meta name="keywords" content=keywords />
                <link rel="canonical" href=canonical />
                <style>{LANDING_CSS}</style>
            </head>
            <body>
                <SiteHeader site_name=options.site_name.clone() />
                <SeoLandingPage page=page />
                <SiteFooter site_name=options.site_name />
            </body>
        </html>
    }
}

#[component]
fn SiteHeader(site_name: String) -> impl IntoView {
    view! {
        <header class="site-header">
            <div class="container site-header-inner">
                <a href="/" class="logo">
                    <Icon icon=IconKey::Envelope size="22" />
                    <span>{site_name}</span>
                </a>
                <nav class="site-nav">
                    {Category::ALL.into_iter().map(|category| view! {
                        <a href={format!("/{}", category.segment())}>{category.label()}</a>
                    }).collect::<Vec<_>>()}
                </nav>
                <a href="/signup" class="btn btn-primary btn-small">"Get started"</a>
            </div>
        </header>
    }
}

#[component]
fn SiteFooter(site_name: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <p>{format!("(c) {} - email signature management for teams", site_name)}</p>
            </div>
        </footer>
    }
}
