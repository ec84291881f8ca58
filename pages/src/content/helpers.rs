//! Small constructors that keep the content modules readable.

use crate::types::{
    Badge, Benefit, Breadcrumb, Category, ComparisonCell, ComparisonRow, ContentSection, Cta, Faq,
    Feature, Hero, Seo, Stat, Step, Testimonial, Theme, UseCase,
};

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

pub(super) fn seo(
    category: Category,
    slug: &str,
    title: &str,
    description: &str,
    keywords: &[&str],
) -> Seo {
    Seo {
        title: title.into(),
        description: description.into(),
        keywords: owned(keywords),
        canonical: format!("/{}/{}", category.segment(), slug),
    }
}

/// Home / Category / current page.
pub(super) fn breadcrumbs(category: Category, slug: &str, label: &str) -> Vec<Breadcrumb> {
    vec![
        Breadcrumb {
            label: "Home".into(),
            href: "/".into(),
        },
        Breadcrumb {
            label: category.label().into(),
            href: format!("/{}", category.segment()),
        },
        Breadcrumb {
            label: label.into(),
            href: format!("/{}/{}", category.segment(), slug),
        },
    ]
}

pub(super) fn hero(badge: Option<(&str, &str)>, title: &str, description: &str, theme: Theme) -> Hero {
    Hero {
        badge: badge.map(|(icon, text)| Badge {
            icon: icon.into(),
            text: text.into(),
        }),
        title: title.into(),
        description: description.into(),
        theme,
    }
}

pub(super) fn stats(items: &[(&str, &str)]) -> Vec<Stat> {
    items
        .iter()
        .map(|(value, label)| Stat {
            value: value.to_string(),
            label: label.to_string(),
        })
        .collect()
}

pub(super) fn features(items: &[(&str, &str, &str)]) -> Vec<Feature> {
    items
        .iter()
        .map(|(icon, title, description)| Feature {
            icon: icon.to_string(),
            title: title.to_string(),
            description: description.to_string(),
        })
        .collect()
}

pub(super) fn checklist(title: &str, items: &[&str]) -> ContentSection {
    ContentSection::Checklist {
        title: title.into(),
        items: owned(items),
    }
}

pub(super) fn row(
    feature: &str,
    siggly: impl Into<ComparisonCell>,
    competitor: impl Into<ComparisonCell>,
) -> ComparisonRow {
    ComparisonRow {
        feature: feature.into(),
        siggly: siggly.into(),
        competitor: competitor.into(),
    }
}

pub(super) fn comparison(title: &str, competitor: &str, rows: Vec<ComparisonRow>) -> ContentSection {
    ContentSection::ComparisonTable {
        title: title.into(),
        competitor: competitor.into(),
        rows,
    }
}

/// Steps are numbered from 1 in the given order.
pub(super) fn how_it_works(title: &str, steps: &[(&str, &str)]) -> ContentSection {
    ContentSection::HowItWorks {
        title: title.into(),
        steps: steps
            .iter()
            .enumerate()
            .map(|(idx, (step_title, description))| Step {
                step: (idx + 1).to_string(),
                title: step_title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

pub(super) fn benefits(title: &str, items: &[(&str, &str, &str)]) -> ContentSection {
    ContentSection::Benefits {
        title: title.into(),
        items: items
            .iter()
            .map(|(icon, item_title, description)| Benefit {
                icon: icon.to_string(),
                title: item_title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

pub(super) fn prose(title: &str, paragraphs: &[&str]) -> ContentSection {
    ContentSection::Prose {
        title: title.into(),
        paragraphs: owned(paragraphs),
    }
}

pub(super) fn use_cases(title: &str, items: &[(&str, &str)]) -> ContentSection {
    ContentSection::UseCasesGrid {
        title: title.into(),
        items: items
            .iter()
            .map(|(item_title, description)| UseCase {
                title: item_title.to_string(),
                description: description.to_string(),
            })
            .collect(),
    }
}

pub(super) fn testimonial(quote: &str, author: &str, role: &str) -> Option<Testimonial> {
    Some(Testimonial {
        quote: quote.into(),
        author: author.into(),
        role: role.into(),
    })
}

pub(super) fn faqs(items: &[(&str, &str)]) -> Vec<Faq> {
    items
        .iter()
        .map(|(question, answer)| Faq {
            question: question.to_string(),
            answer: answer.to_string(),
        })
        .collect()
}

pub(super) fn cta(title: &str, description: &str) -> Cta {
    Cta {
        title: title.into(),
        description: description.into(),
        theme: None,
    }
}
