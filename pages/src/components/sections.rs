//! Content section dispatcher and the six section templates.
//!
//! [`SectionRenderer`] selects a template purely by the section's tag.
//! [`ContentSection::Unknown`] renders an empty view: content and renderer
//! may ship independently, so a tag this build doesn't know is skipped
//! instead of failing the page.

use leptos::prelude::*;

use super::{Icon, IconKey};
use crate::types::{Benefit, ComparisonCell, ComparisonRow, ContentSection, Step, UseCase};

/// Render one content section with the template matching its tag.
#[component]
#[allow(clippy::unit_arg, clippy::unused_unit)]
pub fn SectionRenderer(section: ContentSection) -> impl IntoView {
    match section {
        ContentSection::Checklist { title, items } => {
            view! { <ChecklistSection title=title items=items /> }.into_any()
        }
        ContentSection::ComparisonTable {
            title,
            competitor,
            rows,
        } => view! { <ComparisonTableSection title=title competitor=competitor rows=rows /> }
            .into_any(),
        ContentSection::HowItWorks { title, steps } => {
            view! { <HowItWorksSection title=title steps=steps /> }.into_any()
        }
        ContentSection::Benefits { title, items } => {
            view! { <BenefitsSection title=title items=items /> }.into_any()
        }
        ContentSection::Prose { title, paragraphs } => {
            view! { <ProseSection title=title paragraphs=paragraphs /> }.into_any()
        }
        ContentSection::UseCasesGrid { title, items } => {
            view! { <UseCasesGridSection title=title items=items /> }.into_any()
        }
        ContentSection::Unknown => view! {}.into_any(),
    }
}

/// Shared wrapper: `<section>` with heading and the `data-section` tag.
#[component]
fn SectionShell(
    tag: &'static str,
    title: String,
    #[prop(default = "")] extra_class: &'static str,
    children: Children,
) -> impl IntoView {
    let class = if extra_class.is_empty() {
        format!("content-section section-{}", tag)
    } else {
        format!("content-section section-{} {}", tag, extra_class)
    };

    view! {
        <section class=class data-region="section" data-section=tag>
            <div class="container">
                <h2 class="section-title">{title}</h2>
                {children()}
            </div>
        </section>
    }
}

/// Two-column grid of check-marked rows, in input order.
#[component]
pub fn ChecklistSection(title: String, items: Vec<String>) -> impl IntoView {
    view! {
        <SectionShell tag="checklist" title=title>
            <ul class="checklist-grid cols-2">
                {items.into_iter().map(|item| view! {
                    <li class="checklist-item">
                        <span class="check-mark"><Icon icon=IconKey::Check size="18" /></span>
                        <span class="checklist-text">{item}</span>
                    </li>
                }).collect::<Vec<_>>()}
            </ul>
        </SectionShell>
    }
}

/// Siggly vs. competitor feature table.
#[component]
pub fn ComparisonTableSection(
    title: String,
    competitor: String,
    rows: Vec<ComparisonRow>,
) -> impl IntoView {
    view! {
        <SectionShell tag="comparison-table" title=title>
            <div class="table-wrapper">
                <table class="comparison-table">
                    <thead>
                        <tr>
                            <th scope="col">"Feature"</th>
                            <th scope="col" class="col-siggly">"Siggly"</th>
                            <th scope="col" class="col-competitor">{competitor}</th>
                        </tr>
                    </thead>
                    <tbody>
                        {rows.into_iter().map(|row| view! {
                            <tr class="comparison-row">
                                <th scope="row">{row.feature}</th>
                                <ComparisonCellView cell=row.siggly />
                                <ComparisonCellView cell=row.competitor />
                            </tr>
                        }).collect::<Vec<_>>()}
                    </tbody>
                </table>
            </div>
        </SectionShell>
    }
}

/// One table cell: booleans become check / cross icons, strings stay text.
#[component]
fn ComparisonCellView(cell: ComparisonCell) -> impl IntoView {
    match cell {
        ComparisonCell::Flag(true) => view! {
            <td class="cell-yes" aria-label="Included">
                <Icon icon=IconKey::Check size="18" />
            </td>
        }
        .into_any(),
        ComparisonCell::Flag(false) => view! {
            <td class="cell-no" aria-label="Not included">
                <Icon icon=IconKey::X size="18" />
            </td>
        }
        .into_any(),
        ComparisonCell::Text(text) => view! { <td class="cell-text">{text}</td> }.into_any(),
    }
}

/// Numbered horizontal sequence of steps.
#[component]
pub fn HowItWorksSection(title: String, steps: Vec<Step>) -> impl IntoView {
    view! {
        <SectionShell tag="how-it-works" title=title>
            <ol class="steps">
                {steps.into_iter().map(|step| view! {
                    <li class="step">
                        <span class="step-number">{step.step}</span>
                        <h3 class="step-title">{step.title}</h3>
                        <p class="step-description">{step.description}</p>
                    </li>
                }).collect::<Vec<_>>()}
            </ol>
        </SectionShell>
    }
}

/// Icon-card grid.
#[component]
pub fn BenefitsSection(title: String, items: Vec<Benefit>) -> impl IntoView {
    view! {
        <SectionShell tag="benefits" title=title>
            <div class="benefits-grid">
                {items.into_iter().map(|benefit| {
                    let icon = IconKey::resolve(&benefit.icon);
                    view! {
                        <article class="benefit-card">
                            <div class="benefit-icon"><Icon icon=icon size="24" /></div>
                            <h3 class="benefit-title">{benefit.title}</h3>
                            <p class="benefit-description">{benefit.description}</p>
                        </article>
                    }
                }).collect::<Vec<_>>()}
            </div>
        </SectionShell>
    }
}

/// Sequential text blocks.
#[component]
pub fn ProseSection(title: String, paragraphs: Vec<String>) -> impl IntoView {
    view! {
        <SectionShell tag="prose" title=title extra_class="narrow">
            <div class="prose">
                {paragraphs.into_iter().map(|p| view! { <p>{p}</p> }).collect::<Vec<_>>()}
            </div>
        </SectionShell>
    }
}

/// Card grid of title + description pairs.
#[component]
pub fn UseCasesGridSection(title: String, items: Vec<UseCase>) -> impl IntoView {
    view! {
        <SectionShell tag="use-cases-grid" title=title>
            <div class="use-cases-grid">
                {items.into_iter().map(|item| view! {
                    <article class="use-case-card">
                        <h3 class="use-case-title">{item.title}</h3>
                        <p class="use-case-description">{item.description}</p>
                    </article>
                }).collect::<Vec<_>>()}
            </div>
        </SectionShell>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render_section;

    fn checklist(n: usize) -> ContentSection {
        ContentSection::Checklist {
            title: "What's included".into(),
            items: (1..=n).map(|i| format!("Item number {i}")).collect(),
        }
    }

    #[test]
    fn checklist_renders_every_item_in_order() {
        let html = render_section(&checklist(7));

        assert!(html.contains("data-section=\"checklist\""));
        assert!(html.contains("checklist-grid cols-2"));
        assert_eq!(html.matches("class=\"checklist-item\"").count(), 7);
        assert_eq!(html.matches("data-icon=\"check\"").count(), 7);

        let positions: Vec<usize> = (1..=7)
            .map(|i| html.find(&format!("Item number {i}<")).unwrap())
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn comparison_cells_render_icons_and_text() {
        let section = ContentSection::ComparisonTable {
            title: "Siggly vs Exclaimer".into(),
            competitor: "Exclaimer".into(),
            rows: vec![ComparisonRow {
                feature: "Central management".into(),
                siggly: ComparisonCell::Flag(true),
                competitor: ComparisonCell::Text("Limited".into()),
            }],
        };
        let html = render_section(&section);

        let yes = html.find("class=\"cell-yes\"").unwrap();
        let text = html.find("class=\"cell-text\"").unwrap();
        assert!(yes < text);
        assert!(html[yes..text].contains("data-icon=\"check\""));
        assert!(html[text..].contains("Limited"));
        assert!(!html.contains("cell-no"));
        assert!(html.contains("Exclaimer"));
    }

    #[test]
    fn false_cells_render_a_cross() {
        let section = ContentSection::ComparisonTable {
            title: "t".into(),
            competitor: "Other".into(),
            rows: vec![ComparisonRow {
                feature: "Free plan".into(),
                siggly: true.into(),
                competitor: false.into(),
            }],
        };
        let html = render_section(&section);
        assert!(html.contains("class=\"cell-no\""));
        assert!(html.contains("data-icon=\"x\""));
    }

    #[test]
    fn each_known_tag_selects_its_template() {
        let cases = vec![
            (checklist(1), "checklist-grid"),
            (
                ContentSection::HowItWorks {
                    title: "How it works".into(),
                    steps: vec![Step {
                        step: "1".into(),
                        title: "Connect".into(),
                        description: "d".into(),
                    }],
                },
                "class=\"steps\"",
            ),
            (
                ContentSection::Benefits {
                    title: "Benefits".into(),
                    items: vec![Benefit {
                        icon: "no-such-icon".into(),
                        title: "Consistency".into(),
                        description: "d".into(),
                    }],
                },
                "benefits-grid",
            ),
            (
                ContentSection::Prose {
                    title: "Why it matters".into(),
                    paragraphs: vec!["First.".into(), "Second.".into()],
                },
                "class=\"prose\"",
            ),
            (
                ContentSection::UseCasesGrid {
                    title: "Who uses it".into(),
                    items: vec![UseCase {
                        title: "Agencies".into(),
                        description: "d".into(),
                    }],
                },
                "use-cases-grid",
            ),
        ];

        for (section, marker) in cases {
            let tag = section.kind().unwrap().tag();
            let html = render_section(&section);
            assert!(html.contains(&format!("data-section=\"{tag}\"")), "{tag}");
            assert!(html.contains(marker), "{tag} missing {marker}");
            assert_eq!(html.matches("data-section=").count(), 1, "{tag}");
        }
    }

    #[test]
    fn benefit_with_unknown_icon_uses_default() {
        let section = ContentSection::Benefits {
            title: "Benefits".into(),
            items: vec![Benefit {
                icon: "Hologram".into(),
                title: "t".into(),
                description: "d".into(),
            }],
        };
        let html = render_section(&section);
        assert!(html.contains("data-icon=\"sparkles\""));
    }

    #[test]
    fn prose_keeps_paragraph_order() {
        let section = ContentSection::Prose {
            title: "t".into(),
            paragraphs: vec!["Alpha paragraph".into(), "Beta paragraph".into()],
        };
        let html = render_section(&section);
        assert_eq!(html.matches("<p>").count(), 2);
        assert!(html.find("Alpha paragraph").unwrap() < html.find("Beta paragraph").unwrap());
    }

    #[test]
    fn unknown_section_renders_nothing() {
        assert_eq!(render_section(&ContentSection::Unknown), "");
    }
}
