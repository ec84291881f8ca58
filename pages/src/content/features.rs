//! Product feature pages (`/features/<feature>`)

use super::helpers::*;
use crate::types::{Category, Cta, PageDescription, PageStatus, Theme};

const CATEGORY: Category = Category::Features;

pub(super) fn pages() -> Vec<PageDescription> {
    vec![
        signature_templates(),
        centralized_management(),
        email_banners(),
        signature_analytics(),
    ]
}

fn signature_templates() -> PageDescription {
    let slug = "signature-templates";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signature Templates for Every Team | Siggly",
            "Choose from professionally designed email signature templates, customize them with your brand and deploy them to your whole company.",
            &[
                "email signature templates",
                "professional email signature",
                "company email signature template",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Signature Templates"),
        hero: hero(
            Some(("template", "80+ templates")),
            "Beautiful signature templates, on-brand in minutes",
            "Start from a designer-made layout, drop in your logo and colours and roll it out to every employee without writing a line of HTML.",
            Theme::Violet,
        ),
        stats: stats(&[
            ("80+", "Templates"),
            ("12", "Industry collections"),
            ("0", "Lines of HTML to write"),
        ]),
        features: features(&[
            ("palette", "Brand kit", "Save your fonts, colours and logos once and apply them to any template."),
            ("layers", "Layout variants", "Compact, standard and banner layouts for replies, new threads and external mail."),
            ("smartphone", "Responsive by default", "Every template is tested in Outlook, Gmail, Apple Mail and on mobile."),
            ("users", "Dynamic fields", "Names, titles and phone numbers fill in automatically from your directory."),
            ("copy", "Duplicate and adapt", "Clone a template for a new department or region in one click."),
            ("check", "Render checks", "Preview every template across clients before it goes live."),
        ]),
        sections: vec![how_it_works(
            "From template to live signature",
            &[
                ("Choose", "Browse templates by industry or style."),
                ("Customize", "Apply your brand kit and choose which fields to show."),
                ("Assign", "Target the template to teams, departments or the whole company."),
                ("Deploy", "Siggly installs it in every mail client automatically."),
            ],
        )],
        testimonial: None,
        faqs: faqs(&[
            ("Can I import my existing HTML signature?", "Yes. Paste your HTML and Siggly converts it into an editable template with dynamic fields."),
            ("Do templates work in Outlook desktop?", "Yes. Every template is built with table-based layouts that render reliably in Outlook for Windows and Mac."),
        ]),
        cta: cta(
            "Find a template your brand team will love",
            "Browse the library and deploy your first template today.",
        ),
    }
}

fn centralized_management() -> PageDescription {
    let slug = "centralized-management";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Centralized Email Signature Management | Siggly",
            "Manage every employee's email signature from one dashboard. Sync with Microsoft 365 and Google Workspace and update signatures company-wide instantly.",
            &[
                "centralized email signature management",
                "manage email signatures",
                "company-wide email signatures",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Centralized Management"),
        hero: hero(
            Some(("grid", "Admin dashboard")),
            "Every signature in your company, managed from one place",
            "Stop emailing HTML files and hoping people paste them correctly. Siggly keeps every signature accurate, on-brand and compliant automatically.",
            Theme::Blue,
        ),
        stats: stats(&[
            ("10,000+", "Signatures managed daily"),
            ("99.9%", "Deployment success rate"),
            ("< 1 min", "To push a company-wide update"),
        ]),
        features: features(&[
            ("refresh", "Directory sync", "Names, titles, departments and phone numbers stay in sync with Microsoft 365 or Google Workspace."),
            ("users", "Rules by group", "Assign templates and banners by department, office, title or any custom attribute."),
            ("lock", "Role-based access", "Let marketing own banners and IT own deployment without stepping on each other."),
        ]),
        sections: vec![
            benefits(
                "Why IT teams switch to centralized management",
                &[
                    ("clock", "Hours back every month", "No more one-off requests to fix a title or add a phone number."),
                    ("shield", "Compliance by default", "Legal disclaimers and notices are enforced on every message."),
                    ("zap", "Instant rollouts", "Rebrands, mergers and new offices reflected in minutes, not weeks."),
                ],
            ),
            checklist(
                "What you can control centrally",
                &[
                    "Templates by department",
                    "Marketing banners and schedules",
                    "Legal disclaimers",
                    "Social icons and links",
                    "Mobile signatures",
                    "Reply and forward layouts",
                ],
            ),
        ],
        testimonial: testimonial(
            "We rebranded on a Monday. By lunchtime every one of our 1,200 employees had the new signature. Nobody filed a ticket.",
            "Tom Okafor",
            "Head of IT, Brightwell Logistics",
        ),
        faqs: faqs(&[
            ("Do employees need to install anything?", "No. Siggly deploys signatures through your email platform's APIs, so there is nothing to install on laptops or phones."),
            ("What happens when someone changes roles?", "Update the title in your directory and Siggly updates the signature on the next sync."),
        ]),
        cta: cta(
            "Take signature requests off IT's plate for good",
            "Connect your directory and manage every signature from one dashboard.",
        ),
    }
}

fn email_banners() -> PageDescription {
    let slug = "email-banners";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signature Banners & Campaigns | Siggly",
            "Turn every employee email into a marketing channel with scheduled, targeted email signature banners and click tracking.",
            &[
                "email signature banner",
                "email signature marketing",
                "signature campaign",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Email Banners"),
        hero: hero(
            Some(("megaphone", "Signature marketing")),
            "Your most-seen marketing channel is already in your outbox",
            "Your team sends thousands of emails a week. Add targeted banners that promote webinars, launches and events - and measure every click.",
            Theme::Rose,
        ),
        stats: stats(&[
            ("1,000s", "Impressions per employee per month"),
            ("2.3%", "Average banner click-through"),
        ]),
        features: features(&[
            ("clock", "Scheduled campaigns", "Set start and end dates so banners switch on and off automatically."),
            ("users", "Audience targeting", "Show sales banners to sales, hiring banners to recruiters and event banners to everyone."),
        ]),
        sections: vec![use_cases(
            "What teams promote with signature banners",
            &[
                ("Webinars and events", "Drive registrations from every customer conversation."),
                ("Product launches", "Announce new features to the people already talking to you."),
                ("Hiring", "Recruit through the network your team already has."),
                ("Reviews", "Ask happy customers for a G2 or Trustpilot review."),
            ],
        )],
        testimonial: None,
        faqs: vec![],
        cta: Cta {
            theme: Some(Theme::Violet),
            ..cta(
                "Launch your first signature campaign today",
                "Design a banner, choose an audience and start tracking clicks in minutes.",
            )
        },
    }
}

fn signature_analytics() -> PageDescription {
    let slug = "signature-analytics";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::ComingSoon,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signature Analytics | Siggly",
            "Measure impressions, clicks and conversions from every email signature and banner across your company.",
            &["email signature analytics", "email signature tracking"],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Signature Analytics"),
        hero: hero(
            Some(("bar-chart", "Coming soon")),
            "Know exactly what your signatures are worth",
            "Track clicks on banners, social icons and booking links by team, campaign and individual - and connect them to pipeline.",
            Theme::Indigo,
        ),
        stats: vec![],
        features: features(&[
            ("bar-chart", "Campaign reports", "Clicks and click-through rate for every banner and every audience."),
            ("users", "Team leaderboards", "See which teams drive the most engagement from their everyday email."),
            ("link", "UTM tagging", "Links are tagged automatically so signature traffic shows up in your analytics."),
        ]),
        sections: vec![],
        testimonial: None,
        faqs: vec![],
        cta: cta(
            "Get early access to signature analytics",
            "Join the waitlist and be first to measure your signature channel.",
        ),
    }
}
