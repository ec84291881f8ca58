//! Use case pages (`/use-cases/<audience>`)

use super::helpers::*;
use crate::types::{Category, PageDescription, PageStatus, Theme};

const CATEGORY: Category = Category::UseCases;

pub(super) fn pages() -> Vec<PageDescription> {
    vec![small_business(), enterprise(), marketing_teams(), remote_teams()]
}

fn small_business() -> PageDescription {
    let slug = "small-business";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signatures for Small Businesses | Siggly",
            "Affordable, professional email signatures for small businesses. Look bigger than you are with consistent branding on every email.",
            &[
                "small business email signature",
                "email signature for small business",
                "affordable email signature software",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Small Business"),
        hero: hero(
            Some(("briefcase", "For small businesses")),
            "Look established from your very first email",
            "Give a five-person team the same polished signatures as a global brand, set up in ten minutes and priced for small budgets.",
            Theme::Emerald,
        ),
        stats: stats(&[
            ("10 min", "Average setup"),
            ("$1", "Per user per month"),
        ]),
        features: features(&[
            ("palette", "Brand without a designer", "Pick a template, add your logo and colours, and you're done."),
            ("users", "Add staff in seconds", "Invite new hires and their signature is ready on day one."),
            ("megaphone", "Promote your offers", "Add a banner for your latest deal, review request or event."),
        ]),
        sections: vec![use_cases(
            "Small businesses using Siggly",
            &[
                ("Agencies", "Keep client-facing emails consistent across every account manager."),
                ("Clinics and salons", "Link to online booking from every appointment reminder."),
                ("Trades and services", "Show licences, reviews and a quote request link."),
                ("Shops and e-commerce", "Feature your current sale in every customer reply."),
            ],
        )],
        testimonial: testimonial(
            "We are six people, but our emails now look like they come from a company ten times our size.",
            "Jonas Weber",
            "Founder, Weber & Stein Design",
        ),
        faqs: faqs(&[("Is there a minimum number of users?", "No. Siggly works for teams of one upwards, and you only pay for the users you add.")]),
        cta: cta(
            "Professional signatures for your small business",
            "Start free and have your whole team set up before lunch.",
        ),
    }
}

fn enterprise() -> PageDescription {
    let slug = "enterprise";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Enterprise Email Signature Management | Siggly",
            "Enterprise-grade email signature management with SSO, role-based access, audit logs and multi-brand support.",
            &[
                "enterprise email signature management",
                "email signature software enterprise",
                "multi-brand email signatures",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Enterprise"),
        hero: hero(
            Some(("building", "For enterprise")),
            "Signature management at enterprise scale",
            "Thousands of employees, dozens of brands and strict compliance requirements - managed from one secure platform.",
            Theme::Slate,
        ),
        stats: stats(&[
            ("50,000+", "Employees on a single tenant"),
            ("SOC 2", "Type II audited"),
            ("99.9%", "Uptime SLA"),
        ]),
        features: features(&[
            ("lock", "SSO and SCIM", "Sign in with your identity provider and provision admins automatically."),
            ("users", "Delegated administration", "Give each region or brand its own admins with scoped permissions."),
            ("globe", "Multi-brand and multi-language", "Run separate templates per subsidiary and per language."),
            ("shield", "Audit logs", "Every template, rule and banner change is recorded."),
            ("bar-chart", "Campaign reporting", "Measure banner performance across the whole organisation."),
        ]),
        sections: vec![
            benefits(
                "Built for IT, security and compliance",
                &[
                    ("shield", "Security reviewed", "SOC 2 Type II, GDPR-ready data processing and EU data residency."),
                    ("lock", "Least privilege", "Scoped API permissions and role-based access for every admin."),
                    ("clock", "Change control", "Draft, review and schedule template changes before they go live."),
                ],
            ),
            checklist(
                "Enterprise requirements we cover",
                &[
                    "Single sign-on",
                    "SCIM user provisioning",
                    "Role-based access control",
                    "Audit logging",
                    "Data residency options",
                    "Dedicated success manager",
                ],
            ),
        ],
        testimonial: testimonial(
            "Fourteen brands, nine languages, one platform. Siggly replaced three separate tools for us.",
            "Elena Ruiz",
            "Director of Digital Workplace, Altavia Group",
        ),
        faqs: faqs(&[
            ("Do you support multiple Microsoft 365 tenants?", "Yes. Connect several tenants and Google Workspace domains to one Siggly organisation."),
            ("Can we sign a custom DPA?", "Yes. Enterprise plans include a data processing agreement and security questionnaire support."),
        ]),
        cta: cta(
            "Talk to our enterprise team",
            "Get a tailored demo and a security pack for your review.",
        ),
    }
}

fn marketing_teams() -> PageDescription {
    let slug = "marketing-teams";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signature Marketing for Marketing Teams | Siggly",
            "Turn employee emails into a marketing channel with targeted signature banners, campaign scheduling and click tracking.",
            &[
                "email signature marketing",
                "signature banners for marketing",
                "email signature campaigns",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Marketing Teams"),
        hero: hero(
            Some(("megaphone", "For marketers")),
            "The marketing channel hiding in your outbox",
            "Your colleagues send thousands of emails every week. Put a targeted, trackable banner under each one - without asking IT.",
            Theme::Rose,
        ),
        stats: vec![],
        features: features(&[
            ("clock", "Campaign scheduling", "Plan banners weeks in advance and let them rotate automatically."),
            ("users", "Audience targeting", "Different banners for sales, support and leadership."),
            ("bar-chart", "Click tracking", "See impressions and clicks per campaign and per team."),
            ("palette", "Brand control", "Only approved colours, fonts and logos make it into signatures."),
        ]),
        sections: vec![how_it_works(
            "Launch a signature campaign",
            &[
                ("Design", "Upload a banner or build one from a template."),
                ("Target", "Choose which teams or offices should show it."),
                ("Schedule", "Set start and end dates."),
                ("Measure", "Track clicks and compare campaigns."),
            ],
        )],
        testimonial: None,
        faqs: faqs(&[("Do marketers need IT to launch a banner?", "No. Marketing can be given banner permissions only, while IT keeps control of templates and deployment.")]),
        cta: cta(
            "Launch your first signature campaign",
            "Free for 14 days. Your first banner can be live in fifteen minutes.",
        ),
    }
}

fn remote_teams() -> PageDescription {
    let slug = "remote-teams";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::ComingSoon,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signatures for Remote & Distributed Teams | Siggly",
            "Keep distributed teams on brand with centrally managed signatures, local time zones and per-country legal details.",
            &["remote team email signature", "distributed team branding"],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Remote Teams"),
        hero: hero(
            None,
            "One brand, every time zone",
            "Signatures that show each colleague's location and working hours, with the right legal details for every country you hire in.",
            Theme::Teal,
        ),
        stats: vec![],
        features: features(&[
            ("globe", "Location and time zone", "Show where each colleague works and when they're online."),
            ("shield", "Per-country legal details", "Company registration and notices that match each hiring entity."),
        ]),
        sections: vec![],
        testimonial: None,
        faqs: vec![],
        cta: cta(
            "Be first to try remote-team signatures",
            "Join the waitlist and we'll let you know when it's ready.",
        ),
    }
}
