//! Competitor migration pages (`/migrate/from-<competitor>`)

use super::helpers::*;
use crate::types::{Category, PageDescription, PageStatus, Theme};

const CATEGORY: Category = Category::Migrate;

pub(super) fn pages() -> Vec<PageDescription> {
    vec![from_exclaimer(), from_codetwo(), from_wisestamp()]
}

fn from_exclaimer() -> PageDescription {
    let slug = "from-exclaimer";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Switch from Exclaimer to Siggly | Exclaimer Alternative",
            "Looking for an Exclaimer alternative? Migrate your email signatures to Siggly in an afternoon with simpler pricing and a faster editor.",
            &[
                "exclaimer alternative",
                "migrate from exclaimer",
                "exclaimer vs siggly",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "From Exclaimer"),
        hero: hero(
            Some(("refresh", "Migration guide")),
            "Moving from Exclaimer? Bring your signatures with you",
            "Import your existing templates, keep your rules and go live the same day - with transparent per-user pricing and no minimum seat count.",
            Theme::Indigo,
        ),
        stats: stats(&[
            ("1 day", "Typical migration time"),
            ("35%", "Average cost saving"),
            ("0", "Mail flow changes required"),
        ]),
        features: features(&[
            ("copy", "Template import", "Upload your Exclaimer HTML and we convert it to an editable Siggly template."),
            ("users", "Rules carried over", "Department and group targeting maps directly onto Siggly rules."),
            ("zap", "No mail routing", "Signatures are set in the client, so there's no transport rule or connector to maintain."),
            ("clock", "Parallel running", "Run both tools side by side until you're ready to switch off Exclaimer."),
        ]),
        sections: vec![
            comparison(
                "Siggly vs Exclaimer",
                "Exclaimer",
                vec![
                    row("Drag-and-drop editor", true, true),
                    row("Google Workspace and Microsoft 365", true, "Separate products"),
                    row("Scheduled banner campaigns", true, true),
                    row("No mail routing through third-party servers", true, false),
                    row("Signatures visible in Sent Items", true, "Server-side only"),
                    row("Transparent per-user pricing", true, false),
                    row("Free migration assistance", true, false),
                ],
            ),
            how_it_works(
                "How migration works",
                &[
                    ("Export", "Download your templates from Exclaimer or send us a screenshot."),
                    ("Import", "We rebuild them in Siggly and map your targeting rules."),
                    ("Review", "Preview every signature per department before anything changes."),
                    ("Switch", "Deploy with Siggly and disable your Exclaimer rules."),
                ],
            ),
        ],
        testimonial: testimonial(
            "We moved 400 users off Exclaimer in a single afternoon. The Siggly team rebuilt our templates before we had even finished the paperwork.",
            "Hannah Lindqvist",
            "IT Manager, Nordvik Engineering",
        ),
        faqs: faqs(&[
            ("Will our signatures look the same after migrating?", "Yes. We rebuild your templates pixel for pixel and you approve them before anything is deployed."),
            ("Do we need to change our mail flow?", "No. Siggly installs signatures directly into mail clients and mailboxes, so no transport rules or connectors are involved."),
            ("Can we run both tools during the switch?", "Yes. Many customers run Siggly for one department first, then switch the rest once they're comfortable."),
        ]),
        cta: cta(
            "Make the switch from Exclaimer",
            "Book a free migration and have your signatures moved for you.",
        ),
    }
}

fn from_codetwo() -> PageDescription {
    let slug = "from-codetwo";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "CodeTwo Alternative for Email Signatures | Siggly",
            "Switch from CodeTwo to Siggly for simpler signature management across Microsoft 365 and Google Workspace.",
            &["codetwo alternative", "migrate from codetwo", "codetwo vs siggly"],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "From CodeTwo"),
        hero: hero(
            Some(("refresh", "Migration guide")),
            "A simpler alternative to CodeTwo",
            "Keep centrally managed signatures without the complexity. Siggly works with Microsoft 365 and Google Workspace from one dashboard.",
            Theme::Teal,
        ),
        stats: vec![],
        features: features(&[
            ("globe", "Both platforms", "Manage Microsoft 365 and Google Workspace users side by side."),
            ("palette", "Faster editor", "Design templates visually, with live previews for every client."),
            ("lock", "No server access needed", "Nothing to install on Exchange and no admin agents to keep updated."),
        ]),
        sections: vec![comparison(
            "Siggly vs CodeTwo",
            "CodeTwo",
            vec![
                row("Microsoft 365 support", true, true),
                row("Google Workspace support", true, false),
                row("Visual template editor", true, "Basic"),
                row("Banner scheduling", true, true),
                row("Setup time", "Minutes", "Hours"),
                row("Free migration", true, false),
            ],
        )],
        testimonial: None,
        faqs: faqs(&[
            ("Does Siggly support on-premises Exchange?", "Siggly focuses on Microsoft 365 and Google Workspace. If you're still on Exchange on-premises, talk to us about hybrid setups."),
            ("Can you import our CodeTwo templates?", "Yes. Send us your template HTML and we'll rebuild it for you at no cost."),
        ]),
        cta: cta(
            "Switch from CodeTwo without the headache",
            "Free migration, free trial and no long-term contract.",
        ),
    }
}

fn from_wisestamp() -> PageDescription {
    let slug = "from-wisestamp";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "WiseStamp Alternative for Teams | Siggly",
            "Outgrown WiseStamp? Siggly gives growing teams centralized signature management, directory sync and scheduled campaigns.",
            &["wisestamp alternative", "migrate from wisestamp", "wisestamp for teams"],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "From WiseStamp"),
        hero: hero(
            Some(("rocket", "Built for teams")),
            "Outgrown WiseStamp? Manage signatures for the whole team",
            "WiseStamp is great for individuals. When your company needs central control, directory sync and campaigns, Siggly picks up where it leaves off.",
            Theme::Violet,
        ),
        stats: vec![],
        features: features(&[
            ("users", "Central control", "Admins manage every signature, so nobody has to install a browser extension."),
            ("refresh", "Directory sync", "Employee details update automatically from your directory."),
            ("megaphone", "Team-wide campaigns", "Run banner campaigns across departments with a schedule."),
            ("shield", "Locked fields", "Employees can't edit branding or legal notices."),
        ]),
        sections: vec![comparison(
            "Siggly vs WiseStamp",
            "WiseStamp",
            vec![
                row("Centrally managed signatures", true, "Limited"),
                row("Works without a browser extension", true, false),
                row("Directory sync", true, false),
                row("Scheduled banners", true, "Limited"),
                row("Personal signature generator", true, true),
            ],
        )],
        testimonial: None,
        faqs: faqs(&[(
            "Do my employees need to reinstall anything?",
            "No. Once Siggly is connected to your email platform, employees can uninstall the WiseStamp extension and their signatures keep working.",
        )]),
        cta: cta(
            "Give your growing team one signature system",
            "Connect your directory and migrate from WiseStamp today.",
        ),
    }
}
