//! How-to guides (`/guides/<topic>`)

use super::helpers::*;
use crate::types::{Category, PageDescription, PageStatus, Theme};

const CATEGORY: Category = Category::Guides;

pub(super) fn pages() -> Vec<PageDescription> {
    vec![outlook_setup(), gmail_setup(), best_practices()]
}

fn outlook_setup() -> PageDescription {
    let slug = "outlook-signature-setup";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "How to Set Up an Email Signature in Outlook (2025 Guide) | Siggly",
            "Step-by-step guide to adding a professional email signature in Outlook for Windows, Mac, web and mobile - plus how to manage it for your whole team.",
            &[
                "outlook email signature",
                "add signature in outlook",
                "outlook signature setup",
                "new outlook signature",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Outlook Setup"),
        hero: hero(
            Some(("mail", "Outlook guide")),
            "How to set up an email signature in Outlook",
            "Add a polished signature in new Outlook, classic Outlook, Outlook on the web and mobile - or skip the manual work and deploy it to everyone at once.",
            Theme::Blue,
        ),
        stats: vec![],
        features: features(&[
            ("check", "Every Outlook version", "Instructions for new Outlook, classic desktop, web and mobile apps."),
            ("copy", "Keep formatting intact", "Paste HTML signatures without losing images, spacing or links."),
            ("users", "Team deployment", "Roll the same signature out to every mailbox from the Microsoft 365 admin side."),
        ]),
        sections: vec![
            how_it_works(
                "Add a signature in new Outlook",
                &[
                    ("Open settings", "Select the gear icon in the top-right corner and choose Accounts, then Signatures."),
                    ("Create a signature", "Select New signature, give it a name and paste or type your signature."),
                    ("Set defaults", "Choose the signature for new messages and for replies and forwards."),
                    ("Save", "Select Save. New emails now include your signature automatically."),
                ],
            ),
            prose(
                "Why signatures break in Outlook",
                &[
                    "Outlook for Windows renders email with the Word engine, which ignores many modern CSS properties. Signatures built with divs and flexbox often collapse or lose their spacing.",
                    "Images pasted from a website may be attached as files instead of displayed inline, which is why recipients sometimes see a paperclip on every message.",
                    "Table-based HTML with hosted images avoids both problems, and that is how every Siggly template is built.",
                ],
            ),
        ],
        testimonial: None,
        faqs: faqs(&[
            ("Why doesn't my signature sync between Outlook desktop and the web?", "Classic Outlook stores signatures locally per device, while new Outlook and the web store them in your mailbox. A central tool keeps them identical everywhere."),
            ("Can I add a signature to Outlook mobile?", "Yes, but the mobile app supports plain text only by default. Server-side signatures from Siggly add a full HTML signature to mail sent from phones."),
        ]),
        cta: cta(
            "Skip the setup for every employee",
            "Deploy consistent Outlook signatures to your whole organisation in one step.",
        ),
    }
}

fn gmail_setup() -> PageDescription {
    let slug = "gmail-signature-setup";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "How to Add an Email Signature in Gmail | Siggly",
            "Learn how to create a professional Gmail signature with images and links, and how Google Workspace admins can manage signatures for every user.",
            &[
                "gmail signature",
                "add signature in gmail",
                "google workspace email signature",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Gmail Setup"),
        hero: hero(
            Some(("mail", "Gmail guide")),
            "How to add a professional signature in Gmail",
            "Create a Gmail signature with your logo, links and social icons in a few clicks, and keep every Google Workspace user on brand.",
            Theme::Rose,
        ),
        stats: vec![],
        features: features(&[
            ("palette", "Logos and images", "Insert hosted images so your logo shows up instead of an attachment."),
            ("link", "Links and social icons", "Add clickable website, booking and social profile links."),
        ]),
        sections: vec![how_it_works(
            "Add a signature in Gmail",
            &[
                ("Open settings", "Click the gear icon and select See all settings."),
                ("Find the signature editor", "On the General tab, scroll to Signature and click Create new."),
                ("Design your signature", "Type your details or paste a signature copied from a rendered template."),
                ("Choose defaults", "Select which signature to use for new emails and replies, then save changes at the bottom of the page."),
            ],
        )],
        testimonial: None,
        faqs: faqs(&[
            ("Why does my Gmail signature image show as an attachment?", "Images uploaded from your computer are sometimes attached instead of linked. Use an image hosted at a public URL to display it inline."),
            ("Can Google Workspace admins set signatures for users?", "The Admin console only supports a plain footer. Siggly uses the Gmail API to set full HTML signatures for every user."),
        ]),
        cta: cta(
            "Manage every Gmail signature in one place",
            "Connect Google Workspace and deploy branded signatures in minutes.",
        ),
    }
}

fn best_practices() -> PageDescription {
    let slug = "email-signature-best-practices";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signature Best Practices for Businesses | Siggly",
            "Design rules, legal requirements and marketing tips for effective professional email signatures.",
            &[
                "email signature best practices",
                "professional email signature tips",
                "business email signature",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Best Practices"),
        hero: hero(
            Some(("star", "Best practices")),
            "Email signature best practices that actually matter",
            "What to include, what to leave out and how to make your signature work as hard as the rest of your brand.",
            Theme::Indigo,
        ),
        stats: stats(&[
            ("7", "Essential elements"),
            ("3", "Colours, at most"),
            ("1", "Call to action"),
        ]),
        features: features(&[
            ("check", "Keep it short", "Aim for four to six lines of contact information."),
            ("smartphone", "Design for mobile", "Most email is read on a phone, so keep widths narrow and text legible."),
            ("shield", "Stay compliant", "Include legal notices where your industry or country requires them."),
            ("megaphone", "One call to action", "A single banner or link performs better than a wall of icons."),
        ]),
        sections: vec![
            checklist(
                "Every business signature should include",
                &[
                    "Full name",
                    "Job title",
                    "Company name and logo",
                    "One phone number",
                    "Website link",
                    "Relevant social profiles",
                    "Legal disclaimer if required",
                ],
            ),
            benefits(
                "What a good signature does for your company",
                &[
                    ("award", "Builds credibility", "A consistent, professional signature signals an established business."),
                    ("megaphone", "Drives traffic", "Every email becomes a link back to your website or latest campaign."),
                    ("shield", "Reduces risk", "Centrally managed notices mean nobody forgets the legal wording."),
                ],
            ),
            prose(
                "Common mistakes to avoid",
                &[
                    "Inspirational quotes, animated GIFs and long lists of certifications distract from what the recipient actually needs: how to reach you.",
                    "Images without alt text disappear when email clients block remote content, taking your contact details with them. Keep essentials in real text.",
                ],
            ),
        ],
        testimonial: None,
        faqs: faqs(&[
            ("How long should an email signature be?", "Four to six lines of text plus an optional logo or banner. Anything longer starts to compete with the message itself."),
            ("Should I include social media icons?", "Only for profiles you actively maintain and that matter to your recipients. Two or three icons are usually enough."),
            ("Is a logo required?", "Not required, but a small hosted logo improves recognition. Keep it under 50 KB so it loads quickly."),
        ]),
        cta: cta(
            "Put best practices on autopilot",
            "Siggly templates follow these rules out of the box. Start your free trial.",
        ),
    }
}
