//! Email signatures by profession (`/email-signatures/<profession>`)

use super::helpers::*;
use crate::types::{Category, PageDescription, PageStatus, Theme};

const CATEGORY: Category = Category::EmailSignatures;

pub(super) fn pages() -> Vec<PageDescription> {
    vec![accountant(), lawyer(), real_estate_agent(), doctor()]
}

fn accountant() -> PageDescription {
    let slug = "accountant";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signatures for Accountants & CPA Firms | Siggly",
            "Create professional, compliant email signatures for accountants and CPA firms. Add credentials, disclaimers and booking links in minutes.",
            &[
                "accountant email signature",
                "cpa email signature",
                "accounting firm email signature",
                "bookkeeper email signature",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Accountants"),
        hero: hero(
            Some(("briefcase", "For accounting firms")),
            "Email signatures accountants can trust",
            "Show your credentials, keep disclaimers consistent and give every client a clear way to book time - across every partner, manager and associate in your firm.",
            Theme::Emerald,
        ),
        stats: stats(&[
            ("2,400+", "Accounting firms"),
            ("3 min", "Average setup per user"),
            ("100%", "Disclaimer coverage"),
        ]),
        features: features(&[
            ("shield", "Compliance-ready disclaimers", "Attach confidentiality and tax-advice disclaimers automatically, with wording your risk partner approves once."),
            ("award", "Credentials front and centre", "Display CPA, CA, ACCA or EA designations consistently so clients know exactly who they are dealing with."),
            ("clock", "Tax-season banners", "Schedule deadline reminders and filing-season banners that switch on and off by date."),
            ("users", "Firm-wide consistency", "Every partner and associate gets the same polished layout, managed from one dashboard."),
        ]),
        sections: vec![
            checklist(
                "What to include in an accountant's signature",
                &[
                    "Full name and professional designation",
                    "Job title and practice area",
                    "Firm name and logo",
                    "Direct phone number",
                    "Office address or service region",
                    "Client portal or booking link",
                    "Confidentiality and tax-advice disclaimer",
                ],
            ),
            how_it_works(
                "Roll out signatures across your firm",
                &[
                    ("Connect your directory", "Sync staff names, titles and phone numbers from Microsoft 365 or Google Workspace."),
                    ("Pick a template", "Start from an accounting template and apply your brand colours and logo."),
                    ("Deploy everywhere", "Push signatures to Outlook, Gmail and mobile without touching a single laptop."),
                ],
            ),
        ],
        testimonial: testimonial(
            "Tax season used to mean chasing twenty people to update their banners. Now I schedule it once in January and forget about it.",
            "Priya Natarajan",
            "Operations Manager, Ledgerline CPAs",
        ),
        faqs: faqs(&[
            ("Should accountants include their CPA designation in an email signature?", "Yes. Listing your designation after your name builds trust and is standard practice, as long as your licence is current in the jurisdictions you serve."),
            ("Do I need a disclaimer in my accounting email signature?", "Most firms add a confidentiality notice and a statement that emails do not constitute formal tax advice. Siggly appends it automatically so nobody forgets."),
            ("Can different offices use different addresses?", "Yes. Signature fields are pulled per user, so each office shows its own address and phone number within the same template."),
        ]),
        cta: cta(
            "Give every client email the same professional finish",
            "Set up your firm's signatures in minutes. Free for 14 days, no credit card required.",
        ),
    }
}

fn lawyer() -> PageDescription {
    let slug = "lawyer";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signatures for Lawyers & Law Firms | Siggly",
            "Professional email signatures for lawyers with bar admissions, confidentiality notices and practice-area details managed centrally.",
            &[
                "lawyer email signature",
                "attorney email signature",
                "law firm email signature",
                "legal disclaimer email",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Lawyers"),
        hero: hero(
            Some(("scales", "For law firms")),
            "Email signatures for lawyers, without the legal risk",
            "Consistent bar admissions, privileged-communication notices and partner details across the whole firm - updated centrally the moment anything changes.",
            Theme::Slate,
        ),
        stats: stats(&[
            ("900+", "Law firms"),
            ("40%", "Fewer signature support tickets"),
        ]),
        features: features(&[
            ("shield", "Privilege notices that never go missing", "Attach attorney-client privilege and confidentiality wording to every outgoing message."),
            ("scales", "Admissions and practice areas", "Show bar admissions and practice areas per attorney without hand-editing templates."),
            ("lock", "Locked layouts", "Attorneys can't edit the legal wording, so nothing is trimmed or reworded by accident."),
        ]),
        sections: vec![
            prose(
                "Why law firms centralize email signatures",
                &[
                    "For a law firm, an email signature is more than a sign-off. It is where confidentiality notices, regulatory statements and admission details live, and a single missing line can create real exposure.",
                    "When every attorney maintains their own signature, wording drifts. Partners move offices, associates are admitted in new states and notices are updated by the risk committee - but the signatures lag behind.",
                    "Managing signatures centrally means the firm decides once, and every attorney's email reflects the current, approved wording from that moment on.",
                ],
            ),
            checklist(
                "Law firm signature checklist",
                &[
                    "Attorney name and title",
                    "Bar admissions by jurisdiction",
                    "Practice group",
                    "Direct dial and office",
                    "Privileged and confidential notice",
                    "Regulatory statement where required",
                ],
            ),
        ],
        testimonial: testimonial(
            "Our risk committee signs off on the disclaimer once, and it is on every email within the hour. That alone justified the switch.",
            "Marcus Feld",
            "IT Director, Feld Harrow LLP",
        ),
        faqs: faqs(&[
            ("Is a confidentiality notice in an email signature legally binding?", "It rarely creates obligations by itself, but it signals intent and is expected by many clients and regulators. Consistency matters more than wording flourishes."),
            ("Can partners and associates have different layouts?", "Yes. Assign templates by department, title or group so partners can show additional details while the legal wording stays identical."),
        ]),
        cta: cta(
            "Bring every attorney's signature into line",
            "Start a free trial and deploy approved signatures firm-wide today.",
        ),
    }
}

fn real_estate_agent() -> PageDescription {
    let slug = "real-estate-agent";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Real Estate Agent Email Signatures That Win Listings | Siggly",
            "Eye-catching email signatures for real estate agents with headshots, licence numbers, listing banners and social links.",
            &[
                "real estate email signature",
                "realtor email signature",
                "real estate agent signature",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Real Estate Agents"),
        hero: hero(
            Some(("house", "For agents and brokerages")),
            "Email signatures that sell homes while you sleep",
            "Put your headshot, licence number and latest listings in every email. Brokerages keep the brand consistent while agents keep their personality.",
            Theme::Amber,
        ),
        stats: stats(&[
            ("18%", "More clicks on listing banners"),
            ("5,000+", "Agents onboarded"),
            ("60 sec", "To update every banner"),
        ]),
        features: features(&[
            ("users", "Agent headshots", "Friendly, consistent headshots pulled automatically for every agent."),
            ("megaphone", "Listing banners", "Promote open houses and new listings with clickable banners you can rotate weekly."),
            ("shield", "Licence details", "Display licence numbers and brokerage disclosures required in your state."),
            ("smartphone", "Looks great on mobile", "Signatures that read well on phones, where most buyers open email."),
            ("link", "Social and review links", "Point clients to Zillow reviews, Instagram and your booking page."),
        ]),
        sections: vec![
            benefits(
                "Why top brokerages standardize signatures",
                &[
                    ("palette", "One brand, many agents", "Agents stay recognisable as part of your brokerage, even when they work independently."),
                    ("bar-chart", "Measurable marketing", "See which banners drive clicks and which listings attract enquiries."),
                    ("refresh", "Always current", "Update a listing banner once and it changes in every agent's signature instantly."),
                ],
            ),
            use_cases(
                "Campaign ideas for your signature banner",
                &[
                    ("Open house this weekend", "Link straight to the listing page with date, time and directions."),
                    ("Just sold", "Share recent sales to build credibility with new sellers."),
                    ("Free home valuation", "Capture seller leads with a valuation request form."),
                    ("Mortgage partner spotlight", "Co-promote trusted lenders with a rotating partner banner."),
                ],
            ),
        ],
        testimonial: testimonial(
            "Our agents were using forty different signatures. Two weeks after rolling out Siggly, every email looks like it came from the same brokerage.",
            "Alicia Moreno",
            "Marketing Director, Keystone Realty Group",
        ),
        faqs: faqs(&[
            ("What should a real estate agent put in an email signature?", "Your name, headshot, phone number, brokerage, licence number and one clear call to action such as booking a valuation or viewing listings."),
            ("Are licence numbers required in real estate email signatures?", "Many states and provinces require licence or brokerage disclosures in advertising, which can include email. Check your local rules; Siggly makes adding them effortless."),
        ]),
        cta: cta(
            "Turn every email into a listing ad",
            "Launch branded agent signatures with banners in under ten minutes.",
        ),
    }
}

fn doctor() -> PageDescription {
    let slug = "doctor";
    PageDescription {
        slug: slug.into(),
        category: CATEGORY,
        status: PageStatus::Live,
        seo: seo(
            CATEGORY,
            slug,
            "Email Signatures for Doctors & Medical Practices | Siggly",
            "HIPAA-aware email signatures for doctors, clinics and healthcare teams with credentials, patient-portal links and privacy notices.",
            &[
                "doctor email signature",
                "medical email signature",
                "healthcare email signature",
                "physician signature",
            ],
        ),
        breadcrumbs: breadcrumbs(CATEGORY, slug, "Doctors"),
        hero: hero(
            Some(("heart", "For healthcare teams")),
            "Clear, compliant signatures for medical practices",
            "Show credentials and specialties, send patients to the right portal and append privacy notices on every message.",
            Theme::Teal,
        ),
        stats: vec![],
        features: features(&[
            ("award", "Credentials and specialties", "MD, DO, NP or RN - credentials and specialties display consistently for every clinician."),
            ("link", "Patient portal links", "Direct patients to booking, prescriptions and records instead of replying by email."),
            ("shield", "Privacy notices", "Append privacy and misdirected-email notices automatically."),
            ("building", "Multi-location practices", "Each clinic shows its own address, hours and phone number."),
        ]),
        sections: vec![checklist(
            "What to include in a medical email signature",
            &[
                "Name with credentials",
                "Specialty and department",
                "Practice or hospital name",
                "Clinic phone number",
                "Patient portal link",
                "Privacy notice",
                "Emergency disclaimer",
            ],
        )],
        testimonial: None,
        faqs: faqs(&[
            ("Can I include patient information in an email signature?", "No. Signatures should never contain patient data. Keep them to clinician details, practice contact information and required notices."),
            ("Why add an emergency disclaimer?", "Patients sometimes email about urgent symptoms. A short notice pointing them to emergency services sets expectations and protects your practice."),
        ]),
        cta: cta(
            "Professional signatures for your whole practice",
            "Deploy to every clinician in minutes. Try Siggly free for 14 days.",
        ),
    }
}
