//! CSS styles for the landing pages.
//!
//! One stylesheet is embedded in every exported document so pages render
//! without a build step or external assets.
//!
//! # Customization
//!
//! ```rust
//! use siggly_pages::styles::LANDING_CSS;
//!
//! let my_css = ".hero-title { letter-spacing: -0.02em; }";
//! let combined = format!("{}\n{}", LANDING_CSS, my_css);
//! ```
//!
//! # Themes
//!
//! Hero and CTA blocks carry a `theme-*` class (see [`crate::types::Theme`])
//! which sets `--accent`, `--accent-soft` and `--accent-ink`. Everything
//! else reads those variables.

/// Complete CSS for a landing page.
pub const LANDING_CSS: &str = r#"
:root {
    --bg: #ffffff;
    --bg-muted: #f8fafc;
    --text: #0f172a;
    --text-dim: #475569;
    --text-muted: #94a3b8;
    --border: #e2e8f0;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 1120px;
    --radius: 14px;
    --accent: #2563eb;
    --accent-soft: #eff6ff;
    --accent-ink: #1e3a8a;
    --success: #059669;
    --danger: #dc2626;
}

.theme-blue    { --accent: #2563eb; --accent-soft: #eff6ff; --accent-ink: #1e3a8a; }
.theme-indigo  { --accent: #4f46e5; --accent-soft: #eef2ff; --accent-ink: #312e81; }
.theme-violet  { --accent: #7c3aed; --accent-soft: #f5f3ff; --accent-ink: #4c1d95; }
.theme-emerald { --accent: #059669; --accent-soft: #ecfdf5; --accent-ink: #064e3b; }
.theme-teal    { --accent: #0d9488; --accent-soft: #f0fdfa; --accent-ink: #134e4a; }
.theme-amber   { --accent: #d97706; --accent-soft: #fffbeb; --accent-ink: #78350f; }
.theme-rose    { --accent: #e11d48; --accent-soft: #fff1f2; --accent-ink: #881337; }
.theme-slate   { --accent: #334155; --accent-soft: #f1f5f9; --accent-ink: #0f172a; }

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    font-family: var(--font-sans);
    background: var(--bg);
    color: var(--text);
    line-height: 1.6;
    margin: 0;
}

a {
    color: inherit;
}

/* Layout */
.container {
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 24px;
}

.container.narrow {
    max-width: 760px;
}

/* Site chrome */
.site-header {
    border-bottom: 1px solid var(--border);
    background: rgba(255, 255, 255, 0.9);
    position: sticky;
    top: 0;
    z-index: 50;
}

.site-header-inner {
    display: flex;
    align-items: center;
    justify-content: space-between;
    gap: 24px;
    height: 64px;
}

.logo {
    display: flex;
    align-items: center;
    gap: 8px;
    font-weight: 700;
    text-decoration: none;
}

.site-nav {
    display: flex;
    gap: 20px;
    font-size: 14px;
}

.site-nav a {
    color: var(--text-dim);
    text-decoration: none;
}

.site-nav a:hover {
    color: var(--text);
}

.site-footer {
    border-top: 1px solid var(--border);
    padding: 32px 0;
    color: var(--text-muted);
    font-size: 13px;
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 12px 22px;
    border-radius: 999px;
    font-weight: 600;
    font-size: 15px;
    text-decoration: none;
    transition: transform 0.15s, box-shadow 0.15s;
}

.btn:hover {
    transform: translateY(-1px);
}

.btn-primary {
    background: var(--accent);
    color: #ffffff;
    box-shadow: 0 8px 24px -12px var(--accent);
}

.btn-secondary {
    background: #ffffff;
    color: var(--accent-ink);
    border: 1px solid var(--border);
}

.btn-small {
    padding: 8px 16px;
    font-size: 13px;
}

/* Coming soon */
.coming-soon-banner {
    display: flex;
    justify-content: center;
    align-items: center;
    gap: 8px;
    padding: 10px 24px;
    background: #fef3c7;
    color: #92400e;
    font-size: 14px;
    font-weight: 500;
}

/* Hero */
.hero {
    background: linear-gradient(180deg, var(--accent-soft) 0%, var(--bg) 100%);
    padding: 56px 0 72px;
    text-align: center;
}

.breadcrumbs ol {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 6px;
    list-style: none;
    padding: 0;
    margin: 0 0 28px;
    font-size: 13px;
    color: var(--text-muted);
}

.breadcrumbs li + li::before {
    content: "/";
    margin-right: 6px;
}

.breadcrumbs a {
    text-decoration: none;
    color: var(--text-dim);
}

.hero-badge {
    display: inline-flex;
    align-items: center;
    gap: 8px;
    padding: 6px 14px;
    border-radius: 999px;
    background: #ffffff;
    border: 1px solid var(--border);
    color: var(--accent-ink);
    font-size: 13px;
    font-weight: 600;
    margin-bottom: 20px;
}

.hero-badge svg {
    color: var(--accent);
}

.hero-title {
    font-size: clamp(34px, 5vw, 56px);
    line-height: 1.1;
    letter-spacing: -0.03em;
    margin: 0 auto 20px;
    max-width: 860px;
}

.hero-description {
    font-size: 19px;
    color: var(--text-dim);
    max-width: 680px;
    margin: 0 auto 32px;
}

.hero-actions,
.cta-actions {
    display: flex;
    justify-content: center;
    flex-wrap: wrap;
    gap: 12px;
}

/* Stats */
.stats-bar {
    border-top: 1px solid var(--border);
    border-bottom: 1px solid var(--border);
    background: var(--bg-muted);
    padding: 28px 0;
}

.stats-grid {
    display: flex;
    justify-content: space-around;
    flex-wrap: wrap;
    gap: 24px;
    text-align: center;
}

.stat-value {
    display: block;
    font-size: 30px;
    font-weight: 800;
    letter-spacing: -0.02em;
}

.stat-label {
    color: var(--text-dim);
    font-size: 14px;
}

/* Feature grid */
.features {
    padding: 72px 0;
}

.features-grid,
.benefits-grid,
.use-cases-grid {
    display: grid;
    gap: 20px;
}

.features-grid.cols-1 { grid-template-columns: minmax(0, 1fr); }
.features-grid.cols-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
.features-grid.cols-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); }
.features-grid.cols-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }

.benefits-grid,
.use-cases-grid {
    grid-template-columns: repeat(auto-fit, minmax(240px, 1fr));
}

.feature-card,
.benefit-card,
.use-case-card {
    border: 1px solid var(--border);
    border-radius: var(--radius);
    padding: 24px;
    background: #ffffff;
}

.feature-icon,
.benefit-icon {
    display: inline-flex;
    padding: 10px;
    border-radius: 10px;
    background: var(--accent-soft);
    color: var(--accent);
    margin-bottom: 14px;
}

.feature-title,
.benefit-title,
.use-case-title {
    font-size: 17px;
    margin: 0 0 8px;
}

.feature-description,
.benefit-description,
.use-case-description {
    color: var(--text-dim);
    font-size: 15px;
    margin: 0;
}

/* Content sections */
.content-section {
    padding: 64px 0;
}

.content-section:nth-of-type(even) {
    background: var(--bg-muted);
}

.content-section.narrow .container {
    max-width: 760px;
}

.section-title {
    font-size: 30px;
    letter-spacing: -0.02em;
    text-align: center;
    margin: 0 0 36px;
}

.checklist-grid {
    display: grid;
    list-style: none;
    padding: 0;
    margin: 0 auto;
    max-width: 880px;
    gap: 14px 32px;
}

.checklist-grid.cols-2 {
    grid-template-columns: repeat(2, minmax(0, 1fr));
}

.checklist-item {
    display: flex;
    align-items: flex-start;
    gap: 10px;
}

.check-mark {
    color: var(--success);
    flex-shrink: 0;
    margin-top: 2px;
}

.table-wrapper {
    overflow-x: auto;
}

.comparison-table {
    width: 100%;
    max-width: 880px;
    margin: 0 auto;
    border-collapse: collapse;
    font-size: 15px;
}

.comparison-table th,
.comparison-table td {
    padding: 14px 16px;
    border-bottom: 1px solid var(--border);
    text-align: left;
}

.comparison-table thead th {
    font-size: 13px;
    text-transform: uppercase;
    letter-spacing: 0.06em;
    color: var(--text-muted);
}

.comparison-table .col-siggly {
    color: var(--accent);
}

.cell-yes { color: var(--success); }
.cell-no { color: var(--danger); }
.cell-text { color: var(--text-dim); }

.steps {
    display: grid;
    grid-auto-flow: column;
    grid-auto-columns: minmax(0, 1fr);
    gap: 28px;
    list-style: none;
    padding: 0;
    margin: 0;
}

.step-number {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    width: 40px;
    height: 40px;
    border-radius: 50%;
    background: var(--accent);
    color: #ffffff;
    font-weight: 700;
    margin-bottom: 14px;
}

.step-title {
    font-size: 17px;
    margin: 0 0 6px;
}

.step-description {
    color: var(--text-dim);
    margin: 0;
}

.prose p {
    font-size: 17px;
    color: var(--text-dim);
    margin: 0 0 18px;
}

/* Testimonial */
.testimonial {
    padding: 72px 0;
    text-align: center;
}

.testimonial-stars {
    color: #f59e0b;
    margin-bottom: 16px;
}

.testimonial-quote {
    margin: 0 0 20px;
    font-size: 21px;
    line-height: 1.5;
}

.testimonial-role {
    display: block;
    color: var(--text-muted);
    font-size: 14px;
}

/* FAQ */
.faq {
    padding: 72px 0;
    background: var(--bg-muted);
}

.faq-item {
    border-bottom: 1px solid var(--border);
    padding: 18px 0;
}

.faq-question {
    cursor: pointer;
    font-weight: 600;
    font-size: 17px;
}

.faq-answer {
    color: var(--text-dim);
    margin: 12px 0 0;
}

/* CTA */
.cta {
    padding: 80px 0;
    text-align: center;
    background: var(--accent-ink);
    color: #ffffff;
}

.cta-title {
    font-size: 34px;
    letter-spacing: -0.02em;
    margin: 0 0 12px;
}

.cta-description {
    opacity: 0.85;
    font-size: 18px;
    margin: 0 0 28px;
}

.cta .btn-primary {
    background: #ffffff;
    color: var(--accent-ink);
}

.cta .btn-secondary {
    background: transparent;
    color: #ffffff;
    border-color: rgba(255, 255, 255, 0.4);
}

.cta-note {
    margin: 20px 0 0;
    font-size: 13px;
    opacity: 0.7;
}

/* Responsive */
@media (max-width: 860px) {
    .site-nav { display: none; }
    .features-grid.cols-3,
    .features-grid.cols-4 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .steps { grid-auto-flow: row; }
}

@media (max-width: 560px) {
    .features-grid[class*="cols-"],
    .checklist-grid.cols-2 { grid-template-columns: minmax(0, 1fr); }
}
"#;

/// Content-Security-Policy for exported pages: styles inline, no scripts at all.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'none'; connect-src 'none'; font-src 'self' data:;";
