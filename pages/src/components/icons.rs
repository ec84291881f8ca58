//! SVG icon components using Phosphor Icons.
//!
//! Content refers to icons by free-text keys (`"shield"`, `"BarChart"`,
//! `"users"`). [`IconKey::resolve`] maps a key onto the closed [`IconKey`] set
//! and falls back to [`IconKey::Sparkles`] for anything it doesn't know, so a
//! typo in content never breaks a render.
//!
//! All path data is Phosphor (Regular weight) on a 256x256 viewBox.

use leptos::prelude::*;

/// Every icon the landing pages can draw.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum IconKey {
    /// `sparkles`, the fallback
    #[default]
    Sparkles,
    /// `check`
    Check,
    /// `x`
    X,
    /// `shield`
    Shield,
    /// `lock`
    Lock,
    /// `users`
    Users,
    /// `palette`
    Palette,
    /// `chart-bar`
    ChartBar,
    /// `lightning`
    Lightning,
    /// `globe`
    Globe,
    /// `envelope`
    Envelope,
    /// `briefcase`
    Briefcase,
    /// `buildings`
    Buildings,
    /// `scales`
    Scales,
    /// `heart`
    Heart,
    /// `house`
    House,
    /// `graduation-cap`
    GraduationCap,
    /// `rocket`
    Rocket,
    /// `arrows-clockwise`
    ArrowsClockwise,
    /// `clock`
    Clock,
    /// `star`
    Star,
    /// `megaphone`
    Megaphone,
    /// `copy`
    Copy,
    /// `squares-four`
    SquaresFour,
    /// `link`
    Link,
    /// `device-mobile`
    DeviceMobile,
    /// `arrow-right`
    ArrowRight,
}

impl IconKey {
    /// Resolve a content icon key. Case, `-`, `_` and spaces are ignored.
    ///
    /// ```rust
    /// use siggly_pages::components::IconKey;
    ///
    /// assert_eq!(IconKey::resolve("BarChart3"), IconKey::ChartBar);
    /// assert_eq!(IconKey::resolve("no-such-icon"), IconKey::Sparkles);
    /// ```
    pub fn resolve(key: &str) -> IconKey {
        let normalized: String = key
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .flat_map(char::to_lowercase)
            .collect();

        match normalized.as_str() {
            "check" | "checkcircle" | "checkcircle2" => IconKey::Check,
            "x" | "xcircle" | "close" => IconKey::X,
            "shield" | "shieldcheck" => IconKey::Shield,
            "lock" | "lockkey" => IconKey::Lock,
            "users" | "user" | "team" | "userscircle" => IconKey::Users,
            "palette" | "paintbrush" | "brand" => IconKey::Palette,
            "chart" | "chartbar" | "barchart" | "barchart3" | "analytics" | "trendingup" => {
                IconKey::ChartBar
            }
            "zap" | "lightning" | "bolt" => IconKey::Lightning,
            "globe" | "world" => IconKey::Globe,
            "mail" | "envelope" | "email" => IconKey::Envelope,
            "briefcase" => IconKey::Briefcase,
            "building" | "buildings" | "building2" | "office" => IconKey::Buildings,
            "scale" | "scales" | "legal" => IconKey::Scales,
            "heart" | "heartpulse" | "stethoscope" => IconKey::Heart,
            "home" | "house" => IconKey::House,
            "graduationcap" | "education" => IconKey::GraduationCap,
            "rocket" => IconKey::Rocket,
            "refresh" | "refreshcw" | "sync" | "arrowsclockwise" => IconKey::ArrowsClockwise,
            "clock" | "timer" => IconKey::Clock,
            "star" | "award" => IconKey::Star,
            "megaphone" | "campaign" => IconKey::Megaphone,
            "copy" | "template" | "layers" => IconKey::Copy,
            "grid" | "layoutgrid" | "squaresfour" => IconKey::SquaresFour,
            "link" | "link2" => IconKey::Link,
            "smartphone" | "mobile" | "devicemobile" => IconKey::DeviceMobile,
            "arrowright" => IconKey::ArrowRight,
            "sparkles" | "sparkle" => IconKey::Sparkles,
            _ => IconKey::default(),
        }
    }

    /// SVG path data (the `d` attribute).
    pub fn path(self) -> &'static str {
        match self {
            IconKey::Sparkles => ICON_SPARKLE,
            IconKey::Check => ICON_CHECK,
            IconKey::X => ICON_X,
            IconKey::Shield => ICON_SHIELD_CHECK,
            IconKey::Lock => ICON_LOCK,
            IconKey::Users => ICON_USERS,
            IconKey::Palette => ICON_PALETTE,
            IconKey::ChartBar => ICON_CHART_BAR,
            IconKey::Lightning => ICON_LIGHTNING,
            IconKey::Globe => ICON_GLOBE,
            IconKey::Envelope => ICON_ENVELOPE,
            IconKey::Briefcase => ICON_BRIEFCASE,
            IconKey::Buildings => ICON_BUILDINGS,
            IconKey::Scales => ICON_SCALES,
            IconKey::Heart => ICON_HEART,
            IconKey::House => ICON_HOUSE,
            IconKey::GraduationCap => ICON_GRADUATION_CAP,
            IconKey::Rocket => ICON_ROCKET,
            IconKey::ArrowsClockwise => ICON_ARROWS_CLOCKWISE,
            IconKey::Clock => ICON_CLOCK,
            IconKey::Star => ICON_STAR,
            IconKey::Megaphone => ICON_MEGAPHONE,
            IconKey::Copy => ICON_COPY,
            IconKey::SquaresFour => ICON_SQUARES_FOUR,
            IconKey::Link => ICON_LINK,
            IconKey::DeviceMobile => ICON_DEVICE_MOBILE,
            IconKey::ArrowRight => ICON_ARROW_RIGHT,
        }
    }

    /// Stable lowercase name, written to `data-icon` for styling hooks.
    pub fn name(self) -> &'static str {
        match self {
            IconKey::Sparkles => "sparkles",
            IconKey::Check => "check",
            IconKey::X => "x",
            IconKey::Shield => "shield",
            IconKey::Lock => "lock",
            IconKey::Users => "users",
            IconKey::Palette => "palette",
            IconKey::ChartBar => "chart-bar",
            IconKey::Lightning => "lightning",
            IconKey::Globe => "globe",
            IconKey::Envelope => "envelope",
            IconKey::Briefcase => "briefcase",
            IconKey::Buildings => "buildings",
            IconKey::Scales => "scales",
            IconKey::Heart => "heart",
            IconKey::House => "house",
            IconKey::GraduationCap => "graduation-cap",
            IconKey::Rocket => "rocket",
            IconKey::ArrowsClockwise => "arrows-clockwise",
            IconKey::Clock => "clock",
            IconKey::Star => "star",
            IconKey::Megaphone => "megaphone",
            IconKey::Copy => "copy",
            IconKey::SquaresFour => "squares-four",
            IconKey::Link => "link",
            IconKey::DeviceMobile => "device-mobile",
            IconKey::ArrowRight => "arrow-right",
        }
    }
}

/// Renders an inline SVG icon.
///
/// # Props
///
/// * `icon` - Which icon to draw
/// * `size` - Icon size in pixels (default: "20")
/// * `class` - Additional CSS classes (default: "")
///
/// # Example
///
/// ```rust,ignore
/// view! { <Icon icon=IconKey::resolve(&feature.icon) size="24" /> }
/// ```
#[component]
pub fn Icon(
    /// Resolved icon
    icon: IconKey,
    /// Icon size in pixels
    #[prop(default = "20")]
    size: &'static str,
    /// Additional CSS class names
    #[prop(default = "")]
    class: &'static str,
) -> impl IntoView {
    view! {
        <svg
            xmlns="http://www.w3.org/2000/svg"
            width=size
            height=size
            fill="currentColor"
            viewBox="0 0 256 256"
            class=class
            data-icon={icon.name()}
            aria-hidden="true"
        >
            <path d={icon.path()}></path>
        </svg>
    }
}

// =============================================================================
// Phosphor Icons (Regular weight) - https://phosphoricons.com/
// =============================================================================

/// Sparkle (default / fallback)
pub const ICON_SPARKLE: &str = "M197.58,129.06,146,110l-19-51.62a15.92,15.92,0,0,0-29.88,0L78,110l-51.62,19a15.92,15.92,0,0,0,0,29.88L78,178l19,51.62a15.92,15.92,0,0,0,29.88,0L146,178l51.62-19a15.92,15.92,0,0,0,0-29.88ZM137,164.22a8,8,0,0,0-4.74,4.74L112,223.85,91.78,169A8,8,0,0,0,87,164.22L32.15,144,87,123.78A8,8,0,0,0,91.78,119L112,64.15,132.22,119a8,8,0,0,0,4.74,4.74L191.85,144ZM144,40a8,8,0,0,1,8-8h16V16a8,8,0,0,1,16,0V32h16a8,8,0,0,1,0,16H184V64a8,8,0,0,1-16,0V48H152A8,8,0,0,1,144,40ZM248,88a8,8,0,0,1-8,8h-8v8a8,8,0,0,1-16,0V96h-8a8,8,0,0,1,0-16h8V72a8,8,0,0,1,16,0v8h8A8,8,0,0,1,248,88Z";

/// Check mark
pub const ICON_CHECK: &str = "M229.66,77.66l-128,128a8,8,0,0,1-11.32,0l-56-56a8,8,0,0,1,11.32-11.32L96,188.69,218.34,66.34a8,8,0,0,1,11.32,11.32Z";

/// Cross mark
pub const ICON_X: &str = "M205.66,194.34a8,8,0,0,1-11.32,11.32L128,139.31,61.66,205.66a8,8,0,0,1-11.32-11.32L116.69,128,50.34,61.66A8,8,0,0,1,61.66,50.34L128,116.69l66.34-66.35a8,8,0,0,1,11.32,11.32L139.31,128Z";

/// Shield with check
pub const ICON_SHIELD_CHECK: &str = "M208,40H48A16,16,0,0,0,32,56v58.78c0,89.61,75.82,119.34,91,124.39a15.53,15.53,0,0,0,10,0c15.2-5.05,91-34.78,91-124.39V56A16,16,0,0,0,208,40Zm0,74.79c0,78.42-66.35,104.62-80,109.18-13.53-4.51-80-30.69-80-109.18V56H208ZM82.34,141.66a8,8,0,0,1,11.32-11.32L112,148.69l50.34-50.35a8,8,0,0,1,11.32,11.32l-56,56a8,8,0,0,1-11.32,0Z";

/// Padlock
pub const ICON_LOCK: &str = "M208,80H176V56a48,48,0,0,0-96,0V80H48A16,16,0,0,0,32,96V208a16,16,0,0,0,16,16H208a16,16,0,0,0,16-16V96A16,16,0,0,0,208,80ZM96,56a32,32,0,0,1,64,0V80H96ZM208,208H48V96H208V208Z";

/// Group of users
pub const ICON_USERS: &str = "M117.25,157.92a60,60,0,1,0-66.5,0A95.83,95.83,0,0,0,3.53,195.63a8,8,0,1,0,13.4,8.74,80,80,0,0,1,134.14,0,8,8,0,0,0,13.4-8.74A95.83,95.83,0,0,0,117.25,157.92ZM40,108a44,44,0,1,1,44,44A44.05,44.05,0,0,1,40,108Zm210.14,98.7a8,8,0,0,1-11.07-2.33A79.83,79.83,0,0,0,172,168a8,8,0,0,1,0-16,44,44,0,1,0-16.34-84.87,8,8,0,1,1-5.94-14.85,60,60,0,0,1,55.53,105.64,95.83,95.83,0,0,1,47.22,37.71A8,8,0,0,1,250.14,206.7Z";

/// Paint palette
pub const ICON_PALETTE: &str = "M200.77,53.89A103.27,103.27,0,0,0,128,24h-1.07A104,104,0,0,0,24,128c0,43,26.58,79.06,69.36,94.17A32,32,0,0,0,136,192a16,16,0,0,1,16-16h46.21a31.81,31.81,0,0,0,31.2-24.88,104.43,104.43,0,0,0,2.59-24A103.28,103.28,0,0,0,200.77,53.89Zm13,93.71A15.89,15.89,0,0,1,198.21,160H152a32,32,0,0,0-32,32,16,16,0,0,1-21.31,15.07C62.49,194.3,40,164,40,128a88,88,0,0,1,87.09-88h.9a88.35,88.35,0,0,1,88,87.25A88.86,88.86,0,0,1,213.81,147.6ZM140,76a12,12,0,1,1-12-12A12,12,0,0,1,140,76ZM96,100A12,12,0,1,1,84,88,12,12,0,0,1,96,100Zm0,56a12,12,0,1,1-12-12A12,12,0,0,1,96,156Zm88-56a12,12,0,1,1-12-12A12,12,0,0,1,184,100Z";

/// Bar chart
pub const ICON_CHART_BAR: &str = "M224,200h-8V40a8,8,0,0,0-8-8H152a8,8,0,0,0-8,8V80H96a8,8,0,0,0-8,8v40H48a8,8,0,0,0-8,8v64H32a8,8,0,0,0,0,16H224a8,8,0,0,0,0-16ZM160,48h40V200H160ZM104,96h40V200H104ZM56,144H88v56H56Z";

/// Lightning bolt
pub const ICON_LIGHTNING: &str = "M215.79,118.17a8,8,0,0,0-5-5.66L153.18,90.9l14.66-73.33a8,8,0,0,0-13.69-7L37.71,143.17A8,8,0,0,0,44.22,156l57.6,11.52L87.16,240.83A8,8,0,0,0,95,248a7.72,7.72,0,0,0,1.57-.16l116.67-46.67a8,8,0,0,0,2.55-14.5ZM96.82,224,116,128a8,8,0,0,0-6.51-9.54L52.22,107,159.18,32,140,128a8,8,0,0,0,6.51,9.54l57.27,11.45Z";

/// Globe
pub const ICON_GLOBE: &str = "M128,24h0A104,104,0,1,0,232,128,104.12,104.12,0,0,0,128,24Zm87.62,96H175.79C174,83.49,159.94,57.67,148.41,42.4A88.19,88.19,0,0,1,215.62,120ZM96.23,136h63.54c-2.31,41.61-22.23,67.11-31.77,77C118.45,203.1,98.54,177.6,96.23,136Zm0-16C98.54,78.39,118.46,52.89,128,43c9.55,9.93,29.46,35.43,31.77,77Zm11.36-77.6C96.06,57.67,82,83.49,80.21,120H40.37A88.19,88.19,0,0,1,107.59,42.4ZM40.37,136H80.21c1.82,36.51,15.85,62.33,27.38,77.6A88.19,88.19,0,0,1,40.37,136Zm108,77.6c11.53-15.27,25.56-41.09,27.38-77.6h39.84A88.19,88.19,0,0,1,148.41,213.6Z";

/// Envelope
pub const ICON_ENVELOPE: &str = "M224,48H32a8,8,0,0,0-8,8V192a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V56A8,8,0,0,0,224,48Zm-96,85.15L52.57,64H203.43ZM98.71,128,40,181.81V74.19Zm11.84,10.85,12,11.05a8,8,0,0,0,10.82,0l12-11.05,58,53.15H52.57ZM157.29,128,216,74.18V181.82Z";

/// Briefcase
pub const ICON_BRIEFCASE: &str = "M216,56H176V48a24,24,0,0,0-24-24H104A24,24,0,0,0,80,48v8H40A16,16,0,0,0,24,72V200a16,16,0,0,0,16,16H216a16,16,0,0,0,16-16V72A16,16,0,0,0,216,56ZM96,48a8,8,0,0,1,8-8h48a8,8,0,0,1,8,8v8H96ZM216,72v41.61A184,184,0,0,1,128,136a184.07,184.07,0,0,1-88-22.38V72Zm0,128H40V131.64A200.19,200.19,0,0,0,128,152a200.25,200.25,0,0,0,88-20.37V200ZM104,112a8,8,0,0,1,8-8h32a8,8,0,0,1,0,16H112A8,8,0,0,1,104,112Z";

/// Office buildings
pub const ICON_BUILDINGS: &str = "M240,208H224V96a16,16,0,0,0-16-16H144V32a16,16,0,0,0-24.88-13.32L39.12,72A16,16,0,0,0,32,85.34V208H16a8,8,0,0,0,0,16H240a8,8,0,0,0,0-16ZM208,96V208H144V96ZM48,85.34,128,32V208H48ZM112,112v16a8,8,0,0,1-16,0V112a8,8,0,1,1,16,0Zm-32,0v16a8,8,0,0,1-16,0V112a8,8,0,1,1,16,0Zm0,56v16a8,8,0,0,1-16,0V168a8,8,0,0,1,16,0Zm32,0v16a8,8,0,0,1-16,0V168a8,8,0,0,1,16,0Z";

/// Scales of justice
pub const ICON_SCALES: &str = "M239.43,133l-32-80h0a8,8,0,0,0-9.16-4.84L136,62V40a8,8,0,0,0-16,0V65.58L54.26,80.19A8,8,0,0,0,48.57,85h0v.06L16.57,165a7.92,7.92,0,0,0-.57,3c0,23.31,24.54,32,40,32s40-8.69,40-32a7.92,7.92,0,0,0-.57-3L66.92,93.77,120,82V208H104a8,8,0,0,0,0,16h48a8,8,0,0,0,0-16H136V78.42L187,67.1,160.57,133a7.92,7.92,0,0,0-.57,3c0,23.31,24.54,32,40,32s40-8.69,40-32A7.92,7.92,0,0,0,239.43,133ZM56,184c-7.53,0-22.76-3.61-23.93-14.64L56,109.54l23.93,59.82C78.76,180.39,63.53,184,56,184Zm144-32c-7.53,0-22.76-3.61-23.93-14.64L200,77.54l23.93,59.82C222.76,148.39,207.53,152,200,152Z";

/// Heart
pub const ICON_HEART: &str = "M178,32c-20.65,0-38.73,8.88-50,23.89C116.73,40.88,98.65,32,78,32A62.07,62.07,0,0,0,16,94c0,70,103.79,126.66,108.21,129a8,8,0,0,0,7.58,0C136.21,220.66,240,164,240,94A62.07,62.07,0,0,0,178,32ZM128,206.8C109.74,196.16,32,147.69,32,94A46.06,46.06,0,0,1,78,48c19.45,0,35.78,10.36,42.6,27a8,8,0,0,0,14.8,0c6.82-16.67,23.15-27,42.6-27a46.06,46.06,0,0,1,46,46C224,147.61,146.24,196.15,128,206.8Z";

/// House
pub const ICON_HOUSE: &str = "M219.31,108.68l-80-80a16,16,0,0,0-22.62,0l-80,80A15.87,15.87,0,0,0,32,120v96a8,8,0,0,0,8,8h64a8,8,0,0,0,8-8V160h32v56a8,8,0,0,0,8,8h64a8,8,0,0,0,8-8V120A15.87,15.87,0,0,0,219.31,108.68ZM208,208H160V152a8,8,0,0,0-8-8H104a8,8,0,0,0-8,8v56H48V120l80-80,80,80Z";

/// Graduation cap
pub const ICON_GRADUATION_CAP: &str = "M251.76,88.94l-120-64a8,8,0,0,0-7.52,0l-120,64a8,8,0,0,0,0,14.12L32,117.87v48.42a15.91,15.91,0,0,0,4.06,10.65C49.16,191.53,78.51,216,128,216a130,130,0,0,0,48-8.76V240a8,8,0,0,0,16,0V199.51a115.63,115.63,0,0,0,27.94-22.57A15.91,15.91,0,0,0,224,166.29V117.87l27.76-14.81a8,8,0,0,0,0-14.12ZM128,200c-43.27,0-68.72-21.14-80-33.71V126.4l76.24,40.66a8,8,0,0,0,7.52,0L176,143.47v46.34C163.4,195.69,147.52,200,128,200Zm80-33.75a97.83,97.83,0,0,1-16,14.25V134.93l16-8.53ZM188,118.94l-.22-.13-56-29.87a8,8,0,0,0-7.52,14.12L171,128l-43,22.93L25,96,128,41.07,231,96Z";

/// Rocket
pub const ICON_ROCKET: &str = "M152,224a8,8,0,0,1-8,8H112a8,8,0,0,1,0-16h32A8,8,0,0,1,152,224ZM128,112a12,12,0,1,0-12-12A12,12,0,0,0,128,112Zm95.62,43.83-12.36,55.63a16,16,0,0,1-25.51,9.11L158.51,200h-61L70.25,220.57a16,16,0,0,1-25.51-9.11L32.38,155.83a16.09,16.09,0,0,1,3.32-13.71l28.56-34.26a123.07,123.07,0,0,1,8.57-36.67c12.9-32.34,36-52.63,45.37-59.85a16,16,0,0,1,19.6,0c9.34,7.22,32.47,27.51,45.37,59.85a123.07,123.07,0,0,1,8.57,36.67l28.56,34.26A16.09,16.09,0,0,1,223.62,155.83ZM99.43,184h57.14c21.12-37.54,25.07-73.48,11.74-106.88C156.55,47.64,134.49,29,128,24c-6.51,5-28.57,23.64-40.33,53.12C74.36,110.52,78.31,146.46,99.43,184Zm-15,5.85Q68.28,160.5,64.83,132.16L48,152.36,60.36,208l.18-.13ZM208,152.36l-16.83-20.2q-3.42,28.28-19.56,57.69l23.85,18,.18.13Z";

/// Arrows forming a circle (sync)
pub const ICON_ARROWS_CLOCKWISE: &str = "M224,48V96a8,8,0,0,1-8,8H168a8,8,0,0,1,0-16h28.69L182.06,73.37a79.56,79.56,0,0,0-56.13-23.43h-.45A79.52,79.52,0,0,0,69.59,72.71,8,8,0,0,1,58.41,61.27a96,96,0,0,1,135,.79L208,76.69V48a8,8,0,0,1,16,0ZM186.41,183.29a80,80,0,0,1-112.47-.66L59.31,168H88a8,8,0,0,0,0-16H40a8,8,0,0,0-8,8v48a8,8,0,0,0,16,0V179.31l14.63,14.63A95.43,95.43,0,0,0,130,222.06h.53a95.36,95.36,0,0,0,67.07-27.33,8,8,0,0,0-11.18-11.44Z";

/// Clock
pub const ICON_CLOCK: &str = "M128,24A104,104,0,1,0,232,128,104.11,104.11,0,0,0,128,24Zm0,192a88,88,0,1,1,88-88A88.1,88.1,0,0,1,128,216Zm64-88a8,8,0,0,1-8,8H128a8,8,0,0,1-8-8V72a8,8,0,0,1,16,0v48h48A8,8,0,0,1,192,128Z";

/// Star
pub const ICON_STAR: &str = "M239.18,97.26A16.38,16.38,0,0,0,224.92,86l-59-4.76L143.14,26.15a16.36,16.36,0,0,0-30.27,0L90.11,81.23,31.08,86a16.46,16.46,0,0,0-9.37,28.86l45,38.83L53,211.75a16.38,16.38,0,0,0,24.5,17.82L128,198.49l50.53,31.08A16.4,16.4,0,0,0,203,211.75l-13.76-58.07,45-38.83A16.43,16.43,0,0,0,239.18,97.26Zm-15.34,5.47-48.7,42a8,8,0,0,0-2.56,7.91l14.88,62.8a.37.37,0,0,1-.17.48c-.18.14-.23.11-.38,0l-54.72-33.65a8,8,0,0,0-8.38,0L69.09,215.94c-.15.09-.19.12-.38,0a.37.37,0,0,1-.17-.48l14.88-62.8a8,8,0,0,0-2.56-7.91l-48.7-42c-.12-.1-.23-.19-.13-.5s.18-.27.33-.29l63.92-5.16A8,8,0,0,0,103,91.86l24.62-59.61c.08-.17.11-.25.35-.25s.27.08.35.25L153,91.86a8,8,0,0,0,6.75,4.92l63.92,5.16c.15,0,.24,0,.33.29S224,102.63,223.84,102.73Z";

/// Megaphone
pub const ICON_MEGAPHONE: &str = "M240,120a48.05,48.05,0,0,0-48-48H152.2c-2.91-.17-53.62-3.74-101.91-44.24A16,16,0,0,0,24,40V200a16,16,0,0,0,26.29,12.25c37.77-31.68,77-40.76,93.71-43.3v31.72A16,16,0,0,0,151.12,214l11,7.33A16,16,0,0,0,186.5,212l11.77-44.36A48.07,48.07,0,0,0,240,120ZM40,199.93V40h0c42.81,35.91,86.63,45,104,47.24v65.48C126.65,155,82.84,164.07,40,199.93Zm131,8,0,.11-11-7.33V168h21.6ZM192,152H160V88h32a32,32,0,1,1,0,64Z";

/// Copy / template
pub const ICON_COPY: &str = "M216,32H88a8,8,0,0,0-8,8V80H40a8,8,0,0,0-8,8V216a8,8,0,0,0,8,8H168a8,8,0,0,0,8-8V176h40a8,8,0,0,0,8-8V40A8,8,0,0,0,216,32ZM160,208H48V96H160Zm48-48H176V88a8,8,0,0,0-8-8H96V48H208Z";

/// Grid / dashboard (SquaresFour)
pub const ICON_SQUARES_FOUR: &str = "M104,48H48A16,16,0,0,0,32,64v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,104,48Zm0,72H48V64h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V64A16,16,0,0,0,208,48Zm0,72H152V64h56ZM104,152H48a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,104,152Zm0,72H48V168h56Zm104-72H152a16,16,0,0,0-16,16v56a16,16,0,0,0,16,16h56a16,16,0,0,0,16-16V168A16,16,0,0,0,208,152Zm0,72H152V168h56Z";

/// Chain link
pub const ICON_LINK: &str = "M240,88.23a54.43,54.43,0,0,1-16,37L189.25,160a54.27,54.27,0,0,1-38.63,16h-.05A54.63,54.63,0,0,1,96,119.84a8,8,0,0,1,16,.45A38.62,38.62,0,0,0,150.58,160h0a38.39,38.39,0,0,0,27.31-11.31l34.75-34.75a38.63,38.63,0,0,0-54.63-54.63l-11,11A8,8,0,0,1,135.7,59l11-11A54.65,54.65,0,0,1,224,48,54.86,54.86,0,0,1,240,88.23ZM109,185.66l-11,11A38.41,38.41,0,0,1,70.6,208h0a38.63,38.63,0,0,1-27.29-65.94L78,107.31A38.63,38.63,0,0,1,144,135.71a8,8,0,0,0,16,.45A54.86,54.86,0,0,0,144,96a54.65,54.65,0,0,0-77.27,0L32,130.75A54.62,54.62,0,0,0,70.56,224h0a54.28,54.28,0,0,0,38.64-16l11-11A8,8,0,0,0,109,185.66Z";

/// Mobile phone
pub const ICON_DEVICE_MOBILE: &str = "M176,16H80A24,24,0,0,0,56,40V216a24,24,0,0,0,24,24h96a24,24,0,0,0,24-24V40A24,24,0,0,0,176,16Zm8,200a8,8,0,0,1-8,8H80a8,8,0,0,1-8-8V40a8,8,0,0,1,8-8h96a8,8,0,0,1,8,8ZM140,60a12,12,0,1,1-12-12A12,12,0,0,1,140,60Z";

/// Arrow right
pub const ICON_ARROW_RIGHT: &str = "M221.66,133.66l-72,72a8,8,0,0,1-11.32-11.32L196.69,136H40a8,8,0,0,1,0-16H196.69L138.34,61.66a8,8,0,0,1,11.32-11.32l72,72A8,8,0,0,1,221.66,133.66Z";

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    #[test]
    fn resolves_content_spellings() {
        assert_eq!(IconKey::resolve("shield"), IconKey::Shield);
        assert_eq!(IconKey::resolve("ShieldCheck"), IconKey::Shield);
        assert_eq!(IconKey::resolve("bar-chart"), IconKey::ChartBar);
        assert_eq!(IconKey::resolve("BAR_CHART"), IconKey::ChartBar);
        assert_eq!(IconKey::resolve("Zap"), IconKey::Lightning);
        assert_eq!(IconKey::resolve("refresh cw"), IconKey::ArrowsClockwise);
    }

    #[test]
    fn unknown_keys_fall_back_to_default_icon() {
        for key in ["", "definitely-not-an-icon", "🦀", "Shield!"] {
            assert_eq!(IconKey::resolve(key), IconKey::Sparkles, "key = {key:?}");
        }
        assert_eq!(IconKey::resolve("nope").path(), ICON_SPARKLE);
    }

    #[test]
    fn renders_svg_with_icon_name() {
        let html = view! { <Icon icon=IconKey::Check size="16" /> }.to_html();
        assert!(html.contains("<svg"));
        assert!(html.contains("data-icon=\"check\""));
        assert!(html.contains(ICON_CHECK));
    }
}
