//! Inline SVG icon set used by the shared primitives.

use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Icons available to primitives and consumers.
pub enum IconName {
    /// Dismiss cross.
    Close,
    /// Check mark.
    Check,
    /// Checked checkbox square.
    SquareCheck,
    /// Unchecked checkbox square.
    SquareDashed,
    /// Selected radio dot.
    CircleDot,
    /// Unselected radio circle.
    Circle,
    /// Home.
    Home,
    /// Person.
    User,
    /// Envelope.
    Mail,
    /// Right arrow.
    ArrowRight,
    /// Left arrow.
    ArrowLeft,
    /// Box with outbound arrow.
    ExternalLink,
    /// Error circle.
    AlertCircle,
    /// Success circle.
    CheckCircle,
    /// Warning triangle.
    AlertTriangle,
    /// Information circle.
    Info,
    /// Window minimize bar.
    Minimize,
    /// Window maximize square.
    Maximize,
    /// Window restore squares.
    Restore,
    /// Loading spinner arc.
    Loader,
}

impl IconName {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Close => "close",
            Self::Check => "check",
            Self::SquareCheck => "square-check",
            Self::SquareDashed => "square-dashed",
            Self::CircleDot => "circle-dot",
            Self::Circle => "circle",
            Self::Home => "home",
            Self::User => "user",
            Self::Mail => "mail",
            Self::ArrowRight => "arrow-right",
            Self::ArrowLeft => "arrow-left",
            Self::ExternalLink => "external-link",
            Self::AlertCircle => "alert-circle",
            Self::CheckCircle => "check-circle",
            Self::AlertTriangle => "alert-triangle",
            Self::Info => "info",
            Self::Minimize => "minimize",
            Self::Maximize => "maximize",
            Self::Restore => "restore",
            Self::Loader => "loader",
        }
    }

    fn paths(self) -> &'static [&'static str] {
        match self {
            Self::Close => &["M18 6 6 18", "m6 6 12 12"],
            Self::Check => &["M20 6 9 17l-5-5"],
            Self::SquareCheck => &["M3 5a2 2 0 0 1 2-2h14a2 2 0 0 1 2 2v14a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "m9 12 2 2 4-4"],
            Self::SquareDashed => &["M5 3a2 2 0 0 0-2 2", "M19 3a2 2 0 0 1 2 2", "M21 19a2 2 0 0 1-2 2", "M5 21a2 2 0 0 1-2-2", "M9 3h1", "M9 21h1", "M14 3h1", "M14 21h1", "M3 9v1", "M21 9v1", "M3 14v1", "M21 14v1"],
            Self::CircleDot => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 11a1 1 0 1 0 0 2a1 1 0 1 0 0-2z"],
            Self::Circle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z"],
            Self::Home => &["M3 10a2 2 0 0 1 .71-1.53l7-6a2 2 0 0 1 2.58 0l7 6A2 2 0 0 1 21 10v9a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2z", "M15 21v-8a1 1 0 0 0-1-1h-4a1 1 0 0 0-1 1v8"],
            Self::User => &["M19 21v-2a4 4 0 0 0-4-4H9a4 4 0 0 0-4 4v2", "M12 3a4 4 0 1 0 0 8a4 4 0 1 0 0-8z"],
            Self::Mail => &["M4 4h16a2 2 0 0 1 2 2v12a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V6a2 2 0 0 1 2-2z", "m22 7-10 7L2 7"],
            Self::ArrowRight => &["M5 12h14", "m12 5 7 7-7 7"],
            Self::ArrowLeft => &["m12 19-7-7 7-7", "M19 12H5"],
            Self::ExternalLink => &["M15 3h6v6", "M10 14 21 3", "M18 13v6a2 2 0 0 1-2 2H5a2 2 0 0 1-2-2V8a2 2 0 0 1 2-2h6"],
            Self::AlertCircle => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 8v4", "M12 16h.01"],
            Self::CheckCircle => &["M22 11.08V12a10 10 0 1 1-5.93-9.14", "m9 11 3 3L22 4"],
            Self::AlertTriangle => &["m21.73 18-8-14a2 2 0 0 0-3.48 0l-8 14A2 2 0 0 0 4 21h16a2 2 0 0 0 1.73-3", "M12 9v4", "M12 17h.01"],
            Self::Info => &["M12 2a10 10 0 1 0 0 20a10 10 0 1 0 0-20z", "M12 16v-4", "M12 8h.01"],
            Self::Minimize => &["M5 12h14"],
            Self::Maximize => &["M5 5h14v14H5z"],
            Self::Restore => &["M8 8h11v11H8z", "M5 16V5h11"],
            Self::Loader => &["M21 12a9 9 0 1 1-6.22-8.56"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Rendered icon sizes.
pub enum IconSize {
    /// 16px.
    Sm,
    /// 20px.
    #[default]
    Md,
    /// 24px.
    Lg,
}

impl IconSize {
    fn px(self) -> u16 {
        match self {
            Self::Sm => 16,
            Self::Md => 20,
            Self::Lg => 24,
        }
    }
}

#[component]
/// Decorative inline SVG icon. Hidden from assistive technology.
pub fn Icon(
    icon: IconName,
    #[prop(default = IconSize::Md)] size: IconSize,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let px = size.px();
    view! {
        <svg
            class=crate::class_names::merge_class("ui-icon", layout_class)
            data-ui-icon=icon.token()
            width=px
            height=px
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            focusable="false"
        >
            {icon.paths().iter().map(|d| view! { <path d=*d /> }).collect_view()}
        </svg>
    }
}
