use super::*;

/// One stepper entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepItem {
    /// Visible step label.
    pub label: String,
}

impl StepItem {
    /// Creates a step.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
        }
    }
}

/// One side-navigation link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavItem {
    /// Link target path.
    pub href: String,
    /// Tooltip and screen-reader label.
    pub label: String,
    /// Link icon.
    pub icon: IconName,
    /// Accessible name override, e.g. "Go to the home page".
    pub aria_label: Option<String>,
}

impl NavItem {
    /// Creates a link without an accessible-name override.
    pub fn new(href: impl Into<String>, label: impl Into<String>, icon: IconName) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
            icon,
            aria_label: None,
        }
    }

    /// Sets the accessible name.
    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }
}

fn clamp_step(current: usize, total: usize) -> usize {
    current.min(total.saturating_sub(1))
}

fn step_summary(current: usize, total: usize) -> String {
    if total == 0 {
        return "No steps".to_string();
    }
    format!("Step {} of {total}", clamp_step(current, total) + 1)
}

fn normalize_path(path: &str) -> &str {
    let trimmed = path.trim_end_matches('/');
    if trimmed.is_empty() {
        "/"
    } else {
        trimmed
    }
}

/// Whether `href` names the page at `current_path`. Trailing slashes are ignored.
pub(crate) fn is_current_path(current_path: &str, href: &str) -> bool {
    normalize_path(current_path) == normalize_path(href)
}

#[component]
/// Numbered progress indicator for multi-step flows.
///
/// Steps before `current` are complete, the step at `current` carries
/// `aria-current="step"`, and the rest are upcoming. `current` is clamped to
/// the last step.
pub fn Stepper(
    steps: Vec<StepItem>,
    #[prop(into)] current: MaybeSignal<usize>,
    #[prop(default = Orientation::Horizontal)] orientation: Orientation,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let total = steps.len();
    let current = move || clamp_step(current.get(), total);
    view! {
        <ol
            class=merge_class("ui-stepper", layout_class)
            aria-label=move || step_summary(current(), total)
            data-ui-primitive="true"
            data-ui-kind="stepper"
            data-ui-orientation=orientation.token()
            data-ui-size=size.token()
        >
            {steps
                .into_iter()
                .enumerate()
                .map(|(index, step)| {
                    let status = move || StepStatus::for_step(index, current());
                    view! {
                        <li
                            class="ui-stepper-step"
                            data-ui-state=move || status().token()
                            aria-current=move || (status() == StepStatus::Current).then_some("step")
                        >
                            <span class="ui-stepper-marker" aria-hidden="true">
                                {move || {
                                    if status() == StepStatus::Complete {
                                        view! { <Icon icon=IconName::Check size=IconSize::Sm /> }.into_view()
                                    } else {
                                        (index + 1).into_view()
                                    }
                                }}
                            </span>
                            <span class="ui-stepper-label">{step.label}</span>
                            {(index + 1 < total).then(|| view! { <span class="ui-stepper-connector" aria-hidden="true"></span> })}
                        </li>
                    }
                })
                .collect_view()}
        </ol>
    }
}

#[component]
/// Icon rail of primary navigation links.
///
/// The link matching `current_path` gets `aria-current="page"`. Labels are
/// exposed both as hover tooltips and as screen-reader text.
pub fn SideNav(
    items: Vec<NavItem>,
    #[prop(into)] current_path: MaybeSignal<String>,
    #[prop(default = "Main navigation".to_string(), into)] aria_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let current_path = Signal::derive(move || current_path.get());
    view! {
        <nav
            class=merge_class("ui-side-nav", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="side-nav"
        >
            {items
                .into_iter()
                .map(|item| {
                    let href = item.href.clone();
                    let is_current =
                        create_memo(move |_| current_path.with(|path| is_current_path(path, &href)));
                    view! {
                        <a
                            href=item.href
                            class="ui-side-nav-link"
                            aria-label=item.aria_label
                            aria-current=move || is_current.get().then_some("page")
                            data-ui-state=move || if is_current.get() { "current" } else { "idle" }
                        >
                            <Icon icon=item.icon size=IconSize::Md layout_class="ui-side-nav-icon" />
                            <span class="ui-sr-only">{item.label.clone()}</span>
                            <span class="ui-side-nav-tooltip" aria-hidden="true">{item.label}</span>
                        </a>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn current_step_is_clamped_to_the_last_step() {
        assert_eq!(clamp_step(1, 3), 1);
        assert_eq!(clamp_step(7, 3), 2);
        assert_eq!(clamp_step(0, 0), 0);
    }

    #[test]
    fn stepper_summary_counts_from_one() {
        assert_eq!(step_summary(0, 3), "Step 1 of 3");
        assert_eq!(step_summary(9, 3), "Step 3 of 3");
        assert_eq!(step_summary(0, 0), "No steps");
    }

    #[test]
    fn current_path_ignores_trailing_slashes() {
        assert!(is_current_path("/about/", "/about"));
        assert!(is_current_path("/", "/"));
        assert!(is_current_path("", "/"));
        assert!(!is_current_path("/about/team", "/about"));
        assert!(!is_current_path("/", "/contact"));
    }

    #[test]
    fn nav_item_builder_sets_the_accessible_name() {
        let item = NavItem::new("/", "Home", IconName::Home).with_aria_label("Go to the home page");
        assert_eq!(item.aria_label.as_deref(), Some("Go to the home page"));
        assert_eq!(item.href, "/");
    }
}
