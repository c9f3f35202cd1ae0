use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Card surface variants.
pub enum CardVariant {
    /// Static surface.
    #[default]
    Default,
    /// Hover-lifted, focusable surface.
    Interactive,
    /// Muted surface for quotes and reviews.
    Review,
}

impl CardVariant {
    fn token(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Interactive => "interactive",
            Self::Review => "review",
        }
    }
}

fn is_activation_key(key: &str) -> bool {
    matches!(key, "Enter" | " ")
}

#[component]
/// Compact inline status label.
pub fn Badge(
    #[prop(default = BadgeVariant::Default)] variant: BadgeVariant,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_class("ui-badge", layout_class)
            data-ui-primitive="true"
            data-ui-kind="badge"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Framed content surface with an optional accent gradient edge.
pub fn Card(
    #[prop(default = CardVariant::Default)] variant: CardVariant,
    #[prop(default = true)] with_gradient: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-variant=variant.token()
            data-ui-gradient=bool_token(with_gradient)
        >
            {children()}
        </div>
    }
}

#[component]
/// Card title row with an optional decorative icon.
pub fn CardHeader(
    #[prop(optional)] icon: Option<IconName>,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-card-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-header"
            data-ui-size=size.token()
        >
            {icon.map(|icon| view! { <Icon icon size=IconSize::Lg layout_class="ui-card-header-icon" /> })}
            {children()}
        </div>
    }
}

#[component]
/// Card body.
pub fn CardContent(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-card-content", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-content"
        >
            {children()}
        </div>
    }
}

#[component]
/// Card action row separated from the body by a rule.
pub fn CardFooter(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-card-footer", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-footer"
        >
            {children()}
        </div>
    }
}

#[component]
/// Two-sided card that flips on click, Enter, or Space.
///
/// The card is a toggle button: `aria-pressed` mirrors `flipped`, and the
/// hidden face is marked `aria-hidden`. The caller owns the flipped state and
/// updates it from `on_flip`.
pub fn InteractiveCard(
    #[prop(optional, into)] flipped: MaybeSignal<bool>,
    #[prop(optional)] on_flip: Option<Callback<()>>,
    #[prop(optional, into)] aria_label: Option<String>,
    /// Reverse face, shown while flipped.
    #[prop(optional, into)]
    back: Option<ViewFn>,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Front face.
    children: Children,
) -> impl IntoView {
    let flip = move || {
        if let Some(on_flip) = on_flip.as_ref() {
            on_flip.call(());
        }
    };
    view! {
        <div
            class=merge_class("ui-card ui-interactive-card", layout_class)
            role="button"
            tabindex="0"
            aria-label=aria_label
            aria-pressed=move || bool_token(flipped.get())
            data-ui-primitive="true"
            data-ui-kind="interactive-card"
            data-ui-variant=CardVariant::Interactive.token()
            data-ui-state=move || if flipped.get() { "flipped" } else { "front" }
            on:click=move |_| flip()
            on:keydown=move |ev| {
                if is_activation_key(&ev.key()) {
                    ev.prevent_default();
                    flip();
                }
            }
        >
            <div class="ui-interactive-card-inner">
                <div class="ui-interactive-card-face" data-ui-face="front" aria-hidden=move || bool_token(flipped.get())>
                    {children()}
                </div>
                {back.map(|back| {
                    view! {
                        <div
                            class="ui-interactive-card-face"
                            data-ui-face="back"
                            aria-hidden=move || bool_token(!flipped.get())
                        >
                            {back.run()}
                        </div>
                    }
                })}
            </div>
        </div>
    }
}

#[component]
/// Section heading rendered at the requested level.
pub fn Heading(
    #[prop(default = HeadingLevel::H2)] level: HeadingLevel,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let class = merge_class("ui-heading", layout_class);
    let content = children();
    let heading = match level {
        HeadingLevel::H1 => view! { <h1 id=id class=class>{content}</h1> }.into_view(),
        HeadingLevel::H2 => view! { <h2 id=id class=class>{content}</h2> }.into_view(),
        HeadingLevel::H3 => view! { <h3 id=id class=class>{content}</h3> }.into_view(),
        HeadingLevel::H4 => view! { <h4 id=id class=class>{content}</h4> }.into_view(),
        HeadingLevel::H5 => view! { <h5 id=id class=class>{content}</h5> }.into_view(),
        HeadingLevel::H6 => view! { <h6 id=id class=class>{content}</h6> }.into_view(),
    };
    view! {
        <div
            class="ui-heading-wrap"
            data-ui-primitive="true"
            data-ui-kind="heading"
            data-ui-level=level.token()
            data-ui-size=size.token()
        >
            {heading}
        </div>
    }
}

#[component]
/// Body paragraph.
pub fn Paragraph(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <p
            class=merge_class("ui-paragraph", layout_class)
            data-ui-primitive="true"
            data-ui-kind="paragraph"
            data-ui-tone=tone.token()
        >
            {children()}
        </p>
    }
}

#[component]
/// Form label.
pub fn Label(
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <label
            for=for_id
            class=merge_class("ui-label", layout_class)
            data-ui-primitive="true"
            data-ui-kind="label"
        >
            {children()}
        </label>
    }
}

#[component]
/// Inline text run.
pub fn Text(
    #[prop(default = TextTone::Primary)] tone: TextTone,
    #[prop(default = Size::Md)] size: Size,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <span
            class=merge_class("ui-text", layout_class)
            data-ui-primitive="true"
            data-ui-kind="text"
            data-ui-tone=tone.token()
            data-ui-size=size.token()
        >
            {children()}
        </span>
    }
}

#[component]
/// Severity-tinted message box.
///
/// Errors and warnings use `role="alert"`; success and info use
/// `role="status"`.
pub fn Alert(
    #[prop(default = AlertVariant::Info)] variant: AlertVariant,
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional)] hide_icon: bool,
    #[prop(optional)] icon: Option<IconName>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let icon = icon.unwrap_or_else(|| variant.icon());
    view! {
        <div
            class=merge_class("ui-alert", layout_class)
            role=variant.role()
            data-ui-primitive="true"
            data-ui-kind="alert"
            data-ui-variant=variant.token()
        >
            {(!hide_icon).then(|| view! { <Icon icon size=IconSize::Md layout_class="ui-alert-icon" /> })}
            <div class="ui-alert-body">
                {title.map(|title| view! { <p class="ui-alert-title">{title}</p> })}
                <div class="ui-alert-message">{children()}</div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_space_flip_cards() {
        assert!(is_activation_key("Enter"));
        assert!(is_activation_key(" "));
        assert!(!is_activation_key("Tab"));
        assert!(!is_activation_key("Spacebar"));
    }
}
