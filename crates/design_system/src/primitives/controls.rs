use super::*;

#[component]
/// Action button with variant, size, loading state, and icon slots.
///
/// While `loading` the button is disabled, reports `aria-busy="true"`, and the
/// leading icon is replaced by a spinner.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(default = ButtonSize::Md)] size: ButtonSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(default = "button")] button_type: &'static str,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    #[prop(optional)] node_ref: NodeRef<html::Button>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_keydown: Option<Callback<KeyboardEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            node_ref=node_ref
            type=button_type
            class=merge_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            aria-busy=move || bool_token(loading.get())
            disabled=move || disabled.get() || loading.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
            data-ui-state=move || if loading.get() { "loading" } else { "idle" }
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
            on:keydown=move |ev| {
                if let Some(on_keydown) = on_keydown.as_ref() {
                    on_keydown.call(ev);
                }
            }
        >
            {move || {
                if loading.get() {
                    Some(
                        view! { <Icon icon=IconName::Loader size=IconSize::Sm layout_class="ui-spin" /> }
                            .into_view(),
                    )
                } else {
                    leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> }.into_view())
                }
            }}
            <span class="ui-button-label">{children()}</span>
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </button>
    }
}

#[component]
/// In-app navigation link styled as a button.
pub fn LinkButton(
    #[prop(into)] href: String,
    #[prop(default = LinkVariant::Primary)] variant: LinkVariant,
    #[prop(default = LinkSize::Md)] size: LinkSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] trailing_icon: Option<IconName>,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            class=merge_class("ui-link-button", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="link-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {trailing_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
        </a>
    }
}

#[component]
/// Outbound link styled as a button. Always opens in a new browsing context
/// without an opener reference.
pub fn ExternalLinkButton(
    #[prop(into)] href: String,
    #[prop(default = LinkVariant::Primary)] variant: LinkVariant,
    #[prop(default = LinkSize::Md)] size: LinkSize,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(default = true)] show_external_icon: bool,
    children: Children,
) -> impl IntoView {
    view! {
        <a
            href=href
            target="_blank"
            rel="noopener noreferrer"
            class=merge_class("ui-link-button", layout_class)
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="external-link-button"
            data-ui-variant=variant.token()
            data-ui-size=size.token()
        >
            {leading_icon.map(|icon| view! { <Icon icon size=IconSize::Sm /> })}
            {children()}
            {show_external_icon
                .then(|| view! { <Icon icon=IconName::ExternalLink size=IconSize::Sm /> })}
        </a>
    }
}

#[component]
/// Labelled checkbox card with an optional description line.
pub fn Checkbox(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_change: Option<Callback<bool>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| unique_dom_id("checkbox"));
    view! {
        <label
            for=input_id.clone()
            class=merge_class("ui-choice", layout_class)
            data-ui-primitive="true"
            data-ui-kind="checkbox"
            data-ui-state=move || if checked.get() { "checked" } else { "unchecked" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span class="ui-choice-control">
                <input
                    id=input_id
                    name=name
                    type="checkbox"
                    class="ui-choice-input"
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        if let Some(on_change) = on_change.as_ref() {
                            on_change.call(event_target_checked(&ev));
                        }
                    }
                />
                {move || {
                    let icon = if checked.get() { IconName::SquareCheck } else { IconName::SquareDashed };
                    view! { <Icon icon size=IconSize::Md /> }
                }}
            </span>
            <ChoiceText label description />
        </label>
    }
}

#[component]
/// Labelled radio card with an optional description line.
pub fn Radio(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(optional, into)] value: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional, into)] checked: MaybeSignal<bool>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_select: Option<Callback<()>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| unique_dom_id("radio"));
    view! {
        <label
            for=input_id.clone()
            class=merge_class("ui-choice", layout_class)
            data-ui-primitive="true"
            data-ui-kind="radio"
            data-ui-state=move || if checked.get() { "checked" } else { "unchecked" }
            data-ui-disabled=move || bool_token(disabled.get())
        >
            <span class="ui-choice-control">
                <input
                    id=input_id
                    name=name
                    value=value
                    type="radio"
                    class="ui-choice-input"
                    prop:checked=move || checked.get()
                    disabled=move || disabled.get()
                    on:change=move |ev| {
                        if event_target_checked(&ev) {
                            if let Some(on_select) = on_select.as_ref() {
                                on_select.call(());
                            }
                        }
                    }
                />
                {move || {
                    let icon = if checked.get() { IconName::CircleDot } else { IconName::Circle };
                    view! { <Icon icon size=IconSize::Md /> }
                }}
            </span>
            <ChoiceText label description />
        </label>
    }
}

#[component]
fn ChoiceText(label: Option<String>, description: Option<String>) -> impl IntoView {
    view! {
        <span class="ui-choice-text">
            {label.map(|label| view! { <span class="ui-choice-label">{label}</span> })}
            {description
                .map(|description| view! { <span class="ui-choice-description">{description}</span> })}
        </span>
    }
}
