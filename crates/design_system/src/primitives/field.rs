use super::*;

/// Element ids shared by one labelled form control and its messages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldIds {
    /// Control id, targeted by the label.
    pub input: String,
    /// Hint paragraph id.
    pub hint: String,
    /// Error paragraph id.
    pub error: String,
}

/// Which supporting message a field currently shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FieldMessage {
    /// No message.
    None,
    /// The hint.
    Hint,
    /// The error, which replaces the hint.
    Error,
}

impl FieldMessage {
    /// Error wins over hint.
    pub fn select(has_hint: bool, has_error: bool) -> Self {
        match (has_error, has_hint) {
            (true, _) => Self::Error,
            (false, true) => Self::Hint,
            (false, false) => Self::None,
        }
    }
}

impl FieldIds {
    /// Derives message ids from the control id.
    pub fn new(input: impl Into<String>) -> Self {
        let input = input.into();
        Self {
            hint: format!("{input}-hint"),
            error: format!("{input}-error"),
            input,
        }
    }

    /// `aria-describedby` value: caller ids first, then the error id, then the
    /// hint id, limited to messages that are rendered.
    pub fn described_by(&self, extra: Option<&str>, message: FieldMessage) -> Option<String> {
        let shown = match message {
            FieldMessage::Error => Some(self.error.as_str()),
            FieldMessage::Hint => Some(self.hint.as_str()),
            FieldMessage::None => None,
        };
        let ids = extra
            .into_iter()
            .flat_map(str::split_whitespace)
            .chain(shown)
            .collect::<Vec<_>>();
        (!ids.is_empty()).then(|| ids.join(" "))
    }
}

#[derive(Debug, Clone, Copy)]
struct FieldContext {
    ids: StoredValue<FieldIds>,
    message: Signal<FieldMessage>,
}

impl FieldContext {
    fn input_id(self) -> String {
        self.ids.with_value(|ids| ids.input.clone())
    }
}

fn control_id(explicit: Option<&String>, ctx: Option<FieldContext>) -> Option<String> {
    explicit.cloned().or_else(|| ctx.map(FieldContext::input_id))
}

fn control_described_by(extra: Option<&str>, ctx: Option<FieldContext>) -> Option<String> {
    match ctx {
        Some(ctx) => ctx.ids.with_value(|ids| ids.described_by(extra, ctx.message.get())),
        None => extra.map(str::to_string),
    }
}

fn control_invalid(ctx: Option<FieldContext>) -> Option<&'static str> {
    ctx.filter(|ctx| ctx.message.get() == FieldMessage::Error)
        .map(|_| "true")
}

#[component]
/// Groups a label, one control, and a hint or error message under shared ids.
///
/// Controls rendered inside pick up `id`, `aria-describedby`, and
/// `aria-invalid` from the root. When both `hint` and `error` are set only the
/// error is rendered.
pub fn FieldRoot(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<Option<String>>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let ids = FieldIds::new(id.unwrap_or_else(|| unique_dom_id("field")));
    let error = Signal::derive(move || error.get());
    let has_hint = hint.is_some();
    let message = Signal::derive(move || FieldMessage::select(has_hint, error.with(Option::is_some)));
    provide_context(FieldContext {
        ids: store_value(ids),
        message,
    });

    view! {
        <div
            class=merge_class("ui-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field"
            data-ui-state=move || if message.get() == FieldMessage::Error { "invalid" } else { "valid" }
        >
            {label.map(|label| view! { <FieldLabel required>{label}</FieldLabel> })}
            {children()}
            {move || match (error.get(), hint.clone()) {
                (Some(error), _) => view! { <FieldError>{error}</FieldError> }.into_view(),
                (None, Some(hint)) => view! { <FieldHint>{hint}</FieldHint> }.into_view(),
                (None, None) => ().into_view(),
            }}
        </div>
    }
}

#[component]
/// Label bound to the surrounding field's control.
pub fn FieldLabel(
    #[prop(optional, into)] for_id: Option<String>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let target = control_id(for_id.as_ref(), use_context::<FieldContext>());
    view! {
        <label
            for=target
            class=merge_class("ui-field-label", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-label"
        >
            {children()}
            {required.then(|| view! { <span class="ui-field-required" aria-hidden="true">"*"</span> })}
        </label>
    }
}

#[component]
/// Supporting text for the surrounding field.
pub fn FieldHint(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let id = id.or_else(|| {
        use_context::<FieldContext>().map(|ctx| ctx.ids.with_value(|ids| ids.hint.clone()))
    });
    view! {
        <p
            id=id
            class=merge_class("ui-field-hint", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-hint"
        >
            {children()}
        </p>
    }
}

#[component]
/// Validation message for the surrounding field, announced on render.
pub fn FieldError(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let id = id.or_else(|| {
        use_context::<FieldContext>().map(|ctx| ctx.ids.with_value(|ids| ids.error.clone()))
    });
    view! {
        <p
            id=id
            role="alert"
            class=merge_class("ui-field-error", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field-error"
        >
            {children()}
        </p>
    }
}

#[component]
/// Single-line text control.
pub fn TextInput(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = "text")] input_type: &'static str,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] node_ref: NodeRef<html::Input>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let ctx = use_context::<FieldContext>();
    view! {
        <input
            node_ref=node_ref
            type=input_type
            id=control_id(id.as_ref(), ctx)
            name=name
            placeholder=placeholder
            required=required
            class=merge_class("ui-text-input", layout_class)
            prop:value=move || value.get()
            disabled=move || disabled.get()
            aria-describedby=move || control_described_by(aria_describedby.as_deref(), ctx)
            aria-invalid=move || control_invalid(ctx)
            data-ui-primitive="true"
            data-ui-kind="text-input"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        />
    }
}

#[component]
/// Multi-line text control.
pub fn TextArea(
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] name: Option<String>,
    #[prop(default = 4)] rows: u32,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] aria_describedby: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] required: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<String>>,
) -> impl IntoView {
    let ctx = use_context::<FieldContext>();
    view! {
        <textarea
            id=control_id(id.as_ref(), ctx)
            name=name
            rows=rows
            placeholder=placeholder
            required=required
            class=merge_class("ui-text-area", layout_class)
            prop:value=move || value.get()
            disabled=move || disabled.get()
            aria-describedby=move || control_described_by(aria_describedby.as_deref(), ctx)
            aria-invalid=move || control_invalid(ctx)
            data-ui-primitive="true"
            data-ui-kind="text-area"
            on:input=move |ev| {
                if let Some(on_input) = on_input.as_ref() {
                    on_input.call(event_target_value(&ev));
                }
            }
        ></textarea>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn message_ids_derive_from_the_control_id() {
        assert_eq!(
            FieldIds::new("email"),
            FieldIds {
                input: "email".to_string(),
                hint: "email-hint".to_string(),
                error: "email-error".to_string(),
            }
        );
    }

    #[test]
    fn error_replaces_hint() {
        assert_eq!(FieldMessage::select(true, true), FieldMessage::Error);
        assert_eq!(FieldMessage::select(false, true), FieldMessage::Error);
        assert_eq!(FieldMessage::select(true, false), FieldMessage::Hint);
        assert_eq!(FieldMessage::select(false, false), FieldMessage::None);
    }

    #[test]
    fn described_by_lists_caller_ids_then_the_rendered_message() {
        let ids = FieldIds::new("email");
        assert_eq!(ids.described_by(None, FieldMessage::None), None);
        assert_eq!(
            ids.described_by(None, FieldMessage::Hint).as_deref(),
            Some("email-hint")
        );
        assert_eq!(
            ids.described_by(Some("policy  terms"), FieldMessage::Error).as_deref(),
            Some("policy terms email-error")
        );
        assert_eq!(
            ids.described_by(Some("  "), FieldMessage::None),
            None
        );
    }
}
