//! Browser gallery for the `design_system` crate.
//!
//! Each story renders one component family through the public API only,
//! including the focus-trap canvas and the card-modal scenario used for manual
//! keyboard testing. The selected story and demo toggles persist to
//! `localStorage`.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod persistence;

use std::time::Duration;

use design_system::prelude::*;
use leptos::*;

pub use persistence::{decode_state, encode_state, load_state, save_state, ShowcaseState, Story, StorageError};

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
/// Mounts the showcase to `<body>`.
pub fn mount() {
    console_error_panic_hook::set_once();
    leptos::mount_to_body(|| leptos::view! { <ShowcaseApp /> })
}

#[component]
/// Gallery root: story tabs plus the selected story.
pub fn ShowcaseApp() -> impl IntoView {
    let restored = match load_state() {
        Ok(restored) => restored.unwrap_or_default(),
        Err(err) => {
            logging::warn!("showcase state restore failed: {err}");
            ShowcaseState::default()
        }
    };
    let state = create_rw_signal(restored);
    let last_saved = create_rw_signal::<Option<String>>(None);

    create_effect(move |_| {
        let snapshot = state.get();
        let serialized = match encode_state(&snapshot) {
            Ok(serialized) => serialized,
            Err(err) => {
                logging::warn!("showcase serialize failed: {err}");
                return;
            }
        };
        if last_saved.get_untracked().as_deref() == Some(serialized.as_str()) {
            return;
        }
        if let Err(err) = save_state(&snapshot) {
            logging::warn!("showcase state save failed: {err}");
        }
        last_saved.set(Some(serialized));
    });

    let story = create_memo(move |_| state.with(|state| state.story));

    view! {
        <div class="showcase" data-ui-kind="showcase">
            <header class="showcase-header">
                <Heading level=HeadingLevel::H1>"Design system"</Heading>
                <nav class="showcase-tabs" aria-label="Stories">
                    {Story::ALL
                        .into_iter()
                        .map(|entry| {
                            view! {
                                <button
                                    type="button"
                                    class="showcase-tab"
                                    aria-pressed=move || if story.get() == entry { "true" } else { "false" }
                                    on:click=move |_| state.update(|state| state.story = entry)
                                >
                                    {entry.label()}
                                </button>
                            }
                        })
                        .collect_view()}
                </nav>
            </header>
            <main class="showcase-stage">
                {move || match story.get() {
                    Story::Actions => view! { <ActionsStory /> }.into_view(),
                    Story::Forms => view! { <FormsStory state /> }.into_view(),
                    Story::Surfaces => view! { <SurfacesStory /> }.into_view(),
                    Story::Feedback => view! { <FeedbackStory /> }.into_view(),
                    Story::Navigation => view! { <NavigationStory state /> }.into_view(),
                    Story::Terminal => view! { <TerminalStory /> }.into_view(),
                    Story::FocusTrap => view! { <FocusTrapStory state /> }.into_view(),
                    Story::CardModal => view! { <CardModalStory /> }.into_view(),
                }}
            </main>
        </div>
    }
}

#[component]
fn ActionsStory() -> impl IntoView {
    let loading = create_rw_signal(false);
    view! {
        <Section aria_label="Buttons">
            <Heading>"Buttons"</Heading>
            <div class="showcase-row">
                <Button>"Primary"</Button>
                <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
                <Button variant=ButtonVariant::Outlined>"Outlined"</Button>
                <Button variant=ButtonVariant::Destructive>"Remove contact"</Button>
                <Button size=ButtonSize::Lg leading_icon=IconName::Mail trailing_icon=IconName::ArrowRight>
                    "Send message"
                </Button>
                <Button
                    loading=loading
                    on_click=Callback::new(move |_| {
                        loading.set(true);
                        set_timeout(move || loading.set(false), Duration::from_secs(2));
                    })
                >
                    "Save"
                </Button>
            </div>
            <Heading level=HeadingLevel::H3>"Links"</Heading>
            <div class="showcase-row">
                <LinkButton href="/about" trailing_icon=IconName::ArrowRight>"Learn more"</LinkButton>
                <LinkButton href="/" variant=LinkVariant::Ghost leading_icon=IconName::ArrowLeft>"Back"</LinkButton>
                <LinkButton href="/contact" variant=LinkVariant::Cta size=LinkSize::Xl>"Get in touch"</LinkButton>
                <ExternalLinkButton href="https://www.linkedin.com" variant=LinkVariant::Linkedin>
                    "LinkedIn"
                </ExternalLinkButton>
            </div>
            <Heading level=HeadingLevel::H3>"Badges"</Heading>
            <div class="showcase-row">
                <Badge>"Default"</Badge>
                <Badge variant=BadgeVariant::Accent size=Size::Lg>"Accent"</Badge>
                <Badge variant=BadgeVariant::Outline>"Outline"</Badge>
                <Badge variant=BadgeVariant::Muted size=Size::Sm>"Muted"</Badge>
            </div>
        </Section>
    }
}

fn validate_email(value: &str) -> Option<String> {
    let value = value.trim();
    if value.is_empty() {
        return Some("Email is required.".to_string());
    }
    match value.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => None,
        _ => Some("Enter an address like name@example.com.".to_string()),
    }
}

#[component]
fn FormsStory(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let email = create_rw_signal(String::new());
    let touched = create_rw_signal(false);
    let email_error = Signal::derive(move || {
        if touched.get() {
            email.with(|email| validate_email(email))
        } else {
            None
        }
    });
    let message = create_rw_signal(String::new());

    view! {
        <Section aria_label="Forms">
            <Heading>"Forms"</Heading>
            <FieldRoot label="Email" hint="We only use it to reply." error=email_error required=true>
                <TextInput
                    input_type="email"
                    value=email
                    placeholder="name@example.com"
                    on_input=Callback::new(move |value| {
                        email.set(value);
                        touched.set(true);
                    })
                />
            </FieldRoot>
            <FieldRoot label="Message" hint="Plain text, up to a few paragraphs.">
                <TextArea value=message rows=5 on_input=Callback::new(move |value| message.set(value)) />
            </FieldRoot>
            <Checkbox
                label="Newsletter"
                description="One email a month, no tracking."
                checked=Signal::derive(move || state.with(|state| state.newsletter))
                on_change=Callback::new(move |checked| state.update(|state| state.newsletter = checked))
            />
            <div role="radiogroup" aria-label="Preferred channel" class="showcase-stack">
                {["email", "phone"]
                    .into_iter()
                    .map(|channel| {
                        view! {
                            <Radio
                                name="contact-channel"
                                value=channel
                                label=channel
                                checked=Signal::derive(move || state.with(|state| state.contact_channel == channel))
                                on_select=Callback::new(move |_| {
                                    state.update(|state| state.contact_channel = channel.to_string())
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <Checkbox label="Disabled option" disabled=true />
        </Section>
    }
}

#[component]
fn SurfacesStory() -> impl IntoView {
    let flipped = create_rw_signal(false);
    view! {
        <Section aria_label="Surfaces" element=SectionElement::Article>
            <Heading>"Surfaces"</Heading>
            <Card>
                <CardHeader icon=IconName::User>"Card title"</CardHeader>
                <CardContent>"Main card content."</CardContent>
                <CardFooter>"Card actions"</CardFooter>
            </Card>
            <Card variant=CardVariant::Review with_gradient=false>
                <CardContent>"A quiet review card."</CardContent>
            </Card>
            <InteractiveCard
                flipped=flipped
                aria_label="Experience card, press to flip"
                on_flip=Callback::new(move |_| flipped.update(|flipped| *flipped = !*flipped))
                back=|| view! { <Paragraph>"Back face details."</Paragraph> }
            >
                <Heading level=HeadingLevel::H3 size=Size::Sm>"Front face"</Heading>
                <Text tone=TextTone::Muted>"Click, Enter, or Space flips the card."</Text>
            </InteractiveCard>
            <Container variant=ContainerVariant::Success>
                <Paragraph>"Success container."</Paragraph>
            </Container>
            <Section variant=SectionVariant::Card element=SectionElement::Div with_gradient=true>
                <Label>"Label"</Label>
                <Paragraph tone=TextTone::Accent>"Card section with an accent paragraph."</Paragraph>
            </Section>
        </Section>
    }
}

#[component]
fn FeedbackStory() -> impl IntoView {
    view! {
        <Section aria_label="Alerts">
            <Heading>"Alerts"</Heading>
            <Alert variant=AlertVariant::Error title="Message not sent">
                "Try again in a few minutes."
            </Alert>
            <Alert variant=AlertVariant::Success>"Message sent."</Alert>
            <Alert variant=AlertVariant::Warning title="Slow connection">"Uploads may take longer."</Alert>
            <Alert variant=AlertVariant::Info hide_icon=true>"Replies usually arrive within a day."</Alert>
        </Section>
    }
}

#[component]
fn NavigationStory(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let steps = vec![
        StepItem::new("Contact"),
        StepItem::new("Details"),
        StepItem::new("Review"),
    ];
    let total = steps.len();
    let step = Signal::derive(move || state.with(|state| state.step));
    let nav = vec![
        NavItem::new("/", "Home", IconName::Home).with_aria_label("Go to the home page"),
        NavItem::new("/about", "About", IconName::User).with_aria_label("Go to the about page"),
        NavItem::new("/contact", "Contact", IconName::Mail).with_aria_label("Go to the contact page"),
    ];

    view! {
        <Section aria_label="Navigation">
            <Heading>"Stepper"</Heading>
            <Stepper steps=steps.clone() current=step />
            <Stepper steps orientation=Orientation::Vertical size=Size::Sm current=step />
            <div class="showcase-row">
                <Button
                    variant=ButtonVariant::Secondary
                    disabled=Signal::derive(move || step.get() == 0)
                    on_click=Callback::new(move |_| state.update(|state| state.step = state.step.saturating_sub(1)))
                >
                    "Previous"
                </Button>
                <Button
                    disabled=Signal::derive(move || step.get() + 1 >= total)
                    on_click=Callback::new(move |_| state.update(|state| state.step = (state.step + 1).min(total - 1)))
                >
                    "Next"
                </Button>
            </div>
            <Heading>"Side navigation"</Heading>
            <SideNav items=nav current_path="/about".to_string() />
        </Section>
    }
}

#[component]
fn TerminalStory() -> impl IntoView {
    let window_state = create_rw_signal(TerminalWindowState::Visible);
    let closed = create_rw_signal(false);
    let slow_reveal = TypewriterConfig {
        speed: Duration::from_millis(80),
        delay: Duration::from_millis(400),
    };
    view! {
        <Section aria_label="Terminal">
            <Heading>"Terminal"</Heading>
            <Show
                when=move || !closed.get()
                fallback=move || {
                    view! { <Button on_click=Callback::new(move |_| closed.set(false))>"Reopen terminal"</Button> }
                }
            >
                <TerminalContainer state=window_state aria_label="Demo terminal">
                    <TerminalHeader title="~/portfolio">
                        <TerminalControls
                            state=window_state
                            on_minimize=Callback::new(move |_| window_state.update(|state| *state = state.toggle_minimized()))
                            on_maximize=Callback::new(move |_| window_state.update(|state| *state = state.toggle_maximized()))
                            on_close=Callback::new(move |_| closed.set(true))
                        />
                    </TerminalHeader>
                    <TerminalBody
                        minimized=Signal::derive(move || window_state.get().is_minimized())
                        text="whoami: a developer who writes accessible interfaces."
                    />
                </TerminalContainer>
            </Show>
            <Paragraph>
                <TypeWriter
                    text="Typing at a custom pace after a short pause."
                    config=slow_reveal
                />
            </Paragraph>
        </Section>
    }
}

#[component]
fn FocusTrapStory(state: RwSignal<ShowcaseState>) -> impl IntoView {
    let active = Signal::derive(move || state.with(|state| state.trap_active));
    let primary = create_node_ref::<html::Button>();
    let toggle = create_node_ref::<html::Button>();

    view! {
        <Section aria_label="Focus trap">
            <Heading>"Focus trap"</Heading>
            <Paragraph>
                "While active, Tab and Shift+Tab cycle inside the canvas. Deactivating returns focus to the toggle."
            </Paragraph>
            <Button
                node_ref=toggle
                variant=ButtonVariant::Outlined
                on_click=Callback::new(move |_| state.update(|state| state.trap_active = !state.trap_active))
            >
                {move || if active.get() { "Deactivate trap" } else { "Activate trap" }}
            </Button>
            <FocusTrap active=active initial_focus=primary return_focus=toggle layout_class="showcase-canvas">
                <Card>
                    <CardHeader>"Trapped canvas"</CardHeader>
                    <CardContent>
                        <div class="showcase-row">
                            <Button node_ref=primary>"Primary action"</Button>
                            <Button variant=ButtonVariant::Secondary>"Secondary"</Button>
                            <LinkButton href="#focus-trap" variant=LinkVariant::Ghost>"Link"</LinkButton>
                            <Button variant=ButtonVariant::Ghost disabled=true>"Disabled (skipped)"</Button>
                        </div>
                        <FieldRoot label="Inside the trap">
                            <TextInput placeholder="Type here" />
                        </FieldRoot>
                    </CardContent>
                    <CardFooter>
                        <Button
                            variant=ButtonVariant::Destructive
                            on_click=Callback::new(move |_| state.update(|state| state.trap_active = false))
                        >
                            "Release"
                        </Button>
                    </CardFooter>
                </Card>
            </FocusTrap>
        </Section>
    }
}

#[component]
fn CardModalStory() -> impl IntoView {
    let open = create_rw_signal(false);
    let nested_open = create_rw_signal(false);
    let trigger = create_node_ref::<html::Button>();
    let nested_trigger = create_node_ref::<html::Button>();

    view! {
        <Section aria_label="Card modal">
            <Heading>"Card modal"</Heading>
            <Button node_ref=trigger leading_icon=IconName::Info on_click=Callback::new(move |_| open.set(true))>
                "Open details"
            </Button>
            <CardModal
                open=open
                on_close=move |_| open.set(false)
                title="Experience"
                icon=IconName::User
                return_focus=trigger
            >
                <Paragraph>"Escape, the close button, or a backdrop click closes this dialog."</Paragraph>
                <FieldRoot label="Note">
                    <TextInput placeholder="Focus stays inside" />
                </FieldRoot>
                <Button
                    node_ref=nested_trigger
                    variant=ButtonVariant::Secondary
                    on_click=Callback::new(move |_| nested_open.set(true))
                >
                    "Open nested dialog"
                </Button>
                <CardModal
                    open=nested_open
                    on_close=move |_| nested_open.set(false)
                    title="Nested"
                    return_focus=nested_trigger
                >
                    <Paragraph>"Only this dialog reacts to Escape until it closes."</Paragraph>
                </CardModal>
            </CardModal>
        </Section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn email_validation_messages() {
        assert_eq!(validate_email("  ").as_deref(), Some("Email is required."));
        assert!(validate_email("name@example").is_some());
        assert!(validate_email("@example.com").is_some());
        assert_eq!(validate_email("name@example.com"), None);
    }
}
