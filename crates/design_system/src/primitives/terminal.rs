use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use leptos::leptos_dom::helpers::{IntervalHandle, TimeoutHandle};

use super::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
/// Window state of a terminal surface.
pub enum TerminalWindowState {
    /// Normal size.
    #[default]
    Visible,
    /// Expanded to fill its container.
    Maximized,
    /// Collapsed to the title bar; body hidden from assistive technology.
    Minimized,
}

impl TerminalWindowState {
    fn token(self) -> &'static str {
        match self {
            Self::Visible => "visible",
            Self::Maximized => "maximized",
            Self::Minimized => "minimized",
        }
    }

    /// State after pressing the minimize control.
    pub fn toggle_minimized(self) -> Self {
        match self {
            Self::Minimized => Self::Visible,
            Self::Visible | Self::Maximized => Self::Minimized,
        }
    }

    /// State after pressing the maximize control.
    pub fn toggle_maximized(self) -> Self {
        match self {
            Self::Maximized => Self::Visible,
            Self::Visible | Self::Minimized => Self::Maximized,
        }
    }

    /// Whether the body is collapsed.
    pub fn is_minimized(self) -> bool {
        self == Self::Minimized
    }
}

/// Timing for [`TypeWriter`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypewriterConfig {
    /// Interval between revealed characters.
    pub speed: Duration,
    /// Pause before the first character.
    pub delay: Duration,
}

impl Default for TypewriterConfig {
    fn default() -> Self {
        Self {
            speed: Duration::from_millis(50),
            delay: Duration::ZERO,
        }
    }
}

/// Character-by-character reveal progress over one text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TypewriterState {
    chars: Vec<char>,
    revealed: usize,
}

impl TypewriterState {
    /// Starts a reveal of `text` with nothing shown.
    pub fn new(text: &str) -> Self {
        Self {
            chars: text.chars().collect(),
            revealed: 0,
        }
    }

    /// Reveals one more character. Returns whether characters remain.
    pub fn tick(&mut self) -> bool {
        if self.revealed < self.chars.len() {
            self.revealed += 1;
        }
        !self.is_complete()
    }

    /// Text revealed so far.
    pub fn visible(&self) -> String {
        self.chars[..self.revealed].iter().collect()
    }

    /// Whether every character is shown.
    pub fn is_complete(&self) -> bool {
        self.revealed >= self.chars.len()
    }

    /// Full text for the live region, withheld until the reveal finishes so
    /// screen readers announce it once.
    pub fn announcement(&self) -> Option<String> {
        self.is_complete().then(|| self.chars.iter().collect())
    }
}

#[derive(Default)]
struct RevealTimers {
    start: Option<TimeoutHandle>,
    tick: Option<IntervalHandle>,
}

impl RevealTimers {
    fn clear(&mut self) {
        if let Some(start) = self.start.take() {
            start.clear();
        }
        if let Some(tick) = self.tick.take() {
            tick.clear();
        }
    }
}

fn start_reveal(
    state: RwSignal<TypewriterState>,
    timers: Rc<RefCell<RevealTimers>>,
    speed: Duration,
) {
    let tick_timers = Rc::clone(&timers);
    let handle = set_interval_with_handle(
        move || {
            let mut remaining = false;
            state.update(|state| remaining = state.tick());
            if !remaining {
                if let Some(tick) = tick_timers.borrow_mut().tick.take() {
                    tick.clear();
                }
            }
        },
        speed,
    );
    match handle {
        Ok(handle) => timers.borrow_mut().tick = Some(handle),
        Err(err) => logging::warn!("typewriter could not start: {err:?}"),
    }
}

#[component]
/// Reveals `text` one character at a time.
///
/// The animated span is `aria-hidden`; a separate polite live region receives
/// the complete text only after the reveal finishes. Changing `text` restarts
/// the reveal.
pub fn TypeWriter(
    #[prop(into)] text: MaybeSignal<String>,
    #[prop(optional)] config: TypewriterConfig,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    let state = create_rw_signal(TypewriterState::default());
    let timers = Rc::new(RefCell::new(RevealTimers::default()));

    create_effect({
        let timers = Rc::clone(&timers);
        move |_| {
            let next = text.with(|text| TypewriterState::new(text));
            timers.borrow_mut().clear();
            state.set(next);

            let start_timers = Rc::clone(&timers);
            let handle = set_timeout_with_handle(
                move || {
                    let timers = Rc::clone(&start_timers);
                    start_timers.borrow_mut().start = None;
                    start_reveal(state, timers, config.speed);
                },
                config.delay,
            );
            match handle {
                Ok(handle) => timers.borrow_mut().start = Some(handle),
                Err(err) => logging::warn!("typewriter could not schedule: {err:?}"),
            }
        }
    });

    on_cleanup(move || timers.borrow_mut().clear());

    view! {
        <span
            class=merge_class("ui-typewriter", layout_class)
            data-ui-primitive="true"
            data-ui-kind="typewriter"
            data-ui-state=move || if state.with(TypewriterState::is_complete) { "complete" } else { "typing" }
        >
            <span aria-hidden="true">
                {move || state.with(TypewriterState::visible)}
                <span class="ui-typewriter-cursor">"_"</span>
            </span>
            <span class="ui-sr-only" aria-live="polite" aria-atomic="true">
                {move || state.with(TypewriterState::announcement)}
            </span>
        </span>
    }
}

#[component]
/// Outer frame of a terminal surface.
pub fn TerminalContainer(
    #[prop(into)] state: MaybeSignal<TerminalWindowState>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-terminal", layout_class)
            role="group"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="terminal"
            data-ui-state=move || state.get().token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Terminal title bar.
pub fn TerminalHeader(
    #[prop(into)] title: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Controls rendered after the title.
    #[prop(optional)]
    children: Option<Children>,
) -> impl IntoView {
    view! {
        <header
            class=merge_class("ui-terminal-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="terminal-header"
        >
            <span class="ui-terminal-title">{title}</span>
            {children.map(|children| children())}
        </header>
    }
}

fn fire(callback: Option<Callback<()>>) -> impl Fn(MouseEvent) + 'static {
    move |_| {
        if let Some(callback) = callback.as_ref() {
            callback.call(());
        }
    }
}

#[component]
/// Minimize, maximize/restore, and close buttons.
pub fn TerminalControls(
    #[prop(into)] state: MaybeSignal<TerminalWindowState>,
    #[prop(optional)] on_minimize: Option<Callback<()>>,
    #[prop(optional)] on_maximize: Option<Callback<()>>,
    #[prop(optional)] on_close: Option<Callback<()>>,
    #[prop(optional)] layout_class: Option<&'static str>,
) -> impl IntoView {
    view! {
        <div
            class=merge_class("ui-terminal-controls", layout_class)
            role="group"
            aria-label="Window controls"
            data-ui-primitive="true"
            data-ui-kind="terminal-controls"
        >
            <button
                type="button"
                class="ui-terminal-control"
                data-ui-control="minimize"
                aria-label=move || if state.get().is_minimized() { "Expand terminal" } else { "Minimize terminal" }
                on:click=fire(on_minimize)
            >
                <Icon icon=IconName::Minimize size=IconSize::Sm />
            </button>
            <button
                type="button"
                class="ui-terminal-control"
                data-ui-control="maximize"
                aria-label=move || {
                    if state.get() == TerminalWindowState::Maximized {
                        "Restore terminal"
                    } else {
                        "Maximize terminal"
                    }
                }
                on:click=fire(on_maximize)
            >
                {move || {
                    let icon = if state.get() == TerminalWindowState::Maximized {
                        IconName::Restore
                    } else {
                        IconName::Maximize
                    };
                    view! { <Icon icon size=IconSize::Sm /> }
                }}
            </button>
            <button
                type="button"
                class="ui-terminal-control"
                data-ui-control="close"
                aria-label="Close terminal"
                on:click=fire(on_close)
            >
                <Icon icon=IconName::Close size=IconSize::Sm />
            </button>
        </div>
    }
}

#[component]
/// Terminal content region, hidden from assistive technology while minimized.
///
/// Plain `text` is revealed through a [`TypeWriter`]; otherwise `children`
/// render as-is.
pub fn TerminalBody(
    #[prop(into)] minimized: MaybeSignal<bool>,
    #[prop(optional, into)] text: Option<String>,
    #[prop(default = TypewriterConfig { speed: Duration::from_millis(100), delay: Duration::ZERO })]
    config: TypewriterConfig,
    #[prop(default = "Terminal output".to_string(), into)] aria_label: String,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let content = match text {
        Some(text) => view! { <TypeWriter text config /> }.into_view(),
        None => children
            .map(|children| children().into_view())
            .unwrap_or_else(|| ().into_view()),
    };
    view! {
        <main
            class=merge_class("ui-terminal-body", layout_class)
            role="region"
            aria-label=aria_label
            aria-hidden=move || bool_token(minimized.get())
            data-ui-primitive="true"
            data-ui-kind="terminal-body"
            data-ui-state=move || if minimized.get() { "minimized" } else { "visible" }
        >
            {content}
        </main>
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn typewriter_reveals_one_character_per_tick() {
        let mut state = TypewriterState::new("ls -a");
        assert_eq!(state.visible(), "");
        assert!(state.tick());
        assert!(state.tick());
        assert_eq!(state.visible(), "ls");
        assert_eq!(state.announcement(), None);
        while state.tick() {}
        assert_eq!(state.visible(), "ls -a");
        assert!(state.is_complete());
    }

    #[test]
    fn announcement_waits_for_the_full_text() {
        let mut state = TypewriterState::new("ok");
        state.tick();
        assert_eq!(state.announcement(), None);
        state.tick();
        assert_eq!(state.announcement().as_deref(), Some("ok"));
        assert!(!state.tick());
        assert_eq!(state.visible(), "ok");
    }

    #[test]
    fn typewriter_counts_characters_not_bytes() {
        let mut state = TypewriterState::new("olá");
        state.tick();
        state.tick();
        state.tick();
        assert_eq!(state.visible(), "olá");
        assert!(state.is_complete());
    }

    #[test]
    fn empty_text_is_complete_immediately() {
        let state = TypewriterState::new("");
        assert!(state.is_complete());
        assert_eq!(state.announcement().as_deref(), Some(""));
    }

    #[test]
    fn window_controls_toggle_against_the_visible_state() {
        use TerminalWindowState::*;
        assert_eq!(Visible.toggle_minimized(), Minimized);
        assert_eq!(Minimized.toggle_minimized(), Visible);
        assert_eq!(Maximized.toggle_minimized(), Minimized);
        assert_eq!(Visible.toggle_maximized(), Maximized);
        assert_eq!(Maximized.toggle_maximized(), Visible);
        assert_eq!(Minimized.toggle_maximized(), Maximized);
    }

    #[test]
    fn default_timing_matches_a_fast_reveal() {
        assert_eq!(
            TypewriterConfig::default(),
            TypewriterConfig {
                speed: Duration::from_millis(50),
                delay: Duration::ZERO,
            }
        );
    }
}
