use leptos::ev::KeyboardEvent;
use leptos::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn classes(&self) -> &'static str {
        match self {
            ButtonVariant::Primary => "bg-action-primary-bg hover:bg-action-primary-bg-hover text-action-primary-text shadow-sm focus-visible:outline focus-visible:outline-2 focus-visible:outline-offset-2 focus-visible:outline-action-primary-focus",
            ButtonVariant::Secondary => "bg-surface-muted hover:bg-surface-elevated text-fg border border-border shadow-sm",
            ButtonVariant::Danger => "bg-action-danger-bg hover:bg-action-danger-bg-hover text-action-danger-text shadow-sm",
            ButtonVariant::Ghost => "bg-transparent hover:bg-action-ghost-bg-hover text-fg-muted hover:text-fg",
        }
    }
}

#[component]
pub fn Button(
    #[prop(optional)] variant: ButtonVariant,
    #[prop(optional, into)] class: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional, into)] loading: MaybeSignal<bool>,
    #[prop(attrs)] attributes: Vec<(&'static str, Attribute)>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            class=move || {
                format!(
                    "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold transition-colors duration-200 disabled:opacity-50 disabled:cursor-not-allowed {} {}",
                    variant.classes(),
                    class
                )
            }
            disabled=move || disabled.get() || loading.get()
            {..attributes}
        >
            <Show when=move || loading.get()>
                <span class="mr-2 h-4 w-4 animate-spin rounded-full border-2 border-current border-t-transparent"></span>
            </Show>
            {children()}
        </button>
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum BadgeTone {
    #[default]
    Neutral,
    Success,
    Warning,
    Danger,
    Info,
}

impl BadgeTone {
    pub fn classes(&self) -> &'static str {
        match self {
            BadgeTone::Neutral => "bg-surface-muted text-fg-muted",
            BadgeTone::Success => "bg-status-success-bg text-status-success-text",
            BadgeTone::Warning => "bg-status-warning-bg text-status-warning-text",
            BadgeTone::Danger => "bg-status-error-bg text-status-error-text",
            BadgeTone::Info => "bg-status-info-bg text-status-info-text",
        }
    }

    /// Tone for the backend's upper-case status words.
    pub fn for_status(status: &str) -> Self {
        match status.to_ascii_uppercase().as_str() {
            "APPROVED" | "PAID" | "COMPLETED" | "ENROLLED" | "ACTIVE" => BadgeTone::Success,
            "PENDING" | "PARTIAL" => BadgeTone::Warning,
            "REJECTED" | "OVERDUE" | "FAILED" | "CANCELLED" | "DROPPED" | "INACTIVE" => {
                BadgeTone::Danger
            }
            "WAIVED" | "REFUNDED" => BadgeTone::Info,
            _ => BadgeTone::Neutral,
        }
    }
}

#[component]
pub fn Badge(
    #[prop(optional)] tone: BadgeTone,
    #[prop(into)] label: MaybeSignal<String>,
) -> impl IntoView {
    view! {
        <span class=format!(
            "inline-flex items-center rounded-full px-2.5 py-0.5 text-xs font-medium {}",
            tone.classes()
        )>
            {move || label.get()}
        </span>
    }
}

#[component]
pub fn Card(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] class: String,
    children: Children,
) -> impl IntoView {
    view! {
        <section class=format!(
            "bg-surface-elevated shadow rounded-lg border border-border p-6 space-y-4 {}",
            class
        )>
            {title.map(|title| view! { <h2 class="text-lg font-semibold text-fg">{title}</h2> })}
            {children()}
        </section>
    }
}

#[component]
pub fn Modal(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    on_close: Callback<()>,
    #[prop(optional, into)] max_width: Option<String>,
    children: ChildrenFn,
) -> impl IntoView {
    let width = max_width.unwrap_or_else(|| "max-w-2xl".to_string());
    let title = Signal::derive(move || title.get());
    let children = store_value(children);
    view! {
        <Show when=move || is_open.get()>
            <div class="fixed inset-0 z-[60] flex items-center justify-center p-4">
                <button
                    type="button"
                    aria-label="Close"
                    class="absolute inset-0 bg-overlay-backdrop"
                    on:click=move |_| on_close.call(())
                ></button>
                <div
                    class=format!(
                        "relative z-[61] w-full {} max-h-[90vh] overflow-y-auto rounded-lg bg-surface-elevated shadow-xl border border-border p-6 space-y-4",
                        width
                    )
                    role="dialog"
                    aria-modal="true"
                    tabindex="-1"
                    on:keydown=move |ev: KeyboardEvent| {
                        if ev.key() == "Escape" {
                            ev.prevent_default();
                            on_close.call(());
                        }
                    }
                >
                    <div class="flex items-start justify-between gap-3">
                        <h2 class="text-lg font-semibold text-fg">{move || title.get()}</h2>
                        <button
                            type="button"
                            aria-label="Close"
                            class="text-fg-muted hover:text-fg"
                            on:click=move |_| on_close.call(())
                        >
                            {"✕"}
                        </button>
                    </div>
                    {move || children.with_value(|children| children())}
                </div>
            </div>
        </Show>
    }
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn modal_renders_children_only_when_open() {
        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| true)
                    title="Request enrollment"
                    on_close=Callback::new(|_| {})
                >
                    {|| view! { <p>"wizard-body"</p> }}
                </Modal>
            }
        });
        assert!(html.contains("Request enrollment"));
        assert!(html.contains("wizard-body"));

        let html = render_to_string(move || {
            view! {
                <Modal
                    is_open=Signal::derive(|| false)
                    title="Hidden"
                    on_close=Callback::new(|_| {})
                >
                    {|| view! { <p>"wizard-body"</p> }}
                </Modal>
            }
        });
        assert!(!html.contains("wizard-body"));
    }

    #[test]
    fn modal_title_follows_signal() {
        let html = render_to_string(move || {
            let program = create_rw_signal("BSc Nursing".to_string());
            let title = Signal::derive(move || format!("Request enrollment: {}", program.get()));
            view! {
                <Modal is_open=Signal::derive(|| true) title=title on_close=Callback::new(|_| {})>
                    {|| view! { <p>"offerings"</p> }}
                </Modal>
            }
        });
        assert!(html.contains("Request enrollment: BSc Nursing"));
        assert!(html.contains("offerings"));
    }

    #[test]
    fn card_and_badge_render_labels() {
        let html = render_to_string(move || {
            view! {
                <Card title="Fees">
                    <Badge tone=BadgeTone::for_status("PAID") label="PAID" />
                </Card>
            }
        });
        assert!(html.contains("Fees"));
        assert!(html.contains("PAID"));
        assert!(html.contains("bg-status-success-bg"));
    }
}
