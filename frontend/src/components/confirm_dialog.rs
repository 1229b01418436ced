use crate::components::common::{Button, ButtonVariant, Modal};
use leptos::*;

/// Asks before a delete, drop or status change. The confirm button is styled
/// as `Danger` unless the caller passes another variant.
#[component]
pub fn ConfirmDialog(
    is_open: Signal<bool>,
    #[prop(into)] title: MaybeSignal<String>,
    #[prop(into)] message: MaybeSignal<String>,
    on_confirm: Callback<()>,
    on_cancel: Callback<()>,
    #[prop(optional, into)] confirm_label: MaybeSignal<String>,
    #[prop(optional, into)] cancel_label: MaybeSignal<String>,
    #[prop(default = ButtonVariant::Danger)] confirm_variant: ButtonVariant,
) -> impl IntoView {
    let message = Signal::derive(move || message.get());
    let confirm_label = Signal::derive(move || label_or(confirm_label.get(), "Confirm"));
    let cancel_label = Signal::derive(move || label_or(cancel_label.get(), "Cancel"));

    view! {
        <Modal is_open=is_open title=title on_close=on_cancel max_width="max-w-md".to_string()>
            <p class="text-sm text-fg-muted">{move || message.get()}</p>
            <div class="flex justify-end gap-2">
                <Button variant=ButtonVariant::Secondary on:click=move |_| on_cancel.call(())>
                    {move || cancel_label.get()}
                </Button>
                <Button variant=confirm_variant on:click=move |_| on_confirm.call(())>
                    {move || confirm_label.get()}
                </Button>
            </div>
        </Modal>
    }
}

fn label_or(text: String, fallback: &str) -> String {
    if text.trim().is_empty() {
        fallback.to_string()
    } else {
        text
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn confirm_dialog_renders_with_default_labels() {
        let html = render_to_string(move || {
            let is_open = Signal::derive(|| true);
            view! {
                <ConfirmDialog
                    is_open=is_open
                    title="Delete program"
                    message="Delete BSC-CS? This cannot be undone."
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("max-w-md"));
        assert!(html.contains("Delete BSC-CS? This cannot be undone."));
        assert!(html.contains("Confirm"));
        assert!(html.contains("Cancel"));
        assert!(html.contains("bg-action-danger-bg"));
    }

    #[test]
    fn confirm_dialog_uses_custom_labels_and_stays_hidden_when_closed() {
        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| true)
                    title="Approve request"
                    message="Approve this enrollment request?"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                    confirm_label="Approve"
                    cancel_label="Back"
                    confirm_variant=ButtonVariant::Primary
                />
            }
        });
        assert!(html.contains("Approve"));
        assert!(html.contains("Back"));
        assert!(html.contains("bg-action-primary-bg"));
        assert!(!html.contains("bg-action-danger-bg"));

        let html = render_to_string(move || {
            view! {
                <ConfirmDialog
                    is_open=Signal::derive(|| false)
                    title="Hidden"
                    message="hidden-message"
                    on_confirm=Callback::new(|_| {})
                    on_cancel=Callback::new(|_| {})
                />
            }
        });
        assert!(!html.contains("hidden-message"));
    }

    #[test]
    fn blank_labels_fall_back() {
        assert_eq!(label_or("  ".to_string(), "Cancel"), "Cancel");
        assert_eq!(label_or("Drop".to_string(), "Confirm"), "Drop");
    }
}
