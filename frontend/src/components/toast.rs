use crate::state::toast::{use_toasts, ToastKind};
use leptos::*;

fn toast_classes(kind: ToastKind) -> &'static str {
    match kind {
        ToastKind::Success => {
            "bg-status-success-bg border-status-success-border text-status-success-text"
        }
        ToastKind::Info => "bg-status-info-bg border-status-info-border text-status-info-text",
        ToastKind::Warning => {
            "bg-status-warning-bg border-status-warning-border text-status-warning-text"
        }
        ToastKind::Error => "bg-status-error-bg border-status-error-border text-status-error-text",
    }
}

#[component]
pub fn ToastHost() -> impl IntoView {
    let toasts = use_toasts();
    view! {
        <div class="fixed top-4 right-4 z-[80] flex w-80 flex-col gap-2" aria-live="polite">
            <For
                each=move || toasts.toasts().get()
                key=|toast| toast.id
                children=move |toast| {
                    let id = toast.id;
                    view! {
                        <div
                            class=format!(
                                "flex items-start justify-between gap-3 rounded border px-4 py-3 shadow {}",
                                toast_classes(toast.kind)
                            )
                            role="status"
                        >
                            <p class="text-sm">{toast.message}</p>
                            <button
                                type="button"
                                aria-label="Dismiss"
                                class="text-sm opacity-75 hover:opacity-100"
                                on:click=move |_| toasts.dismiss(id)
                            >
                                {"✕"}
                            </button>
                        </div>
                    }
                }
            />
        </div>
    }
}
