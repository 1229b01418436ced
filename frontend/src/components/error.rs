use crate::{
    api::ApiError,
    components::layout::{ErrorMessage, SuccessMessage},
    state::message::MessageState,
};
use leptos::*;

#[component]
pub fn InlineErrorMessage(error: Signal<Option<ApiError>>) -> impl IntoView {
    view! {
        <Show when=move || error.get().is_some() fallback=|| ()>
            <div class="bg-status-error-bg border border-status-error-border text-status-error-text px-4 py-3 rounded space-y-1 my-2">
                <div class="font-bold">{move || error.get().map(|e| e.error).unwrap_or_default()}</div>
                {move || error.get().map(|e| {
                    let code = &e.code;
                    let details = e.details.as_ref();
                    if code == "VALIDATION_ERROR" {
                        if let Some(details) = details {
                            if let Some(errors) = details.get("errors").and_then(|v| v.as_array()) {
                                return view! {
                                    <ul class="list-disc list-inside text-sm">
                                        {errors.iter().map(|err| {
                                            view! { <li>{err.as_str().unwrap_or_default().to_string()}</li> }
                                        }).collect_view()}
                                    </ul>
                                }.into_view();
                            }
                        }
                    }
                    if code != "UNKNOWN" && !code.is_empty() {
                         view! { <div class="text-xs opacity-75">{"Code: "}{code.clone()}</div> }.into_view()
                    } else {
                        ().into_view()
                    }
                }).unwrap_or_else(|| ().into_view())}
            </div>
        </Show>
    }
}

/// Renders whichever side of a `MessageState` is set.
#[component]
pub fn FeedbackMessages(state: Signal<MessageState>) -> impl IntoView {
    view! {
        <div>
            {move || state.get().error.map(|message| view! { <ErrorMessage message=message /> })}
            {move || state.get().success.map(|message| view! { <SuccessMessage message=message /> })}
        </div>
    }
}
