use super::{
    utils::LoginMode,
    view_model::{use_login_view_model, LoginViewModel},
};
use crate::components::{common::ButtonVariant, error::InlineErrorMessage};
use leptos::{ev::SubmitEvent, *};

#[component]
fn ModeToggle(vm: LoginViewModel) -> impl IntoView {
    let tab_class = move |mode: LoginMode| {
        if vm.form.get().mode == mode {
            "flex-1 rounded-md px-3 py-2 text-sm font-semibold bg-action-primary-bg text-action-primary-text"
        } else {
            "flex-1 rounded-md px-3 py-2 text-sm font-semibold text-fg-muted hover:bg-action-ghost-bg-hover"
        }
    };
    view! {
        <div class="flex gap-2 rounded-lg bg-surface-muted p-1" role="tablist">
            <button
                type="button"
                class=move || tab_class(LoginMode::Student)
                on:click=move |_| vm.set_mode(LoginMode::Student)
            >
                "Student"
            </button>
            <button
                type="button"
                class=move || tab_class(LoginMode::Admin)
                on:click=move |_| vm.set_mode(LoginMode::Admin)
            >
                "Administrator"
            </button>
        </div>
    }
}

#[component]
pub fn LoginPanel() -> impl IntoView {
    let vm = use_login_view_model();
    let pending = vm.login_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };

    view! {
        <div class="min-h-screen flex items-center justify-center bg-surface px-4">
            <div class="w-full max-w-md space-y-6 bg-surface-elevated shadow rounded-lg border border-border p-8">
                <div class="text-center space-y-1">
                    <h1 class="text-2xl font-bold text-fg">"Academic Portal"</h1>
                    <p class="text-sm text-fg-muted">"Sign in to continue"</p>
                </div>
                <ModeToggle vm=vm />
                <InlineErrorMessage error=vm.error.into() />
                <form class="space-y-4" on:submit=on_submit>
                    <div>
                        <label class="block text-sm font-medium text-fg">
                            {move || vm.form.get().mode.identifier_label()}
                        </label>
                        <input
                            class="mt-1 w-full border border-border rounded px-3 py-2"
                            autocomplete="username"
                            placeholder=move || vm.form.get().mode.identifier_placeholder()
                            prop:value=move || vm.form.get().identifier
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|state| state.identifier = value);
                            }
                        />
                    </div>
                    <div>
                        <label class="block text-sm font-medium text-fg">"Password"</label>
                        <input
                            type="password"
                            class="mt-1 w-full border border-border rounded px-3 py-2"
                            autocomplete="current-password"
                            prop:value=move || vm.form.get().password
                            on:input=move |ev| {
                                let value = event_target_value(&ev);
                                vm.form.update(|state| state.password = value);
                            }
                        />
                    </div>
                    <button
                        type="submit"
                        class=format!(
                            "w-full inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || pending.get()
                    >
                        {move || if pending.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
