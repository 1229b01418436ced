use super::{
    utils::profile_rows,
    view_model::{use_profile_view_model, ProfileViewModel},
};
use crate::{
    components::{
        common::{ButtonVariant, Card},
        error::FeedbackMessages,
        layout::{Layout, LoadingSpinner},
    },
    state::auth::use_auth,
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn ProfileDetails() -> impl IntoView {
    let (auth, _) = use_auth();
    view! {
        <Card title="Profile">
            {move || match auth.get().user {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(user) => view! {
                    <dl class="grid grid-cols-1 gap-x-6 gap-y-3 sm:grid-cols-2 text-sm">
                        {profile_rows(&user).into_iter().map(|(label, value)| view! {
                            <div>
                                <dt class="text-fg-muted">{label}</dt>
                                <dd class="text-fg font-medium">{value}</dd>
                            </div>
                        }).collect_view()}
                    </dl>
                }.into_view(),
            }}
        </Card>
    }
}

#[component]
fn PasswordForm(vm: ProfileViewModel) -> impl IntoView {
    let pending = vm.change_password_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_password();
    };
    view! {
        <Card title="Change password">
            <form class="space-y-4 max-w-md" on:submit=on_submit>
                <FeedbackMessages state=vm.password_messages.into() />
                <div>
                    <label class="block text-sm font-medium text-fg">"Current password"</label>
                    <input
                        type="password"
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.password_form.get().current_password
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.password_form.update(|form| form.current_password = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"New password"</label>
                    <input
                        type="password"
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.password_form.get().new_password
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.password_form.update(|form| form.new_password = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Confirm new password"</label>
                    <input
                        type="password"
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.password_form.get().confirm_password
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.password_form.update(|form| form.confirm_password = value);
                        }
                    />
                </div>
                <button
                    type="submit"
                    class=format!(
                        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                        ButtonVariant::Primary.classes()
                    )
                    disabled=move || pending.get()
                >
                    {move || if pending.get() { "Changing password..." } else { "Change password" }}
                </button>
            </form>
        </Card>
    }
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let vm = use_profile_view_model();
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"My profile"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <ProfileDetails />
                <PasswordForm vm=vm />
            </div>
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{provide_auth, student_user},
        ssr::render_to_string,
    };

    #[test]
    fn profile_page_shows_student_fields_and_password_form() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            view! { <ProfilePage /> }
        });
        assert!(html.contains("Jane Wanjiru"));
        assert!(html.contains("STU001"));
        assert!(html.contains("jane@uni.example"));
        assert!(html.contains("Confirm new password"));
    }
}
