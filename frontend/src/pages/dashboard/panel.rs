use super::{
    components::{admin_summary::AdminSummary, student_overview::StudentOverviewSection},
    utils::greeting,
    view_model::use_dashboard_view_model,
};
use crate::{
    api::Role,
    components::{
        common::{Button, ButtonVariant},
        layout::Layout,
    },
    state::auth::use_auth,
};
use leptos::*;

#[component]
pub fn DashboardPage() -> impl IntoView {
    let vm = use_dashboard_view_model();
    let (auth, _) = use_auth();
    let heading = move || auth.with(|state| greeting(state.user.as_ref()));
    let role = move || auth.with(|state| state.role());
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <div>
                        <h2 class="text-2xl font-bold text-fg">{heading}</h2>
                        <p class="text-sm text-fg-muted">
                            {move || match role() {
                                Some(Role::Admin) => "Registry overview",
                                _ => "Your academic summary",
                            }}
                        </p>
                    </div>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
                </div>
                {move || match role() {
                    Some(Role::Admin) => view! { <AdminSummary counts=vm.admin_counts /> }.into_view(),
                    Some(Role::Student) => {
                        view! { <StudentOverviewSection overview=vm.student_overview /> }.into_view()
                    }
                    None => ().into_view(),
                }}
            </div>
        </Layout>
    }
}
