use crate::{
    api::ApiError,
    components::{
        error::InlineErrorMessage,
        layout::LoadingSpinner,
    },
    pages::dashboard::repository::AdminCounts,
};
use leptos::*;

#[component]
fn StatCard(label: &'static str, value: usize, href: &'static str) -> impl IntoView {
    view! {
        <a href=href class="block bg-surface-elevated shadow rounded-lg p-6 hover:shadow-md transition-shadow">
            <p class="text-sm text-fg-muted">{label}</p>
            <p class="mt-2 text-3xl font-bold text-fg">{value}</p>
        </a>
    }
}

#[component]
pub fn AdminSummary(counts: RwSignal<Option<Result<AdminCounts, ApiError>>>) -> impl IntoView {
    view! {
        {move || match counts.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => {
                let error_signal = create_rw_signal(Some(err));
                view! { <InlineErrorMessage error={error_signal.into()} /> }.into_view()
            }
            Some(Ok(counts)) => view! {
                <div class="grid gap-4 sm:grid-cols-2 lg:grid-cols-4">
                    <StatCard label="Students" value=counts.students href="/admin/students" />
                    <StatCard label="Programs" value=counts.programs href="/admin/programs" />
                    <StatCard label="Courses" value=counts.courses href="/admin/courses" />
                    <StatCard
                        label="Pending requests"
                        value=counts.pending_requests
                        href="/admin/enrollment-requests"
                    />
                </div>
            }.into_view(),
        }}
    }
}
