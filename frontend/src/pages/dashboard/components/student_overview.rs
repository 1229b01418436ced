use crate::{
    api::ApiError,
    components::{
        common::{Badge, BadgeTone, Card},
        empty_state::EmptyState,
        layout::{ErrorMessage, LoadingSpinner},
    },
    pages::dashboard::{
        repository::StudentOverview,
        utils::{pending_request_count, recent_payments, RECENT_PAYMENTS},
    },
    utils::format::{format_datetime, format_money, or_dash},
};
use leptos::*;

#[component]
pub fn StudentOverviewSection(
    overview: RwSignal<Option<Result<StudentOverview, ApiError>>>,
) -> impl IntoView {
    view! {
        {move || match overview.get() {
            None => view! { <LoadingSpinner /> }.into_view(),
            Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
            Some(Ok(StudentOverview { enrollments, outstanding, paid, payments, requests })) => {
                let enrolled = enrollments.len();
                let payments = recent_payments(&payments, RECENT_PAYMENTS);
                let pending = pending_request_count(&requests);
                view! {
                    <div class="grid gap-4 md:grid-cols-3">
                        <Card title="Programs enrolled">
                            <p class="text-3xl font-bold text-fg">{enrolled}</p>
                        </Card>
                        <Card title="Outstanding balance">
                            <p class="text-3xl font-bold text-status-error-text">{format_money(outstanding)}</p>
                        </Card>
                        <Card title="Total paid">
                            <p class="text-3xl font-bold text-status-success-text">{format_money(paid)}</p>
                        </Card>
                    </div>
                    <div class="grid gap-6 lg:grid-cols-2">
                        <Card title="My programs">
                            {if enrolled == 0 {
                                view! {
                                    <EmptyState
                                        title="Not enrolled yet"
                                        description="Browse programs to request enrollment."
                                    />
                                }.into_view()
                            } else {
                                view! {
                                    <ul class="divide-y divide-border text-sm">
                                        {enrollments.into_iter().map(|enrollment| view! {
                                            <li class="py-2 flex justify-between">
                                                <span>{enrollment.program.program_title}</span>
                                                <span class="font-mono text-fg-muted">{enrollment.program.program_code}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }.into_view()
                            }}
                        </Card>
                        <Card title="Recent payments">
                            {if payments.is_empty() {
                                view! { <EmptyState title="No payments yet" /> }.into_view()
                            } else {
                                view! {
                                    <ul class="divide-y divide-border text-sm">
                                        {payments.into_iter().map(|payment| view! {
                                            <li class="py-2 flex justify-between gap-3">
                                                <span>{format_datetime(payment.payment_date)}</span>
                                                <span class="text-fg-muted">{or_dash(payment.receipt_number.as_deref())}</span>
                                                <span class="font-semibold">{format_money(payment.amount)}</span>
                                            </li>
                                        }).collect_view()}
                                    </ul>
                                }.into_view()
                            }}
                        </Card>
                    </div>
                    <Card title=format!("Enrollment requests ({} pending)", pending)>
                        {if requests.is_empty() {
                            view! { <EmptyState title="No enrollment requests" /> }.into_view()
                        } else {
                            view! {
                                <ul class="divide-y divide-border text-sm">
                                    {requests.into_iter().map(|request| view! {
                                        <li class="py-2 flex items-center justify-between">
                                            <span>{request.program.program_title}</span>
                                            <Badge
                                                tone=BadgeTone::for_status(request.status.as_str())
                                                label=request.status.label().to_string()
                                            />
                                        </li>
                                    }).collect_view()}
                                </ul>
                            }.into_view()
                        }}
                    </Card>
                }.into_view()
            }
        }}
    }
}
