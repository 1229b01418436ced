use super::{
    utils::{count_for, filter_label, Decision, FILTERS},
    view_model::{use_admin_enrollment_requests_view_model, AdminEnrollmentRequestsViewModel},
};
use crate::{
    api::RequestStatus,
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card, Modal},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::{format_datetime, or_dash},
};
use leptos::*;

#[component]
fn FilterTabs(vm: AdminEnrollmentRequestsViewModel) -> impl IntoView {
    view! {
        <div class="flex flex-wrap gap-2">
            {FILTERS.into_iter().map(|filter| {
                let count = move || vm.requests.with(|list| count_for(list.items(), filter));
                let class = move || {
                    if vm.filter.get() == filter {
                        "rounded-full px-3 py-1 text-sm font-medium bg-action-primary-bg text-action-primary-text"
                    } else {
                        "rounded-full px-3 py-1 text-sm font-medium bg-surface-muted text-fg-muted hover:text-fg"
                    }
                };
                view! {
                    <button type="button" class=class on:click=move |_| vm.filter.set(filter)>
                        {move || format!("{} ({})", filter_label(filter), count())}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn DecisionModal(vm: AdminEnrollmentRequestsViewModel) -> impl IntoView {
    let title = Signal::derive(move || {
        vm.pending_decision
            .get()
            .map(|p| format!("{} enrollment request", p.decision.label()))
            .unwrap_or_default()
    });
    view! {
        <Modal
            is_open=Signal::derive(move || vm.pending_decision.get().is_some())
            title=title
            on_close=Callback::new(move |_| vm.pending_decision.set(None))
            max_width="max-w-lg".to_string()
        >
            {move || vm.pending_decision.get().map(|pending| {
                let request = pending.request;
                let decision = pending.decision;
                let confirm_variant = match decision {
                    Decision::Approve => ButtonVariant::Primary,
                    Decision::Reject => ButtonVariant::Danger,
                };
                view! {
                    <p class="text-sm text-fg-muted">
                        {format!(
                            "{} the request from {} ({}) for {}?",
                            decision.label(),
                            request.student.full_name,
                            request.student.registration_number,
                            request.program.program_code
                        )}
                    </p>
                    <label class="block text-sm font-medium text-fg">"Admin notes"</label>
                    <textarea
                        class="w-full border border-border rounded px-3 py-2"
                        rows="3"
                        prop:value=pending.notes
                        on:input=move |ev| vm.set_notes(event_target_value(&ev))
                    ></textarea>
                    <div class="flex justify-end gap-2">
                        <Button variant=ButtonVariant::Secondary on:click=move |_| vm.pending_decision.set(None)>
                            "Cancel"
                        </Button>
                        <Button
                            variant=confirm_variant
                            on:click=move |_| vm.confirm_decision()
                        >
                            {decision.label()}
                        </Button>
                    </div>
                }
            })}
        </Modal>
    }
}

#[component]
fn RequestTable(vm: AdminEnrollmentRequestsViewModel) -> impl IntoView {
    let deciding = vm.decide_action.pending();
    move || {
        let list = vm.requests.get();
        if list.is_loading() {
            return view! { <LoadingSpinner /> }.into_view();
        }
        if let Some(error) = list.error() {
            return view! { <ErrorMessage message=error.to_string() /> }.into_view();
        }
        let rows = vm.visible.get();
        if rows.is_empty() {
            return view! { <EmptyState title="No enrollment requests" /> }.into_view();
        }
        view! {
            <table class="min-w-full divide-y divide-border text-sm">
                <thead>
                    <tr class="text-left text-fg-muted">
                        <th class="py-2">"Student"</th>
                        <th class="py-2">"Program"</th>
                        <th class="py-2">"Period"</th>
                        <th class="py-2">"Courses"</th>
                        <th class="py-2">"Requested"</th>
                        <th class="py-2">"Status"</th>
                        <th class="py-2">"Notes"</th>
                        <th class="py-2 text-right">"Actions"</th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {rows.into_iter().map(|request| {
                        let is_pending = request.status == RequestStatus::Pending;
                        let for_approve = request.clone();
                        let for_reject = request.clone();
                        let period = request
                            .trimester
                            .as_ref()
                            .map(|t| format!("{} {}", t.name, t.academic_year))
                            .unwrap_or_else(|| "-".to_string());
                        view! {
                            <tr>
                                <td class="py-2">
                                    {format!("{} ({})", request.student.full_name, request.student.registration_number)}
                                </td>
                                <td class="py-2">{request.program.program_code.clone()}</td>
                                <td class="py-2">{period}</td>
                                <td class="py-2">{request.selected_courses().len()}</td>
                                <td class="py-2">{format_datetime(request.requested_at)}</td>
                                <td class="py-2">
                                    <Badge
                                        tone=BadgeTone::for_status(request.status.as_str())
                                        label=request.status.label().to_string()
                                    />
                                </td>
                                <td class="py-2">{or_dash(request.admin_notes.as_deref())}</td>
                                <td class="py-2 text-right space-x-2">
                                    <Show when=move || is_pending>
                                        <Button
                                            variant=ButtonVariant::Primary
                                            disabled=deciding
                                            on:click={
                                                let request = for_approve.clone();
                                                move |_| vm.open_decision(request.clone(), Decision::Approve)
                                            }
                                        >
                                            "Approve"
                                        </Button>
                                        <Button
                                            variant=ButtonVariant::Danger
                                            disabled=deciding
                                            on:click={
                                                let request = for_reject.clone();
                                                move |_| vm.open_decision(request.clone(), Decision::Reject)
                                            }
                                        >
                                            "Reject"
                                        </Button>
                                    </Show>
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        }.into_view()
    }
}

#[component]
pub fn AdminEnrollmentRequestsPage() -> impl IntoView {
    let vm = use_admin_enrollment_requests_view_model();
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"Enrollment requests"</h2>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
                </div>
                <FilterTabs vm=vm />
                <Card>
                    <RequestTable vm=vm />
                </Card>
            </div>
            <DecisionModal vm=vm />
        </Layout>
    }
}
