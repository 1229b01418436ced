use super::{
    utils::{active_fee_count, total_billed, total_outstanding, DeleteTarget, FeeTab},
    view_model::{use_admin_fees_view_model, AdminFeesViewModel},
};
use crate::{
    api::{FeeType, PaymentStatus},
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::FeedbackMessages,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::{format_date, format_datetime, format_money, or_dash},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 w-full border border-border rounded px-3 py-2";
const TH_CLASS: &str = "py-2 text-left text-fg-muted";

#[component]
fn Tabs(vm: AdminFeesViewModel) -> impl IntoView {
    view! {
        <div class="flex gap-2 border-b border-border">
            {FeeTab::ALL.into_iter().map(|tab| {
                let class = move || {
                    if vm.tab.get() == tab {
                        "px-4 py-2 text-sm font-semibold border-b-2 border-action-primary-bg text-fg"
                    } else {
                        "px-4 py-2 text-sm font-medium text-fg-muted hover:text-fg"
                    }
                };
                view! {
                    <button type="button" class=class on:click=move |_| vm.select_tab(tab)>
                        {tab.label()}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

#[component]
fn FeeForm(vm: AdminFeesViewModel) -> impl IntoView {
    let pending = vm.create_fee_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_fee();
    };
    view! {
        <Card title="New fee">
            <form class="grid gap-4 md:grid-cols-3" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Fee code"</label>
                    <input
                        class=INPUT_CLASS
                        prop:value=move || vm.fee_form.get().fee_code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.fee_form.update(|form| form.fee_code = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Fee name"</label>
                    <input
                        class=INPUT_CLASS
                        prop:value=move || vm.fee_form.get().fee_name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.fee_form.update(|form| form.fee_name = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Amount"</label>
                    <input
                        type="number"
                        min="0"
                        step="0.01"
                        class=INPUT_CLASS
                        prop:value=move || vm.fee_form.get().amount
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.fee_form.update(|form| form.amount = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Type"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.fee_form.get().fee_type.as_str().to_string()
                        on:change=move |ev| {
                            let value = FeeType::parse(&event_target_value(&ev));
                            vm.fee_form.update(|form| form.fee_type = value);
                        }
                    >
                        {FeeType::ALL.into_iter().map(|fee_type| {
                            view! { <option value=fee_type.as_str()>{fee_type.as_str()}</option> }
                        }).collect_view()}
                    </select>
                </div>
                <div class="md:col-span-2">
                    <label class="block text-sm font-medium text-fg">"Description"</label>
                    <input
                        class=INPUT_CLASS
                        prop:value=move || vm.fee_form.get().description
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.fee_form.update(|form| form.description = value);
                        }
                    />
                </div>
                <div class="md:col-span-3">
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || pending.get()
                    >
                        "Create fee"
                    </button>
                </div>
            </form>
        </Card>
    }
}

#[component]
fn FeesTab(vm: AdminFeesViewModel) -> impl IntoView {
    view! {
        <div class="space-y-6">
            <FeeForm vm=vm />
            <Card>
                {move || {
                    let list = vm.fees.get();
                    if list.is_loading() {
                        return view! { <LoadingSpinner /> }.into_view();
                    }
                    if let Some(error) = list.error() {
                        return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                    }
                    if list.is_empty() {
                        return view! { <EmptyState title="No fees defined" /> }.into_view();
                    }
                    view! {
                        <p class="text-sm text-fg-muted mb-2">
                            {format!("{} active of {}", active_fee_count(list.items()), list.len())}
                        </p>
                        <table class="min-w-full divide-y divide-border text-sm">
                            <thead>
                                <tr>
                                    <th class=TH_CLASS>"Code"</th>
                                    <th class=TH_CLASS>"Name"</th>
                                    <th class=TH_CLASS>"Type"</th>
                                    <th class=TH_CLASS>"Amount"</th>
                                    <th class=TH_CLASS>"Status"</th>
                                    <th class="py-2 text-right text-fg-muted">"Actions"</th>
                                </tr>
                            </thead>
                            <tbody class="divide-y divide-border">
                                {list.items().iter().cloned().map(|fee| {
                                    let id = fee.id;
                                    let active = fee.is_active;
                                    let description = format!("Delete fee {}?", fee.fee_code);
                                    let (tone, label) = if active {
                                        (BadgeTone::Success, "Active")
                                    } else {
                                        (BadgeTone::Neutral, "Inactive")
                                    };
                                    view! {
                                        <tr>
                                            <td class="py-2 font-mono">{fee.fee_code}</td>
                                            <td class="py-2">{fee.fee_name}</td>
                                            <td class="py-2">{fee.fee_type.as_str()}</td>
                                            <td class="py-2">{format_money(fee.amount)}</td>
                                            <td class="py-2"><Badge tone=tone label=label.to_string() /></td>
                                            <td class="py-2 text-right space-x-2">
                                                <Show when=move || active>
                                                    <Button
                                                        variant=ButtonVariant::Secondary
                                                        on:click=move |_| vm.deactivate_fee_action.dispatch(id)
                                                    >
                                                        "Deactivate"
                                                    </Button>
                                                </Show>
                                                <Button
                                                    variant=ButtonVariant::Danger
                                                    on:click=move |_| vm.request_delete(DeleteTarget::Fee(id), description.clone())
                                                >
                                                    "Delete"
                                                </Button>
                                            </td>
                                        </tr>
                                    }
                                }).collect_view()}
                            </tbody>
                        </table>
                    }.into_view()
                }}
            </Card>
        </div>
    }
}

#[component]
fn StudentFeesTab(vm: AdminFeesViewModel) -> impl IntoView {
    view! {
        <Card>
            {move || {
                let list = vm.student_fees.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                if list.is_empty() {
                    return view! { <EmptyState title="No fees assigned to students" /> }.into_view();
                }
                view! {
                    <p class="text-sm text-fg-muted mb-2">
                        {format!(
                            "Billed {} · Outstanding {}",
                            format_money(total_billed(list.items())),
                            format_money(total_outstanding(list.items()))
                        )}
                    </p>
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr>
                                <th class=TH_CLASS>"Student"</th>
                                <th class=TH_CLASS>"Fee"</th>
                                <th class=TH_CLASS>"Amount"</th>
                                <th class=TH_CLASS>"Paid"</th>
                                <th class=TH_CLASS>"Due"</th>
                                <th class=TH_CLASS>"Status"</th>
                                <th class="py-2 text-right text-fg-muted">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {list.items().iter().cloned().map(|fee| {
                                let id = fee.id;
                                let student = format!(
                                    "{} ({})",
                                    or_dash(fee.student_name.as_deref()),
                                    or_dash(fee.student_registration_number.as_deref())
                                );
                                let description = format!("Delete this fee for {}?", student);
                                view! {
                                    <tr>
                                        <td class="py-2">{student}</td>
                                        <td class="py-2">{or_dash(fee.fee_name.as_deref())}</td>
                                        <td class="py-2">{format_money(fee.amount)}</td>
                                        <td class="py-2">{format_money(fee.paid_amount)}</td>
                                        <td class="py-2">{format_date(fee.due_date)}</td>
                                        <td class="py-2">
                                            <Badge
                                                tone=BadgeTone::for_status(fee.status.as_str())
                                                label=fee.status.as_str().to_string()
                                            />
                                        </td>
                                        <td class="py-2 text-right">
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| vm.request_delete(DeleteTarget::StudentFee(id), description.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </Card>
    }
}

#[component]
fn PaymentsTab(vm: AdminFeesViewModel) -> impl IntoView {
    view! {
        <Card>
            {move || {
                let list = vm.payments.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                if list.is_empty() {
                    return view! { <EmptyState title="No payments recorded" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr>
                                <th class=TH_CLASS>"Receipt"</th>
                                <th class=TH_CLASS>"Student"</th>
                                <th class=TH_CLASS>"Amount"</th>
                                <th class=TH_CLASS>"Method"</th>
                                <th class=TH_CLASS>"Date"</th>
                                <th class=TH_CLASS>"Status"</th>
                                <th class="py-2 text-right text-fg-muted">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {list.items().iter().cloned().map(|payment| {
                                let id = payment.id;
                                let receipt = or_dash(payment.receipt_number.as_deref());
                                let description = format!("Delete payment {}?", receipt);
                                let current = payment.status;
                                view! {
                                    <tr>
                                        <td class="py-2 font-mono">{receipt}</td>
                                        <td class="py-2">{or_dash(payment.student_name.as_deref())}</td>
                                        <td class="py-2">{format_money(payment.amount)}</td>
                                        <td class="py-2">{payment.payment_method.label()}</td>
                                        <td class="py-2">{format_datetime(payment.payment_date)}</td>
                                        <td class="py-2">
                                            <select
                                                class="border border-border rounded px-2 py-1 text-sm"
                                                on:change=move |ev| {
                                                    let status = PaymentStatus::parse(&event_target_value(&ev));
                                                    if status != PaymentStatus::Unknown {
                                                        vm.payment_status_action.dispatch((id, status));
                                                    }
                                                }
                                            >
                                                {PaymentStatus::ALL.into_iter().map(|status| {
                                                    view! {
                                                        <option value=status.as_str() selected=status == current>
                                                            {status.as_str()}
                                                        </option>
                                                    }
                                                }).collect_view()}
                                            </select>
                                        </td>
                                        <td class="py-2 text-right">
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| vm.request_delete(DeleteTarget::Payment(id), description.clone())
                                            >
                                                "Delete"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </Card>
    }
}

#[component]
fn ReportsTab(vm: AdminFeesViewModel) -> impl IntoView {
    view! {
        <div class="grid gap-6 lg:grid-cols-3">
            <Card title="Payments summary">
                {move || match vm.summary.get() {
                    None => view! { <LoadingSpinner /> }.into_view(),
                    Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                    Some(Ok(summary)) => view! {
                        <dl class="space-y-2 text-sm">
                            <div class="flex justify-between"><dt>"Total billed"</dt><dd>{format_money(summary.total_billed)}</dd></div>
                            <div class="flex justify-between"><dt>"Total paid"</dt><dd>{format_money(summary.total_paid)}</dd></div>
                            <div class="flex justify-between font-semibold"><dt>"Balance"</dt><dd>{format_money(summary.total_balance)}</dd></div>
                        </dl>
                    }.into_view(),
                }}
            </Card>
            <div class="lg:col-span-2">
                <Card title="Outstanding balances">
                    {move || match vm.outstanding.get() {
                        None => view! { <LoadingSpinner /> }.into_view(),
                        Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                        Some(Ok(rows)) if rows.is_empty() => {
                            view! { <EmptyState title="No outstanding balances" /> }.into_view()
                        }
                        Some(Ok(rows)) => view! {
                            <table class="min-w-full divide-y divide-border text-sm">
                                <thead>
                                    <tr>
                                        <th class=TH_CLASS>"Student"</th>
                                        <th class=TH_CLASS>"Billed"</th>
                                        <th class=TH_CLASS>"Paid"</th>
                                        <th class=TH_CLASS>"Balance"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {rows.into_iter().map(|row| view! {
                                        <tr>
                                            <td class="py-2">{format!("{} ({})", row.full_name, row.registration_number)}</td>
                                            <td class="py-2">{format_money(row.total_billed)}</td>
                                            <td class="py-2">{format_money(row.total_paid)}</td>
                                            <td class="py-2 font-semibold">{format_money(row.balance)}</td>
                                        </tr>
                                    }).collect_view()}
                                </tbody>
                            </table>
                        }.into_view(),
                    }}
                </Card>
            </div>
        </div>
    }
}

#[component]
pub fn AdminFeesPage() -> impl IntoView {
    let vm = use_admin_fees_view_model();
    let delete_message =
        Signal::derive(move || vm.pending_delete.get().map(|(_, text)| text).unwrap_or_default());
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Fees and payments"</h2>
                <Tabs vm=vm />
                <FeedbackMessages state=vm.messages.into() />
                {move || match vm.tab.get() {
                    FeeTab::Fees => view! { <FeesTab vm=vm /> }.into_view(),
                    FeeTab::StudentFees => view! { <StudentFeesTab vm=vm /> }.into_view(),
                    FeeTab::Payments => view! { <PaymentsTab vm=vm /> }.into_view(),
                    FeeTab::Reports => view! { <ReportsTab vm=vm /> }.into_view(),
                }}
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Confirm delete"
                message=delete_message
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </Layout>
    }
}
