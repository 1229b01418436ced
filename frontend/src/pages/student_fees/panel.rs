use super::{
    utils::fee_is_overdue,
    view_model::{use_student_fees_view_model, StudentFeesViewModel},
};
use crate::{
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card, Modal},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::{format_date, format_datetime, format_money, or_dash, today},
};
use leptos::*;

#[component]
fn BalanceCards(vm: StudentFeesViewModel) -> impl IntoView {
    view! {
        <div class="grid gap-4 md:grid-cols-3">
            <Card title="Total fees">
                <p class="text-3xl font-bold text-fg">
                    {move || format_money(vm.summary.get().total_billed)}
                </p>
            </Card>
            <Card title="Outstanding">
                <p class="text-3xl font-bold text-status-error-text">
                    {move || format_money(vm.balance().outstanding)}
                </p>
            </Card>
            <Card title="Paid">
                <p class="text-3xl font-bold text-status-success-text">
                    {move || format_money(vm.balance().paid)}
                </p>
            </Card>
        </div>
    }
}

#[component]
fn FeeTable(vm: StudentFeesViewModel) -> impl IntoView {
    view! {
        <Card title="My fees">
            {move || {
                let list = vm.fees.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                if list.is_empty() {
                    return view! { <EmptyState title="No fees billed" /> }.into_view();
                }
                let today = today();
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Fee"</th>
                                <th class="py-2">"Amount"</th>
                                <th class="py-2">"Paid"</th>
                                <th class="py-2">"Balance"</th>
                                <th class="py-2">"Due"</th>
                                <th class="py-2">"Status"</th>
                                <th class="py-2"></th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {list.items().iter().cloned().map(|fee| {
                                let overdue = fee_is_overdue(&fee, today);
                                let (tone, status) = if overdue {
                                    (BadgeTone::Danger, "OVERDUE")
                                } else {
                                    (BadgeTone::for_status(fee.status.as_str()), fee.status.as_str())
                                };
                                let name = or_dash(fee.fee_name.as_deref().or(fee.fee_code.as_deref()));
                                let for_detail = fee.clone();
                                view! {
                                    <tr class={if overdue { "bg-status-error-bg" } else { "" }}>
                                        <td class="py-2">{name}</td>
                                        <td class="py-2">{format_money(fee.amount)}</td>
                                        <td class="py-2">{format_money(fee.paid_amount)}</td>
                                        <td class="py-2 font-semibold">{format_money(fee.outstanding())}</td>
                                        <td class="py-2">{format_date(fee.due_date)}</td>
                                        <td class="py-2">
                                            <Badge tone=tone label=status.to_string() />
                                        </td>
                                        <td class="py-2 text-right">
                                            <Button
                                                variant=ButtonVariant::Ghost
                                                on:click=move |_| vm.show_fee(for_detail.clone())
                                            >
                                                "Details"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </Card>
    }
}

#[component]
fn PaymentHistory(vm: StudentFeesViewModel) -> impl IntoView {
    view! {
        <Card title="Payment history">
            {move || {
                let list = vm.payments.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                let payments = vm.sorted_payments.get();
                if payments.is_empty() {
                    return view! { <EmptyState title="No payments recorded" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Date"</th>
                                <th class="py-2">"Amount"</th>
                                <th class="py-2">"Method"</th>
                                <th class="py-2">"Reference"</th>
                                <th class="py-2">"Receipt"</th>
                                <th class="py-2">"Status"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {payments.into_iter().map(|payment| {
                                let status = payment.status.as_str();
                                view! {
                                    <tr>
                                        <td class="py-2">{format_datetime(payment.payment_date)}</td>
                                        <td class="py-2">{format_money(payment.amount)}</td>
                                        <td class="py-2">{payment.payment_method.label()}</td>
                                        <td class="py-2 font-mono">{or_dash(payment.reference_number.as_deref())}</td>
                                        <td class="py-2 font-mono">{or_dash(payment.receipt_number.as_deref())}</td>
                                        <td class="py-2">
                                            <Badge tone=BadgeTone::for_status(status) label=status.to_string() />
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }
                .into_view()
            }}
        </Card>
    }
}

#[component]
fn FeeDetail(vm: StudentFeesViewModel) -> impl IntoView {
    let title = Signal::derive(move || {
        vm.selected_fee
            .get()
            .map(|fee| or_dash(fee.fee_name.as_deref()))
            .unwrap_or_default()
    });
    view! {
        <Modal
            is_open=Signal::derive(move || vm.selected_fee.get().is_some())
            title=title
            on_close=Callback::new(move |_| vm.close_fee())
            max_width="max-w-md".to_string()
        >
            {move || vm.selected_fee.get().map(|fee| {
                let rows = [
                    ("Fee code", or_dash(fee.fee_code.as_deref())),
                    ("Amount", format_money(fee.amount)),
                    ("Paid", format_money(fee.paid_amount)),
                    ("Balance", format_money(fee.outstanding())),
                    ("Due date", format_date(fee.due_date)),
                    ("Paid on", format_date(fee.paid_date)),
                    ("Academic year", or_dash(fee.academic_year.as_deref())),
                    ("Semester", or_dash(fee.semester.as_deref())),
                    ("Notes", or_dash(fee.notes.as_deref())),
                ];
                view! {
                    <dl class="grid grid-cols-2 gap-2 text-sm">
                        {rows.into_iter().map(|(label, value)| view! {
                            <dt class="text-fg-muted">{label}</dt>
                            <dd class="text-fg">{value}</dd>
                        }).collect_view()}
                    </dl>
                }
            })}
        </Modal>
    }
}

#[component]
pub fn StudentFeesPage() -> impl IntoView {
    let vm = use_student_fees_view_model();
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"My fees"</h2>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
                </div>
                <BalanceCards vm=vm />
                <FeeTable vm=vm />
                <PaymentHistory vm=vm />
            </div>
            <FeeDetail vm=vm />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{FeeStatus, Payment, PaymentMethod, PaymentStatus, StudentFee};
    use crate::test_support::helpers::{provide_auth, student_user};
    use crate::test_support::ssr::render_to_string;

    #[test]
    fn fees_page_shows_balances_and_history() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            let vm = use_student_fees_view_model();
            vm.fees.update(|list| {
                list.upsert(StudentFee {
                    id: 1,
                    fee_name: Some("Tuition".into()),
                    amount: 1500.0,
                    paid_amount: 500.0,
                    status: FeeStatus::Partial,
                    ..StudentFee::default()
                })
            });
            vm.payments.update(|list| {
                list.upsert(Payment {
                    id: 4,
                    amount: 500.0,
                    payment_method: PaymentMethod::MobileMoney,
                    reference_number: Some("MP-7781".into()),
                    status: PaymentStatus::Completed,
                    ..Payment::default()
                })
            });
            view! {
                <div>
                    <BalanceCards vm=vm />
                    <FeeTable vm=vm />
                    <PaymentHistory vm=vm />
                </div>
            }
        });
        assert!(html.contains("$1,500.00"));
        assert!(html.contains("$1,000.00"));
        assert!(html.contains("Tuition"));
        assert!(html.contains("PARTIAL"));
        assert!(html.contains("Mobile money"));
        assert!(html.contains("MP-7781"));
    }

    #[test]
    fn fee_detail_lists_fields() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            let vm = use_student_fees_view_model();
            vm.show_fee(StudentFee {
                id: 1,
                fee_name: Some("Library".into()),
                fee_code: Some("LIB-01".into()),
                amount: 50.0,
                academic_year: Some("2024/2025".into()),
                ..StudentFee::default()
            });
            view! { <FeeDetail vm=vm /> }
        });
        assert!(html.contains("Library"));
        assert!(html.contains("LIB-01"));
        assert!(html.contains("2024&#x2F;2025"));
        assert!(html.contains("$50.00"));
    }
}
