use super::{
    repository::{BalanceTotals, StudentFeesRepository},
    utils::{summarize_fees, FeeSummary},
};
use crate::{
    api::{ApiClient, ApiError, Payment, StudentFee},
    pages::dashboard::utils::recent_payments,
    state::{
        auth::use_auth,
        collection::{spawn_fetch, spawn_load, ListState},
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct StudentFeesViewModel {
    pub fees: RwSignal<ListState<StudentFee>>,
    pub payments: RwSignal<ListState<Payment>>,
    pub totals: RwSignal<Option<Result<BalanceTotals, ApiError>>>,
    pub summary: Memo<FeeSummary>,
    pub sorted_payments: Memo<Vec<Payment>>,
    pub selected_fee: RwSignal<Option<StudentFee>>,
    pub reload: RwSignal<u32>,
}

impl StudentFeesViewModel {
    pub fn show_fee(&self, fee: StudentFee) {
        self.selected_fee.set(Some(fee));
    }

    pub fn close_fee(&self) {
        self.selected_fee.set(None);
    }

    /// Outstanding and paid figures, preferring the backend's totals over
    /// the sums of the loaded rows.
    pub fn balance(&self) -> BalanceTotals {
        match self.totals.get() {
            Some(Ok(totals)) => totals,
            _ => {
                let summary = self.summary.get();
                BalanceTotals {
                    outstanding: summary.outstanding,
                    paid: summary.paid,
                }
            }
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_student_fees_view_model() -> StudentFeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentFeesRepository::new_with_client(Rc::new(api));
    let (auth, _) = use_auth();

    let fees = create_rw_signal(ListState::<StudentFee>::default());
    let payments = create_rw_signal(ListState::<Payment>::default());
    let totals = create_rw_signal(None::<Result<BalanceTotals, ApiError>>);
    let selected_fee = create_rw_signal(None::<StudentFee>);
    let reload = create_rw_signal(0u32);

    let student_id = create_memo(move |_| auth.with(|state| state.user.as_ref().map(|u| u.id)));
    let summary = create_memo(move |_| fees.with(|list| summarize_fees(list.items())));
    let sorted_payments = create_memo(move |_| {
        payments.with(|list| recent_payments(list.items(), list.len()))
    });

    create_effect(move |_| {
        let _ = reload.get();
        let repo = repository.clone();
        spawn_load(fees, "fees", async move { repo.fetch_fees().await });
        let repo = repository.clone();
        spawn_load(payments, "payments", async move { repo.fetch_payments().await });
        if let Some(student_id) = student_id.get() {
            let repo = repository.clone();
            spawn_fetch(totals, "balance totals", async move {
                repo.fetch_totals(student_id).await
            });
        }
    });

    StudentFeesViewModel {
        fees,
        payments,
        totals,
        summary,
        sorted_payments,
        selected_fee,
        reload,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::FeeStatus;
    use crate::test_support::{
        helpers::{provide_auth, student_user},
        ssr::with_runtime,
    };

    #[test]
    fn balance_prefers_backend_totals() {
        with_runtime(|| {
            provide_auth(Some(student_user()));
            let vm = use_student_fees_view_model();
            vm.fees.update(|list| {
                list.upsert(StudentFee {
                    id: 1,
                    amount: 1500.0,
                    paid_amount: 500.0,
                    status: FeeStatus::Partial,
                    ..StudentFee::default()
                })
            });
            assert_eq!(vm.balance().outstanding, 1000.0);

            vm.totals.set(Some(Ok(BalanceTotals {
                outstanding: 900.0,
                paid: 600.0,
            })));
            assert_eq!(vm.balance().outstanding, 900.0);
            assert_eq!(vm.balance().paid, 600.0);
        });
    }
}
