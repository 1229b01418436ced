use super::{
    repository::FeesRepository,
    utils::{DeleteTarget, FeeFormState, FeeTab},
};
use crate::{
    api::{
        ApiClient, ApiError, Fee, FeePayload, Id, OutstandingBalance, Payment, PaymentStatus,
        PaymentsSummary, StudentFee,
    },
    state::{
        collection::{spawn_fetch, spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminFeesViewModel {
    pub tab: RwSignal<FeeTab>,
    pub fees: RwSignal<ListState<Fee>>,
    pub student_fees: RwSignal<ListState<StudentFee>>,
    pub payments: RwSignal<ListState<Payment>>,
    pub outstanding: RwSignal<Option<Result<Vec<OutstandingBalance>, ApiError>>>,
    pub summary: RwSignal<Option<Result<PaymentsSummary, ApiError>>>,
    pub fee_form: RwSignal<FeeFormState>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<(DeleteTarget, String)>>,
    pub create_fee_action: Action<FeePayload, Result<Fee, ApiError>>,
    pub deactivate_fee_action: Action<Id, Result<Fee, ApiError>>,
    pub payment_status_action: Action<(Id, PaymentStatus), Result<Payment, ApiError>>,
    pub delete_action: Action<DeleteTarget, (DeleteTarget, Result<(), ApiError>)>,
}

impl AdminFeesViewModel {
    pub fn submit_fee(&self) {
        if self.create_fee_action.pending().get_untracked() {
            return;
        }
        match self.fee_form.get_untracked().to_request() {
            Ok(payload) => {
                self.messages.update(|m| m.clear());
                self.create_fee_action.dispatch(payload);
            }
            Err(err) => self.messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn request_delete(&self, target: DeleteTarget, description: String) {
        self.pending_delete.set(Some((target, description)));
    }

    pub fn confirm_delete(&self) {
        if let Some((target, _)) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(target);
        }
    }

    pub fn select_tab(&self, tab: FeeTab) {
        self.messages.update(|m| m.clear());
        self.tab.set(tab);
    }
}

pub fn use_admin_fees_view_model() -> AdminFeesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = FeesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let tab = create_rw_signal(FeeTab::default());
    let fees = create_rw_signal(ListState::<Fee>::default());
    let student_fees = create_rw_signal(ListState::<StudentFee>::default());
    let payments = create_rw_signal(ListState::<Payment>::default());
    let outstanding = create_rw_signal(None::<Result<Vec<OutstandingBalance>, ApiError>>);
    let summary = create_rw_signal(None::<Result<PaymentsSummary, ApiError>>);
    let fee_form = create_rw_signal(FeeFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<(DeleteTarget, String)>);

    // Each tab loads its own data when shown.
    let repo_for_tab = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_tab.clone();
        match tab.get() {
            FeeTab::Fees => spawn_load(fees, "fees", async move { repo.fetch_fees().await }),
            FeeTab::StudentFees => spawn_load(student_fees, "student fees", async move {
                repo.fetch_student_fees().await
            }),
            FeeTab::Payments => spawn_load(payments, "payments", async move {
                repo.fetch_payments().await
            }),
            FeeTab::Reports => {
                let summary_repo = repo.clone();
                spawn_fetch(outstanding, "outstanding balances", async move {
                    repo.fetch_outstanding().await
                });
                spawn_fetch(summary, "payments summary", async move {
                    summary_repo.fetch_summary().await
                });
            }
        }
    });

    let repo_for_create = repository.clone();
    let create_fee_action = create_action(move |payload: &FeePayload| {
        let repo = repo_for_create.clone();
        let payload = payload.clone();
        async move { repo.create_fee(payload).await }
    });

    let repo_for_deactivate = repository.clone();
    let deactivate_fee_action = create_action(move |id: &Id| {
        let repo = repo_for_deactivate.clone();
        let id = *id;
        async move { repo.deactivate_fee(id).await }
    });

    let repo_for_status = repository.clone();
    let payment_status_action = create_action(move |(id, status): &(Id, PaymentStatus)| {
        let repo = repo_for_status.clone();
        let (id, status) = (*id, *status);
        async move { repo.update_payment_status(id, status).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |target: &DeleteTarget| {
        let repo = repo_for_delete.clone();
        let target = *target;
        async move { (target, repo.delete(target).await) }
    });

    create_effect(move |_| {
        if let Some(result) = create_fee_action.value().get() {
            match result {
                Ok(fee) => {
                    let message = format!("Fee {} created", fee.fee_code);
                    fees.update(|list| list.upsert(fee));
                    fee_form.set(FeeFormState::default());
                    messages.update(|m| m.set_success(message));
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = deactivate_fee_action.value().get() {
            match result {
                Ok(fee) => {
                    fees.update(|list| list.upsert(fee));
                    toasts.info("Fee deactivated");
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = payment_status_action.value().get() {
            match result {
                Ok(payment) => {
                    let message = format!(
                        "Payment {} marked {}",
                        payment.receipt_number.clone().unwrap_or_else(|| payment.id.to_string()),
                        payment.status.as_str().to_lowercase()
                    );
                    payments.update(|list| list.upsert(payment));
                    toasts.success(message);
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some((target, result)) = delete_action.value().get() {
            match target {
                DeleteTarget::Fee(id) => fees.update(|list| {
                    list.apply_delete(id, &result);
                }),
                DeleteTarget::StudentFee(id) => student_fees.update(|list| {
                    list.apply_delete(id, &result);
                }),
                DeleteTarget::Payment(id) => payments.update(|list| {
                    list.apply_delete(id, &result);
                }),
            }
            match result {
                Ok(()) => {
                    toasts.success(format!("Deleted {}", target.noun()));
                }
                Err(err) => {
                    log::warn!("Failed to delete {:?}: {}", target, err);
                    toasts.error(err.error);
                }
            }
        }
    });

    AdminFeesViewModel {
        tab,
        fees,
        student_fees,
        payments,
        outstanding,
        summary,
        fee_form,
        messages,
        pending_delete,
        create_fee_action,
        deactivate_fee_action,
        payment_status_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn fee_validation_runs_before_dispatch() {
        with_runtime(|| {
            let vm = use_admin_fees_view_model();
            vm.fee_form.update(|form| {
                form.fee_code = "LIB".into();
                form.fee_name = "Library".into();
                form.amount = "0".into();
            });
            vm.submit_fee();
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Amount must be greater than 0")
            );
            assert!(vm.create_fee_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn switching_tabs_clears_messages() {
        with_runtime(|| {
            let vm = use_admin_fees_view_model();
            vm.messages.update(|m| m.set_error("stale"));
            vm.select_tab(FeeTab::Payments);
            assert_eq!(vm.tab.get_untracked(), FeeTab::Payments);
            assert_eq!(vm.messages.get_untracked(), MessageState::default());
        });
    }

    #[test]
    fn delete_waits_for_confirmation() {
        with_runtime(|| {
            let vm = use_admin_fees_view_model();
            vm.request_delete(DeleteTarget::Payment(3), "Delete payment RCP-3?".into());
            assert_eq!(
                vm.pending_delete.get_untracked().map(|(target, _)| target),
                Some(DeleteTarget::Payment(3))
            );
            assert!(vm.delete_action.value().get_untracked().is_none());
        });
    }
}
