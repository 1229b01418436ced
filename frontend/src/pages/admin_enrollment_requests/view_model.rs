use super::{
    repository::EnrollmentRequestsRepository,
    utils::{filter_requests, Decision, PendingDecision, StatusFilter},
};
use crate::{
    api::{ApiClient, ApiError, EnrollmentRequest, Id},
    state::{
        collection::{spawn_load, ListState},
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminEnrollmentRequestsViewModel {
    pub requests: RwSignal<ListState<EnrollmentRequest>>,
    pub filter: RwSignal<StatusFilter>,
    pub visible: Memo<Vec<EnrollmentRequest>>,
    pub pending_decision: RwSignal<Option<PendingDecision>>,
    pub reload: RwSignal<u32>,
    pub decide_action: Action<(Id, Decision, String), Result<EnrollmentRequest, ApiError>>,
}

impl AdminEnrollmentRequestsViewModel {
    pub fn open_decision(&self, request: EnrollmentRequest, decision: Decision) {
        self.pending_decision.set(Some(PendingDecision {
            request,
            decision,
            notes: String::new(),
        }));
    }

    pub fn set_notes(&self, notes: String) {
        self.pending_decision.update(|pending| {
            if let Some(pending) = pending {
                pending.notes = notes;
            }
        });
    }

    pub fn confirm_decision(&self) {
        if self.decide_action.pending().get_untracked() {
            return;
        }
        if let Some(pending) = self.pending_decision.get_untracked() {
            self.pending_decision.set(None);
            self.decide_action
                .dispatch((pending.request.id, pending.decision, pending.notes));
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_enrollment_requests_view_model() -> AdminEnrollmentRequestsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EnrollmentRequestsRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let requests = create_rw_signal(ListState::<EnrollmentRequest>::default());
    let filter = create_rw_signal(StatusFilter::None);
    let pending_decision = create_rw_signal(None::<PendingDecision>);
    let reload = create_rw_signal(0u32);

    let visible = create_memo(move |_| {
        let filter = filter.get();
        requests.with(|list| filter_requests(list.items(), filter))
    });

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let repo = repo_for_load.clone();
        spawn_load(requests, "enrollment requests", async move {
            repo.fetch_requests().await
        });
    });

    let repo_for_decide = repository;
    let decide_action = create_action(move |(id, decision, notes): &(Id, Decision, String)| {
        let repo = repo_for_decide.clone();
        let (id, decision, notes) = (*id, *decision, notes.clone());
        async move { repo.decide(id, decision, &notes).await }
    });

    let vm = AdminEnrollmentRequestsViewModel {
        requests,
        filter,
        visible,
        pending_decision,
        reload,
        decide_action,
    };

    create_effect(move |_| {
        if let Some(result) = decide_action.value().get() {
            match result {
                Ok(request) => {
                    toasts.success(format!(
                        "Request from {} {}",
                        request.student.full_name,
                        request.status.label().to_lowercase()
                    ));
                    vm.refresh();
                }
                Err(err) => {
                    log::warn!("Enrollment request decision failed: {}", err);
                    toasts.error(err.error);
                }
            }
        }
    });

    vm
}
