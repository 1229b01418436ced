use super::{repository::TrimestersRepository, utils::TrimesterFormState};
use crate::{
    api::{ApiClient, ApiError, Id, Trimester, TrimesterPayload},
    state::{
        collection::{spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminTrimestersViewModel {
    pub trimesters: RwSignal<ListState<Trimester>>,
    pub form: RwSignal<TrimesterFormState>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Trimester>>,
    pub save_action: Action<(Option<Id>, TrimesterPayload), Result<Trimester, ApiError>>,
    pub delete_action: Action<Id, (Id, Result<(), ApiError>)>,
}

impl AdminTrimestersViewModel {
    pub fn submit(&self) {
        if self.save_action.pending().get_untracked() {
            return;
        }
        let form = self.form.get_untracked();
        match form.to_request() {
            Ok(payload) => {
                self.messages.update(|m| m.clear());
                self.save_action.dispatch((form.editing, payload));
            }
            Err(err) => self.messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn edit(&self, trimester: &Trimester) {
        self.form.set(TrimesterFormState::from_trimester(trimester));
        self.messages.update(|m| m.clear());
    }

    pub fn confirm_delete(&self) {
        if let Some(trimester) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(trimester.id);
        }
    }
}

pub fn use_admin_trimesters_view_model() -> AdminTrimestersViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = TrimestersRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let trimesters = create_rw_signal(ListState::<Trimester>::default());
    let form = create_rw_signal(TrimesterFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<Trimester>);

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_load.clone();
        spawn_load(trimesters, "trimesters", async move {
            repo.fetch_trimesters().await
        });
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(
        move |(id, payload): &(Option<Id>, TrimesterPayload)| {
            let repo = repo_for_save.clone();
            let id = *id;
            let payload = payload.clone();
            async move { repo.save_trimester(id, payload).await }
        },
    );

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &Id| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { (id, repo.delete_trimester(id).await) }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(trimester) => {
                    let message = format!("{} saved", trimester.name);
                    trimesters.update(|list| list.upsert(trimester));
                    form.update(|state| state.reset());
                    messages.update(|m| m.set_success(message.clone()));
                    toasts.success(message);
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some((id, result)) = delete_action.value().get() {
            trimesters.update(|list| {
                list.apply_delete(id, &result);
            });
            match result {
                Ok(()) => {
                    toasts.success("Trimester deleted");
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    AdminTrimestersViewModel {
        trimesters,
        form,
        messages,
        pending_delete,
        save_action,
        delete_action,
    }
}
