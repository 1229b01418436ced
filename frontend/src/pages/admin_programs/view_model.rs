use super::{
    repository::ProgramsRepository,
    utils::{filter_programs, ProgramFormState},
};
use crate::{
    api::{ApiClient, ApiError, Id, Program, ProgramPayload},
    state::{
        collection::{spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminProgramsViewModel {
    pub programs: RwSignal<ListState<Program>>,
    pub search: RwSignal<String>,
    pub visible: Memo<Vec<Program>>,
    pub form: RwSignal<ProgramFormState>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Program>>,
    pub reload: RwSignal<u32>,
    pub save_action: Action<(Option<Id>, ProgramPayload), Result<Program, ApiError>>,
    pub delete_action: Action<Id, (Id, Result<(), ApiError>)>,
}

impl AdminProgramsViewModel {
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

    pub fn edit(&self, program: &Program) {
        self.form.set(ProgramFormState::from_program(program));
        self.messages.update(|m| m.clear());
    }

    pub fn cancel_edit(&self) {
        self.form.update(|form| form.reset());
    }

    pub fn request_delete(&self, program: Program) {
        self.pending_delete.set(Some(program));
    }

    pub fn confirm_delete(&self) {
        if let Some(program) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(program.id);
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_programs_view_model() -> AdminProgramsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProgramsRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let programs = create_rw_signal(ListState::<Program>::default());
    let search = create_rw_signal(String::new());
    let form = create_rw_signal(ProgramFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<Program>);
    let reload = create_rw_signal(0u32);

    let visible = create_memo(move |_| {
        let query = search.get();
        programs.with(|list| filter_programs(list.items(), &query))
    });

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let repo = repo_for_load.clone();
        spawn_load(programs, "programs", async move { repo.fetch_programs().await });
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<Id>, ProgramPayload)| {
        let repo = repo_for_save.clone();
        let id = *id;
        let payload = payload.clone();
        async move { repo.save_program(id, payload).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &Id| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { (id, repo.delete_program(id).await) }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(program) => {
                    let updated = form.get_untracked().is_editing();
                    let message = if updated {
                        format!("Program {} updated", program.program_code)
                    } else {
                        format!("Program {} created", program.program_code)
                    };
                    programs.update(|list| list.upsert(program));
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
            programs.update(|list| {
                list.apply_delete(id, &result);
            });
            match result {
                Ok(()) => {
                    toasts.success("Program deleted");
                }
                Err(err) => {
                    log::warn!("Failed to delete program {}: {}", id, err);
                    toasts.error(err.error);
                }
            }
        }
    });

    AdminProgramsViewModel {
        programs,
        search,
        visible,
        form,
        messages,
        pending_delete,
        reload,
        save_action,
        delete_action,
    }
}
