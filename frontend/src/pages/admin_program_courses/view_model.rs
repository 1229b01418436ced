use super::{
    repository::ProgramCoursesRepository,
    utils::{mark_inactive, OfferingFormState},
};
use crate::{
    api::{AddProgramCourse, ApiClient, ApiError, Course, Id, Program, ProgramCourse, Trimester},
    state::{
        collection::{spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminProgramCoursesViewModel {
    pub trimesters: RwSignal<ListState<Trimester>>,
    pub programs: RwSignal<ListState<Program>>,
    pub courses: RwSignal<ListState<Course>>,
    pub offerings: RwSignal<ListState<ProgramCourse>>,
    pub selected_trimester: RwSignal<Option<Id>>,
    pub form: RwSignal<OfferingFormState>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<ProgramCourse>>,
    pub add_action: Action<AddProgramCourse, Result<ProgramCourse, ApiError>>,
    pub deactivate_action: Action<Id, (Id, Result<(), ApiError>)>,
    pub delete_action: Action<Id, (Id, Result<(), ApiError>)>,
}

impl AdminProgramCoursesViewModel {
    pub fn submit(&self) {
        if self.add_action.pending().get_untracked() {
            return;
        }
        let trimester = self.selected_trimester.get_untracked();
        match self.form.get_untracked().to_request(trimester) {
            Ok(request) => {
                self.messages.update(|m| m.clear());
                self.add_action.dispatch(request);
            }
            Err(err) => self.messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(offering) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(offering.id);
        }
    }
}

pub fn use_admin_program_courses_view_model() -> AdminProgramCoursesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProgramCoursesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let trimesters = create_rw_signal(ListState::<Trimester>::default());
    let programs = create_rw_signal(ListState::<Program>::default());
    let courses = create_rw_signal(ListState::<Course>::default());
    let offerings = create_rw_signal(ListState::<ProgramCourse>::default());
    let selected_trimester = create_rw_signal(None::<Id>);
    let form = create_rw_signal(OfferingFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<ProgramCourse>);

    let repo_for_catalog = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_catalog.clone();
        spawn_load(trimesters, "trimesters", async move {
            repo.fetch_trimesters().await
        });
        let repo = repo_for_catalog.clone();
        spawn_load(programs, "programs", async move { repo.fetch_programs().await });
        let repo = repo_for_catalog.clone();
        spawn_load(courses, "courses", async move { repo.fetch_courses().await });
    });

    let repo_for_offerings = repository.clone();
    create_effect(move |_| {
        let Some(trimester_id) = selected_trimester.get() else {
            offerings.set(ListState::default());
            return;
        };
        let repo = repo_for_offerings.clone();
        spawn_load(offerings, "program courses", async move {
            repo.fetch_offerings(trimester_id).await
        });
    });

    let repo_for_add = repository.clone();
    let add_action = create_action(move |request: &AddProgramCourse| {
        let repo = repo_for_add.clone();
        let request = request.clone();
        async move { repo.add_offering(request).await }
    });

    let repo_for_deactivate = repository.clone();
    let deactivate_action = create_action(move |id: &Id| {
        let repo = repo_for_deactivate.clone();
        let id = *id;
        async move { (id, repo.deactivate_offering(id).await) }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &Id| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { (id, repo.delete_offering(id).await) }
    });

    create_effect(move |_| {
        if let Some(result) = add_action.value().get() {
            match result {
                Ok(offering) => {
                    let message = format!("{} added to the program", offering.course.course_code);
                    offerings.update(|list| list.upsert(offering));
                    form.set(OfferingFormState::default());
                    messages.update(|m| m.set_success(message));
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some((id, result)) = deactivate_action.value().get() {
            match result {
                Ok(()) => {
                    offerings.update(|list| {
                        mark_inactive(list, id);
                    });
                    toasts.info("Offering deactivated");
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some((id, result)) = delete_action.value().get() {
            offerings.update(|list| {
                list.apply_delete(id, &result);
            });
            match result {
                Ok(()) => {
                    toasts.success("Offering deleted");
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    AdminProgramCoursesViewModel {
        trimesters,
        programs,
        courses,
        offerings,
        selected_trimester,
        form,
        messages,
        pending_delete,
        add_action,
        deactivate_action,
        delete_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn adding_without_trimester_is_rejected() {
        with_runtime(|| {
            let vm = use_admin_program_courses_view_model();
            vm.form.update(|form| {
                form.program_id = "1".into();
                form.course_id = "2".into();
            });
            vm.submit();
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Select a trimester first")
            );
        });
    }
}
