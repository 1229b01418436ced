use super::{repository::EnrollmentsRepository, utils::EnrollFormState};
use crate::{
    api::{ApiClient, ApiError, Enrollment, EnrollmentsByProgram, Id, Program, User},
    state::{
        collection::{spawn_fetch, spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminEnrollmentsViewModel {
    pub enrollments: RwSignal<ListState<Enrollment>>,
    pub report: RwSignal<Option<Result<Vec<EnrollmentsByProgram>, ApiError>>>,
    pub students: RwSignal<ListState<User>>,
    pub programs: RwSignal<ListState<Program>>,
    pub form: RwSignal<EnrollFormState>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Enrollment>>,
    pub reload_report: RwSignal<u32>,
    pub enroll_action: Action<(Id, Id), Result<Enrollment, ApiError>>,
    pub delete_action: Action<Id, (Id, Result<(), ApiError>)>,
}

impl AdminEnrollmentsViewModel {
    pub fn submit(&self) {
        if self.enroll_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(request) => {
                self.messages.update(|m| m.clear());
                self.enroll_action.dispatch(request);
            }
            Err(err) => self.messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(enrollment) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(enrollment.id);
        }
    }

    fn refresh_report(&self) {
        self.reload_report
            .update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_enrollments_view_model() -> AdminEnrollmentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = EnrollmentsRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let enrollments = create_rw_signal(ListState::<Enrollment>::default());
    let report = create_rw_signal(None::<Result<Vec<EnrollmentsByProgram>, ApiError>>);
    let students = create_rw_signal(ListState::<User>::default());
    let programs = create_rw_signal(ListState::<Program>::default());
    let form = create_rw_signal(EnrollFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<Enrollment>);
    let reload_report = create_rw_signal(0u32);

    let repo_for_lists = repository.clone();
    create_effect(move |_| {
        let repo = repo_for_lists.clone();
        spawn_load(enrollments, "enrollments", async move {
            repo.fetch_enrollments().await
        });
        let repo = repo_for_lists.clone();
        spawn_load(students, "students", async move { repo.fetch_students().await });
        let repo = repo_for_lists.clone();
        spawn_load(programs, "programs", async move { repo.fetch_programs().await });
    });

    let repo_for_report = repository.clone();
    create_effect(move |_| {
        let _ = reload_report.get();
        let repo = repo_for_report.clone();
        spawn_fetch(report, "enrollment report", async move {
            repo.fetch_report().await
        });
    });

    let repo_for_enroll = repository.clone();
    let enroll_action = create_action(move |(student_id, program_id): &(Id, Id)| {
        let repo = repo_for_enroll.clone();
        let (student_id, program_id) = (*student_id, *program_id);
        async move { repo.enroll(student_id, program_id).await }
    });

    let repo_for_delete = repository;
    let delete_action = create_action(move |id: &Id| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { (id, repo.delete_enrollment(id).await) }
    });

    let vm = AdminEnrollmentsViewModel {
        enrollments,
        report,
        students,
        programs,
        form,
        messages,
        pending_delete,
        reload_report,
        enroll_action,
        delete_action,
    };

    create_effect(move |_| {
        if let Some(result) = enroll_action.value().get() {
            match result {
                Ok(enrollment) => {
                    let message = format!(
                        "{} enrolled in {}",
                        enrollment.student.full_name, enrollment.program.program_code
                    );
                    enrollments.update(|list| list.upsert(enrollment));
                    form.set(EnrollFormState::default());
                    messages.update(|m| m.set_success(message));
                    vm.refresh_report();
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some((id, result)) = delete_action.value().get() {
            let removed = enrollments.try_update(|list| list.apply_delete(id, &result));
            match result {
                Ok(()) => {
                    if removed == Some(true) {
                        vm.refresh_report();
                    }
                    toasts.success("Enrollment removed");
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    vm
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn enroll_requires_selection() {
        with_runtime(|| {
            let vm = use_admin_enrollments_view_model();
            vm.submit();
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Select a student and a program")
            );
            assert!(vm.enroll_action.value().get_untracked().is_none());
        });
    }
}
