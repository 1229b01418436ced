use super::{
    repository::StudentsRepository,
    utils::{filter_students, validate_new_password, StudentFormState},
};
use crate::{
    api::{ApiClient, ApiError, CreateStudentRequest, Id, ResetPasswordRequest, User},
    state::{
        collection::{spawn_fetch, spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminStudentsViewModel {
    pub students: RwSignal<ListState<User>>,
    pub search: RwSignal<String>,
    pub visible: Memo<Vec<User>>,
    pub form: RwSignal<StudentFormState>,
    pub show_form: RwSignal<bool>,
    pub messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<User>>,
    pub selected_id: RwSignal<Option<Id>>,
    pub detail: RwSignal<Option<Result<User, ApiError>>>,
    pub new_password: RwSignal<String>,
    pub drawer_messages: RwSignal<MessageState>,
    pub reload: RwSignal<u32>,
    pub create_action: Action<CreateStudentRequest, Result<User, ApiError>>,
    pub delete_action: Action<Id, (Id, Result<(), ApiError>)>,
    pub reset_action: Action<(String, ResetPasswordRequest), Result<(), ApiError>>,
}

impl AdminStudentsViewModel {
    pub fn toggle_form(&self) {
        self.show_form.update(|open| *open = !*open);
        self.messages.update(|m| m.clear());
    }

    pub fn submit(&self) {
        if self.create_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().to_request() {
            Ok(request) => {
                self.messages.update(|m| m.clear());
                self.create_action.dispatch(request);
            }
            Err(err) => self.messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn open_detail(&self, id: Id) {
        self.new_password.set(String::new());
        self.drawer_messages.update(|m| m.clear());
        self.selected_id.set(Some(id));
    }

    pub fn close_detail(&self) {
        self.selected_id.set(None);
        self.new_password.set(String::new());
    }

    pub fn reset_password(&self) {
        if self.reset_action.pending().get_untracked() {
            return;
        }
        let Some(id) = self.selected_id.get_untracked() else {
            return;
        };
        let registration_number = self
            .students
            .with_untracked(|list| list.find(id).and_then(|s| s.registration_number.clone()))
            .filter(|number| !number.trim().is_empty());
        let Some(registration_number) = registration_number else {
            self.drawer_messages
                .update(|m| m.set_error("Student has no registration number"));
            return;
        };
        match validate_new_password(&self.new_password.get_untracked()) {
            Ok(request) => {
                self.drawer_messages.update(|m| m.clear());
                self.reset_action.dispatch((registration_number, request));
            }
            Err(err) => self.drawer_messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn request_delete(&self, student: User) {
        self.pending_delete.set(Some(student));
    }

    pub fn confirm_delete(&self) {
        if let Some(student) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(student.id);
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_students_view_model() -> AdminStudentsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentsRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let students = create_rw_signal(ListState::<User>::default());
    let search = create_rw_signal(String::new());
    let form = create_rw_signal(StudentFormState::default());
    let show_form = create_rw_signal(false);
    let messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<User>);
    let selected_id = create_rw_signal(None::<Id>);
    let detail = create_rw_signal(None::<Result<User, ApiError>>);
    let new_password = create_rw_signal(String::new());
    let drawer_messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let visible = create_memo(move |_| {
        let query = search.get();
        students.with(|list| filter_students(list.items(), &query))
    });

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let repo = repo_for_load.clone();
        spawn_load(students, "students", async move { repo.fetch_students().await });
    });

    let repo_for_detail = repository.clone();
    create_effect(move |_| match selected_id.get() {
        Some(id) => {
            let repo = repo_for_detail.clone();
            spawn_fetch(detail, "student detail", async move {
                repo.fetch_student(id).await
            });
        }
        None => detail.set(None),
    });

    let repo_for_create = repository.clone();
    let create_student_action = create_action(move |request: &CreateStudentRequest| {
        let repo = repo_for_create.clone();
        let request = request.clone();
        async move { repo.create_student(request).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &Id| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { (id, repo.delete_student(id).await) }
    });

    let repo_for_reset = repository;
    let reset_action = create_action(
        move |(registration_number, request): &(String, ResetPasswordRequest)| {
            let repo = repo_for_reset.clone();
            let registration_number = registration_number.clone();
            let request = request.clone();
            async move { repo.reset_password(&registration_number, request).await }
        },
    );

    create_effect(move |_| {
        if let Some(result) = create_student_action.value().get() {
            match result {
                Ok(student) => {
                    let message = format!("Student {} created successfully", student.display_name());
                    students.update(|list| list.upsert(student));
                    form.update(|state| state.reset());
                    show_form.set(false);
                    messages.update(|m| m.set_success(message.clone()));
                    toasts.success(message);
                }
                Err(err) => messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some((id, result)) = delete_action.value().get() {
            students.update(|list| {
                list.apply_delete(id, &result);
            });
            match result {
                Ok(()) => {
                    if selected_id.get_untracked() == Some(id) {
                        selected_id.set(None);
                    }
                    toasts.success("Student deleted");
                }
                Err(err) => {
                    log::warn!("Failed to delete student {}: {}", id, err);
                    toasts.error(err.error);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = reset_action.value().get() {
            match result {
                Ok(()) => {
                    new_password.set(String::new());
                    drawer_messages.update(|m| m.set_success("Password reset successfully"));
                    toasts.success("Password reset successfully");
                }
                Err(err) => drawer_messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    AdminStudentsViewModel {
        students,
        search,
        visible,
        form,
        show_form,
        messages,
        pending_delete,
        selected_id,
        detail,
        new_password,
        drawer_messages,
        reload,
        create_action: create_student_action,
        delete_action,
        reset_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::Role;
    use crate::test_support::ssr::with_runtime;

    fn student(id: Id, number: &str) -> User {
        User {
            id,
            registration_number: Some(number.into()),
            first_name: Some("Jane".into()),
            last_name: Some("Wanjiru".into()),
            role: Role::Student,
            ..User::default()
        }
    }

    #[test]
    fn incomplete_form_is_not_submitted() {
        with_runtime(|| {
            let vm = use_admin_students_view_model();
            vm.form.update(|form| form.registration_number = "STU011".into());
            vm.submit();
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Please fill in all required fields")
            );
            assert!(vm.create_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn short_reset_password_is_rejected_in_drawer() {
        with_runtime(|| {
            let vm = use_admin_students_view_model();
            vm.students.update(|list| list.upsert(student(1, "STU001")));
            vm.open_detail(1);
            vm.new_password.set("abc".into());
            vm.reset_password();
            assert_eq!(
                vm.drawer_messages.get_untracked().error.as_deref(),
                Some("Password must be at least 6 characters long")
            );
            assert!(vm.reset_action.value().get_untracked().is_none());
            assert!(vm.messages.get_untracked().error.is_none());
        });
    }

    #[test]
    fn closing_drawer_clears_password() {
        with_runtime(|| {
            let vm = use_admin_students_view_model();
            vm.open_detail(4);
            vm.new_password.set("secret1".into());
            vm.close_detail();
            assert_eq!(vm.selected_id.get_untracked(), None);
            assert!(vm.new_password.get_untracked().is_empty());
        });
    }
}
