use super::{
    repository::CoursesRepository,
    utils::{filter_courses, units_for_course, CourseFormState, UnitFormState},
};
use crate::{
    api::{ApiClient, ApiError, Course, CoursePayload, Id, Program, Unit, UnitPayload},
    state::{
        collection::{spawn_load, ListState},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct AdminCoursesViewModel {
    pub courses: RwSignal<ListState<Course>>,
    pub programs: RwSignal<ListState<Program>>,
    pub units: RwSignal<ListState<Unit>>,
    pub search: RwSignal<String>,
    pub visible: Memo<Vec<Course>>,
    pub form: RwSignal<CourseFormState>,
    pub unit_form: RwSignal<UnitFormState>,
    pub selected_course: RwSignal<Option<Id>>,
    pub selected_units: Memo<Vec<Unit>>,
    pub messages: RwSignal<MessageState>,
    pub unit_messages: RwSignal<MessageState>,
    pub pending_delete: RwSignal<Option<Course>>,
    pub reload: RwSignal<u32>,
    pub save_action: Action<(Option<Id>, CoursePayload), Result<Course, ApiError>>,
    pub delete_action: Action<Id, (Id, Result<(), ApiError>)>,
    pub create_unit_action: Action<(Id, UnitPayload), Result<Unit, ApiError>>,
    pub delete_unit_action: Action<Id, (Id, Result<(), ApiError>)>,
}

impl AdminCoursesViewModel {
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

    pub fn edit(&self, course: &Course) {
        self.form.set(CourseFormState::from_course(course));
        self.messages.update(|m| m.clear());
    }

    pub fn cancel_edit(&self) {
        self.form.update(|form| form.reset());
    }

    pub fn select_course(&self, id: Id) {
        self.selected_course.set(Some(id));
        self.unit_form.set(UnitFormState::default());
        self.unit_messages.update(|m| m.clear());
    }

    pub fn submit_unit(&self) {
        let Some(course_id) = self.selected_course.get_untracked() else {
            self.unit_messages
                .update(|m| m.set_error("Select a course first"));
            return;
        };
        match self.unit_form.get_untracked().to_request() {
            Ok(payload) => {
                self.unit_messages.update(|m| m.clear());
                self.create_unit_action.dispatch((course_id, payload));
            }
            Err(err) => self.unit_messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn confirm_delete(&self) {
        if let Some(course) = self.pending_delete.get_untracked() {
            self.pending_delete.set(None);
            self.delete_action.dispatch(course.id);
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_admin_courses_view_model() -> AdminCoursesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CoursesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let courses = create_rw_signal(ListState::<Course>::default());
    let programs = create_rw_signal(ListState::<Program>::default());
    let units = create_rw_signal(ListState::<Unit>::default());
    let search = create_rw_signal(String::new());
    let form = create_rw_signal(CourseFormState::default());
    let unit_form = create_rw_signal(UnitFormState::default());
    let selected_course = create_rw_signal(None::<Id>);
    let messages = create_rw_signal(MessageState::default());
    let unit_messages = create_rw_signal(MessageState::default());
    let pending_delete = create_rw_signal(None::<Course>);
    let reload = create_rw_signal(0u32);

    let visible = create_memo(move |_| {
        let query = search.get();
        courses.with(|list| filter_courses(list.items(), &query))
    });
    let selected_units = create_memo(move |_| match selected_course.get() {
        Some(course_id) => units.with(|list| units_for_course(list.items(), course_id)),
        None => Vec::new(),
    });

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let repo = repo_for_load.clone();
        spawn_load(courses, "courses", async move { repo.fetch_courses().await });
        let repo = repo_for_load.clone();
        spawn_load(programs, "programs", async move { repo.fetch_programs().await });
        let repo = repo_for_load.clone();
        spawn_load(units, "units", async move { repo.fetch_units().await });
    });

    let repo_for_save = repository.clone();
    let save_action = create_action(move |(id, payload): &(Option<Id>, CoursePayload)| {
        let repo = repo_for_save.clone();
        let id = *id;
        let payload = payload.clone();
        async move { repo.save_course(id, payload).await }
    });

    let repo_for_delete = repository.clone();
    let delete_action = create_action(move |id: &Id| {
        let repo = repo_for_delete.clone();
        let id = *id;
        async move { (id, repo.delete_course(id).await) }
    });

    let repo_for_unit = repository.clone();
    let create_unit_action = create_action(move |(course_id, payload): &(Id, UnitPayload)| {
        let repo = repo_for_unit.clone();
        let course_id = *course_id;
        let payload = payload.clone();
        async move { repo.create_unit(course_id, payload).await }
    });

    let repo_for_unit_delete = repository;
    let delete_unit_action = create_action(move |id: &Id| {
        let repo = repo_for_unit_delete.clone();
        let id = *id;
        async move { (id, repo.delete_unit(id).await) }
    });

    create_effect(move |_| {
        if let Some(result) = save_action.value().get() {
            match result {
                Ok(course) => {
                    let message = format!("Course {} saved", course.course_code);
                    courses.update(|list| list.upsert(course));
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
            courses.update(|list| {
                list.apply_delete(id, &result);
            });
            match result {
                Ok(()) => {
                    if selected_course.get_untracked() == Some(id) {
                        selected_course.set(None);
                    }
                    toasts.success("Course deleted");
                }
                Err(err) => {
                    log::warn!("Failed to delete course {}: {}", id, err);
                    toasts.error(err.error);
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = create_unit_action.value().get() {
            match result {
                Ok(unit) => {
                    let message = format!("Unit {} added", unit.code);
                    units.update(|list| list.upsert(unit));
                    unit_form.set(UnitFormState::default());
                    unit_messages.update(|m| m.set_success(message));
                }
                Err(err) => unit_messages.update(|m| m.set_error(err.error)),
            }
        }
    });

    create_effect(move |_| {
        if let Some((id, result)) = delete_unit_action.value().get() {
            units.update(|list| {
                list.apply_delete(id, &result);
            });
            if let Err(err) = result {
                unit_messages.update(|m| m.set_error(err.error));
            }
        }
    });

    AdminCoursesViewModel {
        courses,
        programs,
        units,
        search,
        visible,
        form,
        unit_form,
        selected_course,
        selected_units,
        messages,
        unit_messages,
        pending_delete,
        reload,
        save_action,
        delete_action,
        create_unit_action,
        delete_unit_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn unit_submit_requires_selected_course() {
        with_runtime(|| {
            let vm = use_admin_courses_view_model();
            vm.unit_form.set(UnitFormState {
                code: "U1".into(),
                title: "Variables".into(),
            });
            vm.submit_unit();
            assert_eq!(
                vm.unit_messages.get_untracked().error.as_deref(),
                Some("Select a course first")
            );
        });
    }

    #[test]
    fn selecting_course_scopes_units() {
        with_runtime(|| {
            let vm = use_admin_courses_view_model();
            let course = Course {
                id: 5,
                course_code: "CS101".into(),
                course_title: "Intro".into(),
                program: None,
            };
            vm.units.update(|list| {
                list.upsert(Unit {
                    id: 1,
                    code: "U1".into(),
                    title: "Variables".into(),
                    course: Some(course.clone()),
                });
                list.upsert(Unit {
                    id: 2,
                    code: "U9".into(),
                    title: "Elsewhere".into(),
                    course: None,
                });
            });
            assert!(vm.selected_units.get_untracked().is_empty());
            vm.select_course(5);
            let scoped = vm.selected_units.get_untracked();
            assert_eq!(scoped.len(), 1);
            assert_eq!(scoped[0].code, "U1");
        });
    }

    #[test]
    fn invalid_course_form_is_rejected_locally() {
        with_runtime(|| {
            let vm = use_admin_courses_view_model();
            vm.form.update(|form| form.course_code = "CS101".into());
            vm.submit();
            assert!(vm.messages.get_untracked().error.is_some());
        });
    }
}
