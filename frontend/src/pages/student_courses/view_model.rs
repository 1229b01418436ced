use super::{
    repository::StudentCoursesRepository,
    utils::{group_by_trimester, TrimesterGroup},
};
use crate::{
    api::{ApiClient, ApiError, CourseEnrollment, Id},
    state::{
        auth::use_auth,
        collection::{spawn_load, ListState},
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct StudentCoursesViewModel {
    pub enrollments: RwSignal<ListState<CourseEnrollment>>,
    pub groups: Memo<Vec<TrimesterGroup>>,
    pub pending_drop: RwSignal<Option<CourseEnrollment>>,
    pub reload: RwSignal<u32>,
    pub drop_action: Action<Id, Result<CourseEnrollment, ApiError>>,
}

impl StudentCoursesViewModel {
    pub fn request_drop(&self, enrollment: CourseEnrollment) {
        self.pending_drop.set(Some(enrollment));
    }

    pub fn cancel_drop(&self) {
        self.pending_drop.set(None);
    }

    pub fn confirm_drop(&self) {
        if let Some(enrollment) = self.pending_drop.get_untracked() {
            self.pending_drop.set(None);
            self.drop_action.dispatch(enrollment.id);
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_student_courses_view_model() -> StudentCoursesViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = StudentCoursesRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();
    let (auth, _) = use_auth();

    let enrollments = create_rw_signal(ListState::<CourseEnrollment>::default());
    let pending_drop = create_rw_signal(None::<CourseEnrollment>);
    let reload = create_rw_signal(0u32);

    let student_id = create_memo(move |_| auth.with(|state| state.user.as_ref().map(|u| u.id)));
    let groups = create_memo(move |_| enrollments.with(|list| group_by_trimester(list.items())));

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let Some(student_id) = student_id.get() else {
            return;
        };
        let repo = repo_for_load.clone();
        spawn_load(enrollments, "course enrollments", async move {
            repo.fetch_enrollments(student_id).await
        });
    });

    let drop_action = create_action(move |id: &Id| {
        let repo = repository.clone();
        let id = *id;
        async move { repo.drop_course(id).await }
    });

    create_effect(move |_| {
        if let Some(result) = drop_action.value().get() {
            match result {
                Ok(enrollment) => {
                    let title = enrollment.program_course.course.course_title.clone();
                    enrollments.update(|list| list.upsert(enrollment));
                    toasts.success(if title.is_empty() {
                        "Course dropped".to_string()
                    } else {
                        format!("Successfully dropped {}", title)
                    });
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    log::warn!("Failed to drop course: {}", err);
                    toasts.error(err.error);
                }
            }
        }
    });

    StudentCoursesViewModel {
        enrollments,
        groups,
        pending_drop,
        reload,
        drop_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{CourseEnrollmentStatus, CourseRef, ProgramCourse, TrimesterRef};
    use crate::test_support::{
        helpers::{provide_auth, student_user},
        ssr::with_runtime,
    };

    fn enrollment(id: Id, trimester_id: Id) -> CourseEnrollment {
        CourseEnrollment {
            id,
            status: CourseEnrollmentStatus::Enrolled,
            program_course: ProgramCourse {
                id: id + 100,
                course: CourseRef {
                    id,
                    course_code: format!("CS{}", id),
                    course_title: format!("Course {}", id),
                },
                trimester: Some(TrimesterRef {
                    id: trimester_id,
                    name: format!("Trimester {}", trimester_id),
                    minimum_courses: 1,
                    maximum_courses: 3,
                    ..TrimesterRef::default()
                }),
                credit_hours: 3,
                ..ProgramCourse::default()
            },
            ..CourseEnrollment::default()
        }
    }

    #[test]
    fn groups_follow_loaded_enrollments() {
        with_runtime(|| {
            provide_auth(Some(student_user()));
            let vm = use_student_courses_view_model();
            vm.enrollments.update(|list| {
                list.upsert(enrollment(1, 5));
                list.upsert(enrollment(2, 6));
                list.upsert(enrollment(3, 5));
            });
            let groups = vm.groups.get_untracked();
            assert_eq!(groups.len(), 2);
            assert_eq!(groups[0].active_count(), 2);
        });
    }

    #[test]
    fn cancelled_drop_dispatches_nothing() {
        with_runtime(|| {
            provide_auth(Some(student_user()));
            let vm = use_student_courses_view_model();
            vm.request_drop(enrollment(1, 5));
            assert!(vm.pending_drop.get_untracked().is_some());
            vm.cancel_drop();
            vm.confirm_drop();
            assert!(vm.pending_drop.get_untracked().is_none());
            assert_eq!(vm.drop_action.version().get_untracked(), 0);
        });
    }
}
