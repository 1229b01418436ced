use super::{repository::CatalogRepository, wizard::CourseSelection};
use crate::{
    api::{
        ApiClient, ApiError, CanRequestResponse, EnrollmentRequest, EnrollmentRequestWithCourses,
        Id, Program, ProgramCourse, Trimester,
    },
    pages::admin_programs::utils::filter_programs,
    state::{
        auth::use_auth,
        collection::{spawn_fetch, spawn_load, ListState},
        toast::{use_toasts, ToastState},
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct StudentCatalogViewModel {
    pub programs: RwSignal<ListState<Program>>,
    pub requests: RwSignal<ListState<EnrollmentRequest>>,
    pub search: RwSignal<String>,
    pub visible: Memo<Vec<Program>>,
    pub student_id: Memo<Option<Id>>,
    pub wizard_program: RwSignal<Option<Program>>,
    pub eligibility: RwSignal<Option<Result<CanRequestResponse, ApiError>>>,
    pub trimesters: RwSignal<ListState<Trimester>>,
    pub selection: RwSignal<CourseSelection>,
    pub offerings_loading: RwSignal<bool>,
    pub reload: RwSignal<u32>,
    pub submit_action: Action<EnrollmentRequestWithCourses, Result<EnrollmentRequest, ApiError>>,
    toasts: ToastState,
}

impl StudentCatalogViewModel {
    pub fn open_wizard(&self, program: Program) {
        self.selection.set(CourseSelection::default());
        self.wizard_program.set(Some(program));
    }

    pub fn close_wizard(&self) {
        self.wizard_program.set(None);
        self.selection.set(CourseSelection::default());
    }

    pub fn choose_trimester(&self, trimester_id: Id) {
        let trimester = self
            .trimesters
            .with_untracked(|list| list.find(trimester_id).cloned());
        if let Some(trimester) = trimester {
            self.selection.update(|selection| selection.select_trimester(trimester));
        }
    }

    /// Adds or removes an offering; a rejected add shows a warning and
    /// leaves the selection as it was.
    pub fn toggle_course(&self, course_id: Id) {
        let outcome = self.selection.try_update(|selection| selection.toggle(course_id));
        if let Some(Err(err)) = outcome {
            self.toasts.warning(err.to_string());
        }
    }

    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        let (Some(student_id), Some(program)) = (
            self.student_id.get_untracked(),
            self.wizard_program.get_untracked(),
        ) else {
            return;
        };
        let request = self
            .selection
            .with_untracked(|selection| selection.to_request(student_id, program.id));
        match request {
            Some(request) => self.submit_action.dispatch(request),
            None => {
                let bounds = self.selection.with_untracked(|selection| {
                    selection
                        .trimester()
                        .map(|t| (t.minimum_courses, t.maximum_courses))
                });
                let message = match bounds {
                    Some((min, max)) => format!("Select between {} and {} courses", min, max),
                    None => "Select a trimester first".to_string(),
                };
                self.toasts.warning(message);
            }
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

/// Installs an offerings response for the trimester that is still selected.
/// A response for an earlier choice leaves the spinner and the list alone.
fn apply_offerings(
    selection: RwSignal<CourseSelection>,
    loading: RwSignal<bool>,
    trimester_id: Id,
    result: Result<Vec<ProgramCourse>, ApiError>,
) -> Result<(), ApiError> {
    let current = selection
        .try_with_untracked(|selection| selection.trimester_id() == Some(trimester_id))
        .unwrap_or(false);
    if !current {
        log::debug!("Discarding offerings for trimester {}", trimester_id);
        return Ok(());
    }
    let _ = loading.try_set(false);
    let courses = result?;
    let _ = selection.try_update(|selection| selection.apply_available(trimester_id, courses));
    Ok(())
}

pub fn use_student_catalog_view_model() -> StudentCatalogViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = CatalogRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();
    let (auth, _) = use_auth();

    let programs = create_rw_signal(ListState::<Program>::default());
    let requests = create_rw_signal(ListState::<EnrollmentRequest>::default());
    let search = create_rw_signal(String::new());
    let wizard_program = create_rw_signal(None::<Program>);
    let eligibility = create_rw_signal(None::<Result<CanRequestResponse, ApiError>>);
    let trimesters = create_rw_signal(ListState::<Trimester>::default());
    let selection = create_rw_signal(CourseSelection::default());
    let offerings_loading = create_rw_signal(false);
    let reload = create_rw_signal(0u32);

    let student_id = create_memo(move |_| auth.with(|state| state.user.as_ref().map(|u| u.id)));
    let visible = create_memo(move |_| {
        let query = search.get();
        programs.with(|list| filter_programs(list.items(), &query))
    });
    let wizard_program_id = create_memo(move |_| wizard_program.with(|p| p.as_ref().map(|p| p.id)));
    let selected_trimester = create_memo(move |_| selection.with(|s| s.trimester_id()));

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let repo = repo_for_load.clone();
        spawn_load(programs, "programs", async move { repo.fetch_programs().await });
        if let Some(student_id) = student_id.get() {
            let repo = repo_for_load.clone();
            spawn_load(requests, "enrollment requests", async move {
                repo.fetch_my_requests(student_id).await
            });
        }
    });

    let repo_for_wizard = repository.clone();
    create_effect(move |_| {
        let Some(program_id) = wizard_program_id.get() else {
            return;
        };
        let repo = repo_for_wizard.clone();
        spawn_load(trimesters, "active trimesters", async move {
            repo.fetch_active_trimesters().await
        });
        if let Some(student_id) = student_id.get_untracked() {
            let repo = repo_for_wizard.clone();
            spawn_fetch(eligibility, "enrollment eligibility", async move {
                repo.can_request(student_id, program_id).await
            });
        }
    });

    let repo_for_offerings = repository.clone();
    create_effect(move |_| {
        let (Some(program_id), Some(trimester_id)) =
            (wizard_program_id.get(), selected_trimester.get())
        else {
            return;
        };
        let repo = repo_for_offerings.clone();
        offerings_loading.set(true);
        spawn_local(async move {
            let result = repo.fetch_offerings(program_id, trimester_id).await;
            if let Err(err) = apply_offerings(selection, offerings_loading, trimester_id, result) {
                log::error!("Failed to load offerings for {}: {}", trimester_id, err);
                toasts.error("Failed to load available courses");
            }
        });
    });

    let submit_action = create_action(move |request: &EnrollmentRequestWithCourses| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.submit_request(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(request) => {
                    requests.update(|list| list.upsert(request));
                    wizard_program.set(None);
                    selection.set(CourseSelection::default());
                    toasts.success("Enrollment request submitted successfully!");
                    reload.update(|value| *value = value.wrapping_add(1));
                }
                Err(err) => {
                    toasts.error(err.error);
                }
            }
        }
    });

    StudentCatalogViewModel {
        programs,
        requests,
        search,
        visible,
        student_id,
        wizard_program,
        eligibility,
        trimesters,
        selection,
        offerings_loading,
        reload,
        submit_action,
        toasts,
    }
}
