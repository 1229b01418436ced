use super::repository::{AdminCounts, DashboardRepository, StudentOverview};
use crate::{
    api::{ApiClient, ApiError, Role},
    state::{auth::use_auth, collection::spawn_fetch},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub admin_counts: RwSignal<Option<Result<AdminCounts, ApiError>>>,
    pub student_overview: RwSignal<Option<Result<StudentOverview, ApiError>>>,
    pub reload: RwSignal<u32>,
}

impl DashboardViewModel {
    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = DashboardRepository::new_with_client(Rc::new(api));
    let (auth, _) = use_auth();

    let admin_counts = create_rw_signal(None::<Result<AdminCounts, ApiError>>);
    let student_overview = create_rw_signal(None::<Result<StudentOverview, ApiError>>);
    let reload = create_rw_signal(0u32);
    let viewer = create_memo(move |_| auth.with(|state| state.user.as_ref().map(|u| (u.id, u.role))));

    create_effect(move |_| {
        let _ = reload.get();
        let repo = repository.clone();
        match viewer.get() {
            Some((_, Role::Admin)) => {
                spawn_fetch(admin_counts, "dashboard counts", async move {
                    repo.fetch_admin_counts().await
                });
            }
            Some((student_id, Role::Student)) => {
                spawn_fetch(student_overview, "student overview", async move {
                    repo.fetch_student_overview(student_id).await
                });
            }
            None => {}
        }
    });

    DashboardViewModel {
        admin_counts,
        student_overview,
        reload,
    }
}
