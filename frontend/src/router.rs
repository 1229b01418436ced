use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    api::ApiClient,
    components::guard::{RequireAdmin, RequireAuth},
    pages::{
        admin_bulk::AdminBulkPage, admin_courses::AdminCoursesPage,
        admin_enrollment_requests::AdminEnrollmentRequestsPage,
        admin_enrollments::AdminEnrollmentsPage, admin_fees::AdminFeesPage,
        admin_program_courses::AdminProgramCoursesPage, admin_programs::AdminProgramsPage,
        admin_students::AdminStudentsPage, admin_trimesters::AdminTrimestersPage,
        dashboard::DashboardPage, login::LoginPage, profile::ProfilePage,
        student_catalog::StudentCatalogPage, student_courses::StudentCoursesPage,
        student_fees::StudentFeesPage, student_records::StudentRecordsPage,
    },
    state::{auth::AuthProvider, toast::provide_toasts},
    utils::navigation::DEFAULT_LANDING,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Access {
    Public,
    Authenticated,
    Admin,
}

pub const ROUTES: &[(&str, Access)] = &[
    ("/login", Access::Public),
    ("/dashboard", Access::Authenticated),
    ("/profile", Access::Authenticated),
    ("/student/catalog", Access::Authenticated),
    ("/student/courses", Access::Authenticated),
    ("/student/fees", Access::Authenticated),
    ("/student/records", Access::Authenticated),
    ("/admin/students", Access::Admin),
    ("/admin/programs", Access::Admin),
    ("/admin/courses", Access::Admin),
    ("/admin/trimesters", Access::Admin),
    ("/admin/program-courses", Access::Admin),
    ("/admin/enrollments", Access::Admin),
    ("/admin/enrollment-requests", Access::Admin),
    ("/admin/fees", Access::Admin),
    ("/admin/bulk", Access::Admin),
];

pub fn access_for(path: &str) -> Option<Access> {
    ROUTES
        .iter()
        .find(|(route, _)| *route == path)
        .map(|(_, access)| *access)
}

#[cfg(target_arch = "wasm32")]
pub fn mount_app() {
    mount_to_body(app_root);
}

pub fn app_root() -> impl IntoView {
    provide_context(ApiClient::new());
    provide_meta_context();
    provide_toasts();
    view! {
        <Title text="Academic Portal"/>
        <AuthProvider>
            <Router>
                <Routes>
                    <Route path="/" view=|| view! { <Redirect path=DEFAULT_LANDING/> }/>
                    <Route path="/login" view=LoginPage/>
                    <Route path="/dashboard" view=ProtectedDashboard/>
                    <Route path="/profile" view=ProtectedProfile/>
                    <Route path="/student/catalog" view=ProtectedCatalog/>
                    <Route path="/student/courses" view=ProtectedCourses/>
                    <Route path="/student/fees" view=ProtectedFees/>
                    <Route path="/student/records" view=ProtectedRecords/>
                    <Route path="/admin/students" view=AdminStudents/>
                    <Route path="/admin/programs" view=AdminPrograms/>
                    <Route path="/admin/courses" view=AdminCourses/>
                    <Route path="/admin/trimesters" view=AdminTrimesters/>
                    <Route path="/admin/program-courses" view=AdminProgramCourses/>
                    <Route path="/admin/enrollments" view=AdminEnrollments/>
                    <Route path="/admin/enrollment-requests" view=AdminEnrollmentRequests/>
                    <Route path="/admin/fees" view=AdminFees/>
                    <Route path="/admin/bulk" view=AdminBulk/>
                    <Route path="/*any" view=|| view! { <Redirect path=DEFAULT_LANDING/> }/>
                </Routes>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn ProtectedDashboard() -> impl IntoView {
    view! { <RequireAuth><DashboardPage/></RequireAuth> }
}

#[component]
fn ProtectedProfile() -> impl IntoView {
    view! { <RequireAuth><ProfilePage/></RequireAuth> }
}

#[component]
fn ProtectedCatalog() -> impl IntoView {
    view! { <RequireAuth><StudentCatalogPage/></RequireAuth> }
}

#[component]
fn ProtectedCourses() -> impl IntoView {
    view! { <RequireAuth><StudentCoursesPage/></RequireAuth> }
}

#[component]
fn ProtectedFees() -> impl IntoView {
    view! { <RequireAuth><StudentFeesPage/></RequireAuth> }
}

#[component]
fn ProtectedRecords() -> impl IntoView {
    view! { <RequireAuth><StudentRecordsPage/></RequireAuth> }
}

#[component]
fn AdminStudents() -> impl IntoView {
    view! { <RequireAdmin><AdminStudentsPage/></RequireAdmin> }
}

#[component]
fn AdminPrograms() -> impl IntoView {
    view! { <RequireAdmin><AdminProgramsPage/></RequireAdmin> }
}

#[component]
fn AdminCourses() -> impl IntoView {
    view! { <RequireAdmin><AdminCoursesPage/></RequireAdmin> }
}

#[component]
fn AdminTrimesters() -> impl IntoView {
    view! { <RequireAdmin><AdminTrimestersPage/></RequireAdmin> }
}

#[component]
fn AdminProgramCourses() -> impl IntoView {
    view! { <RequireAdmin><AdminProgramCoursesPage/></RequireAdmin> }
}

#[component]
fn AdminEnrollments() -> impl IntoView {
    view! { <RequireAdmin><AdminEnrollmentsPage/></RequireAdmin> }
}

#[component]
fn AdminEnrollmentRequests() -> impl IntoView {
    view! { <RequireAdmin><AdminEnrollmentRequestsPage/></RequireAdmin> }
}

#[component]
fn AdminFees() -> impl IntoView {
    view! { <RequireAdmin><AdminFeesPage/></RequireAdmin> }
}

#[component]
fn AdminBulk() -> impl IntoView {
    view! { <RequireAdmin><AdminBulkPage/></RequireAdmin> }
}
