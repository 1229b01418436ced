use super::{
    utils::TrimesterGroup,
    view_model::{use_student_courses_view_model, StudentCoursesViewModel},
};
use crate::{
    api::CourseEnrollmentStatus,
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::{format_datetime, or_dash},
};
use leptos::*;

#[component]
fn TrimesterCard(vm: StudentCoursesViewModel, group: TrimesterGroup) -> impl IntoView {
    let title = group.title();
    let load = group.load();
    let can_drop = group.can_drop();
    let bounds = group
        .trimester
        .as_ref()
        .map(|t| format!("{} of {} courses", group.active_count(), t.maximum_courses))
        .unwrap_or_else(|| format!("{} courses", group.active_count()));
    let credit_hours = group.credit_hours();
    view! {
        <Card>
            <div class="flex items-center justify-between gap-3">
                <h3 class="text-lg font-semibold text-fg">{title}</h3>
                {load.map(|load| view! { <Badge tone=load.tone() label=load.label().to_string() /> })}
            </div>
            <p class="text-sm text-fg-muted">
                {format!("{} · {} credit hours", bounds, credit_hours)}
            </p>
            <table class="min-w-full divide-y divide-border text-sm">
                <thead>
                    <tr class="text-left text-fg-muted">
                        <th class="py-2">"Code"</th>
                        <th class="py-2">"Course"</th>
                        <th class="py-2">"Credits"</th>
                        <th class="py-2">"Status"</th>
                        <th class="py-2">"Grade"</th>
                        <th class="py-2">"Enrolled"</th>
                        <th class="py-2 text-right"></th>
                    </tr>
                </thead>
                <tbody class="divide-y divide-border">
                    {group.enrollments.into_iter().map(|enrollment| {
                        let status = enrollment.status.as_str();
                        let droppable =
                            can_drop && enrollment.status == CourseEnrollmentStatus::Enrolled;
                        let for_drop = enrollment.clone();
                        view! {
                            <tr>
                                <td class="py-2 font-mono">{enrollment.program_course.course.course_code}</td>
                                <td class="py-2">{enrollment.program_course.course.course_title}</td>
                                <td class="py-2">{enrollment.program_course.credit_hours}</td>
                                <td class="py-2">
                                    <Badge tone=BadgeTone::for_status(status) label=status.to_string() />
                                </td>
                                <td class="py-2">{or_dash(enrollment.grade.as_deref())}</td>
                                <td class="py-2">{format_datetime(enrollment.enrolled_at)}</td>
                                <td class="py-2 text-right">
                                    {droppable.then(|| view! {
                                        <Button
                                            variant=ButtonVariant::Danger
                                            on:click=move |_| vm.request_drop(for_drop.clone())
                                        >
                                            "Drop"
                                        </Button>
                                    })}
                                </td>
                            </tr>
                        }
                    }).collect_view()}
                </tbody>
            </table>
        </Card>
    }
}

#[component]
fn CourseGroups(vm: StudentCoursesViewModel) -> impl IntoView {
    view! {
        {move || {
            let list = vm.enrollments.get();
            if list.is_loading() {
                return view! { <LoadingSpinner /> }.into_view();
            }
            if let Some(error) = list.error() {
                return view! { <ErrorMessage message=error.to_string() /> }.into_view();
            }
            let groups = vm.groups.get();
            if groups.is_empty() {
                return view! {
                    <EmptyState
                        title="No course enrollments yet"
                        description="Courses appear here once an enrollment request is approved."
                    />
                }
                .into_view();
            }
            groups
                .into_iter()
                .map(|group| view! { <TrimesterCard vm=vm group=group /> })
                .collect_view()
        }}
    }
}

#[component]
pub fn StudentCoursesPage() -> impl IntoView {
    let vm = use_student_courses_view_model();
    let drop_message = Signal::derive(move || {
        vm.pending_drop
            .get()
            .map(|enrollment| {
                format!(
                    "Drop \"{}\"? This action cannot be undone.",
                    enrollment.program_course.course.course_title
                )
            })
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <div class="flex items-center justify-between">
                    <h2 class="text-2xl font-bold text-fg">"My courses"</h2>
                    <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
                </div>
                <CourseGroups vm=vm />
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_drop.get().is_some())
                title="Drop course"
                message=drop_message
                confirm_label="Drop"
                on_confirm=Callback::new(move |_| vm.confirm_drop())
                on_cancel=Callback::new(move |_| vm.cancel_drop())
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::{CourseEnrollment, CourseRef, Id, ProgramCourse, TrimesterRef};
    use crate::test_support::helpers::{provide_auth, student_user};
    use crate::test_support::ssr::render_to_string;

    fn enrollment(id: Id, status: CourseEnrollmentStatus) -> CourseEnrollment {
        CourseEnrollment {
            id,
            status,
            grade: (status == CourseEnrollmentStatus::Completed).then(|| "A".to_string()),
            program_course: ProgramCourse {
                id: id + 100,
                course: CourseRef {
                    id,
                    course_code: format!("CS10{}", id),
                    course_title: format!("Course {}", id),
                },
                trimester: Some(TrimesterRef {
                    id: 5,
                    name: "Trimester 1".into(),
                    academic_year: "2024/2025".into(),
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
    fn renders_trimester_groups_with_drop_controls() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            let vm = use_student_courses_view_model();
            vm.enrollments.update(|list| {
                list.upsert(enrollment(1, CourseEnrollmentStatus::Enrolled));
                list.upsert(enrollment(2, CourseEnrollmentStatus::Enrolled));
                list.upsert(enrollment(3, CourseEnrollmentStatus::Dropped));
            });
            view! { <CourseGroups vm=vm /> }
        });
        assert!(html.contains("Trimester 1 · 2024&#x2F;2025"));
        assert!(html.contains("2 of 3 courses · 6 credit hours"));
        assert!(html.contains("Optimal load"));
        assert!(html.contains("DROPPED"));
        assert!(html.contains("Drop"));
    }

    #[test]
    fn load_at_minimum_hides_drop() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            let vm = use_student_courses_view_model();
            vm.enrollments
                .update(|list| list.upsert(enrollment(1, CourseEnrollmentStatus::Enrolled)));
            view! { <CourseGroups vm=vm /> }
        });
        assert!(html.contains("Minimum load"));
        assert!(!html.contains("Drop"));
    }

    #[test]
    fn empty_enrollments_show_placeholder() {
        let html = render_to_string(move || {
            provide_auth(Some(student_user()));
            let vm = use_student_courses_view_model();
            view! { <CourseGroups vm=vm /> }
        });
        assert!(html.contains("No course enrollments yet"));
    }
}
