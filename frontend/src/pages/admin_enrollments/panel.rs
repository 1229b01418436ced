use super::{
    utils::{report_students, total_enrolled},
    view_model::{use_admin_enrollments_view_model, AdminEnrollmentsViewModel},
};
use crate::{
    components::{
        common::{Button, ButtonVariant, Card},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::FeedbackMessages,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::format_datetime,
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn EnrollForm(vm: AdminEnrollmentsViewModel) -> impl IntoView {
    let pending = vm.enroll_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    view! {
        <Card title="Enroll a student">
            <form class="grid gap-4 md:grid-cols-3 items-end" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Student"</label>
                    <select
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.form.get().student_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.student_id = value);
                        }
                    >
                        <option value="">"Select a student"</option>
                        {move || vm.students.get().items().iter().map(|student| {
                            view! {
                                <option value=student.id.to_string()>
                                    {format!(
                                        "{} - {}",
                                        student.registration_number.clone().unwrap_or_default(),
                                        student.display_name()
                                    )}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Program"</label>
                    <select
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.form.get().program_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.program_id = value);
                        }
                    >
                        <option value="">"Select a program"</option>
                        {move || vm.programs.get().items().iter().map(|program| {
                            view! { <option value=program.id.to_string()>{program.program_code.clone()}</option> }
                        }).collect_view()}
                    </select>
                </div>
                <button
                    type="submit"
                    class=format!(
                        "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                        ButtonVariant::Primary.classes()
                    )
                    disabled=move || pending.get()
                >
                    "Enroll"
                </button>
            </form>
        </Card>
    }
}

#[component]
fn ProgramReport(vm: AdminEnrollmentsViewModel) -> impl IntoView {
    view! {
        <Card title="Enrollments by program">
            {move || match vm.report.get() {
                None => view! { <LoadingSpinner /> }.into_view(),
                Some(Err(err)) => view! { <ErrorMessage message=err.error /> }.into_view(),
                Some(Ok(rows)) if rows.is_empty() => {
                    view! { <EmptyState title="No enrollments to report" /> }.into_view()
                }
                Some(Ok(rows)) => {
                    let total = total_enrolled(&rows);
                    view! {
                        <p class="text-sm text-fg-muted mb-3">{format!("Total enrolled: {}", total)}</p>
                        <div class="space-y-4">
                            {rows.into_iter().map(|row| {
                                let students = report_students(&row);
                                view! {
                                    <details class="border border-border rounded p-3">
                                        <summary class="cursor-pointer font-medium text-fg">
                                            {format!("{} - {} ({})", row.program_code, row.program_title, students.len())}
                                        </summary>
                                        <ul class="mt-2 text-sm text-fg-muted">
                                            {students.into_iter().map(|(number, name)| {
                                                view! { <li><span class="font-mono mr-2">{number}</span>{name}</li> }
                                            }).collect_view()}
                                        </ul>
                                    </details>
                                }
                            }).collect_view()}
                        </div>
                    }.into_view()
                }
            }}
        </Card>
    }
}

#[component]
fn EnrollmentTable(vm: AdminEnrollmentsViewModel) -> impl IntoView {
    view! {
        <Card title="All enrollments">
            {move || {
                let list = vm.enrollments.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                if list.is_empty() {
                    return view! { <EmptyState title="No enrollments yet" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Student"</th>
                                <th class="py-2">"Program"</th>
                                <th class="py-2">"Enrolled"</th>
                                <th class="py-2 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {list.items().iter().cloned().map(|enrollment| {
                                let for_delete = enrollment.clone();
                                view! {
                                    <tr>
                                        <td class="py-2">
                                            {format!(
                                                "{} ({})",
                                                enrollment.student.full_name,
                                                enrollment.student.registration_number
                                            )}
                                        </td>
                                        <td class="py-2">{enrollment.program.program_code.clone()}</td>
                                        <td class="py-2">{format_datetime(enrollment.enrolled_at)}</td>
                                        <td class="py-2 text-right">
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| vm.pending_delete.set(Some(for_delete.clone()))
                                            >
                                                "Remove"
                                            </Button>
                                        </td>
                                    </tr>
                                }
                            }).collect_view()}
                        </tbody>
                    </table>
                }.into_view()
            }}
        </Card>
    }
}

#[component]
pub fn AdminEnrollmentsPage() -> impl IntoView {
    let vm = use_admin_enrollments_view_model();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|e| {
                format!(
                    "Remove {} from {}?",
                    e.student.full_name, e.program.program_code
                )
            })
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Enrollments"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <EnrollForm vm=vm />
                <div class="grid gap-6 lg:grid-cols-2">
                    <ProgramReport vm=vm />
                    <EnrollmentTable vm=vm />
                </div>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Remove enrollment"
                message=delete_message
                confirm_label="Remove"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::api::EnrollmentsByProgram;
    use crate::test_support::{
        helpers::{admin_user, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn report_lists_students_per_program() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            let vm = use_admin_enrollments_view_model();
            vm.report.set(Some(Ok(vec![EnrollmentsByProgram {
                program_code: "BSC-CS".into(),
                program_title: "BSc Computer Science".into(),
                student_names: vec!["Jane Wanjiru".into()],
                student_registration_numbers: vec!["STU001".into()],
            }])));
            view! { <ProgramReport vm=vm /> }
        });
        assert!(html.contains("Total enrolled: 1"));
        assert!(html.contains("BSC-CS - BSc Computer Science (1)"));
        assert!(html.contains("STU001"));
    }

    #[test]
    fn enrollments_page_renders_sections() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminEnrollmentsPage /> }
        });
        assert!(html.contains("Enroll a student"));
        assert!(html.contains("Enrollments by program"));
        assert!(html.contains("No enrollments yet"));
    }
}
