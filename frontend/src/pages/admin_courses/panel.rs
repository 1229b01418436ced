use super::view_model::{use_admin_courses_view_model, AdminCoursesViewModel};
use crate::components::{
    common::{Button, ButtonVariant, Card},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::FeedbackMessages,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn CourseForm(vm: AdminCoursesViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    view! {
        <Card title="Course details">
            <form class="grid gap-4 md:grid-cols-4 items-end" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Course code"</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.form.get().course_code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.course_code = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Course title"</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        prop:value=move || vm.form.get().course_title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.course_title = value);
                        }
                    />
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
                            view! {
                                <option value=program.id.to_string()>
                                    {format!("{} - {}", program.program_code, program.program_title)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div class="flex gap-2">
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || pending.get()
                    >
                        {move || if vm.form.get().is_editing() { "Update course" } else { "Create course" }}
                    </button>
                    <Show when=move || vm.form.get().is_editing()>
                        <Button variant=ButtonVariant::Secondary on:click=move |_| vm.cancel_edit()>
                            "Cancel"
                        </Button>
                    </Show>
                </div>
            </form>
        </Card>
    }
}

#[component]
fn UnitsPanel(vm: AdminCoursesViewModel) -> impl IntoView {
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit_unit();
    };
    let course_label = move || {
        vm.selected_course
            .get()
            .and_then(|id| vm.courses.with(|list| list.find(id).cloned()))
            .map(|course| format!("Units of {}", course.course_code))
            .unwrap_or_else(|| "Units".to_string())
    };
    view! {
        <Card>
            <h3 class="text-lg font-semibold text-fg mb-3">{course_label}</h3>
            <Show
                when=move || vm.selected_course.get().is_some()
                fallback=|| view! { <p class="text-sm text-fg-muted">"Select a course to manage its units."</p> }
            >
                <FeedbackMessages state=vm.unit_messages.into() />
                <form class="flex flex-wrap gap-2 mb-4" on:submit=on_submit>
                    <input
                        class="border border-border rounded px-3 py-2"
                        placeholder="Unit code"
                        prop:value=move || vm.unit_form.get().code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.unit_form.update(|form| form.code = value);
                        }
                    />
                    <input
                        class="flex-1 border border-border rounded px-3 py-2"
                        placeholder="Unit title"
                        prop:value=move || vm.unit_form.get().title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.unit_form.update(|form| form.title = value);
                        }
                    />
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center rounded-md px-4 py-2 text-sm font-semibold {}",
                            ButtonVariant::Primary.classes()
                        )
                    >
                        "Add unit"
                    </button>
                </form>
                <ul class="divide-y divide-border text-sm">
                    {move || vm.selected_units.get().into_iter().map(|unit| {
                        let id = unit.id;
                        view! {
                            <li class="flex items-center justify-between py-2">
                                <span><span class="font-mono mr-2">{unit.code}</span>{unit.title}</span>
                                <Button
                                    variant=ButtonVariant::Ghost
                                    on:click=move |_| vm.delete_unit_action.dispatch(id)
                                >
                                    "Remove"
                                </Button>
                            </li>
                        }
                    }).collect_view()}
                </ul>
            </Show>
        </Card>
    }
}

#[component]
fn CourseTable(vm: AdminCoursesViewModel) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center justify-between gap-3 mb-4">
                <input
                    class="w-full md:w-80 border border-border rounded px-3 py-2"
                    placeholder="Search by code or title"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
            </div>
            {move || {
                let list = vm.courses.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                let rows = vm.visible.get();
                if rows.is_empty() {
                    return view! { <EmptyState title="No courses found" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Code"</th>
                                <th class="py-2">"Title"</th>
                                <th class="py-2">"Program"</th>
                                <th class="py-2 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rows.into_iter().map(|course| {
                                let id = course.id;
                                let for_edit = course.clone();
                                let for_delete = course.clone();
                                let program = course
                                    .program
                                    .as_ref()
                                    .map(|p| p.program_code.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr class=move || if vm.selected_course.get() == Some(id) { "bg-surface-muted" } else { "" }>
                                        <td class="py-2 font-mono">{course.course_code}</td>
                                        <td class="py-2">{course.course_title}</td>
                                        <td class="py-2">{program}</td>
                                        <td class="py-2 text-right space-x-2">
                                            <Button variant=ButtonVariant::Ghost on:click=move |_| vm.select_course(id)>
                                                "Units"
                                            </Button>
                                            <Button variant=ButtonVariant::Secondary on:click=move |_| vm.edit(&for_edit)>
                                                "Edit"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| vm.pending_delete.set(Some(for_delete.clone()))
                                            >
                                                "Delete"
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
pub fn AdminCoursesPage() -> impl IntoView {
    let vm = use_admin_courses_view_model();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|course| format!("Delete {}? Its units are removed too.", course.course_code))
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Courses"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <CourseForm vm=vm />
                <div class="grid gap-6 lg:grid-cols-3">
                    <div class="lg:col-span-2">
                        <CourseTable vm=vm />
                    </div>
                    <UnitsPanel vm=vm />
                </div>
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete course"
                message=delete_message
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </Layout>
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::{
        helpers::{admin_user, provide_auth},
        ssr::render_to_string,
    };

    #[test]
    fn courses_page_renders_form_and_units_hint() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminCoursesPage /> }
        });
        assert!(html.contains("Create course"));
        assert!(html.contains("Select a program"));
        assert!(html.contains("Select a course to manage its units."));
        assert!(html.contains("No courses found"));
    }
}
