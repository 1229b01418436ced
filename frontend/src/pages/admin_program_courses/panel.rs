use super::view_model::{use_admin_program_courses_view_model, AdminProgramCoursesViewModel};
use crate::{
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::FeedbackMessages,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::{format::or_dash, input::parse_id},
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 w-full border border-border rounded px-3 py-2";

#[component]
fn TrimesterPicker(vm: AdminProgramCoursesViewModel) -> impl IntoView {
    view! {
        <div>
            <label class="block text-sm font-medium text-fg">"Trimester"</label>
            <select
                class=INPUT_CLASS
                prop:value=move || vm.selected_trimester.get().map(|id| id.to_string()).unwrap_or_default()
                on:change=move |ev| vm.selected_trimester.set(parse_id(&event_target_value(&ev)))
            >
                <option value="">"Select a trimester"</option>
                {move || vm.trimesters.get().items().iter().map(|t| {
                    view! {
                        <option value=t.id.to_string()>
                            {format!("{} ({})", t.name, t.academic_year)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[component]
fn OfferingForm(vm: AdminProgramCoursesViewModel) -> impl IntoView {
    let pending = vm.add_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    view! {
        <Card title="Add course to program">
            <form class="grid gap-4 md:grid-cols-3" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Program"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().program_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.program_id = value);
                        }
                    >
                        <option value="">"Select a program"</option>
                        {move || vm.programs.get().items().iter().map(|p| {
                            view! { <option value=p.id.to_string()>{p.program_code.clone()}</option> }
                        }).collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Course"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().course_id
                        on:change=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.course_id = value);
                        }
                    >
                        <option value="">"Select a course"</option>
                        {move || vm.courses.get().items().iter().map(|c| {
                            view! {
                                <option value=c.id.to_string()>
                                    {format!("{} - {}", c.course_code, c.course_title)}
                                </option>
                            }
                        }).collect_view()}
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Credit hours"</label>
                    <input
                        type="number"
                        min="1"
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().credit_hours
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.credit_hours = value);
                        }
                    />
                </div>
                <div class="md:col-span-2">
                    <label class="block text-sm font-medium text-fg">"Prerequisites"</label>
                    <input
                        class=INPUT_CLASS
                        placeholder="e.g. CS101"
                        prop:value=move || vm.form.get().prerequisites
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.prerequisites = value);
                        }
                    />
                </div>
                <label class="flex items-center gap-2 text-sm text-fg mt-6">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.get().is_core
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|form| form.is_core = checked);
                        }
                    />
                    "Core course"
                </label>
                <div class="md:col-span-3">
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || pending.get() || vm.selected_trimester.get().is_none()
                    >
                        "Add offering"
                    </button>
                </div>
            </form>
        </Card>
    }
}

#[component]
fn OfferingTable(vm: AdminProgramCoursesViewModel) -> impl IntoView {
    view! {
        <Card title="Offerings">
            {move || {
                if vm.selected_trimester.get().is_none() {
                    return view! {
                        <EmptyState
                            title="No trimester selected"
                            description="Pick a trimester to see its course offerings."
                        />
                    }.into_view();
                }
                let list = vm.offerings.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                if list.is_empty() {
                    return view! { <EmptyState title="No courses offered in this trimester" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Course"</th>
                                <th class="py-2">"Program"</th>
                                <th class="py-2">"Credits"</th>
                                <th class="py-2">"Type"</th>
                                <th class="py-2">"Prerequisites"</th>
                                <th class="py-2">"Status"</th>
                                <th class="py-2 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {list.items().iter().cloned().map(|offering| {
                                let id = offering.id;
                                let active = offering.is_active;
                                let for_delete = offering.clone();
                                let (status_tone, status_label) = if active {
                                    (BadgeTone::Success, "Active")
                                } else {
                                    (BadgeTone::Neutral, "Inactive")
                                };
                                let program = offering
                                    .program
                                    .as_ref()
                                    .map(|p| p.program_code.clone())
                                    .unwrap_or_else(|| "-".to_string());
                                view! {
                                    <tr>
                                        <td class="py-2">
                                            {format!("{} - {}", offering.course.course_code, offering.course.course_title)}
                                        </td>
                                        <td class="py-2">{program}</td>
                                        <td class="py-2">{offering.credit_hours}</td>
                                        <td class="py-2">{if offering.is_core { "Core" } else { "Elective" }}</td>
                                        <td class="py-2">{or_dash(offering.prerequisites.as_deref())}</td>
                                        <td class="py-2"><Badge tone=status_tone label=status_label.to_string() /></td>
                                        <td class="py-2 text-right space-x-2">
                                            <Show when=move || active>
                                                <Button
                                                    variant=ButtonVariant::Secondary
                                                    on:click=move |_| vm.deactivate_action.dispatch(id)
                                                >
                                                    "Deactivate"
                                                </Button>
                                            </Show>
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
pub fn AdminProgramCoursesPage() -> impl IntoView {
    let vm = use_admin_program_courses_view_model();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|o| format!("Remove {} from this trimester?", o.course.course_code))
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Program course offerings"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <Card>
                    <TrimesterPicker vm=vm />
                </Card>
                <OfferingForm vm=vm />
                <OfferingTable vm=vm />
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete offering"
                message=delete_message
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </Layout>
    }
}
