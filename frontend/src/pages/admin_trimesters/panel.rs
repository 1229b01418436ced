use super::view_model::{use_admin_trimesters_view_model, AdminTrimestersViewModel};
use crate::{
    api::PeriodType,
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card},
        confirm_dialog::ConfirmDialog,
        empty_state::EmptyState,
        error::FeedbackMessages,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
    utils::format::format_date,
};
use leptos::{ev::SubmitEvent, *};

const INPUT_CLASS: &str = "mt-1 w-full border border-border rounded px-3 py-2";

#[component]
fn TrimesterForm(vm: AdminTrimestersViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    view! {
        <Card title="Academic period">
            <form class="grid gap-4 md:grid-cols-3" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Name"</label>
                    <input
                        class=INPUT_CLASS
                        placeholder="Trimester 1"
                        prop:value=move || vm.form.get().name
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.name = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Academic year"</label>
                    <input
                        class=INPUT_CLASS
                        placeholder="2025/2026"
                        prop:value=move || vm.form.get().academic_year
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.academic_year = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Period"</label>
                    <input
                        class=INPUT_CLASS
                        placeholder="1"
                        prop:value=move || vm.form.get().period
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.period = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Period type"</label>
                    <select
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().period_type.as_str().to_string()
                        on:change=move |ev| {
                            let value = PeriodType::parse(&event_target_value(&ev));
                            vm.form.update(|form| form.set_period_type(value));
                        }
                    >
                        <option value="TRIMESTER">"Trimester"</option>
                        <option value="SEMESTER">"Semester"</option>
                    </select>
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Minimum courses"</label>
                    <input
                        type="number"
                        min="1"
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().minimum_courses
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.minimum_courses = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Maximum courses"</label>
                    <input
                        type="number"
                        min="1"
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().maximum_courses
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.maximum_courses = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Start date"</label>
                    <input
                        type="date"
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().start_date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.start_date = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"End date"</label>
                    <input
                        type="date"
                        class=INPUT_CLASS
                        prop:value=move || vm.form.get().end_date
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.end_date = value);
                        }
                    />
                </div>
                <label class="flex items-center gap-2 text-sm text-fg mt-6">
                    <input
                        type="checkbox"
                        prop:checked=move || vm.form.get().is_active
                        on:change=move |ev| {
                            let checked = event_target_checked(&ev);
                            vm.form.update(|form| form.is_active = checked);
                        }
                    />
                    "Active"
                </label>
                <div class="md:col-span-3 flex gap-2">
                    <button
                        type="submit"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=move || pending.get()
                    >
                        {move || if vm.form.get().is_editing() { "Update period" } else { "Create period" }}
                    </button>
                    <Show when=move || vm.form.get().is_editing()>
                        <Button
                            variant=ButtonVariant::Secondary
                            on:click=move |_| vm.form.update(|form| form.reset())
                        >
                            "Cancel"
                        </Button>
                    </Show>
                </div>
            </form>
        </Card>
    }
}

#[component]
pub fn AdminTrimestersPage() -> impl IntoView {
    let vm = use_admin_trimesters_view_model();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|t| format!("Delete {} ({})?", t.name, t.academic_year))
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Trimesters and semesters"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <TrimesterForm vm=vm />
                <Card>
                    {move || {
                        let list = vm.trimesters.get();
                        if list.is_loading() {
                            return view! { <LoadingSpinner /> }.into_view();
                        }
                        if let Some(error) = list.error() {
                            return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                        }
                        if list.is_empty() {
                            return view! { <EmptyState title="No academic periods yet" /> }.into_view();
                        }
                        view! {
                            <table class="min-w-full divide-y divide-border text-sm">
                                <thead>
                                    <tr class="text-left text-fg-muted">
                                        <th class="py-2">"Name"</th>
                                        <th class="py-2">"Year"</th>
                                        <th class="py-2">"Course load"</th>
                                        <th class="py-2">"Dates"</th>
                                        <th class="py-2">"Status"</th>
                                        <th class="py-2 text-right">"Actions"</th>
                                    </tr>
                                </thead>
                                <tbody class="divide-y divide-border">
                                    {list.items().iter().cloned().map(|trimester| {
                                        let for_edit = trimester.clone();
                                        let for_delete = trimester.clone();
                                        let (tone, label) = if trimester.is_active {
                                            (BadgeTone::Success, "Active")
                                        } else {
                                            (BadgeTone::Neutral, "Inactive")
                                        };
                                        view! {
                                            <tr>
                                                <td class="py-2">{trimester.name.clone()}</td>
                                                <td class="py-2">{trimester.academic_year.clone()}</td>
                                                <td class="py-2">{trimester.course_bounds_label()}</td>
                                                <td class="py-2">
                                                    {format!(
                                                        "{} - {}",
                                                        format_date(trimester.start_date),
                                                        format_date(trimester.end_date)
                                                    )}
                                                </td>
                                                <td class="py-2"><Badge tone=tone label=label.to_string() /></td>
                                                <td class="py-2 text-right space-x-2">
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
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete academic period"
                message=delete_message
                confirm_label="Delete"
                on_confirm=Callback::new(move |_| vm.confirm_delete())
                on_cancel=Callback::new(move |_| vm.pending_delete.set(None))
            />
        </Layout>
    }
}
