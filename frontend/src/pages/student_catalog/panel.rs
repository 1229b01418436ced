use super::{
    utils::{can_open_wizard, latest_request_for},
    view_model::{use_student_catalog_view_model, StudentCatalogViewModel},
};
use crate::{
    api::Program,
    components::{
        common::{Badge, BadgeTone, Button, ButtonVariant, Card, Modal},
        empty_state::EmptyState,
        layout::{ErrorMessage, Layout, LoadingSpinner},
    },
};
use leptos::*;

#[component]
fn ProgramCard(vm: StudentCatalogViewModel, program: Program) -> impl IntoView {
    let program_id = program.id;
    let latest = move || {
        vm.requests
            .with(|list| latest_request_for(list.items(), program_id).map(|r| r.status))
    };
    let for_wizard = program.clone();
    view! {
        <div class="rounded-lg border border-border bg-surface-elevated p-4 space-y-3">
            <div class="flex items-start justify-between gap-2">
                <div>
                    <p class="font-mono text-xs text-fg-muted">{program.program_code}</p>
                    <h3 class="font-semibold text-fg">{program.program_title}</h3>
                </div>
                {move || latest().map(|status| {
                    view! {
                        <Badge tone=BadgeTone::for_status(status.as_str()) label=status.label().to_string() />
                    }
                })}
            </div>
            {move || {
                let open = vm.requests.with(|list| {
                    can_open_wizard(latest_request_for(list.items(), program_id))
                });
                if open {
                    let program = for_wizard.clone();
                    view! {
                        <Button on:click=move |_| vm.open_wizard(program.clone())>
                            "Request enrollment"
                        </Button>
                    }
                    .into_view()
                } else {
                    view! { <p class="text-sm text-fg-muted">"Request already submitted"</p> }
                        .into_view()
                }
            }}
        </div>
    }
}

#[component]
fn ProgramGrid(vm: StudentCatalogViewModel) -> impl IntoView {
    view! {
        <Card>
            <div class="flex items-center justify-between gap-3 mb-4">
                <input
                    class="w-full md:w-80 border border-border rounded px-3 py-2"
                    placeholder="Search programs"
                    prop:value=move || vm.search.get()
                    on:input=move |ev| vm.search.set(event_target_value(&ev))
                />
                <Button variant=ButtonVariant::Ghost on:click=move |_| vm.refresh()>"Refresh"</Button>
            </div>
            {move || {
                let list = vm.programs.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                let programs = vm.visible.get();
                if programs.is_empty() {
                    return view! { <EmptyState title="No programs available" /> }.into_view();
                }
                view! {
                    <div class="grid gap-4 md:grid-cols-2 lg:grid-cols-3">
                        {programs
                            .into_iter()
                            .map(|program| view! { <ProgramCard vm=vm program=program /> })
                            .collect_view()}
                    </div>
                }
                .into_view()
            }}
        </Card>
    }
}

#[component]
fn TrimesterPicker(vm: StudentCatalogViewModel) -> impl IntoView {
    view! {
        {move || {
            let list = vm.trimesters.get();
            if list.is_loading() {
                return view! { <LoadingSpinner /> }.into_view();
            }
            if let Some(error) = list.error() {
                return view! { <ErrorMessage message=error.to_string() /> }.into_view();
            }
            if list.is_empty() {
                return view! { <EmptyState title="No active trimesters" /> }.into_view();
            }
            let current = vm.selection.with(|s| s.trimester_id());
            view! {
                <div>
                    <label class="block text-sm font-medium text-fg">"Trimester"</label>
                    <select
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        on:change=move |ev| {
                            if let Ok(id) = event_target_value(&ev).parse() {
                                vm.choose_trimester(id);
                            }
                        }
                    >
                        <option value="" selected=current.is_none()>"Select a trimester"</option>
                        {list
                            .items()
                            .iter()
                            .map(|trimester| {
                                let label = format!(
                                    "{} {} ({})",
                                    trimester.name,
                                    trimester.academic_year,
                                    trimester.course_bounds_label()
                                );
                                view! {
                                    <option
                                        value=trimester.id.to_string()
                                        selected=current == Some(trimester.id)
                                    >
                                        {label}
                                    </option>
                                }
                            })
                            .collect_view()}
                    </select>
                </div>
            }
            .into_view()
        }}
    }
}

#[component]
fn OfferingList(vm: StudentCatalogViewModel) -> impl IntoView {
    view! {
        {move || {
            if vm.selection.with(|s| s.trimester().is_none()) {
                return ().into_view();
            }
            if vm.offerings_loading.get() {
                return view! { <LoadingSpinner /> }.into_view();
            }
            let courses = vm.selection.with(|s| s.available().to_vec());
            if courses.is_empty() {
                return view! { <EmptyState title="No courses offered in this trimester" /> }
                    .into_view();
            }
            view! {
                <ul class="divide-y divide-border border border-border rounded">
                    {courses
                        .into_iter()
                        .map(|offering| {
                            let id = offering.id;
                            let (tone, kind) = if offering.is_core {
                                (BadgeTone::Info, "Core")
                            } else {
                                (BadgeTone::Neutral, "Elective")
                            };
                            view! {
                                <li class="flex items-center gap-3 px-3 py-2">
                                    <input
                                        type="checkbox"
                                        prop:checked=move || vm.selection.with(|s| s.is_selected(id))
                                        on:change=move |_| vm.toggle_course(id)
                                    />
                                    <span class="font-mono text-sm">{offering.course.course_code}</span>
                                    <span class="flex-1 text-sm">{offering.course.course_title}</span>
                                    <Badge tone=tone label=kind.to_string() />
                                    <span class="text-xs text-fg-muted">
                                        {format!("{} credit hours", offering.credit_hours)}
                                    </span>
                                </li>
                            }
                        })
                        .collect_view()}
                </ul>
            }
            .into_view()
        }}
    }
}

#[component]
fn EnrollmentWizard(vm: StudentCatalogViewModel) -> impl IntoView {
    let pending = vm.submit_action.pending();
    let title = Signal::derive(move || {
        vm.wizard_program
            .get()
            .map(|program| format!("Request enrollment: {}", program.program_title))
            .unwrap_or_default()
    });
    let blocked_reason = move || match vm.eligibility.get() {
        Some(Ok(response)) if !response.can_request => Some(
            response
                .reason
                .unwrap_or_else(|| "You cannot request enrollment in this program".to_string()),
        ),
        Some(Err(err)) => Some(err.error),
        _ => None,
    };
    let summary = move || {
        vm.selection.with(|s| {
            let count = s.selected().len();
            match s.trimester() {
                Some(t) => format!(
                    "{} selected (choose {}-{}) · {} credit hours",
                    count,
                    t.minimum_courses,
                    t.maximum_courses,
                    s.total_credit_hours()
                ),
                None => String::new(),
            }
        })
    };
    let submit_disabled = move || {
        pending.get() || blocked_reason().is_some() || !vm.selection.with(|s| s.can_submit())
    };
    view! {
        <Modal
            is_open=Signal::derive(move || vm.wizard_program.get().is_some())
            title=title
            on_close=Callback::new(move |_| vm.close_wizard())
        >
            <div class="space-y-4">
                {move || blocked_reason().map(|reason| view! { <ErrorMessage message=reason /> })}
                <TrimesterPicker vm=vm />
                <OfferingList vm=vm />
                <p class="text-sm text-fg-muted">{summary}</p>
                <div class="flex justify-end gap-2">
                    <Button variant=ButtonVariant::Secondary on:click=move |_| vm.close_wizard()>
                        "Cancel"
                    </Button>
                    <button
                        type="button"
                        class=format!(
                            "inline-flex items-center justify-center rounded-md px-4 py-2 text-sm font-semibold disabled:opacity-50 {}",
                            ButtonVariant::Primary.classes()
                        )
                        disabled=submit_disabled
                        on:click=move |_| vm.submit()
                    >
                        {move || if pending.get() { "Submitting..." } else { "Submit request" }}
                    </button>
                </div>
            </div>
        </Modal>
    }
}

#[component]
pub fn StudentCatalogPage() -> impl IntoView {
    let vm = use_student_catalog_view_model();
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Program catalog"</h2>
                <ProgramGrid vm=vm />
            </div>
            <EnrollmentWizard vm=vm />
        </Layout>
    }
}
