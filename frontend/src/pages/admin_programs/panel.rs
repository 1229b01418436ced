use super::view_model::{use_admin_programs_view_model, AdminProgramsViewModel};
use crate::components::{
    common::{Button, ButtonVariant, Card},
    confirm_dialog::ConfirmDialog,
    empty_state::EmptyState,
    error::FeedbackMessages,
    layout::{ErrorMessage, Layout, LoadingSpinner},
};
use leptos::{ev::SubmitEvent, *};

#[component]
fn ProgramForm(vm: AdminProgramsViewModel) -> impl IntoView {
    let pending = vm.save_action.pending();
    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        vm.submit();
    };
    view! {
        <Card title="Program details">
            <form class="grid gap-4 md:grid-cols-3 items-end" on:submit=on_submit>
                <div>
                    <label class="block text-sm font-medium text-fg">"Program code"</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        placeholder="BSC-CS"
                        prop:value=move || vm.form.get().program_code
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.program_code = value);
                        }
                    />
                </div>
                <div>
                    <label class="block text-sm font-medium text-fg">"Program title"</label>
                    <input
                        class="mt-1 w-full border border-border rounded px-3 py-2"
                        placeholder="BSc Computer Science"
                        prop:value=move || vm.form.get().program_title
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            vm.form.update(|form| form.program_title = value);
                        }
                    />
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
                        {move || if vm.form.get().is_editing() { "Update program" } else { "Create program" }}
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
fn ProgramTable(vm: AdminProgramsViewModel) -> impl IntoView {
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
                let list = vm.programs.get();
                if list.is_loading() {
                    return view! { <LoadingSpinner /> }.into_view();
                }
                if let Some(error) = list.error() {
                    return view! { <ErrorMessage message=error.to_string() /> }.into_view();
                }
                let rows = vm.visible.get();
                if rows.is_empty() {
                    return view! { <EmptyState title="No programs found" /> }.into_view();
                }
                view! {
                    <table class="min-w-full divide-y divide-border text-sm">
                        <thead>
                            <tr class="text-left text-fg-muted">
                                <th class="py-2">"Code"</th>
                                <th class="py-2">"Title"</th>
                                <th class="py-2 text-right">"Actions"</th>
                            </tr>
                        </thead>
                        <tbody class="divide-y divide-border">
                            {rows.into_iter().map(|program| {
                                let for_edit = program.clone();
                                let for_delete = program.clone();
                                view! {
                                    <tr>
                                        <td class="py-2 font-mono">{program.program_code}</td>
                                        <td class="py-2">{program.program_title}</td>
                                        <td class="py-2 text-right space-x-2">
                                            <Button variant=ButtonVariant::Secondary on:click=move |_| vm.edit(&for_edit)>
                                                "Edit"
                                            </Button>
                                            <Button
                                                variant=ButtonVariant::Danger
                                                on:click=move |_| vm.request_delete(for_delete.clone())
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
pub fn AdminProgramsPage() -> impl IntoView {
    let vm = use_admin_programs_view_model();
    let delete_message = Signal::derive(move || {
        vm.pending_delete
            .get()
            .map(|program| format!("Delete {}? This cannot be undone.", program.program_code))
            .unwrap_or_default()
    });
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Programs"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <ProgramForm vm=vm />
                <ProgramTable vm=vm />
            </div>
            <ConfirmDialog
                is_open=Signal::derive(move || vm.pending_delete.get().is_some())
                title="Delete program"
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
    fn programs_page_renders_form_and_list() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminProgramsPage /> }
        });
        assert!(html.contains("Programs"));
        assert!(html.contains("Create program"));
        assert!(html.contains("Search by code or title"));
        assert!(html.contains("No programs found"));
    }
}
