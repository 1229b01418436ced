use super::{
    utils::{error_line_count, is_error_line, BulkOperation},
    view_model::{use_admin_bulk_view_model, AdminBulkViewModel},
};
use crate::{
    api::CsvDataset,
    components::{
        common::{Button, ButtonVariant, Card},
        error::FeedbackMessages,
        layout::Layout,
    },
    utils::upload::file_from_event,
};
use leptos::*;

#[component]
fn OperationPicker(vm: AdminBulkViewModel) -> impl IntoView {
    let busy = vm.is_busy();
    view! {
        <Card title="Operation">
            <div class="space-y-4">
                <select
                    class="w-full md:w-80 border border-border rounded px-3 py-2"
                    on:change=move |ev| {
                        if let Some(operation) = BulkOperation::parse(&event_target_value(&ev)) {
                            vm.select_operation(operation);
                        }
                    }
                >
                    {BulkOperation::ALL.into_iter().map(|operation| view! {
                        <option
                            value=operation.key()
                            selected=move || vm.operation.get() == operation
                        >
                            {operation.label()}
                        </option>
                    }).collect_view()}
                </select>
                <Show when=move || vm.operation.get().is_import()>
                    <div>
                        <label class="block text-sm font-medium text-fg">"CSV file"</label>
                        <input
                            type="file"
                            accept=".csv"
                            class="mt-1 block text-sm"
                            on:change=move |ev| {
                                if let Some(file) = file_from_event(&ev) {
                                    vm.load_file(file);
                                }
                            }
                        />
                        <p class="mt-1 text-xs text-fg-muted">
                            {move || vm.selected_file.get()
                                .map(|file| format!("{} ({} bytes)", file.name, file.bytes.len()))
                                .unwrap_or_else(|| "No file selected".to_string())}
                        </p>
                    </div>
                </Show>
                <Button
                    variant=ButtonVariant::Primary
                    loading=busy
                    disabled=busy
                    on:click=move |_| vm.run()
                >
                    {move || vm.operation.get().label()}
                </Button>
            </div>
        </Card>
    }
}

#[component]
fn Templates(vm: AdminBulkViewModel) -> impl IntoView {
    view! {
        <Card title="Templates">
            <p class="text-sm text-fg-muted mb-3">
                "Download a template to see the columns each import expects."
            </p>
            <div class="flex flex-wrap gap-2">
                {[CsvDataset::Students, CsvDataset::Enrollments].into_iter().map(|dataset| view! {
                    <Button variant=ButtonVariant::Secondary on:click=move |_| vm.download_template(dataset)>
                        {dataset.template_filename()}
                    </Button>
                }).collect_view()}
            </div>
        </Card>
    }
}

#[component]
fn Results(vm: AdminBulkViewModel) -> impl IntoView {
    view! {
        <Show when=move || !vm.results.with(Vec::is_empty)>
            <Card title="Results">
                <p class="text-sm text-fg-muted mb-2">
                    {move || vm.results.with(|lines| {
                        format!("{} lines, {} errors", lines.len(), error_line_count(lines))
                    })}
                </p>
                <div class="max-h-96 overflow-y-auto font-mono text-sm">
                    {move || vm.results.get().into_iter().map(|line| {
                        let class = if is_error_line(&line) {
                            "py-1 text-status-error-text"
                        } else {
                            "py-1 text-status-success-text"
                        };
                        view! { <div class=class>{line}</div> }
                    }).collect_view()}
                </div>
            </Card>
        </Show>
    }
}

#[component]
pub fn AdminBulkPage() -> impl IntoView {
    let vm = use_admin_bulk_view_model();
    view! {
        <Layout>
            <div class="space-y-6">
                <h2 class="text-2xl font-bold text-fg">"Bulk CSV operations"</h2>
                <FeedbackMessages state=vm.messages.into() />
                <div class="grid gap-6 lg:grid-cols-2">
                    <OperationPicker vm=vm />
                    <Templates vm=vm />
                </div>
                <Results vm=vm />
            </div>
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
    fn bulk_page_offers_operations_and_templates() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            view! { <AdminBulkPage /> }
        });
        assert!(html.contains("Export students"));
        assert!(html.contains("Bulk enroll students"));
        assert!(html.contains("students_template.csv"));
        assert!(html.contains("enrollments_template.csv"));
        assert!(!html.contains("CSV file"));
    }

    #[test]
    fn results_mark_error_lines() {
        let html = render_to_string(move || {
            provide_auth(Some(admin_user()));
            let vm = use_admin_bulk_view_model();
            vm.results.set(vec![
                "Row 1: created STU020".into(),
                "Error: row 2 is missing a registration number".into(),
            ]);
            view! { <Results vm=vm /> }
        });
        assert!(html.contains("2 lines, 1 errors"));
        assert!(html.contains("text-status-error-text"));
        assert!(html.contains("Row 1: created STU020"));
    }
}
