use super::{repository::BulkRepository, utils::BulkOperation};
use crate::{
    api::{ApiClient, ApiError, CsvDataset},
    state::{message::MessageState, toast::use_toasts},
    utils::{
        download::{save_download, trigger_download, CSV_MIME},
        upload::{read_file, SelectedFile},
    },
};
use leptos::*;
use std::rc::Rc;

type DownloadOutcome = (String, Result<Vec<u8>, ApiError>);

#[derive(Clone, Copy)]
pub struct AdminBulkViewModel {
    pub operation: RwSignal<BulkOperation>,
    pub selected_file: RwSignal<Option<SelectedFile>>,
    pub results: RwSignal<Vec<String>>,
    pub messages: RwSignal<MessageState>,
    pub download_action: Action<(CsvDataset, bool), DownloadOutcome>,
    pub import_action: Action<(CsvDataset, SelectedFile), Result<Vec<String>, ApiError>>,
}

impl AdminBulkViewModel {
    pub fn is_busy(&self) -> Signal<bool> {
        let download = self.download_action.pending();
        let import = self.import_action.pending();
        Signal::derive(move || download.get() || import.get())
    }

    pub fn select_operation(&self, operation: BulkOperation) {
        self.operation.set(operation);
        self.selected_file.set(None);
        self.results.set(Vec::new());
        self.messages.update(|m| m.clear());
    }

    pub fn load_file(&self, file: web_sys::File) {
        let selected_file = self.selected_file;
        let messages = self.messages;
        spawn_local(async move {
            match read_file(file).await {
                Ok(file) => {
                    let _ = selected_file.try_set(Some(file));
                    let _ = messages.try_update(|m| m.clear());
                }
                Err(err) => {
                    let _ = messages.try_update(|m| m.set_error(err));
                }
            }
        });
    }

    /// Runs the selected operation: an export downloads, an import uploads.
    pub fn run(&self) {
        if self.is_busy().get_untracked() {
            return;
        }
        let operation = self.operation.get_untracked();
        self.results.set(Vec::new());
        self.messages.update(|m| m.clear());
        if !operation.is_import() {
            self.download_action.dispatch((operation.dataset(), false));
            return;
        }
        match self.selected_file.get_untracked() {
            Some(file) => self.import_action.dispatch((operation.dataset(), file)),
            None => self
                .messages
                .update(|m| m.set_error("Please select a file to upload")),
        }
    }

    pub fn download_template(&self, dataset: CsvDataset) {
        if self.is_busy().get_untracked() {
            return;
        }
        self.messages.update(|m| m.clear());
        self.download_action.dispatch((dataset, true));
    }
}

pub fn use_admin_bulk_view_model() -> AdminBulkViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = BulkRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let operation = create_rw_signal(BulkOperation::default());
    let selected_file = create_rw_signal(None::<SelectedFile>);
    let results = create_rw_signal(Vec::<String>::new());
    let messages = create_rw_signal(MessageState::default());

    let repo_for_download = repository.clone();
    let download_action = create_action(move |(dataset, template): &(CsvDataset, bool)| {
        let repo = repo_for_download.clone();
        let dataset = *dataset;
        let template = *template;
        async move {
            if template {
                (
                    dataset.template_filename().to_string(),
                    repo.template(dataset).await,
                )
            } else {
                (
                    dataset.export_filename().to_string(),
                    repo.export(dataset).await,
                )
            }
        }
    });

    let repo_for_import = repository;
    let import_action = create_action(move |(dataset, file): &(CsvDataset, SelectedFile)| {
        let repo = repo_for_import.clone();
        let dataset = *dataset;
        let file = file.clone();
        async move { repo.import(dataset, file).await }
    });

    create_effect(move |_| {
        if let Some((filename, result)) = download_action.value().get() {
            let saved = save_download(&filename, result, |name, bytes| {
                trigger_download(name, CSV_MIME, bytes)
            });
            match saved {
                Ok(line) => {
                    toasts.success(line.clone());
                    results.set(vec![line]);
                }
                Err(err) => {
                    log::error!("CSV download {} failed: {}", filename, err);
                    messages.update(|m| m.set_error(err.error));
                }
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = import_action.value().get() {
            match result {
                Ok(lines) => {
                    toasts.success(format!("Import finished: {} rows processed", lines.len()));
                    selected_file.set(None);
                    results.set(lines);
                }
                Err(err) => {
                    log::error!("CSV import failed: {}", err);
                    messages.update(|m| m.set_error(err.error));
                }
            }
        }
    });

    AdminBulkViewModel {
        operation,
        selected_file,
        results,
        messages,
        download_action,
        import_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn import_without_file_is_rejected() {
        with_runtime(|| {
            let vm = use_admin_bulk_view_model();
            vm.select_operation(BulkOperation::ImportStudents);
            vm.run();
            assert_eq!(
                vm.messages.get_untracked().error.as_deref(),
                Some("Please select a file to upload")
            );
            assert!(vm.import_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn switching_operation_clears_previous_state() {
        with_runtime(|| {
            let vm = use_admin_bulk_view_model();
            vm.selected_file.set(Some(SelectedFile {
                name: "students.csv".into(),
                bytes: vec![1, 2, 3],
            }));
            vm.results.set(vec!["Row 1: created STU020".into()]);
            vm.select_operation(BulkOperation::BulkEnroll);
            assert_eq!(vm.operation.get_untracked(), BulkOperation::BulkEnroll);
            assert!(vm.selected_file.get_untracked().is_none());
            assert!(vm.results.get_untracked().is_empty());
        });
    }
}
