use super::{repository::RecordsRepository, utils::DocumentKind};
use crate::{
    api::{ApiClient, ApiError, Transcript},
    state::{
        collection::spawn_fetch,
        message::MessageState,
        toast::{use_toasts, ToastState},
    },
    utils::download::{save_download, trigger_download, PDF_MIME},
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct StudentRecordsViewModel {
    pub transcript: RwSignal<Option<Result<Transcript, ApiError>>>,
    pub messages: RwSignal<MessageState>,
    pub reload: RwSignal<u32>,
    pub download_action: Action<DocumentKind, (DocumentKind, Result<Vec<u8>, ApiError>)>,
}

impl StudentRecordsViewModel {
    pub fn download(&self, kind: DocumentKind) {
        if self.download_action.pending().get_untracked() {
            return;
        }
        self.messages.update(|m| m.clear());
        self.download_action.dispatch(kind);
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

fn report_download(
    toasts: ToastState,
    messages: RwSignal<MessageState>,
    kind: DocumentKind,
    saved: Result<String, ApiError>,
) {
    match saved {
        Ok(line) => {
            toasts.success(line);
        }
        Err(err) => {
            log::error!("{} failed: {}", kind.filename(), err);
            messages.update(|m| m.set_error(err.error));
        }
    }
}

pub fn use_student_records_view_model() -> StudentRecordsViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = RecordsRepository::new_with_client(Rc::new(api));
    let toasts = use_toasts();

    let transcript = create_rw_signal(None::<Result<Transcript, ApiError>>);
    let messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let repo_for_load = repository.clone();
    create_effect(move |_| {
        let _ = reload.get();
        let repo = repo_for_load.clone();
        spawn_fetch(transcript, "transcript", async move { repo.fetch_transcript().await });
    });

    let download_action = create_action(move |kind: &DocumentKind| {
        let repo = repository.clone();
        let kind = *kind;
        async move { (kind, repo.download(kind).await) }
    });

    create_effect(move |_| {
        if let Some((kind, result)) = download_action.value().get() {
            let saved = save_download(kind.filename(), result, |name, bytes| {
                trigger_download(name, PDF_MIME, bytes)
            });
            report_download(toasts, messages, kind, saved);
        }
    });

    StudentRecordsViewModel {
        transcript,
        messages,
        reload,
        download_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::state::toast::ToastKind;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn saved_document_raises_success_toast() {
        with_runtime(|| {
            let toasts = ToastState::new();
            let messages = create_rw_signal(MessageState::default());
            report_download(
                toasts,
                messages,
                DocumentKind::Transcript,
                Ok("Successfully downloaded transcript.pdf".to_string()),
            );
            let shown = toasts.toasts().get_untracked();
            assert_eq!(shown.len(), 1);
            assert_eq!(shown[0].kind, ToastKind::Success);
            assert_eq!(shown[0].message, "Successfully downloaded transcript.pdf");
            assert_eq!(messages.get_untracked(), MessageState::default());
        });
    }

    #[test]
    fn failed_document_sets_inline_error() {
        with_runtime(|| {
            let toasts = ToastState::new();
            let messages = create_rw_signal(MessageState::default());
            report_download(
                toasts,
                messages,
                DocumentKind::Certificate,
                Err(ApiError::http(404, "Failed to download certificate")),
            );
            assert!(toasts.toasts().get_untracked().is_empty());
            assert_eq!(
                messages.get_untracked().error.as_deref(),
                Some("Failed to download certificate")
            );
        });
    }
}
