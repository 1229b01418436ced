use super::{repository::ProfileRepository, utils::PasswordFormState};
use crate::{
    api::{ApiClient, ApiError, ChangePasswordRequest},
    state::{
        auth::{refresh_user, use_auth},
        message::MessageState,
        toast::use_toasts,
    },
};
use leptos::*;
use std::rc::Rc;

#[derive(Clone, Copy)]
pub struct ProfileViewModel {
    pub password_form: RwSignal<PasswordFormState>,
    pub messages: RwSignal<MessageState>,
    pub password_messages: RwSignal<MessageState>,
    pub reload: RwSignal<u32>,
    pub change_password_action: Action<ChangePasswordRequest, Result<(), ApiError>>,
}

impl ProfileViewModel {
    pub fn submit_password(&self) {
        if self.change_password_action.pending().get_untracked() {
            return;
        }
        match self.password_form.get_untracked().to_request() {
            Ok(request) => {
                self.password_messages.update(|m| m.clear());
                self.change_password_action.dispatch(request);
            }
            Err(err) => self.password_messages.update(|m| m.set_error(err.error)),
        }
    }

    pub fn refresh(&self) {
        self.reload.update(|value| *value = value.wrapping_add(1));
    }
}

/// Backend wording for password failures, rephrased for the form.
fn describe_password_error(error: &ApiError) -> String {
    match error.error.as_str() {
        "Current password is incorrect" => "Your current password is incorrect".to_string(),
        _ if error.is_unauthorized() => "Your session has expired".to_string(),
        _ => error.error.clone(),
    }
}

pub fn use_profile_view_model() -> ProfileViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repository = ProfileRepository::new_with_client(Rc::new(api));
    let (auth, set_auth) = use_auth();
    let toasts = use_toasts();

    let password_form = create_rw_signal(PasswordFormState::default());
    let messages = create_rw_signal(MessageState::default());
    let password_messages = create_rw_signal(MessageState::default());
    let reload = create_rw_signal(0u32);

    let session = repository.session();
    create_effect(move |_| {
        let _ = reload.get();
        let session = session.clone();
        spawn_local(async move {
            if let Err(err) = refresh_user(&session, auth, set_auth).await {
                log::error!("Failed to refresh profile: {}", err);
                let _ = messages.try_update(|m| m.set_error(err.error));
            }
        });
    });

    let change_password_action = create_action(move |request: &ChangePasswordRequest| {
        let repo = repository.clone();
        let request = request.clone();
        async move { repo.change_password(request).await }
    });

    create_effect(move |_| {
        if let Some(result) = change_password_action.value().get() {
            match result {
                Ok(()) => {
                    password_form.update(|form| form.reset());
                    password_messages.update(|m| m.set_success("Password changed successfully"));
                    toasts.success("Password changed successfully");
                }
                Err(err) => {
                    password_messages.update(|m| m.set_error(describe_password_error(&err)))
                }
            }
        }
    });

    ProfileViewModel {
        password_form,
        messages,
        password_messages,
        reload,
        change_password_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn mismatched_passwords_stay_local() {
        with_runtime(|| {
            let vm = use_profile_view_model();
            vm.password_form.set(PasswordFormState {
                current_password: "password".into(),
                new_password: "abcdef".into(),
                confirm_password: "abcxyz".into(),
            });
            vm.submit_password();
            assert_eq!(
                vm.password_messages.get_untracked().error.as_deref(),
                Some("New passwords do not match")
            );
            assert!(vm.change_password_action.value().get_untracked().is_none());
        });
    }

    #[test]
    fn password_errors_are_rephrased() {
        assert_eq!(
            describe_password_error(&ApiError::http(400, "Current password is incorrect")),
            "Your current password is incorrect"
        );
        assert_eq!(
            describe_password_error(&ApiError::http(500, "Server error")),
            "Server error"
        );
    }
}
