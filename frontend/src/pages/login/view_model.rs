use super::utils::{LoginFormState, LoginMode};
use crate::{
    api::{ApiError, LoginRequest, User},
    state::auth::{self, use_auth},
    utils::navigation,
};
use leptos::*;

#[derive(Clone, Copy)]
pub struct LoginViewModel {
    pub form: RwSignal<LoginFormState>,
    pub error: RwSignal<Option<ApiError>>,
    pub login_action: Action<LoginRequest, Result<User, ApiError>>,
}

/// Post-login destination taken from the `redirect` query parameter.
pub fn post_login_target() -> String {
    navigation::sanitize_redirect(navigation::current_query_value("redirect").as_deref())
}

impl LoginViewModel {
    pub fn set_mode(&self, mode: LoginMode) {
        self.form.update(|form| form.switch_mode(mode));
        self.error.set(None);
    }

    pub fn submit(&self) {
        if self.login_action.pending().get_untracked() {
            return;
        }
        match self.form.get_untracked().validate() {
            Ok(request) => {
                self.error.set(None);
                self.login_action.dispatch(request);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_login_view_model() -> LoginViewModel {
    let (auth, _) = use_auth();
    let form = create_rw_signal(LoginFormState::default());
    let error = create_rw_signal(None::<ApiError>);
    let login_action = auth::use_login_action();

    create_effect(move |_| {
        let state = auth.get();
        if state.is_authenticated() && !state.loading && login_action.value().get_untracked().is_none() {
            navigation::redirect_to(&post_login_target());
        }
    });

    create_effect(move |_| {
        if let Some(result) = login_action.value().get() {
            match result {
                Ok(_) => {
                    error.set(None);
                    form.update(|state| state.password.clear());
                    navigation::redirect_to(&post_login_target());
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    LoginViewModel {
        form,
        error,
        login_action,
    }
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::*;
    use crate::test_support::ssr::with_runtime;

    #[test]
    fn login_view_model_defaults_empty() {
        with_runtime(|| {
            let vm = use_login_view_model();
            assert!(vm.error.get().is_none());
            assert!(vm.form.get().identifier.is_empty());
            assert_eq!(vm.form.get().mode, LoginMode::Student);
        });
    }

    #[test]
    fn invalid_submit_sets_validation_error() {
        with_runtime(|| {
            let vm = use_login_view_model();
            vm.submit();
            let err = vm.error.get_untracked().unwrap();
            assert_eq!(err.code, "VALIDATION_ERROR");
            vm.set_mode(LoginMode::Admin);
            assert!(vm.error.get_untracked().is_none());
        });
    }

    #[test]
    fn redirect_target_comes_from_query() {
        navigation::set_current_path("/login?redirect=%2Fstudent%2Ffees");
        assert_eq!(post_login_target(), "/student/fees");
        navigation::set_current_path("/login?redirect=https%3A%2F%2Fevil.example");
        assert_eq!(post_login_target(), "/dashboard");
        navigation::set_current_path("/login");
        assert_eq!(post_login_target(), "/dashboard");
    }
}
