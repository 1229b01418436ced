#[cfg(all(test, not(target_arch = "wasm32")))]
pub mod ssr;

#[cfg(test)]
pub mod helpers {
    use crate::api::{Role, User};
    use crate::state::auth::AuthState;
    use leptos::*;

    pub fn admin_user() -> User {
        User {
            id: 100,
            email: Some("registrar@uni.example".into()),
            first_name: Some("Grace".into()),
            last_name: Some("Otieno".into()),
            role: Role::Admin,
            ..User::default()
        }
    }

    pub fn student_user() -> User {
        User {
            id: 1,
            registration_number: Some("STU001".into()),
            full_name: Some("Jane Wanjiru".into()),
            university_email: Some("jane@uni.example".into()),
            first_name: Some("Jane".into()),
            last_name: Some("Wanjiru".into()),
            role: Role::Student,
            ..User::default()
        }
    }

    pub fn provide_auth(user: Option<User>) -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
        let (auth, set_auth) = create_signal(AuthState {
            token: user.as_ref().map(|_| "test-token".to_string()),
            user,
            loading: false,
        });
        provide_context((auth, set_auth));
        (auth, set_auth)
    }
}
