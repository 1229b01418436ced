use crate::{
    api::{ApiClient, ApiError, LoginRequest, Role, User},
    pages::login::repository::LoginRepository,
    utils::{navigation, storage, token},
};
use leptos::*;
use std::rc::Rc;

type AuthContext = (ReadSignal<AuthState>, WriteSignal<AuthState>);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<User>,
    pub token: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some() && self.user.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user.as_ref().map(User::is_admin).unwrap_or(false)
    }

    pub fn role(&self) -> Option<Role> {
        self.user.as_ref().map(|user| user.role)
    }
}

/// Reads the stored session. Anything incomplete, unreadable or expired is
/// wiped so that the token and user never outlive each other.
pub fn load_persisted_session(now_secs: i64) -> Option<(String, User)> {
    let stored_token = storage::get_item(storage::TOKEN_KEY)
        .map_err(|err| log::warn!("{}", err))
        .ok()
        .flatten()
        .filter(|t| !t.trim().is_empty());
    let stored_user = storage::get_item(storage::USER_KEY)
        .map_err(|err| log::warn!("{}", err))
        .ok()
        .flatten();

    let session = match (stored_token, stored_user) {
        (Some(token), Some(raw_user)) => match serde_json::from_str::<User>(&raw_user) {
            Ok(user) if !token::is_expired(&token, now_secs) => Some((token, user)),
            Ok(_) => {
                log::info!("Stored session has expired");
                None
            }
            Err(err) => {
                log::warn!("Discarding unreadable stored user: {}", err);
                None
            }
        },
        _ => None,
    };
    if session.is_none() {
        storage::clear_session();
    }
    session
}

pub fn persist_session(token: &str, user: &User) -> Result<(), ApiError> {
    let raw_user = serde_json::to_string(user)
        .map_err(|e| ApiError::unknown(format!("Failed to store session: {}", e)))?;
    let written = storage::set_item(storage::TOKEN_KEY, token)
        .and_then(|_| storage::set_item(storage::USER_KEY, &raw_user));
    if let Err(err) = written {
        storage::clear_session();
        return Err(ApiError::unknown(err));
    }
    Ok(())
}

fn persist_user(user: &User) {
    match serde_json::to_string(user) {
        Ok(raw) => {
            if let Err(err) = storage::set_item(storage::USER_KEY, &raw) {
                log::warn!("{}", err);
            }
        }
        Err(err) => log::warn!("Failed to store user: {}", err),
    }
}

fn create_auth_context() -> AuthContext {
    let stored = load_persisted_session(token::now_secs());
    let verify = stored.clone();
    let (auth_state, set_auth_state) = create_signal(match stored {
        Some((token, user)) => AuthState {
            user: Some(user),
            token: Some(token),
            loading: true,
        },
        None => AuthState::default(),
    });

    if let Some((_token, user)) = verify {
        let api_client = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
        let repo = LoginRepository::new_with_client(Rc::new(api_client));
        spawn_local(async move {
            let _ = verify_session(&repo, user.role, set_auth_state).await;
        });
    }

    (auth_state, set_auth_state)
}

#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let ctx = create_auth_context();
    provide_context::<AuthContext>(ctx);
    view! { <>{children()}</> }
}

pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>().unwrap_or_else(|| create_signal(AuthState::default()))
}

/// Confirms the adopted session with the backend and replaces the stored user.
async fn verify_session(
    repo: &LoginRepository,
    role: Role,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    match repo.fetch_profile(role).await {
        Ok(user) => {
            persist_user(&user);
            set_auth_state.try_update(|state| {
                state.user = Some(user);
                state.loading = false;
            });
            Ok(())
        }
        Err(err) => {
            log::info!("Stored session rejected: {}", err);
            logout(set_auth_state);
            Err(err)
        }
    }
}

pub fn login(
    token: String,
    user: User,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    persist_session(&token, &user)?;
    set_auth_state.try_update(|state| {
        state.token = Some(token);
        state.user = Some(user);
        state.loading = false;
    });
    Ok(())
}

pub async fn login_request(
    request: LoginRequest,
    repo: &LoginRepository,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<User, ApiError> {
    set_auth_state.update(|state| state.loading = true);

    match repo.login(request).await {
        Ok(response) => {
            let user = response.user.clone();
            if let Err(err) = login(response.token, response.user, set_auth_state) {
                set_auth_state.try_update(|state| state.loading = false);
                return Err(err);
            }
            log::info!("Signed in as {}", user.display_name());
            Ok(user)
        }
        Err(error) => {
            set_auth_state.try_update(|state| state.loading = false);
            Err(error)
        }
    }
}

pub fn logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.try_update(|state| *state = AuthState::default());
}

/// Re-reads the signed-in user's profile. A rejected session signs out.
pub async fn refresh_user(
    repo: &LoginRepository,
    auth_state: ReadSignal<AuthState>,
    set_auth_state: WriteSignal<AuthState>,
) -> Result<(), ApiError> {
    let snapshot = auth_state.get_untracked();
    if snapshot.token.is_none() {
        return Ok(());
    }
    let role = snapshot.role().unwrap_or_default();
    match repo.fetch_profile(role).await {
        Ok(user) => {
            persist_user(&user);
            set_auth_state.try_update(|state| state.user = Some(user));
            Ok(())
        }
        Err(err) => {
            logout(set_auth_state);
            Err(err)
        }
    }
}

pub fn use_login_action() -> Action<LoginRequest, Result<User, ApiError>> {
    let (_auth, set_auth) = use_auth();
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = LoginRepository::new_with_client(Rc::new(api));

    create_action(move |request: &LoginRequest| {
        let payload = request.clone();
        let repo = repo.clone();
        async move { login_request(payload, &repo, set_auth).await }
    })
}

/// Clears the session and leaves for the login page.
pub fn use_logout() -> Callback<()> {
    let (_auth, set_auth) = use_auth();
    Callback::new(move |_| {
        logout(set_auth);
        navigation::redirect_to(navigation::LOGIN_PATH);
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_runtime<T>(test: impl FnOnce() -> T) -> T {
        let runtime = create_runtime();
        let result = test();
        runtime.dispose();
        result
    }

    #[test]
    fn use_auth_returns_default_without_context() {
        with_runtime(|| {
            let (state, _set_state) = use_auth();
            let snapshot = state.get();
            assert!(!snapshot.is_authenticated());
            assert!(snapshot.user.is_none());
        });
    }

    #[test]
    fn authenticated_requires_token_and_user() {
        let user = User {
            id: 1,
            role: Role::Admin,
            ..User::default()
        };
        let token_only = AuthState {
            token: Some("abc".into()),
            ..AuthState::default()
        };
        assert!(!token_only.is_authenticated());
        let full = AuthState {
            user: Some(user),
            ..token_only
        };
        assert!(full.is_authenticated());
        assert!(full.is_admin());
    }
}
