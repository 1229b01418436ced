use crate::{
    components::layout::LoadingSpinner,
    state::auth::use_auth,
    utils::navigation,
};
use leptos::*;

#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    let is_loading = create_memo(move |_| auth.get().loading);
    create_effect(move |_| {
        let state = auth.get();
        if let Some(target) = redirect_target(state.is_authenticated(), state.loading, true) {
            navigation::redirect_to(&target);
        }
    });
    view! {
        <Show
            when=move || should_render_children(is_authenticated.get(), is_loading.get())
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_children(is_authenticated: bool, is_loading: bool) -> bool {
    is_authenticated && !is_loading
}

#[component]
pub fn RequireAdmin(children: ChildrenFn) -> impl IntoView {
    let (auth, _) = use_auth();
    let is_authenticated = create_memo(move |_| auth.get().is_authenticated());
    let is_loading = create_memo(move |_| auth.get().loading);
    let is_admin = create_memo(move |_| auth.get().is_admin());
    create_effect(move |_| {
        let state = auth.get();
        if let Some(target) =
            redirect_target(state.is_authenticated(), state.loading, state.is_admin())
        {
            navigation::redirect_to(&target);
        }
    });
    view! {
        <Show
            when=move || {
                should_render_admin_children(is_authenticated.get(), is_loading.get(), is_admin.get())
            }
            fallback=move || {
                if is_loading.get() {
                    view! { <LoadingSpinner /> }.into_view()
                } else {
                    ().into_view()
                }
            }
        >
            {children()}
        </Show>
    }
}

fn should_render_admin_children(is_authenticated: bool, is_loading: bool, is_admin: bool) -> bool {
    is_authenticated && is_admin && !is_loading
}

/// Where a guard sends the browser, if anywhere. Signed-out visitors go to
/// the login page carrying the location they asked for.
fn redirect_target(is_authenticated: bool, is_loading: bool, role_allowed: bool) -> Option<String> {
    if is_loading {
        return None;
    }
    if !is_authenticated {
        let requested = navigation::current_location().unwrap_or_default();
        return Some(navigation::login_url_for(&requested));
    }
    if !role_allowed {
        return Some(navigation::DEFAULT_LANDING.to_string());
    }
    None
}


#[cfg(all(test, not(target_arch = "wasm32")))]
mod host_tests {
    use super::{redirect_target, RequireAdmin, RequireAuth};
    use crate::state::auth::AuthState;
    use crate::test_support::helpers::{admin_user, student_user};
    use crate::test_support::ssr::render_to_string;
    use crate::utils::navigation;
    use leptos::*;

    fn provide_auth_state(is_authenticated: bool, loading: bool) {
        let (auth, set_auth) = create_signal(AuthState {
            user: if is_authenticated {
                Some(student_user())
            } else {
                None
            },
            token: is_authenticated.then(|| "abc".to_string()),
            loading,
        });
        provide_context((auth, set_auth));
    }

    #[test]
    fn redirect_preserves_requested_location() {
        navigation::set_current_path("/admin/students?q=jane");
        assert_eq!(
            redirect_target(false, false, true).as_deref(),
            Some("/login?redirect=%2Fadmin%2Fstudents%3Fq%3Djane")
        );
        assert_eq!(redirect_target(false, true, true), None);
        assert_eq!(
            redirect_target(true, false, false).as_deref(),
            Some("/dashboard")
        );
        assert_eq!(redirect_target(true, false, true), None);
    }

    #[test]
    fn require_auth_renders_children_when_authenticated() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("protected-content"));
    }

    #[test]
    fn require_auth_hides_children_when_unauthenticated() {
        let html = render_to_string(move || {
            provide_auth_state(false, false);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(!html.contains("protected-content"));
    }

    #[test]
    fn require_auth_shows_loading_spinner_while_loading() {
        let html = render_to_string(move || {
            provide_auth_state(false, true);
            view! {
                <RequireAuth>
                    {|| view! { <div>"protected-content"</div> }}
                </RequireAuth>
            }
        });
        assert!(html.contains("animate-spin"));
    }

    #[test]
    fn require_admin_renders_children_for_admin_user() {
        let html = render_to_string(move || {
            let (auth, set_auth) = create_signal(AuthState {
                user: Some(admin_user()),
                token: Some("abc".into()),
                loading: false,
            });
            provide_context((auth, set_auth));
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(html.contains("admin-protected"));
    }

    #[test]
    fn require_admin_hides_children_for_student() {
        let html = render_to_string(move || {
            provide_auth_state(true, false);
            view! {
                <RequireAdmin>
                    {|| view! { <div>"admin-protected"</div> }}
                </RequireAdmin>
            }
        });
        assert!(!html.contains("admin-protected"));
    }
}
