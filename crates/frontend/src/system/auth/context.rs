use contracts::system::auth::{TokenClaims, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;
use web_sys::window;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub token: Option<String>,
    pub user_info: Option<UserInfo>,
}

/// True when the stored token exists and its `exp` claim has not passed.
/// Stateless on purpose: callable from plain async code, not only from
/// inside the component tree.
pub fn is_authenticated() -> bool {
    let token = match storage::get_token() {
        Some(t) => t,
        None => return false,
    };
    let now_unix = (js_sys::Date::now() / 1000.0) as i64;
    match TokenClaims::decode(&token) {
        Some(claims) => !claims.is_expired(now_unix),
        None => false,
    }
}

/// Drop the session and reload to the login screen. Used when the token
/// expires or the server answers 401; the in-flight caller never sees a
/// surfaced error, the app simply restarts unauthenticated.
pub fn force_logout() {
    storage::clear_session();
    if let Some(w) = window() {
        let _ = w.location().reload();
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: ChildrenFn) -> impl IntoView {
    // Restore the cached session synchronously so the first render is
    // already role-aware, then validate against the server.
    let initial = if is_authenticated() {
        AuthState {
            token: storage::get_token(),
            user_info: storage::get_user(),
        }
    } else {
        AuthState::default()
    };

    let (auth_state, set_auth_state) = signal(initial);

    Effect::new(move |_| {
        if auth_state.get_untracked().token.is_none() {
            return;
        }
        spawn_local(async move {
            match api::get_current_user().await {
                Ok(user_info) => {
                    storage::save_user(&user_info);
                    set_auth_state.update(|s| s.user_info = Some(user_info));
                }
                Err(_) => {
                    // Stale or revoked token; http layer may already have
                    // forced a reload, make sure the session is gone.
                    storage::clear_session();
                    set_auth_state.set(AuthState::default());
                }
            }
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Current user's id, empty string when signed out. Convenience for API
/// calls that key on the viewer.
pub fn current_user_id() -> String {
    storage::get_user().map(|u| u.id).unwrap_or_default()
}

/// Perform login and update state + storage. The write signal is captured
/// before spawning; context is not reachable from inside the task.
pub async fn do_login(
    set_auth_state: WriteSignal<AuthState>,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::login(email, password).await?;

    storage::save_token(&response.token);
    storage::save_user(&response.user);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

/// Perform registration; the backend signs the new account in.
pub async fn do_register(
    set_auth_state: WriteSignal<AuthState>,
    username: String,
    email: String,
    password: String,
) -> Result<(), String> {
    let response = api::register(username, email, password).await?;

    storage::save_token(&response.token);
    storage::save_user(&response.user);

    set_auth_state.set(AuthState {
        token: Some(response.token),
        user_info: Some(response.user),
    });

    Ok(())
}

pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    storage::clear_session();
    set_auth_state.set(AuthState::default());
}
