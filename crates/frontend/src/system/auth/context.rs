use contracts::system::auth::{LoginResponse, UserInfo};
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::{api, storage};

#[derive(Clone, Debug, Default)]
pub struct AuthState {
    pub access_token: Option<String>,
    pub user_info: Option<UserInfo>,
    /// Session restore from localStorage finished
    pub restored: bool,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.access_token.is_some()
    }

    pub fn is_admin(&self) -> bool {
        self.user_info.as_ref().map(|u| u.is_admin).unwrap_or(false)
    }
}

/// Auth context provider component
#[component]
pub fn AuthProvider(children: Children) -> impl IntoView {
    let (auth_state, set_auth_state) = signal(AuthState::default());

    // Restore the session from localStorage once
    spawn_local(async move {
        let restored = restore_session().await;
        set_auth_state.set(match restored {
            Some((access_token, user_info)) => AuthState {
                access_token: Some(access_token),
                user_info: Some(user_info),
                restored: true,
            },
            None => AuthState {
                restored: true,
                ..Default::default()
            },
        });
    });

    provide_context(auth_state);
    provide_context(set_auth_state);

    children()
}

async fn restore_session() -> Option<(String, UserInfo)> {
    let access_token = storage::get_access_token()?;
    if let Ok(user_info) = api::get_current_user(&access_token).await {
        return Some((access_token, user_info));
    }

    // Access token expired, try the refresh token
    let Some(refresh_token) = storage::get_refresh_token() else {
        storage::clear_tokens();
        return None;
    };
    match api::refresh_token(refresh_token).await {
        Ok(response) => {
            storage::save_access_token(&response.access_token);
            let user_info = api::get_current_user(&response.access_token).await.ok()?;
            Some((response.access_token, user_info))
        }
        Err(e) => {
            log::warn!("Session restore failed: {}", e);
            storage::clear_tokens();
            None
        }
    }
}

/// Hook to access auth state
pub fn use_auth() -> (ReadSignal<AuthState>, WriteSignal<AuthState>) {
    let auth_state =
        use_context::<ReadSignal<AuthState>>().expect("AuthProvider not found in component tree");
    let set_auth_state =
        use_context::<WriteSignal<AuthState>>().expect("AuthProvider not found in component tree");

    (auth_state, set_auth_state)
}

/// Store tokens and publish the signed-in user
pub fn complete_login(response: LoginResponse, set_auth_state: WriteSignal<AuthState>) {
    storage::save_access_token(&response.access_token);
    storage::save_refresh_token(&response.refresh_token);
    set_auth_state.set(AuthState {
        access_token: Some(response.access_token),
        user_info: Some(response.user),
        restored: true,
    });
}

/// Revoke the refresh token and clear the session
///
/// View and property selections are reset by the caller.
pub async fn do_logout(set_auth_state: WriteSignal<AuthState>) {
    if let Some(refresh_token) = storage::get_refresh_token() {
        if let Err(e) = api::logout(refresh_token).await {
            log::warn!("{}", e);
        }
    }

    storage::clear_tokens();
    set_auth_state.set(AuthState {
        restored: true,
        ..Default::default()
    });
}
