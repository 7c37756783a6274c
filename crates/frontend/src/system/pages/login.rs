use contracts::shared::logger::category;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::system::auth::{api, context::complete_login, context::use_auth};
use crate::system::logs::api as logs_api;

#[component]
pub fn LoginPage() -> impl IntoView {
    let (username, set_username) = signal(String::new());
    let (password, set_password) = signal(String::new());
    let (error_message, set_error_message) = signal(Option::<String>::None);
    let (is_loading, set_is_loading) = signal(false);

    let (_, set_auth_state) = use_auth();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get().trim().to_string();
        let password_val = password.get();
        if username_val.is_empty() || password_val.is_empty() {
            set_error_message.set(Some("Enter login and password".to_string()));
            return;
        }

        set_is_loading.set(true);
        set_error_message.set(None);

        spawn_local(async move {
            match api::login(username_val, password_val).await {
                Ok(response) => {
                    let text = format!("{} signed in", response.user.username);
                    // Switches AppShell over to the main layout
                    complete_login(response, set_auth_state);
                    if let Err(e) = logs_api::post_client_event(category::AUTH, &text).await {
                        log::warn!("Failed to record sign-in: {}", e);
                    }
                }
                Err(e) => {
                    set_error_message.set(Some(format!("Sign-in failed: {}", e)));
                }
            }
            set_is_loading.set(false);
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Hotel Back-Office"</h1>
                <h2>"Sign in"</h2>

                {move || error_message.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Login"</label>
                        <input
                            type="text"
                            id="username"
                            autocomplete="username"
                            prop:value=move || username.get()
                            on:input=move |ev| set_username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Password"</label>
                        <input
                            type="password"
                            id="password"
                            autocomplete="current-password"
                            prop:value=move || password.get()
                            on:input=move |ev| set_password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button type="submit" class="btn-primary" disabled=move || is_loading.get()>
                        {move || if is_loading.get() { "Signing in..." } else { "Sign in" }}
                    </button>
                </form>
            </div>
        </div>
    }
}
