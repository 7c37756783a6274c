//! Signed-in user's own profile and password change

use contracts::system::users::{validate_password, ChangePasswordDto};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::layout::notifications::use_notifications;
use crate::system::auth::context::use_auth;
use crate::system::users::api;

/// Checks done before the request is sent
fn check_new_password(new_password: &str, confirmation: &str) -> Result<(), String> {
    validate_password(new_password)?;
    if new_password != confirmation {
        return Err("Passwords do not match".into());
    }
    Ok(())
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let (auth_state, _) = use_auth();
    let notifications = use_notifications();

    let old_password = RwSignal::new(String::new());
    let new_password = RwSignal::new(String::new());
    let confirmation = RwSignal::new(String::new());
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let field = |label: &'static str, value: Option<String>| {
        view! {
            <div class="form__group">
                <Label>{label}</Label>
                <span class="form__value">{value.unwrap_or_else(|| "-".to_string())}</span>
            </div>
        }
    };

    let on_change_password = move |_| {
        let Some(user_id) = auth_state.with_untracked(|s| s.user_info.as_ref().map(|u| u.id.clone()))
        else {
            return;
        };
        let new_value = new_password.get_untracked();
        if let Err(e) = check_new_password(&new_value, &confirmation.get_untracked()) {
            set_error.set(Some(e));
            return;
        }

        let dto = ChangePasswordDto {
            user_id,
            old_password: Some(old_password.get_untracked()),
            new_password: new_value,
        };
        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::change_password(&dto).await {
                Ok(()) => {
                    old_password.set(String::new());
                    new_password.set(String::new());
                    confirmation.set(String::new());
                    notifications.success("Password changed");
                }
                Err(e) => set_error.set(Some(e)),
            }
            set_saving.set(false);
        });
    };

    view! {
        <div class="content">
            <div class="header">
                <h2>"Profile"</h2>
            </div>

            {move || auth_state.with(|s| s.user_info.clone()).map(|user| view! {
                <div class="details-section">
                    {field("Login", Some(user.username.clone()))}
                    {field("Full name", user.full_name.clone())}
                    {field("Email", user.email.clone())}
                    {field("Role", Some(if user.is_admin { "Administrator" } else { "Operator" }.to_string()))}
                </div>
            })}

            <div class="details-section">
                <h3>"Change password"</h3>
                {move || error.get().map(|e| view! {
                    <MessageBar intent=MessageBarIntent::Error>
                        <MessageBarBody>{e}</MessageBarBody>
                    </MessageBar>
                })}
                <div class="form__group">
                    <Label>"Current password"</Label>
                    <Input value=old_password input_type=InputType::Password />
                </div>
                <div class="form__group">
                    <Label>"New password"</Label>
                    <Input value=new_password input_type=InputType::Password />
                </div>
                <div class="form__group">
                    <Label>"Repeat new password"</Label>
                    <Input value=confirmation input_type=InputType::Password />
                </div>
                <Button
                    appearance=ButtonAppearance::Primary
                    on_click=on_change_password
                    disabled=Signal::derive(move || saving.get())
                >
                    {move || if saving.get() { "Saving..." } else { "Change password" }}
                </Button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_new_password() {
        assert!(check_new_password("secret1", "secret1").is_ok());
        assert_eq!(
            check_new_password("secret1", "secret2").unwrap_err(),
            "Passwords do not match"
        );
        assert!(check_new_password("123", "123").is_err());
    }
}
