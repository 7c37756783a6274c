use contracts::system::users::CreateUserDto;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::icons::icon;
use crate::system::users::api;

fn optional(value: String) -> Option<String> {
    let value = value.trim();
    (!value.is_empty()).then(|| value.to_string())
}

/// Inputs of the "new user" dialog
#[derive(Clone, Copy)]
struct NewUserForm {
    username: RwSignal<String>,
    password: RwSignal<String>,
    email: RwSignal<String>,
    full_name: RwSignal<String>,
    is_admin: RwSignal<bool>,
}

impl NewUserForm {
    fn new() -> Self {
        Self {
            username: RwSignal::new(String::new()),
            password: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            full_name: RwSignal::new(String::new()),
            is_admin: RwSignal::new(false),
        }
    }

    fn to_dto(&self) -> CreateUserDto {
        build_dto(
            self.username.get_untracked(),
            self.password.get_untracked(),
            self.email.get_untracked(),
            self.full_name.get_untracked(),
            self.is_admin.get_untracked(),
        )
    }
}

fn build_dto(
    username: String,
    password: String,
    email: String,
    full_name: String,
    is_admin: bool,
) -> CreateUserDto {
    CreateUserDto {
        username: username.trim().to_string(),
        password,
        email: optional(email),
        full_name: optional(full_name),
        is_admin,
    }
}

/// Modal dialog creating a back-office account
#[component]
pub fn CreateUserForm<F1, F2>(on_close: F1, on_created: F2) -> impl IntoView
where
    F1: Fn() + 'static + Copy + Send + Sync,
    F2: Fn() + 'static + Copy + Send + Sync,
{
    let form = NewUserForm::new();
    let (error, set_error) = signal::<Option<String>>(None);
    let (saving, set_saving) = signal(false);

    let on_save = move |_| {
        let dto = form.to_dto();
        if let Err(e) = dto.validate() {
            set_error.set(Some(e));
            return;
        }

        set_saving.set(true);
        set_error.set(None);
        spawn_local(async move {
            match api::create_user(&dto).await {
                Ok(id) => {
                    log::info!("Created user {} ({})", dto.username, id);
                    on_created();
                }
                Err(e) => {
                    set_error.set(Some(format!("Failed to create user: {}", e)));
                    set_saving.set(false);
                }
            }
        });
    };

    view! {
        <div class="modal-overlay" on:click=move |_| on_close()>
            <div class="modal" on:click=move |ev| ev.stop_propagation()>
                <div class="modal-header">
                    <h2 class="modal-title">"New user"</h2>
                    <Button appearance=ButtonAppearance::Subtle on_click=move |_| on_close()>
                        {icon("x")}
                    </Button>
                </div>

                <div class="modal-body">
                    {move || error.get().map(|e| view! {
                        <MessageBar intent=MessageBarIntent::Error>
                            <MessageBarBody>{e}</MessageBarBody>
                        </MessageBar>
                    })}

                    <div class="form__group">
                        <Label>"Username *"</Label>
                        <Input value=form.username placeholder="night.auditor" />
                    </div>
                    <div class="form__group">
                        <Label>"Password *"</Label>
                        <Input value=form.password input_type=InputType::Password />
                    </div>
                    <div class="form__group">
                        <Label>"Email"</Label>
                        <Input value=form.email input_type=InputType::Email />
                    </div>
                    <div class="form__group">
                        <Label>"Full name"</Label>
                        <Input value=form.full_name />
                    </div>
                    <div class="form__group">
                        <Checkbox checked=form.is_admin label="Administrator" />
                    </div>
                </div>

                <div class="modal-footer">
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| on_close()>
                        "Cancel"
                    </Button>
                    <Button
                        appearance=ButtonAppearance::Primary
                        on_click=on_save
                        disabled=Signal::derive(move || saving.get())
                    >
                        {move || if saving.get() { "Saving..." } else { "Create user" }}
                    </Button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_optional_trims_and_drops_blank() {
        assert_eq!(optional("  ".into()), None);
        assert_eq!(
            optional(" ops@hotel.example ".into()).as_deref(),
            Some("ops@hotel.example")
        );
    }

    #[test]
    fn test_build_dto() {
        let dto = build_dto(
            " frontdesk ".into(),
            "s3cret-pass".into(),
            "".into(),
            "Front Desk".into(),
            false,
        );
        assert_eq!(dto.username, "frontdesk");
        assert_eq!(dto.email, None);
        assert_eq!(dto.full_name.as_deref(), Some("Front Desk"));
        assert!(!dto.is_admin);
    }
}
