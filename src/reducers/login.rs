use uuid::Uuid;

use crate::auth::validate_login;
use crate::constants::{MSG_LOGIN_FAILED, MSG_LOGIN_SUCCESS};
use crate::messages::{Command, LoginEdit, Message, Notification};
use crate::router::Route;
use crate::state::{AppState, LoginFormState};

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::LoginFieldChanged(edit) => {
            let form = &mut state.login;
            if form.busy {
                crate::debug_log!("Ignoring login edit while signing in");
                return true;
            }
            match edit {
                LoginEdit::Email(v) => form.input.email = v.clone(),
                LoginEdit::Password(v) => form.input.password = v.clone(),
                LoginEdit::TogglePasswordVisible => {
                    form.show_password = !form.show_password;
                    commands.push(Command::Render);
                }
            }
            true
        }
        Message::SubmitLogin => {
            let form = &mut state.login;
            if form.busy {
                crate::debug_log!("Login already in flight");
                return true;
            }
            form.errors = validate_login(&form.input);
            if form.errors.is_valid() {
                let request_id = Uuid::new_v4();
                form.busy = true;
                form.pending_request = Some(request_id);
                commands.push(Command::SendLogin {
                    request_id,
                    payload: form.input.to_payload(),
                });
            }
            commands.push(Command::Render);
            true
        }
        Message::LoginCompleted { request_id, result } => {
            if state.login.pending_request != Some(*request_id) {
                crate::debug_log!("Dropping stale login response {}", request_id);
                return true;
            }
            state.login.pending_request = None;
            state.login.busy = false;

            match result {
                Ok(resp) => {
                    let role = resp.session.role;
                    state.auth.establish(resp.session.clone());
                    state.login = LoginFormState::default();
                    let message = resp
                        .message
                        .clone()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| MSG_LOGIN_SUCCESS.to_string());
                    commands.push(Command::Notify(Notification::success(message)));
                    commands.push(Command::Navigate(Route::home_for(role)));
                }
                Err(e) => {
                    crate::error_log!("Login error: {}", e);
                    commands.push(Command::Notify(Notification::error(
                        e.user_message(MSG_LOGIN_FAILED),
                    )));
                }
            }
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}
