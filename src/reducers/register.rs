//! Registration flow: validate, submit once, report, navigate.

use uuid::Uuid;

use crate::auth::validate_registration;
use crate::constants::{MSG_REGISTER_FAILED, MSG_REGISTER_SUCCESS};
use crate::messages::{AuthTab, Command, Message, Notification, RegisterEdit};
use crate::router::Route;
use crate::state::{AppState, RegisterFormState};

/// What a submit attempt did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// A submission is already outstanding; nothing happened.
    Busy,
    /// Validation failed; errors are on the form, no request was made.
    Rejected,
    /// The request is on its way.
    Sent(Uuid),
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::RegisterFieldChanged(edit) => {
            if state.register.busy {
                crate::debug_log!("Ignoring registration edit while submitting");
            } else if apply_edit(&mut state.register, edit) {
                commands.push(Command::Render);
            }
            true
        }
        Message::SubmitRegistration => {
            let outcome = submit(state, commands);
            crate::debug_log!("Registration submit: {:?}", outcome);
            true
        }
        Message::RegistrationCompleted { request_id, result } => {
            if state.register.pending_request != Some(*request_id) {
                crate::debug_log!("Dropping stale registration response {}", request_id);
                return true;
            }
            state.register.pending_request = None;
            state.register.busy = false;

            match result {
                Ok(resp) => {
                    let message = resp
                        .message
                        .clone()
                        .filter(|m| !m.trim().is_empty())
                        .unwrap_or_else(|| MSG_REGISTER_SUCCESS.to_string());
                    state.register = RegisterFormState::default();
                    state.auth_tab = AuthTab::Login;
                    commands.push(Command::Notify(Notification::success(message)));
                    commands.push(Command::Navigate(Route::Login));
                }
                Err(e) => {
                    crate::error_log!("Registration error: {}", e);
                    commands.push(Command::Notify(Notification::error(
                        e.user_message(MSG_REGISTER_FAILED),
                    )));
                }
            }
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

/// Entry point of the flow.  Never issues more than one request per
/// user-initiated submit and none while another is outstanding.
pub fn submit(state: &mut AppState, commands: &mut Vec<Command>) -> SubmitOutcome {
    let form = &mut state.register;
    if form.busy {
        return SubmitOutcome::Busy;
    }

    form.errors = validate_registration(&form.input);
    let payload = match form.input.to_payload() {
        Some(payload) if form.errors.is_valid() => payload,
        _ => {
            commands.push(Command::Render);
            return SubmitOutcome::Rejected;
        }
    };

    let request_id = Uuid::new_v4();
    form.busy = true;
    form.pending_request = Some(request_id);
    commands.push(Command::SendRegistration {
        request_id,
        payload,
    });
    commands.push(Command::Render);
    SubmitOutcome::Sent(request_id)
}

/// Returns whether the form needs a re-render.  Plain text edits do not:
/// the input already shows what the user typed.
fn apply_edit(form: &mut RegisterFormState, edit: &RegisterEdit) -> bool {
    let input = &mut form.input;
    match edit {
        RegisterEdit::FullName(v) => input.full_name = v.clone(),
        RegisterEdit::Email(v) => input.email = v.clone(),
        RegisterEdit::Password(v) => input.password = v.clone(),
        RegisterEdit::ConfirmPassword(v) => input.confirm_password = v.clone(),
        RegisterEdit::SchoolId(v) => input.school_id = v.clone(),
        RegisterEdit::AgreedToTerms(v) => input.agreed_to_terms = *v,
        RegisterEdit::StudentClass(v) => input.student_class = *v,
        RegisterEdit::UserType(v) => {
            // The class picker only exists for students.
            input.user_type = *v;
            return true;
        }
        RegisterEdit::TogglePasswordVisible => {
            form.show_password = !form.show_password;
            return true;
        }
        RegisterEdit::ToggleConfirmVisible => {
            form.show_confirm_password = !form.show_confirm_password;
            return true;
        }
    }
    false
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{RegisterResponse, UserType};
    use crate::network::ApiError;
    use crate::update::update;

    fn fill_valid_student(state: &mut AppState) {
        let edits = [
            RegisterEdit::FullName("Amina Yusuf".to_string()),
            RegisterEdit::Email("amina@school.test".to_string()),
            RegisterEdit::Password("hunter22".to_string()),
            RegisterEdit::ConfirmPassword("hunter22".to_string()),
            RegisterEdit::UserType(Some(UserType::Student)),
            RegisterEdit::StudentClass(Some(8)),
            RegisterEdit::SchoolId("SCH-001".to_string()),
            RegisterEdit::AgreedToTerms(true),
        ];
        for edit in edits {
            update(state, Message::RegisterFieldChanged(edit));
        }
    }

    fn sent_request(commands: &[Command]) -> Option<Uuid> {
        commands.iter().find_map(|c| match c {
            Command::SendRegistration { request_id, .. } => Some(*request_id),
            _ => None,
        })
    }

    #[test]
    fn invalid_form_makes_no_request() {
        let mut state = AppState::new();
        let mut commands = Vec::new();
        let outcome = submit(&mut state, &mut commands);

        assert_eq!(outcome, SubmitOutcome::Rejected);
        assert!(sent_request(&commands).is_none());
        assert!(!state.register.busy);
        assert!(!state.register.errors.is_valid());
    }

    #[test]
    fn valid_submit_sends_mapped_payload() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);

        let payload = commands
            .iter()
            .find_map(|c| match c {
                Command::SendRegistration { payload, .. } => Some(payload.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(payload.name, "Amina Yusuf");
        assert_eq!(payload.role, UserType::Student);
        assert_eq!(payload.school_id, "SCH-001");
        assert_eq!(payload.class, Some(8));
        assert!(state.register.busy);
    }

    #[test]
    fn resubmit_while_busy_is_rejected() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        update(&mut state, Message::SubmitRegistration);

        let mut commands = Vec::new();
        assert_eq!(submit(&mut state, &mut commands), SubmitOutcome::Busy);
        assert!(commands.is_empty());
    }

    #[test]
    fn success_shows_server_message_and_goes_to_login() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);
        let request_id = sent_request(&commands).unwrap();

        let commands = update(
            &mut state,
            Message::RegistrationCompleted {
                request_id,
                result: Ok(RegisterResponse {
                    message: Some("OK".to_string()),
                }),
            },
        );

        assert!(commands.contains(&Command::Notify(Notification::success("OK"))));
        assert!(commands.contains(&Command::Navigate(Route::Login)));
        assert!(!state.register.busy);
        assert_eq!(state.auth_tab, AuthTab::Login);
    }

    #[test]
    fn empty_success_message_uses_fallback() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);
        let request_id = sent_request(&commands).unwrap();

        let commands = update(
            &mut state,
            Message::RegistrationCompleted {
                request_id,
                result: Ok(RegisterResponse {
                    message: Some("  ".to_string()),
                }),
            },
        );
        assert!(commands.contains(&Command::Notify(Notification::success(
            MSG_REGISTER_SUCCESS
        ))));
    }

    #[test]
    fn success_without_message_uses_fallback_and_navigates() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);
        let request_id = sent_request(&commands).unwrap();

        let commands = update(
            &mut state,
            Message::RegistrationCompleted {
                request_id,
                result: Ok(RegisterResponse::from_body("")),
            },
        );
        assert!(commands.contains(&Command::Notify(Notification::success(
            MSG_REGISTER_SUCCESS
        ))));
        assert!(commands.contains(&Command::Navigate(Route::Login)));
        assert!(!state.register.busy);
    }

    #[test]
    fn edits_are_ignored_while_submitting() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);
        let request_id = sent_request(&commands).unwrap();

        let commands = update(
            &mut state,
            Message::RegisterFieldChanged(RegisterEdit::FullName("Someone Else".to_string())),
        );
        assert!(commands.is_empty());
        update(
            &mut state,
            Message::RegisterFieldChanged(RegisterEdit::UserType(Some(UserType::Teacher))),
        );
        assert_eq!(state.register.input.full_name, "Amina Yusuf");
        assert_eq!(state.register.input.user_type, Some(UserType::Student));

        update(
            &mut state,
            Message::RegistrationCompleted {
                request_id,
                result: Err(ApiError::Network("Failed to fetch".to_string())),
            },
        );
        update(
            &mut state,
            Message::RegisterFieldChanged(RegisterEdit::FullName("Amina Y.".to_string())),
        );
        assert_eq!(state.register.input.full_name, "Amina Y.");
    }

    #[test]
    fn network_failure_reports_generic_message_and_allows_retry() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);
        let request_id = sent_request(&commands).unwrap();

        let commands = update(
            &mut state,
            Message::RegistrationCompleted {
                request_id,
                result: Err(ApiError::Network("Failed to fetch".to_string())),
            },
        );

        assert!(commands.contains(&Command::Notify(Notification::error(MSG_REGISTER_FAILED))));
        assert!(!commands.iter().any(|c| matches!(c, Command::Navigate(_))));
        assert!(!state.register.busy);
        assert_eq!(state.register.input.full_name, "Amina Yusuf");

        let retry = update(&mut state, Message::SubmitRegistration);
        assert!(sent_request(&retry).is_some());
    }

    #[test]
    fn server_failure_message_is_shown() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        let commands = update(&mut state, Message::SubmitRegistration);
        let request_id = sent_request(&commands).unwrap();

        let commands = update(
            &mut state,
            Message::RegistrationCompleted {
                request_id,
                result: Err(ApiError::from_response(
                    409,
                    "Conflict",
                    r#"{"message":"Email already registered"}"#,
                )),
            },
        );
        assert!(commands.contains(&Command::Notify(Notification::error(
            "Email already registered"
        ))));
    }

    #[test]
    fn teacher_registration_needs_no_class() {
        let mut state = AppState::new();
        fill_valid_student(&mut state);
        update(
            &mut state,
            Message::RegisterFieldChanged(RegisterEdit::UserType(Some(UserType::Teacher))),
        );
        update(
            &mut state,
            Message::RegisterFieldChanged(RegisterEdit::StudentClass(None)),
        );
        let commands = update(&mut state, Message::SubmitRegistration);
        let payload = commands
            .iter()
            .find_map(|c| match c {
                Command::SendRegistration { payload, .. } => Some(payload.clone()),
                _ => None,
            })
            .unwrap();
        assert_eq!(payload.class, None);
    }
}
