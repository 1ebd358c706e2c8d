//! Student dashboard subjects: one fetch per page visit.

use uuid::Uuid;

use crate::auth::{evaluate, GuardDecision};
use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::AppState;

/// Issue the subjects fetch once the student dashboard is both visible and
/// allowed.  Nothing is requested while the session is still resolving.
pub fn ensure_loaded(state: &mut AppState, commands: &mut Vec<Command>) {
    if state.route != Route::Home || state.subjects.requested {
        return;
    }
    if evaluate(state.auth.session(), state.route.required_role()) != GuardDecision::Allow {
        return;
    }

    let request_id = Uuid::new_v4();
    state.subjects.requested = true;
    state.subjects.loading = true;
    state.subjects.error = None;
    state.subjects.pending_request = Some(request_id);
    commands.push(Command::FetchSubjects { request_id });
}

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SubjectsLoaded { request_id, result } => {
            if state.subjects.pending_request != Some(*request_id) {
                crate::debug_log!("Dropping stale subjects response {}", request_id);
                return true;
            }
            state.subjects.pending_request = None;
            state.subjects.loading = false;
            match result {
                Ok(subjects) => {
                    state.subjects.subjects = subjects.clone();
                    state.subjects.error = None;
                }
                Err(e) => {
                    crate::error_log!("Failed to load subjects: {}", e);
                    state.subjects.error = Some(e.to_string());
                }
            }
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{SessionInfo, UserRole};
    use crate::network::ApiError;
    use crate::reducers::auth::resolve_session;
    use crate::update::update;

    fn student() -> Option<SessionInfo> {
        Some(SessionInfo {
            role: UserRole::Student,
            school_id: Some("SCH-001".to_string()),
        })
    }

    fn on_home() -> (AppState, Uuid) {
        let mut state = AppState::new();
        update(&mut state, Message::RouteChanged(Route::Home));
        resolve_session(&mut state, Ok(student()));
        let id = state.subjects.pending_request.unwrap();
        (state, id)
    }

    #[test]
    fn waits_for_session_before_fetching() {
        let mut state = AppState::new();
        let commands = update(&mut state, Message::RouteChanged(Route::Home));
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::FetchSubjects { .. })));

        let commands = resolve_session(&mut state, Ok(student()));
        let request_id = state.subjects.pending_request.unwrap();
        assert!(commands.contains(&Command::FetchSubjects { request_id }));
        assert!(state.subjects.loading);
    }

    #[test]
    fn fetches_once_per_visit() {
        let (mut state, _) = on_home();
        let commands = update(&mut state, Message::ToggleSidebar);
        assert!(!commands
            .iter()
            .any(|c| matches!(c, Command::FetchSubjects { .. })));
    }

    #[test]
    fn other_roles_never_fetch() {
        let mut state = AppState::new();
        update(&mut state, Message::RouteChanged(Route::Home));
        let commands = resolve_session(
            &mut state,
            Ok(Some(SessionInfo {
                role: UserRole::Teacher,
                school_id: None,
            })),
        );
        assert!(!state.subjects.requested);
        assert!(commands.contains(&Command::Navigate(Route::Login)));
    }

    #[test]
    fn loaded_subjects_are_stored() {
        let (mut state, request_id) = on_home();
        let commands = update(
            &mut state,
            Message::SubjectsLoaded {
                request_id,
                result: Ok(vec!["Mathematics".to_string(), "Physics".to_string()]),
            },
        );
        assert!(!state.subjects.loading);
        assert_eq!(state.subjects.subjects, vec!["Mathematics", "Physics"]);
        assert!(commands.contains(&Command::Render));
    }

    #[test]
    fn server_error_shows_status_line() {
        let (mut state, request_id) = on_home();
        update(
            &mut state,
            Message::SubjectsLoaded {
                request_id,
                result: Err(ApiError::from_response(500, "Internal Server Error", "")),
            },
        );
        assert!(!state.subjects.loading);
        assert_eq!(
            state.subjects.error.as_deref(),
            Some("Error 500: Internal Server Error")
        );
    }

    #[test]
    fn late_response_after_leaving_is_ignored() {
        let (mut state, request_id) = on_home();
        update(&mut state, Message::RouteChanged(Route::Login));
        let commands = update(
            &mut state,
            Message::SubjectsLoaded {
                request_id,
                result: Ok(vec!["Art".to_string()]),
            },
        );
        assert!(state.subjects.subjects.is_empty());
        assert!(!commands.contains(&Command::Render));
    }

    #[test]
    fn revisiting_home_fetches_again() {
        let (mut state, first) = on_home();
        update(&mut state, Message::RouteChanged(Route::Login));
        update(&mut state, Message::RouteChanged(Route::Home));
        let second = state.subjects.pending_request.unwrap();
        assert_ne!(first, second);
    }
}
