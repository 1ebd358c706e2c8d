//! Session lifecycle and the page guard.

use uuid::Uuid;

use crate::constants::MSG_LOGGED_OUT;
use crate::messages::{Command, Message, Notification};
use crate::router::Route;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::SessionCheckRequested => {
            let request_id = Uuid::new_v4();
            state.auth.begin_check(request_id);
            commands.push(Command::CheckSession { request_id });
            commands.push(Command::Render);
            true
        }
        Message::SessionResolved { request_id, result } => {
            if !state.auth.finish_check(*request_id) {
                crate::debug_log!("Dropping superseded session check {}", request_id);
                return true;
            }
            match result {
                Ok(Some(info)) => {
                    crate::debug_log!("Session restored as {}", info.role);
                    state.auth.establish(info.clone());
                }
                Ok(None) => {
                    crate::debug_log!("No active session");
                    state.auth.clear();
                }
                Err(e) => {
                    crate::warn_log!("Session check failed: {}", e);
                    state.auth.clear();
                }
            }
            commands.push(Command::Render);
            true
        }
        Message::LogoutRequested => {
            commands.push(Command::SendLogout);
            true
        }
        Message::LoggedOut => {
            state.auth.clear();
            // The guard would send a protected page to the same place.
            state.guard.mark_redirected();
            commands.push(Command::Notify(Notification::info(MSG_LOGGED_OUT)));
            commands.push(Command::Navigate(Route::Login));
            true
        }
        _ => false,
    }
}

/// Ask the guard about the current page.  Runs after every message, so a
/// redirect happens as soon as the session resolves, and only once per visit.
pub fn enforce_guard(state: &mut AppState, commands: &mut Vec<Command>) {
    if let Some(target) = state.guard.check(state.auth.session(), state.route) {
        crate::debug_log!("Guard redirect {} -> {}", state.route.path(), target.path());
        commands.push(Command::Navigate(target));
    }
}

/// Run a full session check: request it, then answer it with `result`.
/// Returns the commands of the answer.
#[cfg(test)]
pub(crate) fn resolve_session(
    state: &mut AppState,
    result: Result<Option<crate::models::SessionInfo>, crate::network::ApiError>,
) -> Vec<Command> {
    let commands = crate::update::update(state, Message::SessionCheckRequested);
    let request_id = commands
        .iter()
        .find_map(|c| match c {
            Command::CheckSession { request_id } => Some(*request_id),
            _ => None,
        })
        .expect("session check requested");
    crate::update::update(state, Message::SessionResolved { request_id, result })
}
