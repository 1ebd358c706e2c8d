//! Route changes and page-scoped state teardown.

use crate::messages::{Command, Message};
use crate::router::Route;
use crate::state::{AppState, LoginFormState, RegisterFormState, SubjectsState};

pub fn update(state: &mut AppState, msg: &Message, commands: &mut Vec<Command>) -> bool {
    match msg {
        Message::RouteChanged(route) => {
            let route = *route;
            if route != state.route {
                crate::debug_log!("Route {} -> {}", state.route.path(), route.path());
                let left = state.route;
                unmount(state, left);
                state.route = route;
                state.guard.reset();
            }
            commands.push(Command::Render);
            true
        }
        Message::NavigateTo(route) => {
            commands.push(Command::Navigate(*route));
            true
        }
        Message::AuthTabSelected(tab) => {
            state.auth_tab = *tab;
            commands.push(Command::Render);
            true
        }
        Message::ToggleSidebar => {
            state.sidebar_collapsed = !state.sidebar_collapsed;
            commands.push(Command::Render);
            true
        }
        _ => false,
    }
}

/// Page-scoped state does not outlive its page.  Clearing the pending ids
/// also makes late responses for this page land on nothing.
fn unmount(state: &mut AppState, left: Route) {
    match left {
        Route::Login => {
            state.register = RegisterFormState::default();
            state.login = LoginFormState::default();
        }
        Route::Home => {
            state.subjects = SubjectsState::default();
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::update::update;

    #[test]
    fn route_change_renders_new_page() {
        let mut state = AppState::new();
        let commands = update(&mut state, Message::RouteChanged(Route::Calendar));
        assert_eq!(state.route, Route::Calendar);
        assert!(commands.contains(&Command::Render));
    }

    #[test]
    fn leaving_home_drops_subjects() {
        let mut state = AppState::new();
        update(&mut state, Message::RouteChanged(Route::Home));
        state.subjects.subjects = vec!["Biology".to_string()];
        state.subjects.requested = true;

        update(&mut state, Message::RouteChanged(Route::Login));
        assert!(state.subjects.subjects.is_empty());
        assert!(!state.subjects.requested);
    }

    #[test]
    fn leaving_login_resets_forms() {
        let mut state = AppState::new();
        state.register.busy = true;
        state.register.input.full_name = "Half typed".to_string();
        state.login.input.email = "x@y.z".to_string();

        update(&mut state, Message::RouteChanged(Route::Admin));

        assert!(!state.register.busy);
        assert!(state.register.input.full_name.is_empty());
        assert!(state.login.input.email.is_empty());
    }

    #[test]
    fn same_route_only_rerenders() {
        let mut state = AppState::new();
        state.login.input.email = "keep@me.io".to_string();
        let commands = update(&mut state, Message::RouteChanged(Route::Login));
        assert_eq!(commands, vec![Command::Render]);
        assert_eq!(state.login.input.email, "keep@me.io");
    }

    #[test]
    fn link_click_goes_through_history() {
        let mut state = AppState::new();
        let commands = update(&mut state, Message::NavigateTo(Route::Subjects));
        assert_eq!(commands, vec![Command::Navigate(Route::Subjects)]);
        assert_eq!(state.route, Route::Login);
    }

    #[test]
    fn sidebar_toggles() {
        let mut state = AppState::new();
        update(&mut state, Message::ToggleSidebar);
        assert!(state.sidebar_collapsed);
        update(&mut state, Message::ToggleSidebar);
        assert!(!state.sidebar_collapsed);
    }
}
