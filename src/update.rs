// src/update.rs
//
// Central update function.  Domain reducers get the first look at every
// message.  Page loads and the auth guard run last so any message that
// changed the route or the session gets a fresh look.
//
use crate::messages::{Command, Message};
use crate::reducers;
use crate::state::AppState;

pub fn update(state: &mut AppState, msg: Message) -> Vec<Command> {
    let mut commands = Vec::new();

    let handled = reducers::navigation::update(state, &msg, &mut commands)
        || reducers::auth::update(state, &msg, &mut commands)
        || reducers::register::update(state, &msg, &mut commands)
        || reducers::login::update(state, &msg, &mut commands)
        || reducers::subjects::update(state, &msg, &mut commands);

    if !handled {
        crate::warn_log!("Unhandled message: {:?}", msg);
    }

    reducers::subjects::ensure_loaded(state, &mut commands);
    reducers::auth::enforce_guard(state, &mut commands);
    commands
}
