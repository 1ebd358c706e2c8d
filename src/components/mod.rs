pub mod cards;
pub mod fields;
pub mod login_form;
pub mod register_form;
pub mod sidebar;
