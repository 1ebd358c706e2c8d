pub mod auth;
pub mod login;
pub mod navigation;
pub mod register;
pub mod subjects;
