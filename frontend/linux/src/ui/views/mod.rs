//! Views for the RollCall frontend

pub mod login;

pub use login::{LoginMessage, LoginView};
