pub mod login;
pub mod token;
