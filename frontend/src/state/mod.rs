pub mod auth;
pub mod collection;
pub mod message;
pub mod toast;
