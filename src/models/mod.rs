pub mod api;
pub mod event;
pub mod sign_up;
pub mod user;
