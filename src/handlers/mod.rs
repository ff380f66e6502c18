pub mod events;
pub mod fallback;
pub mod health;
pub mod sign_ups;
pub mod users;
