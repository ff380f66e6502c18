pub mod core;
pub mod handlers;
pub mod models;
pub mod store;
pub mod utils;
pub mod validation;
