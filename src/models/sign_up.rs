use serde::Serialize;

/// Links a user to an event
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct SignUp {
    pub uid: i64,
    pub eid: i64,
    /// Set by an admin after the event; false until then
    pub attendance: bool,
}
