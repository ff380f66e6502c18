use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct Event {
    pub eid: i64,
    /// `YYYY-MM-DD`
    pub event_date: String,
    /// `HH:MM:SS`
    pub event_time: String,
    pub location: String,
}

/// An event plus how many members signed up for it
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct EventWithCount {
    #[serde(flatten)]
    #[sqlx(flatten)]
    pub event: Event,
    pub count: i64,
}

#[derive(Debug)]
pub struct NewEvent {
    pub event_date: String,
    pub event_time: String,
    pub location: String,
}

/// Optional filters for listing events; `None` means "any"
#[derive(Debug, Default, PartialEq, Eq)]
pub struct EventFilter {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
}
