//! Raw request shapes and shared response bodies
//!
//! Every request field is optional and loosely typed so deserialization
//! never fails on shape; `crate::validation` turns these into typed values
//! or a 400.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// GET /users?direction=<ASC|DESC>&column=<name>
#[derive(Debug, Default, Deserialize)]
pub struct UsersQuery {
    pub direction: Option<String>,
    pub column: Option<String>,
}

/// GET /events?date=<YYYY-MM-DD>&time=<HH:MM:SS>&location=<text>
#[derive(Debug, Default, Deserialize)]
pub struct EventsQuery {
    pub date: Option<String>,
    pub time: Option<String>,
    pub location: Option<String>,
}

/// GET /events/upcoming-and-past?event_date=<YYYY-MM-DD>&event_time=<HH:MM:SS>
#[derive(Debug, Default, Deserialize)]
pub struct EventsAroundQuery {
    pub event_date: Option<String>,
    pub event_time: Option<String>,
}

/// GET /sign-ups?uid=<int>&eid=<int>
#[derive(Debug, Default, Deserialize)]
pub struct SignUpsQuery {
    pub uid: Option<String>,
    pub eid: Option<String>,
}

/// DELETE /sign-ups?uid=<int>&eid=<int>
#[derive(Debug, Default, Deserialize)]
pub struct SignUpKeyQuery {
    pub uid: Option<String>,
    pub eid: Option<String>,
}

/// POST /users
#[derive(Debug, Default, Deserialize)]
pub struct NewUserBody {
    pub fname: Option<Value>,
    pub lname: Option<Value>,
    pub level: Option<Value>,
    pub password: Option<Value>,
}

/// POST /events
#[derive(Debug, Default, Deserialize)]
pub struct NewEventBody {
    pub location: Option<Value>,
    pub date: Option<Value>,
    pub time: Option<Value>,
}

/// POST /sign-ups
#[derive(Debug, Default, Deserialize)]
pub struct NewSignUpBody {
    pub uid: Option<Value>,
    pub eid: Option<Value>,
}

/// PATCH /sign-ups
#[derive(Debug, Default, Deserialize)]
pub struct AttendanceBody {
    pub uid: Option<Value>,
    pub eid: Option<Value>,
    pub attendance: Option<Value>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}
