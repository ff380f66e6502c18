use crate::core::error::ApiError;
use crate::models::api::{
    AttendanceBody, EventsAroundQuery, EventsQuery, NewEventBody, NewSignUpBody, NewUserBody,
    SignUpKeyQuery, SignUpsQuery, UsersQuery,
};
use crate::models::event::{EventFilter, NewEvent};
use crate::models::user::{SortDirection, UserColumn};
use serde_json::Value;

/// Longest accepted name, password or location, in characters
pub const MAX_TEXT_LEN: usize = 255;

/// Turns a raw, loosely typed request into its checked form.
pub trait Validate {
    type Output;

    fn validate(self) -> Result<Self::Output, ApiError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserOrdering {
    pub column: UserColumn,
    pub direction: SortDirection,
}

/// A registration whose fields passed validation; the password is still plain
#[derive(Debug, PartialEq, Eq)]
pub struct ValidatedNewUser {
    pub fname: String,
    pub lname: String,
    pub level: i64,
    pub password: String,
}

/// A point in time to split events around
#[derive(Debug, PartialEq, Eq)]
pub struct Moment {
    pub date: String,
    pub time: String,
}

/// Sign-up list filter; 0 means "any"
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpFilter {
    pub uid: i64,
    pub eid: i64,
}

/// Identifies one sign-up
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignUpKey {
    pub uid: i64,
    pub eid: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttendanceUpdate {
    pub uid: i64,
    pub eid: i64,
    pub attendance: bool,
}

// Field rules

/// `YYYY-MM-DD` shape: 10 characters, has a `-`, no `;`
pub fn is_valid_date(date: &str) -> bool {
    date.chars().count() == 10 && date.contains('-') && !date.contains(';')
}

/// `HH:MM:SS` shape: 8 characters, has a `:`, no `;`
pub fn is_valid_time(time: &str) -> bool {
    time.chars().count() == 8 && time.contains(':') && !time.contains(';')
}

pub fn is_valid_location(location: &str) -> bool {
    location.chars().count() <= MAX_TEXT_LEN && !location.contains(';')
}

pub fn is_valid_name(name: &str) -> bool {
    !name.is_empty() && name.chars().count() <= MAX_TEXT_LEN && !name.contains(':')
}

pub fn is_valid_password(password: &str) -> bool {
    !password.is_empty() && password.chars().count() <= MAX_TEXT_LEN && !password.contains(';')
}

/// Base-10 integer, surrounding whitespace allowed
///
/// The whole string must be a number: `"12abc"` is rejected, not read as 12.
pub fn parse_int(value: &str) -> Option<i64> {
    value.trim().parse().ok()
}

/// Integer from a JSON number or a numeric string
pub fn json_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => parse_int(s),
        _ => None,
    }
}

/// Boolean from a JSON bool or the strings "true"/"false"
pub fn json_bool(value: &Value) -> Option<bool> {
    match value {
        Value::Bool(b) => Some(*b),
        Value::String(s) => match s.trim() {
            "true" => Some(true),
            "false" => Some(false),
            _ => None,
        },
        _ => None,
    }
}

/// Positive id, as required by path parameters and deletes
pub fn parse_id(value: &str) -> Option<i64> {
    parse_int(value).filter(|id| *id > 0)
}

fn json_str(value: Option<&Value>) -> Option<&str> {
    value.and_then(Value::as_str)
}

/// Query filters treat a missing value and an empty string alike
fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.is_empty())
}

fn check(ok: bool, message: &str) -> Result<(), ApiError> {
    if ok {
        Ok(())
    } else {
        Err(ApiError::validation(message))
    }
}

// Request validation

impl Validate for UsersQuery {
    type Output = UserOrdering;

    fn validate(self) -> Result<UserOrdering, ApiError> {
        let column = match non_empty(self.column) {
            Some(name) => UserColumn::parse(&name),
            None => Some(UserColumn::default()),
        };
        let direction = match non_empty(self.direction) {
            Some(name) => SortDirection::parse(&name),
            None => Some(SortDirection::default()),
        };

        match (column, direction) {
            (Some(column), Some(direction)) => Ok(UserOrdering { column, direction }),
            _ => Err(ApiError::validation("Invalid Column or Direction")),
        }
    }
}

impl Validate for EventsQuery {
    type Output = EventFilter;

    fn validate(self) -> Result<EventFilter, ApiError> {
        let date = non_empty(self.date);
        let time = non_empty(self.time);
        let location = non_empty(self.location);

        if let Some(date) = &date {
            check(is_valid_date(date), "Invalid Date")?;
        }
        if let Some(time) = &time {
            check(is_valid_time(time), "Invalid Time")?;
        }
        if let Some(location) = &location {
            check(is_valid_location(location), "Invalid location")?;
        }

        Ok(EventFilter { date, time, location })
    }
}

impl Validate for EventsAroundQuery {
    type Output = Moment;

    fn validate(self) -> Result<Moment, ApiError> {
        let date = non_empty(self.event_date).unwrap_or_default();
        check(is_valid_date(&date), "Invalid Date")?;

        let time = non_empty(self.event_time).unwrap_or_default();
        check(is_valid_time(&time), "Invalid Time")?;

        Ok(Moment { date, time })
    }
}

impl Validate for SignUpsQuery {
    type Output = SignUpFilter;

    fn validate(self) -> Result<SignUpFilter, ApiError> {
        let eid = match non_empty(self.eid) {
            Some(raw) => parse_int(&raw).ok_or_else(|| ApiError::validation("Invalid Event ID"))?,
            None => 0,
        };
        let uid = match non_empty(self.uid) {
            Some(raw) => parse_int(&raw).ok_or_else(|| ApiError::validation("Invalid User ID"))?,
            None => 0,
        };

        Ok(SignUpFilter { uid, eid })
    }
}

impl Validate for SignUpKeyQuery {
    type Output = SignUpKey;

    fn validate(self) -> Result<SignUpKey, ApiError> {
        let uid = self
            .uid
            .as_deref()
            .and_then(parse_id)
            .ok_or_else(|| ApiError::validation("Invalid user ID"))?;
        let eid = self
            .eid
            .as_deref()
            .and_then(parse_id)
            .ok_or_else(|| ApiError::validation("Invalid event ID"))?;

        Ok(SignUpKey { uid, eid })
    }
}

impl Validate for NewUserBody {
    type Output = ValidatedNewUser;

    fn validate(self) -> Result<ValidatedNewUser, ApiError> {
        let fname = json_str(self.fname.as_ref()).filter(|s| is_valid_name(s));
        let fname = fname.ok_or_else(|| ApiError::validation("Invalid fname"))?;

        let lname = json_str(self.lname.as_ref()).filter(|s| is_valid_name(s));
        let lname = lname.ok_or_else(|| ApiError::validation("Invalid lname"))?;

        let level = self
            .level
            .as_ref()
            .and_then(json_int)
            .ok_or_else(|| ApiError::validation("Invalid level"))?;

        let password = json_str(self.password.as_ref()).filter(|s| is_valid_password(s));
        let password = password.ok_or_else(|| ApiError::validation("Invalid password"))?;

        Ok(ValidatedNewUser {
            fname: fname.to_string(),
            lname: lname.to_string(),
            level,
            password: password.to_string(),
        })
    }
}

impl Validate for NewEventBody {
    type Output = NewEvent;

    fn validate(self) -> Result<NewEvent, ApiError> {
        let date = json_str(self.date.as_ref()).filter(|s| is_valid_date(s));
        let date = date.ok_or_else(|| ApiError::validation("Invalid Date"))?;

        let time = json_str(self.time.as_ref()).filter(|s| is_valid_time(s));
        let time = time.ok_or_else(|| ApiError::validation("Invalid Time"))?;

        let location = json_str(self.location.as_ref())
            .filter(|s| !s.is_empty() && is_valid_location(s));
        let location = location.ok_or_else(|| ApiError::validation("Invalid location"))?;

        Ok(NewEvent {
            event_date: date.to_string(),
            event_time: time.to_string(),
            location: location.to_string(),
        })
    }
}

impl Validate for NewSignUpBody {
    type Output = SignUpKey;

    fn validate(self) -> Result<SignUpKey, ApiError> {
        let uid = self
            .uid
            .as_ref()
            .and_then(json_int)
            .ok_or_else(|| ApiError::validation("Invalid uid"))?;
        let eid = self
            .eid
            .as_ref()
            .and_then(json_int)
            .ok_or_else(|| ApiError::validation("Invalid eid"))?;

        Ok(SignUpKey { uid, eid })
    }
}

impl Validate for AttendanceBody {
    type Output = AttendanceUpdate;

    fn validate(self) -> Result<AttendanceUpdate, ApiError> {
        let uid = self
            .uid
            .as_ref()
            .and_then(json_int)
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::validation("Invalid uid"))?;
        let eid = self
            .eid
            .as_ref()
            .and_then(json_int)
            .filter(|id| *id > 0)
            .ok_or_else(|| ApiError::validation("Invalid eid"))?;
        let attendance = self
            .attendance
            .as_ref()
            .and_then(json_bool)
            .ok_or_else(|| ApiError::validation("Invalid attendance"))?;

        Ok(AttendanceUpdate { uid, eid, attendance })
    }
}
