use serde::Serialize;

/// A club member as returned by the API.
///
/// The password hash is never selected into this type.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, sqlx::FromRow)]
pub struct User {
    pub uid: i64,
    pub fname: String,
    pub lname: String,
    /// Skill level (1-3 in practice, not enforced)
    pub user_level: i64,
    /// Events signed up for but not attended
    pub noshow_count: i64,
}

/// A validated registration ready to be stored
#[derive(Debug)]
pub struct NewUser {
    pub fname: String,
    pub lname: String,
    pub user_level: i64,
    /// Argon2id PHC string
    pub password_hash: String,
}

/// Columns `GET /users` may sort by
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum UserColumn {
    #[default]
    Uid,
    Fname,
    Lname,
    UserLevel,
    NoshowCount,
}

impl UserColumn {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "uid" => Some(Self::Uid),
            "fname" => Some(Self::Fname),
            "lname" => Some(Self::Lname),
            "user_level" => Some(Self::UserLevel),
            "noshow_count" => Some(Self::NoshowCount),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Uid => "uid",
            Self::Fname => "fname",
            Self::Lname => "lname",
            Self::UserLevel => "user_level",
            Self::NoshowCount => "noshow_count",
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ASC" => Some(Self::Asc),
            "DESC" => Some(Self::Desc),
            _ => None,
        }
    }

    pub fn as_sql(self) -> &'static str {
        match self {
            Self::Asc => "ASC",
            Self::Desc => "DESC",
        }
    }
}
