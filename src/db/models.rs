use crate::schema::meetings;
use diesel::{AsChangeset, Identifiable, Insertable, Queryable};
use serde::{Deserialize, Serialize};

/// A meeting row as stored in the database and returned by the list endpoint
#[derive(Debug, Clone, Serialize, Deserialize, Queryable, Identifiable)]
#[diesel(table_name = meetings)]
pub struct Meeting {
    /// Unique identifier assigned by the database, immutable once set
    pub id: i32,
    /// Title of the meeting
    pub title: String,
    /// Date of the meeting, expected `YYYY-MM-DD`, not validated
    pub date: String,
    /// Time of the meeting, expected `HH:MM`, not validated
    pub time: String,
    /// Optional free-form description
    pub description: Option<String>,
    /// Meeting category, `"General"` unless the client supplied one
    #[serde(rename = "type")]
    pub kind: String,
}

/// The five mutable fields of a meeting. Used both as the insert payload and
/// as the update changeset; `treat_none_as_null` makes an update overwrite a
/// stored description with NULL when the client omitted it, the same full
/// rewrite the insert performs.
#[derive(Debug, Clone, Insertable, AsChangeset)]
#[diesel(table_name = meetings)]
#[diesel(treat_none_as_null = true)]
pub struct MeetingRecord {
    pub title: String,
    pub date: String,
    pub time: String,
    pub description: Option<String>,
    pub kind: String,
}
