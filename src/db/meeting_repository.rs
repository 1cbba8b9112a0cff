use crate::db::models::{Meeting, MeetingRecord};
use crate::errors::Error;
use diesel::prelude::*;
use diesel::sqlite::SqliteConnection;

/// Repository for managing meeting records in the SQLite database
pub struct MeetingRepository<'a> {
    /// Database connection
    pub conn: &'a mut SqliteConnection,
}

impl<'a> MeetingRepository<'a> {
    pub fn new(conn: &'a mut SqliteConnection) -> Self {
        MeetingRepository { conn }
    }

    /// Inserts a new meeting row and returns the id the database assigned
    ///
    /// # Errors
    ///
    /// Returns an Error if database operations fail
    pub fn insert_meeting(&mut self, record: &MeetingRecord) -> Result<i32, Error> {
        use crate::schema::meetings;

        let assigned_id = diesel::insert_into(meetings::table)
            .values(record)
            .returning(meetings::id)
            .get_result::<i32>(self.conn)?;

        Ok(assigned_id)
    }

    /// Retrieves all meetings in natural row order, no explicit sort
    pub fn list_meetings(&mut self) -> Result<Vec<Meeting>, Error> {
        use crate::schema::meetings::dsl::*;

        let found_meetings = meetings.load::<Meeting>(self.conn)?;

        Ok(found_meetings)
    }

    /// Overwrites every mutable field of the meeting matching `meeting_id`
    ///
    /// # Returns
    ///
    /// The number of rows affected. A missing id is not an error, it simply
    /// matches zero rows.
    pub fn update_meeting(
        &mut self,
        meeting_id: i32,
        record: &MeetingRecord,
    ) -> Result<usize, Error> {
        use crate::schema::meetings::dsl::*;

        let affected = diesel::update(meetings.filter(id.eq(meeting_id)))
            .set(record)
            .execute(self.conn)?;

        Ok(affected)
    }

    /// Hard-deletes the meeting matching `meeting_id`
    ///
    /// # Returns
    ///
    /// The number of rows affected, zero when no row matched.
    pub fn delete_meeting(&mut self, meeting_id: i32) -> Result<usize, Error> {
        use crate::schema::meetings::dsl::*;

        let affected = diesel::delete(meetings.filter(id.eq(meeting_id))).execute(self.conn)?;

        Ok(affected)
    }
}
