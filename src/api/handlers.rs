use crate::api::errors::{storage_error, ApiError};
use crate::constants::DEFAULT_MEETING_TYPE;
use crate::db::{Database, Meeting, MeetingRecord, MeetingRepository};
use axum::http::StatusCode;
use axum::{
    extract::{Extension, Path},
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Request payload shared by create and update. Every key is optional at the
/// deserialization level so the handler can report exactly which required key
/// is missing instead of failing in the extractor.
#[derive(Debug, Deserialize)]
pub struct MeetingPayload {
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<String>,
}

impl MeetingPayload {
    /// Presence check for `title`, `date` and `time`. A missing `type` falls
    /// back to "General" and a missing `description` stays NULL, on update as
    /// well as on create.
    fn into_record(self) -> Result<MeetingRecord, ApiError> {
        let title = self.title.ok_or(ApiError::MissingField("title"))?;
        let date = self.date.ok_or(ApiError::MissingField("date"))?;
        let time = self.time.ok_or(ApiError::MissingField("time"))?;

        Ok(MeetingRecord {
            title,
            date,
            time,
            description: self.description,
            kind: self
                .kind
                .unwrap_or_else(|| DEFAULT_MEETING_TYPE.to_string()),
        })
    }
}

/// Response payload after successfully creating a meeting
#[derive(Serialize)]
pub struct CreateMeetingResponse {
    pub id: i32,
}

/// Confirmation body returned by update and delete
#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// Creates a new meeting record
///
/// # Returns
///
/// * 201 with the assigned id, or 400 when a required field is missing or
///   the storage layer fails
#[axum::debug_handler]
pub async fn create_meeting(
    Extension(database): Extension<Database>,
    Json(payload): Json<MeetingPayload>,
) -> Result<(StatusCode, Json<CreateMeetingResponse>), ApiError> {
    let record = payload.into_record()?;

    let mut conn = database.get_conn().map_err(storage_error)?;
    let mut repo = MeetingRepository::new(&mut conn);

    let id = repo.insert_meeting(&record).map_err(storage_error)?;
    debug!("created meeting {id}");

    Ok((StatusCode::CREATED, Json(CreateMeetingResponse { id })))
}

/// Retrieves all meeting records, possibly an empty array
#[axum::debug_handler]
pub async fn list_meetings(
    Extension(database): Extension<Database>,
) -> Result<Json<Vec<Meeting>>, ApiError> {
    let mut conn = database.get_conn().map_err(storage_error)?;
    let mut repo = MeetingRepository::new(&mut conn);

    let meetings = repo.list_meetings().map_err(storage_error)?;

    Ok(Json(meetings))
}

/// Overwrites every mutable field of the meeting at `id`
///
/// A non-existent id matches zero rows and still returns 200, mirroring the
/// repository's silent no-op semantics.
#[axum::debug_handler]
pub async fn update_meeting(
    Path(id): Path<i32>,
    Extension(database): Extension<Database>,
    Json(payload): Json<MeetingPayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let record = payload.into_record()?;

    let mut conn = database.get_conn().map_err(storage_error)?;
    let mut repo = MeetingRepository::new(&mut conn);

    let affected = repo.update_meeting(id, &record).map_err(storage_error)?;
    if affected == 0 {
        debug!("update for meeting {id} matched no rows");
    }

    Ok(Json(MessageResponse {
        message: "Meeting updated",
    }))
}

/// Deletes the meeting at `id`, returning 200 whether or not a row matched
#[axum::debug_handler]
pub async fn delete_meeting(
    Path(id): Path<i32>,
    Extension(database): Extension<Database>,
) -> Result<Json<MessageResponse>, ApiError> {
    let mut conn = database.get_conn().map_err(storage_error)?;
    let mut repo = MeetingRepository::new(&mut conn);

    let affected = repo.delete_meeting(id).map_err(storage_error)?;
    if affected == 0 {
        debug!("delete for meeting {id} matched no rows");
    }

    Ok(Json(MessageResponse {
        message: "Meeting deleted",
    }))
}
