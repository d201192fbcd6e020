//! Class meeting entity model and DTOs.
//!
//! A meeting is one weekly recurring time slot (room, instructor, day,
//! start/end) belonging to an enrollment record. Every create and update
//! runs the schedule-conflict validator in `MeetingRepo` before
//! persisting; there is no bypass path.

use chrono::NaiveTime;
use registrar_core::types::DbId;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Meeting {
    pub id: DbId,
    pub record_id: DbId,
    pub room_id: DbId,
    pub professor_id: DbId,
    /// 1 (Monday) .. 7 (Sunday).
    pub day: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Deserialize)]
pub struct CreateMeeting {
    /// Overridden from the URL path when created via
    /// `POST /records/{id}/meetings`.
    #[serde(default)]
    pub record_id: Option<DbId>,
    pub room_id: DbId,
    pub professor_id: DbId,
    pub day: i16,
    pub start_time: NaiveTime,
    pub end_time: NaiveTime,
}

#[derive(Debug, Default, Deserialize)]
pub struct UpdateMeeting {
    pub room_id: Option<DbId>,
    pub professor_id: Option<DbId>,
    pub day: Option<i16>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
}

/// A possibly-partial meeting candidate for dry-run conflict checks
/// (`POST /meetings/validate`). Any absent field means the candidate is
/// still being assembled and the check is skipped with success.
#[derive(Debug, Default, Deserialize)]
pub struct MeetingDraftRequest {
    pub room_id: Option<DbId>,
    pub professor_id: Option<DbId>,
    pub day: Option<i16>,
    pub start_time: Option<NaiveTime>,
    pub end_time: Option<NaiveTime>,
    /// For updates: the meeting being edited, so the candidate does not
    /// conflict with its own stored state.
    pub exclude_id: Option<DbId>,
}
