//! Repository for the `meetings` table and the schedule-conflict write path.
//!
//! Every create and update runs the conflict check inside its own
//! transaction, after taking advisory locks keyed by (room, day) and
//! (professor, day). Two concurrent writers targeting the same room or
//! instructor on the same day therefore serialize on the lock and the
//! second one sees the first one's committed row in its overlap query;
//! check-then-persist cannot race.

use chrono::NaiveTime;
use registrar_core::schedule::{
    evaluate, ConflictingMeeting, MeetingDraft, ScheduleConflict, Weekday,
};
use registrar_core::types::DbId;
use sqlx::{FromRow, PgConnection, PgPool};

use crate::models::meeting::{CreateMeeting, Meeting, UpdateMeeting};

const COLUMNS: &str = "id, record_id, room_id, professor_id, day, start_time, end_time";

/// Why a meeting write was rejected.
#[derive(Debug, thiserror::Error)]
pub enum MeetingWriteError {
    /// The candidate overlaps a stored meeting in the same room or under
    /// the same instructor. Surfaced to the operator verbatim.
    #[error(transparent)]
    Conflict(#[from] ScheduleConflict),

    /// The candidate itself is malformed (bad day, start >= end, ...).
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error(transparent)]
    Database(#[from] sqlx::Error),
}

/// Advisory lock namespaces for the two non-overlap invariants.
const ROOM_LOCK_NS: i64 = 1;
const PROFESSOR_LOCK_NS: i64 = 2;

/// Derive a `pg_advisory_xact_lock` key for one (entity, day) slot.
///
/// A key collision between unrelated slots only serializes their writers;
/// it can never let two writers of the same slot proceed concurrently.
fn slot_lock_key(namespace: i64, id: DbId, day: Weekday) -> i64 {
    (namespace << 56) ^ (id << 3) ^ i64::from(day.as_i16())
}

/// Row shape shared by the two overlap queries.
#[derive(Debug, FromRow)]
struct OverlapRow {
    id: DbId,
    room_id: DbId,
    professor_id: DbId,
    day: i16,
    start_time: NaiveTime,
    end_time: NaiveTime,
}

impl From<OverlapRow> for ConflictingMeeting {
    fn from(row: OverlapRow) -> Self {
        Self {
            meeting_id: row.id,
            room_id: row.room_id,
            professor_id: row.professor_id,
            day: row.day,
            start_time: row.start_time,
            end_time: row.end_time,
        }
    }
}

/// Which invariant an overlap query is checking.
#[derive(Clone, Copy)]
enum OverlapKind {
    Room,
    Professor,
}

/// Provides CRUD operations for class meetings. All writes are
/// conflict-validated; there is no bypass path.
pub struct MeetingRepo;

impl MeetingRepo {
    /// Create a meeting after passing the conflict check.
    ///
    /// `input.record_id` must be present (handlers set it from the URL
    /// path); the remaining fields are required by the DTO.
    pub async fn create(pool: &PgPool, input: &CreateMeeting) -> Result<Meeting, MeetingWriteError> {
        let record_id = input
            .record_id
            .ok_or_else(|| MeetingWriteError::Validation("record_id is required".into()))?;
        let day = parse_day(input.day)?;
        check_time_order(input.start_time, input.end_time)?;

        let mut tx = pool.begin().await?;
        Self::lock_slots(&mut tx, input.room_id, input.professor_id, day).await?;
        Self::check_conflicts(
            &mut tx,
            input.room_id,
            input.professor_id,
            day,
            input.start_time,
            input.end_time,
            None,
        )
        .await?;

        let query = format!(
            "INSERT INTO meetings (record_id, room_id, professor_id, day, start_time, end_time)
             VALUES ($1, $2, $3, $4, $5, $6)
             RETURNING {COLUMNS}"
        );
        let meeting = sqlx::query_as::<_, Meeting>(&query)
            .bind(record_id)
            .bind(input.room_id)
            .bind(input.professor_id)
            .bind(day.as_i16())
            .bind(input.start_time)
            .bind(input.end_time)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(meeting)
    }

    /// Update a meeting after passing the conflict check against the
    /// merged (stored + patch) candidate, excluding the meeting's own row.
    ///
    /// Returns `None` if no meeting with the given `id` exists.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateMeeting,
    ) -> Result<Option<Meeting>, MeetingWriteError> {
        let mut tx = pool.begin().await?;

        // Row lock so a concurrent update of the same meeting serializes here.
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1 FOR UPDATE");
        let Some(existing) = sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(&mut *tx)
            .await?
        else {
            return Ok(None);
        };

        let room_id = input.room_id.unwrap_or(existing.room_id);
        let professor_id = input.professor_id.unwrap_or(existing.professor_id);
        let day = parse_day(input.day.unwrap_or(existing.day))?;
        let start_time = input.start_time.unwrap_or(existing.start_time);
        let end_time = input.end_time.unwrap_or(existing.end_time);
        check_time_order(start_time, end_time)?;

        Self::lock_slots(&mut tx, room_id, professor_id, day).await?;
        Self::check_conflicts(
            &mut tx,
            room_id,
            professor_id,
            day,
            start_time,
            end_time,
            Some(id),
        )
        .await?;

        let query = format!(
            "UPDATE meetings SET
                room_id = $2, professor_id = $3, day = $4, start_time = $5, end_time = $6
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        let meeting = sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .bind(room_id)
            .bind(professor_id)
            .bind(day.as_i16())
            .bind(start_time)
            .bind(end_time)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(Some(meeting))
    }

    /// Dry-run conflict check for a possibly-partial candidate.
    ///
    /// An incomplete draft is skipped and reported as conflict-free (the
    /// real check runs once the candidate is complete, on the write
    /// path). No locks are taken; this is a read-only preview.
    pub async fn validate_draft(
        pool: &PgPool,
        draft: &MeetingDraft,
        exclude_id: Option<DbId>,
    ) -> Result<Option<ScheduleConflict>, sqlx::Error> {
        let Some(slot) = draft.complete() else {
            return Ok(None);
        };

        let mut conn = pool.acquire().await?;
        let room_conflicts = Self::find_overlaps(
            &mut conn,
            OverlapKind::Room,
            slot.room_id,
            slot.day,
            slot.time.start,
            slot.time.end,
            exclude_id,
        )
        .await?;
        let instructor_conflicts = Self::find_overlaps(
            &mut conn,
            OverlapKind::Professor,
            slot.professor_id,
            slot.day,
            slot.time.start,
            slot.time.end,
            exclude_id,
        )
        .await?;

        Ok(evaluate(&room_conflicts, &instructor_conflicts).err())
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Meeting>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM meetings WHERE id = $1");
        sqlx::query_as::<_, Meeting>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the meetings of a record ordered by day then start time.
    pub async fn list_by_record(pool: &PgPool, record_id: DbId) -> Result<Vec<Meeting>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM meetings WHERE record_id = $1 ORDER BY day, start_time"
        );
        sqlx::query_as::<_, Meeting>(&query)
            .bind(record_id)
            .fetch_all(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM meetings WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Internals
    // -----------------------------------------------------------------------

    /// Take the two advisory transaction locks for the candidate's slots.
    ///
    /// Keys are taken in sorted order so two writers touching the same
    /// pair of slots cannot deadlock.
    async fn lock_slots(
        tx: &mut PgConnection,
        room_id: DbId,
        professor_id: DbId,
        day: Weekday,
    ) -> Result<(), sqlx::Error> {
        let mut keys = [
            slot_lock_key(ROOM_LOCK_NS, room_id, day),
            slot_lock_key(PROFESSOR_LOCK_NS, professor_id, day),
        ];
        keys.sort_unstable();
        for key in keys {
            sqlx::query("SELECT pg_advisory_xact_lock($1)")
                .bind(key)
                .execute(&mut *tx)
                .await?;
        }
        Ok(())
    }

    /// Run both overlap queries and apply the decision rule.
    async fn check_conflicts(
        tx: &mut PgConnection,
        room_id: DbId,
        professor_id: DbId,
        day: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<DbId>,
    ) -> Result<(), MeetingWriteError> {
        let room_conflicts = Self::find_overlaps(
            tx,
            OverlapKind::Room,
            room_id,
            day,
            start_time,
            end_time,
            exclude_id,
        )
        .await?;
        let instructor_conflicts = Self::find_overlaps(
            tx,
            OverlapKind::Professor,
            professor_id,
            day,
            start_time,
            end_time,
            exclude_id,
        )
        .await?;

        evaluate(&room_conflicts, &instructor_conflicts)?;
        Ok(())
    }

    /// Stored meetings sharing the key column and day whose time range
    /// overlaps `[start_time, end_time)`, excluding `exclude_id` if given.
    async fn find_overlaps(
        conn: &mut PgConnection,
        kind: OverlapKind,
        key_id: DbId,
        day: Weekday,
        start_time: NaiveTime,
        end_time: NaiveTime,
        exclude_id: Option<DbId>,
    ) -> Result<Vec<ConflictingMeeting>, sqlx::Error> {
        let query = match kind {
            OverlapKind::Room => {
                "SELECT id, room_id, professor_id, day, start_time, end_time FROM meetings
                 WHERE room_id = $1 AND day = $2
                   AND start_time < $3 AND end_time > $4
                   AND ($5::bigint IS NULL OR id <> $5)
                 ORDER BY start_time"
            }
            OverlapKind::Professor => {
                "SELECT id, room_id, professor_id, day, start_time, end_time FROM meetings
                 WHERE professor_id = $1 AND day = $2
                   AND start_time < $3 AND end_time > $4
                   AND ($5::bigint IS NULL OR id <> $5)
                 ORDER BY start_time"
            }
        };
        let rows = sqlx::query_as::<_, OverlapRow>(query)
            .bind(key_id)
            .bind(day.as_i16())
            .bind(end_time)
            .bind(start_time)
            .bind(exclude_id)
            .fetch_all(conn)
            .await?;
        Ok(rows.into_iter().map(ConflictingMeeting::from).collect())
    }
}

fn parse_day(day: i16) -> Result<Weekday, MeetingWriteError> {
    Weekday::from_i16(day).ok_or_else(|| {
        MeetingWriteError::Validation(format!("day must be 1 (Monday) to 7 (Sunday), got {day}"))
    })
}

fn check_time_order(start: NaiveTime, end: NaiveTime) -> Result<(), MeetingWriteError> {
    if start < end {
        Ok(())
    } else {
        Err(MeetingWriteError::Validation(
            "start_time must be before end_time".into(),
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lock_keys_distinguish_namespaces() {
        // Same id/day in the two namespaces must not collide, or a room
        // writer and an unrelated professor writer would serialize.
        let room = slot_lock_key(ROOM_LOCK_NS, 42, Weekday::Monday);
        let professor = slot_lock_key(PROFESSOR_LOCK_NS, 42, Weekday::Monday);
        assert_ne!(room, professor);
    }

    #[test]
    fn lock_keys_distinguish_days() {
        let monday = slot_lock_key(ROOM_LOCK_NS, 42, Weekday::Monday);
        let tuesday = slot_lock_key(ROOM_LOCK_NS, 42, Weekday::Tuesday);
        assert_ne!(monday, tuesday);
    }

    #[test]
    fn parse_day_bounds() {
        assert!(parse_day(1).is_ok());
        assert!(parse_day(7).is_ok());
        assert!(parse_day(0).is_err());
        assert!(parse_day(8).is_err());
    }
}
